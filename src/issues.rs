use crate::common::{Fields, OptField};
use serde_json::{Map, Value};
use std::fmt;

/// A Github issue. Pull requests share this shape in list responses, so
/// the pull request operations return `Issue` wrappers as well.
#[derive(Clone, Debug)]
pub struct Issue {
    fields: Fields,
}

impl Issue {
    pub fn wrap(raw: Option<Value>) -> Self {
        Self {
            fields: Fields::wrap(raw),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.fields.int_field("id")
    }

    pub fn number(&self) -> Option<i64> {
        self.fields.int_field("number")
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.str_field("title")
    }

    pub fn body(&self) -> Option<&str> {
        self.fields.str_field("body")
    }

    pub fn state(&self) -> Option<&str> {
        self.fields.str_field("state")
    }

    /// The raw `user` object of the author, when present.
    pub fn user(&self) -> Option<&Map<String, Value>> {
        self.fields.object_field("user")
    }

    pub fn user_login(&self) -> Option<&str> {
        self.fields.nested_str("user", "login")
    }

    pub fn html_url(&self) -> Option<&str> {
        self.fields.str_field("html_url")
    }

    pub fn created_at(&self) -> Option<&str> {
        self.fields.str_field("created_at")
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.fields.str_field("updated_at")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        self.fields.as_inner()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Issue(title={}, state={}, user={})",
            OptField(self.title()),
            OptField(self.state()),
            OptField(self.user_login())
        )
    }
}

/// An issue label.
#[derive(Clone, Debug)]
pub struct Label {
    fields: Fields,
}

impl Label {
    pub fn wrap(raw: Option<Value>) -> Self {
        Self {
            fields: Fields::wrap(raw),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.fields.int_field("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.str_field("name")
    }

    pub fn color(&self) -> Option<&str> {
        self.fields.str_field("color")
    }

    pub fn description(&self) -> Option<&str> {
        self.fields.str_field("description")
    }

    pub fn default(&self) -> Option<bool> {
        self.fields.bool_field("default")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        self.fields.as_inner()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label(name={})", OptField(self.name()))
    }
}

/// An issue milestone.
#[derive(Clone, Debug)]
pub struct Milestone {
    fields: Fields,
}

impl Milestone {
    pub fn wrap(raw: Option<Value>) -> Self {
        Self {
            fields: Fields::wrap(raw),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.fields.int_field("id")
    }

    pub fn number(&self) -> Option<i64> {
        self.fields.int_field("number")
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.str_field("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.fields.str_field("description")
    }

    pub fn state(&self) -> Option<&str> {
        self.fields.str_field("state")
    }

    pub fn due_on(&self) -> Option<&str> {
        self.fields.str_field("due_on")
    }

    pub fn open_issues(&self) -> Option<i64> {
        self.fields.int_field("open_issues")
    }

    pub fn closed_issues(&self) -> Option<i64> {
        self.fields.int_field("closed_issues")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        self.fields.as_inner()
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Milestone(title={})", OptField(self.title()))
    }
}
