use crate::common::{Fields, OptField};
use serde_json::{Map, Value};
use std::fmt;

/// A Github repository.
#[derive(Clone, Debug)]
pub struct Repository {
    fields: Fields,
}

impl Repository {
    pub fn wrap(raw: Option<Value>) -> Self {
        Self {
            fields: Fields::wrap(raw),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.fields.int_field("id")
    }

    pub fn node_id(&self) -> Option<&str> {
        self.fields.str_field("node_id")
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.str_field("name")
    }

    pub fn full_name(&self) -> Option<&str> {
        self.fields.str_field("full_name")
    }

    /// The raw `owner` object, when present.
    pub fn owner(&self) -> Option<&Map<String, Value>> {
        self.fields.object_field("owner")
    }

    pub fn owner_login(&self) -> Option<&str> {
        self.fields.nested_str("owner", "login")
    }

    pub fn html_url(&self) -> Option<&str> {
        self.fields.str_field("html_url")
    }

    pub fn description(&self) -> Option<&str> {
        self.fields.str_field("description")
    }

    pub fn fork(&self) -> Option<bool> {
        self.fields.bool_field("fork")
    }

    pub fn default_branch(&self) -> Option<&str> {
        self.fields.str_field("default_branch")
    }

    pub fn stargazers_count(&self) -> Option<i64> {
        self.fields.int_field("stargazers_count")
    }

    pub fn watchers_count(&self) -> Option<i64> {
        self.fields.int_field("watchers_count")
    }

    pub fn open_issues_count(&self) -> Option<i64> {
        self.fields.int_field("open_issues_count")
    }

    pub fn size(&self) -> Option<i64> {
        self.fields.int_field("size")
    }

    pub fn archived(&self) -> Option<bool> {
        self.fields.bool_field("archived")
    }

    pub fn visibility(&self) -> Option<&str> {
        self.fields.str_field("visibility")
    }

    pub fn topics(&self) -> Option<&Vec<Value>> {
        self.fields.array_field("topics")
    }

    pub fn homepage(&self) -> Option<&str> {
        self.fields.str_field("homepage")
    }

    pub fn created_at(&self) -> Option<&str> {
        self.fields.str_field("created_at")
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.fields.str_field("updated_at")
    }

    pub fn pushed_at(&self) -> Option<&str> {
        self.fields.str_field("pushed_at")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        self.fields.as_inner()
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository(name={}, owner={})",
            OptField(self.name()),
            OptField(self.owner_login())
        )
    }
}

/// A branch within a repository.
#[derive(Clone, Debug)]
pub struct Branch {
    fields: Fields,
}

impl Branch {
    pub fn wrap(raw: Option<Value>) -> Self {
        Self {
            fields: Fields::wrap(raw),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.str_field("name")
    }

    pub fn protected(&self) -> Option<bool> {
        self.fields.bool_field("protected")
    }

    /// The raw `commit` object the branch head points at.
    pub fn commit(&self) -> Option<&Map<String, Value>> {
        self.fields.object_field("commit")
    }

    pub fn commit_sha(&self) -> Option<&str> {
        self.fields.nested_str("commit", "sha")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        self.fields.as_inner()
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Branch(name={})", OptField(self.name()))
    }
}
