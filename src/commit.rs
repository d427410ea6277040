use crate::common::{Fields, OptField};
use serde_json::{Map, Value};
use std::fmt;

/// A commit as returned by the repository commits endpoints.
#[derive(Clone, Debug)]
pub struct Commit {
    fields: Fields,
}

impl Commit {
    pub fn wrap(raw: Option<Value>) -> Self {
        Self {
            fields: Fields::wrap(raw),
        }
    }

    pub fn sha(&self) -> Option<&str> {
        self.fields.str_field("sha")
    }

    /// The raw git `commit` object (message, author, tree, ...).
    pub fn commit(&self) -> Option<&Map<String, Value>> {
        self.fields.object_field("commit")
    }

    pub fn message(&self) -> Option<&str> {
        self.fields.nested_str("commit", "message")
    }

    /// The raw `author` user object, when Github could resolve one.
    pub fn author(&self) -> Option<&Map<String, Value>> {
        self.fields.object_field("author")
    }

    pub fn committer(&self) -> Option<&Map<String, Value>> {
        self.fields.object_field("committer")
    }

    pub fn url(&self) -> Option<&str> {
        self.fields.str_field("url")
    }

    pub fn html_url(&self) -> Option<&str> {
        self.fields.str_field("html_url")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        self.fields.as_inner()
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commit(sha={})", OptField(self.sha()))
    }
}
