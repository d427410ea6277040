use crate::common::{Fields, OptField};
use serde_json::{Map, Value};
use std::fmt;

/// A repository release.
#[derive(Clone, Debug)]
pub struct Release {
    fields: Fields,
}

impl Release {
    pub fn wrap(raw: Option<Value>) -> Self {
        Self {
            fields: Fields::wrap(raw),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.fields.int_field("id")
    }

    pub fn tag_name(&self) -> Option<&str> {
        self.fields.str_field("tag_name")
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.str_field("name")
    }

    pub fn body(&self) -> Option<&str> {
        self.fields.str_field("body")
    }

    pub fn draft(&self) -> Option<bool> {
        self.fields.bool_field("draft")
    }

    pub fn prerelease(&self) -> Option<bool> {
        self.fields.bool_field("prerelease")
    }

    pub fn published_at(&self) -> Option<&str> {
        self.fields.str_field("published_at")
    }

    pub fn created_at(&self) -> Option<&str> {
        self.fields.str_field("created_at")
    }

    pub fn html_url(&self) -> Option<&str> {
        self.fields.str_field("html_url")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        self.fields.as_inner()
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Release(tag_name={})", OptField(self.tag_name()))
    }
}
