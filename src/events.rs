use crate::common::{Fields, OptField};
use serde_json::{Map, Value};
use std::fmt;

/// An entry from a repository's event feed.
#[derive(Clone, Debug)]
pub struct Event {
    fields: Fields,
}

impl Event {
    pub fn wrap(raw: Option<Value>) -> Self {
        Self {
            fields: Fields::wrap(raw),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.fields.str_field("id")
    }

    /// The event's `type` field, e.g. `PushEvent`.
    pub fn event_type(&self) -> Option<&str> {
        self.fields.str_field("type")
    }

    /// The raw `actor` object, when present.
    pub fn actor(&self) -> Option<&Map<String, Value>> {
        self.fields.object_field("actor")
    }

    pub fn actor_login(&self) -> Option<&str> {
        self.fields.nested_str("actor", "login")
    }

    pub fn repo(&self) -> Option<&Map<String, Value>> {
        self.fields.object_field("repo")
    }

    pub fn public(&self) -> Option<bool> {
        self.fields.bool_field("public")
    }

    pub fn created_at(&self) -> Option<&str> {
        self.fields.str_field("created_at")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        self.fields.as_inner()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event(id={}, type={})",
            OptField(self.id()),
            OptField(self.event_type())
        )
    }
}
