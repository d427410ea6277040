use crate::common::{Fields, OptField};
use serde_json::{Map, Value};
use std::fmt;

/// Traffic statistics: the views/clones summaries and the items of the
/// popular referrer and path lists all share the count/uniques shape, so
/// one wrapper covers them.
#[derive(Clone, Debug)]
pub struct Traffic {
    fields: Fields,
}

impl Traffic {
    pub fn wrap(raw: Option<Value>) -> Self {
        Self {
            fields: Fields::wrap(raw),
        }
    }

    pub fn count(&self) -> Option<i64> {
        self.fields.int_field("count")
    }

    pub fn uniques(&self) -> Option<i64> {
        self.fields.int_field("uniques")
    }

    /// Timestamp of one entry in a views/clones series.
    pub fn timestamp(&self) -> Option<&str> {
        self.fields.str_field("timestamp")
    }

    /// Referring site, on popular-referrer entries.
    pub fn referrer(&self) -> Option<&str> {
        self.fields.str_field("referrer")
    }

    /// Content path, on popular-path entries.
    pub fn path(&self) -> Option<&str> {
        self.fields.str_field("path")
    }

    /// The per-day series of a views or clones response, as raw entries.
    pub fn views(&self) -> Option<&Vec<Value>> {
        self.fields.array_field("views")
    }

    pub fn clones(&self) -> Option<&Vec<Value>> {
        self.fields.array_field("clones")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        self.fields.as_inner()
    }
}

impl fmt::Display for Traffic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Traffic(count={}, uniques={})",
            OptField(self.count()),
            OptField(self.uniques())
        )
    }
}
