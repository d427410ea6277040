use crate::common::{Fields, OptField};
use serde_json::{Map, Value};
use std::fmt;

/// A Github user or organization account.
#[derive(Clone, Debug)]
pub struct User {
    fields: Fields,
}

impl User {
    pub fn wrap(raw: Option<Value>) -> Self {
        Self {
            fields: Fields::wrap(raw),
        }
    }

    pub fn login(&self) -> Option<&str> {
        self.fields.str_field("login")
    }

    pub fn id(&self) -> Option<i64> {
        self.fields.int_field("id")
    }

    pub fn node_id(&self) -> Option<&str> {
        self.fields.str_field("node_id")
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.fields.str_field("avatar_url")
    }

    pub fn html_url(&self) -> Option<&str> {
        self.fields.str_field("html_url")
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.str_field("name")
    }

    pub fn company(&self) -> Option<&str> {
        self.fields.str_field("company")
    }

    pub fn location(&self) -> Option<&str> {
        self.fields.str_field("location")
    }

    pub fn email(&self) -> Option<&str> {
        self.fields.str_field("email")
    }

    pub fn bio(&self) -> Option<&str> {
        self.fields.str_field("bio")
    }

    pub fn site_admin(&self) -> Option<bool> {
        self.fields.bool_field("site_admin")
    }

    pub fn public_repos(&self) -> Option<i64> {
        self.fields.int_field("public_repos")
    }

    pub fn followers(&self) -> Option<i64> {
        self.fields.int_field("followers")
    }

    pub fn following(&self) -> Option<i64> {
        self.fields.int_field("following")
    }

    pub fn created_at(&self) -> Option<&str> {
        self.fields.str_field("created_at")
    }

    pub fn fields(&self) -> &Map<String, Value> {
        self.fields.as_inner()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User(login={}, id={})",
            OptField(self.login()),
            OptField(self.id())
        )
    }
}
