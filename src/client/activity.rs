//! Activity operations: events, forks, stargazers, watching, and
//! notifications.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{Client, Result};
use crate::events::Event;
use crate::repo::Repository;
use crate::route::Route;
use crate::user::User;

#[derive(Clone, Debug, Serialize)]
struct MarkNotificationsRequest {
    last_read_at: Option<String>,
}

impl Client {
    /// Lists events on a repository, in server response order.
    pub fn get_events(&self, owner: &str, repo: &str) -> Result<Vec<Event>> {
        let route = Route::get(format!("/repos/{}/{}/events", owner, repo), self.token());
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, Event::wrap))
    }

    /// Lists forks of a repository.
    pub fn get_forks(&self, owner: &str, repo: &str) -> Result<Vec<Repository>> {
        let route = Route::get(format!("/repos/{}/{}/forks", owner, repo), self.token());
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, Repository::wrap))
    }

    /// Lists users starring a repository.
    pub fn get_stargazers(&self, owner: &str, repo: &str) -> Result<Vec<User>> {
        let route = Route::get(
            format!("/repos/{}/{}/stargazers", owner, repo),
            self.token(),
        );
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, User::wrap))
    }

    /// Lists the repositories a user watches.
    pub fn get_watched_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let route = Route::get(format!("/users/{}/subscriptions", username), self.token());
        let data = self.transport().request(&route, None)?;
        Ok(Self::wrap_list(data, Repository::wrap))
    }

    /// Lists the authenticated user's notification threads as raw objects;
    /// no dedicated wrapper exists for them.
    pub fn get_notifications(&self) -> Result<Vec<Map<String, Value>>> {
        let route = Route::get("/notifications", self.token());
        let data = self.transport().request(&route, None)?;
        Ok(match data {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => Some(map),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Marks notifications as read, optionally only those up to
    /// `last_read_at` (ISO 8601). Github answers this with no content, so
    /// the returned value is usually `Value::Null`.
    pub fn mark_notifications_as_read(&self, last_read_at: Option<&str>) -> Result<Value> {
        let route = Route::put("/notifications", self.token());
        let request = MarkNotificationsRequest {
            last_read_at: last_read_at.map(str::to_owned),
        };
        let body = serde_json::to_value(request)?;
        self.transport().request(&route, Some(&body))
    }
}
