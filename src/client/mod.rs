//! Client facade for the Github REST v3 API.
//!
//! One public method per supported operation; each builds a [`Route`],
//! issues exactly one blocking request through the [`Transport`], and wraps
//! the decoded JSON in the matching resource type. Errors from the
//! transport propagate unchanged — nothing here catches or retries.

use serde_json::Value;
use url::Url;

mod activity;
mod error;
mod issues;
mod releases;
mod repos;
mod traffic;
mod transport;

pub use error::{Error, Result};
pub use transport::{HttpBackend, HttpRequest, HttpResponse, ReqwestBackend, Transport};

use crate::repo::Repository;
use crate::route::Route;
use crate::user::User;

// Base URL to use for API requests. Can be overridden through the builder
// for use with Github Enterprise.
const DEFAULT_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    token: Option<String>,
    backend: Option<Box<dyn HttpBackend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            token: None,
            backend: None,
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Substitutes the HTTP backend; used by tests to inject a double.
    pub fn backend(mut self, backend: Box<dyn HttpBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        // Reject a malformed origin up front rather than on the first call.
        let base_url = Url::parse(&base_url)
            .map_err(|e| e.to_string())?
            .as_str()
            .trim_end_matches('/')
            .to_owned();
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned());

        let backend = match self.backend {
            Some(backend) => backend,
            None => Box::new(ReqwestBackend::new(&user_agent)?),
        };

        Ok(Client {
            token: self.token,
            transport: Transport::new(base_url, backend),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Facade over the Github API: an optional token plus a [`Transport`].
///
/// Holds no mutable per-call state — every method is a single stateless
/// request/response round trip — so sharing a `&Client` across threads is
/// safe whenever the backend is; the default reqwest backend is.
#[derive(Debug)]
pub struct Client {
    token: Option<String>,
    transport: Transport,
}

impl Client {
    pub fn new() -> Self {
        ClientBuilder::new().build().unwrap()
    }

    pub fn with_token<S: Into<String>>(token: S) -> Self {
        ClientBuilder::new().token(token).build().unwrap()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn token(&self) -> Option<String> {
        self.token.clone()
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Wraps each element of a decoded list response, preserving server
    /// order. A non-array body yields an empty vec, never a fault.
    pub(crate) fn wrap_list<T>(data: Value, wrap: fn(Option<Value>) -> T) -> Vec<T> {
        match data {
            Value::Array(items) => items.into_iter().map(|item| wrap(Some(item))).collect(),
            _ => Vec::new(),
        }
    }

    /// Fetches a user by username.
    pub fn get_user(&self, username: &str) -> Result<User> {
        let route = Route::get(format!("/users/{}", username), self.token());
        let data = self.transport.request(&route, None)?;
        Ok(User::wrap(Some(data)))
    }

    /// Fetches a repository by owner and name.
    pub fn get_repo(&self, owner: &str, repo: &str) -> Result<Repository> {
        let route = Route::get(format!("/repos/{}/{}", owner, repo), self.token());
        let data = self.transport.request(&route, None)?;
        Ok(Repository::wrap(Some(data)))
    }

    /// Searches repositories. The response's `items` array becomes the
    /// result list; a response without `items` is an empty list.
    pub fn search_repos(&self, query: &str) -> Result<Vec<Repository>> {
        let route = Route::get(format!("/search/repositories?q={}", query), self.token());
        let data = self.transport.request(&route, None)?;

        let items = match data {
            Value::Object(mut map) => map.remove("items"),
            _ => None,
        };
        Ok(match items {
            Some(items) => Self::wrap_list(items, Repository::wrap),
            None => Vec::new(),
        })
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod test {
    use super::testing::scripted_client;
    use super::Error;
    use reqwest::Method;

    #[test]
    fn get_user_route_and_wrapping() {
        let (client, log) = scripted_client(200, r#"{"login": "octocat", "id": 583231}"#, None);
        let user = client.get_user("octocat").unwrap();

        assert_eq!(user.login(), Some("octocat"));
        assert_eq!(user.id(), Some(583231));

        let requests = log.lock().unwrap();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].url, "https://api.github.com/users/octocat");
    }

    #[test]
    fn get_repo_route_and_wrapping() {
        let (client, log) = scripted_client(
            200,
            r#"{"name": "Hello-World", "owner": {"login": "octocat"}}"#,
            Some("s3cret"),
        );
        let repo = client.get_repo("octocat", "Hello-World").unwrap();

        assert_eq!(repo.name(), Some("Hello-World"));
        assert_eq!(repo.owner_login(), Some("octocat"));

        let requests = log.lock().unwrap();
        assert_eq!(
            requests[0].url,
            "https://api.github.com/repos/octocat/Hello-World"
        );
        assert!(requests[0]
            .headers
            .contains(&("Authorization", "token s3cret".to_owned())));
    }

    #[test]
    fn search_repos_takes_items() {
        let (client, log) = scripted_client(200, r#"{"items": [{"id": 1, "name": "a"}]}"#, None);
        let repos = client.search_repos("foo").unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].id(), Some(1));
        assert_eq!(repos[0].name(), Some("a"));

        let requests = log.lock().unwrap();
        assert_eq!(
            requests[0].url,
            "https://api.github.com/search/repositories?q=foo"
        );
    }

    #[test]
    fn search_repos_without_items_is_empty() {
        let (client, _) = scripted_client(200, "{}", None);
        assert!(client.search_repos("foo").unwrap().is_empty());
    }

    #[test]
    fn errors_propagate_unchanged() {
        let (client, _) = scripted_client(404, "", None);
        let err = client.get_user("nobody").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.to_string(), "Endpoint '/users/nobody' not found.");
    }

    #[test]
    fn builder_rejects_malformed_base_url() {
        assert!(super::ClientBuilder::new()
            .base_url("not a url")
            .build()
            .is_err());
    }
}
