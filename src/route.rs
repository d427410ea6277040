use reqwest::Method;

/// Immutable descriptor of one API call: method, resource path, and the
/// token to authenticate with, if any. The path is the full resource path
/// (e.g. `/repos/{owner}/{repo}/issues`), never the origin. Pure data; the
/// `Transport` consumes it.
#[derive(Clone, Debug)]
pub struct Route {
    pub method: Method,
    pub path: String,
    pub token: Option<String>,
}

impl Route {
    pub fn new<P: Into<String>>(method: Method, path: P, token: Option<String>) -> Self {
        Self {
            method,
            path: path.into(),
            token,
        }
    }

    pub fn get<P: Into<String>>(path: P, token: Option<String>) -> Self {
        Self::new(Method::GET, path, token)
    }

    pub fn post<P: Into<String>>(path: P, token: Option<String>) -> Self {
        Self::new(Method::POST, path, token)
    }

    pub fn put<P: Into<String>>(path: P, token: Option<String>) -> Self {
        Self::new(Method::PUT, path, token)
    }
}
