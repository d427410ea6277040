//! Error type for the Github client

use std::borrow::Cow;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure taxonomy for API calls. The status-keyed variants form a closed
/// set mapped by [`Error::from_status`]; each carries a human-readable
/// message, defaulted by the constructors below and overridable by building
/// the variant with a custom message. Nothing in this crate retries or
/// recovers from these — they propagate unchanged to the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// 400
    #[error("{0}")]
    BadRequest(String),

    /// 401
    #[error("{0}")]
    Unauthorized(String),

    /// 403
    #[error("{0}")]
    Forbidden(String),

    /// 404
    #[error("{0}")]
    NotFound(String),

    /// Any other non-2xx status
    #[error("{message}")]
    Unknown { status: u16, message: String },

    #[error("reqwest error")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("`{0}`")]
    Message(Cow<'static, str>),
}

impl Error {
    pub fn bad_request() -> Self {
        Error::BadRequest("The request was malformed.".to_owned())
    }

    pub fn unauthorized() -> Self {
        Error::Unauthorized("Invalid or missing authentication token.".to_owned())
    }

    pub fn forbidden() -> Self {
        Error::Forbidden("You do not have permission to access this resource.".to_owned())
    }

    pub fn not_found(path: &str) -> Self {
        Error::NotFound(format!("Endpoint '{}' not found.", path))
    }

    pub fn unknown(status: u16, path: &str) -> Self {
        Error::Unknown {
            status,
            message: format!("Request to '{}' failed with status {}.", path, status),
        }
    }

    /// Maps a non-2xx status code to its taxonomy kind.
    pub fn from_status(status: u16, path: &str) -> Self {
        match status {
            400 => Error::bad_request(),
            401 => Error::unauthorized(),
            403 => Error::forbidden(),
            404 => Error::not_found(path),
            _ => Error::unknown(status, path),
        }
    }

    /// The HTTP status this error was mapped from, for the taxonomy
    /// variants.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadRequest(_) => Some(400),
            Error::Unauthorized(_) => Some(401),
            Error::Forbidden(_) => Some(403),
            Error::NotFound(_) => Some(404),
            Error::Unknown { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn status_dispatch() {
        assert!(matches!(Error::from_status(400, "/x"), Error::BadRequest(_)));
        assert!(matches!(
            Error::from_status(401, "/x"),
            Error::Unauthorized(_)
        ));
        assert!(matches!(Error::from_status(403, "/x"), Error::Forbidden(_)));
        assert!(matches!(Error::from_status(404, "/x"), Error::NotFound(_)));
        assert!(matches!(
            Error::from_status(500, "/x"),
            Error::Unknown { status: 500, .. }
        ));
        assert!(matches!(
            Error::from_status(302, "/x"),
            Error::Unknown { status: 302, .. }
        ));
    }

    #[test]
    fn default_messages() {
        assert_eq!(
            Error::not_found("/users/nobody").to_string(),
            "Endpoint '/users/nobody' not found."
        );
        assert_eq!(
            Error::unauthorized().to_string(),
            "Invalid or missing authentication token."
        );
        assert_eq!(Error::bad_request().to_string(), "The request was malformed.");
        assert_eq!(
            Error::forbidden().to_string(),
            "You do not have permission to access this resource."
        );
    }

    #[test]
    fn custom_message_overrides_default() {
        let err = Error::NotFound("no such repo".to_owned());
        assert_eq!(err.to_string(), "no such repo");
        assert_eq!(err.status(), Some(404));
    }
}
