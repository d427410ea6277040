use log::debug;
use reqwest::Method;
use serde_json::Value;
use std::fmt;

use super::error::{Error, Result};
use crate::route::Route;

pub(super) const MEDIA_TYPE_V3: &str = "application/vnd.github.v3+json";

/// One HTTP request, described as plain data for the backend to execute.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

/// The raw result of executing an [`HttpRequest`].
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The single external seam of the crate: executes exactly one synchronous
/// HTTP request. Production code uses [`ReqwestBackend`]; tests substitute
/// a scripted double without touching `Transport` or `Client`.
pub trait HttpBackend: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Default backend over `reqwest::blocking`. Timeout behavior is whatever
/// reqwest defaults to; this layer adds none of its own.
pub struct ReqwestBackend {
    client: reqwest::blocking::Client,
}

impl ReqwestBackend {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl HttpBackend for ReqwestBackend {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

/// Issues one request per [`Route`]: composes the URL, attaches the accept
/// and auth headers, dispatches through the backend once, maps non-2xx
/// statuses to the error taxonomy, and decodes the JSON body unchanged.
///
/// Holds no mutable per-call state, so a `&Transport` is safe to share
/// across threads whenever its backend is.
pub struct Transport {
    base_url: String,
    backend: Box<dyn HttpBackend>,
}

impl Transport {
    /// `base_url` is the API origin without a trailing slash; route paths
    /// carry the leading slash.
    pub fn new(base_url: String, backend: Box<dyn HttpBackend>) -> Self {
        Self { base_url, backend }
    }

    pub fn request(&self, route: &Route, body: Option<&Value>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, route.path);

        let mut headers = vec![("Accept", MEDIA_TYPE_V3.to_owned())];
        if let Some(token) = &route.token {
            // No token, no Authorization header at all.
            headers.push(("Authorization", format!("token {}", token)));
        }

        debug!("Github request: {} {}", route.method, url);
        let response = self.backend.execute(HttpRequest {
            method: route.method.clone(),
            url,
            headers,
            body: body.cloned(),
        })?;
        debug!("Github response status: {}", response.status);

        self.check_response(&response, &route.path)?;

        // A handful of write endpoints answer 2xx with no content.
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    fn check_response(&self, response: &HttpResponse, path: &str) -> Result<()> {
        if (200..300).contains(&response.status) {
            Ok(())
        } else {
            Err(Error::from_status(response.status, path))
        }
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::super::testing::{scripted_client, ScriptedBackend};
    use super::{HttpResponse, Transport, MEDIA_TYPE_V3};
    use crate::client::Error;
    use crate::route::Route;
    use reqwest::Method;
    use serde_json::json;

    fn transport(status: u16, body: &str) -> (Transport, super::super::testing::RequestLog) {
        let (backend, log) = ScriptedBackend::single(HttpResponse {
            status,
            body: body.to_owned(),
        });
        (
            Transport::new("https://api.github.com".to_owned(), Box::new(backend)),
            log,
        )
    }

    #[test]
    fn success_returns_decoded_body_unchanged() {
        let (transport, _) = transport(200, r#"{"id": 1, "name": "a"}"#);
        let route = Route::get("/repos/o/r", None);
        let value = transport.request(&route, None).unwrap();
        assert_eq!(value, json!({"id": 1, "name": "a"}));
    }

    #[test]
    fn url_is_base_plus_path() {
        let (transport, log) = transport(200, "{}");
        let route = Route::get("/users/octocat", None);
        transport.request(&route, None).unwrap();

        let requests = log.lock().unwrap();
        assert_eq!(requests[0].url, "https://api.github.com/users/octocat");
        assert_eq!(requests[0].method, Method::GET);
    }

    #[test]
    fn accept_header_always_present() {
        let (transport, log) = transport(200, "{}");
        transport.request(&Route::get("/users/octocat", None), None).unwrap();

        let requests = log.lock().unwrap();
        assert!(requests[0]
            .headers
            .contains(&("Accept", MEDIA_TYPE_V3.to_owned())));
    }

    #[test]
    fn auth_header_only_with_token() {
        let (transport, log) = transport(200, "{}");
        transport
            .request(&Route::get("/user", Some("s3cret".to_owned())), None)
            .unwrap();
        let requests = log.lock().unwrap();
        assert!(requests[0]
            .headers
            .contains(&("Authorization", "token s3cret".to_owned())));

        let (transport, log) = self::transport(200, "{}");
        transport.request(&Route::get("/user", None), None).unwrap();
        let requests = log.lock().unwrap();
        assert!(requests[0].headers.iter().all(|(name, _)| *name != "Authorization"));
    }

    #[test]
    fn status_maps_to_taxonomy() {
        let cases: [(u16, fn(&Error) -> bool); 6] = [
            (400, |e| matches!(e, Error::BadRequest(_))),
            (401, |e| matches!(e, Error::Unauthorized(_))),
            (403, |e| matches!(e, Error::Forbidden(_))),
            (404, |e| matches!(e, Error::NotFound(_))),
            (500, |e| matches!(e, Error::Unknown { status: 500, .. })),
            (502, |e| matches!(e, Error::Unknown { status: 502, .. })),
        ];
        for (status, check) in cases.iter() {
            let (transport, _) = transport(*status, "");
            let err = transport
                .request(&Route::get("/repos/o/r", None), None)
                .unwrap_err();
            assert!(check(&err), "status {} mapped to {:?}", status, err);
        }
    }

    #[test]
    fn not_found_names_the_path() {
        let (transport, _) = transport(404, "");
        let err = transport
            .request(&Route::get("/users/nobody", None), None)
            .unwrap_err();
        assert_eq!(err.to_string(), "Endpoint '/users/nobody' not found.");
    }

    #[test]
    fn empty_success_body_decodes_to_null() {
        let (transport, _) = transport(205, "");
        let route = Route::put("/notifications", None);
        let value = transport.request(&route, Some(&json!({}))).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn body_is_forwarded_to_backend() {
        let (transport, log) = transport(201, "{}");
        let body = json!({"title": "t", "body": null});
        transport
            .request(&Route::post("/repos/o/r/issues", None), Some(&body))
            .unwrap();

        let requests = log.lock().unwrap();
        assert_eq!(requests[0].body.as_ref(), Some(&body));
    }

    #[test]
    fn client_facade_uses_same_pipeline() {
        // Smoke check that the scripted client helper wires through here.
        let (client, _) = scripted_client(200, r#"{"login": "octocat"}"#, None);
        let user = client.get_user("octocat").unwrap();
        assert_eq!(user.login(), Some("octocat"));
    }
}
