use http::{HeaderMap, Method};

use super::headers::HeaderMapExt;

/// Family of requests constructed by this crate or converted from the `http` crate.
pub const DEFAULT_FAMILY: &str = "http";

/// Inbound request as seen by the router.
///
/// `family` names the HTTP library binding the request originated from and is
/// what the response provider uses to pick a response factory.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub version: String,
    pub family: String,
    headers: HeaderMap,
}

impl Request {
    pub fn new<P: Into<String>>(method: Method, path: P) -> Self {
        Self {
            method,
            path: path.into(),
            version: "HTTP/1.1".to_string(),
            family: DEFAULT_FAMILY.to_string(),
            headers: HeaderMap::new(),
        }
    }

    pub fn with_family<F: Into<String>>(mut self, family: F) -> Self {
        self.family = family.into();
        self
    }

    /// Path without the query string.
    pub fn uri_path(&self) -> &str {
        match self.path.find('?') {
            Some(i) => &self.path[..i],
            None => &self.path,
        }
    }

    /// `"METHOD path"`, the string route patterns are matched against.
    pub fn subject(&self) -> String {
        format!("{} {}", self.method, self.uri_path())
    }
}

impl HeaderMapExt for Request {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl<B> From<&http::Request<B>> for Request {
    fn from(request: &http::Request<B>) -> Self {
        Self {
            method: request.method().clone(),
            path: request
                .uri()
                .path_and_query()
                .map(|p| p.as_str().to_string())
                .unwrap_or_else(|| "/".to_string()),
            version: format!("{:?}", request.version()),
            family: DEFAULT_FAMILY.to_string(),
            headers: request.headers().clone(),
        }
    }
}
