use http::StatusCode;

use crate::http::Response;

/// Produces the empty response handed to handlers.
pub trait ResponseFactory: Send + Sync {
    fn create_response(&self) -> Response;
}

pub type ResponseFactoryService = Box<dyn ResponseFactory>;

/// Factory id the crate's own [EmptyResponseFactory] is installed under.
pub const HTTP_FACTORY: &str = "http::Response";

/// Known library families and the factory id each one resolves to.
pub const FAMILIES: &[(&str, &str)] = &[
    ("http", HTTP_FACTORY),
    ("hyper", "hyper::Response"),
    ("axum", "axum::Response"),
    ("tower", "tower::Response"),
];

pub fn factory_for_family(family: &str) -> Option<&'static str> {
    FAMILIES
        .iter()
        .find(|(known, _)| *known == family)
        .map(|(_, id)| *id)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyResponseFactory;

impl ResponseFactory for EmptyResponseFactory {
    fn create_response(&self) -> Response {
        Response::new(StatusCode::OK)
    }
}

impl<F> ResponseFactory for F
where
    F: Fn() -> Response + Send + Sync,
{
    fn create_response(&self) -> Response {
        self()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn should_resolve_known_families() {
        assert_eq!(factory_for_family("http"), Some(HTTP_FACTORY));
        assert_eq!(factory_for_family("hyper"), Some("hyper::Response"));
        assert_eq!(factory_for_family("actix"), None);
    }

    #[test]
    fn should_create_empty_response() {
        assert_eq!(EmptyResponseFactory.create_response(), Response::default());
    }
}
