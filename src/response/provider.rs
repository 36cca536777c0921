use std::{collections::HashMap, sync::OnceLock};

use essentials::debug;

use super::factory::{
    factory_for_family, EmptyResponseFactory, ResponseFactory, ResponseFactoryService,
    HTTP_FACTORY,
};
use crate::{
    http::{Request, Response},
    Error, Result,
};

/// Supplies the response object bound to handler parameters.
///
/// The first successful [ResponseProvider::get] is memoized for the provider's
/// lifetime; later requests get the same instance whatever their family.
pub struct ResponseProvider {
    factories: HashMap<String, ResponseFactoryService>,
    cache: OnceLock<Response>,
}

impl ResponseProvider {
    /// A provider with no factories installed.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
            cache: OnceLock::new(),
        }
    }

    /// Install a factory under the given id, replacing any previous one.
    pub fn install<S, F>(mut self, id: S, factory: F) -> Self
    where
        S: Into<String>,
        F: ResponseFactory + 'static,
    {
        self.factories.insert(id.into(), Box::new(factory));
        self
    }

    pub fn is_installed(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    pub fn cached(&self) -> Option<&Response> {
        self.cache.get()
    }

    pub fn get(&self, request: &Request) -> Result<&Response> {
        if let Some(response) = self.cache.get() {
            return Ok(response);
        }
        let id = factory_for_family(&request.family)
            .ok_or_else(|| Error::UnsupportedFamily(request.family.clone()))?;
        let response = self.create(id)?;
        debug!("Resolved response factory {} for family {}", id, request.family);
        Ok(self.cache.get_or_init(|| response))
    }

    /// Produce a response from the factory installed under `id` and cache it,
    /// replacing whatever was cached before.
    pub fn set(&mut self, id: &str) -> Result<&Response> {
        let response = self.create(id)?;
        debug!("Response factory explicitly set to {}", id);
        self.cache = OnceLock::new();
        Ok(self.cache.get_or_init(|| response))
    }

    fn create(&self, id: &str) -> Result<Response> {
        self.factories
            .get(id)
            .map(|factory| factory.create_response())
            .ok_or_else(|| Error::FactoryUnavailable(id.to_string()))
    }
}

impl Default for ResponseProvider {
    fn default() -> Self {
        Self::empty().install(HTTP_FACTORY, EmptyResponseFactory)
    }
}

impl std::fmt::Debug for ResponseProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseProvider")
            .field("factories", &self.factories.keys().collect::<Vec<_>>())
            .field("cache", &self.cache.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use http::{Method, StatusCode};
    use pretty_assertions::assert_eq;

    use super::*;

    fn request(family: &str) -> Request {
        Request::new(Method::GET, "/").with_family(family)
    }

    #[test]
    fn should_memoize_first_resolution() {
        let provider = ResponseProvider::default()
            .install("hyper::Response", || Response::new(StatusCode::ACCEPTED));
        let first = provider.get(&request("http")).unwrap();
        let second = provider.get(&request("hyper")).unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.status, StatusCode::OK);
    }

    #[test]
    fn should_reject_unknown_family() {
        let provider = ResponseProvider::default();
        assert_eq!(
            provider.get(&request("actix")).unwrap_err(),
            Error::UnsupportedFamily("actix".to_string())
        );
        assert!(provider.cached().is_none());
    }

    #[test]
    fn should_reject_family_without_installed_factory() {
        let provider = ResponseProvider::default();
        assert_eq!(
            provider.get(&request("axum")).unwrap_err(),
            Error::FactoryUnavailable("axum::Response".to_string())
        );
    }

    #[test]
    fn should_not_cache_failed_resolution() {
        let provider = ResponseProvider::default();
        assert!(provider.get(&request("tower")).is_err());
        assert_eq!(provider.get(&request("http")).unwrap(), &Response::default());
    }

    #[test]
    fn should_replace_cache_on_set() {
        let mut provider = ResponseProvider::default()
            .install("teapot", || Response::new(StatusCode::IM_A_TEAPOT));
        provider.get(&request("http")).unwrap();
        let set = provider.set("teapot").unwrap() as *const Response;
        assert!(std::ptr::eq(set, provider.cached().unwrap()));
        assert_eq!(
            provider.get(&request("http")).unwrap().status,
            StatusCode::IM_A_TEAPOT
        );
        assert_eq!(
            provider.set("missing").unwrap_err(),
            Error::FactoryUnavailable("missing".to_string())
        );
    }
}
