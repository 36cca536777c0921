use essentials::{debug, warn};

use crate::{http::Request, response::ResponseProvider, utils::sanitize_arguments, Error, Result};

pub use handler::{Arguments, Handler, Param, Target, Value};

pub mod handler;
pub mod pattern;

#[derive(Debug)]
struct Route<T> {
    pattern: String,
    target: Target<T>,
}

/// Ordered table of route patterns and the handlers they dispatch to.
///
/// Patterns are tried in registration order and the first match wins.
#[derive(Debug)]
pub struct Router<T> {
    routes: Vec<Route<T>>,
    provider: ResponseProvider,
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self::with_provider(ResponseProvider::default())
    }

    pub fn with_provider(provider: ResponseProvider) -> Self {
        Self {
            routes: Vec::new(),
            provider,
        }
    }

    /// Register `target` under `pattern`.
    ///
    /// An identical pattern replaces the earlier target and keeps its position.
    pub fn map<P, H>(&mut self, pattern: P, target: H)
    where
        P: Into<String>,
        H: Into<Target<T>>,
    {
        let pattern = pattern.into();
        let target = target.into();
        match self.routes.iter_mut().find(|route| route.pattern == pattern) {
            Some(route) => {
                warn!("Replacing handler for route {}", pattern);
                route.target = target;
            }
            None => {
                debug!("Mapped route {}", pattern);
                self.routes.push(Route { pattern, target });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.pattern.as_str())
    }

    pub fn provider(&self) -> &ResponseProvider {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut ResponseProvider {
        &mut self.provider
    }

    /// Invoke the handler of the first route matching `request` and return its result.
    pub fn dispatch(&self, request: &Request) -> Result<T> {
        if self.routes.is_empty() {
            return Err(Error::NoRoutesConfigured);
        }
        let subject = request.subject();
        for route in &self.routes {
            let Some(raw) = pattern::captures(&route.pattern, &subject)? else {
                continue;
            };
            debug!("Route {} matched {}", route.pattern, subject);
            let handler = match &route.target {
                Target::Handler(handler) => handler,
                Target::Reference(_) => return Err(Error::InvalidHandler(route.pattern.clone())),
            };
            let args = sanitize_arguments(&raw);
            let arguments = handler.resolve(args, request, &self.provider)?;
            return Ok(handler.call(arguments));
        }
        debug!("No route matched {}", subject);
        Err(Error::NoRouteMatched(subject))
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, H> FromIterator<(P, H)> for Router<T>
where
    P: Into<String>,
    H: Into<Target<T>>,
{
    fn from_iter<I: IntoIterator<Item = (P, H)>>(routes: I) -> Self {
        let mut router = Self::new();
        for (pattern, target) in routes {
            router.map(pattern, target);
        }
        router
    }
}
