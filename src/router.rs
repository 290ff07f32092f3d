//! Radix-tree request router.
//!
//! One tree per HTTP method, plus one for routes that answer every method.
//! O(path-length) lookup. You register a path, you get a handler. That is all.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;

/// Outcome of routing one request.
pub(crate) enum Route {
    Found(BoxedHandler),
    /// The path exists, but not for this method. Carries the methods that are
    /// registered for it, for the `allow` header.
    MethodNotAllowed(Vec<Method>),
    NotFound,
}

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    any: MatchitRouter<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), any: MatchitRouter::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or is already registered for
    /// `method`. Routes are fixed at startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Shorthand for `on(Method::Get, path, handler)`.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    /// Register a handler for `path` under every method, including ones
    /// [`Method`] does not name. A method-specific route for the same path
    /// takes precedence.
    pub fn any(mut self, path: &str, handler: impl Handler) -> Self {
        self.any
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(&self, method: Option<Method>, path: &str) -> Route {
        if let Some(tree) = method.and_then(|m| self.routes.get(&m)) {
            if let Ok(matched) = tree.at(path) {
                return Route::Found(Arc::clone(matched.value));
            }
        }

        if let Ok(matched) = self.any.at(path) {
            return Route::Found(Arc::clone(matched.value));
        }

        let mut allowed: Vec<Method> = self
            .routes
            .iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(m, _)| *m)
            .collect();

        if allowed.is_empty() {
            Route::NotFound
        } else {
            allowed.sort_by_key(|m| m.as_str());
            Route::MethodNotAllowed(allowed)
        }
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Request, Response};

    async fn ok(_req: Request) -> Response { Response::text("ok") }

    fn router() -> Router {
        Router::new()
            .get("/", ok)
            .get("/health", ok)
            .on(Method::Put, "/health", ok)
    }

    #[test]
    fn root_matches_only_itself() {
        let r = router();
        assert!(matches!(r.lookup(Some(Method::Get), "/"), Route::Found(_)));
        assert!(matches!(r.lookup(Some(Method::Get), "/foo"), Route::NotFound));
        assert!(matches!(r.lookup(Some(Method::Get), "/health/x"), Route::NotFound));
    }

    #[test]
    fn wrong_method_lists_allowed() {
        match router().lookup(Some(Method::Post), "/health") {
            Route::MethodNotAllowed(allowed) => assert_eq!(allowed, vec![Method::Get, Method::Put]),
            _ => panic!("expected 405"),
        }
    }

    #[test]
    fn unknown_method_on_known_path_is_not_allowed() {
        assert!(matches!(router().lookup(None, "/"), Route::MethodNotAllowed(_)));
        assert!(matches!(router().lookup(None, "/nope"), Route::NotFound));
    }

    #[test]
    fn any_route_answers_every_method() {
        let r = Router::new().any("/health", ok).on(Method::Post, "/", ok);
        for m in [Some(Method::Get), Some(Method::Head), Some(Method::Post), None] {
            assert!(matches!(r.lookup(m, "/health"), Route::Found(_)));
        }
        assert!(matches!(r.lookup(Some(Method::Get), "/"), Route::MethodNotAllowed(_)));
        assert!(matches!(r.lookup(None, "/foo"), Route::NotFound));
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn duplicate_route_panics() {
        let _ = Router::new().get("/", ok).get("/", ok);
    }
}
