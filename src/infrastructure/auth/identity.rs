use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// User context injected into request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
}

/// Maps an incoming request to the key of the user whose list it addresses
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, headers: &HeaderMap) -> String;
}

/// Every request belongs to the same configured user
#[derive(Debug, Clone)]
pub struct FixedIdentityResolver {
    user_id: String,
}

impl FixedIdentityResolver {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl IdentityResolver for FixedIdentityResolver {
    fn resolve(&self, _headers: &HeaderMap) -> String {
        self.user_id.clone()
    }
}

/// Reads the user key from a request header, falling back to a fixed id
/// when the header is missing, empty or not valid UTF-8.
#[derive(Debug, Clone)]
pub struct HeaderIdentityResolver {
    header: String,
    fallback: String,
}

impl HeaderIdentityResolver {
    pub fn new(header: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            fallback: fallback.into(),
        }
    }
}

impl IdentityResolver for HeaderIdentityResolver {
    fn resolve(&self, headers: &HeaderMap) -> String {
        headers
            .get(self.header.as_str())
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Identity middleware
pub async fn identity_middleware(
    State(resolver): State<Arc<dyn IdentityResolver>>,
    mut request: Request,
    next: Next,
) -> Response {
    let user_id = resolver.resolve(request.headers());
    tracing::debug!(user_id = %user_id, "Resolved request identity");

    request.extensions_mut().insert(CurrentUser { user_id });

    next.run(request).await
}
