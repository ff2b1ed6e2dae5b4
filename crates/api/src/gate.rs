//! Access-gate boundary.
//!
//! Session validation happens upstream; by the time a request reaches
//! this process the gate has either attached an identity header or
//! not. This middleware turns that into an explicit [`Identity`]
//! request extension: a named user when the header is present, an
//! anonymous identity on configured public paths, and a 401 otherwise.
//! Nothing downstream re-validates authentication.

use std::fmt;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use recetario_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header the upstream gate uses to attach the authenticated username.
pub const IDENTITY_HEADER: &str = "x-authenticated-user";

/// The request-context identity every procedure can read via
/// `Extension<Identity>`.
#[derive(Debug, Clone)]
pub enum Identity {
    /// An authenticated user, as asserted by the upstream gate.
    User(String),
    /// An unauthenticated caller on a public path.
    Anonymous,
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::User(username) => write!(f, "{username}"),
            Identity::Anonymous => write!(f, "anonymous"),
        }
    }
}

/// Middleware: admit the request with an [`Identity`] extension, or
/// reject it with 401 when no identity is attached and the path is not
/// on the public allow-list.
pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(IDENTITY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    let identity = match header {
        Some(username) => Identity::User(username.to_string()),
        None if path_is_public(&state.config.public_paths, request.uri().path()) => {
            Identity::Anonymous
        }
        None => {
            return Err(AppError::Core(CoreError::Unauthorized(
                "No identity attached and path is not public".into(),
            )))
        }
    };

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Match a request path against the configured allow-list.
///
/// A pattern ending in `*` matches any path with that prefix; any
/// other pattern matches exactly.
fn path_is_public(patterns: &[String], path: &str) -> bool {
    patterns.iter().any(|pattern| match pattern.strip_suffix('*') {
        Some(prefix) => path.starts_with(prefix),
        None => path == pattern,
    })
}
