//! Route definitions for account creation and login.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes merged at the `/api/v1` root.
///
/// ```text
/// POST /signup  -> signup
/// POST /login   -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
}
