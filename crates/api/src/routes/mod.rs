pub mod auth;
pub mod categories;
pub mod health;
pub mod terms;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /signup                 create account (public)
/// /login                  issue token (public)
///
/// /terms                  list, create
/// /terms/{id}             get, update, delete
///
/// /categories             list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Account routes (signup, login).
        .merge(auth::router())
        // Terms with their category links.
        .nest("/terms", terms::router())
        // Category vocabulary.
        .nest("/categories", categories::router())
}
