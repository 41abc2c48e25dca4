//! Route definitions for the `/terms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::terms;
use crate::state::AppState;

/// Routes mounted at `/terms`.
///
/// ```text
/// GET    /       -> list_terms
/// POST   /       -> create_term
/// GET    /{id}   -> get_term
/// PUT    /{id}   -> update_term
/// DELETE /{id}   -> delete_term
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(terms::list_terms).post(terms::create_term))
        .route(
            "/{id}",
            get(terms::get_term)
                .put(terms::update_term)
                .delete(terms::delete_term),
        )
}
