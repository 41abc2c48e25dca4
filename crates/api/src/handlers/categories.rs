//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use termkeeper_db::models::category::CreateCategory;
use termkeeper_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// List the caller's categories, ordered by name.
pub async fn list_categories(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let categories = CategoryRepo::list_by_user(&mut conn, &auth.user_id).await?;

    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
pub async fn create_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let category =
        CategoryRepo::create(&mut conn, state.ids.as_ref(), &auth.user_id, &input).await?;

    tracing::info!(
        category_id = %category.id,
        user_id = %auth.user_id,
        "Category created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}
