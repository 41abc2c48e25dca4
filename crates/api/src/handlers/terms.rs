//! Handlers for the `/terms` resource.
//!
//! Every endpoint is scoped to the authenticated user. Writes run inside a
//! single transaction so a failed category link leaves no partial term.

use std::collections::BTreeSet;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use termkeeper_core::error::CoreError;
use termkeeper_core::types::{CategoryId, TermId};
use termkeeper_db::models::term::{CreateTerm, UpdateTerm};
use termkeeper_db::repositories::{CategoryRepo, TermRepo};
use termkeeper_db::services::TermService;
use termkeeper_db::DbConn;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::TermListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/terms
///
/// List the caller's terms with their categories, filtered by
/// `query`, `category`, `checked` and ordered by `sort`.
pub async fn list_terms(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TermListParams>,
) -> AppResult<impl IntoResponse> {
    let filters = params.into_filters()?;

    let mut conn = state.pool.acquire().await?;
    let terms = TermService::list_with_categories(&mut conn, &auth.user_id, &filters).await?;

    Ok(Json(DataResponse { data: terms }))
}

/// POST /api/v1/terms
///
/// Create a term and link it to the given categories.
pub async fn create_term(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTerm>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;
    ensure_categories_owned(&mut tx, &auth.user_id, &input.category_ids).await?;

    let created = TermService::create_with_categories(
        &mut tx,
        state.ids.as_ref(),
        &auth.user_id,
        &input.name,
        &input.description,
        &input.category_ids,
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        term_id = %created.term.id,
        user_id = %auth.user_id,
        categories = created.categories.len(),
        "Term created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/terms/{id}
pub async fn get_term(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(term_id): Path<TermId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let term = TermService::find_with_categories(&mut conn, &auth.user_id, &term_id)
        .await?
        .ok_or_else(|| term_not_found(term_id))?;

    Ok(Json(DataResponse { data: term }))
}

/// PUT /api/v1/terms/{id}
///
/// Replace name and description and set the category links to exactly
/// `category_ids`.
pub async fn update_term(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(term_id): Path<TermId>,
    Json(input): Json<UpdateTerm>,
) -> AppResult<impl IntoResponse> {
    let mut tx = state.pool.begin().await?;

    let mut term = TermRepo::find_by_id(&mut tx, &auth.user_id, &term_id)
        .await?
        .ok_or_else(|| term_not_found(term_id.clone()))?;
    ensure_categories_owned(&mut tx, &auth.user_id, &input.category_ids).await?;

    term.name = input.name;
    term.description = input.description;
    term.updated_at = Utc::now();

    let updated = TermService::update_with_categories(&mut tx, &term, &input.category_ids).await?;
    tx.commit().await?;

    tracing::info!(
        term_id = %updated.term.id,
        user_id = %auth.user_id,
        checked = updated.term.is_checked(),
        "Term updated",
    );

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/terms/{id}
pub async fn delete_term(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(term_id): Path<TermId>,
) -> AppResult<StatusCode> {
    let mut tx = state.pool.begin().await?;

    let term = TermRepo::find_by_id(&mut tx, &auth.user_id, &term_id)
        .await?
        .ok_or_else(|| term_not_found(term_id.clone()))?;
    TermService::delete_with_categories(&mut tx, &term).await?;
    tx.commit().await?;

    tracing::info!(term_id = %term.id, user_id = %auth.user_id, "Term deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn term_not_found(id: TermId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Term", id })
}

/// Reject category ids that do not belong to `owner_id`. Repeated ids are
/// allowed and counted once.
async fn ensure_categories_owned(
    conn: &mut DbConn,
    owner_id: &str,
    category_ids: &[CategoryId],
) -> AppResult<()> {
    let distinct: Vec<CategoryId> = category_ids
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if distinct.is_empty() {
        return Ok(());
    }

    let owned = CategoryRepo::count_owned(conn, owner_id, &distinct).await?;
    if owned != distinct.len() as i64 {
        return Err(AppError::Core(CoreError::Validation(
            "One or more categories do not exist".into(),
        )));
    }
    Ok(())
}
