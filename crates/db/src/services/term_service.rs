//! Term aggregation: terms joined with their categories.
//!
//! Each method runs its steps strictly in sequence on the connection it is
//! given. If a later step fails, earlier steps are not undone here; pass a
//! transaction and drop it uncommitted to discard them.

use termkeeper_core::filters::TermFilters;
use termkeeper_core::id::IdGenerator;
use termkeeper_core::types::CategoryId;

use crate::error::RepoError;
use crate::models::term::{Term, TermWithCategories};
use crate::repositories::{CategoryRepo, TermCategoryRepo, TermRepo};
use crate::DbConn;

/// Builds and maintains denormalized "term with categories" views.
pub struct TermService;

impl TermService {
    /// Create a term, then link it to `category_ids` in the given order.
    pub async fn create_with_categories(
        conn: &mut DbConn,
        ids: &dyn IdGenerator,
        owner_id: &str,
        name: &str,
        description: &str,
        category_ids: &[CategoryId],
    ) -> Result<TermWithCategories, RepoError> {
        let term = TermRepo::create(conn, ids, owner_id, name, description).await?;
        TermCategoryRepo::link_all(conn, &term.id, category_ids).await?;
        Self::attach_categories(conn, term).await
    }

    /// List the owner's terms matching `filters`, each with its categories.
    ///
    /// Terms keep the order returned by [`TermRepo::query`]. Any failing
    /// per-term lookup aborts the whole listing.
    pub async fn list_with_categories(
        conn: &mut DbConn,
        owner_id: &str,
        filters: &TermFilters,
    ) -> Result<Vec<TermWithCategories>, RepoError> {
        let terms = TermRepo::query(conn, owner_id, filters).await?;

        let mut result = Vec::with_capacity(terms.len());
        for term in terms {
            result.push(Self::attach_categories(conn, term).await?);
        }
        Ok(result)
    }

    /// Load one owned term with its categories.
    pub async fn find_with_categories(
        conn: &mut DbConn,
        owner_id: &str,
        term_id: &str,
    ) -> Result<Option<TermWithCategories>, RepoError> {
        match TermRepo::find_by_id(conn, owner_id, term_id).await? {
            Some(term) => Ok(Some(Self::attach_categories(conn, term).await?)),
            None => Ok(None),
        }
    }

    /// Update the term row, then replace its links with exactly `category_ids`.
    pub async fn update_with_categories(
        conn: &mut DbConn,
        term: &Term,
        category_ids: &[CategoryId],
    ) -> Result<TermWithCategories, RepoError> {
        let updated = TermRepo::update(conn, term).await?;
        TermCategoryRepo::replace_all(conn, &updated.id, category_ids).await?;
        Self::attach_categories(conn, updated).await
    }

    /// Delete the term row, then its relation rows.
    pub async fn delete_with_categories(conn: &mut DbConn, term: &Term) -> Result<(), RepoError> {
        TermRepo::delete(conn, &term.id).await?;
        TermCategoryRepo::delete_all(conn, &term.id).await?;
        Ok(())
    }

    async fn attach_categories(
        conn: &mut DbConn,
        term: Term,
    ) -> Result<TermWithCategories, RepoError> {
        let category_ids = TermCategoryRepo::list_category_ids(conn, &term.id).await?;
        let categories = CategoryRepo::find_by_ids(conn, &category_ids).await?;
        Ok(TermWithCategories { term, categories })
    }
}
