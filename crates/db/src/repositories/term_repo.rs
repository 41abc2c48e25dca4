//! Repository for the `terms` table.

use chrono::Utc;
use termkeeper_core::filters::TermFilters;
use termkeeper_core::id::IdGenerator;
use termkeeper_core::types::TermId;
use termkeeper_core::validation::validate_term_name;

use crate::error::RepoError;
use crate::models::term::Term;
use crate::term_query::TermQuery;
use crate::DbConn;

/// Column list for `terms` queries.
const COLUMNS: &str = "id, fk_user_id, name, description, created_at, updated_at";

/// Provides CRUD operations and filtered listing for terms.
pub struct TermRepo;

impl TermRepo {
    /// Insert a new term owned by `owner_id`.
    ///
    /// Fails with a validation error, before touching the database, when
    /// `name` is empty. `created_at` and `updated_at` are both set to now.
    pub async fn create(
        conn: &mut DbConn,
        ids: &dyn IdGenerator,
        owner_id: &str,
        name: &str,
        description: &str,
    ) -> Result<Term, RepoError> {
        validate_term_name(name)?;

        let now = Utc::now();
        let id = ids.new_id(now);

        let query = format!(
            "INSERT INTO terms (id, fk_user_id, name, description, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $5) \
             RETURNING {COLUMNS}"
        );
        let term = sqlx::query_as::<_, Term>(&query)
            .bind(&id)
            .bind(owner_id)
            .bind(name)
            .bind(description)
            .bind(now)
            .fetch_one(&mut *conn)
            .await?;
        Ok(term)
    }

    /// Find a term by id, scoped to its owner.
    pub async fn find_by_id(
        conn: &mut DbConn,
        owner_id: &str,
        id: &str,
    ) -> Result<Option<Term>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM terms WHERE id = $1 AND fk_user_id = $2");
        sqlx::query_as::<_, Term>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List the owner's terms matching `filters`.
    ///
    /// Row order follows `filters.sort` when set; otherwise it is whatever
    /// the database returns.
    pub async fn query(
        conn: &mut DbConn,
        owner_id: &str,
        filters: &TermFilters,
    ) -> Result<Vec<Term>, sqlx::Error> {
        let term_query = TermQuery::build(owner_id, filters);
        let sql = term_query.sql();

        let mut q = sqlx::query_as::<_, Term>(&sql);
        for value in term_query.binds() {
            q = q.bind(value.as_str());
        }
        q.fetch_all(&mut *conn).await
    }

    /// Overwrite `name`, `description` and `updated_at` of the row with
    /// `term.id`. Owner and `created_at` are left alone.
    ///
    /// Returns the stored row; a missing row surfaces as
    /// `sqlx::Error::RowNotFound`.
    pub async fn update(conn: &mut DbConn, term: &Term) -> Result<Term, RepoError> {
        validate_term_name(&term.name)?;

        let query = format!(
            "UPDATE terms SET name = $2, description = $3, updated_at = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Term>(&query)
            .bind(&term.id)
            .bind(&term.name)
            .bind(&term.description)
            .bind(term.updated_at)
            .fetch_one(&mut *conn)
            .await?;
        Ok(updated)
    }

    /// Delete the term row. Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut DbConn, term_id: &TermId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM terms WHERE id = $1")
            .bind(term_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
