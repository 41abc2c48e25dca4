//! Repository for the `categories` table.

use chrono::Utc;
use termkeeper_core::id::IdGenerator;
use termkeeper_core::types::CategoryId;
use termkeeper_core::validation::{validate_category_name, validate_hex_color};

use crate::error::RepoError;
use crate::models::category::{Category, CreateCategory};
use crate::DbConn;

/// Column list for categories queries.
const COLUMNS: &str = "id, fk_user_id, name, hex_color_code, created_at, updated_at";

/// Provides lookups and creation for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Create a category owned by `owner_id`, returning the created row.
    pub async fn create(
        conn: &mut DbConn,
        ids: &dyn IdGenerator,
        owner_id: &str,
        input: &CreateCategory,
    ) -> Result<Category, RepoError> {
        validate_category_name(&input.name)?;
        validate_hex_color(&input.hex_color_code)?;

        let now = Utc::now();
        let query = format!(
            "INSERT INTO categories (id, fk_user_id, name, hex_color_code, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $5) \
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(ids.new_id(now))
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.hex_color_code)
            .bind(now)
            .fetch_one(&mut *conn)
            .await?;
        Ok(category)
    }

    /// List the owner's categories, ordered by name ascending.
    pub async fn list_by_user(
        conn: &mut DbConn,
        owner_id: &str,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categories WHERE fk_user_id = $1 ORDER BY name ASC");
        sqlx::query_as::<_, Category>(&query)
            .bind(owner_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// Fetch the categories whose id is in `ids`, in database order.
    ///
    /// Each matching category appears once even if its id is repeated.
    /// An empty `ids` returns an empty list without querying.
    pub async fn find_by_ids(
        conn: &mut DbConn,
        ids: &[CategoryId],
    ) -> Result<Vec<Category>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = ANY($1)");
        sqlx::query_as::<_, Category>(&query)
            .bind(ids)
            .fetch_all(&mut *conn)
            .await
    }

    /// Number of distinct ids in `ids` that belong to `owner_id`.
    pub async fn count_owned(
        conn: &mut DbConn,
        owner_id: &str,
        ids: &[CategoryId],
    ) -> Result<i64, sqlx::Error> {
        if ids.is_empty() {
            return Ok(0);
        }
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM categories WHERE fk_user_id = $1 AND id = ANY($2)",
        )
        .bind(owner_id)
        .bind(ids)
        .fetch_one(&mut *conn)
        .await
    }
}
