//! Repository for the `term_category_relations` join table.
//!
//! Every call goes straight to the database; nothing is cached. Multi-row
//! writes are issued one statement at a time with no internal rollback, so
//! callers that need all-or-nothing behaviour pass a transaction.

use termkeeper_core::types::CategoryId;

use crate::DbConn;

/// Maintains the many-to-many link between terms and categories.
pub struct TermCategoryRepo;

impl TermCategoryRepo {
    /// Insert one relation row per id, in the given order. Duplicates in
    /// `category_ids` produce duplicate rows.
    pub async fn link_all(
        conn: &mut DbConn,
        term_id: &str,
        category_ids: &[CategoryId],
    ) -> Result<(), sqlx::Error> {
        for category_id in category_ids {
            sqlx::query(
                "INSERT INTO term_category_relations (fk_term_id, fk_category_id) VALUES ($1, $2)",
            )
            .bind(term_id)
            .bind(category_id)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    /// Replace all relations of `term_id` with exactly `category_ids`.
    pub async fn replace_all(
        conn: &mut DbConn,
        term_id: &str,
        category_ids: &[CategoryId],
    ) -> Result<(), sqlx::Error> {
        Self::delete_all(conn, term_id).await?;
        Self::link_all(conn, term_id, category_ids).await
    }

    /// Category ids linked to `term_id`, in database order.
    pub async fn list_category_ids(
        conn: &mut DbConn,
        term_id: &str,
    ) -> Result<Vec<CategoryId>, sqlx::Error> {
        sqlx::query_scalar::<_, CategoryId>(
            "SELECT fk_category_id FROM term_category_relations WHERE fk_term_id = $1",
        )
        .bind(term_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Remove all relations of `term_id`. Returns the number of rows removed;
    /// zero is not an error.
    pub async fn delete_all(conn: &mut DbConn, term_id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM term_category_relations WHERE fk_term_id = $1")
            .bind(term_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
