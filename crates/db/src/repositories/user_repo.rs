//! Repository for the `users` table.

use chrono::Utc;
use termkeeper_core::id::IdGenerator;
use termkeeper_core::validation::validate_required;

use crate::error::RepoError;
use crate::models::user::{CreateUser, User};
use crate::DbConn;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

/// Provides account storage for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A duplicate email violates `uq_users_email`.
    pub async fn create(
        conn: &mut DbConn,
        ids: &dyn IdGenerator,
        input: &CreateUser,
    ) -> Result<User, RepoError> {
        validate_required("Name", &input.name)?;
        validate_required("Email", &input.email)?;
        validate_required("Password", &input.password_hash)?;

        let now = Utc::now();
        let query = format!(
            "INSERT INTO users (id, name, email, password_hash, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $5) \
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(ids.new_id(now))
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(now)
            .fetch_one(&mut *conn)
            .await?;
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(conn: &mut DbConn, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(
        conn: &mut DbConn,
        email: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Whether an account already uses `email`.
    pub async fn email_exists(conn: &mut DbConn, email: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&mut *conn)
            .await
    }
}
