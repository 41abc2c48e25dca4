//! Category model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use termkeeper_core::types::{CategoryId, Timestamp, UserId};

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Category {
    pub id: CategoryId,
    #[sqlx(rename = "fk_user_id")]
    #[serde(skip_serializing)]
    pub user_id: UserId,
    pub name: String,
    pub hex_color_code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub hex_color_code: String,
}
