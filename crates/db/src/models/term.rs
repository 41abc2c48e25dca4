//! Term entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use termkeeper_core::types::{CategoryId, TermId, Timestamp, UserId};

use crate::models::category::Category;

/// A row from the `terms` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Term {
    pub id: TermId,
    #[sqlx(rename = "fk_user_id")]
    #[serde(skip_serializing)]
    pub user_id: UserId,
    pub name: String,
    /// Empty means the term is "checked".
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Term {
    pub fn is_checked(&self) -> bool {
        self.description.is_empty()
    }
}

/// A term together with the categories linked to it.
#[derive(Debug, Clone, Serialize)]
pub struct TermWithCategories {
    #[serde(flatten)]
    pub term: Term,
    pub categories: Vec<Category>,
}

/// DTO for creating a new term.
#[derive(Debug, Deserialize)]
pub struct CreateTerm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
}

/// DTO for replacing a term's editable fields and its category links.
#[derive(Debug, Deserialize)]
pub struct UpdateTerm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
}
