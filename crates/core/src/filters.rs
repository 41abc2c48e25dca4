//! Filter and sort options for listing a user's terms.
//!
//! Every field of [`TermFilters`] is optional; an absent field applies no
//! filter. "Checked" is derived from the description, not stored: a term is
//! checked when its description is empty.

use serde::{Deserialize, Serialize};

use crate::types::CategoryId;

/// Derived review state of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckedState {
    /// Description is null or empty.
    Checked,
    /// Description is non-empty.
    Unchecked,
}

impl CheckedState {
    /// Parse the `checked` query flag. `true`/`checked` and `false`/`unchecked`
    /// are accepted; anything else yields `None`.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "true" | "checked" => Some(Self::Checked),
            "false" | "unchecked" => Some(Self::Unchecked),
            _ => None,
        }
    }
}

/// The six supported orderings for term listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermSort {
    #[serde(rename = "createdAt_asc", alias = "created_at_asc")]
    CreatedAtAsc,
    #[serde(rename = "createdAt_desc", alias = "created_at_desc")]
    CreatedAtDesc,
    #[serde(rename = "updatedAt_asc", alias = "updated_at_asc")]
    UpdatedAtAsc,
    #[serde(rename = "updatedAt_desc", alias = "updated_at_desc")]
    UpdatedAtDesc,
    #[serde(rename = "name_asc")]
    NameAsc,
    #[serde(rename = "name_desc")]
    NameDesc,
}

/// Canonical sort tokens, in the same order as the enum variants.
pub const SORT_TOKENS: &[&str] = &[
    "createdAt_asc",
    "createdAt_desc",
    "updatedAt_asc",
    "updatedAt_desc",
    "name_asc",
    "name_desc",
];

impl TermSort {
    /// Map a sort token to a sort. The snake_case spellings
    /// (`created_at_asc`, ...) are accepted as aliases. Unknown tokens
    /// return `None` and are meant to be ignored rather than rejected.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "createdAt_asc" | "created_at_asc" => Some(Self::CreatedAtAsc),
            "createdAt_desc" | "created_at_desc" => Some(Self::CreatedAtDesc),
            "updatedAt_asc" | "updated_at_asc" => Some(Self::UpdatedAtAsc),
            "updatedAt_desc" | "updated_at_desc" => Some(Self::UpdatedAtDesc),
            "name_asc" => Some(Self::NameAsc),
            "name_desc" => Some(Self::NameDesc),
            _ => None,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            Self::CreatedAtAsc => "createdAt_asc",
            Self::CreatedAtDesc => "createdAt_desc",
            Self::UpdatedAtAsc => "updatedAt_asc",
            Self::UpdatedAtDesc => "updatedAt_desc",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
        }
    }
}

/// Optional filters for a term listing. Combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFilters {
    /// Case-insensitive substring of the term name.
    pub name_contains: Option<String>,
    /// Only terms linked to this category.
    pub category_id: Option<CategoryId>,
    pub checked: Option<CheckedState>,
    pub sort: Option<TermSort>,
}

impl TermFilters {
    pub fn with_name_contains(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = Some(needle.into());
        self
    }

    pub fn with_category(mut self, category_id: impl Into<CategoryId>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    pub fn with_checked(mut self, checked: CheckedState) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn with_sort(mut self, sort: TermSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the sort from a raw token; unknown tokens leave the sort unset.
    pub fn with_sort_token(mut self, token: &str) -> Self {
        self.sort = TermSort::from_token(token);
        self
    }
}
