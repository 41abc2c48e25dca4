//! Query parameter types for API handlers.

use serde::Deserialize;
use termkeeper_core::filters::{CheckedState, TermFilters};

use crate::error::AppError;

/// Query parameters for `GET /terms` (`?query=&category=&sort=&checked=`).
///
/// Empty values are treated as absent. An unrecognised `sort` is ignored;
/// an unrecognised `checked` is rejected.
#[derive(Debug, Default, Deserialize)]
pub struct TermListParams {
    pub query: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub checked: Option<String>,
}

impl TermListParams {
    /// Convert into repository filters.
    pub fn into_filters(self) -> Result<TermFilters, AppError> {
        let mut filters = TermFilters::default();

        if let Some(needle) = non_empty(self.query) {
            filters = filters.with_name_contains(needle);
        }
        if let Some(category_id) = non_empty(self.category) {
            filters = filters.with_category(category_id);
        }
        if let Some(token) = non_empty(self.sort) {
            filters = filters.with_sort_token(&token);
        }
        if let Some(flag) = non_empty(self.checked) {
            let state = CheckedState::from_flag(&flag).ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Invalid checked value '{flag}'. Expected true or false"
                ))
            })?;
            filters = filters.with_checked(state);
        }

        Ok(filters)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
