//! Dynamic SQL for term listings.
//!
//! [`TermQuery::build`] turns an owner id plus [`TermFilters`] into one
//! `SELECT` statement and its positional bind values. Clause order is fixed:
//!
//! 1. the relation `INNER JOIN`, when a category filter is present;
//! 2. `WHERE t.fk_user_id = $1`, always;
//! 3. `AND r.fk_category_id = $n`, when a category filter is present;
//! 4. `AND t.name ILIKE $n`, when a name filter is present;
//! 5. the checked/unchecked predicate (no bind value);
//! 6. a single `ORDER BY`, when a sort is present.
//!
//! Placeholders are numbered in append order, so `binds()` lines up with
//! them one-to-one.

use termkeeper_core::filters::{CheckedState, TermFilters, TermSort};

/// Column list for `terms` rows selected through the `t` alias.
pub const TERM_COLUMNS: &str =
    "t.id, t.fk_user_id, t.name, t.description, t.created_at, t.updated_at";

const CATEGORY_JOIN: &str = "INNER JOIN term_category_relations r ON t.id = r.fk_term_id";

/// A composed term listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermQuery {
    joins: Vec<&'static str>,
    conditions: Vec<String>,
    binds: Vec<String>,
    order_by: Option<&'static str>,
}

impl TermQuery {
    /// Compose the listing query for `owner_id`.
    pub fn build(owner_id: &str, filters: &TermFilters) -> Self {
        let mut query = Self {
            joins: Vec::new(),
            conditions: Vec::new(),
            binds: Vec::new(),
            order_by: None,
        };

        // Tenant scope, never omitted.
        query.push_bound("t.fk_user_id =", owner_id.to_string());

        if let Some(ref category_id) = filters.category_id {
            query.joins.push(CATEGORY_JOIN);
            query.push_bound("r.fk_category_id =", category_id.clone());
        }

        if let Some(ref needle) = filters.name_contains {
            query.push_bound("t.name ILIKE", format!("%{}%", escape_like(needle)));
        }

        if let Some(checked) = filters.checked {
            query.conditions.push(checked_predicate(checked).to_string());
        }

        query.order_by = filters.sort.map(order_by_clause);
        query
    }

    /// The full SQL text with `$n` placeholders.
    pub fn sql(&self) -> String {
        let mut sql = format!("SELECT {TERM_COLUMNS} FROM terms t");
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }
        sql.push_str(" WHERE ");
        sql.push_str(&self.conditions.join(" AND "));
        if let Some(order_by) = self.order_by {
            sql.push(' ');
            sql.push_str(order_by);
        }
        sql
    }

    /// Bind values in placeholder order.
    pub fn binds(&self) -> &[String] {
        &self.binds
    }

    fn push_bound(&mut self, lhs: &str, value: String) {
        let idx = self.binds.len() + 1;
        self.conditions.push(format!("{lhs} ${idx}"));
        self.binds.push(value);
    }
}

fn checked_predicate(checked: CheckedState) -> &'static str {
    match checked {
        CheckedState::Checked => "(t.description IS NULL OR t.description = '')",
        CheckedState::Unchecked => "(t.description IS NOT NULL AND t.description <> '')",
    }
}

fn order_by_clause(sort: TermSort) -> &'static str {
    match sort {
        TermSort::CreatedAtAsc => "ORDER BY t.created_at ASC",
        TermSort::CreatedAtDesc => "ORDER BY t.created_at DESC",
        TermSort::UpdatedAtAsc => "ORDER BY t.updated_at ASC",
        TermSort::UpdatedAtDesc => "ORDER BY t.updated_at DESC",
        TermSort::NameAsc => "ORDER BY t.name ASC",
        TermSort::NameDesc => "ORDER BY t.name DESC",
    }
}

/// Escape LIKE/ILIKE wildcard characters (`%`, `_`, `\`) in user input.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
