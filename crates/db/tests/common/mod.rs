//! Seeding helpers shared by the repository integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};

use termkeeper_core::id::{process_generator, IdGenerator};
use termkeeper_core::types::{DbId, Timestamp};
use termkeeper_db::models::category::{Category, CreateCategory};
use termkeeper_db::models::user::{CreateUser, User};
use termkeeper_db::repositories::{CategoryRepo, UserRepo};
use termkeeper_db::DbConn;

/// Deterministic ids: `PREFIX-0001`, `PREFIX-0002`, ...
pub struct SequentialIds {
    prefix: &'static str,
    next: AtomicU32,
}

impl SequentialIds {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicU32::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn new_id(&self, _now: Timestamp) -> DbId {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{n:04}", self.prefix)
    }
}

pub async fn seed_user(conn: &mut DbConn, name: &str) -> User {
    let input = CreateUser {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        password_hash: "$argon2id$not-a-real-hash".to_string(),
    };
    UserRepo::create(conn, process_generator(), &input)
        .await
        .expect("user creation should succeed")
}

pub async fn seed_category(conn: &mut DbConn, owner_id: &str, name: &str) -> Category {
    let input = CreateCategory {
        name: name.to_string(),
        hex_color_code: "#336699".to_string(),
    };
    CategoryRepo::create(conn, process_generator(), owner_id, &input)
        .await
        .expect("category creation should succeed")
}

/// Sorted copy, for comparing multisets of ids.
pub fn sorted(ids: &[DbId]) -> Vec<DbId> {
    let mut ids = ids.to_vec();
    ids.sort();
    ids
}
