//! Integration tests for the term/category relation store and the
//! category lookups it feeds.

mod common;

use common::{seed_category, seed_user, sorted};
use sqlx::PgPool;
use termkeeper_core::id::process_generator;
use termkeeper_core::types::CategoryId;
use termkeeper_db::repositories::{CategoryRepo, TermCategoryRepo, TermRepo};

async fn seed_categories(
    conn: &mut termkeeper_db::DbConn,
    owner_id: &str,
    names: &[&str],
) -> Vec<CategoryId> {
    let mut ids = Vec::new();
    for name in names {
        ids.push(seed_category(conn, owner_id, name).await.id);
    }
    ids
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_all_then_list(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let user = seed_user(&mut conn, "Alice").await;
    let cats = seed_categories(&mut conn, &user.id, &["cat1", "cat2"]).await;
    let term = TermRepo::create(&mut conn, process_generator(), &user.id, "Term", "")
        .await
        .unwrap();

    TermCategoryRepo::link_all(&mut conn, &term.id, &cats)
        .await
        .unwrap();

    let listed = TermCategoryRepo::list_category_ids(&mut conn, &term.id)
        .await
        .unwrap();
    assert_eq!(sorted(&listed), sorted(&cats));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_all_sets_exact_multiset(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let user = seed_user(&mut conn, "Alice").await;
    let cats = seed_categories(&mut conn, &user.id, &["a", "b", "c"]).await;
    let term = TermRepo::create(&mut conn, process_generator(), &user.id, "Term", "")
        .await
        .unwrap();
    TermCategoryRepo::link_all(&mut conn, &term.id, &cats[..2])
        .await
        .unwrap();

    let cases: Vec<Vec<CategoryId>> = vec![
        vec![cats[2].clone()],
        vec![],
        vec![cats[0].clone(), cats[0].clone(), cats[1].clone()],
        cats.clone(),
    ];

    for ids in cases {
        TermCategoryRepo::replace_all(&mut conn, &term.id, &ids)
            .await
            .unwrap();
        let listed = TermCategoryRepo::list_category_ids(&mut conn, &term.id)
            .await
            .unwrap();
        assert_eq!(sorted(&listed), sorted(&ids), "replace_all({ids:?})");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_all_is_idempotent(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let user = seed_user(&mut conn, "Alice").await;
    let cats = seed_categories(&mut conn, &user.id, &["a", "b"]).await;
    let term = TermRepo::create(&mut conn, process_generator(), &user.id, "Term", "")
        .await
        .unwrap();

    TermCategoryRepo::replace_all(&mut conn, &term.id, &cats)
        .await
        .unwrap();
    let once = TermCategoryRepo::list_category_ids(&mut conn, &term.id)
        .await
        .unwrap();

    TermCategoryRepo::replace_all(&mut conn, &term.id, &cats)
        .await
        .unwrap();
    let twice = TermCategoryRepo::list_category_ids(&mut conn, &term.id)
        .await
        .unwrap();

    assert_eq!(sorted(&once), sorted(&twice));
    assert_eq!(twice.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_all_without_relations_is_noop(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let user = seed_user(&mut conn, "Alice").await;
    let term = TermRepo::create(&mut conn, process_generator(), &user.id, "Bare", "")
        .await
        .unwrap();

    let removed = TermCategoryRepo::delete_all(&mut conn, &term.id)
        .await
        .unwrap();
    assert_eq!(removed, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_all_partial_failure_keeps_earlier_rows(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let user = seed_user(&mut conn, "Alice").await;
    let cats = seed_categories(&mut conn, &user.id, &["a", "b"]).await;
    let term = TermRepo::create(&mut conn, process_generator(), &user.id, "Term", "")
        .await
        .unwrap();

    // Third id violates the foreign key.
    let ids = vec![cats[0].clone(), cats[1].clone(), "missing".to_string()];
    let result = TermCategoryRepo::link_all(&mut conn, &term.id, &ids).await;
    assert!(result.is_err());

    let listed = TermCategoryRepo::list_category_ids(&mut conn, &term.id)
        .await
        .unwrap();
    assert_eq!(sorted(&listed), sorted(&cats));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_all_inside_rolled_back_transaction_leaves_nothing(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let user = seed_user(&mut conn, "Alice").await;
    let cats = seed_categories(&mut conn, &user.id, &["a"]).await;
    let term = TermRepo::create(&mut conn, process_generator(), &user.id, "Term", "")
        .await
        .unwrap();

    {
        let mut tx = pool.begin().await.unwrap();
        let ids = vec![cats[0].clone(), "missing".to_string()];
        let result = TermCategoryRepo::link_all(&mut tx, &term.id, &ids).await;
        assert!(result.is_err());
        tx.rollback().await.unwrap();
    }

    let listed = TermCategoryRepo::list_category_ids(&mut conn, &term.id)
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_ids_and_count_owned(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let alice = seed_user(&mut conn, "Alice").await;
    let bob = seed_user(&mut conn, "Bob").await;
    let mine = seed_categories(&mut conn, &alice.id, &["x", "y"]).await;
    let theirs = seed_categories(&mut conn, &bob.id, &["z"]).await;

    let empty = CategoryRepo::find_by_ids(&mut conn, &[]).await.unwrap();
    assert!(empty.is_empty());

    let with_dup = vec![mine[0].clone(), mine[0].clone(), mine[1].clone()];
    let found = CategoryRepo::find_by_ids(&mut conn, &with_dup).await.unwrap();
    let found_ids: Vec<CategoryId> = found.iter().map(|c| c.id.clone()).collect();
    assert_eq!(sorted(&found_ids), sorted(&mine));

    let owned = CategoryRepo::count_owned(&mut conn, &alice.id, &with_dup)
        .await
        .unwrap();
    assert_eq!(owned, 2);

    let mixed = vec![mine[0].clone(), theirs[0].clone()];
    let owned = CategoryRepo::count_owned(&mut conn, &alice.id, &mixed)
        .await
        .unwrap();
    assert_eq!(owned, 1);

    let listed = CategoryRepo::list_by_user(&mut conn, &alice.id).await.unwrap();
    let listed_names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(listed_names, ["x", "y"]);
}
