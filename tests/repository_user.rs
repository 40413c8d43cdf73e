//! PostgreSQL repository tests. `#[sqlx::test]` creates a fresh database per
//! test on the server named by `DATABASE_URL`.

mod common;

use sqlx::PgPool;
use std::sync::Arc;
use user_service::domain::entities::NewUser;
use user_service::domain::repositories::UserRepository;
use user_service::error::AppError;
use user_service::infrastructure::persistence::PgUserRepository;

fn repo(pool: PgPool) -> PgUserRepository {
    PgUserRepository::new(Arc::new(pool))
}

fn new_user(name: &str, dob: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        dob: common::date(dob),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find(pool: PgPool) {
    let repo = repo(pool);

    let created = repo.create(new_user("Ada", "1815-12-10")).await.unwrap();
    let found = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(found, created);
    assert_eq!(found.dob, Some(common::date("1815-12-10")));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_returns_none(pool: PgPool) {
    let repo = repo(pool);

    assert!(repo.find_by_id(12345).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_orders_by_id_with_window(pool: PgPool) {
    let repo = repo(pool);
    let mut ids = Vec::new();
    for i in 0..5 {
        let user = repo
            .create(new_user(&format!("User {i}"), "2000-01-01"))
            .await
            .unwrap();
        ids.push(user.id);
    }

    let page = repo.list(2, 2).await.unwrap();

    assert_eq!(page.iter().map(|u| u.id).collect::<Vec<_>>(), ids[2..4].to_vec());
    assert!(repo.list(10, 10).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_replaces_row(pool: PgPool) {
    let repo = repo(pool);
    let user = repo.create(new_user("Ada", "1815-12-10")).await.unwrap();

    let updated = repo
        .update(user.id, new_user("Ada King", "1815-12-11"))
        .await
        .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.name, "Ada King");
    assert_eq!(updated.dob, Some(common::date("1815-12-11")));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_is_not_found(pool: PgPool) {
    let repo = repo(pool);

    let err = repo
        .update(999, new_user("Nobody", "2000-01-01"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_twice(pool: PgPool) {
    let repo = repo(pool);
    let user = repo.create(new_user("Ada", "1815-12-10")).await.unwrap();

    repo.delete(user.id).await.unwrap();
    let err = repo.delete(user.id).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_ping(pool: PgPool) {
    assert!(repo(pool).ping().await.is_ok());
}
