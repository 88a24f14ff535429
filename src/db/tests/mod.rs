use super::*;
use crate::Error;
use tempfile::NamedTempFile;

// The temp file must outlive the pool, so it travels with the handle
async fn test_db() -> (Database, NamedTempFile) {
    let file = NamedTempFile::new().unwrap();
    let url = format!("sqlite://{}", file.path().display());
    let db = Database::connect(&url).await.unwrap();
    (db, file)
}

#[tokio::test]
async fn connect_runs_migrations_and_creates_users_table() {
    let (db, _file) = test_db().await;

    // Table exists and is empty
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn migrations_are_idempotent_per_version() {
    let (db, _file) = test_db().await;

    let versions: Vec<i64> = sqlx::query_scalar("SELECT version FROM schema_version")
        .fetch_all(db.pool())
        .await
        .unwrap();
    assert_eq!(versions, vec![1]);
}

#[tokio::test]
async fn invalid_database_url_is_a_connection_error() {
    let result = Database::connect("not a url").await;
    assert!(matches!(
        result,
        Err(Error::Database(crate::DatabaseError::ConnectionFailed(_)))
    ));
}

#[tokio::test]
async fn insert_then_find_by_matching_credentials() {
    let (db, _file) = test_db().await;
    let id = db.insert_user("alice", "hunter2").await.unwrap();

    let row = db
        .find_by_credentials("alice", "hunter2")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.id, id);
    assert_eq!(row.username, "alice");
}

#[tokio::test]
async fn wrong_password_and_unknown_user_are_both_none() {
    let (db, _file) = test_db().await;
    db.insert_user("alice", "hunter2").await.unwrap();

    let wrong_password = db.find_by_credentials("alice", "wrong").await.unwrap();
    let unknown_user = db.find_by_credentials("bob", "hunter2").await.unwrap();

    assert!(wrong_password.is_none());
    assert!(unknown_user.is_none());
}

#[tokio::test]
async fn username_is_unique() {
    let (db, _file) = test_db().await;
    db.insert_user("alice", "one").await.unwrap();

    let result = db.insert_user("alice", "two").await;
    assert!(matches!(
        result,
        Err(Error::Database(crate::DatabaseError::QueryFailed(_)))
    ));
}

#[tokio::test]
async fn credential_comparison_is_exact() {
    let (db, _file) = test_db().await;
    db.insert_user("alice", "Secret ").await.unwrap();

    // No trimming, no case folding
    assert!(db.find_by_credentials("alice", "Secret").await.unwrap().is_none());
    assert!(db.find_by_credentials("alice", "secret ").await.unwrap().is_none());
    assert!(db.find_by_credentials("alice", "Secret ").await.unwrap().is_some());
}
