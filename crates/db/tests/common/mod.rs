use itemstore_db::{create_pool, init_schema, DbConfig, DbPool};
use tempfile::TempDir;

/// A pool over a throwaway SQLite file. The directory is removed when the
/// returned guard drops, so keep it alive for the whole test.
pub async fn test_pool() -> (DbPool, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("items.db").display());

    let pool = create_pool(&DbConfig::new(url))
        .await
        .expect("open sqlite pool");
    init_schema(&pool).await.expect("create items schema");

    (pool, dir)
}
