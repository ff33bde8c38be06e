use std::path::{Path, PathBuf};

use dealerdesk::adapter::outbound::sqlite::{create_pool, DbPool, PoolOptions, SqliteStore};
use dealerdesk::testkit::store::apply_schema;
use tempfile::TempDir;

/// Temporary SQLite database with the schema applied.
///
/// The backing directory is removed when the value drops.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(format!("dealerdesk-{name}.db"));

        let pool = create_pool(&path.display().to_string(), PoolOptions::default())
            .expect("create sqlite pool");
        apply_schema(&pool).expect("apply schema");

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> SqliteStore {
        SqliteStore::new(self.pool.clone())
    }
}
