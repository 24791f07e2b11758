pub mod lead;
pub mod migration;

use crate::Result;
use deadpool_sqlite::{Config, Pool, Runtime};
use std::path::PathBuf;
use tracing::info;

pub async fn pool(path: PathBuf) -> Result<Pool> {
    let pool_size = std::thread::available_parallelism()
        .map(|n| n.get() * 2)
        .unwrap_or(8);
    info!(path = %path.display(), pool_size, "Opening lead database");
    let pool = Config::new(path)
        .builder(Runtime::Tokio1)?
        .max_size(pool_size)
        .build()?;
    pool.get()
        .await?
        .interact(|conn| -> Result<()> {
            conn.pragma_update(None, "journal_mode", "WAL")?;
            migration::run(conn)
        })
        .await??;
    Ok(pool)
}

#[cfg(test)]
pub mod test {
    use deadpool_sqlite::{Config, Pool, Runtime};

    pub(crate) fn conn() -> rusqlite::Connection {
        let mut conn = rusqlite::Connection::open_in_memory().unwrap();
        super::migration::run(&mut conn).unwrap();
        conn
    }

    // An in-memory database lives as long as its connection, so the pool is capped at one
    pub(crate) async fn pool() -> Pool {
        let pool = Config::new(":memory:")
            .builder(Runtime::Tokio1)
            .unwrap()
            .max_size(1)
            .build()
            .unwrap();
        pool.get()
            .await
            .unwrap()
            .interact(|conn| super::migration::run(conn))
            .await
            .unwrap()
            .unwrap();
        pool
    }
}
