//! Database Module
//!
//! Embedded SurrealDB storage. Production uses the RocksDB engine under
//! the work directory; tests use the in-memory engine.

pub mod repository;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "lavadero";
const DATABASE: &str = "main";

/// Open the embedded database under `<work_dir>/db`
pub async fn init(work_dir: &str) -> Result<Surreal<Db>, AppError> {
    let path = format!("{work_dir}/db");
    let db = Surreal::new::<RocksDb>(path.as_str())
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

    tracing::info!(path = %path, "database opened (RocksDB engine)");
    Ok(db)
}

/// Open an in-memory database (tests, ephemeral tooling)
pub async fn init_mem() -> Result<Surreal<Db>, AppError> {
    let db = Surreal::new::<Mem>(())
        .await
        .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;
    Ok(db)
}
