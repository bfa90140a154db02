mod sqlite;

pub use sqlite::SqliteReadingStore;

use usage_core::MeterReading;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Snapshot-read / append storage for meter readings.
///
/// `fetch_all` returns the full series ordered ascending by reading date,
/// which is exactly the precondition the estimators check for. Request
/// handlers hold the store behind this seam so tests can substitute an
/// in-process stub.
#[async_trait::async_trait]
pub trait ReadingStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<MeterReading>, StoreError>;

    async fn insert(&self, reading: MeterReading) -> Result<(), StoreError>;
}
