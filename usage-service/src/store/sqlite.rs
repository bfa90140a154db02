use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};

use usage_core::MeterReading;

use super::{ReadingStore, StoreError};

/// In-memory SQLite storage, populated at startup and gone on restart.
///
/// SQLite gives every connection its own `:memory:` database, so the pool is
/// pinned to a single connection that is never recycled; dropping it would
/// drop every row with it.
pub struct SqliteReadingStore {
    pool: SqlitePool,
}

impl SqliteReadingStore {
    pub async fn open() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS meter_reads (
                cumulative   INTEGER NOT NULL,
                reading_date TEXT    NOT NULL,
                unit         TEXT    NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Bulk-insert historical readings in one statement.
    pub async fn seed(&self, readings: &[MeterReading]) -> Result<(), StoreError> {
        if readings.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(
            "INSERT INTO meter_reads (cumulative, reading_date, unit) ",
        );
        builder.push_values(readings, |mut b, reading| {
            b.push_bind(reading.cumulative)
                .push_bind(reading.reading_date)
                .push_bind(&reading.unit);
        });

        builder.build().execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReadingStore for SqliteReadingStore {
    async fn fetch_all(&self) -> Result<Vec<MeterReading>, StoreError> {
        let rows = sqlx::query_as::<_, MeterReading>(
            "SELECT cumulative, reading_date, unit
             FROM meter_reads
             ORDER BY reading_date",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, reading: MeterReading) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO meter_reads (cumulative, reading_date, unit) VALUES (?, ?, ?)")
            .bind(reading.cumulative)
            .bind(reading.reading_date)
            .bind(&reading.unit)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
