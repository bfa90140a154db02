use std::fs;
use std::path::Path;

use serde::Deserialize;
use time::OffsetDateTime;

use usage_core::MeterReading;

/// Shape of the bundled sample-data file: historical electricity readings
/// keyed under `electricity`, with RFC 3339 timestamps.
#[derive(Debug, Deserialize)]
struct SeedFile {
    electricity: Vec<SeedReading>,
}

#[derive(Debug, Deserialize)]
struct SeedReading {
    cumulative: i64,
    #[serde(rename = "readingDate", with = "time::serde::rfc3339")]
    reading_date: OffsetDateTime,
    unit: String,
}

/// Load seed readings from `path`, truncating timestamps to their UTC
/// calendar date and sorting ascending so the stored series satisfies the
/// estimators' ordering precondition from the first request on.
pub fn load_seed_file(path: &Path) -> anyhow::Result<Vec<MeterReading>> {
    let contents = fs::read_to_string(path)?;
    let file: SeedFile = serde_json::from_str(&contents)?;

    let mut readings: Vec<MeterReading> = file
        .electricity
        .into_iter()
        .map(|entry| {
            let date = entry
                .reading_date
                .to_offset(time::UtcOffset::UTC)
                .date();
            MeterReading::new(entry.cumulative, date, entry.unit)
        })
        .collect();
    readings.sort_by_key(|r| r.reading_date);

    Ok(readings)
}
