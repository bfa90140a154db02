use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use time::Date;

use usage_core::estimate::{calculate_monthly, estimate_monthly, EstimateError};
use usage_core::{MeterReading, MonthlyUsage};

use crate::store::{ReadingStore, StoreError};
use crate::validate;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn ReadingStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ReadingStore>) -> Self {
        Self { store }
    }
}

/// The four historical endpoints of the energy usage service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/getMeterReading", get(get_meter_readings))
        .route("/estimateMeterReadings", get(estimate_meter_readings))
        .route("/calculateMeterReadings", get(calculate_meter_readings))
        .route("/setMeterReading", post(set_meter_reading))
        .with_state(state)
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "store operation failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "could not access meter readings".to_string(),
        }
    }
}

impl From<EstimateError> for ApiError {
    fn from(e: EstimateError) -> Self {
        tracing::warn!(error = %e, "stored readings cannot produce estimates");
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: e.to_string(),
        }
    }
}

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(serde::Deserialize)]
struct IncomingMeterReading {
    cumulative: i64,
    #[serde(with = "iso_date")]
    reading_date: Date,
    unit: String,
}

impl From<IncomingMeterReading> for MeterReading {
    fn from(i: IncomingMeterReading) -> Self {
        MeterReading::new(i.cumulative, i.reading_date, i.unit)
    }
}

async fn get_meter_readings(
    State(state): State<AppState>,
) -> Result<Json<Vec<MeterReading>>, ApiError> {
    metrics::counter!("readings_requests_total").increment(1);

    let readings = state.store.fetch_all().await?;
    Ok(Json(readings))
}

async fn estimate_meter_readings(
    State(state): State<AppState>,
) -> Result<Json<Vec<Option<MonthlyUsage>>>, ApiError> {
    metrics::counter!("estimate_requests_total").increment(1);

    let readings = state.store.fetch_all().await?;
    let usage = estimate_monthly(&readings)?;
    Ok(Json(usage))
}

async fn calculate_meter_readings(
    State(state): State<AppState>,
) -> Result<Json<Vec<Option<MonthlyUsage>>>, ApiError> {
    metrics::counter!("calculate_requests_total").increment(1);

    let readings = state.store.fetch_all().await?;
    let usage = calculate_monthly(&readings)?;
    Ok(Json(usage))
}

async fn set_meter_reading(
    State(state): State<AppState>,
    Json(incoming): Json<IncomingMeterReading>,
) -> Result<(StatusCode, Json<MeterReading>), ApiError> {
    let reading: MeterReading = incoming.into();

    if let Err(e) = validate::validate_reading(&reading) {
        metrics::counter!("reading_validation_rejected_total").increment(1);
        return Err(ApiError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: e.to_string(),
        });
    }

    state.store.insert(reading.clone()).await?;
    metrics::counter!("readings_inserted_total").increment(1);
    tracing::info!(
        date = %reading.reading_date,
        cumulative = reading.cumulative,
        "meter reading inserted"
    );

    Ok((StatusCode::CREATED, Json(reading)))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use time::macros::date;

    use usage_core::ENERGY_UNIT;

    use super::*;

    #[derive(Default)]
    struct StubStore {
        readings: Mutex<Vec<MeterReading>>,
    }

    impl StubStore {
        fn with(readings: Vec<MeterReading>) -> Arc<Self> {
            Arc::new(Self {
                readings: Mutex::new(readings),
            })
        }
    }

    #[async_trait::async_trait]
    impl ReadingStore for StubStore {
        async fn fetch_all(&self) -> Result<Vec<MeterReading>, StoreError> {
            let mut readings = self.readings.lock().unwrap().clone();
            readings.sort_by_key(|r| r.reading_date);
            Ok(readings)
        }

        async fn insert(&self, reading: MeterReading) -> Result<(), StoreError> {
            self.readings.lock().unwrap().push(reading);
            Ok(())
        }
    }

    fn sample_readings() -> Vec<MeterReading> {
        vec![
            MeterReading::new(100, date!(2023 - 01 - 01), ENERGY_UNIT),
            MeterReading::new(200, date!(2023 - 01 - 15), ENERGY_UNIT),
            MeterReading::new(340, date!(2023 - 02 - 01), ENERGY_UNIT),
        ]
    }

    #[tokio::test]
    async fn readings_endpoint_returns_the_stored_series() {
        let state = AppState::new(StubStore::with(sample_readings()));

        let Json(readings) = get_meter_readings(State(state)).await.unwrap();
        assert_eq!(readings, sample_readings());
    }

    #[tokio::test]
    async fn estimate_endpoint_pads_the_sequence_ends() {
        let state = AppState::new(StubStore::with(sample_readings()));

        let Json(usage) = estimate_meter_readings(State(state)).await.unwrap();
        assert_eq!(usage.len(), 3);
        assert_eq!(usage[0], None);
        assert_eq!(usage[2], None);
        assert_eq!(usage[1].as_ref().unwrap().monthly_electricity, 240);
    }

    #[tokio::test]
    async fn calculate_endpoint_runs_the_interpolating_pipeline() {
        let readings = vec![
            MeterReading::new(100, date!(2023 - 01 - 05), ENERGY_UNIT),
            MeterReading::new(220, date!(2023 - 02 - 03), ENERGY_UNIT),
            MeterReading::new(350, date!(2023 - 03 - 02), ENERGY_UNIT),
            MeterReading::new(470, date!(2023 - 04 - 04), ENERGY_UNIT),
        ];
        let state = AppState::new(StubStore::with(readings));

        let Json(usage) = calculate_meter_readings(State(state)).await.unwrap();
        assert_eq!(usage.len(), 4);
        assert!(usage[1].is_some() && usage[2].is_some());
    }

    #[tokio::test]
    async fn estimate_endpoint_degrades_on_short_series() {
        let state = AppState::new(StubStore::with(vec![MeterReading::new(
            100,
            date!(2023 - 01 - 01),
            ENERGY_UNIT,
        )]));

        let Json(usage) = estimate_meter_readings(State(state)).await.unwrap();
        assert_eq!(usage, vec![None]);
    }

    #[tokio::test]
    async fn insert_accepts_a_valid_reading() {
        let store = StubStore::with(Vec::new());
        let state = AppState::new(store.clone());

        let incoming = IncomingMeterReading {
            cumulative: 500,
            reading_date: date!(2023 - 05 - 01),
            unit: ENERGY_UNIT.to_string(),
        };
        let (status, Json(stored)) = set_meter_reading(State(state), Json(incoming))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(stored.cumulative, 500);
        assert_eq!(store.readings.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insert_rejects_a_negative_cumulative() {
        let store = StubStore::with(Vec::new());
        let state = AppState::new(store.clone());

        let incoming = IncomingMeterReading {
            cumulative: -5,
            reading_date: date!(2023 - 05 - 01),
            unit: ENERGY_UNIT.to_string(),
        };
        let err = set_meter_reading(State(state), Json(incoming))
            .await
            .err()
            .expect("negative cumulative must be rejected");

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(store.readings.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_rejects_a_foreign_unit() {
        let state = AppState::new(StubStore::with(Vec::new()));

        let incoming = IncomingMeterReading {
            cumulative: 5,
            reading_date: date!(2023 - 05 - 01),
            unit: "MWh".to_string(),
        };
        let err = set_meter_reading(State(state), Json(incoming))
            .await
            .err()
            .expect("foreign unit must be rejected");
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
