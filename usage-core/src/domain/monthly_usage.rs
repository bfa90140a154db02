/// Estimated usage for one calendar month, derived from the readings around
/// it.
///
/// `month` is the calendar month 1–12. The wire shape keeps the historical
/// `monthlyElectricity` field name.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyUsage {
    pub month: u8,
    pub year: i32,
    pub monthly_electricity: i64,
}
