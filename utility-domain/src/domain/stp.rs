use serde::{Deserialize, Serialize};
use time::Date;

/// One calendar day of sewage-treatment-plant operation.
///
/// Volumes are m³. `total_inlet_m3` is reported by the plant and only
/// approximately reconciles with `direct_inline_m3` plus the tanker-derived
/// volume; the mismatch is a known data-quality characteristic and is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StpDailyRecord {
    pub date: Date,
    pub tanker_trips: u32,
    pub expected_tanker_volume_m3: f64,
    pub direct_inline_m3: f64,
    pub total_inlet_m3: f64,
    pub total_treated_m3: f64,
    pub total_tse_m3: f64,
    /// Operator observations for the day; empty when nothing was logged.
    pub observations: String,
    pub action_1: String,
    pub action_2: String,
}

impl StpDailyRecord {
    /// Calendar-month bucket key, year plus zero-padded month ("2024-07").
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), u8::from(self.date.month()))
    }

    /// A day counts as a maintenance day when either action field was filled in.
    pub fn has_maintenance(&self) -> bool {
        !self.action_1.trim().is_empty() || !self.action_2.trim().is_empty()
    }

    pub fn has_observations(&self) -> bool {
        !self.observations.trim().is_empty()
    }
}
