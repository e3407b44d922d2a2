use serde::{Deserialize, Serialize};

use crate::domain::Metered;
use crate::series::MonthlySeries;

/// A metering subdivision of the water network: one bulk meter at the zone
/// boundary plus the aggregate of the individual meters inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub code: String,
    pub label: String,
    pub bulk: MonthlySeries,
    pub individual: MonthlySeries,
}

/// A consumption category (irrigation, residential villa, ...) with its
/// monthly consumption and the source's precomputed share-of-total series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionTypeRecord {
    pub label: String,
    pub consumption: MonthlySeries,
    pub pct_of_total: MonthlySeries,
}

impl Metered for ConsumptionTypeRecord {
    fn label(&self) -> &str {
        &self.label
    }

    fn series(&self) -> &MonthlySeries {
        &self.consumption
    }
}

/// A single customer meter with its reading for the reporting period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerMeterRecord {
    pub account_id: String,
    pub name: String,
    pub zone_code: String,
    pub consumption_m3: f64,
}
