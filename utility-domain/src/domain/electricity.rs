use serde::{Deserialize, Serialize};

use crate::domain::Metered;
use crate::series::MonthlySeries;

/// A metered electricity consumer (pumping station, street lighting, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectricityFacilityRecord {
    pub facility: String,
    pub category: String,
    pub account_no: String,
    pub kwh: MonthlySeries,
}

impl Metered for ElectricityFacilityRecord {
    fn label(&self) -> &str {
        &self.facility
    }

    fn series(&self) -> &MonthlySeries {
        &self.kwh
    }
}
