pub mod contracts;
pub mod electricity;
pub mod stp;
pub mod water;

pub use contracts::{ContractStatus, ContractorRecord};
pub use electricity::ElectricityFacilityRecord;
pub use stp::StpDailyRecord;
pub use water::{ConsumptionTypeRecord, CustomerMeterRecord, ZoneRecord};

use crate::series::MonthlySeries;

/// Anything with a display label and a monthly consumption series.
///
/// Lets category-share aggregation be written once and applied to both water
/// consumption types and electricity facilities.
pub trait Metered {
    fn label(&self) -> &str;
    fn series(&self) -> &MonthlySeries;
}
