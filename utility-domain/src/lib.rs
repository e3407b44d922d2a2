pub mod domain;
pub mod series;

pub use domain::{
    ConsumptionTypeRecord, ContractStatus, ContractorRecord, CustomerMeterRecord,
    ElectricityFacilityRecord, Metered, StpDailyRecord, ZoneRecord,
};
pub use series::MonthlySeries;
