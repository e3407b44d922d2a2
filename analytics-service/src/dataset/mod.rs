//! The hand-authored mock dataset backing the dashboard.
//!
//! Everything is embedded as CSV text and parsed once at startup; records are
//! immutable after load and all derived figures are recomputed on demand by
//! the engine.

pub mod contracts;
pub mod electricity;
pub mod stp;
pub mod water;

use utility_domain::{
    ConsumptionTypeRecord, ContractorRecord, CustomerMeterRecord, ElectricityFacilityRecord,
    MonthlySeries, StpDailyRecord, ZoneRecord,
};

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column '{0}' in CSV record")]
    MissingColumn(String),
    #[error("invalid value '{value}' in column '{column}': {message}")]
    InvalidValue {
        column: String,
        value: String,
        message: String,
    },
}

/// Header-name based column access over a CSV row.
pub(crate) struct Row<'h, 'r> {
    headers: &'h csv::StringRecord,
    record: &'r csv::StringRecord,
}

impl<'h, 'r> Row<'h, 'r> {
    pub(crate) fn new(headers: &'h csv::StringRecord, record: &'r csv::StringRecord) -> Self {
        Self { headers, record }
    }

    pub(crate) fn get(&self, name: &str) -> Result<&'r str, DatasetError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .and_then(|idx| self.record.get(idx))
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
    }

    pub(crate) fn f64(&self, name: &str) -> Result<f64, DatasetError> {
        let raw = self.get(name)?;
        raw.trim().parse().map_err(|e: std::num::ParseFloatError| {
            DatasetError::InvalidValue {
                column: name.to_string(),
                value: raw.to_string(),
                message: e.to_string(),
            }
        })
    }

    pub(crate) fn u32(&self, name: &str) -> Result<u32, DatasetError> {
        let raw = self.get(name)?;
        raw.trim().parse().map_err(|e: std::num::ParseIntError| {
            DatasetError::InvalidValue {
                column: name.to_string(),
                value: raw.to_string(),
                message: e.to_string(),
            }
        })
    }
}

/// The full record catalog, loaded once at process start.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Canonical month ordering, as authored in `water_main.csv`.
    pub months: Vec<String>,
    pub main_bulk: MonthlySeries,
    pub zones: Vec<ZoneRecord>,
    pub consumption_types: Vec<ConsumptionTypeRecord>,
    pub customer_meters: Vec<CustomerMeterRecord>,
    pub stp_daily_log: Vec<StpDailyRecord>,
    pub electricity: Vec<ElectricityFacilityRecord>,
    pub contractors: Vec<ContractorRecord>,
}

impl Dataset {
    /// Parse the embedded mock data.
    pub fn embedded() -> Result<Self, DatasetError> {
        let (months, main_bulk) = water::load_main(include_str!("../../data/water_main.csv"))?;
        let zones = water::load_zones(include_str!("../../data/water_zones.csv"))?;
        let consumption_types =
            water::load_consumption_types(include_str!("../../data/consumption_types.csv"))?;
        let customer_meters =
            water::load_customer_meters(include_str!("../../data/customer_meters.csv"))?;
        let stp_daily_log = stp::load_daily_log(include_str!("../../data/stp_daily_log.csv"))?;
        let electricity =
            electricity::load_facilities(include_str!("../../data/electricity_facilities.csv"))?;
        let contractors = contracts::load_contractors(include_str!("../../data/contractors.csv"))?;

        tracing::debug!(
            months = months.len(),
            zones = zones.len(),
            stp_days = stp_daily_log.len(),
            facilities = electricity.len(),
            "mock dataset loaded"
        );

        Ok(Self {
            months,
            main_bulk,
            zones,
            consumption_types,
            customer_meters,
            stp_daily_log,
            electricity,
            contractors,
        })
    }

    /// Latest month in the canonical ordering, if any.
    pub fn latest_month(&self) -> Option<&str> {
        self.months.last().map(String::as_str)
    }
}
