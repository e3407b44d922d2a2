use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    Active,
    Expired,
}

impl ContractStatus {
    /// Case-insensitive parse of the status column ("Active" / "Expired").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "expired" => Some(Self::Expired),
            _ => None,
        }
    }
}

/// A service contract as tracked on the contractor page. The monetary field
/// is free text in the source data (amount, currency and period in one
/// string) and is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractorRecord {
    pub contractor: String,
    pub service: String,
    pub status: ContractStatus,
    pub contract_type: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub annual_value: String,
    pub notes: String,
}
