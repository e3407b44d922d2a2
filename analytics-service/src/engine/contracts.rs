use serde::Serialize;
use time::{Date, Duration};
use utility_domain::{ContractStatus, ContractorRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractSummary {
    pub total: usize,
    pub active: usize,
    pub expired: usize,
}

pub fn contract_summary(contracts: &[ContractorRecord]) -> ContractSummary {
    let active = contracts
        .iter()
        .filter(|c| c.status == ContractStatus::Active)
        .count();
    ContractSummary {
        total: contracts.len(),
        active,
        expired: contracts.len() - active,
    }
}

pub fn by_status(contracts: &[ContractorRecord], status: ContractStatus) -> Vec<&ContractorRecord> {
    contracts.iter().filter(|c| c.status == status).collect()
}

/// Active contracts whose end date falls within the next `days` days
/// (inclusive), soonest first. Contracts with no end date never expire.
pub fn expiring_within(
    contracts: &[ContractorRecord],
    today: Date,
    days: i64,
) -> Vec<&ContractorRecord> {
    let horizon = today + Duration::days(days);
    let mut expiring: Vec<&ContractorRecord> = contracts
        .iter()
        .filter(|c| c.status == ContractStatus::Active)
        .filter(|c| {
            c.end_date
                .map_or(false, |end| end >= today && end <= horizon)
        })
        .collect();
    expiring.sort_by_key(|c| c.end_date);
    expiring
}
