use time::macros::format_description;
use time::Date;
use utility_domain::{ContractStatus, ContractorRecord};

use crate::dataset::{DatasetError, Row};

/// Contractor tracker rows.
///
/// Expected header columns (by name): contractor, service, status,
/// contract_type, start_date, end_date (both optional, YYYY-MM-DD),
/// annual_value (free text), notes.
pub fn load_contractors(csv_text: &str) -> Result<Vec<ContractorRecord>, DatasetError> {
    let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = rdr.headers()?.clone();

    let mut contractors = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = Row::new(&headers, &record);

        let status_raw = row.get("status")?;
        let status = ContractStatus::parse(status_raw).ok_or_else(|| DatasetError::InvalidValue {
            column: "status".to_string(),
            value: status_raw.to_string(),
            message: "expected Active or Expired".to_string(),
        })?;

        contractors.push(ContractorRecord {
            contractor: row.get("contractor")?.trim().to_string(),
            service: row.get("service")?.trim().to_string(),
            status,
            contract_type: row.get("contract_type")?.trim().to_string(),
            start_date: parse_optional_date("start_date", row.get("start_date")?)?,
            end_date: parse_optional_date("end_date", row.get("end_date")?)?,
            annual_value: row.get("annual_value")?.trim().to_string(),
            notes: row.get("notes")?.trim().to_string(),
        });
    }

    Ok(contractors)
}

fn parse_optional_date(column: &str, raw: &str) -> Result<Option<Date>, DatasetError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let format = format_description!("[year]-[month]-[day]");
    Date::parse(trimmed, &format)
        .map(Some)
        .map_err(|e| DatasetError::InvalidValue {
            column: column.to_string(),
            value: raw.to_string(),
            message: e.to_string(),
        })
}
