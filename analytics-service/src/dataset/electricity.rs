use utility_domain::{ElectricityFacilityRecord, MonthlySeries};

use crate::dataset::{DatasetError, Row};

/// Metered electricity facilities in long format.
///
/// Expected header columns (by name): facility, category, account_no, month,
/// kwh. Facility catalog order is first-appearance order.
pub fn load_facilities(csv_text: &str) -> Result<Vec<ElectricityFacilityRecord>, DatasetError> {
    let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = rdr.headers()?.clone();

    let mut facilities: Vec<ElectricityFacilityRecord> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = Row::new(&headers, &record);

        let name = row.get("facility")?.trim().to_string();
        let category = row.get("category")?.trim().to_string();
        let account_no = row.get("account_no")?.trim().to_string();
        let month = row.get("month")?.trim().to_string();
        let kwh = row.f64("kwh")?;

        let idx = match facilities.iter().position(|f| f.facility == name) {
            Some(idx) => idx,
            None => {
                facilities.push(ElectricityFacilityRecord {
                    facility: name,
                    category,
                    account_no,
                    kwh: MonthlySeries::new(),
                });
                facilities.len() - 1
            }
        };
        facilities[idx].kwh.insert(month, kwh);
    }

    Ok(facilities)
}
