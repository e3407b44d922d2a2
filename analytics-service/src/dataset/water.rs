use utility_domain::{ConsumptionTypeRecord, CustomerMeterRecord, MonthlySeries, ZoneRecord};

use crate::dataset::{DatasetError, Row};

/// Main bulk meter readings.
///
/// Expected header columns (by name):
/// - month (e.g. "Jan-2024"; row order defines the canonical month ordering)
/// - main_bulk_m3
pub fn load_main(csv_text: &str) -> Result<(Vec<String>, MonthlySeries), DatasetError> {
    let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = rdr.headers()?.clone();

    let mut months = Vec::new();
    let mut series = MonthlySeries::new();
    for result in rdr.records() {
        let record = result?;
        let row = Row::new(&headers, &record);

        let month = row.get("month")?.trim().to_string();
        let reading = row.f64("main_bulk_m3")?;
        months.push(month.clone());
        series.insert(month, reading);
    }

    Ok((months, series))
}

/// Zone bulk and individual readings in long format.
///
/// Expected header columns (by name):
/// - zone_code
/// - zone_label
/// - month
/// - bulk_m3
/// - individual_m3
///
/// Zone catalog order is the order in which zone codes first appear.
pub fn load_zones(csv_text: &str) -> Result<Vec<ZoneRecord>, DatasetError> {
    let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = rdr.headers()?.clone();

    let mut zones: Vec<ZoneRecord> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = Row::new(&headers, &record);

        let code = row.get("zone_code")?.trim().to_string();
        let label = row.get("zone_label")?.trim().to_string();
        let month = row.get("month")?.trim().to_string();
        let bulk = row.f64("bulk_m3")?;
        let individual = row.f64("individual_m3")?;

        let idx = match zones.iter().position(|z| z.code == code) {
            Some(idx) => idx,
            None => {
                zones.push(ZoneRecord {
                    code,
                    label,
                    bulk: MonthlySeries::new(),
                    individual: MonthlySeries::new(),
                });
                zones.len() - 1
            }
        };
        zones[idx].bulk.insert(month.clone(), bulk);
        zones[idx].individual.insert(month, individual);
    }

    Ok(zones)
}

/// Consumption categories with the source's precomputed share-of-total.
///
/// Expected header columns (by name): type_label, month, consumption_m3,
/// pct_of_total.
pub fn load_consumption_types(csv_text: &str) -> Result<Vec<ConsumptionTypeRecord>, DatasetError> {
    let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = rdr.headers()?.clone();

    let mut types: Vec<ConsumptionTypeRecord> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = Row::new(&headers, &record);

        let label = row.get("type_label")?.trim().to_string();
        let month = row.get("month")?.trim().to_string();
        let consumption = row.f64("consumption_m3")?;
        let pct = row.f64("pct_of_total")?;

        let idx = match types.iter().position(|t| t.label == label) {
            Some(idx) => idx,
            None => {
                types.push(ConsumptionTypeRecord {
                    label,
                    consumption: MonthlySeries::new(),
                    pct_of_total: MonthlySeries::new(),
                });
                types.len() - 1
            }
        };
        types[idx].consumption.insert(month.clone(), consumption);
        types[idx].pct_of_total.insert(month, pct);
    }

    Ok(types)
}

/// Individual customer meters for the reporting period.
///
/// Expected header columns (by name): account_id, name, zone_code,
/// consumption_m3.
pub fn load_customer_meters(csv_text: &str) -> Result<Vec<CustomerMeterRecord>, DatasetError> {
    let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = rdr.headers()?.clone();

    let mut meters = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = Row::new(&headers, &record);

        meters.push(CustomerMeterRecord {
            account_id: row.get("account_id")?.trim().to_string(),
            name: row.get("name")?.trim().to_string(),
            zone_code: row.get("zone_code")?.trim().to_string(),
            consumption_m3: row.f64("consumption_m3")?,
        });
    }

    Ok(meters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_series_preserves_row_order() {
        let csv = "month,main_bulk_m3\nJan-2024,100\nFeb-2024,110\n";
        let (months, series) = load_main(csv).unwrap();

        assert_eq!(months, vec!["Jan-2024", "Feb-2024"]);
        assert_eq!(series.value("Feb-2024"), 110.0);
    }

    #[test]
    fn zones_group_by_first_appearance() {
        let csv = "\
zone_code,zone_label,month,bulk_m3,individual_m3
Z05,Zone 05,Jan-2024,400,250
Z01,Zone 01,Jan-2024,150,160
Z05,Zone 05,Feb-2024,380,240
";
        let zones = load_zones(csv).unwrap();

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].code, "Z05");
        assert_eq!(zones[1].code, "Z01");
        assert_eq!(zones[0].bulk.value("Feb-2024"), 380.0);
        assert_eq!(zones[1].individual.value("Jan-2024"), 160.0);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "month,reading\nJan-2024,100\n";
        let err = load_main(csv).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(c) if c == "main_bulk_m3"));
    }
}
