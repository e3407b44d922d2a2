use time::macros::format_description;
use time::Date;
use utility_domain::StpDailyRecord;

use crate::dataset::{DatasetError, Row};

/// Daily plant log.
///
/// Expected header columns (by name):
/// - date (YYYY-MM-DD)
/// - tanker_trips
/// - expected_tanker_volume_m3
/// - direct_inline_m3
/// - total_inlet_m3
/// - total_treated_m3
/// - total_tse_m3
/// - observations (free text, may be empty)
/// - action_1, action_2 (maintenance actions, may be empty)
pub fn load_daily_log(csv_text: &str) -> Result<Vec<StpDailyRecord>, DatasetError> {
    let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = rdr.headers()?.clone();

    let mut days = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = Row::new(&headers, &record);

        days.push(StpDailyRecord {
            date: parse_date(row.get("date")?)?,
            tanker_trips: row.u32("tanker_trips")?,
            expected_tanker_volume_m3: row.f64("expected_tanker_volume_m3")?,
            direct_inline_m3: row.f64("direct_inline_m3")?,
            total_inlet_m3: row.f64("total_inlet_m3")?,
            total_treated_m3: row.f64("total_treated_m3")?,
            total_tse_m3: row.f64("total_tse_m3")?,
            observations: row.get("observations")?.trim().to_string(),
            action_1: row.get("action_1")?.trim().to_string(),
            action_2: row.get("action_2")?.trim().to_string(),
        });
    }

    Ok(days)
}

fn parse_date(raw: &str) -> Result<Date, DatasetError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw.trim(), &format).map_err(|e| DatasetError::InvalidValue {
        column: "date".to_string(),
        value: raw.to_string(),
        message: e.to_string(),
    })
}
