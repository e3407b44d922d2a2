use serde::Serialize;
use utility_domain::{ElectricityFacilityRecord, Metered};

use crate::engine::water::{CategoryShare, ConsumptionBreakdown};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: String,
    pub kwh: f64,
}

/// Total consumption across all facilities for each requested month, in the
/// requested order.
pub fn monthly_totals(
    facilities: &[ElectricityFacilityRecord],
    months: &[String],
) -> Vec<MonthlyTotal> {
    months
        .iter()
        .map(|month| MonthlyTotal {
            month: month.clone(),
            kwh: facilities.iter().map(|f| f.kwh.value(month)).sum(),
        })
        .collect()
}

/// Share-of-total by facility category for one month. Categories appear in
/// first-appearance order; shares are relative to the grand total.
pub fn category_breakdown(
    facilities: &[ElectricityFacilityRecord],
    month: &str,
) -> ConsumptionBreakdown {
    let mut entries: Vec<CategoryShare> = Vec::new();
    let total: f64 = facilities.iter().map(|f| f.kwh.value(month)).sum();

    for facility in facilities {
        let kwh = facility.series().value(month);
        match entries.iter_mut().find(|e| e.label == facility.category) {
            Some(entry) => entry.consumption += kwh,
            None => entries.push(CategoryShare {
                label: facility.category.clone(),
                consumption: kwh,
                percentage: 0.0,
            }),
        }
    }
    for entry in &mut entries {
        entry.percentage = if total > 0.0 {
            entry.consumption / total * 100.0
        } else {
            0.0
        };
    }

    ConsumptionBreakdown { entries, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utility_domain::MonthlySeries;

    fn facility(name: &str, category: &str, pairs: &[(&str, f64)]) -> ElectricityFacilityRecord {
        ElectricityFacilityRecord {
            facility: name.to_string(),
            category: category.to_string(),
            account_no: "R0000".to_string(),
            kwh: pairs.iter().map(|(m, v)| (m.to_string(), *v)).collect(),
        }
    }

    #[test]
    fn totals_follow_requested_month_order() {
        let facilities = vec![
            facility("PS 01", "Pumping Station", &[("Jan-2024", 1600.0), ("Feb-2024", 1900.0)]),
            facility("Beachwell", "Amenity", &[("Jan-2024", 16900.0)]),
        ];
        let months = vec!["Feb-2024".to_string(), "Jan-2024".to_string()];
        let totals = monthly_totals(&facilities, &months);

        assert_eq!(totals[0].month, "Feb-2024");
        assert_eq!(totals[0].kwh, 1900.0);
        assert_eq!(totals[1].kwh, 1600.0 + 16900.0);
    }

    #[test]
    fn category_breakdown_groups_facilities() {
        let facilities = vec![
            facility("PS 01", "Pumping Station", &[("Jan-2024", 1600.0)]),
            facility("PS 03", "Pumping Station", &[("Jan-2024", 400.0)]),
            facility("Beachwell", "Amenity", &[("Jan-2024", 2000.0)]),
        ];
        let breakdown = category_breakdown(&facilities, "Jan-2024");

        assert_eq!(breakdown.total, 4000.0);
        assert_eq!(breakdown.entries.len(), 2);
        assert_eq!(breakdown.entries[0].label, "Pumping Station");
        assert_eq!(breakdown.entries[0].consumption, 2000.0);
        assert_eq!(breakdown.entries[0].percentage, 50.0);

        let pct_sum: f64 = breakdown.entries.iter().map(|e| e.percentage).sum();
        assert!((pct_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn missing_month_reads_as_zero_everywhere() {
        let facilities = vec![facility("PS 01", "Pumping Station", &[("Jan-2024", 1600.0)])];
        let breakdown = category_breakdown(&facilities, "Sep-2024");

        assert_eq!(breakdown.total, 0.0);
        assert_eq!(breakdown.entries[0].percentage, 0.0);
    }
}
