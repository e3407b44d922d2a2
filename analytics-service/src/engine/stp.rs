use std::collections::BTreeMap;

use serde::Serialize;
use time::Date;
use utility_domain::StpDailyRecord;

/// A day is a "high recovery" day when TSE output reaches this share of
/// inlet volume.
pub const HIGH_RECOVERY_THRESHOLD_PCT: f64 = 85.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StpLogEntry {
    pub date: Date,
    pub text: String,
}

/// Calendar-month rollup of the daily log. Fields are plain sums of the
/// daily fields; `log_entries` collects every non-empty observation and
/// action with its source date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StpMonthlyRollup {
    /// Year plus zero-padded month, e.g. "2024-07".
    pub month: String,
    pub days: usize,
    pub tanker_trips: u32,
    pub tanker_volume_m3: f64,
    pub direct_inline_m3: f64,
    pub total_inlet_m3: f64,
    pub total_treated_m3: f64,
    pub total_tse_m3: f64,
    pub days_with_maintenance: usize,
    pub log_entries: Vec<StpLogEntry>,
}

/// Group daily records into calendar-month rollups, keyed by the record's
/// own date. Months with no records simply do not appear; no interpolation
/// or fill happens between non-contiguous months.
pub fn monthly_rollups(days: &[StpDailyRecord]) -> Vec<StpMonthlyRollup> {
    let mut buckets: BTreeMap<String, StpMonthlyRollup> = BTreeMap::new();

    for record in days {
        let key = record.month_key();
        let rollup = buckets.entry(key.clone()).or_insert_with(|| StpMonthlyRollup {
            month: key,
            days: 0,
            tanker_trips: 0,
            tanker_volume_m3: 0.0,
            direct_inline_m3: 0.0,
            total_inlet_m3: 0.0,
            total_treated_m3: 0.0,
            total_tse_m3: 0.0,
            days_with_maintenance: 0,
            log_entries: Vec::new(),
        });

        rollup.days += 1;
        rollup.tanker_trips += record.tanker_trips;
        rollup.tanker_volume_m3 += record.expected_tanker_volume_m3;
        rollup.direct_inline_m3 += record.direct_inline_m3;
        rollup.total_inlet_m3 += record.total_inlet_m3;
        rollup.total_treated_m3 += record.total_treated_m3;
        rollup.total_tse_m3 += record.total_tse_m3;
        if record.has_maintenance() {
            rollup.days_with_maintenance += 1;
        }
        for text in [&record.observations, &record.action_1, &record.action_2] {
            if !text.trim().is_empty() {
                rollup.log_entries.push(StpLogEntry {
                    date: record.date,
                    text: text.clone(),
                });
            }
        }
    }

    buckets.into_values().collect()
}

/// Plant performance over a span of daily records.
///
/// The `overall_*` ratios are ratios of summed volumes; the `avg_daily_*`
/// ratios are arithmetic means of the per-day percentages. The two generally
/// differ and both are exposed. Inlet composition shares are reported as-is
/// against total inlet and are not normalized to sum to 100 %.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StpPlantMetrics {
    pub days: usize,
    pub total_inlet_m3: f64,
    pub total_treated_m3: f64,
    pub total_tse_m3: f64,
    pub avg_daily_inlet_m3: f64,
    pub avg_daily_treated_m3: f64,
    pub avg_daily_tse_m3: f64,
    /// Total TSE / total inlet.
    pub water_recovery_rate_pct: f64,
    /// Total TSE / total treated.
    pub process_efficiency_pct: f64,
    /// Total treated / total inlet (ratio of sums).
    pub overall_efficiency_pct: f64,
    /// Mean of per-day treated/inlet percentages.
    pub avg_daily_efficiency_pct: f64,
    /// Mean of per-day TSE/inlet percentages.
    pub avg_daily_recovery_pct: f64,
    pub capacity_utilization_pct: f64,
    pub peak_capacity_utilization_pct: f64,
    pub total_tanker_trips: u32,
    pub avg_daily_tanker_trips: f64,
    pub tanker_volume_m3: f64,
    pub tanker_inlet_share_pct: f64,
    pub direct_inline_share_pct: f64,
    pub high_recovery_days: usize,
    pub high_recovery_day_share_pct: f64,
    pub maintenance_days: usize,
    pub maintenance_day_share_pct: f64,
}

fn pct(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

pub fn plant_metrics(days: &[StpDailyRecord], design_capacity_m3_per_day: f64) -> StpPlantMetrics {
    let count = days.len();
    let total_inlet: f64 = days.iter().map(|d| d.total_inlet_m3).sum();
    let total_treated: f64 = days.iter().map(|d| d.total_treated_m3).sum();
    let total_tse: f64 = days.iter().map(|d| d.total_tse_m3).sum();
    let tanker_trips: u32 = days.iter().map(|d| d.tanker_trips).sum();
    let tanker_volume: f64 = days.iter().map(|d| d.expected_tanker_volume_m3).sum();
    let direct_inline: f64 = days.iter().map(|d| d.direct_inline_m3).sum();

    let avg_daily_inlet = if count > 0 { total_inlet / count as f64 } else { 0.0 };
    let avg_daily_treated = if count > 0 { total_treated / count as f64 } else { 0.0 };
    let avg_daily_tse = if count > 0 { total_tse / count as f64 } else { 0.0 };
    let avg_daily_tankers = if count > 0 { tanker_trips as f64 / count as f64 } else { 0.0 };

    let avg_daily_efficiency = if count > 0 {
        days.iter()
            .map(|d| pct(d.total_treated_m3, d.total_inlet_m3))
            .sum::<f64>()
            / count as f64
    } else {
        0.0
    };
    let avg_daily_recovery = if count > 0 {
        days.iter()
            .map(|d| pct(d.total_tse_m3, d.total_inlet_m3))
            .sum::<f64>()
            / count as f64
    } else {
        0.0
    };

    let high_recovery_days = days
        .iter()
        .filter(|d| pct(d.total_tse_m3, d.total_inlet_m3) >= HIGH_RECOVERY_THRESHOLD_PCT)
        .count();
    let maintenance_days = days.iter().filter(|d| d.has_maintenance()).count();

    let peak_inlet = days
        .iter()
        .map(|d| d.total_inlet_m3)
        .fold(0.0_f64, f64::max);

    StpPlantMetrics {
        days: count,
        total_inlet_m3: total_inlet,
        total_treated_m3: total_treated,
        total_tse_m3: total_tse,
        avg_daily_inlet_m3: avg_daily_inlet,
        avg_daily_treated_m3: avg_daily_treated,
        avg_daily_tse_m3: avg_daily_tse,
        water_recovery_rate_pct: pct(total_tse, total_inlet),
        process_efficiency_pct: pct(total_tse, total_treated),
        overall_efficiency_pct: pct(total_treated, total_inlet),
        avg_daily_efficiency_pct: avg_daily_efficiency,
        avg_daily_recovery_pct: avg_daily_recovery,
        capacity_utilization_pct: pct(avg_daily_inlet, design_capacity_m3_per_day),
        peak_capacity_utilization_pct: pct(peak_inlet, design_capacity_m3_per_day),
        total_tanker_trips: tanker_trips,
        avg_daily_tanker_trips: avg_daily_tankers,
        tanker_volume_m3: tanker_volume,
        tanker_inlet_share_pct: pct(tanker_volume, total_inlet),
        direct_inline_share_pct: pct(direct_inline, total_inlet),
        high_recovery_days,
        high_recovery_day_share_pct: pct(high_recovery_days as f64, count as f64),
        maintenance_days,
        maintenance_day_share_pct: pct(maintenance_days as f64, count as f64),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceIssue {
    pub date: Date,
    pub observation: String,
    pub action: String,
}

/// One issue per day with non-empty observations, newest first. The action
/// is the first filled action field, or a placeholder when neither was
/// recorded.
pub fn maintenance_issues(days: &[StpDailyRecord]) -> Vec<MaintenanceIssue> {
    let mut issues: Vec<MaintenanceIssue> = days
        .iter()
        .filter(|d| d.has_observations())
        .map(|d| {
            let action = if !d.action_1.trim().is_empty() {
                d.action_1.clone()
            } else if !d.action_2.trim().is_empty() {
                d.action_2.clone()
            } else {
                "No action recorded".to_string()
            };
            MaintenanceIssue {
                date: d.date,
                observation: d.observations.clone(),
                action,
            }
        })
        .collect();
    issues.sort_by(|a, b| b.date.cmp(&a.date));
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use time::macros::date;

    fn fixture() -> Vec<StpDailyRecord> {
        Dataset::embedded().unwrap().stp_daily_log
    }

    #[test]
    fn fixture_groups_into_two_month_buckets() {
        let rollups = monthly_rollups(&fixture());

        assert_eq!(rollups.len(), 2);
        assert_eq!(rollups[0].month, "2024-07");
        assert_eq!(rollups[1].month, "2025-05");
        assert_eq!(rollups[0].days, 14);
        assert_eq!(rollups[1].days, 1);
    }

    #[test]
    fn july_rollup_sums_inlet_to_7053() {
        let rollups = monthly_rollups(&fixture());
        let july = &rollups[0];

        assert_eq!(july.total_inlet_m3, 7053.0);
        assert_eq!(july.days_with_maintenance, 3);
    }

    #[test]
    fn rollup_collects_dated_log_entries() {
        let rollups = monthly_rollups(&fixture());
        let july = &rollups[0];

        // 07-04 observation, 07-08 obs+action, 07-09 obs+action, 07-12
        // obs+action: 7 entries in all.
        assert_eq!(july.log_entries.len(), 7);
        assert!(july
            .log_entries
            .iter()
            .any(|e| e.date == date!(2024 - 07 - 12) && e.text.contains("rag blockage")));
    }

    #[test]
    fn no_fill_between_non_contiguous_months() {
        let rollups = monthly_rollups(&fixture());
        assert!(rollups.iter().all(|r| r.days > 0));
        assert!(!rollups.iter().any(|r| r.month == "2024-12"));
    }

    #[test]
    fn empty_log_yields_no_rollups() {
        assert!(monthly_rollups(&[]).is_empty());
    }

    #[test]
    fn overall_efficiency_is_ratio_of_sums_not_mean_of_ratios() {
        let days = fixture();
        let metrics = plant_metrics(&days, 750.0);

        let total_inlet: f64 = days.iter().map(|d| d.total_inlet_m3).sum();
        let total_treated: f64 = days.iter().map(|d| d.total_treated_m3).sum();
        assert_eq!(
            metrics.overall_efficiency_pct,
            total_treated / total_inlet * 100.0
        );

        // Both figures exist and differ on this data.
        assert_ne!(metrics.overall_efficiency_pct, metrics.avg_daily_efficiency_pct);
    }

    #[test]
    fn plant_metrics_totals_and_utilization() {
        let metrics = plant_metrics(&fixture(), 750.0);

        assert_eq!(metrics.days, 15);
        assert_eq!(metrics.total_inlet_m3, 7551.0);
        assert_eq!(metrics.total_treated_m3, 7342.0);
        assert_eq!(metrics.total_tse_m3, 6353.0);
        assert_eq!(metrics.avg_daily_inlet_m3, 7551.0 / 15.0);
        assert_eq!(metrics.capacity_utilization_pct, 7551.0 / 15.0 / 750.0 * 100.0);
        assert_eq!(metrics.peak_capacity_utilization_pct, 530.0 / 750.0 * 100.0);
        assert_eq!(metrics.total_tanker_trips, 142);
        assert_eq!(metrics.high_recovery_days, 10);
        assert_eq!(metrics.maintenance_days, 3);
        assert_eq!(metrics.maintenance_day_share_pct, 3.0 / 15.0 * 100.0);
    }

    #[test]
    fn inlet_composition_is_not_normalized() {
        let metrics = plant_metrics(&fixture(), 750.0);
        let composition = metrics.tanker_inlet_share_pct + metrics.direct_inline_share_pct;

        // Tanker and direct volumes are reported independently of total
        // inlet, so the shares need not reconcile to 100.
        assert!(composition > 0.0);
        assert_ne!(composition, 100.0);
    }

    #[test]
    fn empty_span_produces_zeroed_metrics() {
        let metrics = plant_metrics(&[], 750.0);

        assert_eq!(metrics.days, 0);
        assert_eq!(metrics.total_inlet_m3, 0.0);
        assert_eq!(metrics.overall_efficiency_pct, 0.0);
        assert_eq!(metrics.capacity_utilization_pct, 0.0);
        assert!(metrics.avg_daily_efficiency_pct.is_finite());
    }

    #[test]
    fn issues_are_newest_first_with_action_fallback() {
        let issues = maintenance_issues(&fixture());

        assert_eq!(issues.len(), 5);
        assert_eq!(issues[0].date, date!(2025 - 05 - 16));
        assert_eq!(issues[0].action, "No action recorded");
        for pair in issues.windows(2) {
            assert!(pair[0].date > pair[1].date);
        }

        // 07-12 recorded only action_2; it must surface as the action.
        let jul12 = issues.iter().find(|i| i.date == date!(2024 - 07 - 12)).unwrap();
        assert!(jul12.action.contains("rag blockage"));
    }

    #[test]
    fn metrics_are_idempotent() {
        let days = fixture();
        assert_eq!(plant_metrics(&days, 750.0), plant_metrics(&days, 750.0));
        assert_eq!(monthly_rollups(&days), monthly_rollups(&days));
        assert_eq!(maintenance_issues(&days), maintenance_issues(&days));
    }
}
