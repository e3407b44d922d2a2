use serde::Serialize;
use utility_domain::{CustomerMeterRecord, Metered, MonthlySeries, ZoneRecord};

/// Loss for one zone and month. Negative loss (individual meters reading
/// ahead of the zone bulk meter, typically metering lag) is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneLoss {
    pub loss: f64,
    pub percentage: f64,
}

pub fn zone_loss(zone: &ZoneRecord, month: &str) -> ZoneLoss {
    let bulk = zone.bulk.value(month);
    let individual = zone.individual.value(month);
    let loss = bulk - individual;
    let percentage = if bulk > 0.0 { loss / bulk * 100.0 } else { 0.0 };
    ZoneLoss { loss, percentage }
}

/// Network-level loss percentage for a month.
///
/// Unlike [`zone_loss`], a negative net loss reads as 0 % here: the headline
/// figure never goes negative, while zone-level figures keep their sign.
pub fn overall_loss_percentage(
    main_bulk: &MonthlySeries,
    total_loss: &MonthlySeries,
    month: &str,
) -> f64 {
    let bulk = main_bulk.value(month);
    let loss = total_loss.value(month);
    if loss < 0.0 || bulk <= 0.0 {
        0.0
    } else {
        loss / bulk * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSummary {
    pub code: String,
    pub label: String,
    pub bulk: f64,
    pub individual: f64,
    pub loss: f64,
    pub loss_percentage: f64,
}

/// One summary row per zone, in zone catalog order.
pub fn summarize_zones(zones: &[ZoneRecord], month: &str) -> Vec<ZoneSummary> {
    zones
        .iter()
        .map(|zone| {
            let ZoneLoss { loss, percentage } = zone_loss(zone, month);
            ZoneSummary {
                code: zone.code.clone(),
                label: zone.label.clone(),
                bulk: zone.bulk.value(month),
                individual: zone.individual.value(month),
                loss,
                loss_percentage: percentage,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSortKey {
    Bulk,
    Individual,
    Loss,
    LossPercentage,
}

/// Caller-requested ordering: descending by the chosen metric, stable for
/// equal values.
pub fn sort_zone_summaries(summaries: &mut [ZoneSummary], key: ZoneSortKey) {
    summaries.sort_by(|a, b| {
        let (x, y) = match key {
            ZoneSortKey::Bulk => (a.bulk, b.bulk),
            ZoneSortKey::Individual => (a.individual, b.individual),
            ZoneSortKey::Loss => (a.loss, b.loss),
            ZoneSortKey::LossPercentage => (a.loss_percentage, b.loss_percentage),
        };
        y.total_cmp(&x)
    });
}

/// Two-stage network loss for a month: main bulk meter to zone bulk meters
/// (stage one), zone bulk meters to individual meters (stage two).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LossStages {
    pub stage_one: f64,
    pub stage_two: f64,
    pub total: f64,
}

pub fn loss_stages(main_bulk: &MonthlySeries, zones: &[ZoneRecord], month: &str) -> LossStages {
    let main = main_bulk.value(month);
    let zone_bulk: f64 = zones.iter().map(|z| z.bulk.value(month)).sum();
    let individual: f64 = zones.iter().map(|z| z.individual.value(month)).sum();
    LossStages {
        stage_one: main - zone_bulk,
        stage_two: zone_bulk - individual,
        total: main - individual,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub label: String,
    pub consumption: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumptionBreakdown {
    pub entries: Vec<CategoryShare>,
    pub total: f64,
}

/// Share-of-total for one month, in record order. Records missing the month
/// contribute 0; a zero total yields 0 % everywhere.
pub fn consumption_breakdown<M: Metered>(records: &[M], month: &str) -> ConsumptionBreakdown {
    let total: f64 = records.iter().map(|r| r.series().value(month)).sum();
    let entries = records
        .iter()
        .map(|r| {
            let consumption = r.series().value(month);
            let percentage = if total > 0.0 {
                consumption / total * 100.0
            } else {
                0.0
            };
            CategoryShare {
                label: r.label().to_string(),
                consumption,
                percentage,
            }
        })
        .collect();
    ConsumptionBreakdown { entries, total }
}

/// Largest consumers for the period, optionally restricted to one zone.
pub fn top_consumers<'a>(
    customers: &'a [CustomerMeterRecord],
    zone_code: Option<&str>,
    limit: usize,
) -> Vec<&'a CustomerMeterRecord> {
    let mut matching: Vec<&CustomerMeterRecord> = customers
        .iter()
        .filter(|c| zone_code.map_or(true, |z| c.zone_code == z))
        .collect();
    matching.sort_by(|a, b| b.consumption_m3.total_cmp(&a.consumption_m3));
    matching.truncate(limit);
    matching
}
