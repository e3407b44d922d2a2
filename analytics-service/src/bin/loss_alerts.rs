use analytics_service::{config::AppConfig, dataset::Dataset, engine::water, observability};
use anyhow::Result;

fn main() -> Result<()> {
    observability::init_tracing();

    let cfg = AppConfig::load()?;
    let threshold = cfg.water.loss_alert_threshold_pct;

    let dataset = Dataset::embedded()?;

    let mut alerts = 0usize;
    for month in &dataset.months {
        for zone in &dataset.zones {
            let loss = water::zone_loss(zone, month);
            if loss.percentage > threshold {
                alerts += 1;
                tracing::warn!(
                    zone = %zone.code,
                    month = %month,
                    loss_m3 = loss.loss,
                    loss_pct = loss.percentage,
                    "zone loss above threshold"
                );
            }
        }
    }

    tracing::info!(
        zones = dataset.zones.len(),
        months = dataset.months.len(),
        alerts,
        loss_alert_threshold_pct = threshold,
        "zone loss scan complete"
    );

    Ok(())
}
