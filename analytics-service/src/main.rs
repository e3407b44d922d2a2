use std::env;

use analytics_service::{config::AppConfig, dataset::Dataset, observability};
use anyhow::{bail, Result};
use serde::Serialize;
use time::OffsetDateTime;
use utility_domain::{ContractorRecord, CustomerMeterRecord, MonthlySeries};

use analytics_service::engine::stp::{MaintenanceIssue, StpMonthlyRollup, StpPlantMetrics};
use analytics_service::engine::trend::MonthDelta;
use analytics_service::engine::water::{ConsumptionBreakdown, LossStages, ZoneSummary};
use analytics_service::engine::{contracts, electricity, stp, trend, water};

#[derive(Serialize)]
struct WaterSection {
    zones: Vec<ZoneSummary>,
    stages: LossStages,
    overall_loss_pct: f64,
    main_bulk_trend: MonthDelta,
    by_type: ConsumptionBreakdown,
    top_consumers: Vec<CustomerMeterRecord>,
}

#[derive(Serialize)]
struct StpSection {
    monthly: Vec<StpMonthlyRollup>,
    metrics: StpPlantMetrics,
    issues: Vec<MaintenanceIssue>,
}

#[derive(Serialize)]
struct ElectricitySection {
    monthly_totals: Vec<electricity::MonthlyTotal>,
    by_category: ConsumptionBreakdown,
}

#[derive(Serialize)]
struct ContractsSection {
    summary: contracts::ContractSummary,
    expiring_within_90_days: Vec<ContractorRecord>,
}

#[derive(Serialize)]
struct DashboardReport {
    month: String,
    water: WaterSection,
    stp: StpSection,
    electricity: ElectricitySection,
    contracts: ContractsSection,
}

fn build_report(dataset: &Dataset, cfg: &AppConfig, month: &str) -> DashboardReport {
    // Network loss per month: main bulk minus the sum of individual meters.
    let total_loss: MonthlySeries = dataset
        .months
        .iter()
        .map(|m| {
            (
                m.clone(),
                water::loss_stages(&dataset.main_bulk, &dataset.zones, m).total,
            )
        })
        .collect();

    let water = WaterSection {
        zones: water::summarize_zones(&dataset.zones, month),
        stages: water::loss_stages(&dataset.main_bulk, &dataset.zones, month),
        overall_loss_pct: water::overall_loss_percentage(&dataset.main_bulk, &total_loss, month),
        main_bulk_trend: trend::month_over_month(&dataset.main_bulk, &dataset.months, month),
        by_type: water::consumption_breakdown(&dataset.consumption_types, month),
        top_consumers: water::top_consumers(&dataset.customer_meters, None, 5)
            .into_iter()
            .cloned()
            .collect(),
    };

    let stp = StpSection {
        monthly: stp::monthly_rollups(&dataset.stp_daily_log),
        metrics: stp::plant_metrics(&dataset.stp_daily_log, cfg.stp.design_capacity_m3_per_day),
        issues: stp::maintenance_issues(&dataset.stp_daily_log),
    };

    let electricity = ElectricitySection {
        monthly_totals: electricity::monthly_totals(&dataset.electricity, &dataset.months),
        by_category: electricity::category_breakdown(&dataset.electricity, month),
    };

    let today = OffsetDateTime::now_utc().date();
    let contracts = ContractsSection {
        summary: contracts::contract_summary(&dataset.contractors),
        expiring_within_90_days: contracts::expiring_within(&dataset.contractors, today, 90)
            .into_iter()
            .cloned()
            .collect(),
    };

    DashboardReport {
        month: month.to_string(),
        water,
        stp,
        electricity,
        contracts,
    }
}

fn print_section_header(title: &str) {
    println!("\n{}", "=".repeat(72));
    println!("  {title}");
    println!("{}", "=".repeat(72));
}

fn print_water(report: &DashboardReport) {
    print_section_header(&format!("WATER / {}", report.month));

    let w = &report.water;
    println!(
        "\nNetwork loss: {:.0} m3 ({:.1}%)  stage one {:.0} m3 / stage two {:.0} m3",
        w.stages.total, w.overall_loss_pct, w.stages.stage_one, w.stages.stage_two
    );
    println!(
        "Main bulk trend: {:+.0} m3 ({:.1}% {:?})",
        w.main_bulk_trend.value, w.main_bulk_trend.percentage, w.main_bulk_trend.direction
    );

    println!("\n{:<18} {:>10} {:>12} {:>10} {:>8}", "Zone", "Bulk", "Individual", "Loss", "Loss %");
    for z in &w.zones {
        println!(
            "{:<18} {:>10.0} {:>12.0} {:>10.0} {:>7.1}%",
            z.label, z.bulk, z.individual, z.loss, z.loss_percentage
        );
    }

    println!("\n{:<26} {:>12} {:>8}", "Consumption type", "m3", "Share");
    for entry in &w.by_type.entries {
        println!(
            "{:<26} {:>12.0} {:>7.1}%",
            entry.label, entry.consumption, entry.percentage
        );
    }

    println!("\nTop consumers:");
    for c in &w.top_consumers {
        println!("  {:<24} {:<6} {:>8.0} m3", c.name, c.zone_code, c.consumption_m3);
    }
}

fn print_stp(report: &DashboardReport) {
    print_section_header("STP PERFORMANCE");

    let m = &report.stp.metrics;
    println!(
        "\n{} days logged | inlet {:.0} m3, treated {:.0} m3, TSE {:.0} m3",
        m.days, m.total_inlet_m3, m.total_treated_m3, m.total_tse_m3
    );
    println!(
        "Efficiency: overall {:.1}% (daily mean {:.1}%) | recovery {:.1}% | process {:.1}%",
        m.overall_efficiency_pct,
        m.avg_daily_efficiency_pct,
        m.water_recovery_rate_pct,
        m.process_efficiency_pct
    );
    println!(
        "Capacity utilization: avg {:.1}%, peak {:.1}% | tankers {} trips ({:.1}/day)",
        m.capacity_utilization_pct,
        m.peak_capacity_utilization_pct,
        m.total_tanker_trips,
        m.avg_daily_tanker_trips
    );
    println!(
        "Inlet composition: tankers {:.1}%, direct inline {:.1}% | high-recovery days {} ({:.1}%) | maintenance days {} ({:.1}%)",
        m.tanker_inlet_share_pct,
        m.direct_inline_share_pct,
        m.high_recovery_days,
        m.high_recovery_day_share_pct,
        m.maintenance_days,
        m.maintenance_day_share_pct
    );

    println!("\n{:<9} {:>5} {:>9} {:>9} {:>9} {:>13}", "Month", "Days", "Inlet", "Treated", "TSE", "Maint. days");
    for r in &report.stp.monthly {
        println!(
            "{:<9} {:>5} {:>9.0} {:>9.0} {:>9.0} {:>13}",
            r.month, r.days, r.total_inlet_m3, r.total_treated_m3, r.total_tse_m3, r.days_with_maintenance
        );
    }

    println!("\nMaintenance issues (newest first):");
    for issue in &report.stp.issues {
        println!("  {}  {}", issue.date, issue.observation);
        println!("              -> {}", issue.action);
    }
}

fn print_electricity(report: &DashboardReport) {
    print_section_header(&format!("ELECTRICITY / {}", report.month));

    println!("\n{:<10} {:>12}", "Month", "kWh");
    for t in &report.electricity.monthly_totals {
        println!("{:<10} {:>12.0}", t.month, t.kwh);
    }

    println!("\n{:<20} {:>12} {:>8}", "Category", "kWh", "Share");
    for entry in &report.electricity.by_category.entries {
        println!(
            "{:<20} {:>12.0} {:>7.1}%",
            entry.label, entry.consumption, entry.percentage
        );
    }
}

fn print_contracts(report: &DashboardReport) {
    print_section_header("CONTRACTS");

    let s = &report.contracts.summary;
    println!("\n{} contracts: {} active, {} expired", s.total, s.active, s.expired);

    if report.contracts.expiring_within_90_days.is_empty() {
        println!("Nothing expiring in the next 90 days.");
    } else {
        println!("Expiring within 90 days:");
        for c in &report.contracts.expiring_within_90_days {
            let end = c
                .end_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("  {:<36} ends {}", c.contractor, end);
        }
    }
}

fn main() -> Result<()> {
    observability::init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let section = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(String::as_str)
        .unwrap_or("all");

    let cfg = AppConfig::load()?;
    let dataset = Dataset::embedded()?;
    let Some(month) = dataset.latest_month() else {
        bail!("dataset defines no months");
    };
    let month = month.to_string();

    let report = build_report(&dataset, &cfg, &month);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match section {
        "all" => {
            print_water(&report);
            print_stp(&report);
            print_electricity(&report);
            print_contracts(&report);
        }
        "water" => print_water(&report),
        "stp" => print_stp(&report),
        "electricity" => print_electricity(&report),
        "contracts" => print_contracts(&report),
        other => bail!("unknown section '{other}' (expected all, water, stp, electricity or contracts)"),
    }

    Ok(())
}
