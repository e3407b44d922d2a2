use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct StpConfig {
    /// Plant design capacity in m³/day.
    #[serde(default = "default_design_capacity")]
    pub design_capacity_m3_per_day: f64,
}

impl Default for StpConfig {
    fn default() -> Self {
        Self {
            design_capacity_m3_per_day: default_design_capacity(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WaterConfig {
    /// Zone loss percentage above which the loss_alerts bin flags the zone.
    #[serde(default = "default_loss_alert_threshold")]
    pub loss_alert_threshold_pct: f64,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            loss_alert_threshold_pct: default_loss_alert_threshold(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub stp: StpConfig,
    #[serde(default)]
    pub water: WaterConfig,
}

fn default_design_capacity() -> f64 {
    750.0
}

fn default_loss_alert_threshold() -> f64 {
    10.0
}

impl AppConfig {
    /// Load from the path in `DASHBOARD_CONFIG` (default
    /// `dashboard-config.toml`). A missing default file is not an error and
    /// built-in defaults apply; an explicitly configured path must exist.
    pub fn load() -> anyhow::Result<Self> {
        use std::env;

        match env::var("DASHBOARD_CONFIG") {
            Ok(path) => {
                let contents = fs::read_to_string(&path)?;
                Ok(toml::from_str(&contents)?)
            }
            Err(_) => {
                let path = Path::new("dashboard-config.toml");
                if path.exists() {
                    let contents = fs::read_to_string(path)?;
                    Ok(toml::from_str(&contents)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
