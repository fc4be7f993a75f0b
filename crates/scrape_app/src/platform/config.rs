use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use engine_logging::engine_info;
use scrape_engine::SimulatorSettings;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

/// Settings file for the dashboard. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub time_unit_ms: u64,
    pub startup_delay_units: u32,
    pub tick_period_units: u32,
    pub step_delay_units: u32,
    pub horizon_units: u32,
    pub log: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = SimulatorSettings::default();
        Self {
            time_unit_ms: u64::try_from(settings.time_unit.as_millis()).unwrap_or(1000),
            startup_delay_units: settings.startup_delay_units,
            tick_period_units: settings.tick_period_units,
            step_delay_units: settings.step_delay_units,
            horizon_units: settings.horizon_units,
            log: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn simulator_settings(&self) -> SimulatorSettings {
        SimulatorSettings {
            time_unit: Duration::from_millis(self.time_unit_ms),
            startup_delay_units: self.startup_delay_units,
            tick_period_units: self.tick_period_units,
            step_delay_units: self.step_delay_units,
            horizon_units: self.horizon_units,
        }
    }
}

pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: AppConfig = ron::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    engine_info!("Loaded config from {:?}", path);
    Ok(config)
}
