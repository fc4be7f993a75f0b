use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("time unit must be non-zero")]
    ZeroTimeUnit,
    #[error("{field} must be at least one unit")]
    ZeroUnits { field: &'static str },
    #[error("horizon ({horizon} units) must exceed one tick period ({tick_period} units)")]
    HorizonTooShort { horizon: u32, tick_period: u32 },
}

/// Timer cadence for a simulated run, expressed in whole time units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorSettings {
    pub time_unit: Duration,
    /// Loading phase between Scrape and the first timer.
    pub startup_delay_units: u32,
    pub tick_period_units: u32,
    pub step_delay_units: u32,
    /// Time budget after which the ticker and step timer are cancelled.
    pub horizon_units: u32,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            time_unit: Duration::from_secs(1),
            startup_delay_units: 1,
            tick_period_units: 2,
            step_delay_units: 3,
            horizon_units: 20,
        }
    }
}

impl SimulatorSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.time_unit.is_zero() {
            return Err(SettingsError::ZeroTimeUnit);
        }
        for (field, value) in [
            ("startup delay", self.startup_delay_units),
            ("tick period", self.tick_period_units),
            ("step delay", self.step_delay_units),
            ("horizon", self.horizon_units),
        ] {
            if value == 0 {
                return Err(SettingsError::ZeroUnits { field });
            }
        }
        if self.horizon_units <= self.tick_period_units {
            return Err(SettingsError::HorizonTooShort {
                horizon: self.horizon_units,
                tick_period: self.tick_period_units,
            });
        }
        Ok(())
    }

    pub fn startup_delay(&self) -> Duration {
        self.units(self.startup_delay_units)
    }

    pub fn tick_period(&self) -> Duration {
        self.units(self.tick_period_units)
    }

    pub fn step_delay(&self) -> Duration {
        self.units(self.step_delay_units)
    }

    pub fn horizon(&self) -> Duration {
        self.units(self.horizon_units)
    }

    /// Ticks that fall strictly before the horizon.
    pub fn ticks_within_horizon(&self) -> u32 {
        self.horizon_units.saturating_sub(1) / self.tick_period_units.max(1)
    }

    fn units(&self, count: u32) -> Duration {
        self.time_unit * count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = SimulatorSettings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.tick_period(), Duration::from_secs(2));
        assert_eq!(settings.step_delay(), Duration::from_secs(3));
        assert_eq!(settings.horizon(), Duration::from_secs(20));
        assert_eq!(settings.ticks_within_horizon(), 9);
    }

    #[test]
    fn zero_values_are_rejected() {
        let settings = SimulatorSettings {
            time_unit: Duration::ZERO,
            ..SimulatorSettings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::ZeroTimeUnit));

        let settings = SimulatorSettings {
            step_delay_units: 0,
            ..SimulatorSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::ZeroUnits {
                field: "step delay"
            })
        );
    }

    #[test]
    fn horizon_must_leave_room_for_a_tick() {
        let settings = SimulatorSettings {
            horizon_units: 2,
            ..SimulatorSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::HorizonTooShort {
                horizon: 2,
                tick_period: 2
            })
        );

        let settings = SimulatorSettings {
            horizon_units: 3,
            ..SimulatorSettings::default()
        };
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.ticks_within_horizon(), 1);
    }
}
