//! Engine configuration.

use saju_base::AgeReckoning;
use saju_calendar::CalendarConfig;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Earliest birth year accepted by validation.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Largest supported number of fractional digits in element shares.
pub const MAX_SHARE_DECIMALS: u32 = 4;

/// Largest number of decade-luck periods laid out.
pub const MAX_DECADE_LUCK_COUNT: u8 = 12;

/// Which sexagenary day owns 23:00–23:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiHourRule {
    /// The calendar day keeps its day pillar; the 子 hour stem comes from
    /// the next day.
    #[default]
    SplitZi,
    /// The whole hour belongs to the next day, day pillar included.
    AdvanceDay,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SajuConfig {
    pub calendar: CalendarConfig,
    /// Latest accepted birth year. `None` falls back to the last table year.
    pub current_year: Option<i32>,
    pub zi_hour: ZiHourRule,
    pub age_reckoning: AgeReckoning,
    /// Fractional digits of element shares.
    pub share_decimals: u32,
    /// Decade-luck periods per chart.
    pub decade_luck_count: u8,
}

impl Default for SajuConfig {
    fn default() -> Self {
        Self {
            calendar: CalendarConfig::default(),
            current_year: None,
            zi_hour: ZiHourRule::default(),
            age_reckoning: AgeReckoning::default(),
            share_decimals: 1,
            decade_luck_count: 10,
        }
    }
}

impl SajuConfig {
    /// Upper bound for birth years.
    pub fn max_birth_year(&self) -> i32 {
        self.current_year.unwrap_or(self.calendar.last_year)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.calendar.validate()?;
        if let Some(year) = self.current_year {
            if year < MIN_BIRTH_YEAR {
                return Err(EngineError::InvalidConfig(
                    "current_year must not precede 1900",
                ));
            }
        }
        if self.share_decimals > MAX_SHARE_DECIMALS {
            return Err(EngineError::InvalidConfig("share_decimals must be <= 4"));
        }
        if self.decade_luck_count == 0 || self.decade_luck_count > MAX_DECADE_LUCK_COUNT {
            return Err(EngineError::InvalidConfig(
                "decade_luck_count must be within 1..=12",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let c = SajuConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.zi_hour, ZiHourRule::SplitZi);
        assert_eq!(c.age_reckoning, AgeReckoning::Elapsed);
        assert_eq!(c.max_birth_year(), 2049);
    }

    #[test]
    fn rejects_too_many_decimals() {
        let c = SajuConfig {
            share_decimals: 5,
            ..SajuConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(EngineError::InvalidConfig("share_decimals must be <= 4"))
        );
    }

    #[test]
    fn rejects_zero_periods() {
        let c = SajuConfig {
            decade_luck_count: 0,
            ..SajuConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_ancient_current_year() {
        let c = SajuConfig {
            current_year: Some(1800),
            ..SajuConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn calendar_errors_propagate() {
        let mut c = SajuConfig::default();
        c.calendar.utc_offset_minutes = 10_000;
        assert!(matches!(c.validate(), Err(EngineError::Table(_))));
    }

    #[test]
    fn deserializes_partial_json() {
        let c: SajuConfig =
            serde_json::from_str(r#"{"zi_hour":"advance_day","current_year":2025}"#).unwrap();
        assert_eq!(c.zi_hour, ZiHourRule::AdvanceDay);
        assert_eq!(c.current_year, Some(2025));
        assert_eq!(c.share_decimals, 1);
    }
}
