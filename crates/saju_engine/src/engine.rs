//! The engine facade: request in, chart out.

use std::fmt::Formatter;
use std::sync::Arc;

use chrono::Datelike;
use saju_base::{AnnualPillar, Bazi, LuckCycle, analyze_elements};
use saju_calendar::{LunisolarCalendar, ReferenceTables, UnsupportedDateError};
use tracing::{debug, instrument};

use crate::config::SajuConfig;
use crate::decade_luck::decade_luck_for;
use crate::error::{EngineError, SajuError, ValidationError};
use crate::relations::analyze_relations;
use crate::request::{BirthMoment, RawBirthRequest};
use crate::resolve::{ResolvedSolarMoment, SexagenaryResolver};
use crate::result::{DayMaster, SajuResult};
use crate::validate::InputValidator;

/// Validates, resolves and analyzes birth moments against shared tables.
///
/// Cloning is cheap; every clone shares the same reference tables.
#[derive(Clone)]
pub struct SajuEngine {
    config: SajuConfig,
    calendar: LunisolarCalendar,
    validator: InputValidator,
    resolver: SexagenaryResolver,
}

impl std::fmt::Debug for SajuEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SajuEngine")
            .field("config", &self.config)
            .field("solar_terms", &self.calendar.tables().terms().len())
            .finish()
    }
}

impl SajuEngine {
    /// Build the reference tables for `config.calendar` and create an engine.
    pub fn new(config: SajuConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let tables = ReferenceTables::build(&config.calendar)?;
        Self::with_tables(config, Arc::new(tables))
    }

    /// Create an engine over tables that were already built.
    pub fn with_tables(config: SajuConfig, tables: Arc<ReferenceTables>) -> Result<Self, EngineError> {
        config.validate()?;
        if tables.config() != &config.calendar {
            return Err(EngineError::InvalidConfig(
                "reference tables were built for a different calendar config",
            ));
        }
        let calendar = LunisolarCalendar::new(tables);
        let validator = InputValidator::new(calendar.clone(), config.max_birth_year());
        let resolver = SexagenaryResolver::new(calendar.clone(), config.zi_hour);
        Ok(Self {
            config,
            calendar,
            validator,
            resolver,
        })
    }

    pub fn config(&self) -> &SajuConfig {
        &self.config
    }

    pub fn calendar(&self) -> &LunisolarCalendar {
        &self.calendar
    }

    pub fn validate(&self, raw: &RawBirthRequest) -> Result<BirthMoment, ValidationError> {
        self.validator.validate(raw)
    }

    /// Resolved moment and four pillars of a validated birth moment.
    pub fn resolve_bazi(
        &self,
        moment: &BirthMoment,
    ) -> Result<(ResolvedSolarMoment, Bazi), UnsupportedDateError> {
        let resolved = self.resolver.resolve_moment(moment)?;
        let bazi = self.resolver.resolve(&resolved);
        Ok((resolved, bazi))
    }

    /// Full chart for a raw request.
    #[instrument(skip(self))]
    pub fn calculate(&self, raw: &RawBirthRequest) -> Result<SajuResult, SajuError> {
        let moment = self.validate(raw)?;
        Ok(self.calculate_moment(&moment)?)
    }

    /// Full chart for an already validated moment.
    pub fn calculate_moment(&self, moment: &BirthMoment) -> Result<SajuResult, UnsupportedDateError> {
        let (resolved, bazi) = self.resolve_bazi(moment)?;
        let elements = analyze_elements(&bazi, self.config.share_decimals);
        let relations = analyze_relations(&bazi);
        let decade_luck = decade_luck_for(
            &self.calendar,
            &resolved,
            &bazi,
            moment.gender(),
            self.config.age_reckoning,
            self.config.decade_luck_count,
        )?;
        let this_year = self
            .config
            .current_year
            .and_then(|year| self.luck_cycle(resolved.date.year()).at(year));
        debug!(bazi = %bazi, dominant = ?elements.dominant, "chart calculated");

        Ok(SajuResult {
            solar_date: resolved.date,
            birth_time: resolved.time.map(|t| t.format("%H:%M").to_string()),
            time_unknown: !resolved.hour_known(),
            lunar_date: resolved.lunar,
            is_leap_month: resolved.lunar.is_some_and(|l| l.leap),
            gender: moment.gender(),
            ganji_korean: bazi.korean_ganji(),
            day_master: DayMaster::of(bazi.day_master()),
            day_animal: bazi.day_animal_alias(),
            zodiac: relations.zodiac,
            elements,
            ten_gods: relations.shi_shen,
            day_na_yin: relations.day_na_yin,
            year_na_yin: relations.year_na_yin,
            solar_term: resolved.term,
            decade_luck,
            this_year,
            bazi,
        })
    }

    /// Annual pillars for `from..=to`, keyed to the solar birth year.
    ///
    /// Years before the birth year are skipped.
    pub fn annual_pillars(
        &self,
        moment: &BirthMoment,
        from: i32,
        to: i32,
    ) -> Result<Vec<AnnualPillar>, UnsupportedDateError> {
        let resolved = self.resolver.resolve_moment(moment)?;
        Ok(self.luck_cycle(resolved.date.year()).span(from, to).collect())
    }

    /// Annual pillars for `from..=to` from a bare solar birth year.
    ///
    /// The year passes the same range rule as a full request.
    pub fn annual_pillars_for_year(
        &self,
        birth_year: i32,
        from: i32,
        to: i32,
    ) -> Result<Vec<AnnualPillar>, ValidationError> {
        let birth_year = self.validator.validate_year(birth_year)?;
        Ok(self.luck_cycle(birth_year).span(from, to).collect())
    }

    /// Annual luck sequence for a solar birth year, using the configured
    /// age reckoning.
    pub fn luck_cycle(&self, birth_year: i32) -> LuckCycle {
        LuckCycle::new(birth_year, self.config.age_reckoning)
    }
}
