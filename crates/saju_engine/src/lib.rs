//! Four Pillars (사주팔자) derivation engine.
//!
//! [`SajuEngine`] is the single entry point: it validates a raw birth
//! request, resolves it to a solar moment through the lunisolar tables,
//! derives the four pillars and assembles every derived reading into a
//! serializable [`SajuResult`].
//!
//! The engine is pure and synchronous and never reads the clock. Reference
//! tables are built once and shared behind `Arc`.

pub mod config;
pub mod decade_luck;
pub mod engine;
pub mod error;
pub mod relations;
pub mod request;
pub mod resolve;
pub mod result;
pub mod validate;

pub use config::{SajuConfig, ZiHourRule};
pub use decade_luck::{DecadeLuckChart, decade_luck_for};
pub use engine::SajuEngine;
pub use error::{EngineError, Field, SajuError, ValidationError};
pub use relations::{Relations, analyze_relations};
pub use request::{BirthMoment, CalendarKind, RawBirthRequest};
pub use resolve::{ResolvedSolarMoment, SexagenaryResolver};
pub use result::{DayMaster, SajuResult};
pub use validate::InputValidator;

pub use saju_base::{AgeReckoning, AnnualPillar, Bazi, Gender, LuckCycle, Pillar};
pub use saju_calendar::{TableError, UnsupportedDateError};
