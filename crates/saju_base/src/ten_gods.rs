//! Ten gods (十神 / 십신): relation of a stem to the day master.

use serde::Serialize;

use crate::pillar::Bazi;
use crate::stem::Stem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    Friend,
    /// 劫財: same element, opposite polarity.
    RobWealth,
    /// 食神: day master generates it, same polarity.
    EatingGod,
    /// 傷官: day master generates it, opposite polarity.
    HurtingOfficer,
    /// 偏財: day master overcomes it, same polarity.
    IndirectWealth,
    /// 正財: day master overcomes it, opposite polarity.
    DirectWealth,
    /// 偏官 (七殺): it overcomes the day master, same polarity.
    SevenKillings,
    /// 正官: it overcomes the day master, opposite polarity.
    DirectOfficer,
    /// 偏印: it generates the day master, same polarity.
    IndirectResource,
    /// 正印: it generates the day master, opposite polarity.
    DirectResource,
}

pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Friend,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

const HANJA: [&str; 10] = [
    "比肩", "劫財", "食神", "傷官", "偏財", "正財", "偏官", "正官", "偏印", "正印",
];
const KOREAN: [&str; 10] = [
    "비견", "겁재", "식신", "상관", "편재", "정재", "편관", "정관", "편인", "정인",
];
const ENGLISH: [&str; 10] = [
    "Friend",
    "Rob Wealth",
    "Eating God",
    "Hurting Officer",
    "Indirect Wealth",
    "Direct Wealth",
    "Seven Killings",
    "Direct Officer",
    "Indirect Resource",
    "Direct Resource",
];

impl TenGod {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn hanja(self) -> &'static str {
        HANJA[self.index() as usize]
    }

    pub fn korean(self) -> &'static str {
        KOREAN[self.index() as usize]
    }

    pub fn english(self) -> &'static str {
        ENGLISH[self.index() as usize]
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

/// Relation of `other` to `day_master`.
///
/// The relation group is the step from the day master's element to the
/// other's element along the generating cycle (0 same, 1 generated,
/// 2 overcome, 3 overcoming, 4 generating); polarity picks the partial
/// (偏, same) or direct (正, opposite) member of the pair.
pub const fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let step = (other.element().index() + 5 - day_master.element().index()) % 5;
    let opposite = (day_master.index() + other.index()) % 2 == 1;
    ALL_TEN_GODS[(step * 2 + opposite as u8) as usize]
}

/// Ten gods of the year, month and hour stems against the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiShen {
    pub year_gan: TenGod,
    pub month_gan: TenGod,
    /// `None` when the hour pillar is absent.
    pub hour_gan: Option<TenGod>,
}

impl ShiShen {
    pub fn of(bazi: &Bazi) -> Self {
        let dm = bazi.day_master();
        Self {
            year_gan: ten_god(dm, bazi.year.stem()),
            month_gan: ten_god(dm, bazi.month.stem()),
            hour_gan: bazi.hour.map(|h| ten_god(dm, h.stem())),
        }
    }
}
