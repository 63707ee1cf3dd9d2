//! Heavenly stems (天干 / 천간).

use serde::Serialize;

use crate::element::{Element, YinYang};

/// The ten heavenly stems, 甲 through 癸.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in order (index 0 = Jia 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_EMOJI: [&str; 10] = ["🌳", "🌿", "☀️", "🕯️", "⛰️", "🏔️", "⚔️", "💎", "🌊", "💧"];

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for an index; wraps modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Stem for any signed cycle position.
    pub const fn from_cycle(n: i64) -> Self {
        ALL_STEMS[n.rem_euclid(10) as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    pub fn hanja(self) -> &'static str {
        STEM_HANJA[self.index() as usize]
    }

    pub fn korean(self) -> &'static str {
        STEM_KOREAN[self.index() as usize]
    }

    /// Day-master emoji.
    pub fn emoji(self) -> &'static str {
        STEM_EMOJI[self.index() as usize]
    }

    /// Element: two consecutive stems per element.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// Yang for even index, yin for odd.
    pub const fn yin_yang(self) -> YinYang {
        YinYang::from_parity(self.index())
    }

    /// Korean day-master label with element, e.g. `경금`.
    pub fn day_master_label(self) -> String {
        format!("{}{}", self.korean(), self.element().korean())
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}
