//! Earthly branches (地支 / 지지).

use serde::Serialize;

use crate::element::{Element, YinYang};
use crate::zodiac::Zodiac;

/// The twelve earthly branches, 子 through 亥.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in order (index 0 = Zi 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];

/// Main-qi element per branch.
const BRANCH_ELEMENT: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch for an index; wraps modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Branch for any signed cycle position.
    pub const fn from_cycle(n: i64) -> Self {
        ALL_BRANCHES[n.rem_euclid(12) as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    pub fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index() as usize]
    }

    pub fn korean(self) -> &'static str {
        BRANCH_KOREAN[self.index() as usize]
    }

    /// Main-qi (本氣) element.
    pub const fn element(self) -> Element {
        BRANCH_ELEMENT[self.index() as usize]
    }

    /// Yang for even index, yin for odd.
    pub const fn yin_yang(self) -> YinYang {
        YinYang::from_parity(self.index())
    }

    /// Zodiac animal of the branch.
    pub const fn animal(self) -> Zodiac {
        Zodiac::from_index(self.index())
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}
