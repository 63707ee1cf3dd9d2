//! Five elements (五行 / 오행) and yin-yang polarity.
//!
//! Generating cycle: wood → fire → earth → metal → water → wood.
//! Overcoming cycle: wood → earth → water → fire → metal → wood.

use serde::Serialize;

/// The five elements in generating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in generating order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Element for an index; wraps modulo 5.
    pub const fn from_index(index: u8) -> Self {
        ALL_ELEMENTS[(index % 5) as usize]
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Single hanja character.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Korean reading.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// Display label such as `목(木)`.
    pub fn label(self) -> String {
        format!("{}({})", self.korean(), self.hanja())
    }

    /// Color word used in day-pillar animal names (청/적/황/백/흑).
    pub const fn color_korean(self) -> &'static str {
        match self {
            Self::Wood => "청",
            Self::Fire => "적",
            Self::Earth => "황",
            Self::Metal => "백",
            Self::Water => "흑",
        }
    }

    /// The element this one generates.
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element this one overcomes.
    pub const fn overcomes(self) -> Self {
        Self::from_index(self.index() + 2)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Yin-yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YinYang {
    Yang,
    Yin,
}

impl YinYang {
    /// Yang for even cycle indices, yin for odd.
    pub const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
        }
    }
}
