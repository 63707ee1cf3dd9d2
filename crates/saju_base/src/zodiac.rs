//! Zodiac animals (띠) keyed by earthly branch.

use serde::Serialize;

use crate::pillar::Pillar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All twelve animals in branch order (index 0 = Rat).
pub const ALL_ZODIAC: [Zodiac; 12] = [
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
];

const EMOJI: [&str; 12] = [
    "🐀", "🐂", "🐅", "🐇", "🐉", "🐍", "🐴", "🐑", "🐵", "🐔", "🐕", "🐷",
];
const KOREAN_ANIMAL: [&str; 12] = [
    "쥐", "소", "호랑이", "토끼", "용", "뱀", "말", "양", "원숭이", "닭", "개", "돼지",
];
/// Animal word used in day-pillar names (백룡, 흑호랑이 ...).
const ALIAS_ANIMAL: [&str; 12] = [
    "쥐", "소", "호랑이", "토끼", "룡", "뱀", "말", "양", "원숭이", "닭", "개", "돼지",
];

impl Zodiac {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_ZODIAC[(index % 12) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    pub fn emoji(self) -> &'static str {
        EMOJI[self.index() as usize]
    }

    /// Korean animal name (쥐, 소 ...).
    pub fn korean(self) -> &'static str {
        KOREAN_ANIMAL[self.index() as usize]
    }

    /// Korean year-animal label, e.g. `말띠`.
    pub fn korean_label(self) -> String {
        format!("{}띠", self.korean())
    }

    /// Animal word in day-pillar names.
    pub fn alias_word(self) -> &'static str {
        ALIAS_ANIMAL[self.index() as usize]
    }
}

/// Zodiac summary of a year pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacInfo {
    pub animal: Zodiac,
    pub emoji: &'static str,
    pub korean_label: String,
}

impl ZodiacInfo {
    /// Zodiac of a year pillar, keyed by its branch.
    pub fn of_year(year_pillar: Pillar) -> Self {
        let animal = year_pillar.branch().animal();
        Self {
            animal,
            emoji: animal.emoji(),
            korean_label: animal.korean_label(),
        }
    }
}
