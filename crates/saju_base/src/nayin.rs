//! Na Yin (納音 / 납음) sound elements.
//!
//! The 60 pillars pair up into 30 sound elements: pillars `2k` and `2k+1`
//! share entry `k`.

use serde::{Serialize, Serializer};

use crate::element::Element;
use crate::element::Element::{Earth, Fire, Metal, Water, Wood};
use crate::pillar::Pillar;

struct Entry {
    hanja: &'static str,
    korean: &'static str,
    english: &'static str,
    element: Element,
}

const fn entry(
    hanja: &'static str,
    korean: &'static str,
    english: &'static str,
    element: Element,
) -> Entry {
    Entry {
        hanja,
        korean,
        english,
        element,
    }
}

#[rustfmt::skip]
static NA_YIN_TABLE: [Entry; 30] = [
    entry("海中金", "해중금", "Gold in the Sea", Metal),
    entry("爐中火", "노중화", "Fire in the Furnace", Fire),
    entry("大林木", "대림목", "Wood of the Great Forest", Wood),
    entry("路旁土", "노방토", "Earth by the Roadside", Earth),
    entry("劍鋒金", "검봉금", "Metal of the Sword Edge", Metal),
    entry("山頭火", "산두화", "Fire on the Mountain Top", Fire),
    entry("澗下水", "간하수", "Water in the Ravine", Water),
    entry("城頭土", "성두토", "Earth on the City Wall", Earth),
    entry("白蠟金", "백랍금", "White Wax Metal", Metal),
    entry("楊柳木", "양류목", "Willow Wood", Wood),
    entry("泉中水", "천중수", "Water in the Spring", Water),
    entry("屋上土", "옥상토", "Earth on the Roof", Earth),
    entry("霹靂火", "벽력화", "Thunderbolt Fire", Fire),
    entry("松柏木", "송백목", "Pine and Cypress Wood", Wood),
    entry("長流水", "장류수", "Long-Flowing Water", Water),
    entry("砂中金", "사중금", "Gold in the Sand", Metal),
    entry("山下火", "산하화", "Fire at the Foot of the Mountain", Fire),
    entry("平地木", "평지목", "Wood of the Plains", Wood),
    entry("壁上土", "벽상토", "Earth on the Wall", Earth),
    entry("金箔金", "금박금", "Gold Leaf Metal", Metal),
    entry("覆燈火", "복등화", "Lamp Fire", Fire),
    entry("天河水", "천하수", "Water of the Milky Way", Water),
    entry("大驛土", "대역토", "Earth of the Great Post Road", Earth),
    entry("釵釧金", "차천금", "Hairpin Metal", Metal),
    entry("桑柘木", "상자목", "Mulberry Wood", Wood),
    entry("大溪水", "대계수", "Water of the Great Stream", Water),
    entry("沙中土", "사중토", "Earth in the Sand", Earth),
    entry("天上火", "천상화", "Fire in the Sky", Fire),
    entry("石榴木", "석류목", "Pomegranate Wood", Wood),
    entry("大海水", "대해수", "Water of the Great Sea", Water),
];

/// One of the 30 sound elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaYin(u8);

impl NaYin {
    /// Entry for a 0-based table index (0..30); wraps modulo 30.
    pub const fn from_index(index: u8) -> Self {
        Self(index % 30)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    fn entry(self) -> &'static Entry {
        &NA_YIN_TABLE[self.0 as usize]
    }

    pub fn hanja(self) -> &'static str {
        self.entry().hanja
    }

    pub fn korean(self) -> &'static str {
        self.entry().korean
    }

    pub fn english(self) -> &'static str {
        self.entry().english
    }

    /// Element carried by the sound.
    pub fn element(self) -> Element {
        self.entry().element
    }
}

impl std::fmt::Display for NaYin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl Serialize for NaYin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hanja())
    }
}

/// Sound element of a pillar.
pub const fn na_yin(pillar: Pillar) -> NaYin {
    NaYin(pillar.cycle_index() / 2)
}
