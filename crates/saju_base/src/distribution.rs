//! Five-element vote distribution of a chart.
//!
//! Every stem and every branch (by main qi) casts one vote: 6 votes without
//! an hour pillar, 8 with. Shares are percentages rounded half away from
//! zero; the rounding remainder is credited to the dominant element so the
//! shares always sum to exactly 100.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::Bazi;

/// Raw vote counts per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElementVotes {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementVotes {
    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn slot(&mut self, element: Element) -> &mut u8 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    pub fn total(&self) -> u8 {
        ALL_ELEMENTS.iter().map(|&e| self.get(e)).sum()
    }
}

/// Percentage share per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElementShares {
    pub wood: Decimal,
    pub fire: Decimal,
    pub earth: Decimal,
    pub metal: Decimal,
    pub water: Decimal,
}

impl ElementShares {
    pub fn get(&self, element: Element) -> Decimal {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn slot(&mut self, element: Element) -> &mut Decimal {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    pub fn total(&self) -> Decimal {
        ALL_ELEMENTS.iter().map(|&e| self.get(e)).sum()
    }
}

/// Element balance of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDistribution {
    pub shares: ElementShares,
    pub votes: ElementVotes,
    /// Most votes; ties go to the earlier element (wood first).
    pub dominant: Element,
    /// Fewest votes; ties go to the earlier element.
    pub weak: Element,
}

/// Count votes and compute shares with `decimals` fractional digits.
pub fn analyze_elements(bazi: &Bazi, decimals: u32) -> ElementDistribution {
    let mut votes = ElementVotes::default();
    for pillar in bazi.pillars() {
        *votes.slot(pillar.stem().element()) += 1;
        *votes.slot(pillar.branch().element()) += 1;
    }
    distribution_from_votes(votes, decimals)
}

/// Shares, dominant and weak elements from raw votes.
pub fn distribution_from_votes(votes: ElementVotes, decimals: u32) -> ElementDistribution {
    let mut dominant = Element::Wood;
    let mut weak = Element::Wood;
    for e in ALL_ELEMENTS {
        if votes.get(e) > votes.get(dominant) {
            dominant = e;
        }
        if votes.get(e) < votes.get(weak) {
            weak = e;
        }
    }

    let hundred = Decimal::ONE_HUNDRED;
    let total = Decimal::from(votes.total());
    let mut shares = ElementShares::default();
    if !total.is_zero() {
        for e in ALL_ELEMENTS {
            *shares.slot(e) = (Decimal::from(votes.get(e)) * hundred / total)
                .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        }
        let remainder = hundred - shares.total();
        *shares.slot(dominant) += remainder;
    }

    ElementDistribution {
        shares,
        votes,
        dominant,
        weak,
    }
}
