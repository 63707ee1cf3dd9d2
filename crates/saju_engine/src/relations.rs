//! Ten gods, Na Yin and zodiac of a chart.

use saju_base::{Bazi, NaYin, ShiShen, ZodiacInfo, na_yin};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relations {
    pub shi_shen: ShiShen,
    pub day_na_yin: NaYin,
    pub year_na_yin: NaYin,
    pub zodiac: ZodiacInfo,
}

pub fn analyze_relations(bazi: &Bazi) -> Relations {
    Relations {
        shi_shen: ShiShen::of(bazi),
        day_na_yin: na_yin(bazi.day),
        year_na_yin: na_yin(bazi.year),
        zodiac: ZodiacInfo::of_year(bazi.year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{Pillar, TenGod, Zodiac};

    fn pillar(hanja: &str) -> Pillar {
        (0..60)
            .map(Pillar::from_cycle_index)
            .find(|p| p.hanja() == hanja)
            .unwrap()
    }

    #[test]
    fn chart_1990_05_15() {
        let bazi = Bazi {
            year: pillar("庚午"),
            month: pillar("辛巳"),
            day: pillar("庚辰"),
            hour: None,
        };
        let r = analyze_relations(&bazi);
        assert_eq!(r.shi_shen.year_gan, TenGod::Friend);
        assert_eq!(r.shi_shen.month_gan, TenGod::RobWealth);
        assert_eq!(r.shi_shen.hour_gan, None);
        assert_eq!(r.day_na_yin.hanja(), "白蠟金");
        assert_eq!(r.year_na_yin.korean(), "노방토");
        assert_eq!(r.zodiac.animal, Zodiac::Horse);
    }
}
