//! Per-indicator classification pipelines.
//!
//! Each loaded table goes through the same three steps before any chart
//! sees it: sort bins into canonical order, resolve category names, and
//! complete the distribution over the indicator's full domain. Everything
//! here is a pure function of the loaded data.

use crate::data::records::{BinRow, CityData};
use crate::domain::{
    FireDanger, PvCondition, Susceptibility, VegetationType, WealthClass, AIR_QUALITY_BINS,
    SLOPE_BINS,
};
use crate::stats::bins::{lower_bound, sort_by_lower_bound};
use crate::stats::demography::{dependency_ratios, DependencyRatios};
use crate::stats::distribution::{complete, tally, CategoryCount};

/// All classified and completed series the charts render, computed once per
/// load.
#[derive(Debug, Clone)]
pub struct DerivedSeries {
    pub wealth: Vec<BinRow>,
    pub built_era: Vec<BinRow>,
    pub pv_yield: Vec<BinRow>,
    pub vegetation: Vec<BinRow>,
    pub air_quality: Vec<BinRow>,
    pub summer: Vec<BinRow>,
    pub elevation: Vec<BinRow>,
    pub slope: Vec<BinRow>,
    pub landslide: Vec<BinRow>,
    pub liquefaction: Vec<BinRow>,
    pub pv_condition_months: Vec<CategoryCount>,
    pub fwi_danger_weeks: Vec<CategoryCount>,
    pub ratios: DependencyRatios,
}

impl DerivedSeries {
    pub fn from_data(data: &CityData) -> Self {
        let wealth_bins: Vec<&str> = WealthClass::ALL.iter().map(|c| c.label()).collect();
        let era_bins: Vec<&str> = crate::domain::BuiltEra::ALL.iter().map(|e| e.label()).collect();
        let pv_bins: Vec<&str> = PvCondition::ALL.iter().map(|c| c.bin()).collect();
        let ndvi_bins: Vec<&str> = VegetationType::ALL.iter().map(|v| v.bin()).collect();
        let susceptibility_bins: Vec<&str> =
            Susceptibility::ALL.iter().map(|s| s.label()).collect();
        // Occurrence charts list the best condition / worst danger first.
        let pv_conditions: Vec<&str> = PvCondition::ALL.iter().rev().map(|c| c.label()).collect();
        let danger_levels: Vec<&str> =
            FireDanger::ALL.iter().rev().map(|d| d.short_label()).collect();

        Self {
            // Wealth bins carry category names; canonical rank order already
            // matches WealthClass::ALL, so completion alone fixes the order.
            wealth: complete(&wealth_bins, &data.rwi_area),
            built_era: complete(&era_bins, &data.uba_area),
            pv_yield: complete(&pv_bins, &data.pv_area),
            vegetation: complete(&ndvi_bins, &data.ndvi_area),
            air_quality: complete(&AIR_QUALITY_BINS, &data.aq_area),
            summer: observed_distribution(&data.summer_area),
            elevation: observed_distribution(&data.e),
            slope: complete(&SLOPE_BINS, &data.s),
            landslide: complete(&susceptibility_bins, &data.ls_area),
            liquefaction: complete(&susceptibility_bins, &data.l_area),
            pv_condition_months: tally(
                &pv_conditions,
                data.pv.iter().map(|m| m.condition.as_str()),
            ),
            fwi_danger_weeks: tally(&danger_levels, data.fwi.iter().map(|w| w.danger.as_str())),
            ratios: dependency_ratios(&data.pas),
        }
    }
}

/// Elevation and temperature bins are city-specific: the canonical domain is
/// whatever the source observed, ordered by lower bound.
fn observed_distribution(rows: &[BinRow]) -> Vec<BinRow> {
    let mut sorted = rows.to_vec();
    sort_by_lower_bound(&mut sorted);
    sorted
}

/// Age brackets of the population table in ascending order, youngest first.
pub fn sorted_age_brackets(data: &CityData) -> Vec<String> {
    let mut brackets: Vec<String> = Vec::new();
    for row in &data.pas {
        if !brackets.contains(&row.age_bracket) {
            brackets.push(row.age_bracket.clone());
        }
    }
    brackets.sort_by(|a, b| lower_bound(a).total_cmp(&lower_bound(b)));
    brackets
}

/// Percentage for one bracket and sex, zero when the table has no row.
pub fn bracket_share(data: &CityData, bracket: &str, sex: &str) -> f64 {
    data.pas
        .iter()
        .find(|row| row.age_bracket == bracket && row.sex.eq_ignore_ascii_case(sex))
        .map_or(0.0, |row| row.percentage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::records::{AgeSexRow, PvMonth};

    fn bin(label: &str, count: f64, percentage: f64) -> BinRow {
        BinRow {
            bin: label.to_string(),
            count,
            percentage,
        }
    }

    #[test]
    fn derived_distributions_cover_their_full_domains() {
        let data = CityData {
            rwi_area: vec![bin("Average wealth", 120.0, 55.0)],
            s: vec![bin("0-2", 9.0, 90.0), bin("2-5", 1.0, 10.0)],
            ls_area: vec![bin("Very high", 3.0, 100.0)],
            ..CityData::default()
        };

        let derived = DerivedSeries::from_data(&data);
        assert_eq!(derived.wealth.len(), 5);
        assert_eq!(derived.slope.len(), 5);
        assert_eq!(derived.landslide.len(), 5);
        assert_eq!(derived.built_era.len(), 4);
        assert_eq!(derived.vegetation.len(), 6);
        assert_eq!(derived.air_quality.len(), 9);

        // Present bins keep their values, absent ones are explicit zeros.
        assert!((derived.wealth[2].percentage - 55.0).abs() < f64::EPSILON);
        assert!(derived.wealth[0].percentage.abs() < f64::EPSILON);
        assert!((derived.landslide[4].percentage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn condition_months_count_all_three_levels() {
        let mut data = CityData::default();
        data.pv = ["Excellent", "Excellent", "Favorable"]
            .iter()
            .map(|condition| PvMonth {
                month_name: "Jan".to_string(),
                pv: 4.9,
                condition: (*condition).to_string(),
            })
            .collect();

        let derived = DerivedSeries::from_data(&data);
        assert_eq!(derived.pv_condition_months.len(), 3);
        // Best condition listed first.
        assert_eq!(derived.pv_condition_months[0].label, "Excellent");
        assert_eq!(derived.pv_condition_months[0].count, 2);
        assert_eq!(derived.pv_condition_months[2].count, 0);
    }

    #[test]
    fn age_brackets_sort_numerically() {
        let mut data = CityData::default();
        for bracket in ["80+", "5-9", "0-4", "10-14"] {
            data.pas.push(AgeSexRow {
                age_bracket: bracket.to_string(),
                sex: "female".to_string(),
                count: 1.0,
                percentage: 1.0,
            });
        }
        assert_eq!(
            sorted_age_brackets(&data),
            vec!["0-4", "5-9", "10-14", "80+"]
        );
    }
}
