//! Age-dependency ratios.

use crate::data::records::AgeSexRow;
use crate::domain::AgeGroup;

/// Dependency ratios per 100 working-age residents, plus the raw group
/// totals they were computed from.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DependencyRatios {
    pub youth_total: f64,
    pub working_age_total: f64,
    pub elderly_total: f64,
    pub youth_dependency_ratio: f64,
    pub elderly_dependency_ratio: f64,
    pub total_dependency_ratio: f64,
}

/// Sum population counts into the three age groups and derive the youth,
/// elderly and total dependency ratios.
///
/// The total is the sum of the two rounded component ratios, not a
/// re-rounded quotient. A city with no working-age population produces a
/// non-finite ratio; that signals a data error upstream and is deliberately
/// not masked here.
pub fn dependency_ratios(rows: &[AgeSexRow]) -> DependencyRatios {
    let group_total = |group: AgeGroup| -> f64 {
        rows.iter()
            .filter(|row| AgeGroup::from_bracket(&row.age_bracket) == Some(group))
            .map(|row| row.count)
            .sum()
    };

    let youth_total = group_total(AgeGroup::Youth);
    let working_age_total = group_total(AgeGroup::WorkingAge);
    let elderly_total = group_total(AgeGroup::Elderly);

    let youth_dependency_ratio = (youth_total / working_age_total * 100.0).round();
    let elderly_dependency_ratio = (elderly_total / working_age_total * 100.0).round();

    DependencyRatios {
        youth_total,
        working_age_total,
        elderly_total,
        youth_dependency_ratio,
        elderly_dependency_ratio,
        total_dependency_ratio: youth_dependency_ratio + elderly_dependency_ratio,
    }
}

/// Percentage of the population in each age group, in group order, summed
/// over both sexes.
pub fn group_shares(rows: &[AgeSexRow]) -> [f64; 3] {
    let mut shares = [0.0; 3];
    for row in rows {
        if let Some(group) = AgeGroup::from_bracket(&row.age_bracket) {
            shares[group as usize] += row.percentage;
        }
    }
    shares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(entries: &[(&str, &str, f64)]) -> Vec<AgeSexRow> {
        entries
            .iter()
            .map(|(bracket, sex, count)| AgeSexRow {
                age_bracket: (*bracket).to_string(),
                sex: (*sex).to_string(),
                count: *count,
                percentage: 0.0,
            })
            .collect()
    }

    #[test]
    fn ratios_per_hundred_workers() {
        let pas = rows(&[
            ("0-4", "female", 18.0),
            ("5-9", "male", 12.0),
            ("20-24", "female", 25.0),
            ("40-44", "male", 35.0),
            ("65-69", "female", 10.0),
            ("80+", "male", 5.0),
        ]);

        let ratios = dependency_ratios(&pas);
        assert!((ratios.youth_total - 30.0).abs() < f64::EPSILON);
        assert!((ratios.working_age_total - 60.0).abs() < f64::EPSILON);
        assert!((ratios.elderly_total - 15.0).abs() < f64::EPSILON);
        assert!((ratios.youth_dependency_ratio - 50.0).abs() < f64::EPSILON);
        assert!((ratios.elderly_dependency_ratio - 25.0).abs() < f64::EPSILON);
        assert!((ratios.total_dependency_ratio - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn sparse_fixture_leaves_elderly_at_zero() {
        let pas = rows(&[("0-4", "female", 10.0), ("20-24", "male", 40.0)]);

        let ratios = dependency_ratios(&pas);
        assert!((ratios.youth_total - 10.0).abs() < f64::EPSILON);
        assert!((ratios.working_age_total - 40.0).abs() < f64::EPSILON);
        assert!(ratios.elderly_total.abs() < f64::EPSILON);
        assert!((ratios.youth_dependency_ratio - 25.0).abs() < f64::EPSILON);
        assert!(ratios.elderly_dependency_ratio.abs() < f64::EPSILON);
        assert!((ratios.total_dependency_ratio - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_workers_propagate_a_non_finite_ratio() {
        let pas = rows(&[("0-4", "female", 10.0), ("80+", "male", 3.0)]);

        let ratios = dependency_ratios(&pas);
        assert!(!ratios.youth_dependency_ratio.is_finite());
        assert!(!ratios.total_dependency_ratio.is_finite());
    }

    #[test]
    fn unknown_brackets_are_ignored() {
        let pas = rows(&[("0-4", "female", 10.0), ("150+", "male", 99.0), ("20-24", "male", 40.0)]);
        let ratios = dependency_ratios(&pas);
        assert!((ratios.working_age_total - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn group_shares_sum_by_group() {
        let mut pas = rows(&[("0-4", "female", 0.0), ("0-4", "male", 0.0), ("20-24", "male", 0.0)]);
        pas[0].percentage = 5.0;
        pas[1].percentage = 4.0;
        pas[2].percentage = 20.0;
        let shares = group_shares(&pas);
        assert!((shares[0] - 9.0).abs() < 1e-9);
        assert!((shares[1] - 20.0).abs() < 1e-9);
        assert!(shares[2].abs() < f64::EPSILON);
    }
}
