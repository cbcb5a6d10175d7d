//! Bin-label range parsing.
//!
//! Indicator bins arrive as text ("Before 1986", "20-90", "80+", "-1-0.015")
//! and are not lexicographically sortable, so every binned distribution is
//! ordered by the numeric lower bound extracted here.

use crate::data::records::BinRow;

/// Extract the numeric lower bound of a bin label.
///
/// Rules are applied in order, first match wins:
/// 1. a leading `-` marks a signed lower bound ("-1-0.015" starts at -1);
/// 2. "Before N" bins start at N;
/// 3. "A-B" bins start at A;
/// 4. "N+" bins start at N;
/// 5. anything else is parsed as a plain float.
///
/// A label that matches none of the rules yields `f64::NAN`; the source
/// tables are controlled, so this is not treated as an error.
pub fn lower_bound(label: &str) -> f64 {
    let label = label.trim();

    if let Some(rest) = label.strip_prefix('-') {
        // The leading signed number runs up to the dash that separates it
        // from the upper bound.
        let end = rest.find('-').unwrap_or(rest.len());
        return rest[..end].parse::<f64>().map_or(f64::NAN, |n| -n);
    }

    if label.contains("Before") {
        return label
            .rsplit(' ')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(f64::NAN);
    }

    if let Some((start, _)) = label.split_once('-') {
        return start.parse().unwrap_or(f64::NAN);
    }

    if let Some(stripped) = label.strip_suffix('+') {
        return stripped.parse().unwrap_or(f64::NAN);
    }

    label.parse().unwrap_or(f64::NAN)
}

/// Sort bin rows by their lower bound, left to right.
///
/// `total_cmp` keeps the order deterministic even when a label failed to
/// parse (NaN sorts last).
pub fn sort_by_lower_bound(rows: &mut [BinRow]) {
    rows.sort_by(|a, b| lower_bound(&a.bin).total_cmp(&lower_bound(&b.bin)));
}

/// Midpoint of an "A-B" interval bin, used for gradient color mapping.
pub fn midpoint(label: &str) -> f64 {
    let label = label.trim();
    let Some((start, end)) = label.split_once('-') else {
        return lower_bound(label);
    };
    match (start.parse::<f64>(), end.parse::<f64>()) {
        (Ok(a), Ok(b)) => f64::midpoint(a, b),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_era_bins() {
        assert!(lower_bound("Before 1986") <= 1986.0);
        assert!((lower_bound("1986-1995") - 1986.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_interval_bins() {
        assert!((lower_bound("20-90") - 20.0).abs() < f64::EPSILON);
        assert!((lower_bound("0.18-0.27") - 0.18).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_open_ended_bins() {
        assert!((lower_bound("80+") - 80.0).abs() < f64::EPSILON);
        assert!((lower_bound("100+") - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_signed_bins() {
        assert!((lower_bound("-1-0.015") - (-1.0)).abs() < f64::EPSILON);
        assert!((lower_bound("-12") - (-12.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_plain_numbers() {
        assert!((lower_bound("42") - 42.0).abs() < f64::EPSILON);
        assert!((lower_bound("3.5") - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_labels_yield_nan() {
        // Threshold labels like "<3.5" belong to the condition map, not the
        // range parser.
        assert!(lower_bound("<3.5").is_nan());
        assert!(lower_bound("n/a").is_nan());
    }

    #[test]
    fn sorting_is_deterministic_with_malformed_labels() {
        let mut rows = vec![
            BinRow::zero("garbage"),
            BinRow::zero("20-30"),
            BinRow::zero("-5-0"),
            BinRow::zero("80+"),
        ];
        sort_by_lower_bound(&mut rows);
        let order: Vec<&str> = rows.iter().map(|r| r.bin.as_str()).collect();
        assert_eq!(order, vec!["-5-0", "20-30", "80+", "garbage"]);
    }

    #[test]
    fn midpoint_of_interval() {
        assert!((midpoint("20-30") - 25.0).abs() < f64::EPSILON);
        assert!((midpoint("80+") - 80.0).abs() < f64::EPSILON);
    }
}
