//! Distribution completion.
//!
//! Source tables only carry rows for bins with nonzero representation in the
//! scanned region. Charts always render the full canonical domain, so sparse
//! series are padded with explicit zero rows before layout. A bin that is
//! empty in one city may be dominant in another; dropping it would make the
//! distributions incomparable.

use crate::data::records::BinRow;

/// Pad `rows` to one entry per canonical bin, in canonical order.
///
/// Bins absent from the input get `{count: 0, percentage: 0}`. Input rows
/// whose bin is not canonical are dropped. Completing an already-dense
/// series returns it unchanged.
pub fn complete(canonical: &[&str], rows: &[BinRow]) -> Vec<BinRow> {
    canonical
        .iter()
        .map(|bin| {
            rows.iter()
                .find(|row| row.bin == *bin)
                .cloned()
                .unwrap_or_else(|| BinRow::zero(*bin))
        })
        .collect()
}

/// A category with its occurrence count and share of all observations.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

/// Count label occurrences per canonical category (e.g. months per PV
/// condition, weeks per fire-danger class). Every canonical category is
/// present in the output, zero-counted if unobserved.
pub fn tally<'a, I>(canonical: &[&str], labels: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let observed: Vec<&str> = labels.into_iter().collect();
    let total = observed.len();

    canonical
        .iter()
        .map(|category| {
            let count = observed.iter().filter(|label| *label == category).count();
            let percentage = if total == 0 {
                0.0
            } else {
                #[allow(clippy::cast_precision_loss)]
                let share = count as f64 / total as f64 * 100.0;
                share
            };
            CategoryCount {
                label: (*category).to_string(),
                count,
                percentage,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANON: [&str; 4] = ["a", "b", "c", "d"];

    fn row(bin: &str, count: f64, percentage: f64) -> BinRow {
        BinRow {
            bin: bin.to_string(),
            count,
            percentage,
        }
    }

    #[test]
    fn completion_is_total() {
        let sparse = vec![row("b", 5.0, 40.0)];
        let dense = complete(&CANON, &sparse);
        assert_eq!(dense.len(), CANON.len());
        assert_eq!(dense[1], row("b", 5.0, 40.0));
        assert_eq!(dense[0], BinRow::zero("a"));
        assert_eq!(dense[3], BinRow::zero("d"));
    }

    #[test]
    fn completion_is_idempotent() {
        let sparse = vec![row("a", 1.0, 10.0), row("c", 3.0, 30.0)];
        let once = complete(&CANON, &sparse);
        let twice = complete(&CANON, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn completion_preserves_percentage_sum() {
        let sparse = vec![row("a", 2.0, 12.5), row("d", 14.0, 87.5)];
        let before: f64 = sparse.iter().map(|r| r.percentage).sum();
        let after: f64 = complete(&CANON, &sparse).iter().map(|r| r.percentage).sum();
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn completion_keeps_canonical_order() {
        let shuffled = vec![row("d", 4.0, 40.0), row("a", 1.0, 10.0)];
        let dense = complete(&CANON, &shuffled);
        let order: Vec<&str> = dense.iter().map(|r| r.bin.as_str()).collect();
        assert_eq!(order, CANON.to_vec());
    }

    #[test]
    fn tally_counts_every_canonical_category() {
        let counts = tally(&["x", "y", "z"], ["x", "x", "y"]);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[0].count, 2);
        assert!((counts[0].percentage - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(counts[2].count, 0);
        assert!(counts[2].percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn tally_of_nothing_is_all_zero() {
        let counts = tally(&["x"], std::iter::empty::<&str>());
        assert_eq!(counts[0].count, 0);
        assert!(counts[0].percentage.abs() < f64::EPSILON);
    }
}
