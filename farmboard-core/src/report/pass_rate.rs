//! Quality pass rate per farm

use std::collections::BTreeMap;

use super::clean_label;

/// Appended to each farm name in chart labels ("farm")
pub const FARM_LABEL_SUFFIX: &str = "농장";

/// Production result counts for one farm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarmTally {
    pub farm: String,
    /// Records with `pass_fail = 'P'`
    pub passed: i64,
    /// All records
    pub total: i64,
}

impl FarmTally {
    /// Percentage of passed records, rounded to one decimal with ties to
    /// even. A farm with no records has a rate of 0.
    pub fn pass_rate(&self) -> f64 {
        if self.total <= 0 {
            return 0.0;
        }
        let rate = 100.0 * self.passed as f64 / self.total as f64;
        (rate * 10.0).round_ties_even() / 10.0
    }
}

/// Bar chart labels and values, ordered by farm ascending
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FarmPassRates {
    pub labels: Vec<String>,
    pub rates: Vec<f64>,
}

impl FarmPassRates {
    /// Tallies whose farm names differ only by padding are merged.
    ///
    /// Farms are ordered by the byte order of their trimmed names, not by the
    /// database collation, so the chart order does not depend on the server's
    /// locale.
    pub fn from_tallies(tallies: impl IntoIterator<Item = FarmTally>) -> Self {
        let mut merged: BTreeMap<String, FarmTally> = BTreeMap::new();
        for tally in tallies {
            let farm = clean_label(&tally.farm);
            let entry = merged.entry(farm.clone()).or_insert(FarmTally {
                farm,
                passed: 0,
                total: 0,
            });
            entry.passed += tally.passed;
            entry.total += tally.total;
        }

        let mut rates = Self::default();
        for (farm, tally) in merged {
            rates.labels.push(format!("{farm} {FARM_LABEL_SUFFIX}"));
            rates.rates.push(tally.pass_rate());
        }
        rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(farm: &str, passed: i64, total: i64) -> FarmTally {
        FarmTally {
            farm: farm.into(),
            passed,
            total,
        }
    }

    #[test]
    fn two_of_three_rounds_to_one_decimal() {
        assert_eq!(tally("A", 2, 3).pass_rate(), 66.7);
    }

    #[test]
    fn halfway_rates_round_to_even() {
        assert_eq!(tally("A", 49, 400).pass_rate(), 12.2);
        assert_eq!(tally("A", 1, 400).pass_rate(), 0.2);
        assert_eq!(tally("A", 3, 400).pass_rate(), 0.8);
    }

    #[test]
    fn zero_denominator_is_zero() {
        assert_eq!(tally("A", 0, 0).pass_rate(), 0.0);
    }

    #[test]
    fn full_and_empty_pass() {
        assert_eq!(tally("A", 4, 4).pass_rate(), 100.0);
        assert_eq!(tally("A", 0, 4).pass_rate(), 0.0);
    }

    #[test]
    fn labels_are_suffixed_and_ordered() {
        let rates = FarmPassRates::from_tallies(vec![tally("B ", 1, 4), tally("A", 2, 3)]);
        assert_eq!(rates.labels, vec!["A 농장", "B 농장"]);
        assert_eq!(rates.rates, vec![66.7, 25.0]);
    }

    #[test]
    fn ordering_is_bytewise() {
        let rates = FarmPassRates::from_tallies(vec![
            tally("b", 1, 1),
            tally("나", 1, 1),
            tally("B", 1, 1),
        ]);
        assert_eq!(rates.labels, vec!["B 농장", "b 농장", "나 농장"]);
    }

    #[test]
    fn padded_duplicates_merge() {
        let rates = FarmPassRates::from_tallies(vec![tally("A", 1, 1), tally("A  ", 0, 1)]);
        assert_eq!(rates.labels, vec!["A 농장"]);
        assert_eq!(rates.rates, vec![50.0]);
    }
}
