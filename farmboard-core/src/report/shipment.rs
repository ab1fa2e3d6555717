//! Destination × breed stacked bar

use std::collections::{BTreeMap, BTreeSet};

use super::clean_label;

/// Shipment count for one (destination, breed) group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationBreedCount {
    pub destination: String,
    pub breed: String,
    pub count: i64,
}

/// Stacked-bar data: one fixed-length count row per breed, one slot per
/// destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationMatrix {
    /// Distinct destinations, sorted (case-sensitive)
    pub dest_labels: Vec<String>,
    /// Distinct breed labels, sorted (case-sensitive)
    pub breed_names: Vec<String>,
    /// Breed label -> counts aligned with `dest_labels`
    pub matrix: BTreeMap<String, Vec<i64>>,
}

impl DestinationMatrix {
    /// Pivot grouped shipment counts.
    ///
    /// Each (destination, breed) pair is expected once; a repeated pair
    /// overwrites the earlier count rather than adding to it.
    pub fn from_rows(rows: &[DestinationBreedCount]) -> Self {
        let destinations: BTreeSet<String> =
            rows.iter().map(|r| clean_label(&r.destination)).collect();
        let breeds: BTreeSet<String> = rows.iter().map(|r| clean_label(&r.breed)).collect();

        let dest_labels: Vec<String> = destinations.into_iter().collect();
        let breed_names: Vec<String> = breeds.into_iter().collect();

        let mut matrix: BTreeMap<String, Vec<i64>> = breed_names
            .iter()
            .map(|breed| (breed.clone(), vec![0; dest_labels.len()]))
            .collect();

        for row in rows {
            let destination = clean_label(&row.destination);
            let Ok(slot) = dest_labels.binary_search(&destination) else {
                continue;
            };
            if let Some(counts) = matrix.get_mut(row.breed.trim()) {
                counts[slot] = row.count;
            }
        }

        Self {
            dest_labels,
            breed_names,
            matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(destination: &str, breed: &str, count: i64) -> DestinationBreedCount {
        DestinationBreedCount {
            destination: destination.into(),
            breed: breed.into(),
            count,
        }
    }

    #[test]
    fn sorts_labels_and_zero_fills() {
        let m = DestinationMatrix::from_rows(&[
            count("South", "Ross", 3),
            count("North", "Cobb", 5),
        ]);

        assert_eq!(m.dest_labels, vec!["North", "South"]);
        assert_eq!(m.breed_names, vec!["Cobb", "Ross"]);
        assert_eq!(m.matrix["Cobb"], vec![5, 0]);
        assert_eq!(m.matrix["Ross"], vec![0, 3]);
        assert!(m.matrix.values().all(|row| row.len() == 2));
    }

    #[test]
    fn sort_is_case_sensitive() {
        let m = DestinationMatrix::from_rows(&[count("busan", "Ross", 1), count("Seoul", "Ross", 1)]);
        assert_eq!(m.dest_labels, vec!["Seoul", "busan"]);
    }

    #[test]
    fn repeated_pair_overwrites() {
        let m = DestinationMatrix::from_rows(&[count("North", "Ross", 2), count("North", "Ross", 7)]);
        assert_eq!(m.matrix["Ross"], vec![7]);
    }

    #[test]
    fn trims_destination_and_breed() {
        let m = DestinationMatrix::from_rows(&[count("North  ", " Ross", 2), count("South", "Ross", 1)]);
        assert_eq!(m.dest_labels, vec!["North", "South"]);
        assert_eq!(m.breed_names, vec!["Ross"]);
        assert_eq!(m.matrix["Ross"], vec![2, 1]);
    }

    #[test]
    fn empty_input() {
        let m = DestinationMatrix::from_rows(&[]);
        assert!(m.dest_labels.is_empty());
        assert!(m.matrix.is_empty());
    }
}
