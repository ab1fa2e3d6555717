//! Breed growth efficiency scatter (feed intake vs. weight, one series per breed)

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::clean_label;

/// One health-check measurement joined to its decoded breed label
#[derive(Debug, Clone, PartialEq)]
pub struct BreedGrowthRow {
    pub breed: String,
    pub weight: Option<f64>,
    pub feed_intake: Option<f64>,
}

/// Chart point
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Scatter series keyed by breed, in order of each breed's first appearance.
///
/// Serializes as a JSON object whose key order follows that first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreedGrowth {
    series: Vec<(String, Vec<ScatterPoint>)>,
}

impl BreedGrowth {
    /// Group rows by trimmed breed label.
    ///
    /// Only rows with a positive weight and a positive feed intake become
    /// points `{x: feed_intake, y: weight}`.
    pub fn from_rows(rows: impl IntoIterator<Item = BreedGrowthRow>) -> Self {
        let mut growth = Self::default();

        for row in rows {
            let (Some(weight), Some(feed)) = (row.weight, row.feed_intake) else {
                continue;
            };
            if weight <= 0.0 || feed <= 0.0 {
                continue;
            }

            let breed = clean_label(&row.breed);
            let point = ScatterPoint { x: feed, y: weight };
            match growth.series.iter_mut().find(|(name, _)| *name == breed) {
                Some((_, points)) => points.push(point),
                None => growth.series.push((breed, vec![point])),
            }
        }

        growth
    }

    /// Points for one breed.
    pub fn get(&self, breed: &str) -> Option<&[ScatterPoint]> {
        self.series
            .iter()
            .find(|(name, _)| name == breed)
            .map(|(_, points)| points.as_slice())
    }

    /// Breed labels in first-appearance order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl Serialize for BreedGrowth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.series.len()))?;
        for (breed, points) in &self.series {
            map.serialize_entry(breed, points)?;
        }
        map.end()
    }
}
