//! Dashboard chart datasets
//!
//! Each transform consumes the flat rows of one reporting query and reshapes
//! them in memory. Reporting volumes are small, so nothing here streams.
//!
//! String fields used as group keys or labels are trimmed first: the source
//! tables use fixed-width columns and pad values with spaces.

mod environment;
mod growth;
mod pass_rate;
mod shipment;

use std::collections::BTreeMap;

use serde::Serialize;

pub use environment::{env_failures, EnvFailurePoint, EnvFailureRow};
pub use growth::{BreedGrowth, BreedGrowthRow, ScatterPoint};
pub use pass_rate::{FarmPassRates, FarmTally, FARM_LABEL_SUFFIX};
pub use shipment::{DestinationBreedCount, DestinationMatrix};

/// Trim padding from a key or label taken from the dataset.
pub(crate) fn clean_label(raw: &str) -> String {
    raw.trim().to_owned()
}

/// All four dashboard datasets, named the way the chart front end reads them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub breed_groups: BreedGrowth,
    pub dest_labels: Vec<String>,
    pub breed_names: Vec<String>,
    pub dest_matrix: BTreeMap<String, Vec<i64>>,
    pub env_fail_data: Vec<EnvFailurePoint>,
    pub farm_labels: Vec<String>,
    pub farm_pass_rates: Vec<f64>,
}

impl Dashboard {
    pub fn build(
        growth: Vec<BreedGrowthRow>,
        shipments: Vec<DestinationBreedCount>,
        environment: Vec<EnvFailureRow>,
        tallies: Vec<FarmTally>,
    ) -> Self {
        let breed_groups = BreedGrowth::from_rows(growth);
        let destinations = DestinationMatrix::from_rows(&shipments);
        let env_fail_data = env_failures(environment);
        let pass_rates = FarmPassRates::from_tallies(tallies);

        tracing::debug!(
            breeds = breed_groups.len(),
            destinations = destinations.dest_labels.len(),
            failures = env_fail_data.len(),
            farms = pass_rates.labels.len(),
            "dashboard datasets built"
        );

        Self {
            breed_groups,
            dest_labels: destinations.dest_labels,
            breed_names: destinations.breed_names,
            dest_matrix: destinations.matrix,
            env_fail_data,
            farm_labels: pass_rates.labels,
            farm_pass_rates: pass_rates.rates,
        }
    }
}
