use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Caps for the scenario search. Larger caps find smaller magic numbers in
/// crowded races at the cost of latency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchLimits {
    /// Combinations of the team's own wins tried per win count
    pub max_win_combinations: usize,
    /// Combinations of competitor losses tried per loss count
    pub max_loss_combinations: usize,
    /// Most competitor losses combined with one set of wins
    pub max_loss_depth: usize,
    /// Paths reported per goal
    pub max_paths: usize,
    /// Seedings one enumeration may spend before settling for the thinned
    /// best finish
    pub max_evaluations: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_win_combinations: 64,
            max_loss_combinations: 32,
            max_loss_depth: 2,
            max_paths: 10,
            max_evaluations: 500,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationConfig {
    pub simulations: usize,
    /// Fixed seed for reproducible odds; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            simulations: 1000,
            seed: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub search: SearchLimits,
    pub simulation: SimulationConfig,
}

impl EngineConfig {
    /// Read a JSON config; missing fields take their defaults.
    pub fn read_from_file(filepath: impl AsRef<Path>) -> Result<Self> {
        let path = filepath.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}
