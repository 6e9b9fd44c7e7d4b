//! Benchmark configuration.
//!
//! Loaded from TOML so benchmark runs can change solvers and seeds without
//! code changes.
//!
//! # Examples
//!
//! ```
//! use fjsp_bench::config::BenchConfig;
//! use fjsp_bench::solvers::SolverKind;
//!
//! let config = BenchConfig::from_toml_str(r#"
//!     cases_dir = "cases/"
//!     random_seed = 7
//!     parallel = true
//!
//!     [[solvers]]
//!     type = "random"
//!
//!     [[solvers]]
//!     type = "random"
//!     seed = 3
//!
//!     [[solvers]]
//!     type = "greedy"
//! "#).unwrap();
//!
//! assert!(config.parallel);
//! assert_eq!(
//!     config.resolved_solvers(),
//!     vec![SolverKind::random(7), SolverKind::random(3), SolverKind::Greedy],
//! );
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::{list_cases, DEFAULT_CASES_DIR};
use crate::solvers::{SolverKind, DEFAULT_SEED};

/// Benchmark run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BenchConfig {
    /// Directory holding standardized case files.
    pub cases_dir: PathBuf,
    /// Seed for random solvers that do not set their own.
    pub random_seed: u64,
    /// Solvers to run, in reporting order.
    pub solvers: Vec<SolverKind>,
    /// Run solvers on the rayon thread pool.
    pub parallel: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            cases_dir: PathBuf::from(DEFAULT_CASES_DIR),
            random_seed: DEFAULT_SEED,
            solvers: SolverKind::baselines(),
            parallel: false,
        }
    }
}

impl BenchConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Standardized case files under `cases_dir`, sorted.
    pub fn list_cases(&self) -> Result<Vec<PathBuf>> {
        list_cases(&self.cases_dir)
    }

    /// The solver list with `random_seed` given to unseeded random entries.
    pub fn resolved_solvers(&self) -> Vec<SolverKind> {
        self.solvers
            .iter()
            .cloned()
            .map(|s| s.with_default_seed(self.random_seed))
            .collect()
    }

    /// Sets the case directory.
    pub fn with_cases_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cases_dir = dir.into();
        self
    }

    /// Sets the fallback seed for random solvers.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Replaces the solver list.
    pub fn with_solvers(mut self, solvers: Vec<SolverKind>) -> Self {
        self.solvers = solvers;
        self
    }

    /// Enables or disables parallel solver runs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
