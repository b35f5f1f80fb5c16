//! Configuration parameters for the solver pipeline.

use serde::{Deserialize, Serialize};

/// Configuration settings for the construct/repair/optimize pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Build exactly one trip per vehicle and skip the overflow repair
    /// phase; customers left over by construction go straight to the
    /// unserved list.
    pub single_trip_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            single_trip_only: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set whether each vehicle is restricted to a single trip.
    pub fn with_single_trip_only(mut self, single_trip_only: bool) -> Self {
        self.single_trip_only = single_trip_only;
        self
    }
}
