//! Seeded random workloads.
//!
//! Produces reproducible process lists for demos, benchmarks and
//! property-style tests. The same configuration always yields the same
//! processes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Parameters of a random workload.
///
/// Ranges are inclusive. Out-of-range settings are clamped when
/// generating: arrivals and priorities start at 0, bursts at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival tick.
    pub max_arrival: i64,
    /// Shortest possible burst.
    pub min_burst: i64,
    /// Longest possible burst.
    pub max_burst: i64,
    /// Largest priority value.
    pub max_priority: i64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
            seed: 0,
        }
    }
}

impl WorkloadConfig {
    /// Sets the number of processes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i64) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generates a workload with ids `P1..Pn`, every process carrying a priority.
pub fn generate(config: &WorkloadConfig) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let max_arrival = config.max_arrival.max(0);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);
    let max_priority = config.max_priority.max(0);

    (1..=config.count)
        .map(|n| {
            let arrival = rng.random_range(0..=max_arrival);
            let burst = rng.random_range(min_burst..=max_burst);
            let priority = rng.random_range(0..=max_priority);
            Process::new(format!("P{n}"), arrival, burst).with_priority(priority)
        })
        .collect()
}
