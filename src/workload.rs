//! Random process-set generation.
//!
//! Produces valid inputs for benchmarking policies against each other or
//! sweeping them in tests. The caller owns the RNG, so a seeded generator
//! gives reproducible workloads.
//!
//! ```
//! use cpu_sched::workload::WorkloadGenerator;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let procs = WorkloadGenerator::new().with_burst_range(1, 3).generate(&mut rng, 4);
//! assert_eq!(procs.len(), 4);
//! assert!(procs.iter().all(|p| (1..=3).contains(&p.burst_time)));
//! ```

use rand::Rng;

use crate::models::ProcessSpec;

/// Ranges (inclusive) from which process attributes are drawn.
///
/// Ranges are only set through the `with_*` builders, which clamp them to
/// valid values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    arrival: (i64, i64),
    burst: (i64, i64),
    priority: (i32, i32),
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            arrival: (0, 10),
            burst: (1, 10),
            priority: (0, 5),
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator with the default ranges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the arrival range. Negative bounds are clamped to 0.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival = (min.max(0), max.max(0));
        self
    }

    /// Sets the burst range. Bounds below 1 are clamped to 1.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst = (min.max(1), max.max(1));
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority = (min, max);
        self
    }

    /// Generates `count` processes labelled `P1..Pcount`.
    pub fn generate<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<ProcessSpec> {
        (0..count)
            .map(|i| {
                let arrival = draw(rng, self.arrival.0, self.arrival.1);
                let burst = draw(rng, self.burst.0, self.burst.1).max(1);
                let (lo, hi) = ordered(self.priority.0, self.priority.1);
                let priority = rng.random_range(lo..=hi);
                ProcessSpec::new(format!("P{}", i + 1), arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

fn draw<R: Rng>(rng: &mut R, a: i64, b: i64) -> i64 {
    let (lo, hi) = ordered(a, b);
    rng.random_range(lo..=hi)
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
