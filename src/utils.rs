//! Utility helpers: duration formatting and random instance generation.

use crate::problem::{Customer, Problem};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Generate a reproducible random instance for benchmarks and experiments.
///
/// The depot gets id 1 at the center of the `[0, 100]` square; customers get
/// ids `2..=size + 1`, uniform coordinates and demands in `1..=10`. The same
/// seed always yields the same instance.
pub fn generate_problem(
    size: usize,
    vehicle_capacity: u32,
    vehicle_count: usize,
    seed: u64,
) -> Problem {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut customers = Vec::with_capacity(size + 1);
    customers.push(Customer::new(1, 50.0, 50.0, 0));

    for id in 2..=size + 1 {
        let x = rng.gen_range(0.0..100.0);
        let y = rng.gen_range(0.0..100.0);
        let demand = rng.gen_range(1..=10);
        customers.push(Customer::new(id, x, y, demand));
    }

    Problem::new(
        format!("random_{}_{}", size, seed),
        customers,
        1,
        vehicle_capacity,
        vehicle_count,
    )
}
