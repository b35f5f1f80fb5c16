//! 2-opt best-improvement local search over individual trips.

use crate::distance::route_length;
use crate::problem::Problem;
use crate::solution::{Fleet, Trip};

/// Minimum decrease for a move to count as an improvement.
const EPSILON: f64 = 1e-10;

/// Shortens each trip independently; trip membership never changes, only
/// the visiting order within a trip.
pub struct LocalSearch;

impl LocalSearch {
    /// Optimize every trip of every vehicle in place.
    pub fn optimize(problem: &Problem, fleet: &mut Fleet) {
        for vehicle in &mut fleet.vehicles {
            for trip in &mut vehicle.trips {
                let before = trip.length(problem);
                Self::two_opt(problem, trip);
                let after = trip.length(problem);
                if after + EPSILON < before {
                    log::debug!(
                        "vehicle {}: trip shortened {:.2} -> {:.2}",
                        vehicle.id,
                        before,
                        after
                    );
                }
            }
        }
    }

    /// Run 2-opt with best improvement on one closed trip until it is a
    /// local optimum.
    ///
    /// Each sweep evaluates the reversal of every contiguous interior
    /// segment of at least two stops (the depot anchors never move) by full
    /// length recomputation. The single best candidate of the sweep is
    /// applied only if strictly shorter than the current trip, then the
    /// sweep restarts; ties among equally good candidates go to the first
    /// (i, j) pair in ascending i, then ascending j. Total length is
    /// non-increasing and strictly decreases on every applied move, so the
    /// loop terminates.
    pub fn two_opt(problem: &Problem, trip: &mut Trip) {
        let n = trip.stops.len();
        if n < 4 {
            return;
        }

        let mut current_length = trip.length(problem);

        loop {
            let mut best: Option<(usize, usize, f64)> = None;

            for i in 1..n - 2 {
                for j in i + 1..n - 1 {
                    let mut candidate = trip.stops.clone();
                    candidate[i..=j].reverse();
                    let length = route_length(problem, &candidate);

                    match best {
                        Some((_, _, best_len)) if length >= best_len => {}
                        _ => best = Some((i, j, length)),
                    }
                }
            }

            match best {
                Some((i, j, length)) if length + EPSILON < current_length => {
                    trip.stops[i..=j].reverse();
                    current_length = length;
                }
                _ => break,
            }
        }
    }
}
