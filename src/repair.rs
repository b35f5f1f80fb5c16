//! Overflow repair: assign customers left over by construction as extra
//! single-customer round trips.

use crate::problem::Problem;
use crate::solution::{Fleet, Trip};
use std::cmp::Reverse;

/// Assigns each unvisited customer to one additional round trip, or records
/// it as unservable.
pub struct OverflowResolver;

impl OverflowResolver {
    /// Repair cycles run until the unserved set is empty or a full cycle
    /// over the fleet assigns nothing.
    ///
    /// Per cycle: vehicles are taken ascending by their current total route
    /// distance (stable, so ties keep fleet order); each vehicle opens at
    /// most one new trip from its full nominal capacity, serving the
    /// largest-demand unserved customer that fits. A cycle with zero
    /// assignments proves the remainder infeasible under every vehicle's
    /// capacity; those ids are recorded on the fleet as permanently
    /// unserved.
    pub fn resolve(problem: &mut Problem, fleet: &mut Fleet) {
        let depot_id = problem.depot_id;
        let mut unserved = problem.unvisited_ids();

        while !unserved.is_empty() {
            let mut assigned_this_cycle = false;

            for v_idx in Self::vehicles_by_distance(problem, fleet) {
                let capacity = fleet.vehicles[v_idx].capacity;

                let mut candidates = unserved.clone();
                candidates.sort_by_key(|&id| (Reverse(problem.customer(id).demand), id));

                if let Some(&chosen) = candidates
                    .iter()
                    .find(|&&id| problem.customer(id).demand <= capacity)
                {
                    problem.mark_visited(chosen);
                    unserved.retain(|&id| id != chosen);
                    fleet.vehicles[v_idx]
                        .trips
                        .push(Trip::round_trip(depot_id, chosen));
                    assigned_this_cycle = true;
                    log::info!(
                        "vehicle {} assigned extra round trip to customer {}",
                        fleet.vehicles[v_idx].id,
                        chosen
                    );
                }
            }

            if !assigned_this_cycle {
                log::warn!(
                    "no vehicle can serve remaining customers {:?}; recording as unserved",
                    unserved
                );
                break;
            }
        }

        fleet.unserved = unserved;
    }

    /// Vehicle indices ascending by current total route distance.
    fn vehicles_by_distance(problem: &Problem, fleet: &Fleet) -> Vec<usize> {
        let mut keyed: Vec<(f64, usize)> = fleet
            .vehicles
            .iter()
            .enumerate()
            .map(|(idx, v)| (v.total_distance(problem), idx))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        keyed.into_iter().map(|(_, idx)| idx).collect()
    }
}
