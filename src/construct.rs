//! Capacity-aware nearest-neighbor route construction.

use crate::problem::Problem;
use crate::solution::{Fleet, Trip};

/// Builds one initial trip per vehicle via nearest-neighbor selection.
pub struct RouteConstructor;

impl RouteConstructor {
    /// Construct one trip per vehicle, in vehicle order, marking every
    /// assigned customer as visited.
    ///
    /// Each vehicle starts at the depot with its full capacity and
    /// repeatedly appends the nearest unvisited customer whose demand still
    /// fits. When no feasible candidate remains the trip is closed with the
    /// depot; a vehicle that can serve nobody yields the degenerate trip
    /// `[depot, depot]`. Multi-trip assignment is left to the overflow
    /// resolver.
    pub fn construct(problem: &mut Problem, fleet: &mut Fleet) {
        let depot_id = problem.depot_id;

        for v_idx in 0..fleet.vehicles.len() {
            let mut remaining = fleet.vehicles[v_idx].capacity;
            let mut current = depot_id;
            let mut trip = Trip::open(depot_id);

            while let Some(next) = Self::nearest_feasible(problem, current, remaining) {
                trip.push(next);
                remaining -= problem.customer(next).demand;
                problem.mark_visited(next);
                current = next;
            }

            trip.close(depot_id);
            log::debug!(
                "vehicle {}: constructed trip with {} stops, load {}/{}",
                fleet.vehicles[v_idx].id,
                trip.stop_count(),
                trip.load(problem),
                fleet.vehicles[v_idx].capacity
            );
            fleet.vehicles[v_idx].trips.push(trip);
        }
    }

    /// The nearest unvisited customer whose demand fits within `remaining`.
    ///
    /// Candidates are scanned in ascending id order and only a strictly
    /// smaller distance replaces the incumbent, so distance ties resolve to
    /// the lowest customer id.
    fn nearest_feasible(problem: &Problem, from: usize, remaining: u32) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for id in problem.unvisited_ids() {
            if problem.customer(id).demand > remaining {
                continue;
            }
            let d = problem.distance(from, id);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((id, d)),
            }
        }

        best.map(|(id, _)| id)
    }
}
