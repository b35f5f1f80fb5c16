//! Fleet, vehicle and trip representation for the CVRP solution.

use crate::distance;
use crate::problem::Problem;
use serde::{Deserialize, Serialize};

/// One out-and-back route of a vehicle.
///
/// `stops` is the full sequence of customer ids, beginning and ending with
/// the depot id. A degenerate trip `[depot, depot]` carries no customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub stops: Vec<usize>,
}

impl Trip {
    /// Start an open trip at the depot.
    pub fn open(depot_id: usize) -> Self {
        Trip {
            stops: vec![depot_id],
        }
    }

    /// Build a closed single-customer round trip.
    pub fn round_trip(depot_id: usize, customer_id: usize) -> Self {
        Trip {
            stops: vec![depot_id, customer_id, depot_id],
        }
    }

    /// Append a customer to an open trip.
    pub fn push(&mut self, customer_id: usize) {
        self.stops.push(customer_id);
    }

    /// Close the trip by returning to the depot.
    pub fn close(&mut self, depot_id: usize) {
        self.stops.push(depot_id);
    }

    /// The interior customer ids, depot endpoints excluded.
    pub fn customers(&self) -> &[usize] {
        if self.stops.len() < 2 {
            return &[];
        }
        &self.stops[1..self.stops.len() - 1]
    }

    /// Number of customers served by this trip.
    pub fn stop_count(&self) -> usize {
        self.customers().len()
    }

    /// Whether the trip serves no customer at all.
    pub fn is_empty(&self) -> bool {
        self.stop_count() == 0
    }

    /// Total demand carried on this trip.
    pub fn load(&self, problem: &Problem) -> u32 {
        self.customers()
            .iter()
            .map(|&id| problem.customer(id).demand)
            .sum()
    }

    /// Total travel distance of this trip.
    pub fn length(&self, problem: &Problem) -> f64 {
        distance::route_length(problem, &self.stops)
    }
}

/// A vehicle with a fixed capacity and the ordered trips assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: usize,
    pub capacity: u32,
    pub trips: Vec<Trip>,
}

impl Vehicle {
    /// Create a vehicle with no trips yet.
    pub fn new(id: usize, capacity: u32) -> Self {
        Vehicle {
            id,
            capacity,
            trips: Vec::new(),
        }
    }

    /// Sum of the travel distances over all trips of this vehicle.
    pub fn total_distance(&self, problem: &Problem) -> f64 {
        self.trips.iter().map(|trip| trip.length(problem)).sum()
    }
}

/// The fixed-size collection of vehicles plus the terminal unserved list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fleet {
    pub vehicles: Vec<Vehicle>,
    /// Customer ids that could not be served, ascending. Terminal state.
    pub unserved: Vec<usize>,
}

impl Fleet {
    /// Create the fleet for a problem: `vehicle_count` vehicles sharing the
    /// nominal capacity, numbered from 1.
    pub fn for_problem(problem: &Problem) -> Self {
        let vehicles = (1..=problem.vehicle_count)
            .map(|id| Vehicle::new(id, problem.vehicle_capacity))
            .collect();

        Fleet {
            vehicles,
            unserved: Vec::new(),
        }
    }

    /// Iterate over all trips across the fleet.
    pub fn trips(&self) -> impl Iterator<Item = &Trip> {
        self.vehicles.iter().flat_map(|v| v.trips.iter())
    }

    /// Grand total travel distance over every trip of every vehicle.
    pub fn total_distance(&self, problem: &Problem) -> f64 {
        self.vehicles
            .iter()
            .map(|v| v.total_distance(problem))
            .sum()
    }

    /// Number of vehicles that serve at least one customer.
    pub fn vehicles_used(&self) -> usize {
        self.vehicles
            .iter()
            .filter(|v| v.trips.iter().any(|t| !t.is_empty()))
            .count()
    }
}
