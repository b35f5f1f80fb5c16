//! # NN-2opt CVRP
//!
//! A heuristic solver for the Capacitated Vehicle Routing Problem: routes
//! are built with a capacity-aware nearest-neighbor heuristic, customers
//! left over by construction are repaired into extra round trips, and every
//! trip is then shortened with a 2-opt best-improvement local search.
//!
//! The pipeline is fully deterministic: unvisited customers are always
//! scanned in ascending id order and all heuristic tie-breaks are fixed.

pub mod config;
pub mod construct;
pub mod distance;
pub mod local_search;
pub mod plot;
pub mod problem;
pub mod repair;
pub mod report;
pub mod solution;
pub mod utils;

use crate::config::Config;
use crate::construct::RouteConstructor;
use crate::local_search::LocalSearch;
use crate::problem::Problem;
use crate::repair::OverflowResolver;
use crate::report::{Phase, PhaseObserver};
use crate::solution::Fleet;

use std::time::{Duration, Instant};

/// Orchestrates the construct -> repair -> optimize pipeline.
pub struct CvrpSolver {
    pub problem: Problem,
    pub config: Config,
    pub fleet: Fleet,
    pub run_time: Duration,
    observers: Vec<Box<dyn PhaseObserver>>,
}

impl CvrpSolver {
    /// Create a new solver for the given problem and configuration.
    pub fn new(problem: Problem, config: Config) -> Self {
        let fleet = Fleet::for_problem(&problem);

        CvrpSolver {
            problem,
            config,
            fleet,
            run_time: Duration::from_secs(0),
            observers: Vec::new(),
        }
    }

    /// Register an observer; observers are notified after each phase in
    /// registration order.
    pub fn add_observer(&mut self, observer: Box<dyn PhaseObserver>) {
        self.observers.push(observer);
    }

    /// Run the full pipeline and return the final fleet.
    ///
    /// The run always completes: infeasible customers end up on the fleet's
    /// unserved list rather than aborting the computation.
    pub fn run(&mut self) -> &Fleet {
        let start = Instant::now();

        log::info!(
            "solving {}: {} customers, {} vehicles, capacity {}",
            self.problem.name,
            self.problem.customer_count(),
            self.problem.vehicle_count,
            self.problem.vehicle_capacity
        );

        RouteConstructor::construct(&mut self.problem, &mut self.fleet);
        self.notify(Phase::Construction);

        if self.config.single_trip_only {
            self.fleet.unserved = self.problem.unvisited_ids();
        } else {
            OverflowResolver::resolve(&mut self.problem, &mut self.fleet);
        }
        self.notify(Phase::Repair);

        LocalSearch::optimize(&self.problem, &mut self.fleet);
        self.notify(Phase::Optimization);

        self.run_time = start.elapsed();
        &self.fleet
    }

    fn notify(&mut self, phase: Phase) {
        for observer in &mut self.observers {
            observer.phase_complete(phase, &self.problem, &self.fleet);
        }
    }
}
