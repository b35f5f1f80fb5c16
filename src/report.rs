//! Phase observers and solution reporting.

use crate::problem::Problem;
use crate::solution::Fleet;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The pipeline phase that has just completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Construction,
    Repair,
    Optimization,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Construction => write!(f, "construction"),
            Phase::Repair => write!(f, "repair"),
            Phase::Optimization => write!(f, "optimization"),
        }
    }
}

/// Receives a fleet snapshot after each completed phase.
///
/// Keeps presentation out of the algorithm modules: the solver invokes every
/// registered observer once per phase, in registration order.
pub trait PhaseObserver {
    fn phase_complete(&mut self, phase: Phase, problem: &Problem, fleet: &Fleet);
}

/// Logs per-trip routes, distances and fleet totals after each phase.
pub struct ConsoleReporter;

impl PhaseObserver for ConsoleReporter {
    fn phase_complete(&mut self, phase: Phase, problem: &Problem, fleet: &Fleet) {
        log::info!("routes after {}:", phase);

        for vehicle in &fleet.vehicles {
            for (trip_no, trip) in vehicle.trips.iter().enumerate() {
                let route: Vec<String> = trip.stops.iter().map(|id| id.to_string()).collect();
                log::info!(
                    "vehicle {} trip {}: {} stops, {:.2} units, route {}",
                    vehicle.id,
                    trip_no + 1,
                    trip.stop_count(),
                    trip.length(problem),
                    route.join(" -> ")
                );
            }
        }

        log::info!(
            "total distance: {:.2} units, vehicles used: {}/{}",
            fleet.total_distance(problem),
            fleet.vehicles_used(),
            fleet.vehicles.len()
        );

        if fleet.unserved.is_empty() {
            if phase != Phase::Construction {
                log::info!("all customers served");
            }
        } else {
            log::warn!("unserved customers: {:?}", fleet.unserved);
        }
    }
}

/// Save the final fleet to a plain-text file.
pub fn save_solution<P: AsRef<Path>>(
    fleet: &Fleet,
    problem: &Problem,
    path: P,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "CVRP solution for instance: {}", problem.name)?;
    writeln!(file, "Total distance: {:.2}", fleet.total_distance(problem))?;
    writeln!(
        file,
        "Vehicles used: {}/{}",
        fleet.vehicles_used(),
        fleet.vehicles.len()
    )?;
    writeln!(file)?;

    for vehicle in &fleet.vehicles {
        writeln!(file, "Vehicle {}:", vehicle.id)?;

        for (trip_no, trip) in vehicle.trips.iter().enumerate() {
            let route: Vec<String> = trip.stops.iter().map(|id| id.to_string()).collect();
            writeln!(file, "  Trip {}: {}", trip_no + 1, route.join(" -> "))?;
            writeln!(file, "    Stops: {} customers", trip.stop_count())?;
            writeln!(
                file,
                "    Load: {} / {}",
                trip.load(problem),
                vehicle.capacity
            )?;
            writeln!(file, "    Distance: {:.2} units", trip.length(problem))?;
        }
    }

    writeln!(file)?;
    if fleet.unserved.is_empty() {
        writeln!(file, "All customers served.")?;
    } else {
        writeln!(file, "Unserved customers: {:?}", fleet.unserved)?;
    }

    Ok(())
}

/// Save the final fleet as JSON.
pub fn save_solution_json<P: AsRef<Path>>(fleet: &Fleet, path: P) -> std::io::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, fleet)?;
    Ok(())
}
