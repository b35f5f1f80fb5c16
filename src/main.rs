//! Command-line entry point: load an instance, run the pipeline, report.

use clap::{Parser, ValueEnum};
use nn2opt_cvrp::config::Config;
use nn2opt_cvrp::plot::PlotObserver;
use nn2opt_cvrp::problem::{Encoding, Problem};
use nn2opt_cvrp::report::{save_solution, save_solution_json, ConsoleReporter};
use nn2opt_cvrp::utils::format_duration;
use nn2opt_cvrp::CvrpSolver;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EncodingArg {
    Utf8,
    Utf16,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Utf8 => Encoding::Utf8,
            EncodingArg::Utf16 => Encoding::Utf16,
        }
    }
}

/// Nearest-neighbor construction with 2-opt local search for the CVRP.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the TSPLIB-style instance file
    instance: PathBuf,

    /// Text encoding of the instance file
    #[arg(long, value_enum, default_value_t = EncodingArg::Utf8)]
    encoding: EncodingArg,

    /// Restrict each vehicle to a single trip and skip overflow repair
    #[arg(long)]
    single_trip: bool,

    /// Write before/after route plots into this directory
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    /// Write the final solution to this text file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the final solution to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let problem = Problem::from_file(&args.instance, args.encoding.into())?;
    println!(
        "Loaded instance {}: {} customers, {} vehicles, capacity {}",
        problem.name,
        problem.customer_count(),
        problem.vehicle_count,
        problem.vehicle_capacity
    );

    let config = Config::new().with_single_trip_only(args.single_trip);
    let mut solver = CvrpSolver::new(problem, config);
    solver.add_observer(Box::new(ConsoleReporter));

    if let Some(dir) = &args.plot_dir {
        fs::create_dir_all(dir)?;
        solver.add_observer(Box::new(PlotObserver::new(dir.clone())));
    }

    solver.run();

    println!("Search completed in {}", format_duration(solver.run_time));
    println!(
        "Total distance: {:.2} units",
        solver.fleet.total_distance(&solver.problem)
    );
    println!(
        "Vehicles used: {}/{}",
        solver.fleet.vehicles_used(),
        solver.fleet.vehicles.len()
    );
    if solver.fleet.unserved.is_empty() {
        println!("All customers served.");
    } else {
        println!("Unserved customers: {:?}", solver.fleet.unserved);
    }

    if let Some(path) = &args.output {
        save_solution(&solver.fleet, &solver.problem, path)?;
        println!("Saved solution to {}", path.display());
    }
    if let Some(path) = &args.json {
        save_solution_json(&solver.fleet, path)?;
        println!("Saved JSON solution to {}", path.display());
    }

    Ok(())
}
