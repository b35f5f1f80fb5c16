//! Route plotting via the `plotters` bitmap backend.

use crate::problem::Problem;
use crate::report::{Phase, PhaseObserver};
use crate::solution::Fleet;
use plotters::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

const VEHICLE_COLORS: [RGBColor; 7] = [BLUE, GREEN, RED, CYAN, MAGENTA, YELLOW, BLACK];

/// Render every trip of every vehicle as a colored polyline, with the depot
/// marked distinctly and each customer labeled by id.
pub fn plot_fleet(
    problem: &Problem,
    fleet: &Fleet,
    title: &str,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for customer in problem.customers.values() {
        min_x = min_x.min(customer.x);
        max_x = max_x.max(customer.x);
        min_y = min_y.min(customer.y);
        max_y = max_y.max(customer.y);
    }
    let margin = ((max_x - min_x).max(max_y - min_y) * 0.05).max(1.0);
    min_x -= margin;
    max_x += margin;
    min_y -= margin;
    max_y += margin;

    let root = BitMapBackend::new(path, (1000, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)?;
    chart.configure_mesh().draw()?;

    for vehicle in &fleet.vehicles {
        let color = VEHICLE_COLORS[vehicle.id % VEHICLE_COLORS.len()];
        for trip in &vehicle.trips {
            let points: Vec<(f64, f64)> = trip
                .stops
                .iter()
                .map(|&id| {
                    let c = problem.customer(id);
                    (c.x, c.y)
                })
                .collect();
            chart.draw_series(LineSeries::new(points, color.stroke_width(2)))?;
        }
    }

    for customer in problem.customers.values() {
        if customer.id == problem.depot_id {
            continue;
        }
        chart.draw_series(std::iter::once(Circle::new(
            (customer.x, customer.y),
            3,
            ShapeStyle::from(&RGBColor(96, 96, 96)).filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            customer.id.to_string(),
            (customer.x, customer.y),
            ("sans-serif", 12),
        )))?;
    }

    let depot = problem.depot();
    chart.draw_series(std::iter::once(Circle::new(
        (depot.x, depot.y),
        6,
        ShapeStyle::from(&BLACK).filled(),
    )))?;

    root.present()?;
    Ok(())
}

/// Writes a route plot before and after the 2-opt phase.
pub struct PlotObserver {
    dir: PathBuf,
}

impl PlotObserver {
    /// Plots are written into `dir`, which must already exist.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        PlotObserver { dir: dir.into() }
    }
}

impl PhaseObserver for PlotObserver {
    fn phase_complete(&mut self, phase: Phase, problem: &Problem, fleet: &Fleet) {
        let (file_name, title) = match phase {
            Phase::Construction => return,
            Phase::Repair => (
                "routes_before_2opt.png",
                format!("{}: before 2-opt optimization", problem.name),
            ),
            Phase::Optimization => (
                "routes_after_2opt.png",
                format!("{}: after 2-opt optimization", problem.name),
            ),
        };

        let path = self.dir.join(file_name);
        match plot_fleet(problem, fleet, &title, &path) {
            Ok(()) => log::info!("wrote route plot to {}", path.display()),
            Err(err) => log::error!("failed to write route plot {}: {}", path.display(), err),
        }
    }
}
