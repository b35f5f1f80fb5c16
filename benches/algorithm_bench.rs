//! Benchmarks for the construct/repair/optimize pipeline.

#[cfg(feature = "bench")]
extern crate criterion;

#[cfg(feature = "bench")]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
#[cfg(feature = "bench")]
use nn2opt_cvrp::config::Config;
#[cfg(feature = "bench")]
use nn2opt_cvrp::construct::RouteConstructor;
#[cfg(feature = "bench")]
use nn2opt_cvrp::local_search::LocalSearch;
#[cfg(feature = "bench")]
use nn2opt_cvrp::repair::OverflowResolver;
#[cfg(feature = "bench")]
use nn2opt_cvrp::solution::Fleet;
#[cfg(feature = "bench")]
use nn2opt_cvrp::utils::generate_problem;
#[cfg(feature = "bench")]
use nn2opt_cvrp::CvrpSolver;

#[cfg(feature = "bench")]
fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [50, 100, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = generate_problem(size, 30, size / 10, 42);

            b.iter(|| {
                let mut problem = problem.clone();
                let mut fleet = Fleet::for_problem(&problem);
                RouteConstructor::construct(&mut problem, &mut fleet);
                fleet
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search");

    for size in [50, 100, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut problem = generate_problem(size, 30, size / 10, 42);
            let mut fleet = Fleet::for_problem(&problem);
            RouteConstructor::construct(&mut problem, &mut fleet);
            OverflowResolver::resolve(&mut problem, &mut fleet);

            b.iter(|| {
                let mut fleet = fleet.clone();
                LocalSearch::optimize(&problem, &mut fleet);
                fleet
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_full_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_solve");

    for size in [50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = generate_problem(size, 30, size / 10, 42);

            b.iter(|| {
                let mut solver = CvrpSolver::new(problem.clone(), Config::default());
                solver.run();
                solver.fleet.total_distance(&solver.problem)
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(
    benches,
    benchmark_construction,
    benchmark_local_search,
    benchmark_full_solve
);

#[cfg(feature = "bench")]
criterion_main!(benches);
