//! Unit tests for the 2-opt best-improvement local search.

use nn2opt_cvrp::construct::RouteConstructor;
use nn2opt_cvrp::local_search::LocalSearch;
use nn2opt_cvrp::problem::{Customer, Problem};
use nn2opt_cvrp::repair::OverflowResolver;
use nn2opt_cvrp::solution::{Fleet, Trip};
use nn2opt_cvrp::utils;

/// Unit square: depot 1 at the origin, customers 2, 3, 4 on the corners.
/// Visiting them in the order 2, 4, 3 crosses the route.
fn square_problem() -> Problem {
    Problem::new(
        "square".to_string(),
        vec![
            Customer::new(1, 0.0, 0.0, 0),
            Customer::new(2, 1.0, 0.0, 1),
            Customer::new(3, 1.0, 1.0, 1),
            Customer::new(4, 0.0, 1.0, 1),
        ],
        1,
        10,
        1,
    )
}

#[test]
fn test_two_opt_uncrosses_route() {
    let problem = square_problem();
    let mut trip = Trip {
        stops: vec![1, 2, 4, 3, 1],
    };
    let before = trip.length(&problem);

    LocalSearch::two_opt(&problem, &mut trip);

    assert_eq!(trip.stops, vec![1, 2, 3, 4, 1]);
    assert!(trip.length(&problem) < before);
    assert!((trip.length(&problem) - 4.0).abs() < 1e-9);
}

#[test]
fn test_two_opt_never_lengthens_a_trip() {
    let mut problem = utils::generate_problem(25, 15, 3, 11);
    let mut fleet = Fleet::for_problem(&problem);
    RouteConstructor::construct(&mut problem, &mut fleet);
    OverflowResolver::resolve(&mut problem, &mut fleet);

    let before: Vec<f64> = fleet.trips().map(|t| t.length(&problem)).collect();

    LocalSearch::optimize(&problem, &mut fleet);

    let after: Vec<f64> = fleet.trips().map(|t| t.length(&problem)).collect();
    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after.iter()) {
        assert!(a <= &(b + 1e-9));
    }
}

#[test]
fn test_two_opt_is_idempotent() {
    let mut problem = utils::generate_problem(20, 25, 2, 3);
    let mut fleet = Fleet::for_problem(&problem);
    RouteConstructor::construct(&mut problem, &mut fleet);
    OverflowResolver::resolve(&mut problem, &mut fleet);
    LocalSearch::optimize(&problem, &mut fleet);

    let once: Vec<Vec<usize>> = fleet.trips().map(|t| t.stops.clone()).collect();

    LocalSearch::optimize(&problem, &mut fleet);

    let twice: Vec<Vec<usize>> = fleet.trips().map(|t| t.stops.clone()).collect();
    assert_eq!(once, twice);
}

#[test]
fn test_output_is_a_local_optimum() {
    let mut problem = utils::generate_problem(15, 40, 1, 5);
    let mut fleet = Fleet::for_problem(&problem);
    RouteConstructor::construct(&mut problem, &mut fleet);
    OverflowResolver::resolve(&mut problem, &mut fleet);
    LocalSearch::optimize(&problem, &mut fleet);

    for trip in fleet.trips() {
        let length = trip.length(&problem);
        let n = trip.stops.len();
        if n < 4 {
            continue;
        }
        // No reversal of an interior segment may be strictly shorter.
        for i in 1..n - 2 {
            for j in i + 1..n - 1 {
                let mut candidate = trip.clone();
                candidate.stops[i..=j].reverse();
                assert!(candidate.length(&problem) + 1e-9 >= length);
            }
        }
    }
}

#[test]
fn test_reversal_round_trip_identity() {
    let problem = square_problem();
    let original = Trip {
        stops: vec![1, 2, 4, 3, 1],
    };
    let original_length = original.length(&problem);

    let mut trip = original.clone();
    trip.stops[1..=2].reverse();
    trip.stops[1..=2].reverse();

    assert_eq!(trip, original);
    assert!((trip.length(&problem) - original_length).abs() < 1e-12);
}

#[test]
fn test_two_opt_preserves_endpoints_and_stop_multiset() {
    let mut problem = utils::generate_problem(18, 50, 1, 9);
    let mut fleet = Fleet::for_problem(&problem);
    RouteConstructor::construct(&mut problem, &mut fleet);

    let before: Vec<Vec<usize>> = fleet.trips().map(|t| t.stops.clone()).collect();
    LocalSearch::optimize(&problem, &mut fleet);

    for (old, trip) in before.iter().zip(fleet.trips()) {
        assert_eq!(*trip.stops.first().unwrap(), problem.depot_id);
        assert_eq!(*trip.stops.last().unwrap(), problem.depot_id);

        let mut old_sorted = old.clone();
        let mut new_sorted = trip.stops.clone();
        old_sorted.sort_unstable();
        new_sorted.sort_unstable();
        assert_eq!(old_sorted, new_sorted);
    }
}

#[test]
fn test_short_trips_are_left_untouched() {
    let problem = square_problem();

    let mut degenerate = Trip { stops: vec![1, 1] };
    LocalSearch::two_opt(&problem, &mut degenerate);
    assert_eq!(degenerate.stops, vec![1, 1]);

    let mut single = Trip {
        stops: vec![1, 3, 1],
    };
    LocalSearch::two_opt(&problem, &mut single);
    assert_eq!(single.stops, vec![1, 3, 1]);

    // Two customers: the only reversal mirrors the trip, same length.
    let mut pair = Trip {
        stops: vec![1, 2, 3, 1],
    };
    LocalSearch::two_opt(&problem, &mut pair);
    assert_eq!(pair.stops, vec![1, 2, 3, 1]);
}
