//! Tests for the Euclidean distance metric and route length summation.

use nn2opt_cvrp::distance::{distance, route_length};
use nn2opt_cvrp::problem::{Customer, Problem};

fn triangle_problem() -> Problem {
    Problem::new(
        "triangle".to_string(),
        vec![
            Customer::new(1, 0.0, 0.0, 0),
            Customer::new(2, 3.0, 0.0, 1),
            Customer::new(3, 3.0, 4.0, 1),
        ],
        1,
        10,
        1,
    )
}

#[test]
fn test_distance_is_euclidean() {
    let problem = triangle_problem();
    assert!((distance(problem.customer(1), problem.customer(2)) - 3.0).abs() < 1e-12);
    assert!((distance(problem.customer(2), problem.customer(3)) - 4.0).abs() < 1e-12);
    assert!((distance(problem.customer(1), problem.customer(3)) - 5.0).abs() < 1e-12);
}

#[test]
fn test_distance_is_symmetric_and_zero_on_self() {
    let problem = triangle_problem();
    let a = problem.customer(2);
    let b = problem.customer(3);
    assert_eq!(distance(a, b), distance(b, a));
    assert_eq!(distance(a, a), 0.0);
}

#[test]
fn test_route_length_sums_consecutive_pairs() {
    let problem = triangle_problem();
    // 1 -> 2 -> 3 -> 1 walks the full 3-4-5 triangle.
    assert!((route_length(&problem, &[1, 2, 3, 1]) - 12.0).abs() < 1e-12);
    assert!((route_length(&problem, &[1, 2, 1]) - 6.0).abs() < 1e-12);
}

#[test]
fn test_route_length_of_trivial_sequences_is_zero() {
    let problem = triangle_problem();
    assert_eq!(route_length(&problem, &[]), 0.0);
    assert_eq!(route_length(&problem, &[2]), 0.0);
}
