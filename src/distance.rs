//! Euclidean distance metric and route length summation.

use crate::problem::{Customer, Problem};
use itertools::Itertools;

/// Calculate the Euclidean distance between two customers.
pub fn distance(a: &Customer, b: &Customer) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Sum the distances over consecutive pairs of an ordered stop sequence.
///
/// A sequence of length 0 or 1 has length 0.
pub fn route_length(problem: &Problem, stops: &[usize]) -> f64 {
    stops
        .iter()
        .tuple_windows()
        .map(|(&from, &to)| problem.distance(from, to))
        .sum()
}
