//! Problem definition, customer registry and TSPLIB-style instance parsing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Represents a customer (or the depot) in the CVRP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub demand: u32,
    /// Set exactly once, by route construction or overflow repair.
    pub visited: bool,
}

impl Customer {
    /// Create a new, unvisited customer.
    pub fn new(id: usize, x: f64, y: f64, demand: u32) -> Self {
        Customer {
            id,
            x,
            y,
            demand,
            visited: false,
        }
    }
}

/// Text encoding of an instance file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    /// UTF-16 with BOM detection; little-endian assumed when no BOM is present.
    Utf16,
}

/// Errors raised while reading or parsing an instance file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read instance file: {0}")]
    Io(#[from] std::io::Error),
    #[error("instance file is not valid {0} text")]
    Encoding(&'static str),
    #[error("line {line}: cannot parse `{token}` as a number")]
    InvalidNumber { line: usize, token: String },
    #[error("missing or invalid vehicle count (`COMMENT` line with `No of trucks: N`)")]
    MissingVehicleCount,
    #[error("missing or invalid `CAPACITY` section")]
    MissingCapacity,
    #[error("missing `DEPOT_SECTION`")]
    MissingDepot,
    #[error("depot id {0} has no coordinates in `NODE_COORD_SECTION`")]
    UnknownDepot(usize),
}

/// Which data section of the instance file is currently being read.
enum Section {
    None,
    Coordinates,
    Demands,
    Depot,
}

/// Represents a CVRP problem instance.
///
/// The registry is a `BTreeMap` keyed by customer id, so every scan of the
/// unvisited set iterates in ascending id order. Tie-breaks in the heuristics
/// rely on that ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub customers: BTreeMap<usize, Customer>,
    pub depot_id: usize,
    pub vehicle_capacity: u32,
    pub vehicle_count: usize,
}

impl Problem {
    /// Create a new CVRP problem from an already validated customer list.
    pub fn new(
        name: String,
        customers: Vec<Customer>,
        depot_id: usize,
        vehicle_capacity: u32,
        vehicle_count: usize,
    ) -> Self {
        let customers = customers.into_iter().map(|c| (c.id, c)).collect();

        Problem {
            name,
            customers,
            depot_id,
            vehicle_capacity,
            vehicle_count,
        }
    }

    /// Look up a customer by id. Panics on an id that is not in the registry.
    pub fn customer(&self, id: usize) -> &Customer {
        &self.customers[&id]
    }

    /// Get the number of customers (excluding the depot).
    pub fn customer_count(&self) -> usize {
        self.customers.len().saturating_sub(1)
    }

    /// Get the depot customer.
    pub fn depot(&self) -> &Customer {
        self.customer(self.depot_id)
    }

    /// Calculate the distance between two customer ids.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        crate::distance::distance(self.customer(from), self.customer(to))
    }

    /// Ids of all not-yet-visited customers, ascending, depot excluded.
    pub fn unvisited_ids(&self) -> Vec<usize> {
        self.customers
            .values()
            .filter(|c| !c.visited && c.id != self.depot_id)
            .map(|c| c.id)
            .collect()
    }

    /// Mark a customer as visited.
    pub fn mark_visited(&mut self, id: usize) {
        if let Some(customer) = self.customers.get_mut(&id) {
            customer.visited = true;
        }
    }

    /// Load a problem from a TSPLIB-style file in the given encoding.
    pub fn from_file<P: AsRef<Path>>(path: P, encoding: Encoding) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let text = decode(&bytes, encoding)?;

        let fallback_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "instance".to_string());

        Self::parse_str(&fallback_name, &text)
    }

    /// Parse a TSPLIB-style instance from text.
    ///
    /// Recognized sections: a `COMMENT` carrying `No of trucks: N`,
    /// `CAPACITY`, `NODE_COORD_SECTION` (lines `id x y`), `DEMAND_SECTION`
    /// (lines `id demand`), `DEPOT_SECTION` (depot id, then a `-1` sentinel)
    /// and a terminating `EOF`. Other header lines (`TYPE`, `DIMENSION`, ...)
    /// are skipped, except `NAME`, which overrides the fallback name.
    pub fn parse_str(fallback_name: &str, text: &str) -> Result<Self, ParseError> {
        let mut name = fallback_name.to_string();
        let mut customers: BTreeMap<usize, Customer> = BTreeMap::new();
        let mut vehicle_count: Option<usize> = None;
        let mut vehicle_capacity: Option<u32> = None;
        let mut depot_id: Option<usize> = None;
        let mut section = Section::None;

        for (line_idx, raw) in text.lines().enumerate() {
            let line_no = line_idx + 1;
            let line = raw.trim();

            if line.is_empty() {
                continue;
            }

            if line.contains("COMMENT") && line.contains("No of trucks") {
                let token = line
                    .split("No of trucks:")
                    .last()
                    .unwrap_or("")
                    .split(',')
                    .next()
                    .unwrap_or("")
                    .trim();
                vehicle_count = Some(parse_number::<usize>(token, line_no)?);
                continue;
            }
            if line.starts_with("NAME") {
                if let Some(value) = line.split(':').nth(1) {
                    name = value.trim().to_string();
                }
                continue;
            }
            if line.starts_with("CAPACITY") {
                let token = line.split(':').last().unwrap_or("").trim();
                vehicle_capacity = Some(parse_number::<u32>(token, line_no)?);
                continue;
            }
            if line.contains("NODE_COORD_SECTION") {
                section = Section::Coordinates;
                continue;
            }
            if line.contains("DEMAND_SECTION") {
                section = Section::Demands;
                continue;
            }
            if line.contains("DEPOT_SECTION") {
                section = Section::Depot;
                continue;
            }
            if line == "EOF" {
                break;
            }

            match section {
                Section::Coordinates => {
                    let parts: Vec<&str> = line.split_whitespace().collect();
                    if parts.len() == 3 {
                        let id = parse_number::<usize>(parts[0], line_no)?;
                        let x = parse_number::<f64>(parts[1], line_no)?;
                        let y = parse_number::<f64>(parts[2], line_no)?;
                        customers.insert(id, Customer::new(id, x, y, 0));
                    }
                }
                Section::Demands => {
                    let parts: Vec<&str> = line.split_whitespace().collect();
                    if parts.len() == 2 {
                        let id = parse_number::<usize>(parts[0], line_no)?;
                        let demand = parse_number::<u32>(parts[1], line_no)?;
                        if let Some(customer) = customers.get_mut(&id) {
                            customer.demand = demand;
                        }
                    }
                }
                Section::Depot => {
                    if line == "-1" {
                        section = Section::None;
                    } else {
                        depot_id = Some(parse_number::<usize>(line, line_no)?);
                    }
                }
                Section::None => {}
            }
        }

        let vehicle_count = vehicle_count
            .filter(|&n| n >= 1)
            .ok_or(ParseError::MissingVehicleCount)?;
        let vehicle_capacity = vehicle_capacity
            .filter(|&c| c >= 1)
            .ok_or(ParseError::MissingCapacity)?;
        let depot_id = depot_id.ok_or(ParseError::MissingDepot)?;
        if !customers.contains_key(&depot_id) {
            return Err(ParseError::UnknownDepot(depot_id));
        }

        Ok(Problem {
            name,
            customers,
            depot_id,
            vehicle_capacity,
            vehicle_count,
        })
    }
}

fn parse_number<T: std::str::FromStr>(token: &str, line: usize) -> Result<T, ParseError> {
    token.parse::<T>().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

/// Decode raw file bytes into text according to the selected encoding.
fn decode(bytes: &[u8], encoding: Encoding) -> Result<String, ParseError> {
    match encoding {
        Encoding::Utf8 => {
            String::from_utf8(bytes.to_vec()).map_err(|_| ParseError::Encoding("UTF-8"))
        }
        Encoding::Utf16 => {
            let (payload, big_endian) = match bytes {
                [0xFF, 0xFE, rest @ ..] => (rest, false),
                [0xFE, 0xFF, rest @ ..] => (rest, true),
                _ => (bytes, false),
            };
            if payload.len() % 2 != 0 {
                return Err(ParseError::Encoding("UTF-16"));
            }
            let units: Vec<u16> = payload
                .chunks_exact(2)
                .map(|pair| {
                    if big_endian {
                        u16::from_be_bytes([pair[0], pair[1]])
                    } else {
                        u16::from_le_bytes([pair[0], pair[1]])
                    }
                })
                .collect();
            String::from_utf16(&units).map_err(|_| ParseError::Encoding("UTF-16"))
        }
    }
}
