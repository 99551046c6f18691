use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single piece type: a required length and how many are needed.
///
/// The index of a `Demand` within [`ProblemInstance::demands`] is its canonical
/// identifier for the duration of a solve (spec §3) — two demands with the same
/// `length` are still distinct types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demand {
    pub length: u32,
    pub quantity: u32,
}

/// Immutable inputs to a single `solve` call (spec §3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemInstance {
    pub master_length: u32,
    pub demands: Vec<Demand>,
}

impl ProblemInstance {
    pub fn new(master_length: u32, demands: Vec<Demand>) -> Self {
        ProblemInstance {
            master_length,
            demands,
        }
    }

    /// Checks the preconditions from spec §6 before any solve is attempted.
    pub fn validate(&self) -> Result<()> {
        if self.demands.is_empty() {
            return Err(Error::InvalidInput("demands must be non-empty".into()));
        }
        if self.master_length == 0 {
            return Err(Error::InvalidInput(
                "master_length must be a positive integer".into(),
            ));
        }
        for (i, d) in self.demands.iter().enumerate() {
            if d.length == 0 {
                return Err(Error::InvalidInput(format!(
                    "demand {i} has non-positive length"
                )));
            }
            if d.quantity < 1 {
                return Err(Error::InvalidInput(format!(
                    "demand {i} has quantity below 1"
                )));
            }
            if d.length > self.master_length {
                return Err(Error::InvalidInput(format!(
                    "demand {i} length {} exceeds master length {}",
                    d.length, self.master_length
                )));
            }
        }
        Ok(())
    }

    pub fn lengths(&self) -> Vec<u32> {
        self.demands.iter().map(|d| d.length).collect()
    }

    pub fn quantities(&self) -> Vec<u32> {
        self.demands.iter().map(|d| d.quantity).collect()
    }

    pub fn num_types(&self) -> usize {
        self.demands.len()
    }
}
