use thiserror::Error;

/// Errors surfaced by the cutting-stock core.
///
/// Hitting the iteration cap or detecting a stalled column generation loop is
/// *not* an error (spec §7.4) — both produce a normal [`crate::model::result::SolveResult`]
/// with a `convergence` marker instead.
#[derive(Error, Debug)]
pub enum Error {
    /// A precondition from spec §6 was violated before any solve was attempted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The LP/IP backend returned a non-optimal, non-infeasible status, or an
    /// infeasibility that should not be reachable given the seeded pool (spec §7.2/§7.3).
    #[error("solver backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, Error>;
