//! Time marching schemes for the 1D heat equation.
//!
//! Every scheme advances a pair of field buffers by one step:
//! `previous` receives the pre-step `current`, and `current` receives
//! the new level with both ends pinned to the surface temperature.
//! Three-level schemes read level `n - 1` from `previous` and bootstrap
//! their first step with a single FTCS update.

mod crank_nicolson;
mod dufort_frankel;
mod laasonen;
mod richardson;

pub use crank_nicolson::*;
pub use dufort_frankel::*;
pub use laasonen::*;
pub use richardson::*;

use crate::error::*;
use crate::problem::*;

/// All schemes should implement this interface
pub trait TimeScheme {
    fn kind(&self) -> SchemeKind;

    fn step(
        &mut self,
        current: &mut [f64],
        previous: &mut [f64],
        t: f64,
        dt: f64,
    ) -> Result<()>;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum,
)]
pub enum SchemeKind {
    Richardson,
    #[value(name = "dufort-frankel")]
    DuFortFrankel,
    Laasonen,
    CrankNicolson,
}

impl SchemeKind {
    /// Run order used when no selection is given.
    pub const ALL: [SchemeKind; 4] = [
        SchemeKind::Richardson,
        SchemeKind::DuFortFrankel,
        SchemeKind::Laasonen,
        SchemeKind::CrankNicolson,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SchemeKind::Richardson => "Richardson",
            SchemeKind::DuFortFrankel => "DuFortFrankel",
            SchemeKind::Laasonen => "Laasonen",
            SchemeKind::CrankNicolson => "CrankNicolson",
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, SchemeKind::Richardson | SchemeKind::DuFortFrankel)
    }

    pub fn build<'a>(
        &self,
        problem: &'a HeatProblem<'a>,
    ) -> Box<dyn TimeScheme + 'a> {
        match self {
            SchemeKind::Richardson => Box::new(RichardsonScheme::new(problem)),
            SchemeKind::DuFortFrankel => {
                Box::new(DuFortFrankelScheme::new(problem))
            }
            SchemeKind::Laasonen => Box::new(LaasonenScheme::new(problem)),
            SchemeKind::CrankNicolson => {
                Box::new(CrankNicolsonScheme::new(problem))
            }
        }
    }
}

impl std::fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Forward-time central-space update of the interior nodes.
/// Requires at least 3 nodes.
pub fn ftcs_interior(current: &[f64], next: &mut [f64], r: f64) {
    debug_assert_eq!(current.len(), next.len());
    debug_assert!(current.len() >= 3);
    for i in 1..current.len() - 1 {
        next[i] = r * current[i - 1]
            + (1.0 - 2.0 * r) * current[i]
            + r * current[i + 1];
    }
}

/// Shared entry checks for schemes that need an interior.
fn check_step_inputs(
    problem: &HeatProblem,
    current: &[f64],
    previous: &[f64],
) -> Result<usize> {
    let n = problem.grid().size();
    if n < 3 {
        return Err(Error::GridTooSmall { size: n });
    }
    problem.check_field("current field", current)?;
    problem.check_field("previous field", previous)?;
    Ok(n)
}

/// prev <- curr, curr <- next
fn rotate(current: &mut [f64], previous: &mut [f64], next: &[f64]) {
    previous.copy_from_slice(current);
    current.copy_from_slice(next);
}
