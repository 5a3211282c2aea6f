//! tanktrack core data models.
//!
//! This crate defines the phase catalog and the tank entity that the
//! rest of the workspace operates on.

#![warn(missing_docs)]

mod id;
mod phase;
mod tank;

pub use id::TankId;
pub use phase::{ParsePhaseError, Phase, PhaseRecord, PhaseStatus};
pub use tank::{Level, ParseLevelError, Rect, Tank, TankKind, TankState};
