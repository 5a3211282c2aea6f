//! In-memory tank store and seed data for tanktrack.
//!
//! The store is the sole owner of tank records for a session. It is
//! process-local and session-scoped; there is no persistence layer.

#![warn(missing_docs)]

mod query;
mod seed;
mod store;

pub use query::StateCounts;
pub use seed::{default_site, load_seed, SeedError, SeedTank};
pub use store::TankStore;
