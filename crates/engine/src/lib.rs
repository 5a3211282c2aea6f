//! Phase progression engine for tanktrack.
//!
//! Phases complete strictly in catalog order: completing the current
//! phase cascades the next one to In Progress, and undoing a completed
//! phase rolls every later phase back to Not Started. The forward step
//! is cheap; the rollback is destructive, so it runs as a two-phase
//! request/confirm protocol.

#![warn(missing_docs)]

mod command;
mod engine;

pub use command::{Command, PendingUndo};
pub use engine::{
    cancel_undo, complete, confirm_undo, dispatch, request_undo, EngineError, Outcome, Result,
};
