//! Progression transitions: complete and the two-phase undo.
//!
//! Transitions are computed on a copy of the stored record and then
//! committed back by id; on every error path the store is untouched.

use tanktrack_core::{Phase, PhaseStatus, Tank, TankId};
use tanktrack_store::TankStore;
use tracing::info;

use crate::command::{Command, PendingUndo};

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors from the progression engine. Every variant is a rejection
/// with no state change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// No stored tank matches the id.
    #[error("unknown tank: {0}")]
    UnknownTank(TankId),

    /// Complete was asked for a phase that has not been reached yet.
    /// Phases complete strictly in catalog order, so only the current
    /// (In Progress) phase can be completed.
    #[error("phase \"{phase}\" on {id} has not started; complete \"{current}\" first")]
    PhaseNotCurrent {
        /// Target tank
        id: TankId,
        /// Rejected phase
        phase: Phase,
        /// The phase that is actually in progress
        current: Phase,
    },

    /// Undo was asked for a phase that is not Completed.
    #[error("phase \"{phase}\" on {id} is not completed")]
    PhaseNotCompleted {
        /// Target tank
        id: TankId,
        /// Rejected phase
        phase: Phase,
    },
}

/// Outcome of a complete command (or a dispatched [`Command`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The transition was applied and the record committed.
    Applied(Tank),
    /// The command was destructive; nothing was applied, and the token
    /// must be confirmed before anything changes.
    NeedsConfirmation(PendingUndo),
}

/// Mark `phase` complete on a tank.
///
/// Completing the current phase sets it Completed and cascades the next
/// catalog phase to In Progress (the last phase is terminal: the tank
/// stays on it, fully completed). Completing an already-completed phase
/// applies nothing and returns a [`PendingUndo`] instead — clicking a
/// completed marker is, by routing rule, a request to undo it.
pub fn complete(store: &mut TankStore, id: &TankId, phase: Phase) -> Result<Outcome> {
    let tank = store
        .get(id)
        .ok_or_else(|| EngineError::UnknownTank(id.clone()))?;

    match tank.record.status(phase) {
        PhaseStatus::Completed => Ok(Outcome::NeedsConfirmation(PendingUndo {
            id: id.clone(),
            phase,
        })),
        PhaseStatus::NotStarted => Err(EngineError::PhaseNotCurrent {
            id: id.clone(),
            phase,
            current: tank.current_phase,
        }),
        PhaseStatus::InProgress => {
            let updated = apply_complete(tank, phase);
            info!(id = %updated.id, phase = %phase, current = %updated.current_phase, "phase completed");
            store.commit(updated.clone());
            Ok(Outcome::Applied(updated))
        }
    }
}

/// First half of the undo protocol: validate the request and hand back
/// a confirmation token. No state changes.
pub fn request_undo(store: &TankStore, id: &TankId, phase: Phase) -> Result<PendingUndo> {
    let tank = store
        .get(id)
        .ok_or_else(|| EngineError::UnknownTank(id.clone()))?;

    if tank.record.status(phase) != PhaseStatus::Completed {
        return Err(EngineError::PhaseNotCompleted {
            id: id.clone(),
            phase,
        });
    }
    Ok(PendingUndo {
        id: id.clone(),
        phase,
    })
}

/// Second half of the undo protocol: apply the rollback the token
/// describes and commit it.
///
/// The undone phase becomes In Progress and current; every later phase
/// resets to Not Started; earlier phases stay Completed. The token's
/// precondition is re-checked against the store at apply time.
pub fn confirm_undo(store: &mut TankStore, pending: PendingUndo) -> Result<Tank> {
    let PendingUndo { id, phase } = pending;
    let tank = store
        .get(&id)
        .ok_or_else(|| EngineError::UnknownTank(id.clone()))?;

    if tank.record.status(phase) != PhaseStatus::Completed {
        return Err(EngineError::PhaseNotCompleted { id, phase });
    }

    let updated = apply_undo(tank, phase);
    info!(id = %updated.id, phase = %phase, "phase undone, later phases reset");
    store.commit(updated.clone());
    Ok(updated)
}

/// Abandon a pending undo. No state changes.
pub fn cancel_undo(pending: PendingUndo) {
    info!(id = %pending.id, phase = %pending.phase, "undo cancelled");
}

/// Apply a [`Command`] against the store.
///
/// `Complete` may apply directly or come back as a confirmation
/// request; `Undo` always comes back as one.
pub fn dispatch(store: &mut TankStore, command: &Command) -> Result<Outcome> {
    match command {
        Command::Complete { id, phase } => complete(store, id, *phase),
        Command::Undo { id, phase } => {
            request_undo(store, id, *phase).map(Outcome::NeedsConfirmation)
        }
    }
}

fn apply_complete(tank: &Tank, phase: Phase) -> Tank {
    let mut next = tank.clone();
    next.record.set(phase, PhaseStatus::Completed);
    if let Some(successor) = phase.next() {
        next.record.set(successor, PhaseStatus::InProgress);
        next.current_phase = successor;
    }
    next
}

fn apply_undo(tank: &Tank, phase: Phase) -> Tank {
    let mut next = tank.clone();
    next.record.set(phase, PhaseStatus::InProgress);
    for later in Phase::CATALOG.into_iter().skip(phase.index() + 1) {
        next.record.set(later, PhaseStatus::NotStarted);
    }
    next.current_phase = phase;
    next
}
