//! Command objects driving the progression engine.

use tanktrack_core::{Phase, TankId};

/// A user command against one tank, applied through [`crate::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mark a phase complete. On an already-completed phase this routes
    /// to an undo request instead; see [`crate::complete`].
    Complete {
        /// Target tank
        id: TankId,
        /// Phase to complete
        phase: Phase,
    },
    /// Request the destructive undo of a completed phase.
    Undo {
        /// Target tank
        id: TankId,
        /// Phase whose completion should be undone
        phase: Phase,
    },
}

/// Pending-confirmation token for a destructive undo.
///
/// Produced by [`crate::request_undo`], or by [`crate::complete`] when
/// the target phase is already Completed. Nothing changes until
/// [`crate::confirm_undo`] consumes the token; dropping it, or passing
/// it to [`crate::cancel_undo`], abandons the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUndo {
    pub(crate) id: TankId,
    pub(crate) phase: Phase,
}

impl PendingUndo {
    /// The target tank.
    pub fn tank_id(&self) -> &TankId {
        &self.id
    }

    /// The phase whose completion would be undone.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Confirmation prompt spelling out the consequence.
    pub fn describe(&self) -> String {
        format!(
            "Undo completion of \"{}\" on {}? Every later phase will reset to Not Started.",
            self.phase, self.id
        )
    }
}
