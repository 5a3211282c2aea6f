//! Derived views over the tank store.

use tanktrack_core::{Tank, TankState};

use crate::store::TankStore;

/// Tank tally per display state, for the session status line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateCounts {
    /// Tanks with every phase Completed
    pub done: usize,
    /// Tanks parked at an inspection hold point
    pub inspecting: usize,
    /// Tanks working through a regular phase
    pub active: usize,
}

impl TankStore {
    /// Tanks currently parked at an inspection phase, in listing order.
    pub fn awaiting_inspection(&self) -> Vec<&Tank> {
        self.iter()
            .filter(|t| t.state() == TankState::Inspecting)
            .collect()
    }

    /// Tally every tank by display state.
    pub fn state_counts(&self) -> StateCounts {
        let mut counts = StateCounts::default();
        for tank in self.iter() {
            match tank.state() {
                TankState::Done => counts.done += 1,
                TankState::Inspecting => counts.inspecting += 1,
                TankState::Active => counts.active += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::default_site;
    use tanktrack_core::{Phase, PhaseStatus, TankId};

    fn park_at(store: &mut TankStore, id: &str, phase: Phase) {
        let mut tank = store.get(&TankId::new(id)).unwrap().clone();
        for earlier in Phase::CATALOG.into_iter().take(phase.index()) {
            tank.record.set(earlier, PhaseStatus::Completed);
        }
        tank.record.set(phase, PhaseStatus::InProgress);
        tank.current_phase = phase;
        assert!(store.commit(tank));
    }

    #[test]
    fn test_fresh_site_has_no_inspections() {
        let store = TankStore::from_seed(default_site());
        assert!(store.awaiting_inspection().is_empty());
        assert_eq!(store.state_counts().active, 8);
    }

    #[test]
    fn test_awaiting_inspection_tracks_current_phase() {
        let mut store = TankStore::from_seed(default_site());
        park_at(&mut store, "N00-WT-02", Phase::InspectionStage1);
        park_at(&mut store, "N20-WT-01", Phase::InspectionStage2);

        let waiting: Vec<&str> = store
            .awaiting_inspection()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(waiting, vec!["N00-WT-02", "N20-WT-01"]);

        // Moving past the inspection drops the tank from the view.
        park_at(&mut store, "N00-WT-02", Phase::Waterproofing);
        let waiting: Vec<&str> = store
            .awaiting_inspection()
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(waiting, vec!["N20-WT-01"]);
    }

    #[test]
    fn test_state_counts_cover_every_state() {
        let mut store = TankStore::from_seed(default_site());
        park_at(&mut store, "N10-WT-01", Phase::InspectionStage1);

        let mut done = store.get(&TankId::new("N30-WT-01")).unwrap().clone();
        for phase in Phase::CATALOG {
            done.record.set(phase, PhaseStatus::Completed);
        }
        done.current_phase = Phase::InspectionStage2;
        assert!(store.commit(done));

        let counts = store.state_counts();
        assert_eq!(counts.done, 1);
        assert_eq!(counts.inspecting, 1);
        assert_eq!(counts.active, 6);
    }
}
