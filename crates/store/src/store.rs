//! Tank store partitioned by site level.

use std::collections::HashMap;

use tanktrack_core::{Level, Tank, TankId};
use tracing::warn;

use crate::seed::SeedTank;

/// Sole owner of tank records for a session.
///
/// Records are partitioned by `Level`; listings walk the partitions in
/// `Level::ALL` order and keep seed insertion order within a partition.
/// `commit` is the only mutation entry point after startup.
#[derive(Debug, Default)]
pub struct TankStore {
    partitions: HashMap<Level, Vec<Tank>>,
}

impl TankStore {
    /// Build the store from seed entries. Runs once at startup; tanks
    /// are never created or destroyed afterwards.
    pub fn from_seed(seed: impl IntoIterator<Item = SeedTank>) -> Self {
        let mut store = Self::default();
        for entry in seed {
            let tank = entry.into_tank();
            store.partitions.entry(tank.level).or_default().push(tank);
        }
        store
    }

    /// Look a tank up by id across all partitions.
    pub fn get(&self, id: &TankId) -> Option<&Tank> {
        self.iter().find(|t| &t.id == id)
    }

    /// Every tank, partitions in `Level::ALL` order.
    pub fn all(&self) -> Vec<&Tank> {
        self.iter().collect()
    }

    /// Tanks on one level; empty when the level has none.
    pub fn at_level(&self, level: Level) -> &[Tank] {
        self.partitions
            .get(&level)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of tanks.
    pub fn len(&self) -> usize {
        self.partitions.values().map(Vec::len).sum()
    }

    /// Whether the store holds no tanks at all.
    pub fn is_empty(&self) -> bool {
        self.partitions.values().all(Vec::is_empty)
    }

    /// Commit a replacement record into its level's partition.
    ///
    /// The replacement must be a fully-valid record computed by the
    /// progression engine. Returns false, changing nothing, when no
    /// stored tank matches the id within that partition.
    pub fn commit(&mut self, tank: Tank) -> bool {
        let slot = self
            .partitions
            .get_mut(&tank.level)
            .and_then(|partition| partition.iter_mut().find(|t| t.id == tank.id));
        match slot {
            Some(slot) => {
                *slot = tank;
                true
            }
            None => {
                warn!(id = %tank.id, level = %tank.level, "commit target not found, store unchanged");
                false
            }
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Tank> + '_ {
        Level::ALL
            .into_iter()
            .flat_map(move |level| self.at_level(level).iter())
    }
}
