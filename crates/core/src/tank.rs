//! Tank model - the trackable unit overlaid on the site blueprints.

use serde::{Deserialize, Serialize};

use crate::id::TankId;
use crate::phase::{Phase, PhaseRecord};

/// Site level a tank sits on. This is the partition key for the store
/// and the tab set in the original tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Ground level
    N00,
    /// First level
    N10,
    /// Second level
    N20,
    /// Third level
    N30,
}

impl Level {
    /// Every level, in display/partition order.
    pub const ALL: [Level; 4] = [Level::N00, Level::N10, Level::N20, Level::N30];

    /// The level label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::N00 => "N00",
            Level::N10 => "N10",
            Level::N20 => "N20",
            Level::N30 => "N30",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a level label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level: {0}")]
pub struct ParseLevelError(pub String);

impl std::str::FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// What the tank holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TankKind {
    /// Sewage water tank
    #[serde(rename = "SEWAGE WATER")]
    SewageWater,
    /// Rain water tank
    #[serde(rename = "RAIN WATER")]
    RainWater,
    /// Chiller room tank
    #[serde(rename = "CHILLER ROOM")]
    ChillerRoom,
}

impl TankKind {
    /// The label used on markers and in reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            TankKind::SewageWater => "SEWAGE WATER",
            TankKind::RainWater => "RAIN WATER",
            TankKind::ChillerRoom => "CHILLER ROOM",
        }
    }
}

impl std::fmt::Display for TankKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement rectangle on the level blueprint, in pixels.
///
/// Carried through for the presentation layer; nothing in this
/// workspace interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Offset from the blueprint top edge
    pub top: u32,
    /// Offset from the blueprint left edge
    pub left: u32,
    /// Marker width
    pub width: u32,
    /// Marker height
    pub height: u32,
}

/// A trackable water tank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tank {
    /// Unique identifier
    pub id: TankId,

    /// Display name
    pub name: String,

    /// Site level (store partition)
    pub level: Level,

    /// Category tag
    pub kind: TankKind,

    /// Marker placement on the level blueprint
    pub rect: Rect,

    /// The phase the tank is actively working through
    pub current_phase: Phase,

    /// Status of every catalog phase
    pub record: PhaseRecord,
}

impl Tank {
    /// Create a tank at the start of the catalog: first phase
    /// In Progress, everything else Not Started.
    pub fn new(
        id: TankId,
        name: impl Into<String>,
        level: Level,
        kind: TankKind,
        rect: Rect,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            level,
            kind,
            rect,
            current_phase: Phase::CATALOG[0],
            record: PhaseRecord::new(),
        }
    }

    /// Display classification derived from the phase record.
    pub fn state(&self) -> TankState {
        if self.record.all_completed() {
            TankState::Done
        } else if self.current_phase.is_inspection() {
            TankState::Inspecting
        } else {
            TankState::Active
        }
    }
}

/// Display classification for a tank: green, purple or red marker in
/// the original tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TankState {
    /// Every phase is Completed
    Done,
    /// Parked at an inspection hold point
    Inspecting,
    /// Working through a regular phase
    Active,
}

impl TankState {
    /// The label used in the session shell.
    pub const fn as_str(self) -> &'static str {
        match self {
            TankState::Done => "Done",
            TankState::Inspecting => "Inspecting",
            TankState::Active => "Active",
        }
    }
}

impl std::fmt::Display for TankState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::PhaseStatus;

    fn test_tank() -> Tank {
        Tank::new(
            TankId::new("N00-WT-01"),
            "Water Tank 01",
            Level::N00,
            TankKind::SewageWater,
            Rect {
                top: 250,
                left: 300,
                width: 20,
                height: 20,
            },
        )
    }

    #[test]
    fn test_new_tank_is_active_at_first_phase() {
        let tank = test_tank();
        assert_eq!(tank.current_phase, Phase::FormworkRemoval);
        assert_eq!(tank.state(), TankState::Active);
    }

    #[test]
    fn test_tank_at_inspection_phase_is_inspecting() {
        let mut tank = test_tank();
        for phase in Phase::CATALOG.into_iter().take(4) {
            tank.record.set(phase, PhaseStatus::Completed);
        }
        tank.record
            .set(Phase::InspectionStage1, PhaseStatus::InProgress);
        tank.current_phase = Phase::InspectionStage1;
        assert_eq!(tank.state(), TankState::Inspecting);
    }

    #[test]
    fn test_fully_completed_tank_is_done() {
        let mut tank = test_tank();
        for phase in Phase::CATALOG {
            tank.record.set(phase, PhaseStatus::Completed);
        }
        tank.current_phase = Phase::InspectionStage2;
        assert_eq!(tank.state(), TankState::Done);
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!("N10".parse::<Level>(), Ok(Level::N10));
        assert_eq!("n30".parse::<Level>(), Ok(Level::N30));
        assert!("N40".parse::<Level>().is_err());
    }
}
