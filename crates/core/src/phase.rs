//! Phase catalog - the fixed, ordered construction sequence.

use serde::{Deserialize, Serialize};

/// One step in the fixed construction sequence.
///
/// Variant order is catalog order; every progression rule leans on it.
/// The catalog is constant for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Strip the formwork after the concrete pour
    #[serde(rename = "Formwork Removal")]
    FormworkRemoval,
    /// Repair surface defects and clean the tank interior
    #[serde(rename = "Repair and Cleaning")]
    RepairAndCleaning,
    /// Set the pump anchor bolts
    #[serde(rename = "Pump Anchors")]
    PumpAnchors,
    /// Screed the floor slope towards the drain
    #[serde(rename = "Slope")]
    Slope,
    /// First inspection hold point
    #[serde(rename = "Inspection Stage 1")]
    InspectionStage1,
    /// Apply the waterproofing membrane
    #[serde(rename = "Waterproofing")]
    Waterproofing,
    /// Final inspection hold point
    #[serde(rename = "Inspection Stage 2")]
    InspectionStage2,
}

impl Phase {
    /// Every phase, in catalog order.
    pub const CATALOG: [Phase; 7] = [
        Phase::FormworkRemoval,
        Phase::RepairAndCleaning,
        Phase::PumpAnchors,
        Phase::Slope,
        Phase::InspectionStage1,
        Phase::Waterproofing,
        Phase::InspectionStage2,
    ];

    /// Zero-based position in the catalog.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The phase after this one, `None` for the last.
    pub fn next(self) -> Option<Phase> {
        Self::CATALOG.get(self.index() + 1).copied()
    }

    /// Whether this is one of the two inspection hold points.
    pub const fn is_inspection(self) -> bool {
        matches!(self, Phase::InspectionStage1 | Phase::InspectionStage2)
    }

    /// The human name used in reports and shell input.
    pub const fn name(self) -> &'static str {
        match self {
            Phase::FormworkRemoval => "Formwork Removal",
            Phase::RepairAndCleaning => "Repair and Cleaning",
            Phase::PumpAnchors => "Pump Anchors",
            Phase::Slope => "Slope",
            Phase::InspectionStage1 => "Inspection Stage 1",
            Phase::Waterproofing => "Waterproofing",
            Phase::InspectionStage2 => "Inspection Stage 2",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // f.pad keeps width specifiers working in table layouts.
        f.pad(self.name())
    }
}

/// Error parsing a phase name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown phase: {0}")]
pub struct ParsePhaseError(pub String);

impl std::str::FromStr for Phase {
    type Err = ParsePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::CATALOG
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParsePhaseError(s.to_string()))
    }
}

/// Status of one phase on one tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseStatus {
    /// Work has not begun
    #[serde(rename = "Not Started")]
    NotStarted,
    /// The phase the crew is working through
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is done
    Completed,
}

impl PhaseStatus {
    /// The status string used in reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            PhaseStatus::NotStarted => "Not Started",
            PhaseStatus::InProgress => "In Progress",
            PhaseStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for PhaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exactly one status per catalog phase.
///
/// Indexed by `Phase::index`, so the record always covers the whole
/// catalog, in catalog order. A fresh record has the first phase
/// In Progress and everything else Not Started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseRecord([PhaseStatus; Phase::CATALOG.len()]);

impl PhaseRecord {
    /// Record for a tank that has done no work yet.
    pub fn new() -> Self {
        let mut statuses = [PhaseStatus::NotStarted; Phase::CATALOG.len()];
        statuses[0] = PhaseStatus::InProgress;
        Self(statuses)
    }

    /// Status of one phase.
    pub fn status(&self, phase: Phase) -> PhaseStatus {
        self.0[phase.index()]
    }

    /// Overwrite the status of one phase.
    pub fn set(&mut self, phase: Phase, status: PhaseStatus) {
        self.0[phase.index()] = status;
    }

    /// Every (phase, status) pair, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Phase, PhaseStatus)> + '_ {
        Phase::CATALOG.into_iter().map(move |p| (p, self.0[p.index()]))
    }

    /// Whether every phase is Completed (terminal state).
    pub fn all_completed(&self) -> bool {
        self.0.iter().all(|s| *s == PhaseStatus::Completed)
    }
}

impl Default for PhaseRecord {
    fn default() -> Self {
        Self::new()
    }
}
