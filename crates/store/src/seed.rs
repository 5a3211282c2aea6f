//! Seed data - the fixed site supplied at startup.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tanktrack_core::{Level, Rect, Tank, TankId, TankKind};

/// Errors loading a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two seed entries share an id
    #[error("duplicate tank id in seed: {0}")]
    DuplicateId(String),
}

/// One seed entry: a tank before any work has been done on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedTank {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Site level
    pub level: Level,
    /// Category tag
    #[serde(rename = "type")]
    pub kind: TankKind,
    /// Marker placement on the level blueprint
    pub rect: Rect,
}

impl SeedTank {
    fn new(id: &str, name: &str, level: Level, kind: TankKind, top: u32, left: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            level,
            kind,
            rect: Rect {
                top,
                left,
                width: 20,
                height: 20,
            },
        }
    }

    pub(crate) fn into_tank(self) -> Tank {
        Tank::new(TankId::from(self.id), self.name, self.level, self.kind, self.rect)
    }
}

/// The built-in site: eight tanks across levels N00 through N30, with
/// the marker coordinates from the original blueprints.
pub fn default_site() -> Vec<SeedTank> {
    vec![
        SeedTank::new("N00-WT-01", "Water Tank 01", Level::N00, TankKind::SewageWater, 250, 300),
        SeedTank::new("N00-WT-02", "Water Tank 02", Level::N00, TankKind::RainWater, 380, 420),
        SeedTank::new("N00-WT-03", "Water Tank 03", Level::N00, TankKind::ChillerRoom, 480, 600),
        SeedTank::new("N10-WT-01", "Water Tank 01", Level::N10, TankKind::SewageWater, 220, 350),
        SeedTank::new("N10-WT-02", "Water Tank 02", Level::N10, TankKind::RainWater, 320, 420),
        SeedTank::new("N20-WT-01", "Water Tank 01", Level::N20, TankKind::SewageWater, 280, 350),
        SeedTank::new("N20-WT-02", "Water Tank 02", Level::N20, TankKind::ChillerRoom, 400, 520),
        SeedTank::new("N30-WT-01", "Water Tank 01", Level::N30, TankKind::RainWater, 250, 350),
    ]
}

/// Load seed entries from a JSON file (an array of `SeedTank` objects).
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<SeedTank>, SeedError> {
    let data = std::fs::read_to_string(path)?;
    let seed: Vec<SeedTank> = serde_json::from_str(&data)?;

    let mut seen = HashSet::new();
    for entry in &seed {
        if !seen.insert(entry.id.as_str()) {
            return Err(SeedError::DuplicateId(entry.id.clone()));
        }
    }
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_site_has_unique_ids() {
        let seed = default_site();
        assert_eq!(seed.len(), 8);
        let ids: HashSet<&str> = seed.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), seed.len());
    }

    #[test]
    fn test_default_site_round_trips_through_json() {
        let seed = default_site();
        let json = serde_json::to_string_pretty(&seed).unwrap();
        let parsed: Vec<SeedTank> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), seed.len());
        assert_eq!(parsed[0].id, "N00-WT-01");
        assert_eq!(parsed[0].kind, TankKind::SewageWater);
    }

    #[test]
    fn test_load_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&default_site()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let seed = load_seed(file.path()).unwrap();
        assert_eq!(seed.len(), 8);
    }

    #[test]
    fn test_load_seed_rejects_duplicate_ids() {
        let mut seed = default_site();
        seed.push(seed[0].clone());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&seed).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let err = load_seed(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateId(id) if id == "N00-WT-01"));
    }

    #[test]
    fn test_load_seed_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(matches!(load_seed(file.path()), Err(SeedError::Json(_))));
    }
}
