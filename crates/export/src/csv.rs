//! CSV export of the tank table.
//!
//! Fields are emitted raw, with no quoting or escaping: nothing in the
//! model (ids, names, labels, phase and status names) contains a comma.

use tanktrack_core::{Phase, Tank};

/// The header row: fixed columns, then every phase in catalog order.
pub fn csv_header() -> String {
    let mut columns: Vec<&str> = vec!["ID", "Name", "Location", "Type", "Current Stage"];
    columns.extend(Phase::CATALOG.iter().map(|p| p.name()));
    columns.join(",")
}

/// Render the full report, one newline-terminated row per tank.
pub fn csv_report<'a>(tanks: impl IntoIterator<Item = &'a Tank>) -> String {
    let mut out = csv_header();
    out.push('\n');
    for tank in tanks {
        out.push_str(&csv_row(tank));
        out.push('\n');
    }
    out
}

fn csv_row(tank: &Tank) -> String {
    let mut fields = vec![
        tank.id.to_string(),
        tank.name.clone(),
        tank.level.to_string(),
        tank.kind.to_string(),
        tank.current_phase.to_string(),
    ];
    fields.extend(tank.record.iter().map(|(_, status)| status.to_string()));
    fields.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanktrack_core::PhaseStatus;
    use tanktrack_store::{default_site, TankStore};

    #[test]
    fn test_header_lists_phases_in_catalog_order() {
        let header = csv_header();
        assert!(header.starts_with("ID,Name,Location,Type,Current Stage,Formwork Removal,"));
        assert!(header.ends_with(",Inspection Stage 2"));
        assert_eq!(header.split(',').count(), 5 + Phase::CATALOG.len());
    }

    #[test]
    fn test_report_round_trips_by_splitting() {
        let mut store = TankStore::from_seed(default_site());

        // Advance one tank so statuses differ across the table.
        let mut tank = store.all()[0].clone();
        tank.record.set(Phase::FormworkRemoval, PhaseStatus::Completed);
        tank.record
            .set(Phase::RepairAndCleaning, PhaseStatus::InProgress);
        tank.current_phase = Phase::RepairAndCleaning;
        assert!(store.commit(tank));

        let report = csv_report(store.all());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 1 + store.len());

        for (line, tank) in lines[1..].iter().zip(store.all()) {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 5 + Phase::CATALOG.len());
            assert_eq!(fields[0], tank.id.as_str());
            assert_eq!(fields[1], tank.name);
            assert_eq!(fields[2], tank.level.as_str());
            assert_eq!(fields[3], tank.kind.as_str());
            assert_eq!(fields[4], tank.current_phase.name());
            for (i, (_, status)) in tank.record.iter().enumerate() {
                assert_eq!(fields[5 + i], status.as_str());
            }
        }
    }

    #[test]
    fn test_every_row_is_newline_terminated() {
        let store = TankStore::from_seed(default_site());
        let report = csv_report(store.all());
        assert!(report.ends_with('\n'));
        assert_eq!(report.matches('\n').count(), 1 + store.len());
    }
}
