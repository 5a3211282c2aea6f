//! Printable HTML report - the print view of the tank table.

use chrono::Utc;
use tanktrack_core::{Phase, PhaseStatus, Tank};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
h1 { color: #333; }
table { border-collapse: collapse; width: 100%; margin-top: 20px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f2f2f2; }
.completed { background-color: #d4edda; }
.in-progress { background-color: #fff3cd; }
@media print {
  button { display: none; }
  body { margin: 0; }
}";

/// Per-status cell class; Not Started cells stay unstyled.
fn status_class(status: PhaseStatus) -> &'static str {
    match status {
        PhaseStatus::Completed => "completed",
        PhaseStatus::InProgress => "in-progress",
        PhaseStatus::NotStarted => "",
    }
}

/// Render the printable report: same columns as the CSV, with phase
/// cells tinted per status and a print button wired to `window.print`.
pub fn html_report<'a>(title: &str, tanks: impl IntoIterator<Item = &'a Tank>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(&format!("<style>\n{STYLE}\n</style>\n"));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    out.push_str(&format!(
        "<p>Generated {}</p>\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str("<button onclick=\"window.print();\">Print Report</button>\n");

    out.push_str("<table>\n<thead>\n<tr>");
    for column in ["ID", "Name", "Location", "Type", "Current Stage"] {
        out.push_str(&format!("<th>{column}</th>"));
    }
    for phase in Phase::CATALOG {
        out.push_str(&format!("<th>{phase}</th>"));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for tank in tanks {
        out.push_str("<tr>");
        out.push_str(&format!("<td>{}</td>", tank.id));
        out.push_str(&format!("<td>{}</td>", tank.name));
        out.push_str(&format!("<td>{}</td>", tank.level));
        out.push_str(&format!("<td>{}</td>", tank.kind));
        out.push_str(&format!("<td>{}</td>", tank.current_phase));
        for (_, status) in tank.record.iter() {
            let class = status_class(status);
            if class.is_empty() {
                out.push_str(&format!("<td>{status}</td>"));
            } else {
                out.push_str(&format!("<td class=\"{class}\">{status}</td>"));
            }
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}
