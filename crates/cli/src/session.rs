//! Interactive session - the command surface the original tracker
//! exposed as buttons, tabs and dialogs.
//!
//! Commands run one at a time to completion; the only suspension point
//! is the undo confirmation prompt, which blocks until the user answers.

use std::io::{BufRead, Lines, Write};
use std::path::PathBuf;

use anyhow::Result;
use tanktrack_core::{Level, Phase, TankId};
use tanktrack_engine::{cancel_undo, complete, confirm_undo, request_undo, Outcome, PendingUndo};
use tanktrack_export::{csv_report, html_report, write_report};
use tanktrack_store::TankStore;

const REPORT_TITLE: &str = "Water Tanks Progress";
const CSV_DEFAULT: &str = "water_tanks_progress.csv";
const HTML_DEFAULT: &str = "water_tanks_progress.html";

const HELP: &str = "\
Commands:
  levels                       list levels and tank counts
  level <L>                    switch to level L (N00, N10, N20, N30)
  list                         tanks on the current level
  show <id>                    phase-by-phase detail for one tank
  complete <id> <phase name>   mark a phase complete
  undo <id> <phase name>       undo a completed phase (asks to confirm)
  inspections                  tanks awaiting inspection
  status                       tally of tank states
  export csv|html [path]       write the progress report to a file
  help                         this text
  quit                         end the session";

/// One interactive tracking session over an in-memory store.
pub struct Session {
    store: TankStore,
    level: Level,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionCommand {
    Levels,
    SwitchLevel(Level),
    List,
    Show(TankId),
    Complete { id: TankId, phase: Phase },
    Undo { id: TankId, phase: Phase },
    Inspections,
    Status,
    Export { format: ExportFormat, path: Option<PathBuf> },
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExportFormat {
    Csv,
    Html,
}

impl Session {
    /// Create a session starting on the given level tab.
    pub fn new(store: TankStore, level: Level) -> Self {
        Self { store, level }
    }

    /// Drive the session until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        writeln!(
            out,
            "tanktrack - {} tanks loaded (type \"help\" for commands)",
            self.store.len()
        )?;

        let mut lines = input.lines();
        loop {
            write!(out, "tanktrack> ")?;
            out.flush()?;
            let Some(line) = lines.next() else { break };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(SessionCommand::Quit) => break,
                Ok(command) => self.dispatch(command, &mut lines, &mut out)?,
                Err(message) => writeln!(out, "{message}")?,
            }
        }
        Ok(())
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        command: SessionCommand,
        lines: &mut Lines<R>,
        out: &mut W,
    ) -> Result<()> {
        match command {
            SessionCommand::Levels => {
                for level in Level::ALL {
                    let marker = if level == self.level { "*" } else { " " };
                    writeln!(
                        out,
                        "{marker} {level}  ({} tanks)",
                        self.store.at_level(level).len()
                    )?;
                }
            }
            SessionCommand::SwitchLevel(level) => {
                self.level = level;
                writeln!(out, "Now on level {level}")?;
            }
            SessionCommand::List => {
                let tanks = self.store.at_level(self.level);
                if tanks.is_empty() {
                    writeln!(out, "No tanks on level {}", self.level)?;
                }
                for tank in tanks {
                    writeln!(
                        out,
                        "{} | {} | {} | {} | {}",
                        tank.id,
                        tank.name,
                        tank.kind,
                        tank.current_phase,
                        tank.state()
                    )?;
                }
            }
            SessionCommand::Show(id) => match self.store.get(&id) {
                Some(tank) => {
                    writeln!(out, "{} ({})", tank.name, tank.id)?;
                    writeln!(out, "Location: {} | Type: {}", tank.level, tank.kind)?;
                    for (phase, status) in tank.record.iter() {
                        let marker = if phase == tank.current_phase {
                            "  <- current"
                        } else {
                            ""
                        };
                        writeln!(out, "  {phase:<20} {status}{marker}")?;
                    }
                }
                None => writeln!(out, "Tank not found: {id}")?,
            },
            SessionCommand::Complete { id, phase } => match complete(&mut self.store, &id, phase) {
                Ok(Outcome::Applied(tank)) => {
                    writeln!(
                        out,
                        "Completed \"{phase}\" on {id}; current stage is now \"{}\"",
                        tank.current_phase
                    )?;
                }
                Ok(Outcome::NeedsConfirmation(pending)) => {
                    self.confirm(pending, lines, out)?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            SessionCommand::Undo { id, phase } => {
                match request_undo(&self.store, &id, phase) {
                    Ok(pending) => self.confirm(pending, lines, out)?,
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            SessionCommand::Inspections => {
                let waiting = self.store.awaiting_inspection();
                if waiting.is_empty() {
                    writeln!(out, "No tanks awaiting inspection")?;
                } else {
                    writeln!(out, "{} tank(s) awaiting inspection:", waiting.len())?;
                    for tank in waiting {
                        writeln!(out, "  {} ({}) - {}", tank.id, tank.level, tank.current_phase)?;
                    }
                }
            }
            SessionCommand::Status => {
                let counts = self.store.state_counts();
                writeln!(
                    out,
                    "{} done, {} inspecting, {} active",
                    counts.done, counts.inspecting, counts.active
                )?;
            }
            SessionCommand::Export { format, path } => {
                let (contents, default_path) = match format {
                    ExportFormat::Csv => (csv_report(self.store.all()), CSV_DEFAULT),
                    ExportFormat::Html => {
                        (html_report(REPORT_TITLE, self.store.all()), HTML_DEFAULT)
                    }
                };
                let path = path.unwrap_or_else(|| PathBuf::from(default_path));
                match write_report(&path, &contents) {
                    Ok(()) => writeln!(out, "Report written to {}", path.display())?,
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    /// Blocking confirmation for a destructive undo. Anything but
    /// y/yes cancels.
    fn confirm<R: BufRead, W: Write>(
        &mut self,
        pending: PendingUndo,
        lines: &mut Lines<R>,
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "{}", pending.describe())?;
        write!(out, "Confirm undo? [y/N] ")?;
        out.flush()?;

        let answer = match lines.next() {
            Some(line) => line?,
            None => String::new(),
        };
        if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            match confirm_undo(&mut self.store, pending) {
                Ok(tank) => writeln!(
                    out,
                    "Undone; current stage on {} is now \"{}\"",
                    tank.id, tank.current_phase
                )?,
                Err(err) => writeln!(out, "error: {err}")?,
            }
        } else {
            cancel_undo(pending);
            writeln!(out, "Cancelled")?;
        }
        Ok(())
    }
}

/// Parse one input line. Phase names may contain spaces, so commands
/// taking a phase consume the rest of the line for it.
pub(crate) fn parse_command(line: &str) -> Result<SessionCommand, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "levels" => Ok(SessionCommand::Levels),
        "level" => rest
            .parse::<Level>()
            .map(SessionCommand::SwitchLevel)
            .map_err(|err| err.to_string()),
        "list" => Ok(SessionCommand::List),
        "show" => {
            if rest.is_empty() {
                Err("usage: show <id>".to_string())
            } else {
                Ok(SessionCommand::Show(TankId::new(rest)))
            }
        }
        "complete" | "undo" => {
            let usage = format!("usage: {head} <id> <phase name>");
            let (id, phase_name) = rest.split_once(char::is_whitespace).ok_or(usage)?;
            let phase: Phase = phase_name.parse().map_err(|err| format!("{err}"))?;
            let id = TankId::new(id);
            if head.eq_ignore_ascii_case("complete") {
                Ok(SessionCommand::Complete { id, phase })
            } else {
                Ok(SessionCommand::Undo { id, phase })
            }
        }
        "inspections" => Ok(SessionCommand::Inspections),
        "status" => Ok(SessionCommand::Status),
        "export" => {
            let (format, path) = match rest.split_once(char::is_whitespace) {
                Some((format, path)) => (format, Some(PathBuf::from(path.trim()))),
                None => (rest, None),
            };
            let format = match format.to_ascii_lowercase().as_str() {
                "csv" => ExportFormat::Csv,
                "html" => ExportFormat::Html,
                _ => return Err("usage: export csv|html [path]".to_string()),
            };
            Ok(SessionCommand::Export { format, path })
        }
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
        other => Err(format!("unknown command: {other} (try \"help\")")),
    }
}
