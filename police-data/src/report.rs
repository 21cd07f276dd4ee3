//! Plain-text panels for terminal output.
//!
//! Each function renders one view: a title, a rule, then one block per
//! record. Rendering never fails; placeholders have already been applied
//! when the records were built.

use crate::domain::{
    Coordinate, CrimeCategory, CrimeRecord, Force, Neighbourhood, StopSearchRecord, UNKNOWN,
};
use crate::stats::CategoryStat;

const TITLE_RULE_WIDTH: usize = 50;
const RECORD_RULE_WIDTH: usize = 30;
const BAR_WIDTH: f64 = 40.0;

/// Accumulates lines of a panel.
struct Panel {
    lines: Vec<String>,
}

impl Panel {
    fn new(title: impl Into<String>) -> Self {
        Self {
            lines: vec![title.into(), "=".repeat(TITLE_RULE_WIDTH), String::new()],
        }
    }

    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn record_rule(&mut self) {
        self.lines.push("-".repeat(RECORD_RULE_WIDTH));
    }

    fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

pub fn forces(forces: &[Force]) -> String {
    let mut panel = Panel::new("Police Forces");
    for force in forces {
        panel.line(format!("{} ({})", force.name, force.id));
    }
    panel.finish()
}

pub fn force_detail(force: &Force) -> String {
    let mut panel = Panel::new(format!("Force Details for {}", force.name));

    if let Some(description) = &force.description {
        panel.line("Description:");
        panel.line(description.clone());
        panel.line("");
    }
    if let Some(url) = &force.url {
        panel.line(format!("Website: {url}"));
    }
    if let Some(telephone) = &force.telephone {
        panel.line(format!("Telephone: {telephone}"));
    }
    if !force.engagement_methods.is_empty() {
        panel.line("");
        panel.line("Engagement Methods:");
        for method in &force.engagement_methods {
            match &method.url {
                Some(url) => panel.line(format!("- {} ({url})", method.title)),
                None => panel.line(format!("- {}", method.title)),
            }
        }
    }

    panel.finish()
}

pub fn crimes(coord: &Coordinate, crimes: &[CrimeRecord]) -> String {
    let mut panel = Panel::new(format!("Crimes at Location {coord}"));

    if crimes.is_empty() {
        panel.line("No crimes found at this location.");
    }
    for crime in crimes {
        let month = crime
            .month
            .map(|m| m.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string());
        panel.line(format!("Category: {}", crime.category));
        panel.line(format!("Location: {}", crime.location.street_name));
        panel.line(format!("Month: {month}"));
        if let Some(outcome) = &crime.outcome_status {
            panel.line(format!("Outcome: {}", outcome.category));
        }
        panel.record_rule();
    }

    panel.finish()
}

pub fn categories(categories: &[CrimeCategory]) -> String {
    let mut panel = Panel::new("Crime Categories");
    for category in categories {
        panel.line(format!("- {}", category.name));
    }
    panel.finish()
}

pub fn neighbourhoods(force_id: &str, neighbourhoods: &[Neighbourhood]) -> String {
    let mut panel = Panel::new(format!("Neighbourhoods for {force_id}"));
    for hood in neighbourhoods {
        panel.line(format!("Name: {}", hood.name));
        panel.line(format!("ID: {}", hood.id));
        panel.record_rule();
    }
    panel.finish()
}

pub fn stop_searches(coord: &Coordinate, stops: &[StopSearchRecord]) -> String {
    let mut panel = Panel::new(format!("Stop and Searches at Location {coord}"));

    if stops.is_empty() {
        panel.line("No stop and searches found at this location.");
    }
    for stop in stops {
        panel.line(format!("Type: {}", stop.kind));
        panel.line(format!("Gender: {}", stop.gender));
        panel.line(format!("Age range: {}", stop.age_range));
        panel.line(format!("Outcome: {}", stop.outcome));
        panel.record_rule();
    }

    panel.finish()
}

/// Category breakdown as a table with a proportional bar per row.
pub fn statistics(coord: &Coordinate, rows: &[(&str, &CategoryStat)]) -> String {
    let mut panel = Panel::new(format!("Crime Statistics at Location {coord}"));

    if rows.is_empty() {
        panel.line("No crimes found at this location.");
    }
    for (name, stat) in rows {
        let bar = "#".repeat((stat.percentage / 100.0 * BAR_WIDTH).round() as usize);
        panel.line(format!(
            "{name:<40} {:>5} {:>5.1}% {bar}",
            stat.count, stat.percentage
        ));
    }

    panel.finish()
}
