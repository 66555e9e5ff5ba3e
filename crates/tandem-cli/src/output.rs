// Rust guideline compliant 2026-02-06

//! Output formatting module for the Tandem CLI.
//!
//! This module provides functionality for formatting solver results and the
//! transition table in various output formats (JSON, table, plain text).

use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use tandem_app::SuccessEnvelope;
use tandem_core::{Group, OutputFormat, TaskStatus};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting Tandem data in different output formats.
pub trait OutputFormatter {
    /// Formats the solver result.
    ///
    /// # Arguments
    /// * `count` - Minimum number of groups
    /// * `plan` - The groups themselves, when an explanation was requested
    fn format_groups(&self, count: usize, plan: Option<&[Group]>) -> String;

    /// Formats an accepted transition check.
    fn format_transition_ok(&self, from: TaskStatus, to: TaskStatus) -> String;

    /// Formats a list of transition edges.
    fn format_transitions(&self, edges: &[(TaskStatus, TaskStatus)]) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

fn group_record(group: &Group) -> (String, u64) {
    match *group {
        Group::Single(weight) => (weight.to_string(), weight),
        Group::Pair(light, heavy) => (format!("{} + {}", light, heavy), group.load()),
    }
}

/// JSON output formatter.
///
/// Formats results as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_groups(&self, count: usize, plan: Option<&[Group]>) -> String {
        let output = match plan {
            Some(groups) => json!({ "groups": count, "plan": groups }),
            None => json!({ "groups": count }),
        };
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize result" }).to_string())
    }

    fn format_transition_ok(&self, from: TaskStatus, to: TaskStatus) -> String {
        let output = SuccessEnvelope::new(json!({ "from": from, "to": to, "allowed": true }));
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize result" }).to_string())
    }

    fn format_transitions(&self, edges: &[(TaskStatus, TaskStatus)]) -> String {
        let edges: Vec<_> = edges
            .iter()
            .map(|(from, to)| json!({ "from": from, "to": to }))
            .collect();
        let output = json!({ "transitions": edges, "total": edges.len() });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize transitions" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats results as human-readable tables with optional colors.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn colored(&self, text: &str, color: Color) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(buffer, "{}", text);
        let _ = buffer.reset();
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_groups(&self, count: usize, plan: Option<&[Group]>) -> String {
        let Some(groups) = plan else {
            return count.to_string();
        };

        let mut builder = Builder::default();
        builder.push_record(vec!["#", "Items", "Load"]);
        for (index, group) in groups.iter().enumerate() {
            let (items, load) = group_record(group);
            builder.push_record(vec![(index + 1).to_string(), items, load.to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        format!("{}\n{}", count, table)
    }

    fn format_transition_ok(&self, from: TaskStatus, to: TaskStatus) -> String {
        format!("{} {} → {}", self.colored("ok", Color::Green), from, to)
    }

    fn format_transitions(&self, edges: &[(TaskStatus, TaskStatus)]) -> String {
        if edges.is_empty() {
            return "No transitions.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["From", "To"]);
        for (from, to) in edges {
            builder.push_record(vec![from.to_string(), to.to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("{} {}", self.colored("Error:", Color::Red), error)
    }
}

/// Plain text output formatter.
///
/// Formats results as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_groups(&self, count: usize, plan: Option<&[Group]>) -> String {
        let mut output = count.to_string();
        if let Some(groups) = plan {
            for group in groups {
                let (items, load) = group_record(group);
                output.push_str(&format!("\n{} = {}", items, load));
            }
        }
        output
    }

    fn format_transition_ok(&self, _from: TaskStatus, _to: TaskStatus) -> String {
        "ok".to_string()
    }

    fn format_transitions(&self, edges: &[(TaskStatus, TaskStatus)]) -> String {
        edges
            .iter()
            .map(|(from, to)| format!("{} {}", from, to))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
