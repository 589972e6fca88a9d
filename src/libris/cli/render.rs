//! # Rendering
//!
//! Turns `CmdResult` values into terminal text. Everything here returns a
//! `String` so output can be tested without a terminal; the `print_*` helpers
//! are the only functions that write to stdout.
//!
//! Color comes from `colored`, which already stays quiet when stdout is not a
//! terminal or `NO_COLOR` is set.

use colored::Colorize;
use libris::api::{CmdMessage, CmdResult, MessageLevel};
use libris::catalog::BorrowTally;
use libris::config::LibrisConfig;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_MARKER: &str = "(none)";

/// Heading followed by one line per entry.
pub fn render_listing(result: &CmdResult) -> String {
    let mut out = String::new();
    if let Some(heading) = &result.heading {
        out.push_str(&format!("{}\n", heading.bold()));
    }
    if result.lines.is_empty() && result.heading.is_some() {
        out.push_str(&format!("{}\n", EMPTY_MARKER.dimmed()));
    }
    for line in &result.lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Borrow counts as an aligned table, for the shell's report view.
pub fn render_tallies(tallies: &[BorrowTally]) -> String {
    if tallies.is_empty() {
        return format!("{}\n", EMPTY_MARKER.dimmed());
    }
    let name_width = tallies
        .iter()
        .map(|t| t.name.width())
        .max()
        .unwrap_or(0)
        .max("Subscriber".width());

    let header = format!(
        "Subscriber{}  {:>8}",
        " ".repeat(name_width - "Subscriber".width()),
        "Borrowed"
    );
    let mut out = header.dimmed().to_string();
    out.push('\n');
    for tally in tallies {
        let padding = " ".repeat(name_width - tally.name.width());
        out.push_str(&format!("{}{}  {:>8}\n", tally.name, padding, tally.borrowed));
    }
    out
}

pub fn render_config(config: &LibrisConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(k, v)| format!("{} = {}\n", k, v))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|msg| {
            let styled = match msg.level {
                MessageLevel::Info => msg.content.dimmed(),
                MessageLevel::Success => msg.content.green(),
                MessageLevel::Warning => msg.content.yellow(),
                MessageLevel::Error => msg.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn render_error(err: &libris::error::LibrisError) -> String {
    render_messages(&[CmdMessage::error(format!("Error: {}", err))])
}

/// Prints listing, config and messages of a result, in that order.
pub fn print_result(result: &CmdResult) {
    print!("{}", render_listing(result));
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    print!("{}", render_messages(&result.messages));
}
