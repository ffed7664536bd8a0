//! End-of-run report rendering
//!
//! The table mirrors the classic layout: right-aligned columns Date, Ticket,
//! Time, Status and Err, with `--` in place of an empty error.

use console::{pad_str, style, Alignment, StyledObject};
use harvestmine_domain::constants::REPORT_DATE_FORMAT;
use harvestmine_domain::{SyncResult, SyncStatus};

const HEADERS: [&str; 5] = ["Date", "Ticket", "Time", "Status", "Err"];
const MIN_WIDTH: usize = 10;
const EMPTY_ERROR: &str = "--";

/// Plain cell text for one result
fn cells(result: &SyncResult) -> [String; 5] {
    [
        result.date.format(REPORT_DATE_FORMAT).to_string(),
        result.ticket.map(|ticket| ticket.to_string()).unwrap_or_default(),
        format!("{:.2}", result.hours),
        result.status.to_string(),
        if result.error.is_empty() { EMPTY_ERROR.to_string() } else { result.error.clone() },
    ]
}

fn status_style(status: SyncStatus, text: &str) -> StyledObject<&str> {
    match status {
        SyncStatus::Logged => style(text).green(),
        SyncStatus::Failed => style(text).red(),
        SyncStatus::Skipped => style(text).yellow(),
    }
}

/// Render the results as a bordered table.
///
/// `colored` forces ANSI styling on or off so output is stable in tests and
/// pipes.
#[must_use]
pub fn render_table(results: &[SyncResult], colored: bool) -> String {
    let rows: Vec<[String; 5]> = results.iter().map(cells).collect();

    let mut widths = HEADERS.map(|header| header.len().max(MIN_WIDTH));
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(console::measure_text_width(cell));
        }
    }

    let border = |fill: char| {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&fill.to_string().repeat(width + 2));
            line.push('+');
        }
        line
    };

    let line = |cells: Vec<String>| {
        let mut out = String::from("|");
        for (cell, width) in cells.iter().zip(widths) {
            out.push(' ');
            out.push_str(&pad_str(cell, width, Alignment::Right, None));
            out.push_str(" |");
        }
        out
    };

    let mut out = vec![border('-')];
    out.push(line(
        HEADERS
            .iter()
            .map(|header| style(*header).blue().force_styling(colored).to_string())
            .collect(),
    ));
    out.push(border('='));

    for (result, row) in results.iter().zip(rows) {
        let [date, ticket, time, status, err] = row;
        let status = status_style(result.status, &status).force_styling(colored).to_string();
        out.push(line(vec![date, ticket, time, status, err]));
        out.push(border('-'));
    }

    out.join("\n")
}

/// One-line tally printed under the table
#[must_use]
pub fn summary(results: &[SyncResult]) -> String {
    let count = |status| results.iter().filter(|result| result.status == status).count();
    let mut parts = vec![
        format!("{} logged", count(SyncStatus::Logged)),
        format!("{} failed", count(SyncStatus::Failed)),
    ];
    let skipped = count(SyncStatus::Skipped);
    if skipped > 0 {
        parts.push(format!("{skipped} skipped"));
    }
    parts.join(", ")
}

/// Render the results as a pretty-printed JSON array
///
/// # Errors
/// Propagates `serde_json` serialization failures.
pub fn render_json(results: &[SyncResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
