//! Plain-text rendering of the dashboard.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use fleet::{DashboardState, UtcOffset, format_updated_at_in};

const HEADERS: [&str; 4] = ["ID", "NAME", "STATUS", "LAST UPDATED"];

/// Render counts, the vehicle table and, when open, the add-vehicle form.
///
/// Timestamps are shown at `offset`, normally the viewer's local offset.
pub fn render_dashboard(state: &DashboardState, offset: UtcOffset) -> String {
    let mut out = String::new();
    let counts = state.counts();
    let _ = writeln!(out, "Vehicle Dashboard");
    let _ = writeln!(
        out,
        "Total Vehicles: {}  Active Vehicles: {}  In Maintenance: {}",
        counts.total, counts.active, counts.maintenance
    );
    out.push('\n');

    if state.vehicles.is_empty() {
        out.push_str("No vehicles.\n");
    } else {
        let rows: Vec<[String; 4]> = state
            .vehicles
            .iter()
            .map(|v| {
                [
                    v.id.clone(),
                    v.name.clone(),
                    v.status.to_string(),
                    format_updated_at_in(v.updated_at.as_deref(), offset),
                ]
            })
            .collect();
        write_table(&mut out, &rows);
    }

    if state.is_modal_open() {
        let _ = writeln!(out, "\nAdd New Vehicle");
        let _ = writeln!(out, "  Vehicle Name: {}", state.draft.name);
        let _ = writeln!(out, "  Status: {}", state.draft.status);
    }
    out
}

fn write_table(out: &mut String, rows: &[[String; 4]]) {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &widths, HEADERS);
    for row in rows {
        write_row(out, &widths, row.each_ref().map(String::as_str));
    }
}

fn write_row(out: &mut String, widths: &[usize; 4], cells: [&str; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
