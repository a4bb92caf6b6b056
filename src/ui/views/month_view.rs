use chrono::Datelike;

use crate::services::calendar::{CalendarCell, MonthGrid};
use crate::utils::date::{day_names, month_title};

/// Width of one day column, excluding the separator
const CELL_WIDTH: usize = 7;

#[derive(Debug, Clone, Copy, Default)]
pub struct MonthViewOptions {
    pub show_week_numbers: bool,
    /// List the month's events under the grid
    pub list_events: bool,
}

/// Render a month grid as plain text.
///
/// Today is shown as `[15]`, days from neighbouring months as `·30`, and a
/// `*n` suffix counts the events starting that day.
pub fn render_month(grid: &MonthGrid, options: MonthViewOptions) -> String {
    let mut lines = Vec::with_capacity(grid.weeks().len() + 8);
    lines.push(month_title(grid.month()));

    let mut header = String::new();
    if options.show_week_numbers {
        header.push_str(&format!("{:>3} ", "Wk"));
    }
    let names: Vec<String> = day_names(grid.week_start())
        .iter()
        .map(|name| format!(" {:<width$}", name, width = CELL_WIDTH - 1))
        .collect();
    header.push_str(&names.join(" "));
    lines.push(header.trim_end().to_string());

    for (row, week) in grid.weeks().iter().enumerate() {
        let mut line = String::new();
        if options.show_week_numbers {
            let number = grid.week_number(row).unwrap_or_default();
            line.push_str(&format!("{:>3} ", number));
        }
        let cells: Vec<String> = week.iter().map(cell_text).collect();
        line.push_str(&cells.join(" "));
        lines.push(line.trim_end().to_string());
    }

    if options.list_events {
        let listed: Vec<String> = grid
            .cells()
            .filter(|cell| cell.is_current_month)
            .flat_map(|cell| {
                cell.events.iter().map(move |event| {
                    format!(
                        "  {}  {}  {} ({})",
                        cell.date.format("%a %d"),
                        event.time_range_label(),
                        event.title,
                        event.kind.label()
                    )
                })
            })
            .collect();

        lines.push(String::new());
        if listed.is_empty() {
            lines.push("  No events this month".to_string());
        } else {
            lines.extend(listed);
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn cell_text(cell: &CalendarCell) -> String {
    let day = cell.date.day();
    let label = if cell.is_today {
        format!("[{:>2}]", day)
    } else if !cell.is_current_month {
        format!("·{:>2} ", day)
    } else {
        format!(" {:>2} ", day)
    };
    let marker = match cell.events.len() {
        0 => String::new(),
        n => format!("*{}", n),
    };
    format!("{}{:<width$}", label, marker, width = CELL_WIDTH - 4)
}
