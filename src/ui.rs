//! Presentational widget helpers - no business logic

use ratatui::{prelude::*, widgets::*};

use crate::models::{MaintenanceRecord, Vehicle};

/// Renders a labeled text input field
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool, is_editing: bool) -> Paragraph<'a> {
    let border_style = if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Border style shared by all panels
pub fn panel_border(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Inline error line rendered inside the owning panel
pub fn error_line(message: &str) -> Line<'_> {
    Line::from(Span::styled(message, Style::default().fg(Color::Red)))
}

/// Loading marker appended to a panel title
pub fn loading_marker(is_loading: bool) -> &'static str {
    if is_loading {
        " [...]"
    } else {
        ""
    }
}

/// Format a monetary value with two decimals
pub fn money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Table of vehicles, scrolled to `offset` rows
pub fn vehicles_table(vehicles: &[Vehicle], offset: u16) -> Table<'static> {
    let header = Row::new(vec!["ID", "Make", "Model", "Year", "Mileage"])
        .style(Style::default().fg(Color::Cyan).bold());

    let rows: Vec<Row> = vehicles
        .iter()
        .skip(offset as usize)
        .map(|v| {
            Row::new(vec![
                v.id.to_string(),
                v.make.clone(),
                v.model.clone(),
                v.year.to_string(),
                v.mileage.to_string(),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(8),
            Constraint::Min(8),
            Constraint::Length(6),
            Constraint::Length(9),
        ],
    )
    .header(header)
}

/// Table of maintenance records, scrolled to `offset` rows
pub fn maintenance_table(records: &[MaintenanceRecord], offset: u16) -> Table<'static> {
    let header = Row::new(vec![
        "Svc ID", "Veh ID", "Date", "Part", "Rate", "Taxable", "Final",
    ])
    .style(Style::default().fg(Color::Cyan).bold());

    let rows: Vec<Row> = records
        .iter()
        .skip(offset as usize)
        .map(|r| {
            Row::new(vec![
                r.service_id.to_string(),
                r.vehicle_id.to_string(),
                r.service_date.clone(),
                r.part_code.clone(),
                money(r.rate),
                money(r.taxable_amount),
                money(r.final_amount),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Min(10),
            Constraint::Min(8),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(10.5), "10.50");
        assert_eq!(money(0.0), "0.00");
        assert_eq!(money(12.0), "12.00");
    }

    #[test]
    fn test_loading_marker() {
        assert_eq!(loading_marker(true), " [...]");
        assert_eq!(loading_marker(false), "");
    }
}
