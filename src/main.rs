//! Garage TUI - Actor-based vehicle maintenance dashboard
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

mod models;
mod ui;
mod messages;
mod app;
mod network;
mod constants;

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
use messages::ui_events::{key_to_ui_event, FormField, InputMode, PairField, Panel};
use app::AppActor;
use network::{ApiClient, NetworkActor};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", constants::LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(ApiClient::new(constants::base_url()), net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Header
            Constraint::Min(0),     // Content
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_header(f, state, main_chunks[0]);

    // Two columns: tables on the left, lookup/search/form on the right
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    draw_vehicles(f, state, left[0]);
    draw_maintenance(f, state, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),   // Lookup + detail
            Constraint::Min(8),      // Pair search
            Constraint::Length(12),  // Add-record form
        ])
        .split(columns[1]);

    draw_lookup(f, state, right[0]);
    draw_pair_search(f, state, right[1]);
    draw_form(f, state, right[2]);

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", constants::APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw(" "),
        Span::styled(
            format!("Backend: {}", state.base_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_vehicles(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Vehicles;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ui::panel_border(is_focused))
        .title(format!(
            " Owned Vehicles{} (r:refresh) ",
            ui::loading_marker(state.vehicles_loading)
        ));

    if !state.vehicles_error.is_empty() {
        let error = Paragraph::new(ui::error_line(&state.vehicles_error))
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(error, area);
    } else if state.vehicles_loading && state.vehicles.is_empty() {
        let loading = Paragraph::new("Loading vehicles...")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(loading, area);
    } else if state.vehicles.is_empty() {
        let empty = Paragraph::new("No vehicles found")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
    } else {
        let table = ui::vehicles_table(&state.vehicles, state.vehicles_scroll).block(block);
        f.render_widget(table, area);
    }
}

fn draw_maintenance(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Maintenance;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ui::panel_border(is_focused))
        .title(format!(
            " Maintenance by Vehicle{} ",
            ui::loading_marker(state.maintenance_loading)
        ));

    if !state.maintenance_error.is_empty() {
        let error = Paragraph::new(ui::error_line(&state.maintenance_error))
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(error, area);
    } else if state.maintenance.is_empty() {
        let empty = Paragraph::new("No maintenance records. Set a vehicle id and press 'v'.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
    } else {
        let table =
            ui::maintenance_table(&state.maintenance, state.maintenance_scroll).block(block);
        f.render_widget(table, area);
    }
}

fn draw_lookup(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Lookup;
    let is_editing = is_focused && state.input_mode == InputMode::Editing;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ui::panel_border(is_focused))
        .title(format!(
            " Vehicle Lookup{} (e:edit g:get v:maintenance) ",
            ui::loading_marker(state.detail_loading)
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let input = ui::render_input(&state.lookup_id, " Vehicle ID ", is_focused, is_editing);
    f.render_widget(input, chunks[0]);

    if is_editing {
        let max_x = chunks[0].x + chunks[0].width.saturating_sub(2);
        let cursor_x = (chunks[0].x + state.cursor_position as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, chunks[0].y + 1));
    }

    // Detail card or error below the input
    if !state.detail_error.is_empty() {
        let error = Paragraph::new(ui::error_line(&state.detail_error)).wrap(Wrap { trim: false });
        f.render_widget(error, chunks[1]);
    } else if let Some(detail) = &state.detail {
        let lines = vec![
            Line::from(vec![
                Span::styled("Make:    ", Style::default().fg(Color::DarkGray)),
                Span::raw(detail.make.clone()),
            ]),
            Line::from(vec![
                Span::styled("Model:   ", Style::default().fg(Color::DarkGray)),
                Span::raw(detail.model.clone()),
            ]),
            Line::from(vec![
                Span::styled("Year:    ", Style::default().fg(Color::DarkGray)),
                Span::raw(detail.year.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Mileage: ", Style::default().fg(Color::DarkGray)),
                Span::raw(detail.mileage.to_string()),
            ]),
        ];
        f.render_widget(Paragraph::new(lines), chunks[1]);
    } else {
        let hint = Paragraph::new("Press 'g' to fetch vehicle details.")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, chunks[1]);
    }
}

fn draw_pair_search(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::PairSearch;
    let is_editing = is_focused && state.input_mode == InputMode::Editing;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ui::panel_border(is_focused))
        .title(format!(
            " Find by Vehicle + Service ID{} (s:search) ",
            ui::loading_marker(state.pair_loading)
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let inputs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let vid_active = state.pair_field == PairField::VehicleId;
    let vid_input = ui::render_input(
        &state.pair_vehicle_id,
        " Vehicle ID ",
        is_focused && vid_active,
        is_editing && vid_active,
    );
    f.render_widget(vid_input, inputs[0]);

    let sid_input = ui::render_input(
        &state.pair_service_id,
        " Service ID ",
        is_focused && !vid_active,
        is_editing && !vid_active,
    );
    f.render_widget(sid_input, inputs[1]);

    if is_editing {
        let field_area = if vid_active { inputs[0] } else { inputs[1] };
        let max_x = field_area.x + field_area.width.saturating_sub(2);
        let cursor_x = (field_area.x + state.cursor_position as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, field_area.y + 1));
    }

    if !state.pair_error.is_empty() {
        let error = Paragraph::new(ui::error_line(&state.pair_error)).wrap(Wrap { trim: false });
        f.render_widget(error, chunks[1]);
    } else if state.pair_records.is_empty() {
        let empty = Paragraph::new("No records for the given pair")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, chunks[1]);
    } else {
        let table = ui::maintenance_table(&state.pair_records, state.pair_scroll);
        f.render_widget(table, chunks[1]);
    }
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::AddRecord;
    let is_editing = is_focused && state.input_mode == InputMode::Editing;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ui::panel_border(is_focused))
        .title(format!(
            " Add Maintenance Record{} (e:edit Tab:field s:submit) ",
            ui::loading_marker(state.create_loading)
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let fields = [
        (FormField::VehicleId, state.form.vehicle_id.as_str()),
        (FormField::ServiceId, state.form.service_id.as_str()),
        (FormField::ServiceDate, state.form.service_date.as_str()),
        (FormField::PartCode, state.form.part_code.as_str()),
        (FormField::Rate, state.form.rate.as_str()),
        (FormField::TaxableAmount, state.form.taxable_amount.as_str()),
        (FormField::FinalAmount, state.form.final_amount.as_str()),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (field, value) in fields {
        let active = is_focused && state.form_field == field;
        let label_style = if active && is_editing {
            Style::default().fg(Color::Yellow).bold()
        } else if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<15}", field.label()), label_style),
            Span::raw(value.to_string()),
        ]));
    }

    if !state.create_error.is_empty() {
        lines.push(ui::error_line(&state.create_error));
    } else if !state.create_message.is_empty() {
        lines.push(Line::from(Span::styled(
            state.create_message.clone(),
            Style::default().fg(Color::Green),
        )));
    }

    f.render_widget(Paragraph::new(lines), inner);

    if is_editing {
        let field_index = fields
            .iter()
            .position(|(field, _)| *field == state.form_field)
            .unwrap_or(0) as u16;
        let max_x = inner.x + inner.width.saturating_sub(1);
        let cursor_x = (inner.x + 15 + state.cursor_position as u16).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, inner.y + field_index));
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.input_mode == InputMode::Editing {
        " ESC:stop editing | arrows:move | Tab:next field | Enter:run action "
    } else {
        " Tab:panel | e:edit | r:refresh | g:get | v:maintenance | s:search/submit | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 GARAGE TUI - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch panels
   Up / Down          Scroll tables

 VEHICLES
   r                  Reload the vehicle list

 VEHICLE LOOKUP
   e                  Edit the vehicle id
   g / Enter          Fetch vehicle details
   v                  Fetch maintenance history

 PAIR SEARCH
   e                  Edit ids (Tab switches fields)
   s / Enter          Search by vehicle + service id

 ADD RECORD
   e                  Edit fields (Tab cycles)
   s / Enter          Submit the record

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
