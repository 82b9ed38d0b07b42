//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,
    ScrollUp,
    ScrollDown,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    NextField,

    // Dashboard actions
    RefreshVehicles,
    FetchVehicle,
    FetchMaintenance,
    SearchPair,
    SubmitRecord,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Active panel in the UI (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Panel {
    #[default]
    Vehicles,
    Lookup,
    Maintenance,
    PairSearch,
    AddRecord,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Vehicles => Panel::Lookup,
            Panel::Lookup => Panel::Maintenance,
            Panel::Maintenance => Panel::PairSearch,
            Panel::PairSearch => Panel::AddRecord,
            Panel::AddRecord => Panel::Vehicles,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Vehicles => Panel::AddRecord,
            Panel::Lookup => Panel::Vehicles,
            Panel::Maintenance => Panel::Lookup,
            Panel::PairSearch => Panel::Maintenance,
            Panel::AddRecord => Panel::PairSearch,
        }
    }

    /// Panels that carry a text input the user can edit
    pub fn editable(&self) -> bool {
        matches!(self, Panel::Lookup | Panel::PairSearch | Panel::AddRecord)
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Which of the two pair-search inputs is active
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum PairField {
    #[default]
    VehicleId,
    ServiceId,
}

impl PairField {
    pub fn next(&self) -> PairField {
        match self {
            PairField::VehicleId => PairField::ServiceId,
            PairField::ServiceId => PairField::VehicleId,
        }
    }
}

/// Which add-record form field is active
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum FormField {
    #[default]
    VehicleId,
    ServiceId,
    ServiceDate,
    PartCode,
    Rate,
    TaxableAmount,
    FinalAmount,
}

impl FormField {
    pub fn next(&self) -> FormField {
        match self {
            FormField::VehicleId => FormField::ServiceId,
            FormField::ServiceId => FormField::ServiceDate,
            FormField::ServiceDate => FormField::PartCode,
            FormField::PartCode => FormField::Rate,
            FormField::Rate => FormField::TaxableAmount,
            FormField::TaxableAmount => FormField::FinalAmount,
            FormField::FinalAmount => FormField::VehicleId,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::VehicleId => "Vehicle ID",
            FormField::ServiceId => "Service ID",
            FormField::ServiceDate => "Service Date",
            FormField::PartCode => "Part Code",
            FormField::Rate => "Rate",
            FormField::TaxableAmount => "Taxable Amount",
            FormField::FinalAmount => "Final Amount",
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => handle_normal_keys(key, active_panel),
        InputMode::Editing => handle_editing_keys(key, active_panel),
    }
}

fn handle_normal_keys(key: KeyEvent, active_panel: Panel) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Tab => Some(UiEvent::NextPanel),
        KeyCode::BackTab => Some(UiEvent::PrevPanel),
        KeyCode::Char('r') => Some(UiEvent::RefreshVehicles),
        KeyCode::Char('e') => {
            if active_panel.editable() {
                Some(UiEvent::StartEditing)
            } else {
                None
            }
        }
        KeyCode::Enter => match active_panel {
            Panel::Lookup => Some(UiEvent::FetchVehicle),
            Panel::PairSearch => Some(UiEvent::SearchPair),
            Panel::AddRecord => Some(UiEvent::SubmitRecord),
            _ => None,
        },
        KeyCode::Char('g') if active_panel == Panel::Lookup => Some(UiEvent::FetchVehicle),
        KeyCode::Char('v') if active_panel == Panel::Lookup => Some(UiEvent::FetchMaintenance),
        KeyCode::Char('s') => match active_panel {
            Panel::PairSearch => Some(UiEvent::SearchPair),
            Panel::AddRecord => Some(UiEvent::SubmitRecord),
            _ => None,
        },
        KeyCode::Up => Some(UiEvent::ScrollUp),
        KeyCode::Down => Some(UiEvent::ScrollDown),
        _ => None,
    }
}

fn handle_editing_keys(key: KeyEvent, active_panel: Panel) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::StopEditing),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Tab => Some(UiEvent::NextField),
        KeyCode::Enter => match active_panel {
            Panel::Lookup => Some(UiEvent::FetchVehicle),
            Panel::PairSearch => Some(UiEvent::SearchPair),
            Panel::AddRecord => Some(UiEvent::SubmitRecord),
            _ => Some(UiEvent::StopEditing),
        },
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let event = key_to_ui_event(press(KeyCode::Char('q')), Panel::Vehicles, InputMode::Normal, true);
        assert!(matches!(event, Some(UiEvent::CloseHelp)));
    }

    #[test]
    fn test_search_key_is_panel_scoped() {
        let on_pair = key_to_ui_event(press(KeyCode::Char('s')), Panel::PairSearch, InputMode::Normal, false);
        assert!(matches!(on_pair, Some(UiEvent::SearchPair)));

        let on_vehicles = key_to_ui_event(press(KeyCode::Char('s')), Panel::Vehicles, InputMode::Normal, false);
        assert!(on_vehicles.is_none());
    }

    #[test]
    fn test_enter_while_editing_submits_form() {
        let event = key_to_ui_event(press(KeyCode::Enter), Panel::AddRecord, InputMode::Editing, false);
        assert!(matches!(event, Some(UiEvent::SubmitRecord)));
    }

    #[test]
    fn test_form_field_cycle_wraps() {
        let mut field = FormField::VehicleId;
        for _ in 0..7 {
            field = field.next();
        }
        assert_eq!(field, FormField::VehicleId);
    }
}
