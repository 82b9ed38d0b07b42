//! App state - pure data structure with no I/O logic

use crate::messages::ui_events::{FormField, InputMode, PairField, Panel};
use crate::messages::RenderState;
use crate::models::{MaintenanceForm, MaintenanceRecord, Vehicle};

/// Main application state - pure data, no I/O.
///
/// Each fetching panel owns a slice of state: its data, a loading flag, an
/// error string, and the id of its pending request. Responses whose id no
/// longer matches the pending id are stale and get discarded.
pub struct AppState {
    // Focus
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub next_request_id: u64,
    pub base_url: String,

    // Vehicle list
    pub vehicles: Vec<Vehicle>,
    pub vehicles_loading: bool,
    pub vehicles_error: String,
    pub vehicles_pending: Option<u64>,
    pub vehicles_scroll: u16,

    // Lookup panel: one id drives both the detail view and the
    // vehicle-scoped maintenance list
    pub lookup_id: String,
    pub detail: Option<Vehicle>,
    pub detail_loading: bool,
    pub detail_error: String,
    pub detail_pending: Option<u64>,

    // Vehicle-scoped maintenance
    pub maintenance: Vec<MaintenanceRecord>,
    pub maintenance_loading: bool,
    pub maintenance_error: String,
    pub maintenance_pending: Option<u64>,
    pub maintenance_scroll: u16,

    // Pair search: two ids independent of the lookup panel
    pub pair_vehicle_id: String,
    pub pair_service_id: String,
    pub pair_field: PairField,
    pub pair_records: Vec<MaintenanceRecord>,
    pub pair_loading: bool,
    pub pair_error: String,
    pub pair_pending: Option<u64>,
    pub pair_scroll: u16,

    // Add-record form
    pub form: MaintenanceForm,
    pub form_field: FormField,
    pub create_loading: bool,
    pub create_message: String,
    pub create_error: String,
    pub create_pending: Option<u64>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            active_panel: Panel::Vehicles,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            next_request_id: 1,
            base_url: crate::constants::base_url(),
            vehicles: Vec::new(),
            vehicles_loading: false,
            vehicles_error: String::new(),
            vehicles_pending: None,
            vehicles_scroll: 0,
            lookup_id: String::new(),
            detail: None,
            detail_loading: false,
            detail_error: String::new(),
            detail_pending: None,
            maintenance: Vec::new(),
            maintenance_loading: false,
            maintenance_error: String::new(),
            maintenance_pending: None,
            maintenance_scroll: 0,
            pair_vehicle_id: String::new(),
            pair_service_id: String::new(),
            pair_field: PairField::VehicleId,
            pair_records: Vec::new(),
            pair_loading: false,
            pair_error: String::new(),
            pair_pending: None,
            pair_scroll: 0,
            form: MaintenanceForm::default(),
            form_field: FormField::VehicleId,
            create_loading: false,
            create_message: String::new(),
            create_error: String::new(),
            create_pending: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_panel {
            Panel::Lookup => &self.lookup_id,
            Panel::PairSearch => match self.pair_field {
                PairField::VehicleId => &self.pair_vehicle_id,
                PairField::ServiceId => &self.pair_service_id,
            },
            Panel::AddRecord => match self.form_field {
                FormField::VehicleId => &self.form.vehicle_id,
                FormField::ServiceId => &self.form.service_id,
                FormField::ServiceDate => &self.form.service_date,
                FormField::PartCode => &self.form.part_code,
                FormField::Rate => &self.form.rate,
                FormField::TaxableAmount => &self.form.taxable_amount,
                FormField::FinalAmount => &self.form.final_amount,
            },
            _ => "",
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.active_panel {
            Panel::PairSearch => match self.pair_field {
                PairField::VehicleId => &mut self.pair_vehicle_id,
                PairField::ServiceId => &mut self.pair_service_id,
            },
            Panel::AddRecord => match self.form_field {
                FormField::VehicleId => &mut self.form.vehicle_id,
                FormField::ServiceId => &mut self.form.service_id,
                FormField::ServiceDate => &mut self.form.service_date,
                FormField::PartCode => &mut self.form.part_code,
                FormField::Rate => &mut self.form.rate,
                FormField::TaxableAmount => &mut self.form.taxable_amount,
                FormField::FinalAmount => &mut self.form.final_amount,
            },
            // Lookup, plus a harmless fallback for non-editable panels
            _ => &mut self.lookup_id,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            base_url: self.base_url.clone(),
            vehicles: self.vehicles.clone(),
            vehicles_loading: self.vehicles_loading,
            vehicles_error: self.vehicles_error.clone(),
            vehicles_scroll: self.vehicles_scroll,
            lookup_id: self.lookup_id.clone(),
            detail: self.detail.clone(),
            detail_loading: self.detail_loading,
            detail_error: self.detail_error.clone(),
            maintenance: self.maintenance.clone(),
            maintenance_loading: self.maintenance_loading,
            maintenance_error: self.maintenance_error.clone(),
            maintenance_scroll: self.maintenance_scroll,
            pair_vehicle_id: self.pair_vehicle_id.clone(),
            pair_service_id: self.pair_service_id.clone(),
            pair_field: self.pair_field,
            pair_records: self.pair_records.clone(),
            pair_loading: self.pair_loading,
            pair_error: self.pair_error.clone(),
            pair_scroll: self.pair_scroll,
            form: self.form.clone(),
            form_field: self.form_field,
            create_loading: self.create_loading,
            create_message: self.create_message.clone(),
            create_error: self.create_error.clone(),
            show_help: self.show_help,
        }
    }
}
