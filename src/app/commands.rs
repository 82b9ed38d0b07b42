//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.active_panel.editable() {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.current_input().len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    /// Move to the next input of a multi-field panel
    pub fn next_field(&mut self) {
        match self.active_panel {
            Panel::PairSearch => self.pair_field = self.pair_field.next(),
            Panel::AddRecord => self.form_field = self.form_field.next(),
            _ => return,
        }
        self.cursor_position = self.current_input().len();
    }

    // ========================
    // Table scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        match self.active_panel {
            Panel::Vehicles => self.vehicles_scroll = self.vehicles_scroll.saturating_sub(1),
            Panel::Maintenance => {
                self.maintenance_scroll = self.maintenance_scroll.saturating_sub(1)
            }
            Panel::PairSearch => self.pair_scroll = self.pair_scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn scroll_down(&mut self) {
        match self.active_panel {
            Panel::Vehicles => self.vehicles_scroll = self.vehicles_scroll.saturating_add(1),
            Panel::Maintenance => {
                self.maintenance_scroll = self.maintenance_scroll.saturating_add(1)
            }
            Panel::PairSearch => self.pair_scroll = self.pair_scroll.saturating_add(1),
            _ => {}
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Actions
    // ========================

    /// Load the full vehicle list (startup and manual refresh)
    pub fn load_vehicles(&mut self) -> Option<NetworkCommand> {
        if self.vehicles_loading {
            return None;
        }

        self.vehicles_loading = true;
        self.vehicles_error.clear();

        let id = self.next_id();
        self.vehicles_pending = Some(id);
        Some(NetworkCommand::LoadVehicles { id })
    }

    /// Fetch the detail of the vehicle named by the lookup input. A blank id
    /// is a no-op: no request, no state change.
    pub fn fetch_vehicle(&mut self) -> Option<NetworkCommand> {
        let vehicle_id = self.lookup_id.trim().to_string();
        if vehicle_id.is_empty() || self.detail_loading {
            return None;
        }

        self.detail_loading = true;
        self.detail_error.clear();
        self.detail = None;

        let id = self.next_id();
        self.detail_pending = Some(id);
        Some(NetworkCommand::FetchVehicle { id, vehicle_id })
    }

    /// Fetch the maintenance history of the vehicle named by the lookup input
    pub fn fetch_maintenance(&mut self) -> Option<NetworkCommand> {
        let vehicle_id = self.lookup_id.trim().to_string();
        if vehicle_id.is_empty() || self.maintenance_loading {
            return None;
        }

        self.maintenance_loading = true;
        self.maintenance_error.clear();
        self.maintenance.clear();
        self.maintenance_scroll = 0;

        let id = self.next_id();
        self.maintenance_pending = Some(id);
        Some(NetworkCommand::FetchMaintenance { id, vehicle_id })
    }

    /// Search maintenance records by vehicle id + service id pair
    pub fn search_pair(&mut self) -> Option<NetworkCommand> {
        let vehicle_id = self.pair_vehicle_id.trim().to_string();
        let service_id = self.pair_service_id.trim().to_string();
        if vehicle_id.is_empty() || service_id.is_empty() || self.pair_loading {
            return None;
        }

        self.pair_loading = true;
        self.pair_error.clear();
        self.pair_records.clear();
        self.pair_scroll = 0;

        let id = self.next_id();
        self.pair_pending = Some(id);
        Some(NetworkCommand::FetchPairMaintenance {
            id,
            vehicle_id,
            service_id,
        })
    }

    /// Submit the add-record form. Missing ids raise a local validation error
    /// without issuing a request.
    pub fn submit_record(&mut self) -> Option<NetworkCommand> {
        self.create_message.clear();
        self.create_error.clear();

        if !self.form.has_required_ids() {
            self.create_error = String::from("Vehicle ID and Service ID are required.");
            return None;
        }
        if self.create_loading {
            return None;
        }

        self.create_loading = true;

        let id = self.next_id();
        self.create_pending = Some(id);
        Some(NetworkCommand::AddMaintenance {
            id,
            vehicle_id: self.form.vehicle_id.trim().to_string(),
            service_id: self.form.service_id.trim().to_string(),
            record: self.form.to_payload(),
        })
    }

    // ========================
    // Response handling
    // ========================

    /// Apply a network response. A successful submission whose vehicle id
    /// matches the current lookup id yields a follow-up maintenance fetch.
    pub fn handle_response(&mut self, response: NetworkResponse) -> Option<NetworkCommand> {
        match response {
            NetworkResponse::Vehicles { id, result } => {
                if self.vehicles_pending != Some(id) {
                    return None;
                }
                self.vehicles_pending = None;
                self.vehicles_loading = false;
                match result {
                    Ok(list) => {
                        self.vehicles = list;
                        self.vehicles_scroll = 0;
                    }
                    Err(message) => {
                        self.vehicles_error = message;
                        self.vehicles.clear();
                    }
                }
                None
            }

            NetworkResponse::VehicleDetail { id, result } => {
                if self.detail_pending != Some(id) {
                    return None;
                }
                self.detail_pending = None;
                self.detail_loading = false;
                match result {
                    Ok(vehicle) => self.detail = Some(vehicle),
                    Err(message) => self.detail_error = message,
                }
                None
            }

            NetworkResponse::Maintenance { id, result } => {
                if self.maintenance_pending != Some(id) {
                    return None;
                }
                self.maintenance_pending = None;
                self.maintenance_loading = false;
                match result {
                    Ok(list) => self.maintenance = list,
                    Err(message) => self.maintenance_error = message,
                }
                None
            }

            NetworkResponse::PairMaintenance { id, result } => {
                if self.pair_pending != Some(id) {
                    return None;
                }
                self.pair_pending = None;
                self.pair_loading = false;
                match result {
                    Ok(list) => self.pair_records = list,
                    Err(message) => self.pair_error = message,
                }
                None
            }

            NetworkResponse::MaintenanceAdded {
                id,
                vehicle_id,
                result,
            } => {
                if self.create_pending != Some(id) {
                    return None;
                }
                self.create_pending = None;
                self.create_loading = false;
                match result {
                    Ok(message) => {
                        self.create_message = message;
                        if self.lookup_id.trim() == vehicle_id {
                            return self.fetch_maintenance();
                        }
                        None
                    }
                    Err(message) => {
                        self.create_error = message;
                        None
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MaintenanceRecord, Vehicle};

    fn vehicle(id: i64) -> Vehicle {
        Vehicle {
            id,
            make: "Honda".to_string(),
            model: "CB500".to_string(),
            year: 2020,
            mileage: 12000,
        }
    }

    fn record(service_id: i64, vehicle_id: i64) -> MaintenanceRecord {
        MaintenanceRecord {
            service_id,
            vehicle_id,
            service_date: "2024-03-01".to_string(),
            part_code: "OIL-FLTR".to_string(),
            rate: 10.5,
            taxable_amount: 2.0,
            final_amount: 12.5,
        }
    }

    #[test]
    fn test_blank_lookup_id_is_a_no_op() {
        let mut state = AppState::new();
        state.lookup_id = "   ".to_string();

        assert!(state.fetch_vehicle().is_none());
        assert!(state.fetch_maintenance().is_none());
        assert!(!state.detail_loading);
        assert!(!state.maintenance_loading);
        // No request id was consumed
        assert_eq!(state.next_request_id, 1);
    }

    #[test]
    fn test_pair_search_requires_both_ids() {
        let mut state = AppState::new();
        state.pair_vehicle_id = "1".to_string();
        assert!(state.search_pair().is_none());

        state.pair_service_id = "101".to_string();
        let cmd = state.search_pair();
        assert!(matches!(
            cmd,
            Some(NetworkCommand::FetchPairMaintenance { ref vehicle_id, ref service_id, .. })
                if vehicle_id == "1" && service_id == "101"
        ));
        assert!(state.pair_loading);
    }

    #[test]
    fn test_submit_without_ids_sets_validation_error() {
        let mut state = AppState::new();
        state.form.vehicle_id = "1".to_string();

        assert!(state.submit_record().is_none());
        assert_eq!(state.create_error, "Vehicle ID and Service ID are required.");
        assert!(!state.create_loading);
        assert_eq!(state.next_request_id, 1);
    }

    #[test]
    fn test_submit_parses_numeric_fields() {
        let mut state = AppState::new();
        state.form.vehicle_id = "1".to_string();
        state.form.service_id = "101".to_string();
        state.form.rate = "10.5".to_string();
        state.form.taxable_amount = String::new();
        state.form.final_amount = "12".to_string();

        match state.submit_record() {
            Some(NetworkCommand::AddMaintenance { record, .. }) => {
                assert_eq!(record.rate, 10.5);
                assert_eq!(record.taxable_amount, 0.0);
                assert_eq!(record.final_amount, 12.0);
            }
            other => panic!("expected AddMaintenance, got {:?}", other),
        }
        assert!(state.create_loading);
    }

    #[test]
    fn test_vehicles_error_clears_list() {
        let mut state = AppState::new();
        state.vehicles = vec![vehicle(1)];

        let cmd = state.load_vehicles().expect("command");
        let id = match cmd {
            NetworkCommand::LoadVehicles { id } => id,
            other => panic!("expected LoadVehicles, got {:?}", other),
        };

        let follow_up = state.handle_response(NetworkResponse::Vehicles {
            id,
            result: Err("db error".to_string()),
        });
        assert!(follow_up.is_none());
        assert_eq!(state.vehicles_error, "db error");
        assert!(state.vehicles.is_empty());
        assert!(!state.vehicles_loading);
    }

    #[test]
    fn test_successful_fetch_replaces_list() {
        let mut state = AppState::new();
        state.lookup_id = "1".to_string();
        state.maintenance = vec![record(99, 1)];

        let cmd = state.fetch_maintenance().expect("command");
        // The previous list is cleared as soon as the fetch begins
        assert!(state.maintenance.is_empty());

        let id = match cmd {
            NetworkCommand::FetchMaintenance { id, .. } => id,
            other => panic!("expected FetchMaintenance, got {:?}", other),
        };
        state.handle_response(NetworkResponse::Maintenance {
            id,
            result: Ok(vec![record(101, 1), record(102, 1)]),
        });
        assert_eq!(state.maintenance.len(), 2);
        assert!(!state.maintenance_loading);
        assert!(state.maintenance_error.is_empty());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = AppState::new();
        state.detail_loading = true;
        state.detail_pending = Some(7);

        let follow_up = state.handle_response(NetworkResponse::VehicleDetail {
            id: 6,
            result: Ok(vehicle(1)),
        });
        assert!(follow_up.is_none());
        assert!(state.detail.is_none());
        assert!(state.detail_loading);
        assert_eq!(state.detail_pending, Some(7));
    }

    #[test]
    fn test_submission_refetches_when_lookup_matches() {
        let mut state = AppState::new();
        state.lookup_id = "1".to_string();
        state.create_pending = Some(3);
        state.create_loading = true;

        let follow_up = state.handle_response(NetworkResponse::MaintenanceAdded {
            id: 3,
            vehicle_id: "1".to_string(),
            result: Ok("stored".to_string()),
        });
        assert_eq!(state.create_message, "stored");
        assert!(matches!(
            follow_up,
            Some(NetworkCommand::FetchMaintenance { ref vehicle_id, .. }) if vehicle_id == "1"
        ));
    }

    #[test]
    fn test_submission_skips_refetch_when_lookup_differs() {
        let mut state = AppState::new();
        state.lookup_id = "2".to_string();
        state.create_pending = Some(3);
        state.create_loading = true;

        let follow_up = state.handle_response(NetworkResponse::MaintenanceAdded {
            id: 3,
            vehicle_id: "1".to_string(),
            result: Ok("stored".to_string()),
        });
        assert!(follow_up.is_none());
        assert!(!state.create_loading);
    }

    #[test]
    fn test_failed_submission_sets_error() {
        let mut state = AppState::new();
        state.create_pending = Some(3);
        state.create_loading = true;

        state.handle_response(NetworkResponse::MaintenanceAdded {
            id: 3,
            vehicle_id: "1".to_string(),
            result: Err("db error".to_string()),
        });
        assert_eq!(state.create_error, "db error");
        assert!(state.create_message.is_empty());
        assert!(!state.create_loading);
    }

    #[test]
    fn test_detail_cleared_when_fetch_begins() {
        let mut state = AppState::new();
        state.lookup_id = "1".to_string();
        state.detail = Some(vehicle(1));

        state.fetch_vehicle().expect("command");
        assert!(state.detail.is_none());
        assert!(state.detail_loading);
    }
}
