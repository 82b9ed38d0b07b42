//! Network messages - communication between App and Network layers

use crate::models::{MaintenanceRecord, NewMaintenance, Vehicle};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the full vehicle list
    LoadVehicles { id: u64 },
    /// Fetch a single vehicle by id
    FetchVehicle { id: u64, vehicle_id: String },
    /// Fetch the maintenance history of a vehicle
    FetchMaintenance { id: u64, vehicle_id: String },
    /// Fetch maintenance records for a vehicle id + service id pair
    FetchPairMaintenance {
        id: u64,
        vehicle_id: String,
        service_id: String,
    },
    /// Create a maintenance record under a vehicle id + service id pair
    AddMaintenance {
        id: u64,
        vehicle_id: String,
        service_id: String,
        record: NewMaintenance,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer. Errors are already
/// formatted as display strings (response body text, or a generic status
/// message when the body was empty).
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    Vehicles {
        id: u64,
        result: Result<Vec<Vehicle>, String>,
    },
    VehicleDetail {
        id: u64,
        result: Result<Vehicle, String>,
    },
    Maintenance {
        id: u64,
        result: Result<Vec<MaintenanceRecord>, String>,
    },
    PairMaintenance {
        id: u64,
        result: Result<Vec<MaintenanceRecord>, String>,
    },
    /// Carries the submitted vehicle id so the app can decide whether the
    /// vehicle-scoped maintenance list needs a refetch
    MaintenanceAdded {
        id: u64,
        vehicle_id: String,
        result: Result<String, String>,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Vehicles { id, .. } => *id,
            NetworkResponse::VehicleDetail { id, .. } => *id,
            NetworkResponse::Maintenance { id, .. } => *id,
            NetworkResponse::PairMaintenance { id, .. } => *id,
            NetworkResponse::MaintenanceAdded { id, .. } => *id,
        }
    }
}
