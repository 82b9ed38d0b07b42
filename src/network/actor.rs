//! Network actor - runs HTTP requests in the Tokio async runtime

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::ApiClient;

/// Network actor that executes API commands and reports typed responses
pub struct NetworkActor {
    client: Arc<ApiClient>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: ApiClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: Arc::new(client),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::LoadVehicles { id }) => {
                            let client = self.client.clone();
                            let response_tx = self.response_tx.clone();
                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Loading vehicles");
                                let result = client.vehicles().await.map_err(|e| e.to_string());
                                tracing::info!(id, ok = result.is_ok(), "Vehicles request completed");
                                let _ = response_tx.send(NetworkResponse::Vehicles { id, result });
                            });
                        }

                        Some(NetworkCommand::FetchVehicle { id, vehicle_id }) => {
                            let client = self.client.clone();
                            let response_tx = self.response_tx.clone();
                            self.active_requests.spawn(async move {
                                tracing::info!(id, vehicle_id = %vehicle_id, "Fetching vehicle detail");
                                let result = client.vehicle(&vehicle_id).await.map_err(|e| e.to_string());
                                tracing::info!(id, ok = result.is_ok(), "Detail request completed");
                                let _ = response_tx.send(NetworkResponse::VehicleDetail { id, result });
                            });
                        }

                        Some(NetworkCommand::FetchMaintenance { id, vehicle_id }) => {
                            let client = self.client.clone();
                            let response_tx = self.response_tx.clone();
                            self.active_requests.spawn(async move {
                                tracing::info!(id, vehicle_id = %vehicle_id, "Fetching maintenance history");
                                let result = client.maintenance(&vehicle_id).await.map_err(|e| e.to_string());
                                tracing::info!(id, ok = result.is_ok(), "Maintenance request completed");
                                let _ = response_tx.send(NetworkResponse::Maintenance { id, result });
                            });
                        }

                        Some(NetworkCommand::FetchPairMaintenance { id, vehicle_id, service_id }) => {
                            let client = self.client.clone();
                            let response_tx = self.response_tx.clone();
                            self.active_requests.spawn(async move {
                                tracing::info!(id, vehicle_id = %vehicle_id, service_id = %service_id, "Searching maintenance by pair");
                                let result = client
                                    .maintenance_by_pair(&vehicle_id, &service_id)
                                    .await
                                    .map_err(|e| e.to_string());
                                tracing::info!(id, ok = result.is_ok(), "Pair search completed");
                                let _ = response_tx.send(NetworkResponse::PairMaintenance { id, result });
                            });
                        }

                        Some(NetworkCommand::AddMaintenance { id, vehicle_id, service_id, record }) => {
                            let client = self.client.clone();
                            let response_tx = self.response_tx.clone();
                            self.active_requests.spawn(async move {
                                tracing::info!(id, vehicle_id = %vehicle_id, service_id = %service_id, "Creating maintenance record");
                                let result = client
                                    .add_maintenance(&vehicle_id, &service_id, &record)
                                    .await
                                    .map_err(|e| e.to_string());
                                tracing::info!(id, ok = result.is_ok(), "Create request completed");
                                let _ = response_tx.send(NetworkResponse::MaintenanceAdded {
                                    id,
                                    vehicle_id,
                                    result,
                                });
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
