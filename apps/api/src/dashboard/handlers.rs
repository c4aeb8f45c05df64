//! Axum route handler for the dashboard view.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::dashboard::workload::{summarize, workload_series, DashboardSummary, WorkloadBar};
use crate::errors::AppError;
use crate::models::{Technician, Ticket};
use crate::state::AppState;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub technicians: Vec<Technician>,
    pub workload: Vec<WorkloadBar>,
    pub tickets: Vec<Ticket>,
    pub summary: DashboardSummary,
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let technicians = state.store.list_technicians().await?;
    let tickets = state.store.list_tickets().await?;

    Ok(Json(DashboardResponse {
        workload: workload_series(&technicians),
        summary: summarize(&technicians, &tickets),
        technicians,
        tickets,
    }))
}
