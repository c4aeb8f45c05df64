use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::{NewTicket, Ticket};
use crate::state::AppState;
use crate::tickets::assignment::{create_and_assign, AssignedTicket};

/// GET /api/v1/tickets
pub async fn handle_list_tickets(
    State(state): State<AppState>,
) -> Result<Json<Vec<Ticket>>, AppError> {
    Ok(Json(state.store.list_tickets().await?))
}

/// POST /api/v1/tickets
/// Allocates a technician and stores the ticket; 409 when nobody is available.
pub async fn handle_create_ticket(
    State(state): State<AppState>,
    Json(req): Json<NewTicket>,
) -> Result<(StatusCode, Json<AssignedTicket>), AppError> {
    let assigned = create_and_assign(&state.store, &req, &state.weights).await?;
    Ok((StatusCode::CREATED, Json(assigned)))
}

/// GET /api/v1/tickets/:id
pub async fn handle_get_ticket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Ticket>, AppError> {
    state
        .store
        .get_ticket(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Ticket {id} not found")))
}
