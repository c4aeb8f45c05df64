use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::{NewTechnician, Technician};
use crate::state::AppState;
use crate::technicians::validation::validate_new_technician;

/// GET /api/v1/technicians
pub async fn handle_list_technicians(
    State(state): State<AppState>,
) -> Result<Json<Vec<Technician>>, AppError> {
    Ok(Json(state.store.list_technicians().await?))
}

/// POST /api/v1/technicians
pub async fn handle_create_technician(
    State(state): State<AppState>,
    Json(req): Json<NewTechnician>,
) -> Result<(StatusCode, Json<Technician>), AppError> {
    validate_new_technician(&req)?;
    let technician = state.store.insert_technician(&req).await?;
    Ok((StatusCode::CREATED, Json(technician)))
}

/// GET /api/v1/technicians/:id
pub async fn handle_get_technician(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Technician>, AppError> {
    state
        .store
        .get_technician(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Technician {id} not found")))
}
