use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::allocation::engine::allocate;
use crate::allocation::scoring::Allocation;
use crate::errors::AppError;
use crate::models::Skill;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AllocationQuery {
    pub skill: Skill,
}

#[derive(Serialize)]
pub struct AllocationPreview {
    pub skill: Skill,
    /// `None` when no Available technician has the skill.
    pub allocation: Option<Allocation>,
}

/// GET /api/v1/allocation?skill=Network
/// Runs the allocation without assigning anything.
pub async fn handle_preview_allocation(
    State(state): State<AppState>,
    Query(params): Query<AllocationQuery>,
) -> Result<Json<AllocationPreview>, AppError> {
    let allocation = allocate(&state.store, params.skill, &state.weights).await?;
    Ok(Json(AllocationPreview {
        skill: params.skill,
        allocation,
    }))
}
