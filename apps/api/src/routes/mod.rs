pub mod health;

use axum::{routing::get, Router};

use crate::allocation::handlers as allocation;
use crate::dashboard::handlers as dashboard;
use crate::state::AppState;
use crate::technicians::handlers as technicians;
use crate::tickets::handlers as tickets;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Add technician
        .route(
            "/api/v1/technicians",
            get(technicians::handle_list_technicians).post(technicians::handle_create_technician),
        )
        .route(
            "/api/v1/technicians/:id",
            get(technicians::handle_get_technician),
        )
        // Create + assign ticket
        .route(
            "/api/v1/tickets",
            get(tickets::handle_list_tickets).post(tickets::handle_create_ticket),
        )
        .route("/api/v1/tickets/:id", get(tickets::handle_get_ticket))
        .route(
            "/api/v1/allocation",
            get(allocation::handle_preview_allocation),
        )
        // Dashboard
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        .with_state(state)
}
