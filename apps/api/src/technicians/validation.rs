use crate::errors::AppError;
use crate::models::NewTechnician;

pub const MIN_SKILL_LEVEL: i32 = 1;
pub const MAX_SKILL_LEVEL: i32 = 5;
/// Intake ceiling for the starting workload; assignments add to it from there.
pub const MAX_OPEN_TICKETS: i32 = 10_000;

/// Checks the numeric invariants the intake form would otherwise enforce.
/// Enumerated fields are already constrained by deserialization.
pub fn validate_new_technician(new: &NewTechnician) -> Result<(), AppError> {
    let mut problems = Vec::new();

    if new.name.trim().is_empty() {
        problems.push("name must not be empty".to_string());
    }
    if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&new.skill_level) {
        problems.push(format!(
            "skill_level must be between {MIN_SKILL_LEVEL} and {MAX_SKILL_LEVEL}, got {}",
            new.skill_level
        ));
    }
    if !(0..=MAX_OPEN_TICKETS).contains(&new.open_tickets) {
        problems.push(format!(
            "open_tickets must be between 0 and {MAX_OPEN_TICKETS}, got {}",
            new.open_tickets
        ));
    }
    if new.avg_resolution_time < 0 {
        problems.push(format!(
            "avg_resolution_time must be non-negative, got {}",
            new.avg_resolution_time
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join("; ")))
    }
}
