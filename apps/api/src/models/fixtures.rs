use chrono::Utc;

use crate::models::{Availability, NewTechnician, Skill, Technician};

pub fn technician(
    id: i64,
    name: &str,
    skill: Skill,
    skill_level: i32,
    open_tickets: i32,
    avg_resolution_time: i32,
    availability: Availability,
) -> Technician {
    Technician {
        id,
        name: name.to_string(),
        skill,
        skill_level,
        open_tickets,
        avg_resolution_time,
        availability,
        created_at: Utc::now(),
    }
}

pub fn new_technician(
    name: &str,
    skill: Skill,
    skill_level: i32,
    open_tickets: i32,
    avg_resolution_time: i32,
    availability: Availability,
) -> NewTechnician {
    NewTechnician {
        name: name.to_string(),
        skill,
        skill_level,
        open_tickets,
        avg_resolution_time,
        availability,
    }
}
