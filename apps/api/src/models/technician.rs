use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Skill categories a technician can hold and a ticket can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum Skill {
    Network,
    Server,
    Security,
    Hardware,
    Software,
}

impl Skill {
    pub const ALL: [Skill; 5] = [
        Skill::Network,
        Skill::Server,
        Skill::Security,
        Skill::Hardware,
        Skill::Software,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Network => "Network",
            Skill::Server => "Server",
            Skill::Security => "Security",
            Skill::Hardware => "Hardware",
            Skill::Software => "Software",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
pub enum Availability {
    #[default]
    Available,
    Busy,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Technician {
    pub id: i64,
    pub name: String,
    pub skill: Skill,
    /// 1 (novice) to 5 (expert).
    pub skill_level: i32,
    /// Active workload. Incremented on every new assignment.
    pub open_tickets: i32,
    /// Historical average in minutes. Entered by hand, never recomputed.
    pub avg_resolution_time: i32,
    pub availability: Availability,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a technician. Defaults mirror the intake form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTechnician {
    pub name: String,
    pub skill: Skill,
    #[serde(default = "default_skill_level")]
    pub skill_level: i32,
    #[serde(default)]
    pub open_tickets: i32,
    #[serde(default = "default_avg_resolution_time")]
    pub avg_resolution_time: i32,
    #[serde(default)]
    pub availability: Availability,
}

fn default_skill_level() -> i32 {
    1
}

fn default_avg_resolution_time() -> i32 {
    10
}
