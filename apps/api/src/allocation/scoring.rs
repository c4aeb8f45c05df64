//! Technician ranking score and the pure best-candidate selection.

use serde::{Deserialize, Serialize};

use crate::models::{Availability, Skill, Technician};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Reward per skill level point.
    pub skill_level: f64,
    /// Penalty per open ticket.
    pub open_tickets: f64,
    /// Average resolution minutes are divided by this before being subtracted.
    pub resolution_time_divisor: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_level: 2.0,
            open_tickets: 1.5,
            resolution_time_divisor: 10.0,
        }
    }
}

/// The winning candidate of an allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub technician_id: i64,
    pub technician_name: String,
    pub score: f64,
}

/// Ranking score: skill_level*2 - open_tickets*1.5 - avg_resolution_time/10 with default weights.
/// Real-valued throughout; the resolution term is never truncated.
pub fn compute_score(
    skill_level: i32,
    open_tickets: i32,
    avg_resolution_time: i32,
    weights: &ScoringWeights,
) -> f64 {
    f64::from(skill_level) * weights.skill_level
        - f64::from(open_tickets) * weights.open_tickets
        - f64::from(avg_resolution_time) / weights.resolution_time_divisor
}

pub fn score_technician(tech: &Technician, weights: &ScoringWeights) -> f64 {
    compute_score(
        tech.skill_level,
        tech.open_tickets,
        tech.avg_resolution_time,
        weights,
    )
}

/// Selects the highest-scoring Available technician with `required_skill` from `pool`.
///
/// Candidates that do not match are skipped, so any pool may be passed in.
/// Ties keep the earliest candidate in `pool` order; callers wanting reproducible
/// results must pass a stably ordered pool (the store orders by id).
pub fn choose(
    pool: &[Technician],
    required_skill: Skill,
    weights: &ScoringWeights,
) -> Option<Allocation> {
    let mut best: Option<Allocation> = None;

    for tech in pool
        .iter()
        .filter(|t| t.skill == required_skill && t.availability == Availability::Available)
    {
        let score = score_technician(tech, weights);
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(Allocation {
                technician_id: tech.id,
                technician_name: tech.name.clone(),
                score,
            });
        }
    }

    best
}
