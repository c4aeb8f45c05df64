//! Allocation entry point over an injected technician directory.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::allocation::scoring::{choose, Allocation, ScoringWeights};
use crate::errors::AppError;
use crate::models::{Availability, Skill, Technician};

/// Read-only view of technicians used by allocation.
///
/// Implementations must return technicians in a stable order (ascending id for
/// the SQLite store) so that ties resolve the same way on every call.
#[async_trait]
pub trait TechnicianDirectory: Send + Sync {
    async fn query_technicians(
        &self,
        skill: Skill,
        availability: Availability,
    ) -> Result<Vec<Technician>, AppError>;
}

/// Returns the best Available technician for `required_skill`, or `None` when
/// nobody qualifies. Has no side effects; recording the assignment is up to the caller.
pub async fn allocate(
    directory: &dyn TechnicianDirectory,
    required_skill: Skill,
    weights: &ScoringWeights,
) -> Result<Option<Allocation>, AppError> {
    let candidates = directory
        .query_technicians(required_skill, Availability::Available)
        .await?;

    let allocation = choose(&candidates, required_skill, weights);
    match &allocation {
        Some(a) => info!(
            "Allocated {} (id {}) for {required_skill} with score {:.2} among {} candidates",
            a.technician_name,
            a.technician_id,
            a.score,
            candidates.len()
        ),
        None => warn!("No available technician for {required_skill}"),
    }

    Ok(allocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::technician;
    use crate::models::Availability::{Available, Busy};

    /// Returns the whole roster regardless of the filter, to prove `allocate` re-checks it.
    struct Roster(Vec<Technician>);

    #[async_trait]
    impl TechnicianDirectory for Roster {
        async fn query_technicians(
            &self,
            _skill: Skill,
            _availability: Availability,
        ) -> Result<Vec<Technician>, AppError> {
            Ok(self.0.clone())
        }
    }

    struct Unreachable;

    #[async_trait]
    impl TechnicianDirectory for Unreachable {
        async fn query_technicians(
            &self,
            _skill: Skill,
            _availability: Availability,
        ) -> Result<Vec<Technician>, AppError> {
            Err(AppError::Database(sqlx::Error::PoolClosed))
        }
    }

    fn roster() -> Roster {
        Roster(vec![
            technician(1, "Alice", Skill::Network, 5, 1, 20, Available),
            technician(2, "Bob", Skill::Network, 3, 0, 10, Available),
            technician(3, "Carol", Skill::Security, 5, 0, 10, Busy),
            technician(4, "Dave", Skill::Hardware, 2, 2, 45, Available),
        ])
    }

    #[tokio::test]
    async fn test_allocate_picks_highest_score() {
        let result = allocate(&roster(), Skill::Network, &ScoringWeights::default())
            .await
            .unwrap();
        assert_eq!(result.unwrap().technician_name, "Alice");
    }

    #[tokio::test]
    async fn test_allocate_none_when_only_busy_match() {
        let result = allocate(&roster(), Skill::Security, &ScoringWeights::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_allocate_none_when_skill_absent() {
        let result = allocate(&roster(), Skill::Software, &ScoringWeights::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_allocate_result_always_matches_filter() {
        let directory = roster();
        for skill in Skill::ALL {
            if let Some(a) = allocate(&directory, skill, &ScoringWeights::default())
                .await
                .unwrap()
            {
                let tech = directory.0.iter().find(|t| t.id == a.technician_id).unwrap();
                assert_eq!(tech.skill, skill);
                assert_eq!(tech.availability, Available);
                assert_eq!(tech.name, a.technician_name);
            }
        }
    }

    #[tokio::test]
    async fn test_allocate_propagates_store_failure() {
        let err = allocate(&Unreachable, Skill::Network, &ScoringWeights::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
