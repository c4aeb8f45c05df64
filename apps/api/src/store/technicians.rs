use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite};

use crate::models::{Availability, NewTechnician, Skill, Technician};

pub async fn insert<'e, E>(
    executor: E,
    new: &NewTechnician,
    created_at: DateTime<Utc>,
) -> sqlx::Result<Technician>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Technician>(
        r#"
        INSERT INTO technicians
            (name, skill, skill_level, open_tickets, avg_resolution_time, availability, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&new.name)
    .bind(new.skill)
    .bind(new.skill_level)
    .bind(new.open_tickets)
    .bind(new.avg_resolution_time)
    .bind(new.availability)
    .bind(created_at)
    .fetch_one(executor)
    .await
}

/// Technicians with the given skill and availability, ascending id.
pub async fn query<'e, E>(
    executor: E,
    skill: Skill,
    availability: Availability,
) -> sqlx::Result<Vec<Technician>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Technician>(
        "SELECT * FROM technicians WHERE skill = ? AND availability = ? ORDER BY id ASC",
    )
    .bind(skill)
    .bind(availability)
    .fetch_all(executor)
    .await
}

pub async fn list<'e, E>(executor: E) -> sqlx::Result<Vec<Technician>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Technician>("SELECT * FROM technicians ORDER BY id ASC")
        .fetch_all(executor)
        .await
}

pub async fn get<'e, E>(executor: E, id: i64) -> sqlx::Result<Option<Technician>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Technician>("SELECT * FROM technicians WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Returns the number of rows touched: 0 if the id does not exist or the
/// counter is already at `i32::MAX`.
pub async fn increment_open_tickets<'e, E>(executor: E, id: i64) -> sqlx::Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        r#"
        UPDATE technicians
        SET open_tickets = open_tickets + 1
        WHERE id = ? AND open_tickets < ?
        "#,
    )
    .bind(id)
    .bind(i32::MAX)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
