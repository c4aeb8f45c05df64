use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite};

use crate::allocation::scoring::Allocation;
use crate::models::{NewTicket, Ticket, TicketStatus};

/// Inserts a ticket in `Open` status, assigned when `assignee` is given.
pub async fn insert<'e, E>(
    executor: E,
    new: &NewTicket,
    assignee: Option<&Allocation>,
    created_at: DateTime<Utc>,
) -> sqlx::Result<Ticket>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Ticket>(
        r#"
        INSERT INTO tickets
            (title, required_skill, priority, assigned_to, technician_id, status, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&new.title)
    .bind(new.required_skill)
    .bind(new.priority)
    .bind(assignee.map(|a| a.technician_name.as_str()))
    .bind(assignee.map(|a| a.technician_id))
    .bind(TicketStatus::Open)
    .bind(created_at)
    .fetch_one(executor)
    .await
}

pub async fn list<'e, E>(executor: E) -> sqlx::Result<Vec<Ticket>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Ticket>("SELECT * FROM tickets ORDER BY id ASC")
        .fetch_all(executor)
        .await
}

pub async fn get<'e, E>(executor: E, id: i64) -> sqlx::Result<Option<Ticket>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await
}
