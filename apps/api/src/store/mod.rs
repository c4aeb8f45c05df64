//! Entity Store: typed access to the `technicians` and `tickets` tables.
//!
//! Reads go straight to the pool. Writes go through a [`Writer`], which holds the
//! store-wide write lock so inserts (and allocate-then-assign sequences) never
//! interleave between concurrent requests.

pub mod technicians;
pub mod tickets;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::allocation::engine::TechnicianDirectory;
use crate::allocation::scoring::Allocation;
use crate::errors::AppError;
use crate::models::{Availability, NewTechnician, NewTicket, Skill, Technician, Ticket};

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
    write_lock: Arc<Mutex<()>>,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Acquires the single-writer lock. Reads stay available while it is held.
    pub async fn writer(&self) -> Writer<'_> {
        Writer {
            pool: &self.pool,
            _guard: self.write_lock.lock().await,
        }
    }

    pub async fn insert_technician(&self, new: &NewTechnician) -> sqlx::Result<Technician> {
        self.writer().await.insert_technician(new).await
    }

    pub async fn list_technicians(&self) -> sqlx::Result<Vec<Technician>> {
        technicians::list(&self.pool).await
    }

    pub async fn get_technician(&self, id: i64) -> sqlx::Result<Option<Technician>> {
        technicians::get(&self.pool, id).await
    }

    pub async fn list_tickets(&self) -> sqlx::Result<Vec<Ticket>> {
        tickets::list(&self.pool).await
    }

    pub async fn get_ticket(&self, id: i64) -> sqlx::Result<Option<Ticket>> {
        tickets::get(&self.pool, id).await
    }
}

#[async_trait]
impl TechnicianDirectory for Store {
    async fn query_technicians(
        &self,
        skill: Skill,
        availability: Availability,
    ) -> Result<Vec<Technician>, AppError> {
        Ok(technicians::query(&self.pool, skill, availability).await?)
    }
}

/// Write handle. Dropping it releases the store's write lock.
pub struct Writer<'a> {
    pool: &'a SqlitePool,
    _guard: MutexGuard<'a, ()>,
}

impl Writer<'_> {
    pub async fn insert_technician(&self, new: &NewTechnician) -> sqlx::Result<Technician> {
        let tech = technicians::insert(self.pool, new, Utc::now()).await?;
        info!(
            "Inserted technician {} '{}' ({} level {})",
            tech.id, tech.name, tech.skill, tech.skill_level
        );
        Ok(tech)
    }

    /// Inserts an unassigned ticket.
    ///
    /// Not routed over HTTP: tickets enter through create-and-assign, and with no
    /// re-assignment an unassigned row would never get a technician.
    #[allow(dead_code)]
    pub async fn insert_ticket(&self, new: &NewTicket) -> sqlx::Result<Ticket> {
        let ticket = tickets::insert(self.pool, new, None, Utc::now()).await?;
        info!("Inserted unassigned ticket {} '{}'", ticket.id, ticket.title);
        Ok(ticket)
    }

    /// Inserts the ticket assigned to the allocated technician and bumps that
    /// technician's `open_tickets`, in one transaction.
    pub async fn assign_ticket(
        &self,
        new: &NewTicket,
        allocation: &Allocation,
    ) -> sqlx::Result<Ticket> {
        let mut tx = self.pool.begin().await?;

        let ticket = tickets::insert(&mut *tx, new, Some(allocation), Utc::now()).await?;
        let updated =
            technicians::increment_open_tickets(&mut *tx, allocation.technician_id).await?;
        if updated == 0 {
            // Unknown id or saturated counter; rolled back on drop.
            return Err(sqlx::Error::RowNotFound);
        }

        tx.commit().await?;

        info!(
            "Ticket {} '{}' assigned to {} (id {})",
            ticket.id, ticket.title, allocation.technician_name, allocation.technician_id
        );
        Ok(ticket)
    }
}

#[cfg(test)]
pub async fn in_memory() -> Store {
    use sqlx::sqlite::SqlitePoolOptions;

    // One connection: every connection to `sqlite::memory:` is its own database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    Store::new(pool)
}
