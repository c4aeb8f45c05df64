use serde::{Deserialize, Serialize};

use crate::models::{Availability, Priority, Technician, Ticket, TicketStatus};

/// One bar of the workload chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadBar {
    pub technician_id: i64,
    pub name: String,
    pub open_tickets: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Count<K> {
    pub key: K,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub technician_count: usize,
    pub available_count: usize,
    pub ticket_count: usize,
    pub unassigned_count: usize,
    pub tickets_by_status: Vec<Count<TicketStatus>>,
    pub tickets_by_priority: Vec<Count<Priority>>,
}

/// Chart series in roster order (ascending id).
pub fn workload_series(technicians: &[Technician]) -> Vec<WorkloadBar> {
    technicians
        .iter()
        .map(|t| WorkloadBar {
            technician_id: t.id,
            name: t.name.clone(),
            open_tickets: t.open_tickets,
        })
        .collect()
}

/// Snapshot counts over the current rows. Every status and priority is listed, zeros included.
pub fn summarize(technicians: &[Technician], tickets: &[Ticket]) -> DashboardSummary {
    DashboardSummary {
        technician_count: technicians.len(),
        available_count: technicians
            .iter()
            .filter(|t| t.availability == Availability::Available)
            .count(),
        ticket_count: tickets.len(),
        unassigned_count: tickets.iter().filter(|t| t.assigned_to.is_none()).count(),
        tickets_by_status: TicketStatus::ALL
            .iter()
            .map(|s| Count {
                key: *s,
                count: tickets.iter().filter(|t| t.status == *s).count(),
            })
            .collect(),
        tickets_by_priority: Priority::ALL
            .iter()
            .map(|p| Count {
                key: *p,
                count: tickets.iter().filter(|t| t.priority == *p).count(),
            })
            .collect(),
    }
}
