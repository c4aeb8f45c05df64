pub mod technician;
pub mod ticket;

pub use technician::{Availability, NewTechnician, Skill, Technician};
pub use ticket::{NewTicket, Priority, Ticket, TicketStatus};

#[cfg(test)]
pub mod fixtures;
