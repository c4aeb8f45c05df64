pub mod assignment;
pub mod handlers;
