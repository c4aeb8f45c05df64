pub mod handlers;
pub mod workload;
