// Allocation Engine: picks the best Available technician for a required skill.
// Scoring is pure; the directory trait is the only seam to storage.

pub mod engine;
pub mod handlers;
pub mod scoring;
