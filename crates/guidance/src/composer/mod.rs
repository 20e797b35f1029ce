pub mod calendar;
pub mod dedup;
pub mod engine;

pub use engine::{compose, compose_with};
