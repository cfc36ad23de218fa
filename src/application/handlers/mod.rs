//! Command handlers.

pub mod logic;
pub mod segment;
