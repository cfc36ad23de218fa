//! Domain layer - survey logic editing and segment entities.

pub mod foundation;
pub mod logic;
pub mod segment;
pub mod survey;
