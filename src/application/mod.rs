//! Application layer - orchestration of domain edits through ports.

pub mod handlers;
