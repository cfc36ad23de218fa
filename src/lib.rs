//! Formflow - Survey Logic Editing and Segment Management
//!
//! This crate implements the editing algebra for survey conditional logic
//! (condition trees plus ordered action lists) and the save-as-segment flow
//! that promotes ad-hoc audience filters into named, reusable segments.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
