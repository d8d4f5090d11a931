//! Flow module - the edit-expense verification sequence
//!
//! Contains the runner that drives the fixed script of steps.

pub mod runner;

pub use runner::{Checkpoint, FlowRunner};
