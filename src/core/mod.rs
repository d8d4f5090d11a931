//! Core module - shared infrastructure for dashcheck
//!
//! This module contains configuration, error handling, and logging setup
//! used throughout the application.

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{CheckError, Result};
