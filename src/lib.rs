//! dashcheck - End-to-End Verification Runner for the Expense Dashboard
//!
//! Drives a headless browser against a locally running expense dashboard,
//! exercising the "edit expense" user flow and capturing screenshots at
//! each checkpoint. The dashboard must already be running; dashcheck never
//! starts it.
//!
//! # Architecture
//!
//! - **Core**: Configuration, error handling, and logging setup
//! - **Browser**: Session lifecycle, role/name lookup, visibility waits
//! - **Flow**: The fixed edit-expense verification sequence
//!
//! # Usage
//!
//! ```rust,no_run
//! use dashcheck::{Config, FlowRunner};
//!
//! #[tokio::main]
//! async fn main() {
//!     let runner = FlowRunner::new(Config::load());
//!     runner.run().await.unwrap();
//! }
//! ```

pub mod browser;
pub mod core;
pub mod flow;

// Re-export commonly used items
pub use crate::core::{CheckError, Config, Result};
pub use flow::FlowRunner;
