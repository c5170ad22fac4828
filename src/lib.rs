//! # StudentDB
//!
//! A single-user student record manager with:
//! - Fixed-width binary records in one flat file
//! - Linear-scan lookup, listing and statistics
//! - Delete by copy-filter-swap through a scratch file
//! - An interactive menu shell
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Shell (menu loop)                         │
//! │              stdin ──▶ Command ──▶ text                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Outcome
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     RecordStore                              │
//! │        append · find · scan · delete · statistics            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │students.dat │          │  temp.dat   │
//!   │ (92B blocks)│          │(delete only)│
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod storage;
pub mod command;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StudentDbError};
pub use config::{Config, SyncMode};
pub use command::{Command, MenuChoice, Outcome};
pub use record::Student;
pub use storage::{RecordStore, Statistics};
pub use shell::Shell;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of StudentDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
