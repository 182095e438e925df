//! # studentdb
//!
//! A single-user, single-file student record store with:
//! - A primary map keyed by caller-supplied ids
//! - Secondary indexes on name and department, kept in step on every write
//! - A line-oriented `;`-delimited file format
//! - Backups, restore and CSV export
//! - An interactive text menu as the front end
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Menu Session                              │
//! │            (prompts, parsing, printing)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Command / Outcome
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Store                                  │
//! │        primary: id -> Student (source of truth)              │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │ SecondaryIndex  │                │    Storage      │
//!   │ name, department│                │  (flat files)   │
//!   └─────────────────┘                └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod index;
pub mod storage;
pub mod command;
pub mod store;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::Config;
pub use record::{Field, Student};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of studentdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
