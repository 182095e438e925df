//! Storage Module
//!
//! Flat-file persistence for databases, backups and CSV exports.
//!
//! ## Responsibilities
//! - Write record lines through a buffered writer
//! - Read record lines back, reporting the offending line on failure
//! - Map filesystem "exists"/"missing" conditions onto typed errors
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────┐
//! │ Header (CSV exports only)              │
//! │   ID;Name;Age;Department;Is Full-Time  │
//! ├────────────────────────────────────────┤
//! │ Record lines                           │
//! │   1;Ann;20;CS;1                        │
//! │   2;Bo;21;Math;0                       │
//! │ ... (one per record, '\n' terminated)  │
//! └────────────────────────────────────────┘
//! ```
//!
//! There is no escaping: string fields must not contain `;` or line
//! breaks, which the store enforces before records reach this layer.

mod flatfile;

pub use flatfile::{create_empty, delete_file, read_records, same_file, RecordWriter, WriteMode};
