//! Command definitions
//!
//! Typed requests a caller sends to the store, and what comes back.

use std::path::PathBuf;

use crate::record::{Field, Student};

/// A store operation with its already-validated arguments
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a new empty database
    Create { name: String },

    /// Load an existing database
    Open { name: String },

    /// Write the current records to the backing file
    Save,

    /// Drop all records and save
    Clear,

    /// Delete a database file
    Remove { name: String },

    /// Insert a record
    Add { student: Student },

    /// Delete the record with this id
    DeleteByKey { id: i32 },

    /// Delete every record whose field matches
    DeleteByField { field: Field, value: String },

    /// Look up a record by id
    SearchByKey { id: i32 },

    /// Look up records through a secondary index
    SearchByField { field: Field, value: String },

    /// List every record
    List,

    /// Write a backup copy
    Backup { path: PathBuf },

    /// Replace the records with a backup and switch to it
    Restore { path: PathBuf },

    /// Write a CSV export
    ExportCsv { path: PathBuf },

    /// Report the backing file
    Current,
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The command completed with nothing to report
    Done,

    /// Number of records removed
    Deleted(usize),

    /// Records returned by a lookup or listing
    Records(Vec<Student>),

    /// The backing file, if any
    Current(Option<PathBuf>),
}
