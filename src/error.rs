//! Error types for studentdb
//!
//! Provides a unified error type for all store operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for studentdb operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // File Lifecycle Errors
    // -------------------------------------------------------------------------
    #[error("File '{}' already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("File '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("No database is currently open")]
    NoOpenDatabase,

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Record with key {0} already exists")]
    DuplicateKey(i32),

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Invalid value for field '{field}': {value:?} contains a delimiter or line break")]
    InvalidValue { field: &'static str, value: String },

    #[error("Unknown field '{0}' (expected name, department or is_full_time)")]
    InvalidField(String),

    // -------------------------------------------------------------------------
    // Index Errors
    // -------------------------------------------------------------------------
    #[error("Index inconsistency: {0}")]
    InternalInconsistency(String),

    // -------------------------------------------------------------------------
    // Interactive Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
