//! Index Module
//!
//! In-memory secondary indexes over non-key record fields.
//!
//! ## Responsibilities
//! - Map a field value to the set of ids holding that value
//! - Prune empty id sets so every indexed value has at least one id
//! - Rebuild from scratch after a full reload
//!
//! Indexes are derived data: they are never persisted and are always
//! reconstructed from the primary map on open/restore.

mod secondary;

pub use secondary::SecondaryIndex;
