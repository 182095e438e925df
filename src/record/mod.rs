//! Record Module
//!
//! The fixed record schema and its line-oriented serialization.
//!
//! ## Line Format
//! ```text
//! ┌──────┬────────┬───────┬──────────────┬──────────┐
//! │  id  │  name  │  age  │  department  │ flag 0/1 │
//! └──────┴────────┴───────┴──────────────┴──────────┘
//!         fields joined by ';', one record per line
//! ```

mod codec;

use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

pub use codec::{decode_line, encode_line, CSV_HEADER, DELIMITER};

/// A single student record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Primary key, supplied by the caller
    pub id: i32,

    pub name: String,

    pub age: i32,

    pub department: String,

    pub is_full_time: bool,
}

impl Student {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        age: i32,
        department: impl Into<String>,
        is_full_time: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            department: department.into(),
            is_full_time,
        }
    }

    /// Check that string fields can be stored without corrupting the line format
    pub fn validate(&self) -> Result<(), StoreError> {
        check_storable("name", &self.name)?;
        check_storable("department", &self.department)
    }

    /// Whether `field` of this record matches `value`
    ///
    /// String fields compare exactly. The flag matches when
    /// `(value == "1") == is_full_time`, so any value other than "1"
    /// selects part-time records.
    pub fn matches(&self, field: Field, value: &str) -> bool {
        match field {
            Field::Name => self.name == value,
            Field::Department => self.department == value,
            Field::IsFullTime => (value == "1") == self.is_full_time,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_line(self))
    }
}

fn check_storable(field: &'static str, value: &str) -> Result<(), StoreError> {
    if value.contains(DELIMITER) || value.contains('\n') || value.contains('\r') {
        return Err(StoreError::InvalidValue {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Non-key fields that records can be matched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Department,
    IsFullTime,
}

impl Field {
    /// Field name as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Department => "department",
            Field::IsFullTime => "is_full_time",
        }
    }

    /// Whether lookups on this field are served by a secondary index
    pub fn is_indexed(&self) -> bool {
        matches!(self, Field::Name | Field::Department)
    }
}

impl FromStr for Field {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(Field::Name),
            "department" => Ok(Field::Department),
            "is_full_time" => Ok(Field::IsFullTime),
            other => Err(StoreError::InvalidField(other.to_string())),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
