//! Input parsing
//!
//! Converts raw terminal lines into typed values.

use crate::error::{Result, StoreError};
use crate::record::Student;

/// Parse a menu number
pub fn parse_choice(line: &str) -> Result<u32> {
    line.trim()
        .parse()
        .map_err(|_| StoreError::InvalidInput(format!("{:?} is not a menu number", line.trim())))
}

/// Parse a record id
pub fn parse_id(line: &str) -> Result<i32> {
    line.trim()
        .parse()
        .map_err(|_| StoreError::InvalidInput(format!("{:?} is not a valid key", line.trim())))
}

/// Parse a single-token name (database, backup or CSV file)
pub fn parse_name(line: &str) -> Result<String> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(name), None) => Ok(name.to_string()),
        (None, _) => Err(StoreError::InvalidInput("name must not be empty".to_string())),
        (Some(_), Some(_)) => Err(StoreError::InvalidInput(
            "name must not contain whitespace".to_string(),
        )),
    }
}

/// Parse `id name age department flag` with whitespace between tokens
///
/// The flag must be `1` (full-time) or `0`.
pub fn parse_student(line: &str) -> Result<Student> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [id, name, age, department, flag] = tokens[..] else {
        return Err(StoreError::InvalidInput(format!(
            "expected 5 values (id name age department flag), got {}",
            tokens.len()
        )));
    };

    let id = parse_id(id)?;
    let age: i32 = age
        .parse()
        .map_err(|_| StoreError::InvalidInput(format!("{:?} is not a valid age", age)))?;
    let is_full_time = match flag {
        "1" => true,
        "0" => false,
        other => {
            return Err(StoreError::InvalidInput(format!(
                "full-time flag must be 1 or 0, got {:?}",
                other
            )))
        }
    };

    Ok(Student::new(id, name, age, department, is_full_time))
}
