//! Record codec
//!
//! Encoding and decoding of single record lines.

use crate::error::{Result, StoreError};

use super::Student;

/// Field separator used by database, backup and CSV files
pub const DELIMITER: char = ';';

/// Header line written at the top of CSV exports
pub const CSV_HEADER: &str = "ID;Name;Age;Department;Is Full-Time";

/// Number of fields in a record line
const FIELD_COUNT: usize = 5;

/// Encode a record as `id;name;age;department;flag` (no line terminator)
pub fn encode_line(student: &Student) -> String {
    format!(
        "{id}{d}{name}{d}{age}{d}{dept}{d}{flag}",
        id = student.id,
        name = student.name,
        age = student.age,
        dept = student.department,
        flag = if student.is_full_time { "1" } else { "0" },
        d = DELIMITER,
    )
}

/// Decode a record line
///
/// `line_no` is only used for error reporting (1-based).
pub fn decode_line(line: &str, line_no: usize) -> Result<Student> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(DELIMITER).collect();

    if fields.len() != FIELD_COUNT {
        return Err(StoreError::Parse {
            line: line_no,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        });
    }

    let id = parse_int(fields[0], "id", line_no)?;
    let age = parse_int(fields[2], "age", line_no)?;

    Ok(Student {
        id,
        name: fields[1].to_string(),
        age,
        department: fields[3].to_string(),
        is_full_time: fields[4] == "1",
    })
}

fn parse_int(token: &str, what: &str, line_no: usize) -> Result<i32> {
    token.trim().parse::<i32>().map_err(|e| StoreError::Parse {
        line: line_no,
        reason: format!("invalid {} {:?}: {}", what, token, e),
    })
}
