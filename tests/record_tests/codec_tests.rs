//! Tests for the record line codec
//!
//! These tests verify:
//! - Line encoding field order and flag format
//! - Decoding of well-formed lines
//! - Typed errors for malformed lines
//! - Field parsing and matching rules
//! - Delimiter validation

use studentdb::record::{decode_line, encode_line, Field, Student, CSV_HEADER};
use studentdb::StoreError;

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_full_time() {
    let student = Student::new(1, "Ann", 20, "CS", true);
    assert_eq!(encode_line(&student), "1;Ann;20;CS;1");
}

#[test]
fn test_encode_part_time() {
    let student = Student::new(2, "Bo", 21, "Math", false);
    assert_eq!(encode_line(&student), "2;Bo;21;Math;0");
}

#[test]
fn test_display_matches_encoding() {
    let student = Student::new(-7, "Eve Ray", 33, "Applied Physics", true);
    assert_eq!(student.to_string(), encode_line(&student));
}

#[test]
fn test_csv_header() {
    assert_eq!(CSV_HEADER, "ID;Name;Age;Department;Is Full-Time");
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_line() {
    let student = decode_line("1;Ann;20;CS;1", 1).unwrap();
    assert_eq!(student, Student::new(1, "Ann", 20, "CS", true));
}

#[test]
fn test_decode_round_trip_with_spaces_and_empty_strings() {
    let students = [
        Student::new(10, "Mary Ann", 19, "Fine Arts", false),
        Student::new(0, "", 0, "", true),
        Student::new(i32::MAX, "Z", i32::MIN, "Q", false),
    ];

    for student in students {
        let decoded = decode_line(&encode_line(&student), 1).unwrap();
        assert_eq!(decoded, student);
    }
}

#[test]
fn test_decode_flag_other_than_one_is_part_time() {
    let student = decode_line("3;Cy;22;Bio;yes", 1).unwrap();
    assert!(!student.is_full_time);
}

#[test]
fn test_decode_strips_carriage_return() {
    let student = decode_line("4;Di;23;Law;1\r", 1).unwrap();
    assert!(student.is_full_time);
    assert_eq!(student.department, "Law");
}

#[test]
fn test_decode_too_few_fields() {
    let err = decode_line("1;Ann;20", 7).unwrap_err();
    match err {
        StoreError::Parse { line, reason } => {
            assert_eq!(line, 7);
            assert!(reason.contains("expected 5 fields"), "reason: {}", reason);
        }
        other => panic!("expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_decode_too_many_fields() {
    let err = decode_line("1;Ann;20;CS;1;extra", 2).unwrap_err();
    assert!(matches!(err, StoreError::Parse { line: 2, .. }));
}

#[test]
fn test_decode_invalid_id() {
    let err = decode_line("one;Ann;20;CS;1", 3).unwrap_err();
    match err {
        StoreError::Parse { line, reason } => {
            assert_eq!(line, 3);
            assert!(reason.contains("id"));
        }
        other => panic!("expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_decode_invalid_age() {
    let err = decode_line("1;Ann;twenty;CS;1", 1).unwrap_err();
    match err {
        StoreError::Parse { reason, .. } => assert!(reason.contains("age")),
        other => panic!("expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_decode_empty_line() {
    assert!(matches!(
        decode_line("", 1),
        Err(StoreError::Parse { .. })
    ));
}

// =============================================================================
// Field Tests
// =============================================================================

#[test]
fn test_field_from_str() {
    assert_eq!("name".parse::<Field>().unwrap(), Field::Name);
    assert_eq!("department".parse::<Field>().unwrap(), Field::Department);
    assert_eq!(" is_full_time ".parse::<Field>().unwrap(), Field::IsFullTime);
}

#[test]
fn test_field_from_str_rejects_unknown() {
    let err = "age".parse::<Field>().unwrap_err();
    assert!(matches!(err, StoreError::InvalidField(ref f) if f == "age"));
}

#[test]
fn test_field_display_round_trips() {
    for field in [Field::Name, Field::Department, Field::IsFullTime] {
        assert_eq!(field.to_string().parse::<Field>().unwrap(), field);
    }
}

#[test]
fn test_only_name_and_department_are_indexed() {
    assert!(Field::Name.is_indexed());
    assert!(Field::Department.is_indexed());
    assert!(!Field::IsFullTime.is_indexed());
}

#[test]
fn test_matches_string_fields_exactly() {
    let student = Student::new(1, "Ann", 20, "CS", true);
    assert!(student.matches(Field::Name, "Ann"));
    assert!(!student.matches(Field::Name, "ann"));
    assert!(student.matches(Field::Department, "CS"));
    assert!(!student.matches(Field::Department, "CS "));
}

#[test]
fn test_matches_flag() {
    let full = Student::new(1, "Ann", 20, "CS", true);
    let part = Student::new(2, "Bo", 21, "CS", false);

    assert!(full.matches(Field::IsFullTime, "1"));
    assert!(!full.matches(Field::IsFullTime, "0"));
    assert!(part.matches(Field::IsFullTime, "0"));
    assert!(part.matches(Field::IsFullTime, "anything"));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_validate_accepts_plain_values() {
    assert!(Student::new(1, "Ann Lee", 20, "Computer Science", true)
        .validate()
        .is_ok());
}

#[test]
fn test_validate_rejects_delimiter_in_name() {
    let err = Student::new(1, "Ann;Lee", 20, "CS", true).validate().unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue { field: "name", .. }));
}

#[test]
fn test_validate_rejects_newline_in_department() {
    let err = Student::new(1, "Ann", 20, "C\nS", true).validate().unwrap_err();
    assert!(matches!(
        err,
        StoreError::InvalidValue {
            field: "department",
            ..
        }
    ));
}
