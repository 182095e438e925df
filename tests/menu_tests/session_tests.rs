//! Tests for the interactive menu
//!
//! These tests verify:
//! - Input parsing helpers
//! - Menu dispatch and printed messages
//! - Errors are reported without ending the session
//! - End of input ends the session cleanly

use studentdb::menu::{parse_choice, parse_id, parse_name, parse_student, Session};
use studentdb::{Store, StoreError, Student};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

/// Run a session over `input`, returning the printed output and the store
fn run_session(store: Store, input: &str) -> (String, Store) {
    let mut output = Vec::new();
    let store = {
        let mut session = Session::new(store, input.as_bytes(), &mut output);
        session.run().unwrap();
        session.into_store()
    };
    (String::from_utf8(output).unwrap(), store)
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_choice() {
    assert_eq!(parse_choice(" 12 \n").unwrap(), 12);
    assert!(matches!(parse_choice("twelve"), Err(StoreError::InvalidInput(_))));
    assert!(matches!(parse_choice("-1"), Err(StoreError::InvalidInput(_))));
}

#[test]
fn test_parse_id() {
    assert_eq!(parse_id("-4").unwrap(), -4);
    assert!(parse_id("4.5").is_err());
}

#[test]
fn test_parse_name() {
    assert_eq!(parse_name("  school ").unwrap(), "school");
    assert!(matches!(parse_name("   "), Err(StoreError::InvalidInput(_))));
    assert!(matches!(parse_name("two words"), Err(StoreError::InvalidInput(_))));
}

#[test]
fn test_parse_student() {
    assert_eq!(
        parse_student("1 Ann 20 CS 1").unwrap(),
        Student::new(1, "Ann", 20, "CS", true)
    );
    assert_eq!(
        parse_student("  2\tBo 21   Math 0 ").unwrap(),
        Student::new(2, "Bo", 21, "Math", false)
    );
}

#[test]
fn test_parse_student_rejects_bad_input() {
    assert!(parse_student("1 Ann 20 CS").is_err());
    assert!(parse_student("1 Ann 20 CS 1 extra").is_err());
    assert!(parse_student("x Ann 20 CS 1").is_err());
    assert!(parse_student("1 Ann old CS 1").is_err());
    assert!(parse_student("1 Ann 20 CS yes").is_err());
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_session_prints_menu_and_exits() {
    let temp = TempDir::new().unwrap();
    let (output, _) = run_session(Store::in_dir(temp.path()), "15\n");

    assert!(output.contains("Database Menu:"));
    assert!(output.contains("1. Create Database"));
    assert!(output.contains("16. View Current Database"));
    assert_eq!(output.matches("Enter your choice: ").count(), 1);
}

#[test]
fn test_session_ends_at_end_of_input() {
    let temp = TempDir::new().unwrap();
    let (output, _) = run_session(Store::in_dir(temp.path()), "1\n");

    assert!(output.contains("Enter database name to create: "));
    assert!(!temp.path().join(".db").exists());
}

#[test]
fn test_session_create_add_search() {
    let temp = TempDir::new().unwrap();
    let input = "1\nschool\n6\n1 Ann 20 CS 1\n9\n1\n10\nname\nAnn\n3\n15\n";

    let (output, store) = run_session(Store::in_dir(temp.path()), input);

    assert!(output.contains("Database 'school' created successfully."));
    assert!(output.contains("Record added successfully."));
    assert_eq!(output.matches("1;Ann;20;CS;1").count(), 2);
    assert!(output.contains("saved successfully."));
    assert_eq!(store.len(), 1);
    assert_eq!(
        std::fs::read_to_string(temp.path().join("school.db")).unwrap(),
        "1;Ann;20;CS;1\n"
    );
}

#[test]
fn test_session_reports_errors_and_continues() {
    let temp = TempDir::new().unwrap();
    let input = "3\n2\nmissing\n6\n5 Ann 20 CS 1\n6\n5 Bo 21 Math 0\n16\n15\n";

    let (output, store) = run_session(Store::in_dir(temp.path()), input);

    assert!(output.contains("Error: No database is currently open"));
    assert!(output.contains("Error: File"));
    assert!(output.contains("Error: Record with key 5 already exists"));
    assert!(output.contains("No database is currently open."));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_session_invalid_choices() {
    let temp = TempDir::new().unwrap();
    let (output, _) = run_session(Store::in_dir(temp.path()), "abc\n42\n15\n");

    assert!(output.contains("Invalid input. Please enter a valid number."));
    assert!(output.contains("Invalid choice. Please try again."));
}

#[test]
fn test_session_invalid_record_input() {
    let temp = TempDir::new().unwrap();
    let (output, store) = run_session(Store::in_dir(temp.path()), "6\n1 Ann\n15\n");

    assert!(output.contains("Invalid input. Record not added."));
    assert!(store.is_empty());
}

#[test]
fn test_session_delete_by_field_and_show() {
    let temp = TempDir::new().unwrap();
    let mut store = Store::in_dir(temp.path());
    store.add_record(Student::new(1, "Ann", 20, "CS", true)).unwrap();
    store.add_record(Student::new(2, "Bo", 21, "Math", false)).unwrap();
    store.add_record(Student::new(3, "Cy", 22, "Math", true)).unwrap();

    let input = "8\ndepartment\nMath\n8\nage\n8\nname\nZed\n11\n15\n";
    let (output, store) = run_session(store, input);

    assert!(output.contains("2 record(s) matching field 'department' with value 'Math' deleted successfully."));
    assert!(output.contains("Error: Unknown field 'age'"));
    assert!(output.contains("No records found matching field 'name' with value 'Zed'."));
    assert!(output.contains("ID\tName\tAge\tDepartment\tIs Full-Time"));
    assert!(output.contains("1\tAnn\t20\tCS\tYes"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_session_delete_by_key_messages() {
    let temp = TempDir::new().unwrap();
    let mut store = Store::in_dir(temp.path());
    store.add_record(Student::new(1, "Ann", 20, "CS", true)).unwrap();

    let (output, store) = run_session(store, "7\n1\n7\n1\n11\n15\n");

    assert!(output.contains("Record with key 1 deleted successfully."));
    assert!(output.contains("No record found with the given key: 1."));
    assert!(output.contains("No records found in the database."));
    assert!(store.is_empty());
}

#[test]
fn test_session_backup_restore_export() {
    let temp = TempDir::new().unwrap();
    let mut store = Store::in_dir(temp.path());
    store.create("school").unwrap();
    store.add_record(Student::new(2, "Bo", 21, "Math", false)).unwrap();

    let backup = temp.path().join("school.bak");
    let csv = temp.path().join("school.csv");
    let input = format!(
        "12\n{b}\n13\n{b}\n14\n{c}\n16\n15\n",
        b = backup.display(),
        c = csv.display()
    );
    let (output, store) = run_session(store, &input);

    assert!(output.contains("Backup created successfully:"));
    assert!(output.contains("Database restored successfully from backup:"));
    assert!(output.contains("Database exported successfully to CSV:"));
    assert!(output.contains(&format!("Current database: {}", backup.display())));
    assert_eq!(store.current_database(), Some(backup.as_path()));
    assert_eq!(
        std::fs::read_to_string(&csv).unwrap(),
        "ID;Name;Age;Department;Is Full-Time\n2;Bo;21;Math;0\n"
    );
}
