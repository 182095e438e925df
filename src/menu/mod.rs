//! Menu Module
//!
//! The interactive front end: prompts for input, turns it into
//! [`Command`](crate::command::Command)s, and prints what the store returns.
//!
//! ## Responsibilities
//! - Render the numbered menu
//! - Parse and validate raw terminal input
//! - Report every store error without ending the session

mod input;
mod session;

pub use input::{parse_choice, parse_id, parse_name, parse_student};
pub use session::Session;

/// Entries of the main menu, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Create = 1,
    Open = 2,
    Save = 3,
    Clear = 4,
    Remove = 5,
    Add = 6,
    DeleteByKey = 7,
    DeleteByField = 8,
    SearchByKey = 9,
    SearchByField = 10,
    Show = 11,
    Backup = 12,
    Restore = 13,
    ExportCsv = 14,
    Exit = 15,
    Current = 16,
}

impl MenuItem {
    /// All entries in display order
    pub const ALL: [MenuItem; 16] = [
        MenuItem::Create,
        MenuItem::Open,
        MenuItem::Save,
        MenuItem::Clear,
        MenuItem::Remove,
        MenuItem::Add,
        MenuItem::DeleteByKey,
        MenuItem::DeleteByField,
        MenuItem::SearchByKey,
        MenuItem::SearchByField,
        MenuItem::Show,
        MenuItem::Backup,
        MenuItem::Restore,
        MenuItem::ExportCsv,
        MenuItem::Exit,
        MenuItem::Current,
    ];

    /// Map a menu number to its entry
    pub fn from_choice(choice: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|item| item.number() == choice)
    }

    pub fn number(&self) -> u32 {
        *self as u32
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Create => "Create Database",
            MenuItem::Open => "Open Database",
            MenuItem::Save => "Save Database",
            MenuItem::Clear => "Clear Database",
            MenuItem::Remove => "Delete Database",
            MenuItem::Add => "Add Record",
            MenuItem::DeleteByKey => "Delete Record by Key",
            MenuItem::DeleteByField => "Delete Record by Field",
            MenuItem::SearchByKey => "Search by Key",
            MenuItem::SearchByField => "Search by Field",
            MenuItem::Show => "Show Records",
            MenuItem::Backup => "Create Backup",
            MenuItem::Restore => "Restore from Backup",
            MenuItem::ExportCsv => "Export to CSV",
            MenuItem::Exit => "Exit",
            MenuItem::Current => "View Current Database",
        }
    }
}
