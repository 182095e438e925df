//! Interactive session
//!
//! Runs the menu loop over any line source and output sink.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::command::{Command, Outcome};
use crate::error::{Result, StoreError};
use crate::record::{Field, Student};
use crate::store::Store;

use super::{parse_choice, parse_id, parse_name, parse_student, MenuItem};

/// A menu session driving one [`Store`]
///
/// Store errors and bad input are printed and the loop continues; only
/// failures of the input or output streams end the session with an error.
pub struct Session<R, W> {
    store: Store,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: Store, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until the user exits or input is exhausted
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let item = match parse_choice(&line) {
                Ok(choice) => MenuItem::from_choice(choice),
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a valid number.")?;
                    continue;
                }
            };

            match item {
                Some(MenuItem::Exit) => break,
                Some(item) => {
                    if !self.handle(item)? {
                        break;
                    }
                }
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Consume the session, returning the store
    pub fn into_store(self) -> Store {
        self.store
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Handle one menu entry. Returns false once input is exhausted.
    fn handle(&mut self, item: MenuItem) -> Result<bool> {
        let command = match self.prompt_command(item) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(false),
            Err(e @ StoreError::Io(_)) => return Err(e),
            Err(e) => {
                self.report_input_error(item, &e)?;
                return Ok(true);
            }
        };

        match self.store.execute(command.clone()) {
            Ok(outcome) => self.report(&command, outcome)?,
            Err(e) => {
                tracing::debug!("Command {:?} failed: {}", command, e);
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(true)
    }

    /// Collect the arguments for `item`. `None` means input ran out.
    fn prompt_command(&mut self, item: MenuItem) -> Result<Option<Command>> {
        let command = match item {
            MenuItem::Create => {
                let Some(name) = self.prompt("Enter database name to create: ")? else {
                    return Ok(None);
                };
                Command::Create { name: parse_name(&name)? }
            }
            MenuItem::Open => {
                let Some(name) = self.prompt("Enter database name to open: ")? else {
                    return Ok(None);
                };
                Command::Open { name: parse_name(&name)? }
            }
            MenuItem::Save => Command::Save,
            MenuItem::Clear => Command::Clear,
            MenuItem::Remove => {
                let Some(name) = self.prompt("Enter database name to delete: ")? else {
                    return Ok(None);
                };
                Command::Remove { name: parse_name(&name)? }
            }
            MenuItem::Add => {
                let Some(line) = self.prompt(
                    "Enter ID, Name, Age, Department, Is Full-Time (1 for Yes, 0 for No): ",
                )?
                else {
                    return Ok(None);
                };
                Command::Add { student: parse_student(&line)? }
            }
            MenuItem::DeleteByKey => {
                let Some(line) = self.prompt("Enter Key (ID) to delete: ")? else {
                    return Ok(None);
                };
                Command::DeleteByKey { id: parse_id(&line)? }
            }
            MenuItem::DeleteByField => {
                let Some((field, value)) =
                    self.prompt_field("Enter Field (name/department/is_full_time): ")?
                else {
                    return Ok(None);
                };
                Command::DeleteByField { field, value }
            }
            MenuItem::SearchByKey => {
                let Some(line) = self.prompt("Enter Key (ID) to search: ")? else {
                    return Ok(None);
                };
                Command::SearchByKey { id: parse_id(&line)? }
            }
            MenuItem::SearchByField => {
                let Some((field, value)) = self.prompt_field("Enter Field (name/department): ")?
                else {
                    return Ok(None);
                };
                Command::SearchByField { field, value }
            }
            MenuItem::Show => Command::List,
            MenuItem::Backup => {
                let Some(path) = self.prompt("Enter backup filename: ")? else {
                    return Ok(None);
                };
                Command::Backup { path: PathBuf::from(parse_name(&path)?) }
            }
            MenuItem::Restore => {
                let Some(path) =
                    self.prompt("Enter backup filename to restore and work with: ")?
                else {
                    return Ok(None);
                };
                Command::Restore { path: PathBuf::from(parse_name(&path)?) }
            }
            MenuItem::ExportCsv => {
                let Some(path) = self.prompt("Enter CSV filename: ")? else {
                    return Ok(None);
                };
                Command::ExportCsv { path: PathBuf::from(parse_name(&path)?) }
            }
            MenuItem::Current => Command::Current,
            MenuItem::Exit => return Ok(None),
        };
        Ok(Some(command))
    }

    /// Prompt for a field name and a value (the value may contain spaces)
    fn prompt_field(&mut self, message: &str) -> Result<Option<(Field, String)>> {
        let Some(field) = self.prompt(message)? else {
            return Ok(None);
        };
        let field: Field = field.parse()?;

        let Some(value) = self.prompt("Enter Value: ")? else {
            return Ok(None);
        };
        Ok(Some((field, value)))
    }

    // =========================================================================
    // Output
    // =========================================================================

    fn report(&mut self, command: &Command, outcome: Outcome) -> Result<()> {
        let out = &mut self.output;
        match (command, outcome) {
            (Command::Create { name }, _) => {
                writeln!(out, "Database '{}' created successfully.", name)?
            }
            (Command::Open { name }, _) => {
                writeln!(out, "Database '{}' opened successfully.", name)?
            }
            (Command::Save, _) => match self.store.current_database() {
                Some(path) => writeln!(out, "Database '{}' saved successfully.", path.display())?,
                None => writeln!(out, "Database saved successfully.")?,
            },
            (Command::Clear, _) => writeln!(out, "Database cleared successfully.")?,
            (Command::Remove { name }, _) => {
                writeln!(out, "Database '{}' deleted successfully.", name)?
            }
            (Command::Add { .. }, _) => writeln!(out, "Record added successfully.")?,
            (Command::DeleteByKey { id }, Outcome::Deleted(0)) => {
                writeln!(out, "No record found with the given key: {}.", id)?
            }
            (Command::DeleteByKey { id }, _) => {
                writeln!(out, "Record with key {} deleted successfully.", id)?
            }
            (Command::DeleteByField { field, value }, Outcome::Deleted(0)) => writeln!(
                out,
                "No records found matching field '{}' with value '{}'.",
                field, value
            )?,
            (Command::DeleteByField { field, value }, Outcome::Deleted(count)) => writeln!(
                out,
                "{} record(s) matching field '{}' with value '{}' deleted successfully.",
                count, field, value
            )?,
            (Command::SearchByKey { id }, Outcome::Records(records)) if records.is_empty() => {
                writeln!(out, "No record found with the given key: {}.", id)?
            }
            (Command::SearchByField { .. }, Outcome::Records(records)) if records.is_empty() => {
                writeln!(out, "No records found.")?
            }
            (Command::SearchByKey { .. } | Command::SearchByField { .. }, Outcome::Records(records)) => {
                for student in &records {
                    writeln!(out, "{}", student)?;
                }
            }
            (Command::List, Outcome::Records(records)) => write_table(out, &records)?,
            (Command::Backup { path }, _) => {
                writeln!(out, "Backup created successfully: {}", path.display())?
            }
            (Command::Restore { path }, _) => writeln!(
                out,
                "Database restored successfully from backup: {}",
                path.display()
            )?,
            (Command::ExportCsv { path }, _) => writeln!(
                out,
                "Database exported successfully to CSV: {}",
                path.display()
            )?,
            (Command::Current, Outcome::Current(Some(path))) => {
                writeln!(out, "Current database: {}", path.display())?
            }
            (Command::Current, _) => writeln!(out, "No database is currently open.")?,
            (command, outcome) => {
                tracing::warn!("Unexpected outcome {:?} for {:?}", outcome, command)
            }
        }
        Ok(())
    }

    fn report_input_error(&mut self, item: MenuItem, err: &StoreError) -> Result<()> {
        match item {
            MenuItem::Add => writeln!(self.output, "Invalid input. Record not added. ({})", err)?,
            _ => writeln!(self.output, "Error: {}", err)?,
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Database Menu:")?;
        for item in MenuItem::ALL {
            writeln!(self.output, "{}. {}", item.number(), item.label())?;
        }
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(trimmed))
    }
}

fn write_table<W: Write>(out: &mut W, records: &[Student]) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "No records found in the database.")?;
        return Ok(());
    }

    writeln!(out, "ID\tName\tAge\tDepartment\tIs Full-Time")?;
    for s in records {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            s.id,
            s.name,
            s.age,
            s.department,
            if s.is_full_time { "Yes" } else { "No" }
        )?;
    }
    Ok(())
}
