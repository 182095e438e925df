//! Store Module
//!
//! The indexed record database that coordinates all components.
//!
//! ## Responsibilities
//! - Own the primary map (id -> record), the single source of truth
//! - Keep the name and department indexes in step with the primary map
//! - Load, save, back up, restore and export through the storage layer
//! - Track which file the in-memory records belong to
//!
//! The store never reads user input or prints. Failures come back as
//! [`StoreError`]; absence (unknown id, no matches) is an empty result.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::command::{Command, Outcome};
use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::index::SecondaryIndex;
use crate::record::{Field, Student, CSV_HEADER};
use crate::storage::{self, RecordWriter, WriteMode};

/// The indexed student database
///
/// ## Index Maintenance
///
/// Every single-record mutation of `primary` goes through
/// `insert_indexed` / `remove_indexed`, which update both secondary
/// indexes in the same step. Full reloads (open, restore) replace
/// `primary` wholesale and rebuild the indexes from it.
#[derive(Debug, Default)]
pub struct Store {
    /// Store configuration
    config: Config,

    /// File the records were loaded from / will be saved to
    backing: Option<PathBuf>,

    /// id -> record, ascending id order
    primary: BTreeMap<i32, Student>,

    /// name -> ids
    name_index: SecondaryIndex,

    /// department -> ids
    department_index: SecondaryIndex,
}

impl Store {
    /// Create an empty store with no database open
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a store resolving database names inside `dir`
    ///
    /// Uses default config with the specified data directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(Config::builder().data_dir(dir).build())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Create a new empty database called `name` and make it current
    ///
    /// Fails with `AlreadyExists` if the database file is already there.
    /// In-memory records are only discarded once the file exists.
    pub fn create(&mut self, name: &str) -> Result<()> {
        let path = self.config.database_path(name);
        storage::create_empty(&path)?;

        self.reset();
        tracing::info!("Database '{}' created at {}", name, path.display());
        self.backing = Some(path);
        Ok(())
    }

    /// Load the database called `name`, replacing the in-memory records
    ///
    /// The file is parsed completely before anything is replaced, so a
    /// missing or malformed file leaves the store as it was.
    pub fn open(&mut self, name: &str) -> Result<usize> {
        let path = self.config.database_path(name);
        let students = storage::read_records(&path)?;

        let count = self.load(students, path);
        tracing::info!("Database '{}' opened: {} record(s)", name, count);
        Ok(count)
    }

    /// Overwrite the backing file with the current records
    pub fn save(&self) -> Result<u64> {
        let path = self.backing.as_deref().ok_or(StoreError::NoOpenDatabase)?;

        let mut writer = RecordWriter::create(path, WriteMode::Truncate)?;
        writer.add_all(self.primary.values())?;
        let written = writer.finish()?;

        tracing::info!("Saved {} record(s) to {}", written, path.display());
        Ok(written)
    }

    /// Drop every record and save the now-empty database
    ///
    /// The backing file is emptied first; if that fails the records stay
    /// in memory.
    pub fn clear(&mut self) -> Result<()> {
        let path = self.backing.as_deref().ok_or(StoreError::NoOpenDatabase)?;
        RecordWriter::create(path, WriteMode::Truncate)?.finish()?;

        self.clear_records();
        tracing::info!("Database cleared");
        Ok(())
    }

    /// Delete the database file called `name`
    ///
    /// The database does not need to be open. If it is the current one,
    /// the in-memory records and backing file are dropped as well.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let path = self.config.database_path(name);
        let is_current = self
            .backing
            .as_deref()
            .is_some_and(|backing| storage::same_file(backing, &path));
        storage::delete_file(&path)?;

        if is_current {
            self.reset();
            tracing::info!("Database '{}' deleted and closed", name);
        } else {
            tracing::info!("Database '{}' deleted", name);
        }
        Ok(())
    }

    // =========================================================================
    // Record Operations
    // =========================================================================

    /// Insert a new record
    ///
    /// Fails with `DuplicateKey` if the id is taken, or `InvalidValue` if a
    /// string field could not be stored. The store is unchanged on failure.
    pub fn add_record(&mut self, student: Student) -> Result<()> {
        student.validate()?;
        if self.primary.contains_key(&student.id) {
            return Err(StoreError::DuplicateKey(student.id));
        }

        tracing::debug!("Adding record {}", student.id);
        self.insert_indexed(student);
        Ok(())
    }

    /// Delete the record with `id`. Returns false if there was none.
    pub fn delete_record_by_key(&mut self, id: i32) -> bool {
        match self.remove_indexed(id) {
            Some(_) => {
                tracing::debug!("Deleted record {}", id);
                true
            }
            None => {
                tracing::debug!("No record with key {} to delete", id);
                false
            }
        }
    }

    /// Delete every record whose `field` matches `value`
    ///
    /// Returns the number of records removed.
    pub fn delete_record_by_field(&mut self, field: Field, value: &str) -> usize {
        let ids: Vec<i32> = self
            .primary
            .values()
            .filter(|student| student.matches(field, value))
            .map(|student| student.id)
            .collect();

        let deleted = ids
            .into_iter()
            .filter(|&id| self.remove_indexed(id).is_some())
            .count();

        tracing::debug!("Deleted {} record(s) where {} = {:?}", deleted, field, value);
        deleted
    }

    /// Look up a record by id
    ///
    /// Returns a one-element list if present, empty otherwise.
    pub fn search_by_key(&self, id: i32) -> Vec<Student> {
        self.primary.get(&id).cloned().into_iter().collect()
    }

    /// Look up records through the index for `field`
    ///
    /// Only `name` and `department` are indexed; other fields yield an
    /// empty list. Fails with `InternalInconsistency` if the index names an
    /// id the primary map does not hold.
    pub fn search_by_field(&self, field: Field, value: &str) -> Result<Vec<Student>> {
        let Some(index) = self.index_for(field) else {
            return Ok(Vec::new());
        };
        let Some(ids) = index.get(value) else {
            return Ok(Vec::new());
        };

        ids.iter()
            .map(|id| {
                self.primary.get(id).cloned().ok_or_else(|| {
                    StoreError::InternalInconsistency(format!(
                        "{} index maps {:?} to missing id {}",
                        field, value, id
                    ))
                })
            })
            .collect()
    }

    // =========================================================================
    // Backup / Export
    // =========================================================================

    /// Write every record to a new backup file at `path`
    pub fn create_backup(&self, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();
        let mut writer = RecordWriter::create(path, WriteMode::CreateNew)?;
        writer.add_all(self.primary.values())?;
        let written = writer.finish()?;

        tracing::info!("Backup created at {}: {} record(s)", path.display(), written);
        Ok(written)
    }

    /// Replace the in-memory records with the contents of a backup
    ///
    /// The backup becomes the backing file: later saves write to `path`,
    /// not to the database that was open before.
    pub fn restore_from_backup(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let students = storage::read_records(path)?;

        let count = self.load(students, path.to_path_buf());
        tracing::info!("Restored {} record(s) from {}", count, path.display());
        Ok(count)
    }

    /// Write a header line plus every record to a new file at `path`
    ///
    /// Despite the name this is `;`-delimited, matching the database format.
    pub fn export_to_csv(&self, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();
        let mut writer = RecordWriter::create(path, WriteMode::CreateNew)?;
        writer.header(CSV_HEADER)?;
        writer.add_all(self.primary.values())?;
        let written = writer.finish()?;

        tracing::info!("Exported {} record(s) to {}", written, path.display());
        Ok(written)
    }

    // =========================================================================
    // Command Dispatch
    // =========================================================================

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Create { name } => self.create(&name).map(|_| Outcome::Done),
            Command::Open { name } => self.open(&name).map(|_| Outcome::Done),
            Command::Save => self.save().map(|_| Outcome::Done),
            Command::Clear => self.clear().map(|_| Outcome::Done),
            Command::Remove { name } => self.remove(&name).map(|_| Outcome::Done),
            Command::Add { student } => self.add_record(student).map(|_| Outcome::Done),
            Command::DeleteByKey { id } => {
                let deleted = self.delete_record_by_key(id);
                Ok(Outcome::Deleted(usize::from(deleted)))
            }
            Command::DeleteByField { field, value } => {
                Ok(Outcome::Deleted(self.delete_record_by_field(field, &value)))
            }
            Command::SearchByKey { id } => Ok(Outcome::Records(self.search_by_key(id))),
            Command::SearchByField { field, value } => {
                self.search_by_field(field, &value).map(Outcome::Records)
            }
            Command::List => Ok(Outcome::Records(self.records().cloned().collect())),
            Command::Backup { path } => self.create_backup(&path).map(|_| Outcome::Done),
            Command::Restore { path } => self.restore_from_backup(&path).map(|_| Outcome::Done),
            Command::ExportCsv { path } => self.export_to_csv(&path).map(|_| Outcome::Done),
            Command::Current => Ok(Outcome::Current(
                self.current_database().map(Path::to_path_buf),
            )),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The backing file of the current database, if one is open
    pub fn current_database(&self) -> Option<&Path> {
        self.backing.as_deref()
    }

    /// All records in ascending id order
    pub fn records(&self) -> impl Iterator<Item = &Student> {
        self.primary.values()
    }

    /// Get a record by id
    pub fn get(&self, id: i32) -> Option<&Student> {
        self.primary.get(&id)
    }

    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    pub fn name_index(&self) -> &SecondaryIndex {
        &self.name_index
    }

    pub fn department_index(&self) -> &SecondaryIndex {
        &self.department_index
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Verify that both indexes exactly describe the primary map
    pub fn check_consistency(&self) -> Result<()> {
        for (field, index) in [
            (Field::Name, &self.name_index),
            (Field::Department, &self.department_index),
        ] {
            for student in self.primary.values() {
                let value = indexed_value(field, student);
                if !index.contains(value, student.id) {
                    return Err(StoreError::InternalInconsistency(format!(
                        "record {} missing from {} index under {:?}",
                        student.id, field, value
                    )));
                }
            }

            for (value, ids) in index.iter() {
                for id in ids {
                    let matches = self
                        .primary
                        .get(id)
                        .is_some_and(|student| indexed_value(field, student) == value);
                    if !matches {
                        return Err(StoreError::InternalInconsistency(format!(
                            "{} index maps {:?} to id {} which does not hold it",
                            field, value, id
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn index_for(&self, field: Field) -> Option<&SecondaryIndex> {
        match field {
            Field::Name => Some(&self.name_index),
            Field::Department => Some(&self.department_index),
            Field::IsFullTime => None,
        }
    }

    /// Insert into the primary map and both indexes (id must be free)
    fn insert_indexed(&mut self, student: Student) {
        self.name_index.insert(&student.name, student.id);
        self.department_index.insert(&student.department, student.id);
        self.primary.insert(student.id, student);
    }

    /// Remove from both indexes and the primary map
    fn remove_indexed(&mut self, id: i32) -> Option<Student> {
        let student = self.primary.get(&id)?;

        if !self.name_index.remove(&student.name, id) {
            tracing::warn!("Record {} was missing from the name index", id);
        }
        if !self.department_index.remove(&student.department, id) {
            tracing::warn!("Record {} was missing from the department index", id);
        }

        self.primary.remove(&id)
    }

    /// Replace all records with `students` (last duplicate id wins) and
    /// switch the backing file to `path`
    fn load(&mut self, students: Vec<Student>, path: PathBuf) -> usize {
        let mut primary = BTreeMap::new();
        for student in students {
            primary.insert(student.id, student);
        }

        self.primary = primary;
        self.rebuild_indexes();
        self.backing = Some(path);
        self.primary.len()
    }

    fn rebuild_indexes(&mut self) {
        self.name_index = SecondaryIndex::from_pairs(
            self.primary.values().map(|s| (s.name.as_str(), s.id)),
        );
        self.department_index = SecondaryIndex::from_pairs(
            self.primary.values().map(|s| (s.department.as_str(), s.id)),
        );
    }

    fn clear_records(&mut self) {
        self.primary.clear();
        self.name_index.clear();
        self.department_index.clear();
    }

    fn reset(&mut self) {
        self.clear_records();
        self.backing = None;
    }
}

fn indexed_value(field: Field, student: &Student) -> &str {
    match field {
        Field::Department => &student.department,
        _ => &student.name,
    }
}
