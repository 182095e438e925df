//! Flat-file reader and writer
//!
//! Line-oriented record files. Writers are buffered and must be finished
//! explicitly so that flush failures surface as errors.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::record::{decode_line, encode_line, Student};

/// How a writer treats an existing file at its path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace any existing content
    Truncate,

    /// Fail with `AlreadyExists` if the path is taken
    CreateNew,
}

/// Buffered writer producing one record per line
pub struct RecordWriter {
    /// Output file path
    path: PathBuf,
    /// Buffered writer for performance
    writer: BufWriter<File>,
    /// Number of records written
    record_count: u64,
}

impl RecordWriter {
    /// Open `path` for writing according to `mode`
    pub fn create(path: &Path, mode: WriteMode) -> Result<Self> {
        let mut options = OpenOptions::new();
        options.write(true);
        match mode {
            WriteMode::Truncate => options.create(true).truncate(true),
            WriteMode::CreateNew => options.create_new(true),
        };

        let file = options.open(path).map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => StoreError::AlreadyExists(path.to_path_buf()),
            _ => StoreError::Io(e),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            record_count: 0,
        })
    }

    /// Write a raw header line (not counted as a record)
    pub fn header(&mut self, header: &str) -> Result<()> {
        writeln!(self.writer, "{}", header)?;
        Ok(())
    }

    /// Append a record line
    pub fn add(&mut self, student: &Student) -> Result<()> {
        writeln!(self.writer, "{}", encode_line(student))?;
        self.record_count += 1;
        Ok(())
    }

    /// Append every record from `students`
    pub fn add_all<'a, I>(&mut self, students: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Student>,
    {
        for student in students {
            self.add(student)?;
        }
        Ok(())
    }

    /// Flush buffered lines to disk and return the number of records written
    pub fn finish(mut self) -> Result<u64> {
        self.writer.flush()?;
        tracing::trace!(
            "Wrote {} record(s) to {}",
            self.record_count,
            self.path.display()
        );
        Ok(self.record_count)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Create an empty file, failing if `path` already exists
pub fn create_empty(path: &Path) -> Result<()> {
    RecordWriter::create(path, WriteMode::CreateNew)?.finish()?;
    Ok(())
}

/// Read every record line in `path`
///
/// Blank lines are skipped. The first malformed line, including one that
/// is not valid UTF-8, aborts the read with a `Parse` error carrying its
/// 1-based line number.
pub fn read_records(path: &Path) -> Result<Vec<Student>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
        _ => StoreError::Io(e),
    })?;
    let reader = BufReader::new(file);

    let mut students = Vec::new();
    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let line = String::from_utf8(bytes?).map_err(|e| StoreError::Parse {
            line: idx + 1,
            reason: format!("invalid UTF-8: {}", e.utf8_error()),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        students.push(decode_line(&line, idx + 1)?);
    }

    Ok(students)
}

/// Delete the file at `path`
///
/// A missing file is reported as an I/O failure, like any other failed
/// deletion.
pub fn delete_file(path: &Path) -> Result<()> {
    fs::remove_file(path)?;
    Ok(())
}

/// Whether `a` and `b` name the same file
///
/// Both paths are canonicalized when they exist. Otherwise `.` components
/// are dropped and the remaining components compared.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => lexical(a) == lexical(b),
    }
}

fn lexical(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
