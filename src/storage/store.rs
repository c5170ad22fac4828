//! Record Store
//!
//! The file-backed collection of student records.
//!
//! ## Responsibilities
//! - Own the data/temp paths (from `Config`, never globals)
//! - Open and close files per operation; nothing is cached between calls
//! - Map "file absent" to "store empty" for every read-oriented operation

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use bytes::BytesMut;
use tracing::{debug, info};

use crate::command::{Command, Outcome};
use crate::config::{Config, SyncMode};
use crate::error::{Result, StudentDbError};
use crate::record::{self, Student, RECORD_SIZE};

use super::rewrite::{copy_without_first, is_same_file, TempFile};
use super::scan::{BlockReader, RecordIter};
use super::stats::{Statistics, StatsAccumulator};

/// Flat-file store of fixed-width student records
///
/// ## Access model
/// One operation at a time, one process per data file. There is no locking:
/// two instances on the same file interleave unpredictably.
#[derive(Debug, Clone)]
pub struct RecordStore {
    config: Config,
}

impl RecordStore {
    /// Create a store over the configured paths
    ///
    /// Only validates the configuration. The data file is created by the
    /// first `append`.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        debug!(
            data_file = %config.data_file.display(),
            temp_file = %config.temp_file.display(),
            "Opened record store"
        );
        Ok(Self { config })
    }

    /// Open with default file names inside `dir` (convenience method)
    pub fn open_dir(dir: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(dir).build())
    }

    /// Execute a command
    ///
    /// Routes commands to the matching operation
    pub fn execute(&self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add(student) => {
                self.append(&student)?;
                Ok(Outcome::Added)
            }
            Command::Search { id } => Ok(Outcome::Found(self.find_by_id(id)?)),
            Command::List => Ok(Outcome::Listing(self.list_all()?)),
            Command::Delete { id } => Ok(Outcome::Deleted(self.delete_by_id(id)?)),
            Command::Stats => Ok(Outcome::Statistics(self.compute_statistics()?)),
            Command::Exit => Ok(Outcome::Exit),
        }
    }

    /// Append a record at the end of the data file, creating it if needed
    ///
    /// Existing content is never read, so duplicate ids are accepted.
    pub fn append(&self, student: &Student) -> Result<()> {
        let path = &self.config.data_file;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| StudentDbError::open(path, e))?;

        let mut buf = BytesMut::with_capacity(RECORD_SIZE);
        record::encode(student, &mut buf);
        file.write_all(&buf)?;

        if self.config.sync_mode == SyncMode::EveryWrite {
            file.sync_data()?;
        }

        debug!(student_id = student.student_id, "Appended record");
        Ok(())
    }

    /// First record with the given id, scanning in file order
    pub fn find_by_id(&self, id: i32) -> Result<Option<Student>> {
        for student in self.scan()? {
            let student = student?;
            if student.student_id == id {
                return Ok(Some(student));
            }
        }
        Ok(None)
    }

    /// Lazy iterator over every record in file order
    ///
    /// Each call starts again from the beginning of the file.
    pub fn scan(&self) -> Result<RecordIter> {
        Ok(RecordIter::new(BlockReader::open(&self.config.data_file)?))
    }

    /// Every record in file order
    pub fn list_all(&self) -> Result<Vec<Student>> {
        self.scan()?.collect()
    }

    /// Number of complete records in the store
    pub fn count(&self) -> Result<usize> {
        let mut count = 0;
        for student in self.scan()? {
            student?;
            count += 1;
        }
        Ok(count)
    }

    /// Remove the first record with the given id
    ///
    /// Returns how many records were removed (0 or 1). On no match, or on
    /// any error before the final rename, the data file is left untouched
    /// and the temp file is removed.
    pub fn delete_by_id(&self, id: i32) -> Result<usize> {
        let data_file = &self.config.data_file;

        // Step 1: open the source; no file means nothing to delete
        let mut source = BlockReader::open(data_file)?;
        if !source.exists() {
            return Ok(0);
        }

        // Step 2: scratch file (guard removes it on every early return).
        // Creating it must never truncate the data file through an alias.
        let temp_file = &self.config.temp_file;
        if is_same_file(data_file, temp_file)? {
            return Err(StudentDbError::Config(format!(
                "temp file {} is the data file {}",
                temp_file.display(),
                data_file.display()
            )));
        }
        let mut temp = TempFile::create(temp_file)?;

        // Step 3: filtered copy
        let report = copy_without_first(&mut source, &mut temp, id)?;
        let dropped_tail = source.trailing_bytes();

        // Step 4: close the source before touching the data file
        drop(source);

        if report.removed == 0 {
            // Step 6: discard scratch, original stays byte-for-byte
            debug!(student_id = id, "Delete found no matching record");
            return Ok(0);
        }

        // Step 5: swap
        temp.persist(data_file, self.config.sync_mode)?;
        info!(
            student_id = id,
            remaining = report.copied,
            dropped_tail_bytes = dropped_tail,
            "Deleted record"
        );
        Ok(report.removed)
    }

    /// Count, mean, max and min gpa, or `None` for an empty store
    pub fn compute_statistics(&self) -> Result<Option<Statistics>> {
        let mut stats = StatsAccumulator::new();
        for student in self.scan()? {
            stats.add(student?.gpa);
        }
        Ok(stats.finish())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the data file path
    pub fn data_file(&self) -> &Path {
        &self.config.data_file
    }

    /// Get the temp file path
    pub fn temp_file(&self) -> &Path {
        &self.config.temp_file
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
