//! Delete rewrite
//!
//! Streams the data file into a scratch file, leaving out the first record
//! with the target id, then swaps the scratch file into place.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::SyncMode;
use crate::error::{Result, StudentDbError};

use super::scan::{block_id, BlockReader};

/// Scratch file owned for the duration of one delete
///
/// Removed on drop unless `persist` renamed it over the data file, so an
/// error or an early return never leaves it behind.
pub(super) struct TempFile {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    persisted: bool,
}

impl TempFile {
    /// Create (or truncate) the scratch file
    pub(super) fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| StudentDbError::open(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: Some(BufWriter::new(file)),
            persisted: false,
        })
    }

    fn write_block(&mut self, block: &[u8]) -> Result<()> {
        match self.writer.as_mut() {
            Some(writer) => Ok(writer.write_all(block)?),
            None => Err(io::Error::new(io::ErrorKind::Other, "temp file already closed").into()),
        }
    }

    /// Flush, close and rename over `target`
    pub(super) fn persist(mut self, target: &Path, sync_mode: SyncMode) -> Result<()> {
        if let Some(writer) = self.writer.take() {
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            if sync_mode == SyncMode::EveryWrite {
                file.sync_all()?;
            }
        }

        fs::rename(&self.path, target)?;
        self.persisted = true;
        Ok(())
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if self.persisted {
            return;
        }
        // Close before removing (required on Windows)
        self.writer = None;
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed temp file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove temp file"),
        }
    }
}

/// Whether `temp` already names the same file as `data`
///
/// Catches symlinks and other aliases that lexical path checks miss;
/// truncating such a temp file would wipe the data file.
pub(super) fn is_same_file(data: &Path, temp: &Path) -> Result<bool> {
    let temp = match fs::canonicalize(temp) {
        Ok(path) => path,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };
    Ok(fs::canonicalize(data)? == temp)
}

/// Outcome of one filtered copy
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct CopyReport {
    /// Records written to the scratch file
    pub copied: usize,
    /// Records left out (0 or 1)
    pub removed: usize,
}

/// Copy every block from `source` into `temp`, except the first whose id
/// equals `id`. Later duplicates are copied like any other record.
pub(super) fn copy_without_first(
    source: &mut BlockReader,
    temp: &mut TempFile,
    id: i32,
) -> Result<CopyReport> {
    let mut report = CopyReport::default();

    while let Some(block) = source.next_block()? {
        if report.removed == 0 && block_id(&block) == id {
            report.removed = 1;
            continue;
        }
        temp.write_block(&block)?;
        report.copied += 1;
    }

    Ok(report)
}
