//! Record scanning
//!
//! Sequential, block-at-a-time reads over the data file.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, StudentDbError};
use crate::record::{self, Block, Student, RECORD_SIZE};

/// Reads whole record blocks from the data file
///
/// A missing file reads as empty. A short read at end of file marks a torn
/// trailing record; it is logged and dropped, never returned.
pub(crate) struct BlockReader {
    /// `None` once the file is exhausted (or never existed)
    file: Option<BufReader<File>>,
    /// Whether the data file existed when opened
    present: bool,
    /// Bytes of a trailing partial record seen at EOF
    trailing_bytes: usize,
}

impl BlockReader {
    /// Open the data file for reading; a missing file yields an empty reader
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => Some(BufReader::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Data file absent, treating as empty store");
                None
            }
            Err(e) => return Err(StudentDbError::open(path, e)),
        };

        Ok(Self {
            present: file.is_some(),
            file,
            trailing_bytes: 0,
        })
    }

    /// Whether a data file was actually opened
    pub(crate) fn exists(&self) -> bool {
        self.present
    }

    /// Size of the partial record discarded at EOF (0 if none)
    pub(crate) fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }

    /// Read the next full block, or `None` at end of data
    pub(crate) fn next_block(&mut self) -> Result<Option<Block>> {
        let Some(file) = self.file.as_mut() else {
            return Ok(None);
        };

        let mut block = [0u8; RECORD_SIZE];
        let filled = match fill_block(file, &mut block) {
            Ok(n) => n,
            Err(e) => {
                self.file = None;
                return Err(e.into());
            }
        };

        if filled == RECORD_SIZE {
            return Ok(Some(block));
        }

        // EOF: close the file now, remember any torn tail
        self.file = None;
        if filled > 0 {
            warn!(
                bytes = filled,
                record_size = RECORD_SIZE,
                "Discarding partial record at end of data file"
            );
            self.trailing_bytes = filled;
        }
        Ok(None)
    }
}

/// Read until the block is full or EOF; returns the number of bytes read
fn fill_block<R: Read>(reader: &mut R, block: &mut Block) -> io::Result<usize> {
    let mut filled = 0;
    while filled < RECORD_SIZE {
        match reader.read(&mut block[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Read the id of a raw block without decoding the rest
pub(crate) fn block_id(block: &Block) -> i32 {
    i32::from_le_bytes([block[0], block[1], block[2], block[3]])
}

/// Lazy iterator over every record in file order
///
/// Each call to `RecordStore::scan` builds a fresh iterator from the start
/// of the file; nothing is shared between scans. The iterator is fused: after
/// the end of data or an error it only returns `None`.
pub struct RecordIter {
    blocks: BlockReader,
    yielded: usize,
}

impl RecordIter {
    pub(crate) fn new(blocks: BlockReader) -> Self {
        Self { blocks, yielded: 0 }
    }

    /// Number of records produced so far
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Bytes of a partial trailing record skipped at EOF (0 if none)
    pub fn discarded_bytes(&self) -> usize {
        self.blocks.trailing_bytes()
    }
}

impl Iterator for RecordIter {
    type Item = Result<Student>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.blocks.next_block() {
            Ok(Some(block)) => {
                self.yielded += 1;
                Some(Ok(record::decode(&block)))
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl std::iter::FusedIterator for RecordIter {}
