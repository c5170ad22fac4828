//! Record Module
//!
//! The student record and its fixed-width on-disk form.
//!
//! ## Record Layout (92 bytes, little-endian)
//! ```text
//! ┌────────────┬──────────────────┬──────────────────┬─────────┬──────────┐
//! │ ID i32 (4) │ Name (50, NUL)   │ Course (30, NUL) │ GPA f32 │ Year i32 │
//! │            │                  │                  │   (4)   │   (4)    │
//! └────────────┴──────────────────┴──────────────────┴─────────┴──────────┘
//! ```
//! The data file is nothing but these blocks back to back: no header, no
//! count, no checksum.

mod codec;

pub use codec::{decode, encode, truncate_to_field, try_decode};

/// Width of the `student_id` field
pub const ID_SIZE: usize = 4;

/// Width of the name buffer, terminator included
pub const NAME_SIZE: usize = 50;

/// Width of the course buffer, terminator included
pub const COURSE_SIZE: usize = 30;

/// Width of the `gpa` field
pub const GPA_SIZE: usize = 4;

/// Width of the `year` field
pub const YEAR_SIZE: usize = 4;

/// Total size of one record on disk
pub const RECORD_SIZE: usize = ID_SIZE + NAME_SIZE + COURSE_SIZE + GPA_SIZE + YEAR_SIZE;

/// One raw record as stored on disk
pub type Block = [u8; RECORD_SIZE];

/// A single student entry
///
/// Ids are not unique and gpa/year are not range checked: the store keeps
/// whatever it is given.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub student_id: i32,
    pub name: String,
    pub course: String,
    pub gpa: f32,
    pub year: i32,
}

impl Student {
    pub fn new(
        student_id: i32,
        name: impl Into<String>,
        course: impl Into<String>,
        gpa: f32,
        year: i32,
    ) -> Self {
        Self {
            student_id,
            name: name.into(),
            course: course.into(),
            gpa,
            year,
        }
    }
}
