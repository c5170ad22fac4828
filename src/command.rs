//! Commands and outcomes
//!
//! The structured boundary between the store and whatever drives it. The
//! store answers every `Command` with an `Outcome`; rendering is the
//! caller's job.

use std::fmt;
use std::str::FromStr;

use crate::error::StudentDbError;
use crate::record::Student;
use crate::storage::Statistics;

/// A request against the store
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a record
    Add(Student),

    /// Find the first record with this id
    Search { id: i32 },

    /// Every record in file order
    List,

    /// Remove the first record with this id
    Delete { id: i32 },

    /// GPA statistics
    Stats,

    /// End the session
    Exit,
}

/// What a command produced
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added,
    Found(Option<Student>),
    Listing(Vec<Student>),
    /// Number of records removed (0 or 1)
    Deleted(usize),
    /// `None` when the store holds no records
    Statistics(Option<Statistics>),
    Exit,
}

/// Numbered menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Add = 1,
    Search = 2,
    List = 3,
    Delete = 4,
    Stats = 5,
    Exit = 6,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Search,
        MenuChoice::List,
        MenuChoice::Delete,
        MenuChoice::Stats,
        MenuChoice::Exit,
    ];

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Student",
            MenuChoice::Search => "Search Student",
            MenuChoice::List => "Display All Students",
            MenuChoice::Delete => "Delete Student",
            MenuChoice::Stats => "Calculate Statistics",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = StudentDbError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::Add),
            2 => Ok(MenuChoice::Search),
            3 => Ok(MenuChoice::List),
            4 => Ok(MenuChoice::Delete),
            5 => Ok(MenuChoice::Stats),
            6 => Ok(MenuChoice::Exit),
            other => Err(StudentDbError::InvalidInput(format!(
                "unknown menu choice: {}",
                other
            ))),
        }
    }
}

impl FromStr for MenuChoice {
    type Err = StudentDbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| StudentDbError::InvalidInput(format!("not a number: {:?}", s.trim())))?;
        MenuChoice::try_from(value)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", *self as u8, self.label())
    }
}
