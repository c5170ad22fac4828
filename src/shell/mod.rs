//! Shell Module
//!
//! Interactive, line-oriented menu over a `RecordStore`.
//!
//! ## Responsibilities
//! - Show the numbered menu and read one selection per loop
//! - Collect the fields each command needs
//! - Turn `Outcome`s (and errors) into text
//!
//! The shell is generic over `BufRead`/`Write` so a session can be scripted
//! in tests exactly like a terminal session.

mod render;
mod session;

pub use render::{render_menu, render_report, render_statistics, render_student, render_table};
pub use session::Shell;
