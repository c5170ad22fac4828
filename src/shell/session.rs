//! Shell session
//!
//! The blocking request/response loop with the operator.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use crate::command::{Command, MenuChoice, Outcome};
use crate::error::Result;
use crate::record::Student;
use crate::storage::RecordStore;

use super::render::{render_menu, render_report};

/// What the loop does after a selection
enum Step {
    Continue,
    Exit,
    /// Input ran out mid-command
    Eof,
}

/// Interactive menu loop
///
/// Reads selections from `input` and writes everything to `output` until
/// the operator picks Exit or input reaches EOF.
pub struct Shell<R, W> {
    store: RecordStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run until Exit or end of input
    ///
    /// Store failures are printed and the loop continues; only failures to
    /// read input or write output end the session with an error.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "=== StudentDB Management System ===")?;
        writeln!(self.output, "Welcome to your personal database system!\n")?;

        loop {
            render_menu(&mut self.output)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let step = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(e) => {
                    debug!(error = %e, "Rejected menu input");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Step::Continue
                }
            };

            if let Step::Eof = step {
                break;
            }

            if self.prompt("\nPress Enter to continue...")?.is_none() {
                break;
            }

            if let Step::Exit = step {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Collect the fields for `choice`, execute it and print the report
    fn dispatch(&mut self, choice: MenuChoice) -> Result<Step> {
        let command = match choice {
            MenuChoice::Add => {
                writeln!(self.output, "\n=== Add New Student ===")?;
                match self.read_student()? {
                    Some(student) => Command::Add(student),
                    None => return Ok(Step::Eof),
                }
            }
            MenuChoice::Search => {
                writeln!(self.output, "\n=== Search Student ===")?;
                match self.prompt_number("Enter Student ID to search: ")? {
                    Some(id) => Command::Search { id },
                    None => return Ok(Step::Eof),
                }
            }
            MenuChoice::List => {
                writeln!(self.output, "\n=== All Students ===")?;
                Command::List
            }
            MenuChoice::Delete => {
                writeln!(self.output, "\n=== Delete Student ===")?;
                match self.prompt_number("Enter Student ID to delete: ")? {
                    Some(id) => Command::Delete { id },
                    None => return Ok(Step::Eof),
                }
            }
            MenuChoice::Stats => {
                writeln!(self.output, "\n=== Statistics ===")?;
                Command::Stats
            }
            MenuChoice::Exit => Command::Exit,
        };

        let result = self.store.execute(command.clone());
        if let Err(e) = &result {
            tracing::warn!(error = %e, command = ?command, "Command failed");
        }
        render_report(&mut self.output, &command, &result)?;

        Ok(match result {
            Ok(Outcome::Exit) => Step::Exit,
            _ => Step::Continue,
        })
    }

    fn read_student(&mut self) -> Result<Option<Student>> {
        let Some(student_id) = self.prompt_number("Enter Student ID: ")? else {
            return Ok(None);
        };
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(None);
        };
        let Some(course) = self.prompt("Enter Course: ")? else {
            return Ok(None);
        };
        let Some(gpa) = self.prompt_number("Enter GPA (0.0 - 4.0): ")? else {
            return Ok(None);
        };
        let Some(year) = self.prompt_number("Enter Year (1-4): ")? else {
            return Ok(None);
        };
        Ok(Some(Student::new(student_id, name, course, gpa, year)))
    }

    /// Print `text`, read one line, strip the line ending. `None` at EOF.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt until the line parses as `T`. `None` at EOF.
    fn prompt_number<T: FromStr>(&mut self, text: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }
}
