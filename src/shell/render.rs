//! Text rendering for shell output

use std::io::{self, Write};

use crate::command::{Command, MenuChoice, Outcome};
use crate::error::Result;
use crate::record::Student;
use crate::storage::Statistics;

const TABLE_RULE: &str = "-----------------------------------------------------------";

/// Print the numbered menu
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== MENU ===")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}", choice)?;
    }
    writeln!(out, "==============")
}

/// Print one record, one field per line
pub fn render_student<W: Write>(out: &mut W, student: &Student) -> io::Result<()> {
    writeln!(out, "ID: {}", student.student_id)?;
    writeln!(out, "Name: {}", student.name)?;
    writeln!(out, "Course: {}", student.course)?;
    writeln!(out, "GPA: {:.2}", student.gpa)?;
    writeln!(out, "Year: {}", student.year)
}

/// Print records as a table followed by the total
pub fn render_table<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    writeln!(
        out,
        "{:<6} {:<20} {:<15} {:<6} {:<4}",
        "ID", "Name", "Course", "GPA", "Year"
    )?;
    writeln!(out, "{}", TABLE_RULE)?;
    for s in students {
        writeln!(
            out,
            "{:<6} {:<20} {:<15} {:<6.2} {:<4}",
            s.student_id, s.name, s.course, s.gpa, s.year
        )?;
    }
    writeln!(out, "\nTotal students: {}", students.len())
}

pub fn render_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "Total Students: {}", stats.count)?;
    writeln!(out, "Average GPA: {:.2}", stats.average)?;
    writeln!(out, "Highest GPA: {:.2}", stats.highest)?;
    writeln!(out, "Lowest GPA: {:.2}", stats.lowest)
}

/// Print the result of executing `command`
///
/// Errors are reported as text; the session carries on.
pub fn render_report<W: Write>(
    out: &mut W,
    command: &Command,
    result: &Result<Outcome>,
) -> io::Result<()> {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            return match command {
                Command::Add(_) => writeln!(out, "Failed to add student."),
                Command::Search { .. } => writeln!(out, "Student not found."),
                Command::Delete { .. } => writeln!(out, "Failed to delete student."),
                Command::List | Command::Stats | Command::Exit => Ok(()),
            };
        }
    };

    match outcome {
        Outcome::Added => writeln!(out, "Student added successfully!"),
        Outcome::Found(Some(student)) => {
            writeln!(out, "\n=== Student Found ===")?;
            render_student(out, student)
        }
        Outcome::Found(None) => writeln!(out, "Student not found."),
        Outcome::Listing(students) if students.is_empty() => {
            writeln!(out, "No students in system.")
        }
        Outcome::Listing(students) => render_table(out, students),
        Outcome::Deleted(0) => {
            if let Command::Delete { id } = command {
                writeln!(out, "Student with ID {} not found.", id)?;
            }
            writeln!(out, "Failed to delete student.")
        }
        Outcome::Deleted(_) => writeln!(out, "Student deleted successfully!"),
        Outcome::Statistics(Some(stats)) => render_statistics(out, stats),
        Outcome::Statistics(None) => writeln!(out, "No students in database."),
        Outcome::Exit => writeln!(out, "Thank you for using StudentDB!"),
    }
}
