//! Record codec
//!
//! Encoding and decoding between `Student` and its 92-byte block.
//!
//! Text fields hold at most `width - 1` bytes followed by NUL padding. Longer
//! text is cut silently at the last UTF-8 boundary that fits.

use bytes::{Buf, BufMut};

use super::{Block, Student, COURSE_SIZE, NAME_SIZE, RECORD_SIZE};

/// Encode a record into `buf`, appending exactly `RECORD_SIZE` bytes
pub fn encode<B: BufMut>(student: &Student, buf: &mut B) {
    buf.put_i32_le(student.student_id);
    put_text(buf, &student.name, NAME_SIZE);
    put_text(buf, &student.course, COURSE_SIZE);
    buf.put_f32_le(student.gpa);
    buf.put_i32_le(student.year);
}

/// Decode one record from a full block
pub fn decode(block: &Block) -> Student {
    let mut block: &[u8] = block;

    let student_id = block.get_i32_le();
    let name = get_text(&mut block, NAME_SIZE);
    let course = get_text(&mut block, COURSE_SIZE);
    let gpa = block.get_f32_le();
    let year = block.get_i32_le();

    Student {
        student_id,
        name,
        course,
        gpa,
        year,
    }
}

/// Decode the first record of `bytes`, or `None` if fewer than
/// `RECORD_SIZE` bytes are given
pub fn try_decode(bytes: &[u8]) -> Option<Student> {
    let block: &Block = bytes.get(..RECORD_SIZE)?.try_into().ok()?;
    Some(decode(block))
}

/// Longest prefix of `text` that fits in a field of `width` bytes
/// (one byte is reserved for the terminator)
pub fn truncate_to_field(text: &str, width: usize) -> &str {
    let max = width.saturating_sub(1);
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

fn put_text<B: BufMut>(buf: &mut B, text: &str, width: usize) {
    let text = truncate_to_field(text, width);
    buf.put_slice(text.as_bytes());
    buf.put_bytes(0, width - text.len());
}

fn get_text(block: &mut &[u8], width: usize) -> String {
    let field = &block[..width];
    let end = field.iter().position(|&b| b == 0).unwrap_or(width);
    let text = String::from_utf8_lossy(&field[..end]).into_owned();
    block.advance(width);
    text
}
