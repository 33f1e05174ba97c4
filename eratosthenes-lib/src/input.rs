use std::{
    io::BufRead,
    num::IntErrorKind,
};

use crate::error::InputError;

/// Parses a bound typed by a user, ignoring surrounding whitespace.
///
/// A signed zero such as `-0` is zero, not a negative bound.
pub fn parse_bound(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    if is_negative(text) && text[1..].bytes().all(|byte| byte == b'0') {
        return Ok(0);
    }
    text.parse::<usize>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => InputError::TooLarge(text.to_string()),
        _ if is_negative(text) => InputError::Negative(text.to_string()),
        _ => InputError::Malformed(text.to_string()),
    })
}

/// Reads a single line from `reader` and parses it as a bound.
pub fn read_bound(mut reader: impl BufRead) -> Result<usize, InputError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    parse_bound(&line)
}

fn is_negative(text: &str) -> bool {
    match text.strip_prefix('-') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit()),
        None => false,
    }
}
