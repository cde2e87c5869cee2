//! Parsing of generated headers back into the embedded bytes.
//!
//! This is the strict inverse of [`crate::render::render_header`]; it accepts exactly the
//! layout the renderer produces and is used to verify headers that were generated earlier.

use crate::render::{
    ARRAY_CLOSE, ARRAY_OPEN_SUFFIX, ARRAY_PREFIX, BYTES_PER_LINE, INDENT, LITERAL_SEPARATOR,
    SIZEOF_CLOSE, SIZEOF_OPEN, SIZE_PREFIX, SIZE_SUFFIX,
};
use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use thiserror::Error;

/// Result type for header parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while parsing a generated header.
///
/// Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The first line is not a `const uint8_t <identifier>[] = {` declaration
    #[error("Missing array declaration")]
    MissingArrayDeclaration,

    /// A body line is not indented or lacks its trailing comma
    #[error("Malformed body line {line}")]
    MalformedLine { line: usize },

    /// A body line contains something other than a lower-case `0x..` literal
    #[error("Invalid hex literal on line {line}")]
    InvalidLiteral { line: usize },

    /// A body line holds more literals than the renderer emits per line
    #[error("Too many literals on line {line}: found {count}, at most {max} allowed")]
    TooManyLiterals {
        line: usize,
        count: usize,
        max: usize,
    },

    /// The array body is never closed with `};`
    #[error("Array declaration is not terminated")]
    MissingTerminator,

    /// The size constant is missing or does not reference the array
    #[error("Size constant missing or not referencing array '{0}'")]
    SizeConstantMismatch(String),

    /// The header does not end with a newline
    #[error("Missing newline at end of header")]
    MissingFinalNewline,

    /// Content follows the size constant
    #[error("Unexpected content after the size constant")]
    TrailingContent,
}

/// Contents recovered from a generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Name of the array.
    pub identifier: String,
    /// The embedded bytes, in order.
    pub bytes: Vec<u8>,
}

/// Parses a header produced by [`crate::render::render_header`].
///
/// # Arguments
///
/// * `text` - Full text of the header
///
/// # Returns
///
/// The identifier and embedded bytes, or a [`ParseError`] describing the first deviation
/// from the generated layout.
pub fn parse_header(text: &str) -> ParseResult<ParsedHeader> {
    let mut lines = text.split('\n').enumerate().map(|(x, line)| (x + 1, line));

    let identifier = lines
        .next()
        .and_then(|(_, opening)| opening.strip_prefix(ARRAY_PREFIX))
        .and_then(|rest| rest.strip_suffix(ARRAY_OPEN_SUFFIX))
        .ok_or(ParseError::MissingArrayDeclaration)?;

    let mut bytes = Vec::new();
    loop {
        let (line_no, line) = lines.next().ok_or(ParseError::MissingTerminator)?;
        if line == ARRAY_CLOSE {
            break;
        }
        if line.is_empty() {
            return Err(ParseError::MissingTerminator);
        }
        parse_body_line(line, line_no, &mut bytes)?;
    }

    let expected_size_line = format!(
        "{SIZE_PREFIX}{identifier}{SIZE_SUFFIX}{SIZEOF_OPEN}{identifier}{SIZEOF_CLOSE}"
    );
    match lines.next() {
        Some((_, line)) if line == expected_size_line => {}
        _ => return Err(ParseError::SizeConstantMismatch(identifier.to_owned())),
    }

    match (lines.next(), lines.next()) {
        (Some((_, "")), None) => Ok(ParsedHeader {
            identifier: identifier.to_owned(),
            bytes,
        }),
        (None, _) => Err(ParseError::MissingFinalNewline),
        _ => Err(ParseError::TrailingContent),
    }
}

fn parse_body_line(line: &str, line_no: usize, bytes: &mut Vec<u8>) -> ParseResult<()> {
    let literals = line
        .strip_prefix(INDENT)
        .and_then(|rest| rest.strip_suffix(','))
        .ok_or(ParseError::MalformedLine { line: line_no })?;

    let mut count = 0;
    for literal in literals.split(LITERAL_SEPARATOR) {
        let byte = parse_literal(literal).ok_or(ParseError::InvalidLiteral { line: line_no })?;
        bytes.push(byte);
        count += 1;
    }

    if count > BYTES_PER_LINE {
        return Err(ParseError::TooManyLiterals {
            line: line_no,
            count,
            max: BYTES_PER_LINE,
        });
    }

    Ok(())
}

#[inline]
fn parse_literal(literal: &str) -> Option<u8> {
    match literal.strip_prefix("0x")?.as_bytes() {
        [high, low] => Some((hex_value(*high)? << 4) | hex_value(*low)?),
        _ => None,
    }
}

#[inline(always)]
fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}
