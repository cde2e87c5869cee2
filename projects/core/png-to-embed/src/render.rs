//! Rendering of byte buffers into C/C++ array headers.
//!
//! The output layout is consumed by C/C++ compilers and other tools that diff the generated
//! headers, so it is reproduced byte-for-byte:
//!
//! ```text
//! const uint8_t <identifier>[] = {
//!     0x.., 0x.., ..., 0x..,
//! };
//! const size_t <identifier>Size = sizeof(<identifier>);
//! ```

use alloc::string::String;

/// Number of hex literals emitted per body line.
pub const BYTES_PER_LINE: usize = 12;

/// Indentation placed before every body line.
pub const INDENT: &str = "    ";

/// Extension of the generated header file.
pub const HEADER_EXTENSION: &str = "h";

/// Suffix appended to the identifier to name the size constant.
pub const SIZE_SUFFIX: &str = "Size";

pub(crate) const ARRAY_PREFIX: &str = "const uint8_t ";
pub(crate) const ARRAY_OPEN_SUFFIX: &str = "[] = {";
pub(crate) const ARRAY_CLOSE: &str = "};";
pub(crate) const SIZE_PREFIX: &str = "const size_t ";
pub(crate) const SIZEOF_OPEN: &str = " = sizeof(";
pub(crate) const SIZEOF_CLOSE: &str = ");";

pub(crate) const LITERAL_SEPARATOR: &str = ", ";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Length of a single `0x..` literal.
const LITERAL_LEN: usize = 4;

/// Length of everything in the header except the identifiers and the body.
const FIXED_LEN: usize = ARRAY_PREFIX.len()
    + ARRAY_OPEN_SUFFIX.len()
    + 1
    + ARRAY_CLOSE.len()
    + 1
    + SIZE_PREFIX.len()
    + SIZE_SUFFIX.len()
    + SIZEOF_OPEN.len()
    + SIZEOF_CLOSE.len()
    + 1;

/// Calculates the exact length in bytes of the text produced by [`render_header`].
///
/// # Arguments
///
/// * `identifier_len` - Length of the identifier in bytes
/// * `byte_len` - Number of bytes being embedded
///
/// # Returns
///
/// The number of bytes [`render_header`] will produce for these inputs.
pub const fn rendered_len(identifier_len: usize, byte_len: usize) -> usize {
    let lines = byte_len.div_ceil(BYTES_PER_LINE);

    // Each literal is followed by either ", " or the trailing ",".
    // The trailing "," is one shorter, and each line adds the indent and a newline.
    let body = byte_len * (LITERAL_LEN + LITERAL_SEPARATOR.len())
        + lines * (INDENT.len() + 1 + 1 - LITERAL_SEPARATOR.len());

    FIXED_LEN + identifier_len * 3 + body
}

/// Renders `data` as a C/C++ header declaring an array named `identifier`.
///
/// The identifier is used verbatim. See [`crate::identifier::is_c_identifier`] to check
/// whether the result will compile.
///
/// # Arguments
///
/// * `identifier` - Name of the array, and root of the size constant's name
/// * `data` - The bytes to embed
///
/// # Returns
///
/// The full text of the header, including the trailing newline.
pub fn render_header(identifier: &str, data: &[u8]) -> String {
    let mut out = String::with_capacity(rendered_len(identifier.len(), data.len()));

    out.push_str(ARRAY_PREFIX);
    out.push_str(identifier);
    out.push_str(ARRAY_OPEN_SUFFIX);
    out.push('\n');

    for line in data.chunks(BYTES_PER_LINE) {
        push_body_line(&mut out, line);
    }

    out.push_str(ARRAY_CLOSE);
    out.push('\n');

    out.push_str(SIZE_PREFIX);
    out.push_str(identifier);
    out.push_str(SIZE_SUFFIX);
    out.push_str(SIZEOF_OPEN);
    out.push_str(identifier);
    out.push_str(SIZEOF_CLOSE);
    out.push('\n');

    out
}

#[inline]
fn push_body_line(out: &mut String, line: &[u8]) {
    out.push_str(INDENT);
    for (x, byte) in line.iter().enumerate() {
        if x > 0 {
            out.push_str(LITERAL_SEPARATOR);
        }
        push_literal(out, *byte);
    }
    out.push(',');
    out.push('\n');
}

#[inline(always)]
fn push_literal(out: &mut String, byte: u8) {
    out.push('0');
    out.push('x');
    out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
    out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
}
