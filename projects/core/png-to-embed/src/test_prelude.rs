//! Common test imports and utilities for png-to-embed tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{borrow::ToOwned, format, string::String, string::ToString, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

/// Signature of a PNG file, the most common input of the tool.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Creates a buffer of `len` bytes cycling through every byte value.
pub fn create_test_pattern(len: usize) -> Vec<u8> {
    (0..len).map(|x| (x % 256) as u8).collect()
}

/// Returns the body lines (between the array opening and `};`) of a rendered header.
pub fn body_lines(text: &str) -> Vec<&str> {
    text.lines()
        .skip(1)
        .take_while(|line| *line != "};")
        .collect()
}
