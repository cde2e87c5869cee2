//! Renders binary files as C/C++ headers for embedding into compiled programs.
//!
//! The generated header declares a `uint8_t` array named after the input file and a
//! `size_t` constant holding its length:
//!
//! ```text
//! const uint8_t icon[] = {
//!     0x89, 0x50, 0x4e, 0x47,
//! };
//! const size_t iconSize = sizeof(icon);
//! ```
//!
//! # Features
//!
//! - `std`: Enables standard library support for error types.
//! - `file-io`: Path based API for reading inputs (memory mapped) and writing headers.
//!
//! # Example
//!
//! ```
//! use png_to_embed::EncodedArtifact;
//!
//! let artifact = EncodedArtifact::new("icon", &[0x89, 0x50, 0x4E, 0x47]);
//! assert_eq!(artifact.output_file_name(), "icon.h");
//! assert_eq!(artifact.size_constant_name(), "iconSize");
//! assert!(artifact.text().starts_with("const uint8_t icon[] = {\n"));
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// Core modules
pub mod artifact;
pub mod identifier;
pub mod parse;
pub mod render;

#[cfg(feature = "file-io")]
pub mod file_io;

#[cfg(test)]
pub(crate) mod test_prelude;

// Re-export key types
pub use artifact::EncodedArtifact;
pub use identifier::{identifier_from_file_name, is_c_identifier};
pub use parse::{parse_header, ParseError, ParsedHeader};
pub use render::{render_header, rendered_len};

// Re-export file operation types when file-io feature is enabled
#[cfg(feature = "file-io")]
pub use file_io::{FileOperationError, FileOperationResult};
