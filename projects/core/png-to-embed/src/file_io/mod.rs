//! File I/O operations for generating headers from files on disk.
//!
//! Regular files are read through a read-only memory mapping using `lightweight-mmap`, so the
//! header is rendered straight from the mapped file. Outputs are written in a single call
//! and replace any existing file at the target path.

mod error;
pub use error::*;

use crate::identifier::identifier_from_file_name;
use crate::EncodedArtifact;
use alloc::borrow::ToOwned;
use alloc::string::String;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Derives the array identifier from a path.
///
/// Directory components and the final extension are removed, see
/// [`identifier_from_file_name`].
///
/// # Returns
///
/// The identifier, or [`FileOperationError::InvalidFileName`] if the path has no file name
/// (e.g. `/` or `..`) or the file name is not valid UTF-8.
pub fn derive_identifier(path: &Path) -> FileOperationResult<String> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| FileOperationError::InvalidFileName(path.to_path_buf()))?;

    Ok(identifier_from_file_name(file_name).to_owned())
}

/// Reads a file and renders it into a header.
///
/// The existence of `input_path` is checked before anything is read. The identifier is
/// derived from the file name with [`derive_identifier`].
///
/// Non-empty regular files are memory mapped. Everything else (pipes, `/proc` entries, files
/// reporting a size of 0) is read to the end, as their reported size cannot be trusted.
///
/// # Arguments
///
/// * `input_path` - Path to the file to embed
///
/// # Returns
///
/// The rendered [`EncodedArtifact`], [`FileOperationError::NotFound`] if the input does not
/// exist, or [`FileOperationError::Io`] if it cannot be read.
pub fn encode_file(input_path: &Path) -> FileOperationResult<EncodedArtifact> {
    if !input_path.exists() {
        return Err(FileOperationError::NotFound(input_path.to_path_buf()));
    }

    let identifier = derive_identifier(input_path)?;

    let metadata = fs::metadata(input_path)?;
    if !metadata.is_file() || metadata.len() == 0 {
        let data = fs::read(input_path)?;
        return Ok(EncodedArtifact::new(identifier, &data));
    }

    let input_size = mapping_len(metadata.len())?;

    // Open input file
    let input_handle = ReadOnlyFileHandle::open(input_path)?;
    let input_mapping = ReadOnlyMmap::new(&input_handle, 0, input_size)?;
    Ok(EncodedArtifact::new(identifier, input_mapping.as_slice()))
}

/// Converts a file size to a mapping length, failing if the file cannot fit in the
/// address space.
fn mapping_len(file_size: u64) -> io::Result<usize> {
    usize::try_from(file_size).map_err(io::Error::other)
}

/// Writes an artifact to `<identifier>.h` inside `output_dir`.
///
/// An existing file at that path is overwritten. If writing fails part way, the partially
/// written file is left in place.
///
/// # Arguments
///
/// * `artifact` - The rendered header
/// * `output_dir` - Directory to write into. Must exist.
///
/// # Returns
///
/// The path of the written file.
pub fn write_artifact(
    artifact: &EncodedArtifact,
    output_dir: &Path,
) -> FileOperationResult<PathBuf> {
    let output_path = output_dir.join(artifact.output_file_name());
    fs::write(&output_path, artifact.text())?;
    Ok(output_path)
}

/// Renders `input_path` into a header and writes it into `output_dir`.
///
/// Combines [`encode_file`] and [`write_artifact`]. No output is written if encoding fails.
///
/// # Example
///
/// ```no_run
/// use png_to_embed::file_io::{encode_file_to_dir, FileOperationResult};
/// use std::path::Path;
///
/// fn embed_icon() -> FileOperationResult<()> {
///     let written = encode_file_to_dir(Path::new("assets/icon.png"), Path::new("."))?;
///     println!("Generated {}", written.display());
///     Ok(())
/// }
/// ```
pub fn encode_file_to_dir(input_path: &Path, output_dir: &Path) -> FileOperationResult<PathBuf> {
    let artifact = encode_file(input_path)?;
    write_artifact(&artifact, output_dir)
}
