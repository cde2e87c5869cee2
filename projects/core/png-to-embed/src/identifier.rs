//! Derivation of array identifiers from file names.

/// Removes the final extension from a file name, yielding the array identifier.
///
/// Only the last extension is removed, so `sprites.tar.gz` becomes `sprites.tar`.
/// Leading dots never begin an extension: `.bashrc` and `..png` are returned unchanged.
///
/// The input must be a bare file name; directory components are stripped by the caller.
/// The result is not sanitized, see [`is_c_identifier`].
pub fn identifier_from_file_name(file_name: &str) -> &str {
    let Some(dot) = file_name.rfind('.') else {
        return file_name;
    };

    // A dot only starts an extension if something other than dots precedes it.
    if file_name[..dot].bytes().all(|b| b == b'.') {
        return file_name;
    }

    &file_name[..dot]
}

/// Checks whether `name` is a valid C identifier (`[A-Za-z_][A-Za-z0-9_]*`).
///
/// Keywords are not rejected.
pub fn is_c_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' => {}
        _ => return false,
    }

    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
