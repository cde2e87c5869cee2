//! Integration tests for the file based header generation API

use png_to_embed::file_io::{encode_file, encode_file_to_dir, FileOperationError};
use png_to_embed::render::BYTES_PER_LINE;
use png_to_embed::{is_c_identifier, parse_header};
use std::fs;
use tempfile::TempDir;

fn create_test_png(len: usize) -> Vec<u8> {
    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    let mut data = PNG_SIGNATURE.to_vec();
    data.extend((0..len.saturating_sub(PNG_SIGNATURE.len())).map(|x| (x * 7 % 256) as u8));
    data.truncate(len);
    data
}

#[test]
fn test_generated_header_roundtrip() {
    let dir = TempDir::new().unwrap();
    let data = create_test_png(1021);
    let input = dir.path().join("splash.png");
    fs::write(&input, &data).unwrap();

    let written = encode_file_to_dir(&input, dir.path()).expect("Encoding should succeed");
    assert_eq!(written.file_name().unwrap(), "splash.h");

    let text = fs::read_to_string(&written).unwrap();
    let parsed = parse_header(&text).expect("Generated header should parse");

    assert_eq!(parsed.identifier, "splash");
    assert_eq!(parsed.bytes, data);
    assert!(text.ends_with("const size_t splashSize = sizeof(splash);\n"));
}

#[test]
fn test_last_line_holds_remainder() {
    let dir = TempDir::new().unwrap();
    let len = BYTES_PER_LINE * 3 + 5;
    let input = dir.path().join("tail.png");
    fs::write(&input, create_test_png(len)).unwrap();

    let artifact = encode_file(&input).unwrap();
    let last_body_line = artifact
        .text()
        .lines()
        .take_while(|line| *line != "};")
        .last()
        .unwrap();

    assert_eq!(last_body_line.matches("0x").count(), 5);
}

#[test]
fn test_identifier_is_not_sanitized() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("my-icon@2x.png");
    fs::write(&input, create_test_png(16)).unwrap();

    let artifact = encode_file(&input).unwrap();

    assert_eq!(artifact.identifier(), "my-icon@2x");
    assert_eq!(artifact.output_file_name(), "my-icon@2x.h");
    assert!(!is_c_identifier(artifact.identifier()));
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ghost.png");

    let error = encode_file_to_dir(&input, dir.path()).unwrap_err();

    assert!(matches!(error, FileOperationError::NotFound(_)));
    assert!(error.to_string().starts_with("File not found"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
