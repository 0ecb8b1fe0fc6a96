//! File encode/decode helpers

use crate::common::{temp_dir, write_fixture};
use ferret_finder::codec::{decode_file, encode_file};

#[test]
fn test_encode_then_decode_reproduces_file() {
    let dir = temp_dir().unwrap();
    let original: Vec<u8> = (0u8..=255).collect();
    let source = write_fixture(&dir, "payload.bin", &original);

    let encoded = encode_file(&source).unwrap();
    let encoded_path = write_fixture(&dir, "payload.b64", encoded.as_bytes());

    assert_eq!(decode_file(&encoded_path).unwrap(), original);
}

#[test]
fn test_encode_known_text() {
    let dir = temp_dir().unwrap();
    let path = write_fixture(&dir, "hello.txt", b"Hello, World!");
    assert_eq!(encode_file(&path).unwrap(), "SGVsbG8sIFdvcmxkIQ==");
}

#[test]
fn test_decode_ignores_line_breaks() {
    let dir = temp_dir().unwrap();
    let path = write_fixture(&dir, "wrapped.b64", b"SGVsbG8s\r\nIFdvcmxk\r\nIQ==\n");
    assert_eq!(decode_file(&path).unwrap(), b"Hello, World!");
}

#[test]
fn test_decode_error_names_file() {
    let dir = temp_dir().unwrap();
    let path = write_fixture(&dir, "broken.b64", b"not base64 at all");

    let err = decode_file(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to decode base64 data"));
    assert!(message.contains("broken.b64"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = temp_dir().unwrap();
    let err = encode_file(&dir.path().join("absent")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read file"));
}
