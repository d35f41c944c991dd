//! Integration tests for loading parser requests from YAML files.

use std::fs;

use nlparse::{Error, Parser, ParserConfig, ParserRequest, create_parser_from_request};
use tempfile::TempDir;

fn write_request(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("should write request file");
    path
}

#[test]
fn loaded_request_creates_configured_parser() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = write_request(&dir, "de.yaml", "language: de\nlemmas: true\n");

    let request = ParserRequest::load(&path).expect("request should load");
    let parser = create_parser_from_request(&request).expect("de is built in");

    assert_eq!(parser.language(), "de");
    assert_eq!(parser.config(), ParserConfig::new(true, false));
}

#[test]
fn loaded_request_with_unknown_language_fails_at_creation() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = write_request(&dir, "fr.yaml", "language: fr\n");

    let request = ParserRequest::load(&path).expect("request should load");
    let error = create_parser_from_request(&request).unwrap_err();

    assert_eq!(error.unsupported_identifier(), Some("fr"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("should create temp dir");

    let error = ParserRequest::load(&dir.path().join("absent.yaml")).unwrap_err();

    assert!(matches!(error, Error::Io(_)));
}

#[test]
fn malformed_file_is_config_error_naming_path() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = write_request(&dir, "bad.yaml", "language: [en\n");

    let error = ParserRequest::load(&path).unwrap_err();

    assert!(matches!(error, Error::Config { .. }));
    assert!(error.to_string().contains("bad.yaml"));
}
