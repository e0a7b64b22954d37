//! Tests for solver configuration loading.

use std::io::Write;
use strictly_minimax::{OutputFormat, SolverConfig};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = SolverConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.log_filter(), "warn,strictly_minimax=info");
    assert_eq!(*config.output(), OutputFormat::Text);
    assert!(*config.show_board());
}

#[test]
fn test_load_from_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"debug\"\noutput = \"json\"\nshow_board = false").unwrap();

    let config = SolverConfig::load(file.path()).unwrap();
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(*config.output(), OutputFormat::Json);
    assert!(!*config.show_board());
}

#[test]
fn test_partial_toml_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "output = \"json\"").unwrap();

    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(config, SolverConfig::default().with_output(OutputFormat::Json));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "output = \"yaml\"").unwrap();

    let err = SolverConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_output_format_parses_from_str() {
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::Text.to_string(), "text");
}
