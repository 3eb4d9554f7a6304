//! Error handling integration tests
//!
//! Lexing failures surfaced through the public API and the file helpers.

use lumen::{tokenize_file, tokenize_source, FrontendConfig, LexError};
use std::io::Write;

#[test]
fn test_first_error_stops_tokenizing() {
    let source = "let a = 1;\nlet b = $x;\nlet c = \"never reached";
    let err = tokenize_source(source).unwrap_err();
    assert!(matches!(
        err,
        LexError::InvalidInterpolationPrefix { found: Some('x'), .. }
    ));
    assert_eq!(err.line(), 2);
    assert_eq!(err.position().column, 10);
}

#[test]
fn test_error_codes_are_distinct() {
    let failures = [
        r#""open"#,
        r#"$"{open""#,
        r#"$"}x""#,
        "$?",
        r#""\"#,
        r#""\u12""#,
    ];
    let mut codes: Vec<&str> = failures
        .iter()
        .map(|source| tokenize_source(source).unwrap_err().code())
        .collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), failures.len());
}

#[test]
fn test_file_error_carries_path_context() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ok = 1;").unwrap();
    writeln!(file, "bad = \"unterminated").unwrap();

    let err = tokenize_file(file.path()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to tokenize"));
    assert!(message.contains("Unterminated string starting at 2:7"));

    let lex_error = err.downcast_ref::<LexError>().unwrap();
    assert_eq!(lex_error.code(), "L0001");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = tokenize_file(&dir.path().join("absent.lm")).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read file"));
}

#[test]
fn test_same_quote_cannot_nest() {
    let nested = r#"$"{$"{1}"}""#;
    let err = tokenize_source(nested).unwrap_err();
    assert!(matches!(err, LexError::UnterminatedInterpolation { .. }));
}

#[test]
fn test_depth_limit_from_config() {
    let config = FrontendConfig::from_toml_str("[lexer]\nmax_interpolation_depth = 1\n").unwrap();
    let nested = r#"$"{$'{1}'}""#;

    let err = lumen::tokenize_with([nested], &config.lexer).unwrap_err();
    assert!(matches!(
        err,
        LexError::InterpolationTooDeep { depth: 2, limit: 1, .. }
    ));
    assert!(tokenize_source(nested).is_ok());
}
