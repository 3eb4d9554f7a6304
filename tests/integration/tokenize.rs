//! Tokenizer integration tests
//!
//! Whole scripts through the public API, from text and from files.

use lumen::{tokenize, tokenize_file, tokenize_file_with, tokenize_source, LexerConfig, TokenKind};
use std::io::Write;

const SCRIPT: &str = r#"
import std.io as io;

/* Greets everyone
   in the list */
fn greet(names, greeting = "Hello") {
    for (name in names) {
        io.print($"{greeting}, {name}!");   # trailing comment
    }
    return names?.length ?? 0;
}
"#;

#[test]
fn test_script_token_shape() {
    let tokens = tokenize_source(SCRIPT).unwrap();
    let keywords: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind() == TokenKind::Keyword)
        .filter_map(|t| t.raw())
        .collect();
    assert_eq!(keywords, vec!["import", "as", "fn", "for", "in", "return"]);

    let interpolated: Vec<_> = tokens.iter().filter_map(|t| t.as_interpolated()).collect();
    assert_eq!(interpolated.len(), 1);
    assert_eq!(interpolated[0].position.line, 8);
    assert_eq!(interpolated[0].embedded.len(), 2);
    assert_eq!(interpolated[0].literal_text(), ", !");
}

#[test]
fn test_block_comment_lines_produce_nothing() {
    let tokens = tokenize_source(SCRIPT).unwrap();
    assert!(tokens.iter().all(|t| t.line() != 4 && t.line() != 5));
    assert_eq!(tokens[0].line(), 2);
}

#[test]
fn test_lines_from_any_string_iterator() {
    let owned = vec!["let a = 1;".to_string(), "let b = a;".to_string()];
    let from_owned = tokenize(&owned).unwrap();
    let from_str = tokenize(["let a = 1;", "let b = a;"]).unwrap();
    assert_eq!(from_owned, from_str);
}

#[test]
fn test_tokenize_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "let total = 3.5 * count;").unwrap();
    writeln!(file, "print(total);").unwrap();

    let tokens = tokenize_file(file.path()).unwrap();
    assert_eq!(tokens.len(), 12);
    assert_eq!(tokens[3].kind(), TokenKind::Float);
    assert_eq!(tokens[7].line(), 2);
}

#[test]
fn test_tokenize_file_with_legacy_policy() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"$"{{f({{x}})}}""#).unwrap();

    let stack = tokenize_file(file.path()).unwrap();
    let fifo = tokenize_file_with(file.path(), &LexerConfig::legacy()).unwrap();
    assert_eq!(stack[0].as_interpolated().unwrap().embedded.len(), 1);
    assert_eq!(fifo[0].as_interpolated().unwrap().embedded.len(), 2);
}

#[test]
fn test_json_dump() {
    let tokens = tokenize([r#"x = $"v={y}";"#]).unwrap();
    let json = serde_json::to_string(&tokens).unwrap();
    assert!(json.contains("\"Interpolated\""));
    let back: Vec<lumen::Token> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tokens);
}
