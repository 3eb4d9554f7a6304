//! Literal scanning implementations
//! Handles number literals, escaped and raw strings, and escape decoding

use super::state::simple_escape;
use super::tokenizer::Lexer;
use crate::frontend::core::lexer::tokens::*;

/// Scan a number literal
///
/// Digits and dots are collected. A second dot ends the number and is
/// scanned again on its own, so `3.14.15` is `3.14`, `.`, `15`. A trailing
/// dot is left for the next token as well, so `1.` is `1` followed by `.`.
pub fn scan_number(lexer: &mut Lexer<'_>) {
    let start = lexer.offset();
    let mut dots = 0usize;

    while let Some(c) = lexer.current() {
        if c.is_ascii_digit() {
            lexer.bump(1);
        } else if c == '.' {
            dots += 1;
            lexer.bump(1);
            if dots > 1 {
                dots -= 1;
                lexer.rewind(1);
                break;
            }
        } else {
            break;
        }
    }

    let mut text = lexer.slice(start, lexer.offset());
    if text.ends_with('.') {
        text.pop();
        dots -= 1;
        lexer.rewind(1);
    }

    match dots {
        0 => lexer.emit(TokenKind::Int, text, start),
        1 => lexer.emit(TokenKind::Float, text, start),
        // Unreachable given the back-off above
        _ => tracing::debug!("Dropping malformed number {:?}", text),
    }
}

/// Scan an escaped string literal delimited by `"` or `'`
pub fn scan_string(lexer: &mut Lexer<'_>) -> Result<(), LexError> {
    let start = lexer.offset();
    let quote = lexer.current().unwrap_or('"');
    lexer.bump(1);

    let mut value = String::new();
    loop {
        match lexer.current() {
            None => {
                return Err(LexError::UnterminatedString {
                    position: lexer.position_at(start),
                })
            }
            Some('\\') => decode_escape(lexer, &mut value)?,
            Some(c) if c == quote => {
                lexer.bump(1);
                break;
            }
            Some(c) => {
                value.push(c);
                lexer.bump(1);
            }
        }
    }

    lexer.emit(TokenKind::String, value, start);
    Ok(())
}

/// Scan a raw string literal `@"..."`; backslashes are kept as written
pub fn scan_raw_string(lexer: &mut Lexer<'_>) -> Result<(), LexError> {
    let start = lexer.offset();
    let quote = lexer.peek_at(1).unwrap_or('"');
    lexer.bump(2);

    let body_start = lexer.offset();
    loop {
        match lexer.current() {
            None => {
                return Err(LexError::UnterminatedString {
                    position: lexer.position_at(start),
                })
            }
            Some(c) if c == quote => break,
            Some(_) => lexer.bump(1),
        }
    }

    let value = lexer.slice(body_start, lexer.offset());
    lexer.bump(1);
    lexer.emit(TokenKind::String, value, start);
    Ok(())
}

/// Decode the escape sequence starting at the backslash under the cursor
/// and append it to `out`
///
/// A character outside the escape table is kept together with its
/// backslash, so `"\d"` stays the two characters `\` and `d`.
pub(crate) fn decode_escape(
    lexer: &mut Lexer<'_>,
    out: &mut String,
) -> Result<(), LexError> {
    let backslash = lexer.offset();
    let code = lexer
        .peek_at(1)
        .ok_or_else(|| LexError::EscapeAtEndOfInput {
            position: lexer.position_at(backslash),
        })?;
    lexer.bump(2);

    if let Some(decoded) = simple_escape(code) {
        out.push(decoded);
        return Ok(());
    }

    match code {
        'u' => out.push(decode_unicode(lexer, backslash, 'u', 4)?),
        'U' => out.push(decode_unicode(lexer, backslash, 'U', 8)?),
        other => {
            tracing::warn!(
                "Unknown escape '\\{}' at {} kept as written",
                other,
                lexer.position_at(backslash)
            );
            out.push('\\');
            out.push(other);
        }
    }
    Ok(())
}

/// Decode exactly `width` hex digits following `\u` or `\U`
///
/// The value fills a single 16-bit character slot: `\U` keeps only its low
/// 16 bits. A slot that is not a Unicode scalar (a lone surrogate) decodes
/// to U+FFFD.
fn decode_unicode(
    lexer: &mut Lexer<'_>,
    backslash: usize,
    marker: char,
    width: usize,
) -> Result<char, LexError> {
    let digits: String = (0..width).map_while(|i| lexer.peek_at(i)).collect();
    let position = lexer.position_at(backslash);

    if digits.chars().count() < width || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LexError::InvalidUnicodeEscape {
            sequence: format!("{}{}", marker, digits),
            position,
        });
    }
    lexer.bump(width);

    let value = u32::from_str_radix(&digits, 16)
        .map_err(|_| LexError::InvalidUnicodeEscape {
            sequence: format!("{}{}", marker, digits),
            position,
        })?;
    let slot = value & 0xFFFF;
    Ok(char::from_u32(slot).unwrap_or_else(|| {
        tracing::warn!("Escape value {:#x} at {} is not a character", slot, position);
        char::REPLACEMENT_CHARACTER
    }))
}
