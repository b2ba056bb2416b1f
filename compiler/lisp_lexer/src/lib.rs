//! Scanner for the Lisp toolchain, built on logos.
//!
//! Produces a `Vec<Token>` that always ends with a single `Eof` token. Line
//! numbers are 1-based and derived from the byte spans logos reports, so
//! strings that span lines advance the count for whatever follows them.

mod lex_error;
mod raw_token;

pub use lex_error::LexError;

use lisp_ir::{Token, TokenKind, TokenLiteral};
use logos::Logos;
use raw_token::RawToken;

/// Tokenize `source`.
///
/// Stops at the first malformed token.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lines = LineCounter::new(source);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = logos.span();
        let slice = logos.slice();
        let line = lines.line_at(span.start);

        match token_result {
            Ok(RawToken::LineComment) => {}
            Ok(RawToken::UnterminatedString) => {
                return Err(LexError::UnterminatedString { line });
            }
            Ok(raw) => tokens.push(convert_token(raw, slice, line)?),
            Err(()) => {
                let ch = slice.chars().next().unwrap_or('\0');
                return Err(LexError::UnexpectedCharacter { ch, line });
            }
        }
    }

    tokens.push(Token::eof(lines.line_at(source.len())));
    Ok(tokens)
}

/// Convert a raw token into a `Token`, decoding literals and reserved words.
fn convert_token(raw: RawToken, slice: &str, line: u32) -> Result<Token, LexError> {
    let kind = match raw {
        RawToken::Number(n) => return Ok(Token::number(n, slice, line)),
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            let value = unescape_string(content, line)?;
            return Ok(Token::new(
                TokenKind::String,
                slice,
                Some(TokenLiteral::Str(value)),
                line,
            ));
        }
        RawToken::Symbol => match TokenKind::from_reserved_word(slice) {
            Some(kind) => kind,
            None => return Ok(Token::symbol(slice, line)),
        },
        RawToken::LeftParen => TokenKind::LeftParen,
        RawToken::RightParen => TokenKind::RightParen,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Equal => TokenKind::Equal,
        RawToken::Less => TokenKind::Less,
        RawToken::Greater => TokenKind::Greater,
        RawToken::LineComment | RawToken::UnterminatedString => {
            unreachable!("trivia and unterminated strings are handled by lex()")
        }
    };
    Ok(Token::simple(kind, slice, line))
}

/// Resolve backslash escapes in a string literal body.
fn unescape_string(content: &str, line: u32) -> Result<String, LexError> {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => return Err(LexError::InvalidEscape { ch: other, line }),
            // The token regex never lets a lone backslash end the body.
            None => out.push('\\'),
        }
    }
    Ok(out)
}

/// Maps byte offsets to 1-based line numbers, scanning forward only.
struct LineCounter<'a> {
    source: &'a str,
    offset: usize,
    line: u32,
}

impl<'a> LineCounter<'a> {
    fn new(source: &'a str) -> Self {
        LineCounter {
            source,
            offset: 0,
            line: 1,
        }
    }

    fn line_at(&mut self, offset: usize) -> u32 {
        let newlines = self.source.as_bytes()[self.offset..offset]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        self.line = self
            .line
            .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));
        self.offset = offset;
        self.line
    }
}

#[cfg(test)]
mod tests;
