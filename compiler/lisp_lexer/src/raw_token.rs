//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before literal
//! decoding and keyword lookup.

use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r";[^\n]*")]
    LineComment,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Equal,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    /// An opening quote that runs to end of input.
    #[regex(r#""([^"\\]|\\.)*"#)]
    UnterminatedString,

    /// Identifiers and reserved words; reserved words are split out during
    /// conversion.
    #[regex(r"[A-Za-z_!?$%&^~][A-Za-z0-9_!?$%&^~\-]*")]
    Symbol,
}
