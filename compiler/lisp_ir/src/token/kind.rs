//! Token kinds produced by the scanner.

use std::fmt;

/// The type tag of a token.
///
/// Keywords each get their own kind (like `Define`) rather than a shared
/// `Keyword(..)` variant so the parser can match on them directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Delimiters
    LeftParen,
    RightParen,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Equal,
    Less,
    Greater,

    // Literals
    Number,
    String,
    Symbol,
    True,
    Nil,

    // Keywords
    Define,
    If,
    Begin,
    Let,
    Set,
    And,
    Or,
    Not,

    Eof,
}

impl TokenKind {
    /// Look up the keyword (or literal word) kind for a reserved identifier.
    pub fn from_reserved_word(word: &str) -> Option<TokenKind> {
        match word {
            "define" => Some(TokenKind::Define),
            "if" => Some(TokenKind::If),
            "begin" => Some(TokenKind::Begin),
            "let" => Some(TokenKind::Let),
            "set" => Some(TokenKind::Set),
            "and" => Some(TokenKind::And),
            "or" => Some(TokenKind::Or),
            "not" => Some(TokenKind::Not),
            "true" => Some(TokenKind::True),
            "nil" => Some(TokenKind::Nil),
            _ => None,
        }
    }

    /// True for the reserved words that trigger special forms.
    #[inline]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Define
                | TokenKind::If
                | TokenKind::Begin
                | TokenKind::Let
                | TokenKind::Set
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
        )
    }

    /// True for the seven operator tokens `+ - * / = < >`.
    #[inline]
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Equal
                | TokenKind::Less
                | TokenKind::Greater
        )
    }

    /// Human-readable name, used in diagnostics and token dumps.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Equal => "=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Symbol => "symbol",
            TokenKind::True => "true",
            TokenKind::Nil => "nil",
            TokenKind::Define => "define",
            TokenKind::If => "if",
            TokenKind::Begin => "begin",
            TokenKind::Let => "let",
            TokenKind::Set => "set",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
