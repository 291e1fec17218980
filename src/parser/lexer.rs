//! Logos-based lexer for legacy Java model sources
//!
//! Only the handful of token shapes the model patterns care about are
//! distinguished; everything else falls through as punctuation or `Error`.

use logos::Logos;
use text_size::{TextRange, TextSize};

/// Token kinds seen by the pattern matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    LineComment,
    BlockComment,
    Ident,
    Number,
    String,
    Char,
    TrueKw,
    FalseKw,
    ThisKw,
    NewKw,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    Eq,
    Minus,
    Plus,
    Star,
    Slash,
    Lt,
    Gt,
    Bang,
    Amp,
    Pipe,
    Question,
    Colon,
    At,
    /// Anything logos could not classify
    Error,
}

impl TokenKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Ident,

    // Deliberately loose: `1.2.3F` is one token and fails when parsed.
    #[regex(r"[0-9][0-9.]*([eE][+-]?[0-9]+)?[fFdDlL]?")]
    #[regex(r"\.[0-9][0-9.]*([eE][+-]?[0-9]+)?[fFdDlL]?")]
    Number,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\]|\\.)*'")]
    Char,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("true")]
    TrueKw,
    #[token("false")]
    FalseKw,
    #[token("this")]
    ThisKw,
    #[token("new")]
    NewKw,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("!")]
    Bang,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("@")]
    At,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => TokenKind::Whitespace,
            LineComment => TokenKind::LineComment,
            BlockComment => TokenKind::BlockComment,
            Ident => TokenKind::Ident,
            Number => TokenKind::Number,
            String => TokenKind::String,
            Char => TokenKind::Char,
            TrueKw => TokenKind::TrueKw,
            FalseKw => TokenKind::FalseKw,
            ThisKw => TokenKind::ThisKw,
            NewKw => TokenKind::NewKw,
            LParen => TokenKind::LParen,
            RParen => TokenKind::RParen,
            LBrace => TokenKind::LBrace,
            RBrace => TokenKind::RBrace,
            LBracket => TokenKind::LBracket,
            RBracket => TokenKind::RBracket,
            Semicolon => TokenKind::Semicolon,
            Comma => TokenKind::Comma,
            Dot => TokenKind::Dot,
            Eq => TokenKind::Eq,
            Minus => TokenKind::Minus,
            Plus => TokenKind::Plus,
            Star => TokenKind::Star,
            Slash => TokenKind::Slash,
            Lt => TokenKind::Lt,
            Gt => TokenKind::Gt,
            Bang => TokenKind::Bang,
            Amp => TokenKind::Amp,
            Pipe => TokenKind::Pipe,
            Question => TokenKind::Question,
            Colon => TokenKind::Colon,
            At => TokenKind::At,
        }
    }
}
