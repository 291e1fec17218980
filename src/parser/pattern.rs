//! Token patterns over lexed source.
//!
//! A [`Pattern`] is a small, fixed call shape such as
//! `this.NAME.setRotationPoint(X, Y, Z);`. Matching walks the significant
//! (non-trivia) tokens left to right and yields every non-overlapping
//! occurrence, in source order, with its captures kept positionally.

use std::borrow::Cow;

use text_size::TextRange;

use super::lexer::{Token, TokenKind, tokenize};

/// What a capture step accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKind {
    /// A single identifier
    Ident,
    /// A number literal with an optional leading `-`
    Number,
    /// `true` or `false`
    Bool,
}

/// One element of a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A token of exactly this kind
    Token(TokenKind),
    /// An identifier with exactly this text
    Word(&'static str),
    /// An optional `this.` instance qualifier
    Qualifier,
    /// A captured value
    Capture(CaptureKind),
    /// Steps that may be absent as a whole; their captures become `None`
    Optional(Vec<Step>),
}

impl Step {
    fn capture_count(&self) -> usize {
        match self {
            Step::Capture(_) => 1,
            Step::Optional(steps) => steps.iter().map(Step::capture_count).sum(),
            _ => 0,
        }
    }
}

/// A named token pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: &'static str,
    steps: Vec<Step>,
}

impl Pattern {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of capture groups, optional ones included
    pub fn capture_count(&self) -> usize {
        self.steps.iter().map(Step::capture_count).sum()
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn token(self, kind: TokenKind) -> Self {
        self.step(Step::Token(kind))
    }

    pub fn word(self, word: &'static str) -> Self {
        self.step(Step::Word(word))
    }

    pub fn qualifier(self) -> Self {
        self.step(Step::Qualifier)
    }

    pub fn ident(self) -> Self {
        self.step(Step::Capture(CaptureKind::Ident))
    }

    pub fn number(self) -> Self {
        self.step(Step::Capture(CaptureKind::Number))
    }

    pub fn boolean(self) -> Self {
        self.step(Step::Capture(CaptureKind::Bool))
    }

    /// `N` comma-separated numbers
    pub fn numbers(mut self, count: usize) -> Self {
        for i in 0..count {
            if i > 0 {
                self = self.token(TokenKind::Comma);
            }
            self = self.number();
        }
        self
    }

    /// `);`
    pub fn close_call(self) -> Self {
        self.token(TokenKind::RParen).token(TokenKind::Semicolon)
    }

    pub fn optional(self, steps: Vec<Step>) -> Self {
        self.step(Step::Optional(steps))
    }

    /// Scan `source` lazily for every occurrence of this pattern
    pub fn matches<'p, 's>(&'p self, source: &'s str) -> Matches<'p, 's> {
        Matches::new(self, source, significant_tokens(source))
    }

    /// Scan an already tokenized source
    pub fn matches_tokens<'p, 's>(&'p self, source: &'s str, tokens: Vec<Token<'s>>) -> Matches<'p, 's> {
        Matches::new(self, source, tokens)
    }
}

/// Drop trivia so patterns never have to mention whitespace or comments
pub fn significant_tokens(source: &str) -> Vec<Token<'_>> {
    tokenize(source)
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .collect()
}

/// Text captured by one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture<'s> {
    pub text: Cow<'s, str>,
    pub range: TextRange,
}

/// One occurrence of a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'s> {
    pub pattern: &'static str,
    pub range: TextRange,
    captures: Vec<Option<Capture<'s>>>,
}

impl<'s> Match<'s> {
    /// Capture group `index`, `None` when it sat in an absent optional group
    pub fn get(&self, index: usize) -> Option<&Capture<'s>> {
        self.captures.get(index).and_then(Option::as_ref)
    }

    /// Captured text of group `index`, empty when absent
    pub fn text(&self, index: usize) -> &str {
        self.get(index).map(|c| c.text.as_ref()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }
}

/// Lazy iterator over the matches of one pattern
pub struct Matches<'p, 's> {
    pattern: &'p Pattern,
    source: &'s str,
    tokens: Vec<Token<'s>>,
    pos: usize,
}

impl<'p, 's> Matches<'p, 's> {
    fn new(pattern: &'p Pattern, source: &'s str, tokens: Vec<Token<'s>>) -> Self {
        Self {
            pattern,
            source,
            tokens,
            pos: 0,
        }
    }

    /// Try every step at `start`; returns the position after the match
    fn match_at(&self, start: usize, steps: &[Step], captures: &mut Vec<Option<Capture<'s>>>) -> Option<usize> {
        let mut pos = start;
        for step in steps {
            pos = self.match_step(pos, step, captures)?;
        }
        Some(pos)
    }

    fn match_step(&self, pos: usize, step: &Step, captures: &mut Vec<Option<Capture<'s>>>) -> Option<usize> {
        match step {
            Step::Token(kind) => {
                let token = self.tokens.get(pos)?;
                (token.kind == *kind).then_some(pos + 1)
            }
            Step::Word(word) => {
                let token = self.tokens.get(pos)?;
                (token.kind == TokenKind::Ident && token.text == *word).then_some(pos + 1)
            }
            Step::Qualifier => {
                let is_qualifier = matches!(
                    (self.tokens.get(pos), self.tokens.get(pos + 1)),
                    (Some(this), Some(dot))
                        if this.kind == TokenKind::ThisKw && dot.kind == TokenKind::Dot
                );
                Some(if is_qualifier { pos + 2 } else { pos })
            }
            Step::Capture(kind) => {
                let (capture, next) = self.capture(pos, *kind)?;
                captures.push(Some(capture));
                Some(next)
            }
            Step::Optional(inner) => {
                let mark = captures.len();
                match self.match_at(pos, inner, captures) {
                    Some(next) => Some(next),
                    None => {
                        captures.truncate(mark);
                        let absent: usize = inner.iter().map(Step::capture_count).sum();
                        captures.extend(std::iter::repeat_n(None, absent));
                        Some(pos)
                    }
                }
            }
        }
    }

    fn capture(&self, pos: usize, kind: CaptureKind) -> Option<(Capture<'s>, usize)> {
        let token = self.tokens.get(pos)?;
        match kind {
            CaptureKind::Ident => (token.kind == TokenKind::Ident).then(|| {
                (
                    Capture {
                        text: Cow::Borrowed(token.text),
                        range: token.range(),
                    },
                    pos + 1,
                )
            }),
            CaptureKind::Bool => {
                matches!(token.kind, TokenKind::TrueKw | TokenKind::FalseKw).then(|| {
                    (
                        Capture {
                            text: Cow::Borrowed(token.text),
                            range: token.range(),
                        },
                        pos + 1,
                    )
                })
            }
            CaptureKind::Number => {
                if token.kind == TokenKind::Number {
                    return Some((
                        Capture {
                            text: Cow::Borrowed(token.text),
                            range: token.range(),
                        },
                        pos + 1,
                    ));
                }
                if token.kind != TokenKind::Minus {
                    return None;
                }
                let number = self.tokens.get(pos + 1)?;
                if number.kind != TokenKind::Number {
                    return None;
                }
                let source: &'s str = self.source;
                let range = token.range().cover(number.range());
                let text = if token.range().end() == number.offset {
                    Cow::Borrowed(&source[range])
                } else {
                    Cow::Owned(format!("-{}", number.text))
                };
                Some((Capture { text, range }, pos + 2))
            }
        }
    }
}

impl<'s> Iterator for Matches<'_, 's> {
    type Item = Match<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.tokens.len() {
            let start = self.pos;
            let mut captures = Vec::with_capacity(self.pattern.capture_count());
            match self.match_at(start, &self.pattern.steps, &mut captures) {
                Some(end) if end > start => {
                    self.pos = end;
                    let range = self.tokens[start].range().cover(self.tokens[end - 1].range());
                    return Some(Match {
                        pattern: self.pattern.name,
                        range,
                        captures,
                    });
                }
                _ => self.pos += 1,
            }
        }
        None
    }
}
