use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    Assignment, // :=
    Equals,     // =
    Less,       // <

    Plus,
    Dash,
    Star,
    Slash,

    OpenParen,
    CloseParen,
    Semicolon,

    // Reserved
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Read,
    Write,
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::End
                | TokenKind::Repeat
                | TokenKind::Until
                | TokenKind::Read
                | TokenKind::Write
        )
    }

    pub fn is_operator(&self) -> bool {
        !self.is_keyword()
            && !matches!(
                self,
                TokenKind::EOF | TokenKind::Number | TokenKind::Identifier
            )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = &self.span.start;

        match self.kind {
            TokenKind::Identifier | TokenKind::Number => write!(
                f,
                "{}:{} {} ({})",
                start.line, start.column, self.kind, self.value
            ),
            _ => write!(f, "{}:{} {}", start.line, start.column, self.kind),
        }
    }
}
