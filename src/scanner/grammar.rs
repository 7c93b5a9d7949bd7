//! Lexical tables consulted by the scanner.
//!
//! A [`Grammar`] bundles everything that decides how a run of characters is
//! classified: the keyword table, the operator/delimiter table, and the
//! identifier and number patterns. The TINY tables are shared through
//! [`TINY_GRAMMAR`].

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use super::tokens::TokenKind;

pub const TINY_IDENTIFIER: &str = "[A-Za-z][A-Za-z0-9_]*";
pub const TINY_NUMBER: &str = "[0-9]+";
pub const DECIMAL_NUMBER: &str = "[0-9]+(\\.[0-9]+)?";

lazy_static! {
    pub static ref TINY_GRAMMAR: Grammar = Grammar::tiny();
}

#[derive(Debug, Clone)]
pub struct Grammar {
    keywords: HashMap<String, TokenKind>,
    /// Sorted longest lexeme first, so the first prefix hit is the longest match.
    operators: Vec<(String, TokenKind)>,
    identifier: Regex,
    number: Regex,
    case_sensitive: bool,
}

impl Grammar {
    /// Creates a grammar with empty keyword and operator tables.
    ///
    /// Both patterns are anchored at the cursor, so `[0-9]+` only matches a
    /// number starting exactly at the current character.
    pub fn new(identifier_pattern: &str, number_pattern: &str) -> Result<Grammar, regex::Error> {
        Ok(Grammar {
            keywords: HashMap::new(),
            operators: vec![],
            identifier: anchored(identifier_pattern)?,
            number: anchored(number_pattern)?,
            case_sensitive: true,
        })
    }

    pub fn tiny() -> Grammar {
        Grammar::new(TINY_IDENTIFIER, TINY_NUMBER)
            .expect("TINY lexical patterns are valid regular expressions")
            .keyword("if", TokenKind::If)
            .keyword("then", TokenKind::Then)
            .keyword("else", TokenKind::Else)
            .keyword("end", TokenKind::End)
            .keyword("repeat", TokenKind::Repeat)
            .keyword("until", TokenKind::Until)
            .keyword("read", TokenKind::Read)
            .keyword("write", TokenKind::Write)
            .operator(":=", TokenKind::Assignment)
            .operator("=", TokenKind::Equals)
            .operator("<", TokenKind::Less)
            .operator("+", TokenKind::Plus)
            .operator("-", TokenKind::Dash)
            .operator("*", TokenKind::Star)
            .operator("/", TokenKind::Slash)
            .operator("(", TokenKind::OpenParen)
            .operator(")", TokenKind::CloseParen)
            .operator(";", TokenKind::Semicolon)
    }

    pub fn keyword(mut self, spelling: &str, kind: TokenKind) -> Self {
        let spelling = if self.case_sensitive {
            spelling.to_string()
        } else {
            spelling.to_lowercase()
        };

        self.keywords.insert(spelling, kind);
        self
    }

    /// Adds an operator or delimiter. Re-adding a lexeme replaces its kind.
    pub fn operator(mut self, lexeme: &str, kind: TokenKind) -> Self {
        if lexeme.is_empty() {
            return self;
        }

        self.operators.retain(|(existing, _)| existing != lexeme);
        self.operators.push((lexeme.to_string(), kind));
        self.operators
            .sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()));
        self
    }

    /// Makes keyword lookup ignore case. Identifiers keep their original spelling.
    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self.keywords = self
            .keywords
            .into_iter()
            .map(|(spelling, kind)| (spelling.to_lowercase(), kind))
            .collect();
        self
    }

    pub fn lookup_keyword(&self, word: &str) -> Option<TokenKind> {
        if self.case_sensitive {
            self.keywords.get(word).copied()
        } else {
            self.keywords.get(&word.to_lowercase()).copied()
        }
    }

    /// True if some operator or delimiter lexeme starts with `c`.
    pub fn is_operator_or_delimiter(&self, c: char) -> bool {
        self.operators
            .iter()
            .any(|(lexeme, _)| lexeme.starts_with(c))
    }

    /// Returns the longest operator lexeme that prefixes `remainder`.
    pub fn longest_operator(&self, remainder: &str) -> Option<(&str, TokenKind)> {
        self.operators
            .iter()
            .find(|(lexeme, _)| remainder.starts_with(lexeme.as_str()))
            .map(|(lexeme, kind)| (lexeme.as_str(), *kind))
    }

    /// Byte length of the identifier starting at the front of `remainder`.
    pub fn match_identifier(&self, remainder: &str) -> Option<usize> {
        non_empty_match(&self.identifier, remainder)
    }

    /// Byte length of the number literal starting at the front of `remainder`.
    pub fn match_number(&self, remainder: &str) -> Option<usize> {
        non_empty_match(&self.number, remainder)
    }
}

fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})", pattern))
}

fn non_empty_match(regex: &Regex, remainder: &str) -> Option<usize> {
    regex
        .find(remainder)
        .map(|matched| matched.end())
        .filter(|length| *length > 0)
}
