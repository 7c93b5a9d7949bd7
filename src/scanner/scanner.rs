use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::{
    grammar::{Grammar, TINY_GRAMMAR},
    tokens::{Token, TokenKind},
};

/// Pull-based scanner over one TINY source string.
///
/// Tokens are produced on demand by [`Scanner::next_token`]. Whitespace and
/// nested `{ ... }` comments between tokens are skipped, and every token and
/// error carries the line and column of its first character.
pub struct Scanner<'g> {
    grammar: &'g Grammar,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
    /// Error found by `has_more_tokens` while skipping, handed out by the next `next_token`.
    pending: Option<Error>,
}

impl Scanner<'static> {
    pub fn new(source: String, file: Option<String>) -> Scanner<'static> {
        Scanner::with_grammar(source, file, &TINY_GRAMMAR)
    }
}

impl<'g> Scanner<'g> {
    pub fn with_grammar(source: String, file: Option<String>, grammar: &'g Grammar) -> Scanner<'g> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<input>"))
        };

        Scanner {
            grammar,
            source,
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
            pending: None,
        }
    }

    /// The cursor: where the next character will be read from.
    pub fn cursor(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
            file: Rc::clone(&self.file),
        }
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// True while another token or a pending error is left.
    ///
    /// Skips whitespace and comments up to the next lexeme. Calling it again
    /// before `next_token` skips nothing further.
    pub fn has_more_tokens(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }

        if let Err(error) = self.skip_whitespace_and_comments() {
            self.pending = Some(error);
            return true;
        }

        !self.at_eof()
    }

    /// Scans the next lexeme.
    ///
    /// Returns an EOF token once the input is exhausted. Lexical errors are
    /// returned as `Err`; the offending input has already been consumed, so
    /// calling again continues with the following character.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if let Some(error) = self.pending.take() {
            return Err(error);
        }

        self.skip_whitespace_and_comments()?;

        let start = self.cursor();

        let c = match self.peek() {
            Some(c) => c,
            None => {
                return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(start, self)));
            }
        };

        let token = if let Some(length) = self.grammar.match_identifier(self.remainder()) {
            Some(self.scan_word(start, length))
        } else if let Some(length) = self.grammar.match_number(self.remainder()) {
            Some(self.scan_number(start, length))
        } else if self.grammar.is_operator_or_delimiter(c) {
            self.scan_operator(start)
        } else {
            None
        };

        match token {
            Some(token) => {
                trace!("{} {:?}", token, token.value);
                Ok(token)
            }
            None => Err(self.invalid_character()),
        }
    }

    /// Scans the rest of the input, stopping at the first lexical error.
    ///
    /// On success the last token is always `TokenKind::EOF`.
    pub fn into_tokens(mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = vec![];

        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::EOF;

            tokens.push(token);

            if done {
                return Ok(tokens);
            }
        }
    }

    /// Scans the rest of the input, collecting every lexical error instead of stopping.
    ///
    /// The token list always ends with `TokenKind::EOF`.
    pub fn into_tokens_with_diagnostics(mut self) -> (Vec<Token>, Vec<Error>) {
        let mut tokens = vec![];
        let mut errors = vec![];

        loop {
            match self.next_token() {
                Ok(token) => {
                    let done = token.kind == TokenKind::EOF;
                    tokens.push(token);

                    if done {
                        return (tokens, errors);
                    }
                }
                Err(error) => errors.push(error),
            }
        }
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn get(&mut self) -> Option<char> {
        let c = self.peek()?;

        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Consumes `length` bytes and returns them as a lexeme.
    fn advance_n(&mut self, length: usize) -> String {
        let end = self.pos + length;
        let value = self.source[self.pos..end].to_string();

        while self.pos < end {
            self.get();
        }

        value
    }

    fn skip_whitespace(&mut self) -> bool {
        let mut skipped = false;

        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }

            self.get();
            skipped = true;
        }

        skipped
    }

    /// Skips one `{ ... }` comment, nested comments included, plus the
    /// whitespace right after it. Returns whether a comment was present.
    fn skip_comments(&mut self) -> Result<bool, Error> {
        if self.peek() != Some('{') {
            return Ok(false);
        }

        let start = self.cursor();
        self.get();

        let mut depth: usize = 1;

        while depth > 0 {
            match self.get() {
                Some('{') => depth += 1,
                Some('}') => depth -= 1,
                Some(_) => {}
                None => {
                    debug!("unterminated comment opened at {}", start);
                    return Err(Error::new(ErrorImpl::UnterminatedComment { depth }, start));
                }
            }
        }

        debug!("skipped comment opened at {}", start);
        self.skip_whitespace();

        Ok(true)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), Error> {
        loop {
            let skipped_whitespace = self.skip_whitespace();
            let skipped_comment = self.skip_comments()?;

            if !skipped_whitespace && !skipped_comment {
                return Ok(());
            }
        }
    }

    fn scan_word(&mut self, start: Position, length: usize) -> Token {
        let value = self.advance_n(length);

        let kind = self
            .grammar
            .lookup_keyword(&value)
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, value, MK_SPAN!(start, self))
    }

    fn scan_number(&mut self, start: Position, length: usize) -> Token {
        let value = self.advance_n(length);

        MK_TOKEN!(TokenKind::Number, value, MK_SPAN!(start, self))
    }

    fn scan_operator(&mut self, start: Position) -> Option<Token> {
        let (lexeme, kind) = self.grammar.longest_operator(self.remainder())?;
        let length = lexeme.len();
        let value = self.advance_n(length);

        Some(MK_TOKEN!(kind, value, MK_SPAN!(start, self)))
    }

    fn invalid_character(&mut self) -> Error {
        let position = self.cursor();
        let character = self.get().unwrap_or('\0');

        debug!("invalid character {:?} at {}", character, position);
        Error::new(ErrorImpl::InvalidCharacter { character }, position)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_more_tokens() {
            Some(self.next_token())
        } else {
            None
        }
    }
}

/// Scans the whole source with the TINY grammar, stopping at the first lexical error.
///
/// On success the last token is always `TokenKind::EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Scanner::new(source, file).into_tokens()
}

/// Scans the whole source with the TINY grammar, collecting every lexical error.
///
/// The token list always ends with `TokenKind::EOF`.
pub fn tokenize_with_diagnostics(source: String, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    Scanner::new(source, file).into_tokens_with_diagnostics()
}
