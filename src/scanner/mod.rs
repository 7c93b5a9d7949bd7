//! Lexical analysis module for the TINY language.
//!
//! This module contains the scanner that converts TINY source code into a
//! pull-based stream of tokens for a parser. It handles:
//!
//! - Recognition of keywords, identifiers, numbers, operators and delimiters
//! - Longest-match selection between operators sharing a prefix
//! - Skipping of whitespace and nested `{ ... }` comments
//! - Line/column tracking for every token and error
//!
//! The keyword, operator, identifier and number tables live in [`grammar::Grammar`].

pub mod grammar;
pub mod scanner;
pub mod tokens;
