//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(line: u32, column: u32) -> Position {
    Position {
        offset: 0,
        line,
        column,
        file: Rc::new("test.tny".to_string()),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '@' },
        position(1, 10),
    );

    assert_eq!(error.get_error_name(), "InvalidCharacter");
    assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: '@' });
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnterminatedComment { depth: 2 },
        position(4, 2),
    );

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 2);
    assert_eq!(error.get_error_name(), "UnterminatedComment");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '#' },
        position(3, 7),
    );

    assert_eq!(error.to_string(), "test.tny:3:7: invalid character: '#'");
}

#[test]
fn test_unterminated_comment_display() {
    let error = Error::new(
        ErrorImpl::UnterminatedComment { depth: 3 },
        position(1, 1),
    );

    assert_eq!(
        error.to_string(),
        "test.tny:1:1: unterminated comment (3 level(s) still open)"
    );
}

#[test]
fn test_error_tips() {
    let single = Error::new(ErrorImpl::UnterminatedComment { depth: 1 }, position(1, 1));
    let nested = Error::new(ErrorImpl::UnterminatedComment { depth: 2 }, position(1, 1));
    let invalid = Error::new(ErrorImpl::InvalidCharacter { character: '\t' }, position(1, 1));

    assert_eq!(
        single.get_tip().to_string(),
        "comment opened here is never closed, add a matching `}`"
    );
    assert_eq!(
        nested.get_tip().to_string(),
        "comment opened here is never closed, 2 `}` still missing"
    );
    assert_eq!(
        invalid.get_tip().to_string(),
        "character `\\t` is not part of the TINY alphabet"
    );
}

#[test]
fn test_error_tip_none_display() {
    assert_eq!(ErrorTip::None.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}

    let error = Error::new(ErrorImpl::InvalidCharacter { character: '$' }, position(1, 1));
    assert_error(&error);
}
