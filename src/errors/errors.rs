use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{position}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment { .. } => "UnterminatedComment",
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment { depth: 1 } => ErrorTip::Suggestion(String::from(
                "comment opened here is never closed, add a matching `}`",
            )),
            ErrorImpl::UnterminatedComment { depth } => ErrorTip::Suggestion(format!(
                "comment opened here is never closed, {} `}}` still missing",
                depth
            )),
            ErrorImpl::InvalidCharacter { character } => ErrorTip::Suggestion(format!(
                "character `{}` is not part of the TINY alphabet",
                character.escape_debug()
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unterminated comment ({depth} level(s) still open)")]
    UnterminatedComment { depth: usize },
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
}
