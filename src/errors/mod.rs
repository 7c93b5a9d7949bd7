//! Error types and error handling for the scanner.
//!
//! This module defines the lexical errors surfaced to the caller. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each lexical failure
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
