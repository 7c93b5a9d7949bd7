#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod macros;
pub mod scanner;

extern crate regex;

/// A point in the source text.
///
/// `offset` is a byte offset into the source, `line` and `column` are 1-based and
/// count characters rather than bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of a 1-based line, without its line terminator.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_source_line() {
        let source = "read x;\r\n  if x < 1 then\nend";

        assert_eq!(super::get_source_line(source, 1), Some("read x;"));
        assert_eq!(super::get_source_line(source, 2), Some("  if x < 1 then"));
        assert_eq!(super::get_source_line(source, 3), Some("end"));
        assert_eq!(super::get_source_line(source, 4), None);
        assert_eq!(super::get_source_line(source, 0), None);
    }

    #[test]
    fn test_render_invalid_character() {
        let source = "read x;\n  x := @;\n";
        let error = Error::new(
            ErrorImpl::InvalidCharacter { character: '@' },
            Position {
                offset: 15,
                line: 2,
                column: 8,
                file: Rc::new("prog.tny".to_string()),
            },
        );

        let rendered = super::render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: InvalidCharacter (character `@` is not part of the TINY alphabet)"
        );
        assert_eq!(lines[1], "-> prog.tny");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x := @;");
        assert_eq!(lines[4], "  | -----^");
    }

    #[test]
    fn test_render_first_column() {
        let source = "{ never closed";
        let error = Error::new(
            ErrorImpl::UnterminatedComment { depth: 1 },
            Position {
                offset: 0,
                line: 1,
                column: 1,
                file: Rc::new("prog.tny".to_string()),
            },
        );

        let rendered = super::render_error(&error, source);

        assert!(rendered.contains("1 | { never closed"));
        assert!(rendered.ends_with("  | ^\n"));
    }
}

/// Renders an error as a caret diagram pointing at the offending column.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: message
        -> prog.tny
          |
        3 | x := @;
          | -----^
    */

    let position = error.get_position();
    let line_text = get_source_line(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        output.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    output.push_str(&format!("-> {}\n", position.file));
    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    let mut removed = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += c.len_utf8();
            removed += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), removed)
}
