#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Line and column of a token's first character.
///
/// Lines start at 1. The column counts the characters consumed on the line so
/// far, including the token's first character, and is reset to 0 whenever a
/// newline is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}

/// Returns the text of the given (1-based) line, without its line terminator.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders a diagnostic with the offending source line and a caret under its
/// column.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnexpectedToken (Expected `<-`, found `=`)
        -> program.pseudo:20:3
           |
        20 | x = 1
           | --^
    */

    let position = error.get_position();
    let line_text = get_source_line(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    rendered.push_str(&format!("-> {}:{}:{}\n", file, position.line, position.column));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    rendered
}

/// Prints a diagnostic rendered by [`render_error`].
pub fn display_error(error: &Error, source: &str, file: &str) {
    print!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
