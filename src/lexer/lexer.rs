use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::LexErrorKind, Position, MK_TOKEN};

use super::tokens::{Token, TokenKind, BOOLEAN_LITERALS, RESERVED_LOOKUP, SIMPLE_LOOKUP};

lazy_static! {
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \\t\\r]+").unwrap();
    static ref IDENTIFIER_PATTERN: Regex =
        Regex::new("^[_\\p{Alphabetic}][_\\p{Alphabetic}\\p{N}]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^(?:[0-9]|\\.[0-9])[0-9.]*").unwrap();
}

/// Pull-based scanner over one source buffer.
///
/// Every call to [`Lexer::next_token`] returns the next token in source order.
/// Once the buffer is exhausted the lexer keeps returning the same EOF token.
/// Malformed input never stops the lexer: it is reported as an ILLEGAL token
/// carrying a [`LexErrorKind`].
#[derive(Clone)]
pub struct Lexer {
    source: String,
    /// Byte offset of the next unread character
    pos: usize,
    line: u32,
    /// Characters consumed on the current line
    column: u32,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 0,
        }
    }

    /// The next unread character, `None` at the end of the buffer.
    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// The character `distance` places after the next unread one.
    pub fn peek_char(&self, distance: usize) -> Option<char> {
        self.remainder().chars().nth(distance)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Whether the next unread character ends the line, either `\n`, `\r\n`
    /// or the end of the buffer.
    pub fn at_line_end(&self) -> bool {
        match self.at() {
            None | Some('\n') => true,
            Some('\r') => self.peek_char(1) == Some('\n'),
            _ => false,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Position the next unread character will have once consumed.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column + 1)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.at()?;
        self.pos += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Consumes `len` bytes that are known not to contain a newline.
    fn advance_n(&mut self, len: usize) {
        let consumed = self.source[self.pos..self.pos + len].chars().count();
        self.column += consumed as u32;
        self.pos += len;
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE_PATTERN.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }

    fn skip_comment(&mut self) {
        while matches!(self.at(), Some(c) if c != '\n') {
            self.advance();
        }
    }

    fn fixed_token(&mut self, kind: TokenKind, position: Position) -> Token {
        let value = kind.as_str();
        self.advance_n(value.len());
        MK_TOKEN!(kind, String::from(value), position, false)
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let position = self.position();
            let Some(c) = self.at() else {
                return MK_TOKEN!(TokenKind::EOF, String::new(), position, false);
            };

            if let Some(kind) = SIMPLE_LOOKUP.get(&c) {
                let kind = *kind;
                self.advance();
                return MK_TOKEN!(kind, String::from(kind.as_str()), position, false);
            }

            match c {
                '/' => {
                    if self.peek_char(1) == Some('/') {
                        self.skip_comment();
                        continue;
                    }
                    return self.fixed_token(TokenKind::Slash, position);
                }
                '<' => {
                    let kind = match self.peek_char(1) {
                        Some('-') => TokenKind::Assignment,
                        Some('>') => TokenKind::NotEquals,
                        Some('=') => TokenKind::LessEquals,
                        _ => TokenKind::Less,
                    };
                    return self.fixed_token(kind, position);
                }
                '>' => {
                    let kind = match self.peek_char(1) {
                        Some('=') => TokenKind::GreaterEquals,
                        _ => TokenKind::Greater,
                    };
                    return self.fixed_token(kind, position);
                }
                '"' => return self.read_string(position),
                '\'' => return self.read_char(position),
                '.' if !self.peek_char(1).is_some_and(|next| next.is_ascii_digit()) => {
                    return self.fixed_token(TokenKind::Dot, position);
                }
                _ => {}
            }

            if c.is_ascii_digit() || c == '.' {
                return self.read_number(position);
            }

            if c.is_alphabetic() || c == '_' {
                return self.read_identifier(position);
            }

            self.advance();
            return MK_TOKEN!(
                TokenKind::Illegal,
                c.to_string(),
                position,
                false,
                LexErrorKind::UnrecognisedCharacter
            );
        }
    }

    fn read_string(&mut self, position: Position) -> Token {
        let start = self.pos;
        self.advance();

        loop {
            match self.at() {
                Some('"') => {
                    self.advance();
                    let value = String::from(&self.source[start..self.pos]);
                    return MK_TOKEN!(TokenKind::String, value, position, true);
                }
                Some(_) if !self.at_line_end() => {
                    self.advance();
                }
                _ => {
                    let value = String::from(&self.source[start..self.pos]);
                    return MK_TOKEN!(
                        TokenKind::Illegal,
                        value,
                        position,
                        false,
                        LexErrorKind::UnterminatedString
                    );
                }
            }
        }
    }

    fn read_char(&mut self, position: Position) -> Token {
        let start = self.pos;
        self.advance();

        let is_closed = match self.at() {
            Some('\'') => true,
            Some(c) if c != '\n' => self.peek_char(1) == Some('\''),
            _ => false,
        };

        if is_closed {
            if self.at() != Some('\'') {
                self.advance();
            }
            self.advance();
            let value = String::from(&self.source[start..self.pos]);
            return MK_TOKEN!(TokenKind::Char, value, position, true);
        }

        // Swallow the rest of the malformed literal, stopping at the line end
        while !self.at_line_end() {
            if self.advance() == Some('\'') {
                break;
            }
        }

        let value = String::from(&self.source[start..self.pos]);
        MK_TOKEN!(
            TokenKind::Illegal,
            value,
            position,
            false,
            LexErrorKind::MalformedChar
        )
    }

    fn read_number(&mut self, position: Position) -> Token {
        let Some(matched) = NUMBER_PATTERN.find(self.remainder()) else {
            self.advance();
            return MK_TOKEN!(
                TokenKind::Illegal,
                String::from("."),
                position,
                false,
                LexErrorKind::MalformedNumber
            );
        };

        let value = String::from(matched.as_str());
        self.advance_n(value.len());

        let points = value.matches('.').count();
        if points > 1 || value.ends_with('.') {
            return MK_TOKEN!(
                TokenKind::Illegal,
                value,
                position,
                false,
                LexErrorKind::MalformedNumber
            );
        }

        let kind = if points == 1 {
            TokenKind::Real
        } else {
            TokenKind::Integer
        };

        MK_TOKEN!(kind, value, position, true)
    }

    fn read_identifier(&mut self, position: Position) -> Token {
        let Some(matched) = IDENTIFIER_PATTERN.find(self.remainder()) else {
            let c = self.advance().unwrap_or_default();
            return MK_TOKEN!(
                TokenKind::Illegal,
                c.to_string(),
                position,
                false,
                LexErrorKind::UnrecognisedCharacter
            );
        };

        let value = String::from(matched.as_str());
        self.advance_n(value.len());

        if BOOLEAN_LITERALS.contains(&value.as_str()) {
            return MK_TOKEN!(TokenKind::Boolean, value, position, true);
        }

        let kind = RESERVED_LOOKUP
            .get(value.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, value, position, false)
    }
}

/// Lexes the whole buffer, including the final EOF token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(String::from(source));
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let at_end = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_end {
            return tokens;
        }
    }
}
