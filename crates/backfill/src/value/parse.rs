//! Parses the literal syntax produced by the [Display](std::fmt::Display) implementation of [Value]
//!
//! ```text
//! value  := "null" | "true" | "false" | number | string | list | map
//! number := integer | float | "inf" | "-inf" | "nan"
//! list   := "[" (value ("," value)* ","?)? "]"
//! map    := "{" (key ":" value ("," key ":" value)* ","?)? "}"
//! key    := number | string | identifier
//! string := '"' ... '"' | "'" ... "'"
//! ```
//!
//! Keywords are matched case-insensitively. Lists and maps nest at most
//! [MAX_NESTING] levels deep.

use std::{fmt, str::FromStr};

use error_derive::Error;

use super::{cursor::Cursor, normalize_string_key, Value};
use crate::{Container, Key};

/// How deeply lists and maps may be nested inside each other
const MAX_NESTING: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[msg = "unexpected end of input"]
    UnexpectedEnd,

    #[msg = "unexpected character"]
    UnexpectedCharacter,

    #[msg = "invalid number"]
    InvalidNumber,

    #[msg = "invalid escape sequence"]
    InvalidEscape,

    #[msg = "unterminated string"]
    UnterminatedString,

    #[msg = "trailing characters after value"]
    TrailingCharacters,

    #[msg = "arrays are nested too deeply"]
    NestingTooDeep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,

    /// Byte offset into the input at which the error was detected
    pub position: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.position)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s).parse_document()
    }
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    nesting: usize,
}

impl<'a> Parser<'a> {
    const fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            nesting: 0,
        }
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        if self.nesting == MAX_NESTING {
            return Err(self.error(ParseErrorKind::NestingTooDeep));
        }

        self.nesting += 1;
        Ok(())
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            position: self.cursor.position(),
        }
    }

    /// Report the current character as unexpected, or the end of input if there is none
    fn unexpected(&self) -> ParseError {
        if self.cursor.is_at_end() {
            self.error(ParseErrorKind::UnexpectedEnd)
        } else {
            self.error(ParseErrorKind::UnexpectedCharacter)
        }
    }

    fn parse_document(mut self) -> Result<Value, ParseError> {
        let value = self.parse_value()?;

        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            return Err(self.error(ParseErrorKind::TrailingCharacters));
        }

        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.cursor.skip_whitespace();

        match self.cursor.current() {
            Some('[') => self.parse_list(),
            Some('{') => self.parse_map(),
            Some(quote @ ('"' | '\'')) => self.parse_string(quote).map(Value::Str),
            Some('-' | '0'..='9') => self.parse_number(),
            Some(c) if is_identifier_start(c) => {
                let start = self.cursor.position();
                let identifier = self.parse_identifier();

                if identifier.eq_ignore_ascii_case("null") {
                    Ok(Value::Null)
                } else if identifier.eq_ignore_ascii_case("true") {
                    Ok(Value::Bool(true))
                } else if identifier.eq_ignore_ascii_case("false") {
                    Ok(Value::Bool(false))
                } else if identifier.eq_ignore_ascii_case("inf") {
                    Ok(Value::Float(f64::INFINITY))
                } else if identifier.eq_ignore_ascii_case("nan") {
                    Ok(Value::Float(f64::NAN))
                } else {
                    Err(ParseError {
                        kind: ParseErrorKind::UnexpectedCharacter,
                        position: start,
                    })
                }
            },
            _ => Err(self.unexpected()),
        }
    }

    fn parse_list(&mut self) -> Result<Value, ParseError> {
        self.descend()?;
        self.cursor.eat('[');
        let mut list = Container::new();

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.eat(']') {
                break;
            }

            list.push(self.parse_value()?);

            self.cursor.skip_whitespace();
            if self.cursor.eat(']') {
                break;
            }
            if !self.cursor.eat(',') {
                return Err(self.unexpected());
            }
        }

        self.nesting -= 1;
        Ok(Value::Array(list))
    }

    fn parse_map(&mut self) -> Result<Value, ParseError> {
        self.descend()?;
        self.cursor.eat('{');
        let mut map = Container::new();

        loop {
            self.cursor.skip_whitespace();
            if self.cursor.eat('}') {
                break;
            }

            let key = self.parse_key()?;

            self.cursor.skip_whitespace();
            if !self.cursor.eat(':') {
                return Err(self.unexpected());
            }

            let value = self.parse_value()?;
            map.insert(key, value);

            self.cursor.skip_whitespace();
            if self.cursor.eat('}') {
                break;
            }
            if !self.cursor.eat(',') {
                return Err(self.unexpected());
            }
        }

        self.nesting -= 1;
        Ok(Value::Array(map))
    }

    fn parse_key(&mut self) -> Result<Key, ParseError> {
        match self.cursor.current() {
            Some(quote @ ('"' | '\'')) => Ok(normalize_string_key(self.parse_string(quote)?)),
            Some('-' | '0'..='9') => match self.parse_number()? {
                Value::Int(int) => Ok(Key::Int(int)),
                // Fractional keys are truncated, like everywhere else
                Value::Float(float) => Ok(Key::Int(float.trunc() as i64)),
                _ => Err(self.error(ParseErrorKind::InvalidNumber)),
            },
            Some(c) if is_identifier_start(c) => Ok(Key::Str(self.parse_identifier().to_owned())),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_identifier(&mut self) -> &'a str {
        self.cursor
            .eat_while(|c| c == '_' || c.is_ascii_alphanumeric())
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.cursor.position();
        let remaining = self.cursor.remaining();

        let invalid = || ParseError {
            kind: ParseErrorKind::InvalidNumber,
            position: start,
        };

        if self.cursor.eat('-') && self.cursor.current().is_some_and(is_identifier_start) {
            return if self.parse_identifier().eq_ignore_ascii_case("inf") {
                Ok(Value::Float(f64::NEG_INFINITY))
            } else {
                Err(invalid())
            };
        }

        if self.cursor.eat_while(|c| c.is_ascii_digit()).is_empty() {
            return Err(self.error(ParseErrorKind::InvalidNumber));
        }

        let mut is_float = false;
        if self.cursor.eat('.') {
            is_float = true;
            if self.cursor.eat_while(|c| c.is_ascii_digit()).is_empty() {
                return Err(self.error(ParseErrorKind::InvalidNumber));
            }
        }

        if self.cursor.eat('e') || self.cursor.eat('E') {
            is_float = true;
            if !self.cursor.eat('+') {
                self.cursor.eat('-');
            }
            if self.cursor.eat_while(|c| c.is_ascii_digit()).is_empty() {
                return Err(self.error(ParseErrorKind::InvalidNumber));
            }
        }

        let literal = &remaining[..self.cursor.position() - start];

        if is_float {
            return literal.parse().map(Value::Float).map_err(|_| invalid());
        }

        // Integers that do not fit into 64 bits become floats
        literal
            .parse()
            .map(Value::Int)
            .or_else(|_| literal.parse().map(Value::Float))
            .map_err(|_| invalid())
    }

    fn parse_string(&mut self, quote: char) -> Result<String, ParseError> {
        self.cursor.eat(quote);
        let mut string = String::new();

        loop {
            let Some(c) = self.cursor.next() else {
                return Err(self.error(ParseErrorKind::UnterminatedString));
            };

            match c {
                '\\' => string.push(self.parse_escape()?),
                c if c == quote => return Ok(string),
                other => string.push(other),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char, ParseError> {
        let escaped = match self.cursor.next() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('0') => '\0',
            Some(c @ ('\\' | '"' | '\'')) => c,
            Some('u') => {
                if !self.cursor.eat('{') {
                    return Err(self.error(ParseErrorKind::InvalidEscape));
                }

                let digits = self.cursor.eat_while(|c| c.is_ascii_hexdigit());
                let referenced_char = u32::from_str_radix(digits, 16)
                    .ok()
                    .and_then(char::from_u32);

                match referenced_char {
                    Some(c) if self.cursor.eat('}') => c,
                    _ => return Err(self.error(ParseErrorKind::InvalidEscape)),
                }
            },
            Some(_) => return Err(self.error(ParseErrorKind::InvalidEscape)),
            None => return Err(self.error(ParseErrorKind::UnterminatedString)),
        };

        Ok(escaped)
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}
