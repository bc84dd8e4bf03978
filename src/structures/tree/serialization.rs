use std::fmt;
use std::str::Split;

use crate::constants::{ABSENT_TOKEN, DELIMITER};
use crate::errors::{CodecError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Value(i32),
    Absent,
}

impl Token {
    /// Accepts exactly `#` or an optional `-` followed by ASCII digits.
    pub fn parse(position: usize, raw: &str) -> Result<Token> {
        if raw == ABSENT_TOKEN {
            return Ok(Token::Absent);
        }

        let digits = raw.strip_prefix('-').unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::InvalidToken {
                position,
                token: raw.to_string(),
            });
        }

        // Shape is already checked, so the only failure left is overflow.
        raw.parse::<i32>()
            .map(Token::Value)
            .map_err(|_| CodecError::OutOfRange {
                position,
                token: raw.to_string(),
            })
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Token::Absent)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Value(val) => write!(f, "{}", val),
            Token::Absent => f.write_str(ABSENT_TOKEN),
        }
    }
}

impl From<Option<i32>> for Token {
    fn from(slot: Option<i32>) -> Self {
        match slot {
            Some(val) => Token::Value(val),
            None => Token::Absent,
        }
    }
}

pub struct Tokenizer<'a> {
    parts: Option<Split<'a, char>>,
    position: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        // One trailing delimiter is part of the format, not an empty token.
        let body = text.strip_suffix(DELIMITER).unwrap_or(text);
        let parts = if text.is_empty() {
            None
        } else {
            Some(body.split(DELIMITER))
        };

        Tokenizer { parts, position: 0 }
    }

    /// Index of the next token to be produced.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.parts.as_ref().map_or(0, |parts| parts.clone().count())
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.parts.as_mut()?.next()?;
        let position = self.position;
        self.position += 1;
        Some(Token::parse(position, raw))
    }
}

pub fn tokens(text: &str) -> Result<Vec<Token>> {
    Tokenizer::new(text).collect()
}
