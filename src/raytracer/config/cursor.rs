use crate::error::{RaycastError, Result};
use std::iter::Peekable;
use std::str::Chars;

/// Character stream over a scene description with one character of lookahead.
///
/// The line counter is 1-based and moves when a newline is consumed, so a
/// newline that is pushed back and read again is only counted once.
pub struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
    pushed_back: Option<char>,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor {
            chars: input.chars().peekable(),
            pushed_back: None,
            line: 1,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Looks at the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        match self.pushed_back {
            Some(c) => Some(c),
            None => self.chars.peek().copied(),
        }
    }

    /// Consumes the next character, failing at end of input.
    pub fn advance(&mut self) -> Result<char> {
        let c = match self.pushed_back.take() {
            Some(c) => c,
            None => self
                .chars
                .next()
                .ok_or(RaycastError::UnexpectedEndOfInput { line: self.line })?,
        };
        if c == '\n' {
            self.line += 1;
        }
        Ok(c)
    }

    /// Returns one character to the stream. Only a single character may be
    /// pending at a time.
    pub fn pushback(&mut self, c: char) {
        debug_assert!(
            self.pushed_back.is_none(),
            "only one character of pushback is supported"
        );
        if c == '\n' {
            self.line -= 1;
        }
        self.pushed_back = Some(c);
    }

    /// Leaves the cursor right before the next non-whitespace character.
    /// Reaching end of input here is not an error; the next read reports it.
    pub fn skip_whitespace(&mut self) -> Result<()> {
        while self.peek().is_some() {
            let c = self.advance()?;
            if !is_whitespace(c) {
                self.pushback(c);
                break;
            }
        }
        Ok(())
    }

    pub fn expect(&mut self, expected: char) -> Result<()> {
        let line = self.line;
        let actual = self.advance()?;
        if actual != expected {
            return Err(RaycastError::UnexpectedCharacter {
                expected,
                actual,
                line,
            });
        }
        Ok(())
    }

    /// True once every character, including any pushed back, has been read.
    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }
}

/// ASCII whitespace including vertical tab, which `is_ascii_whitespace` omits.
pub fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}
