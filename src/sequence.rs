//! Bit sequence input boundary
//!
//! Everything typed by the user passes through here before it reaches the
//! encoder. Characters other than `'0'` and `'1'` are filtered out, and
//! sequences longer than [`MAX_DIGITS`] are rejected rather than truncated.

use crate::error::{LineCodeError, Result};
use std::ops::Deref;

/// Maximum number of digits accepted in a sequence
pub const MAX_DIGITS: usize = 512;

/// Sequence shown when the application starts
pub const DEFAULT_BITS: &str = "01001100011";

/// Character filter for bit input fields
pub fn is_binary_digit(c: char) -> bool {
    c == '0' || c == '1'
}

/// Drop every character that is not a binary digit
pub fn filter_binary(input: &str) -> String {
    input.chars().filter(|&c| is_binary_digit(c)).collect()
}

/// A validated sequence of `'0'`/`'1'` characters, at most [`MAX_DIGITS`] long
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSequence(String);

impl BitSequence {
    /// Parse a sequence, rejecting any non-binary character.
    pub fn parse(input: &str) -> Result<Self> {
        if let Some((index, bit)) = input.chars().enumerate().find(|&(_, c)| !is_binary_digit(c))
        {
            return Err(LineCodeError::InvalidBit { index, bit });
        }
        Self::check_len(input.len())?;
        Ok(Self(input.to_string()))
    }

    /// Build a sequence from free-form input, discarding non-binary characters.
    ///
    /// The length bound applies after filtering.
    pub fn from_input(input: &str) -> Result<Self> {
        let filtered = filter_binary(input);
        Self::check_len(filtered.len())?;
        Ok(Self(filtered))
    }

    fn check_len(len: usize) -> Result<()> {
        if len > MAX_DIGITS {
            return Err(LineCodeError::OversizeSequence {
                len,
                max: MAX_DIGITS,
            });
        }
        Ok(())
    }

    /// The digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no digits
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for BitSequence {
    fn default() -> Self {
        Self(DEFAULT_BITS.to_string())
    }
}

impl Deref for BitSequence {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for BitSequence {
    type Err = LineCodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
