/*
 * mipstext: compile C sources into flat MIPS instruction listings.
 * Copyright (C) 2026  mipstext contributors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Hexadecimal instruction tokens.
//!
//! A MIPS instruction is 32 bits, but hex dumps group bytes in pairs, so one
//! instruction appears as two adjacent [`HalfToken`]s. [`pair_halves`] glues
//! them back together in listing order. Tokens stay strings throughout; the
//! hex digits are validated but never interpreted as numbers, and their case
//! is preserved verbatim.

use displaydoc::Display as DisplayDoc;
use itertools::Itertools;
use parse_display::{Display, FromStr};
use thiserror::Error;

/// One 16-bit half of a big-endian MIPS instruction: exactly 4 hex characters.
#[derive(Debug, Display, FromStr, Clone, Ord, PartialOrd, Eq, PartialEq)]
#[display("{0}")]
pub struct HalfToken(#[from_str(regex = "[0-9a-fA-F]{4}")] String);

/// One full MIPS instruction: exactly 8 hex characters.
#[derive(Debug, Display, FromStr, Clone, Ord, PartialOrd, Eq, PartialEq)]
#[display("{0}")]
pub struct InstrToken(#[from_str(regex = "[0-9a-fA-F]{8}")] String);

impl HalfToken {
    /// The 4 hex characters of this half-token.
    pub fn as_str(&self) -> &str { &self.0 }
}

impl InstrToken {
    /// Concatenate two adjacent half-tokens, `hi` first, into one instruction.
    pub fn from_halves(hi: &HalfToken, lo: &HalfToken) -> Self {
        InstrToken(format!("{}{}", hi.0, lo.0))
    }

    /// The 8 hex characters of this instruction token.
    pub fn as_str(&self) -> &str { &self.0 }
}

/// Error pairing half-tokens into instructions.
#[derive(Debug, DisplayDoc, Error, Clone, Eq, PartialEq)]
pub enum PairError {
    /// odd number of half-tokens ({total} in total): the final 16 bits are not a whole instruction
    TrailingHalf {
        /// Total number of half-tokens in the flattened dump.
        total: usize,
    },
}

/// Pair up consecutive half-tokens and concatenate each pair into one
/// instruction token, halving the sequence length. A valid MIPS code section
/// always yields an even count; an odd count is rejected outright rather than
/// truncated.
pub fn pair_halves(halves: &[HalfToken]) -> Result<Vec<InstrToken>, PairError> {
    if halves.len() % 2 != 0 {
        return Err(PairError::TrailingHalf { total: halves.len() });
    }
    Ok(halves.iter().tuples()
        .map(|(hi, lo)| InstrToken::from_halves(hi, lo))
        .collect())
}

#[cfg(test)]
mod tests {
    use itertools::assert_equal;
    use super::{HalfToken, PairError, pair_halves};

    fn halves(tokens: &[&str]) -> Vec<HalfToken> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_half_token_syntax() {
        assert!("1234".parse::<HalfToken>().is_ok());
        assert!("def0".parse::<HalfToken>().is_ok());
        assert!("DEF0".parse::<HalfToken>().is_ok());
        assert!("12g4".parse::<HalfToken>().is_err());
        assert!("123".parse::<HalfToken>().is_err());
        assert!("12345".parse::<HalfToken>().is_err());
        assert!("".parse::<HalfToken>().is_err());
    }

    #[test]
    fn test_pairing_preserves_order_and_case() {
        let paired = pair_halves(&halves(&["1234", "5678", "9abc", "def0"])).unwrap();
        assert_equal(paired.iter().map(|t| t.as_str()), ["12345678", "9abcdef0"]);

        let mixed = pair_halves(&halves(&["ABCD", "ef01"])).unwrap();
        assert_eq!(mixed[0].as_str(), "ABCDef01");
    }

    #[test]
    fn test_pairing_halves_length() {
        let input = halves(&["1234", "5678", "9abc", "def0", "1234", "5678"]);
        assert_eq!(pair_halves(&input).unwrap().len(), input.len() / 2);
        assert!(pair_halves(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_odd_count_fails() {
        let input = halves(&["1234", "5678", "9abc"]);
        assert_eq!(pair_halves(&input).unwrap_err(),
                   PairError::TrailingHalf { total: 3 });
    }
}
