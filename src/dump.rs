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

//! Parsing for `xxd`-style hex dumps.
//!
//! Each row reads `OFFSET: T1 T2 ... Tn  ASCII`: a hexadecimal byte offset
//! terminated by a colon, up to eight half-tokens separated by single spaces,
//! and an optional ASCII rendering separated from the tokens by at least two
//! spaces. The offset and the ASCII column are both discarded; only the
//! tokens survive, flattened in row-major order.

use displaydoc::Display;
use thiserror::Error;

use crate::token::HalfToken;

/// Parse error for hex dump text.
#[derive(Debug, Display, Error, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// line {line}: dump row has no offset column
    MissingOffset {
        /// 1-based line number of the offending row.
        line: usize,
    },
    /// line {line}: invalid byte offset "{offset}"
    InvalidOffset {
        /// 1-based line number of the offending row.
        line: usize,
        /// The text found where a hexadecimal offset was expected.
        offset: String,
    },
    /// line {line}: invalid half-token "{token}"
    InvalidToken {
        /// 1-based line number of the offending row.
        line: usize,
        /// The field that failed to parse as 4 hex characters.
        token: String,
    },
}

/// Parse hex dump text into a flat sequence of [`HalfToken`]s, preserving
/// row-major order. Blank lines are skipped; an empty dump parses to an empty
/// sequence.
pub fn parse(text: &str) -> Result<Vec<HalfToken>, ParseError> {
    let mut halves = Vec::new();
    for (row, line) in text.lines().zip(1..) {
        if row.trim().is_empty() { continue; }
        let (offset, rest) = row.split_once(':')
            .ok_or(ParseError::MissingOffset { line })?;
        if offset.is_empty() || !offset.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidOffset { line, offset: offset.to_string() });
        }
        // everything from the first double space onwards is the ASCII column
        let rest = rest.trim_start();
        let data = rest.find("  ").map_or(rest, |k| &rest[..k]);
        for field in data.split_whitespace() {
            let token = field.parse::<HalfToken>()
                .map_err(|_| ParseError::InvalidToken { line, token: field.to_string() })?;
            halves.push(token);
        }
    }
    Ok(halves)
}
