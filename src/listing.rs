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

//! Instruction listings, one token per line.

use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::Path;

use displaydoc::Display as DisplayDoc;
use thiserror::Error;

use crate::dump;
use crate::token::{self, InstrToken};

/// An ordered list of instruction tokens, matching the order of the bytes in
/// the code section it was dumped from. One token per line when displayed,
/// each line terminated by a newline; an empty listing displays as the empty
/// string.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Listing(Box<[InstrToken]>);

/// Error turning hex dump text into a [`Listing`].
#[derive(Debug, DisplayDoc, Error, Clone, Eq, PartialEq)]
pub enum Error {
    /// malformed hex dump: {0}
    Parse(#[from] dump::ParseError),
    /// incomplete instruction stream: {0}
    Pair(#[from] token::PairError),
}

impl Listing {
    /// Build a listing from hex dump text: flatten the dump rows, then pair
    /// adjacent half-tokens into instructions.
    pub fn from_dump(text: &str) -> Result<Self, Error> {
        let halves = dump::parse(text)?;
        Ok(Listing(token::pair_halves(&halves)?.into_boxed_slice()))
    }

    /// Number of instructions, i.e. code section bytes divided by 4.
    pub fn len(&self) -> usize { self.0.len() }

    /// Whether the listing holds no instructions at all.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Iterate over the instruction tokens in program order.
    pub fn iter(&self) -> impl Iterator<Item = &InstrToken> { self.0.iter() }

    /// Write the listing to `path`, creating or truncating the file. The file
    /// is created even when the listing is empty.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, self.to_string())
    }
}

impl Display for Listing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for instr in self.0.iter() {
            writeln!(f, "{}", instr)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use itertools::assert_equal;

    use crate::samples;
    use crate::token::PairError;
    use super::{Error, Listing};

    #[test]
    fn test_single_row_regroups() {
        let listing = Listing::from_dump(samples::SINGLE_ROW).unwrap();
        assert_equal(listing.iter().map(|t| t.as_str()),
                     ["12345678", "9abcdef0", "12345678", "9abcdef0"]);
    }

    #[test]
    fn test_display_one_instruction_per_line() {
        let listing = Listing::from_dump(samples::LEAF_FUNCTION).unwrap();
        assert_eq!(listing.len(), 8);
        assert_eq!(listing.to_string(), indoc::indoc! {"
            27bdffe8
            afbe0014
            03a0f025
            afc40018
            afc5001c
            8fc20018
            03e00008
            27bd0018
        "});
    }

    #[test]
    fn test_empty_dump_is_empty_listing() {
        let listing = Listing::from_dump("").unwrap();
        assert!(listing.is_empty());
        assert_eq!(listing.to_string(), "");
    }

    #[test]
    fn test_odd_dump_is_rejected() {
        assert_eq!(Listing::from_dump(samples::ODD_TAIL).unwrap_err(),
                   Error::Pair(PairError::TrailingHalf { total: 7 }));
    }

    #[test]
    fn test_reformat_is_deterministic() {
        let first = Listing::from_dump(samples::LEAF_FUNCTION).unwrap();
        let second = Listing::from_dump(samples::LEAF_FUNCTION).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_write_to_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        Listing::from_dump("").unwrap().write_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        Listing::from_dump(samples::SHORT_TAIL).unwrap().write_to(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(),
                   "2402000a\n03e00008\n00000000\n");
    }
}
