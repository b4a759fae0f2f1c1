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

//! Compile C sources into flat MIPS instruction listings.
//!
//! This crate drives the classic shell recipe: cross-compile the source file,
//! copy the `.text` section out of the object file as raw bytes, hex-dump
//! those bytes, then regroup the dump into one 32-bit instruction per output
//! line. Only the final regrouping is implemented here; the compiler, section
//! extractor, and hex dumper are external tools behind the
//! [`toolchain::Tool`] trait, invoked in sequence by [`Pipeline`].
//!
//! The instruction bytes never get decoded: the whole transform is
//! string-level, from 4-character half-tokens in the dump to 8-character
//! instruction tokens in the listing.

#![warn(missing_docs)]

pub mod token;
pub mod dump;
pub mod listing;
pub mod toolchain;
pub mod pipeline;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::Cli;

#[cfg(test)]
mod samples;

pub use token::{HalfToken, InstrToken};
pub use listing::Listing;
pub use pipeline::Pipeline;
