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

//! Sample `xxd` dumps for use in tests.

/// A 16-byte section in one full dump row: eight half-tokens,
/// four instructions.
pub const SINGLE_ROW: &str =
    "00000000: 1234 5678 9abc def0 1234 5678 9abc def0  .4Vx.....4Vx....\n";

/// Dump of a 32-byte leaf function prologue/epilogue, two full rows.
pub const LEAF_FUNCTION: &str = indoc::indoc! {"
    00000000: 27bd ffe8 afbe 0014 03a0 f025 afc4 0018  '..........%....
    00000010: afc5 001c 8fc2 0018 03e0 0008 27bd 0018  ............'...
"};

/// A 12-byte section: the final row holds fewer tokens than a full one and is
/// padded before its ASCII column.
pub const SHORT_TAIL: &str = indoc::indoc! {"
    00000000: 2402 000a 03e0 0008                      $.......
    00000008: 0000 0000                                ....
"};

/// A malformed dump with an odd half-token count (14 bytes of section data).
pub const ODD_TAIL: &str = indoc::indoc! {"
    00000000: 2402 000a 03e0 0008 0000 0000 2402       $...........$.
"};
