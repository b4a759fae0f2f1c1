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

//! The compile, extract, dump, reformat pipeline.
//!
//! Strictly sequential: each step's output file is the next step's input, so
//! every external invocation is checked before the next one starts.
//! Intermediate files live in a per-run temporary directory that is removed
//! when the run finishes, on success and failure alike.

use std::fs;
use std::path::Path;

use displaydoc::Display;
use log::{debug, info};
use thiserror::Error;

use crate::listing::{self, Listing};
use crate::toolchain::{HexDumper, MipsCompiler, TextExtractor, Tool, ToolError};

/// All kinds of errors that might abort a pipeline run.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// external tool failed: {0}
    Tool(#[from] ToolError),
    /// cannot reformat hex dump: {0}
    Reformat(#[from] listing::Error),
    /// I/O failure: {0}
    Io(#[from] std::io::Error),
}

/// The full source-to-listing pipeline, a composition of three [`Tool`]s
/// followed by the in-crate reformat step.
pub struct Pipeline {
    compiler: Box<dyn Tool>,
    extractor: Box<dyn Tool>,
    dumper: Box<dyn Tool>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::new(
            Box::new(MipsCompiler::default()),
            Box::new(TextExtractor::default()),
            Box::new(HexDumper::default()),
        )
    }
}

impl Pipeline {
    /// Assemble a pipeline from the given tools.
    pub fn new(compiler: Box<dyn Tool>, extractor: Box<dyn Tool>, dumper: Box<dyn Tool>) -> Self {
        Pipeline { compiler, extractor, dumper }
    }

    /// Compile `source`, extract and dump its code section, and write the
    /// one-instruction-per-line listing to `destination`.
    pub fn run(&self, source: &Path, destination: &Path) -> Result<(), Error> {
        let work_dir = tempfile::tempdir()?;
        let object = work_dir.path().join("input.o");
        let section = work_dir.path().join("text.bin");
        let dump = work_dir.path().join("text.dump");

        debug!("compiling {} with {}", source.display(), self.compiler.name());
        self.compiler.run(source, &object)?;
        debug!("extracting code section with {}", self.extractor.name());
        self.extractor.run(&object, &section)?;
        debug!("dumping section bytes with {}", self.dumper.name());
        self.dumper.run(&section, &dump)?;

        let listing = Listing::from_dump(&fs::read_to_string(&dump)?)?;
        listing.write_to(destination)?;
        info!("wrote {} instructions to {}", listing.len(), destination.display());
        Ok(())
    }
}
