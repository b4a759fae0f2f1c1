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

//! External toolchain collaborators.
//!
//! The compiler, section extractor, and hex dumper are opaque external
//! programs with a file-in/file-out contract, modelled by [`Tool`]. Every
//! invocation is checked: a tool that cannot be spawned or exits non-zero
//! aborts the pipeline with the tool named in the error, instead of letting a
//! later stage chew on missing data.

use std::path::Path;
use std::process::{Command, ExitStatus, Output};

use displaydoc::Display;
use log::debug;
use thiserror::Error;

/// Failure of one external tool invocation.
#[derive(Debug, Display, Error)]
pub enum ToolError {
    /// failed to invoke {tool}: {source}
    Spawn {
        /// The program that could not be started.
        tool: String,
        /// The underlying spawn error, typically "file not found".
        source: std::io::Error,
    },
    /// {tool} {status}: {stderr}
    Failed {
        /// The program that ran and failed.
        tool: String,
        /// The non-success exit status.
        status: ExitStatus,
        /// Everything the tool printed to stderr.
        stderr: String,
    },
    /// failed to save output of {tool}: {source}
    SaveOutput {
        /// The program whose captured output could not be written out.
        tool: String,
        /// The underlying write error.
        source: std::io::Error,
    },
}

/// An external tool: consumes one input file, produces one output file.
pub trait Tool {
    /// The program name, for logs and error messages.
    fn name(&self) -> &str;
    /// Consume `input` and produce `output`, failing on non-zero exit.
    fn run(&self, input: &Path, output: &Path) -> Result<(), ToolError>;
}

fn checked(tool: &str, command: &mut Command) -> Result<Output, ToolError> {
    debug!("running {:?}", command);
    let output = command.output()
        .map_err(|source| ToolError::Spawn { tool: tool.to_string(), source })?;
    if !output.status.success() {
        return Err(ToolError::Failed {
            tool: tool.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(output)
}

/// The MIPS cross C compiler, producing an object file from a C source file.
#[derive(Debug, Clone)]
pub struct MipsCompiler {
    /// Compiler executable name.
    pub program: String,
    /// Flags passed before the source file.
    pub flags: Vec<String>,
}

impl Default for MipsCompiler {
    fn default() -> Self {
        MipsCompiler {
            program: "mips-linux-gnu-gcc".to_string(),
            flags: ["-mshared", "-mfp32", "-mips1", "-c"]
                .iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Tool for MipsCompiler {
    fn name(&self) -> &str { &self.program }

    fn run(&self, input: &Path, output: &Path) -> Result<(), ToolError> {
        checked(&self.program, Command::new(&self.program)
            .args(&self.flags)
            .arg(input)
            .arg("-o")
            .arg(output))?;
        Ok(())
    }
}

/// Copies one named section out of an object file as raw binary.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    /// Extractor executable name.
    pub program: String,
    /// Object file format of the input, a big-endian 32-bit ELF for MIPS.
    pub format: String,
    /// The section to copy out.
    pub section: String,
}

impl Default for TextExtractor {
    fn default() -> Self {
        TextExtractor {
            program: "objcopy".to_string(),
            format: "elf32-big".to_string(),
            section: ".text".to_string(),
        }
    }
}

impl Tool for TextExtractor {
    fn name(&self) -> &str { &self.program }

    fn run(&self, input: &Path, output: &Path) -> Result<(), ToolError> {
        checked(&self.program, Command::new(&self.program)
            .arg("-I").arg(&self.format)
            .arg("-j").arg(&self.section)
            .arg("-O").arg("binary")
            .arg(input)
            .arg(output))?;
        Ok(())
    }
}

/// Produces an offset-plus-hex textual dump of a binary file. The dump tool
/// prints to stdout, so its output is captured and written to the output path
/// by hand.
#[derive(Debug, Clone)]
pub struct HexDumper {
    /// Dumper executable name.
    pub program: String,
}

impl Default for HexDumper {
    fn default() -> Self {
        HexDumper { program: "xxd".to_string() }
    }
}

impl Tool for HexDumper {
    fn name(&self) -> &str { &self.program }

    fn run(&self, input: &Path, output: &Path) -> Result<(), ToolError> {
        let dump = checked(&self.program, Command::new(&self.program).arg(input))?;
        std::fs::write(output, &dump.stdout)
            .map_err(|source| ToolError::SaveOutput { tool: self.program.clone(), source })
    }
}
