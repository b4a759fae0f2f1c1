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

//! Command line entry point for `mipstext`.

fn main() {
    // keep the handle alive for the duration of the run
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(flexi_logger::Logger::start)
        .ok();
    if let Err(err) = mipstext::Cli::run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
