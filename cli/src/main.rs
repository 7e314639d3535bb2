// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # rawether CLI Entry Point
//!
//! Bootstraps logging and the runtime, maps arguments into [`Config`] and
//! dispatches to the subcommand in `commands/`.
//!
//! This is also the error boundary: failures from any phase (socket creation,
//! interface lookup, send, receive) are logged here and turned into a non-zero
//! `ExitCode`. Nothing below this point terminates the process.
//!
//! The runtime is built by hand instead of with `#[tokio::main]` so that it can
//! be shut down with a grace period. A receive interrupted by Ctrl-C leaves its
//! worker thread blocked in the kernel, and a plain runtime drop would wait for
//! it forever.

mod commands;
mod terminal;

use std::process::ExitCode;
use std::time::Duration;

use is_root::is_root;
use rawether_common::{config::Config, error, warn};

use crate::{
    commands::{CommandLine, Commands, checksum, exchange, interfaces, receive, send},
    terminal::{logging, print::Print},
};

const SHUTDOWN_GRACE_MS: u64 = 100;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    logging::init_logging(commands.verbosity);

    let cfg = Config::from(&commands);

    let _ = Print::init(&cfg);
    Print::banner();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Critical failure: could not start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    if needs_socket(&commands.command) && !is_root() {
        warn!("Not running as root, opening a raw socket will likely fail");
    }

    let result = runtime.block_on(async {
        match &commands.command {
            Commands::Send(args) => send::send(args, &cfg),
            Commands::Receive { count } => receive::receive(*count, &cfg).await,
            Commands::Exchange(args) => exchange::exchange(args, &cfg).await,
            Commands::Interfaces => interfaces::interfaces(&cfg),
            Commands::Checksum { text, hex } => {
                checksum::checksum(text.as_deref(), hex.as_deref())
            }
        }
    });

    let exit_code = match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical failure: {e:#}");
            ExitCode::FAILURE
        }
    };

    Print::end_of_program();
    runtime.shutdown_timeout(Duration::from_millis(SHUTDOWN_GRACE_MS));

    exit_code
}

fn needs_socket(command: &Commands) -> bool {
    match command {
        Commands::Send(args) | Commands::Exchange(args) => !args.dry_run,
        Commands::Receive { .. } => true,
        Commands::Interfaces | Commands::Checksum { .. } => false,
    }
}
