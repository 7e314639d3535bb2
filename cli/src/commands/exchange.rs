// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use anyhow::Context;
use rawether_common::config::Config;
use rawether_core::network::memory::MemorySocket;
use rawether_core::network::socket::LinkSocket;
use rawether_core::transceiver::Transceiver;

use crate::commands::FrameArgs;
use crate::commands::receive::receive_one;
use crate::commands::send::{offline_interface, transmit};
use crate::terminal::print::Print;

/// Sends one frame and reports the next frame seen on the same socket.
///
/// With `--dry-run` the frame loops back through memory, so the received
/// report shows the frame that was just built.
pub async fn exchange(args: &FrameArgs, cfg: &Config) -> anyhow::Result<()> {
    Print::header("exchanging frames");

    if args.dry_run {
        let trx = Transceiver::new(MemorySocket::loopback(offline_interface(cfg)));
        return run(trx, args).await;
    }

    let trx = Transceiver::open(cfg).context("opening raw socket")?;
    run(trx, args).await
}

async fn run<S>(mut trx: Transceiver<S>, args: &FrameArgs) -> anyhow::Result<()>
where
    S: LinkSocket + Send + 'static,
{
    if let Err(e) = transmit(&mut trx, args) {
        trx.close();
        return Err(e);
    }

    let (trx, frame) = receive_one(trx).await?;
    Print::received(&frame, 0);
    trx.close();
    Ok(())
}
