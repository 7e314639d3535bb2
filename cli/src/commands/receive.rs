// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use anyhow::{Context, bail};
use rawether_common::config::Config;
use rawether_common::info;
use rawether_core::network::socket::LinkSocket;
use rawether_core::transceiver::Transceiver;
use rawether_protocols::ethernet::ReceivedFrame;

use crate::terminal::print::Print;

pub async fn receive(count: usize, cfg: &Config) -> anyhow::Result<()> {
    Print::header("receiving frames");

    let mut trx = Transceiver::open(cfg).context("opening raw socket")?;
    info!(
        "Waiting for {} frame{} on {}",
        count,
        if count == 1 { "" } else { "s" },
        cfg.interface
    );

    for idx in 0..count {
        let (returned, frame) = receive_one(trx).await?;
        trx = returned;
        Print::received(&frame, idx);
    }

    trx.close();
    Ok(())
}

/// Runs one blocking receive on a worker thread so that Ctrl-C stays responsive.
///
/// The transceiver is handed back alongside the frame. If the receive fails the
/// transceiver is dropped, which closes the socket.
pub async fn receive_one<S>(mut trx: Transceiver<S>) -> anyhow::Result<(Transceiver<S>, ReceivedFrame)>
where
    S: LinkSocket + Send + 'static,
{
    let worker = tokio::task::spawn_blocking(move || {
        let result = trx.receive_raw_ethernet();
        (trx, result)
    });

    tokio::select! {
        joined = worker => {
            let (trx, result) = joined.context("receive worker panicked")?;
            let frame: ReceivedFrame = result?;
            Ok((trx, frame))
        }
        _ = tokio::signal::ctrl_c() => bail!("receive interrupted"),
    }
}
