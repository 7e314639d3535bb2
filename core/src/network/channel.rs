// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::io;

use pnet::datalink;
use pnet::datalink::{Channel, DataLinkReceiver, DataLinkSender, NetworkInterface};
use rawether_common::config::Config;
use rawether_common::error::FrameError;
use rawether_common::{debug, interface};

use crate::network::socket::LinkSocket;

/// An `AF_PACKET` socket receiving every protocol (`ETH_P_ALL`) on one interface.
pub struct RawSocket {
    interface: NetworkInterface,
    tx: Box<dyn DataLinkSender>,
    rx: Box<dyn DataLinkReceiver>,
}

impl RawSocket {
    /// Resolves the configured interface and opens a raw socket on it.
    pub fn open(cfg: &Config) -> Result<Self, FrameError> {
        let intf: NetworkInterface = bind_to_interface(&cfg.interface)?;
        Self::open_on(intf, datalink::channel, channel_config(cfg))
    }

    /// Opens a socket on an already resolved interface through `channel_opener`.
    pub fn open_on<F>(
        intf: NetworkInterface,
        channel_opener: F,
        cfg: datalink::Config,
    ) -> Result<Self, FrameError>
    where
        F: FnOnce(&NetworkInterface, datalink::Config) -> io::Result<Channel>,
    {
        let (tx, rx) = open_eth_channel(&intf, channel_opener, cfg)?;
        debug!(
            verbosity = 1,
            "Opened raw socket on {} (index {})", intf.name, intf.index
        );
        Ok(Self {
            interface: intf,
            tx,
            rx,
        })
    }
}

impl LinkSocket for RawSocket {
    fn interface(&self) -> &NetworkInterface {
        &self.interface
    }

    fn send_frame(&mut self, frame: &[u8]) -> Result<(), FrameError> {
        let result: io::Result<()> = self
            .tx
            .send_to(frame, None)
            .unwrap_or_else(|| Err(io::Error::other("sender returned no result")));

        result.map_err(|source| FrameError::Transmit {
            interface: self.interface.name.clone(),
            len: frame.len(),
            source,
        })
    }

    fn receive_frame(&mut self) -> Result<Vec<u8>, FrameError> {
        match self.rx.next() {
            Ok(frame) => Ok(frame.to_vec()),
            Err(source) => Err(FrameError::Receive {
                interface: self.interface.name.clone(),
                source,
            }),
        }
    }

    fn close(self) {
        debug!(verbosity = 1, "Closing raw socket on {}", self.interface.name);
        drop(self);
    }
}

/// Looks up the interface frames will be addressed to.
pub fn bind_to_interface(name: &str) -> Result<NetworkInterface, FrameError> {
    interface::resolve_interface(name)
}

pub fn channel_config(cfg: &Config) -> datalink::Config {
    datalink::Config {
        read_timeout: cfg.read_timeout,
        ..Default::default()
    }
}

pub fn open_eth_channel<F>(
    intf: &NetworkInterface,
    channel_opener: F,
    cfg: datalink::Config,
) -> Result<(Box<dyn DataLinkSender>, Box<dyn DataLinkReceiver>), FrameError>
where
    F: FnOnce(&NetworkInterface, datalink::Config) -> io::Result<Channel>,
{
    let ch: Channel =
        channel_opener(intf, cfg).map_err(|e| FrameError::from_open(&intf.name, e))?;

    match ch {
        Channel::Ethernet(tx, rx) => Ok((tx, rx)),
        _ => Err(FrameError::from_open(
            &intf.name,
            io::Error::other(format!("non-ethernet channel for {}", intf.name)),
        )),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
