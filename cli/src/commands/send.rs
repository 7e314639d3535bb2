// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use anyhow::Context;
use pnet::datalink::NetworkInterface;
use rawether_common::config::Config;
use rawether_common::{debug, interface};
use rawether_core::network::memory::MemorySocket;
use rawether_core::network::socket::LinkSocket;
use rawether_core::transceiver::Transceiver;
use rawether_protocols::ethernet::EthernetFrame;

use crate::commands::FrameArgs;
use crate::terminal::print::Print;

pub fn send(args: &FrameArgs, cfg: &Config) -> anyhow::Result<()> {
    Print::header("sending frame");

    if args.dry_run {
        let mut trx = Transceiver::new(MemorySocket::new(offline_interface(cfg)));
        transmit(&mut trx, args)?;
        for bytes in trx.socket().sent() {
            Print::frame_bytes(bytes);
        }
        trx.close();
        return Ok(());
    }

    let mut trx = Transceiver::open(cfg).context("opening raw socket")?;
    let result = transmit(&mut trx, args);
    trx.close();
    result.map(|_| ())
}

/// Builds the frame described by `args` and sends it once.
pub fn transmit<S: LinkSocket>(
    trx: &mut Transceiver<S>,
    args: &FrameArgs,
) -> anyhow::Result<EthernetFrame> {
    let frame: EthernetFrame = args.to_frame(trx.socket().interface())?;
    Print::outgoing(&frame);
    trx.send(&frame)?;
    Ok(frame)
}

/// The configured interface if it exists, otherwise a stand-in without MAC.
pub fn offline_interface(cfg: &Config) -> NetworkInterface {
    interface::resolve_interface(&cfg.interface).unwrap_or_else(|e| {
        debug!("Dry run without a real interface: {e}");
        NetworkInterface {
            name: cfg.interface.clone(),
            description: "dry run".to_string(),
            index: 0,
            mac: None,
            ips: vec![],
            flags: 0,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnet::datalink::MacAddr;
    use std::io;

    fn args(dst: &str, payload: &str) -> FrameArgs {
        FrameArgs {
            dst: dst.to_string(),
            src: Some("00:0c:29:73:6d:3b".to_string()),
            ethertype: "0x0800".to_string(),
            payload: payload.to_string(),
            hex: None,
            dry_run: true,
        }
    }

    #[test]
    fn transmit_sends_serialized_frame() {
        let cfg = Config {
            interface: "rawether-missing0".to_string(),
            ..Default::default()
        };
        let mut trx = Transceiver::new(MemorySocket::new(offline_interface(&cfg)));
        let frame = transmit(&mut trx, &args("00:0c:29:b1:1e:1f", "hi")).unwrap();

        assert_eq!(frame.destination(), MacAddr::new(0x00, 0x0c, 0x29, 0xb1, 0x1e, 0x1f));
        assert_eq!(trx.socket().sent().len(), 1);
        assert_eq!(trx.socket().sent()[0], frame.to_bytes().unwrap());
    }

    #[test]
    fn transmit_reports_send_failure() {
        let cfg = Config::default();
        let socket = MemorySocket::new(offline_interface(&cfg)).fail_sends_with(io::ErrorKind::NetworkDown);
        let mut trx = Transceiver::new(socket);
        let err = transmit(&mut trx, &args("ff:ff:ff:ff:ff:ff", "hi")).unwrap_err();
        assert!(err.to_string().contains("[send]"), "unexpected error: {err}");
    }

    #[test]
    fn bad_destination_is_reported_before_sending() {
        let cfg = Config::default();
        let mut trx = Transceiver::new(MemorySocket::new(offline_interface(&cfg)));
        let err = transmit(&mut trx, &args("zz:zz", "hi")).unwrap_err();
        assert!(format!("{err:#}").contains("parsing --dst"));
        assert!(trx.socket().sent().is_empty());
    }

    #[test]
    fn offline_interface_falls_back_to_stand_in() {
        let cfg = Config {
            interface: "rawether-missing0".to_string(),
            ..Default::default()
        };
        let intf = offline_interface(&cfg);
        assert_eq!(intf.name, "rawether-missing0");
        assert_eq!(intf.index, 0);
        assert!(intf.mac.is_none());
    }
}
