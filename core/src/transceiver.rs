// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Ethernet Frame Transceiver
//!
//! Sends and receives single Ethernet II frames over any [`LinkSocket`].
//!
//! ## Send path
//! 1. Build an [`EthernetFrame`]; payloads over 1500 bytes are rejected before
//!    anything is copied.
//! 2. Serialize header (EtherType in network byte order) and payload into one
//!    contiguous buffer.
//! 3. Hand the buffer to the socket in exactly one send call.
//!
//! ## Receive path
//! One receive call, at most one maximum-size frame captured, header decoded.
//! Errors are returned as is; retrying is up to the caller.

use pnet::datalink::MacAddr;
use pnet::packet::ethernet::EtherType;
use rawether_common::config::Config;
use rawether_common::error::FrameError;
use rawether_common::{debug, success};
use rawether_protocols::ethernet::{EthernetFrame, ReceivedFrame};

use crate::network::channel::RawSocket;
use crate::network::socket::LinkSocket;

pub struct Transceiver<S: LinkSocket> {
    socket: S,
}

impl Transceiver<RawSocket> {
    /// Opens a raw socket on the configured interface.
    pub fn open(cfg: &Config) -> Result<Self, FrameError> {
        Ok(Self::new(RawSocket::open(cfg)?))
    }
}

impl<S: LinkSocket> Transceiver<S> {
    pub fn new(socket: S) -> Self {
        Self { socket }
    }

    /// Builds and transmits one frame. Returns the number of bytes handed to the OS.
    pub fn send_raw_ethernet(
        &mut self,
        dst_mac: MacAddr,
        src_mac: MacAddr,
        ethertype: EtherType,
        payload: &[u8],
    ) -> Result<usize, FrameError> {
        let frame: EthernetFrame = EthernetFrame::new(dst_mac, src_mac, ethertype, payload)?;
        self.send(&frame)
    }

    pub fn send(&mut self, frame: &EthernetFrame) -> Result<usize, FrameError> {
        let bytes: Vec<u8> = frame.to_bytes()?;
        debug!(
            verbosity = 2,
            "Sending {} bytes to {} via {} (index {})",
            bytes.len(),
            frame.destination(),
            self.socket.interface().name,
            self.socket.interface().index
        );

        self.socket.send_frame(&bytes)?;

        success!("Packet sent successfully ({} bytes)", bytes.len());
        Ok(bytes.len())
    }

    /// Blocks for the next frame on the socket and decodes it.
    pub fn receive_raw_ethernet(&mut self) -> Result<ReceivedFrame, FrameError> {
        let bytes: Vec<u8> = self.socket.receive_frame()?;
        let received: ReceivedFrame = ReceivedFrame::from_wire(&bytes)?;

        if received.is_truncated() {
            debug!(
                verbosity = 1,
                "Frame of {} bytes truncated to {}",
                received.wire_len,
                received.captured_len()
            );
        }

        success!("Packet received successfully ({} bytes)", received.wire_len);
        Ok(received)
    }

    pub fn socket(&self) -> &S {
        &self.socket
    }

    pub fn socket_mut(&mut self) -> &mut S {
        &mut self.socket
    }

    pub fn close(self) {
        self.socket.close();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::memory::MemorySocket;
    use pnet::datalink::NetworkInterface;
    use pnet::packet::ethernet::EtherTypes;
    use rawether_common::error::Phase;
    use rawether_protocols::utils::{ETH_FRAME_LEN, ETH_HDR_LEN, PAYLOAD_PREVIEW_LEN};
    use std::io;
    use std::sync::atomic::Ordering;

    const DST: MacAddr = MacAddr(0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF);
    const SRC: MacAddr = MacAddr(0x11, 0x22, 0x33, 0x44, 0x55, 0x66);

    fn eth0() -> NetworkInterface {
        NetworkInterface {
            name: "eth0".to_string(),
            description: "".to_string(),
            index: 2,
            mac: Some(SRC),
            ips: vec![],
            flags: 0,
        }
    }

    #[test]
    fn send_hands_header_plus_payload_to_socket() {
        let mut trx = Transceiver::new(MemorySocket::new(eth0()));
        let sent = trx
            .send_raw_ethernet(DST, SRC, EtherTypes::Ipv4, b"hello")
            .unwrap();

        assert_eq!(sent, ETH_HDR_LEN + 5);
        let frames = trx.socket().sent();
        assert_eq!(frames.len(), 1);
        assert_eq!(&frames[0][0..6], &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
        assert_eq!(&frames[0][6..12], &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
        assert_eq!(&frames[0][12..14], &[0x08, 0x00]);
        assert_eq!(&frames[0][14..], b"hello");
    }

    #[test]
    fn oversized_payload_never_reaches_socket() {
        let mut trx = Transceiver::new(MemorySocket::new(eth0()));
        let err = trx
            .send_raw_ethernet(DST, SRC, EtherTypes::Ipv4, &[0u8; 1501])
            .unwrap_err();
        assert!(matches!(err, FrameError::PreconditionViolation { .. }));
        assert!(trx.socket().sent().is_empty());
    }

    #[test]
    fn injected_send_failure_surfaces_as_transmit_error() {
        let socket = MemorySocket::new(eth0()).fail_sends_with(io::ErrorKind::NetworkDown);
        let mut trx = Transceiver::new(socket);
        let err = trx
            .send_raw_ethernet(DST, SRC, EtherTypes::Ipv4, b"hello")
            .unwrap_err();
        assert!(matches!(err, FrameError::Transmit { .. }));
        assert_eq!(err.phase(), Phase::Send);
    }

    #[test]
    fn loopback_round_trip_recovers_fields() {
        let mut trx = Transceiver::new(MemorySocket::loopback(eth0()));
        trx.send_raw_ethernet(DST, SRC, EtherType(0x0800), b"hello")
            .unwrap();

        let received = trx.receive_raw_ethernet().unwrap();
        assert_eq!(received.frame.destination(), DST);
        assert_eq!(received.frame.source(), SRC);
        assert_eq!(received.frame.ethertype().0, 0x0800);
        assert_eq!(received.frame.payload(), b"hello");
        assert_eq!(received.frame.preview(), b"hello");
    }

    #[test]
    fn receive_preview_of_large_frame_is_twenty_bytes() {
        let mut socket = MemorySocket::new(eth0());
        let mut wire = EthernetFrame::new(DST, SRC, EtherTypes::Ipv4, &[0x42; 1000])
            .unwrap()
            .to_bytes()
            .unwrap();
        wire[ETH_HDR_LEN] = 0x01;
        socket.push_inbound(wire);

        let mut trx = Transceiver::new(socket);
        let received = trx.receive_raw_ethernet().unwrap();
        assert_eq!(received.frame.preview().len(), PAYLOAD_PREVIEW_LEN);
        assert_eq!(received.frame.preview()[0], 0x01);
        assert_eq!(received.frame.payload().len(), 1000);
    }

    #[test]
    fn receive_preview_of_short_frame_stops_at_payload_end() {
        let mut socket = MemorySocket::new(eth0());
        let wire = EthernetFrame::new(DST, SRC, EtherTypes::Ipv4, b"hello")
            .unwrap()
            .to_bytes()
            .unwrap();
        socket.push_inbound(wire);

        let mut trx = Transceiver::new(socket);
        assert_eq!(trx.receive_raw_ethernet().unwrap().frame.preview(), b"hello");
    }

    #[test]
    fn jumbo_frame_is_captured_up_to_buffer_size() {
        let mut socket = MemorySocket::new(eth0());
        socket.push_inbound(vec![0xEE; 9000]);

        let mut trx = Transceiver::new(socket);
        let received = trx.receive_raw_ethernet().unwrap();
        assert_eq!(received.captured_len(), ETH_FRAME_LEN);
        assert_eq!(received.wire_len, 9000);
    }

    #[test]
    fn runt_frame_is_malformed() {
        let mut socket = MemorySocket::new(eth0());
        socket.push_inbound(vec![0u8; 6]);

        let mut trx = Transceiver::new(socket);
        let err = trx.receive_raw_ethernet().unwrap_err();
        assert_eq!(err.phase(), Phase::Decode);
    }

    #[test]
    fn receive_error_is_not_retried() {
        let mut trx = Transceiver::new(MemorySocket::new(eth0()));
        let err = trx.receive_raw_ethernet().unwrap_err();
        assert!(matches!(err, FrameError::Receive { .. }));
    }

    #[test]
    fn close_releases_socket_once() {
        let socket = MemorySocket::new(eth0());
        let closes = socket.close_counter();
        let trx = Transceiver::new(socket);
        trx.close();
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }
}
