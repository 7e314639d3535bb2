// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use pnet::datalink::MacAddr;
use pnet::packet::Packet;
use pnet::packet::ethernet::{EtherType, EthernetPacket, MutableEthernetPacket};
use rawether_common::error::FrameError;

use crate::checksum;
use crate::utils::{ETH_FRAME_LEN, ETH_HDR_LEN, ETH_MAX_PAYLOAD_LEN, PAYLOAD_PREVIEW_LEN};

/// The 14 byte Ethernet II header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub destination: MacAddr,
    pub source: MacAddr,
    pub ethertype: EtherType,
}

/// A header plus at most [`ETH_MAX_PAYLOAD_LEN`] bytes of payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthernetFrame {
    header: FrameHeader,
    payload: Vec<u8>,
}

impl EthernetFrame {
    /// Builds a frame, rejecting payloads that do not fit a standard frame.
    pub fn new(
        dst_mac: MacAddr,
        src_mac: MacAddr,
        ethertype: EtherType,
        payload: &[u8],
    ) -> Result<Self, FrameError> {
        if payload.len() > ETH_MAX_PAYLOAD_LEN {
            return Err(FrameError::PreconditionViolation {
                len: payload.len(),
                capacity: ETH_MAX_PAYLOAD_LEN,
            });
        }

        Ok(Self {
            header: FrameHeader {
                destination: dst_mac,
                source: src_mac,
                ethertype,
            },
            payload: payload.to_vec(),
        })
    }

    /// Decodes the header and everything after it as payload.
    pub fn parse(frame_bytes: &[u8]) -> Result<Self, FrameError> {
        let eth_packet: EthernetPacket = EthernetPacket::new(frame_bytes).ok_or(
            FrameError::Malformed {
                len: frame_bytes.len(),
            },
        )?;

        Ok(Self {
            header: FrameHeader {
                destination: eth_packet.get_destination(),
                source: eth_packet.get_source(),
                ethertype: eth_packet.get_ethertype(),
            },
            payload: eth_packet.payload().to_vec(),
        })
    }

    /// Serializes to exactly `14 + payload.len()` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FrameError> {
        let mut buffer: Vec<u8> = vec![0u8; self.frame_len()];
        {
            let mut eth: MutableEthernetPacket = MutableEthernetPacket::new(&mut buffer[..])
                .ok_or(FrameError::Malformed { len: self.frame_len() })?;
            eth.set_destination(self.header.destination);
            eth.set_source(self.header.source);
            eth.set_ethertype(self.header.ethertype);
            eth.set_payload(&self.payload);
        }
        Ok(buffer)
    }

    pub fn header(&self) -> &FrameHeader {
        &self.header
    }

    pub fn destination(&self) -> MacAddr {
        self.header.destination
    }

    pub fn source(&self) -> MacAddr {
        self.header.source
    }

    pub fn ethertype(&self) -> EtherType {
        self.header.ethertype
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The first [`PAYLOAD_PREVIEW_LEN`] payload bytes, or fewer for short frames.
    pub fn preview(&self) -> &[u8] {
        &self.payload[..self.payload.len().min(PAYLOAD_PREVIEW_LEN)]
    }

    pub fn payload_checksum(&self) -> u16 {
        checksum::checksum(&self.payload)
    }

    /// Length on the wire, header included.
    pub fn frame_len(&self) -> usize {
        ETH_HDR_LEN + self.payload.len()
    }

    /// True for a header-only frame.
    pub fn payload_is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// One frame as handed back by the receive path.
///
/// At most [`ETH_FRAME_LEN`] bytes are captured, `wire_len` keeps the size the
/// OS reported.
#[derive(Debug, Clone)]
pub struct ReceivedFrame {
    pub frame: EthernetFrame,
    pub wire_len: usize,
}

impl ReceivedFrame {
    pub fn from_wire(frame_bytes: &[u8]) -> Result<Self, FrameError> {
        let captured = &frame_bytes[..frame_bytes.len().min(ETH_FRAME_LEN)];
        Ok(Self {
            frame: EthernetFrame::parse(captured)?,
            wire_len: frame_bytes.len(),
        })
    }

    pub fn captured_len(&self) -> usize {
        self.frame.frame_len()
    }

    pub fn is_truncated(&self) -> bool {
        self.wire_len > self.captured_len()
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
