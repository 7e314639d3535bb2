// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! A [`LinkSocket`] that never touches the OS.
//!
//! Used for `--dry-run` and for exercising the transceiver without privileges.
//! Sent frames are recorded; in loopback mode they are also queued for the
//! next receive, the same way a frame sent on `lo` shows up on a packet socket.

use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pnet::datalink::NetworkInterface;
use rawether_common::error::FrameError;

use crate::network::socket::LinkSocket;

pub struct MemorySocket {
    interface: NetworkInterface,
    loopback: bool,
    sent: Vec<Vec<u8>>,
    inbound: VecDeque<Vec<u8>>,
    send_error: Option<io::ErrorKind>,
    closes: Arc<AtomicUsize>,
}

impl MemorySocket {
    pub fn new(interface: NetworkInterface) -> Self {
        Self {
            interface,
            loopback: false,
            sent: Vec::new(),
            inbound: VecDeque::new(),
            send_error: None,
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Every sent frame is also delivered to the next receive.
    pub fn loopback(interface: NetworkInterface) -> Self {
        Self {
            loopback: true,
            ..Self::new(interface)
        }
    }

    /// Makes every subsequent send fail with `kind`.
    pub fn fail_sends_with(mut self, kind: io::ErrorKind) -> Self {
        self.send_error = Some(kind);
        self
    }

    /// Queues raw bytes for a later receive.
    pub fn push_inbound(&mut self, frame: Vec<u8>) {
        self.inbound.push_back(frame);
    }

    pub fn sent(&self) -> &[Vec<u8>] {
        &self.sent
    }

    /// Shared counter incremented by [`LinkSocket::close`].
    pub fn close_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.closes)
    }
}

impl LinkSocket for MemorySocket {
    fn interface(&self) -> &NetworkInterface {
        &self.interface
    }

    fn send_frame(&mut self, frame: &[u8]) -> Result<(), FrameError> {
        if let Some(kind) = self.send_error {
            return Err(FrameError::Transmit {
                interface: self.interface.name.clone(),
                len: frame.len(),
                source: io::Error::from(kind),
            });
        }

        self.sent.push(frame.to_vec());
        if self.loopback {
            self.inbound.push_back(frame.to_vec());
        }
        Ok(())
    }

    fn receive_frame(&mut self) -> Result<Vec<u8>, FrameError> {
        // a real socket would block forever here
        self.inbound.pop_front().ok_or_else(|| FrameError::Receive {
            interface: self.interface.name.clone(),
            source: io::Error::new(io::ErrorKind::WouldBlock, "no frame queued"),
        })
    }

    fn close(self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
