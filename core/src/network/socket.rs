// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use pnet::datalink::NetworkInterface;
use rawether_common::error::FrameError;

/// Defines the contract for a link-layer socket bound to one interface.
///
/// Opening and binding are done by the implementor's constructor, so a value of
/// this trait is always usable. [`crate::network::channel::RawSocket`] talks to
/// the OS, [`crate::network::memory::MemorySocket`] keeps everything in memory.
pub trait LinkSocket {
    /// The interface this socket is bound to.
    fn interface(&self) -> &NetworkInterface;

    /// Hands one complete frame (header included) to the link in a single call.
    fn send_frame(&mut self, frame: &[u8]) -> Result<(), FrameError>;

    /// Blocks until one frame is available and returns all of its bytes.
    fn receive_frame(&mut self) -> Result<Vec<u8>, FrameError>;

    /// Releases the socket. Dropping has the same effect, this only makes the
    /// release point explicit.
    fn close(self)
    where
        Self: Sized;
}
