// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Error taxonomy shared by every layer of the transceiver.
//!
//! Every variant knows which [`Phase`] it came from so that the CLI can tell the
//! user *where* things went wrong (socket creation, interface lookup, send,
//! receive) alongside the underlying OS error.

use std::fmt;
use std::io;

/// The step of the frame pipeline an error originated from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    Create,
    ResolveInterface,
    Build,
    Send,
    Receive,
    Decode,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Create => "create",
            Phase::ResolveInterface => "resolve-interface",
            Phase::Build => "build",
            Phase::Send => "send",
            Phase::Receive => "receive",
            Phase::Decode => "decode",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The OS refused to hand out a raw socket (usually missing CAP_NET_RAW).
    #[error("[{phase}] permission denied opening raw socket on {interface}: {source}")]
    PermissionDenied {
        phase: Phase,
        interface: String,
        #[source]
        source: io::Error,
    },

    #[error("[{phase}] raw socket unavailable on {interface}: {source}")]
    ResourceUnavailable {
        phase: Phase,
        interface: String,
        #[source]
        source: io::Error,
    },

    #[error("[{phase}] {reason}")]
    Configuration { phase: Phase, reason: String },

    #[error("[send] failed to transmit {len} bytes on {interface}: {source}")]
    Transmit {
        interface: String,
        len: usize,
        #[source]
        source: io::Error,
    },

    #[error("[receive] failed to receive frame on {interface}: {source}")]
    Receive {
        interface: String,
        #[source]
        source: io::Error,
    },

    #[error("[build] payload of {len} bytes exceeds frame capacity of {capacity} bytes")]
    PreconditionViolation { len: usize, capacity: usize },

    #[error("[decode] truncated or invalid Ethernet frame ({len} bytes)")]
    Malformed { len: usize },
}

impl FrameError {
    /// Maps an OS error from socket creation onto the matching variant.
    pub fn from_open(interface: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => FrameError::PermissionDenied {
                phase: Phase::Create,
                interface: interface.to_string(),
                source,
            },
            _ => FrameError::ResourceUnavailable {
                phase: Phase::Create,
                interface: interface.to_string(),
                source,
            },
        }
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        FrameError::Configuration {
            phase: Phase::ResolveInterface,
            reason: reason.into(),
        }
    }

    /// A malformed user supplied value (MAC, hex bytes, EtherType).
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        FrameError::Configuration {
            phase: Phase::Build,
            reason: reason.into(),
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            FrameError::PermissionDenied { phase, .. }
            | FrameError::ResourceUnavailable { phase, .. }
            | FrameError::Configuration { phase, .. } => *phase,
            FrameError::Transmit { .. } => Phase::Send,
            FrameError::Receive { .. } => Phase::Receive,
            FrameError::PreconditionViolation { .. } => Phase::Build,
            FrameError::Malformed { .. } => Phase::Decode,
        }
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
