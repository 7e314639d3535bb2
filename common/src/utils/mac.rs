// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! **Medium Access Control (MAC)** address helpers.
//!
//! Parsing of user supplied addresses and privacy-preserving rendering of the
//! addresses found in received frames.

use pnet::util::MacAddr;

use crate::error::FrameError;

/// Parses `aa:bb:cc:dd:ee:ff` (also accepts `-` as separator).
pub fn parse(input: &str) -> Result<MacAddr, FrameError> {
    let normalized: String = input.trim().replace('-', ":");
    normalized
        .parse::<MacAddr>()
        .map_err(|_| FrameError::invalid_input(format!("invalid MAC address '{}'", input)))
}

/// Redacts a MAC address to prevent hardware fingerprinting.
///
/// Returns a string where the last three octets are replaced by 'XX'.
///
/// # Examples
/// ```
/// use pnet::util::MacAddr;
/// use rawether_common::utils::mac;
///
/// let mac_addr = MacAddr::new(0x2c, 0xcf, 0x67, 0xf2, 0x51, 0xe3);
/// assert_eq!(mac::redact(&mac_addr), "2c:cf:67:XX:XX:XX");
/// ```
pub fn redact(mac: &MacAddr) -> String {
    format!("{:02x}:{:02x}:{:02x}:XX:XX:XX", mac.0, mac.1, mac.2)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
