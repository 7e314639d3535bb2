// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use anyhow::Context;
use rawether_common::success;
use rawether_common::utils::hex;
use rawether_protocols::checksum;

use crate::rprint;

pub fn checksum(text: Option<&str>, hex_input: Option<&str>) -> anyhow::Result<()> {
    let bytes: Vec<u8> = match (text, hex_input) {
        (_, Some(hex_str)) => hex::parse_bytes(hex_str).context("parsing --hex")?,
        (Some(text), None) => text.as_bytes().to_vec(),
        (None, None) => anyhow::bail!("nothing to checksum"),
    };

    let wire: [u8; 2] = checksum::checksum(&bytes).to_ne_bytes();
    success!("Checksum over {} bytes", bytes.len());
    rprint!("{:#06x}", u16::from_be_bytes(wire));
    Ok(())
}
