// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use pnet::datalink::NetworkInterface;
use rawether_common::config::Config;
use rawether_common::{interface, warn};

use crate::terminal::print::Print;

pub fn interfaces(cfg: &Config) -> anyhow::Result<()> {
    Print::header("network interfaces");

    let interfaces: Vec<NetworkInterface> = interface::list_interfaces();
    if interfaces.is_empty() {
        anyhow::bail!("no network interfaces found");
    }

    for (idx, intf) in interfaces.iter().enumerate() {
        Print::interface(intf, idx);
    }

    match interfaces.iter().find(|i| i.name == cfg.interface) {
        None => warn!(
            "Configured interface {} does not exist, pass --interface",
            cfg.interface
        ),
        Some(intf) if !interface::is_layer_2_capable(intf) => warn!(
            "Interface {} has no MAC address, pass --src when sending",
            intf.name
        ),
        Some(_) => {}
    }

    Ok(())
}
