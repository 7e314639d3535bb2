// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

mod loopback;

pub mod utils {
    use rawether_common::config::Config;
    use rawether_common::error::FrameError;
    use rawether_core::network::channel::RawSocket;
    use rawether_core::transceiver::Transceiver;
    use std::time::Duration;

    pub const LOOPBACK: &str = "lo";

    /// Opens a raw socket on `lo`, or `None` when the process lacks CAP_NET_RAW.
    pub fn open_loopback() -> Option<Transceiver<RawSocket>> {
        let cfg = Config {
            interface: LOOPBACK.to_string(),
            read_timeout: Some(Duration::from_millis(200)),
            ..Default::default()
        };

        match Transceiver::open(&cfg) {
            Ok(trx) => Some(trx),
            Err(e @ (FrameError::PermissionDenied { .. } | FrameError::ResourceUnavailable { .. })) => {
                eprintln!("skipping: raw sockets unavailable here ({e})");
                None
            }
            Err(FrameError::Configuration { .. }) => {
                eprintln!("skipping: no loopback interface named {LOOPBACK}");
                None
            }
            Err(e) => panic!("unexpected error opening loopback socket: {e}"),
        }
    }
}
