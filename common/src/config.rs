// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::time::Duration;

/// Interface used when nothing else was configured.
pub const DEFAULT_INTERFACE: &str = "eth0";

/// Environment variable that overrides the interface name.
pub const INTERFACE_ENV: &str = "RAWETHER_INTERFACE";

/// Global configuration options for the transceiver.
///
/// This struct controls which link the raw socket is bound to and how the
/// application presents its results. It is typically constructed via CLI
/// arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the network interface frames are sent on and received from.
    ///
    /// Resolved to a numeric interface index when the socket is opened.
    /// Defaults to [`DEFAULT_INTERFACE`].
    pub interface: String,

    /// Upper bound on how long a single receive may block.
    ///
    /// * **None** (Default): block until a frame arrives or the OS reports an error.
    /// * **Some(d)**: the receive fails with a timeout error after `d`.
    pub read_timeout: Option<Duration>,

    /// Controls the visual density of the terminal output.
    ///
    /// # Levels
    /// * **0** (Default): Full report with colors.
    /// * **1**: Plain report, no styling.
    /// * **2**: Raw mode. Only the payload preview bytes are printed.
    pub quiet: u8,

    /// Toggles the display of the startup banner line.
    pub no_banner: bool,

    /// Masks the last three octets of every MAC address in the output.
    ///
    /// Use this when sharing captures publicly.
    pub redact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interface: DEFAULT_INTERFACE.to_string(),
            read_timeout: None,
            quiet: 0,
            no_banner: false,
            redact: false,
        }
    }
}
