// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::sync::OnceLock;

use anyhow::bail;
use colored::*;
use pnet::datalink::{MacAddr, NetworkInterface};
use rawether_common::config::Config;
use rawether_common::utils::{hex, mac};
use rawether_protocols::ethernet::{EthernetFrame, ReceivedFrame};

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "rawether::print";

static PRINT: OnceLock<Print> = OnceLock::new();

type Detail = (String, ColoredString);

#[macro_export]
macro_rules! rprint {
    () => {
        $crate::rprint!("");
    };
    ($($arg:tt)*) => {
        tracing::info!(
            target: "rawether::print",
            raw_msg = %format_args!($($arg)*)
        );
    };
}

pub struct Print {
    no_banner: bool,
    q_level: u8,
    redact: bool,
}

impl Print {
    fn new(cfg: &Config) -> Self {
        Self {
            no_banner: cfg.no_banner,
            q_level: cfg.quiet,
            redact: cfg.redact,
        }
    }

    pub fn init(cfg: &Config) -> anyhow::Result<()> {
        if cfg.quiet > 0 {
            colored::control::set_override(false);
        }
        let term = Self::new(cfg);
        if PRINT.set(term).is_err() {
            bail!("terminal has already been initialized")
        }
        Ok(())
    }

    fn get() -> &'static Self {
        PRINT.get_or_init(|| Self::new(&Config::default()))
    }

    pub fn banner() {
        let p = Self::get();
        if p.no_banner || p.q_level > 0 {
            return;
        }

        let text_content: String = format!("⟦ RAWETHER v{} ⟧", env!("CARGO_PKG_VERSION"));
        let text_width: usize = text_content.chars().count();
        let text: ColoredString = text_content.bright_green().bold();
        let sep: ColoredString = "═"
            .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
            .bright_black();

        rprint!("{}{}{}", sep, text, sep);
    }

    pub fn header(msg: &str) {
        let p = Self::get();
        if p.q_level > 0 {
            return;
        }

        let formatted: String = format!("⟦ {} ⟧", msg);
        let msg_len: usize = formatted.chars().count();

        let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
        let left: usize = dash_count / 2;
        let right: usize = dash_count - left;

        let line: ColoredString = format!(
            "{}{}{}",
            "─".repeat(left),
            formatted.to_uppercase().bright_green(),
            "─".repeat(right)
        )
        .bright_black();

        rprint!("{}", line);
    }

    /// Header fields and preview of a frame about to be sent.
    pub fn outgoing(frame: &EthernetFrame) {
        let p = Self::get();
        if p.q_level > 1 {
            return;
        }

        let mut details: Vec<Detail> = header_details(frame, p.redact);
        details.push((
            "Length".to_string(),
            format!("{} bytes", frame.frame_len()).color(colors::TEXT_DEFAULT),
        ));
        details.push(preview_detail(frame));

        tree_head(0, "outgoing");
        as_tree(details);
    }

    /// Full report of a received frame; `-qq` prints only the preview bytes.
    pub fn received(frame: &ReceivedFrame, idx: usize) {
        let p = Self::get();
        if p.q_level > 1 {
            rprint!("{}", raw_preview(frame));
            return;
        }

        tree_head(idx, "received");
        as_tree(received_details(frame, p.redact));
    }

    /// Raw bytes of a serialized frame, 16 per line.
    pub fn frame_bytes(bytes: &[u8]) {
        for chunk in bytes.chunks(16) {
            rprint!("  {}", hex::format_bytes(chunk).color(colors::PAYLOAD));
        }
    }

    pub fn interface(intf: &NetworkInterface, idx: usize) {
        let p = Self::get();
        if p.q_level > 1 {
            rprint!("{}", intf.name);
            return;
        }

        tree_head(idx, &intf.name);
        let mut details: Vec<Detail> = vec![(
            "Index".to_string(),
            intf.index.to_string().color(colors::ACCENT),
        )];
        if let Some(mac_addr) = intf.mac {
            details.push(("MAC".to_string(), fmt_mac(&mac_addr, p.redact)));
        }
        let mut state: Vec<&str> = Vec::new();
        if intf.is_up() {
            state.push("up");
        }
        if intf.is_loopback() {
            state.push("loopback");
        }
        if intf.is_broadcast() {
            state.push("broadcast");
        }
        if intf.is_point_to_point() {
            state.push("point-to-point");
        }
        details.push((
            "Flags".to_string(),
            state.join(", ").color(colors::TEXT_DEFAULT),
        ));
        as_tree(details);
    }

    pub fn end_of_program() {
        let p = Self::get();
        if p.q_level > 0 {
            return;
        }
        rprint!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
    }
}

fn fmt_mac(mac_addr: &MacAddr, redact: bool) -> ColoredString {
    let text: String = if redact {
        mac::redact(mac_addr)
    } else {
        mac_addr.to_string()
    };
    text.color(colors::MAC_ADDR)
}

fn header_details(frame: &EthernetFrame, redact: bool) -> Vec<Detail> {
    vec![
        ("Destination".to_string(), fmt_mac(&frame.destination(), redact)),
        ("Source".to_string(), fmt_mac(&frame.source(), redact)),
        (
            "EtherType".to_string(),
            format!("{:04x}", frame.ethertype().0).color(colors::ETHERTYPE),
        ),
    ]
}

fn received_details(frame: &ReceivedFrame, redact: bool) -> Vec<Detail> {
    let mut details: Vec<Detail> = header_details(&frame.frame, redact);

    let length: String = if frame.is_truncated() {
        format!("{} of {} bytes", frame.captured_len(), frame.wire_len)
    } else {
        format!("{} bytes", frame.wire_len)
    };
    details.push(("Length".to_string(), length.color(colors::TEXT_DEFAULT)));
    details.push((
        "Checksum".to_string(),
        format!("{:#06x}", u16::from_be_bytes(frame.frame.payload_checksum().to_ne_bytes()))
            .color(colors::ACCENT),
    ));
    details.push(preview_detail(&frame.frame));
    details
}

/// The `-qq` form of a received frame: preview bytes only.
fn raw_preview(frame: &ReceivedFrame) -> String {
    hex::format_bytes(frame.frame.preview())
}

fn preview_detail(frame: &EthernetFrame) -> Detail {
    let preview: &[u8] = frame.preview();
    let value: ColoredString = if preview.is_empty() {
        "(empty)".color(colors::SEPARATOR)
    } else {
        hex::format_bytes(preview).color(colors::PAYLOAD)
    };
    (format!("Payload (first {})", preview.len()), value)
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    rprint!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
}

pub fn as_tree(details: Vec<Detail>) {
    let padding_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    for (i, (key, value)) in details.iter().enumerate() {
        let last: bool = i + 1 == details.len();
        let branch: ColoredString = if !last { "├─" } else { "└─" }.bright_black();

        let dots_count: usize = padding_width.saturating_sub(key.len());
        let dots: ColoredString = ".".repeat(dots_count).color(colors::SEPARATOR);

        rprint!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots,
            ":".color(colors::SEPARATOR),
            value
        );
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
