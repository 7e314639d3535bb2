// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! The *definition* of every argument, flag and help text lives here, the
//! execution logic for each subcommand in its own submodule.
//!
//! * [`CommandLine`]: global flags (interface, timeout, output density).
//! * [`Commands`]: the operation mode.
//! * [`FrameArgs`]: the fields of the frame shared by `send` and `exchange`.

pub mod checksum;
pub mod exchange;
pub mod interfaces;
pub mod receive;
pub mod send;

use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use pnet::datalink::{MacAddr, NetworkInterface};
use pnet::packet::ethernet::EtherType;
use rawether_common::config::{Config, DEFAULT_INTERFACE, INTERFACE_ENV};
use rawether_common::utils::{hex, mac};
use rawether_common::warn;
use rawether_protocols::ethernet::EthernetFrame;

pub const DEFAULT_PAYLOAD: &str = "Hello, raw Ethernet!";

#[derive(Parser)]
#[command(name = "rawether")]
#[command(about = "Send and receive raw Ethernet frames on a packet socket.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Network interface to bind the raw socket to
    #[arg(
        short = 'i',
        long = "interface",
        env = INTERFACE_ENV,
        default_value = DEFAULT_INTERFACE,
        global = true
    )]
    pub interface: String,

    /// Give up waiting for a frame after this many milliseconds
    #[arg(long = "timeout", value_name = "MS", global = true)]
    pub timeout_ms: Option<u64>,

    /// Keep logs and colors but hide the banner
    #[arg(long = "no-banner", global = true)]
    pub no_banner: bool,

    /// Reduce UI visual density (-q: no styling, -qq: raw payload bytes)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Redact the last three octets of MAC addresses
    #[arg(long = "redact", global = true)]
    pub redact: bool,

    /// Increase logging detail (-v: socket details, -vv: every frame)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and transmit one frame
    #[command(alias = "s")]
    Send(FrameArgs),

    /// Wait for frames and report their headers
    #[command(alias = "r")]
    Receive {
        /// Number of frames to receive, one receive call each
        #[arg(short = 'c', long = "count", default_value_t = 1)]
        count: usize,
    },

    /// Send one frame, then receive one frame
    #[command(alias = "x")]
    Exchange(FrameArgs),

    /// List network interfaces usable with --interface
    #[command(alias = "i")]
    Interfaces,

    /// Compute the one's-complement checksum of some bytes
    #[command(alias = "c")]
    Checksum {
        /// Text whose UTF-8 bytes are summed
        #[arg(value_name = "TEXT", conflicts_with = "hex", required_unless_present = "hex")]
        text: Option<String>,

        /// Hex bytes to sum instead of text
        #[arg(short = 'x', long = "hex", value_name = "HEX")]
        hex: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct FrameArgs {
    /// Destination MAC address
    #[arg(short = 'd', long = "dst", value_name = "MAC", default_value = "ff:ff:ff:ff:ff:ff")]
    pub dst: String,

    /// Source MAC address (defaults to the interface's own)
    #[arg(short = 's', long = "src", value_name = "MAC")]
    pub src: Option<String>,

    /// EtherType in hex
    #[arg(short = 'e', long = "ethertype", value_name = "HEX", default_value = "0x0800")]
    pub ethertype: String,

    /// Payload text
    #[arg(short = 'p', long = "payload", default_value = DEFAULT_PAYLOAD, conflicts_with = "hex")]
    pub payload: String,

    /// Payload as hex bytes instead of text
    #[arg(short = 'x', long = "hex", value_name = "HEX")]
    pub hex: Option<String>,

    /// Serialize through an in-memory loopback socket instead of the network
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl FrameArgs {
    /// Builds the frame, taking the source MAC from `intf` unless `--src` was given.
    pub fn to_frame(&self, intf: &NetworkInterface) -> anyhow::Result<EthernetFrame> {
        let dst_mac: MacAddr = mac::parse(&self.dst).context("parsing --dst")?;
        let src_mac: MacAddr = match &self.src {
            Some(src) => mac::parse(src).context("parsing --src")?,
            None => intf.mac.unwrap_or_else(|| {
                warn!(
                    "Interface {} has no MAC address, using {}",
                    intf.name,
                    MacAddr::zero()
                );
                MacAddr::zero()
            }),
        };
        let ethertype: EtherType =
            EtherType(hex::parse_u16(&self.ethertype).context("parsing --ethertype")?);
        let payload: Vec<u8> = match &self.hex {
            Some(hex_str) => hex::parse_bytes(hex_str).context("parsing --hex")?,
            None => self.payload.as_bytes().to_vec(),
        };

        Ok(EthernetFrame::new(dst_mac, src_mac, ethertype, &payload)?)
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            interface: cmd.interface.clone(),
            read_timeout: cmd.timeout_ms.map(Duration::from_millis),
            quiet: cmd.quiet,
            no_banner: cmd.no_banner,
            redact: cmd.redact,
        }
    }
}
