// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use crate::error::FrameError;

/// Parses a hex byte string such as `"de ad be ef"`, `"deadbeef"` or `"de:ad:be:ef"`.
pub fn parse_bytes(input: &str) -> Result<Vec<u8>, FrameError> {
    let digits: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits.as_str());

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(FrameError::invalid_input(format!(
            "invalid hex digit '{}' in '{}'",
            bad, input
        )));
    }

    if digits.len() % 2 != 0 {
        return Err(FrameError::invalid_input(format!(
            "hex input has an odd number of digits ({})",
            digits.len()
        )));
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| {
                FrameError::invalid_input(format!("invalid hex byte '{}'", &digits[i..i + 2]))
            })
        })
        .collect()
}

/// Parses a 16-bit value given as `0x0800`, `0800` or `x0800`.
pub fn parse_u16(input: &str) -> Result<u16, FrameError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('x'))
        .unwrap_or(trimmed);
    // from_str_radix would also take a leading '+'
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(FrameError::invalid_input(format!(
            "invalid 16-bit hex value '{}'",
            input
        )));
    }
    u16::from_str_radix(digits, 16)
        .map_err(|_| FrameError::invalid_input(format!("invalid 16-bit hex value '{}'", input)))
}

/// Renders bytes as lowercase, space separated pairs (`"68 65 6c"`).
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
