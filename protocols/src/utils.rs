// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

// Data Link Layer
pub const ETH_ALEN: usize = 6;
pub const ETH_HDR_LEN: usize = 14;
/// Largest frame without FCS on standard Ethernet (header + 1500 bytes).
pub const ETH_FRAME_LEN: usize = 1514;
pub const ETH_MAX_PAYLOAD_LEN: usize = ETH_FRAME_LEN - ETH_HDR_LEN;
// Reporting
pub const PAYLOAD_PREVIEW_LEN: usize = 20;
