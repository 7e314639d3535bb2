// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use pnet::datalink::MacAddr;
use pnet::packet::ethernet::EtherType;
use rawether_common::error::{FrameError, Phase};
use rawether_protocols::ethernet::ReceivedFrame;

use crate::utils::open_loopback;

// IEEE 802 local experimental EtherType, nothing else on lo uses it
const TEST_ETHERTYPE: EtherType = EtherType(0x88b5);
const MAX_ATTEMPTS: usize = 50;

#[test]
fn test_send_and_receive_on_loopback() {
    let Some(mut trx) = open_loopback() else {
        return;
    };

    let dst = MacAddr::new(0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF);
    let src = MacAddr::new(0x11, 0x22, 0x33, 0x44, 0x55, 0x66);

    let sent = trx
        .send_raw_ethernet(dst, src, TEST_ETHERTYPE, b"hello")
        .expect("send on lo failed");
    assert_eq!(sent, 19);

    let mut found: Option<ReceivedFrame> = None;
    for _ in 0..MAX_ATTEMPTS {
        match trx.receive_raw_ethernet() {
            Ok(frame) if frame.frame.ethertype() == TEST_ETHERTYPE => {
                found = Some(frame);
                break;
            }
            Ok(_) => continue,
            Err(FrameError::Receive { .. }) => break,
            Err(e) => panic!("unexpected receive error: {e}"),
        }
    }

    let frame = found.expect("sent frame never showed up on lo");
    assert_eq!(frame.frame.destination(), dst);
    assert_eq!(frame.frame.source(), src);
    assert_eq!(frame.frame.preview(), b"hello");

    trx.close();
}

#[test]
fn test_oversized_payload_is_rejected_before_send() {
    let Some(mut trx) = open_loopback() else {
        return;
    };

    let err = trx
        .send_raw_ethernet(MacAddr::broadcast(), MacAddr::zero(), TEST_ETHERTYPE, &[0u8; 1501])
        .unwrap_err();
    assert_eq!(err.phase(), Phase::Build);

    trx.close();
}
