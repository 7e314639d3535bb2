// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Internet-style 16-bit one's-complement checksum.
//!
//! Words are accumulated in host byte order. Because the one's-complement sum is
//! byte-order independent (RFC 1071 §2(B)), writing the result back with
//! [`u16::to_ne_bytes`] yields the same wire bytes on every host.

/// Computes the one's-complement checksum of `data`.
///
/// A trailing odd byte is summed as if padded with a zero byte. An empty slice
/// yields `0xFFFF`.
pub fn checksum(data: &[u8]) -> u16 {
    let mut chunks = data.chunks_exact(2);
    let mut sum: u64 = chunks
        .by_ref()
        .map(|word| u16::from_ne_bytes([word[0], word[1]]) as u64)
        .sum();

    if let [last] = chunks.remainder() {
        sum += u16::from_ne_bytes([*last, 0]) as u64;
    }

    while sum >> 16 != 0 {
        sum = (sum >> 16) + (sum & 0xFFFF);
    }

    !(sum as u16)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_buffer_is_complement_of_zero() {
        assert_eq!(checksum(&[]), 0xFFFF);
    }

    #[test]
    fn all_zero_buffer_is_complement_of_zero() {
        assert_eq!(checksum(&[0u8; 64]), 0xFFFF);
        assert_eq!(checksum(&[0u8; 2]), 0xFFFF);
    }

    #[test]
    fn rfc1071_example() {
        let data = [0x00, 0x01, 0xf2, 0x03, 0xf4, 0xf5, 0xf6, 0xf7];
        assert_eq!(checksum(&data).to_ne_bytes(), [0x22, 0x0d]);
    }

    #[test]
    fn ipv4_header_verifies_to_zero() {
        // 20 byte IPv4 header with its checksum field (bytes 10..12) set to b8 61
        let header = [
            0x45, 0x00, 0x00, 0x73, 0x00, 0x00, 0x40, 0x00, 0x40, 0x11, 0xb8, 0x61, 0xc0, 0xa8,
            0x00, 0x01, 0xc0, 0xa8, 0x00, 0xc7,
        ];
        assert_eq!(checksum(&header), 0);

        let mut zeroed = header;
        zeroed[10] = 0;
        zeroed[11] = 0;
        assert_eq!(checksum(&zeroed).to_ne_bytes(), [0xb8, 0x61]);
    }

    #[test]
    fn odd_trailing_byte_is_zero_padded() {
        assert_eq!(checksum(&[0x12, 0x34, 0x56]), checksum(&[0x12, 0x34, 0x56, 0x00]));
        assert_ne!(checksum(&[0x12, 0x34, 0x56]), checksum(&[0x12, 0x34]));
    }

    #[test]
    fn swapping_bytes_within_a_word_changes_result() {
        assert_ne!(checksum(&[0x01, 0x02]), checksum(&[0x02, 0x01]));
        assert_ne!(
            checksum(&[0xde, 0xad, 0xbe, 0xef]),
            checksum(&[0xad, 0xde, 0xbe, 0xef])
        );
    }

    #[test]
    fn swapping_whole_words_keeps_result() {
        // one's-complement addition is commutative over aligned words
        assert_eq!(
            checksum(&[0xde, 0xad, 0xbe, 0xef]),
            checksum(&[0xbe, 0xef, 0xde, 0xad])
        );
    }

    #[test]
    fn carry_is_folded_back() {
        // 0xffff + 0x0001 = 0x1_0000 -> folds to 0x0001 -> complement 0xfffe
        let data = [0xff, 0xff, 0x00, 0x01];
        assert_eq!(checksum(&data).to_ne_bytes(), [0xff, 0xfe]);
    }

    proptest! {
        #[test]
        fn appending_checksum_verifies_to_zero(mut data in proptest::collection::vec(any::<u8>(), 0..512)) {
            if data.len() % 2 == 1 {
                data.push(0);
            }
            let csum = checksum(&data);
            data.extend_from_slice(&csum.to_ne_bytes());
            prop_assert_eq!(checksum(&data), 0);
        }

        #[test]
        fn single_word_edit_changes_result(
            data in proptest::collection::vec(any::<u8>(), 2..256),
            idx in any::<prop::sample::Index>(),
            delta in 1u8..=255,
        ) {
            let mut edited = data.clone();
            let i = idx.index(edited.len());
            edited[i] = edited[i].wrapping_add(delta);
            // 0x0000 and 0xffff are the same value in one's complement, so an
            // edit that only flips a word between them goes unnoticed.
            let word_start = i - (i % 2);
            let word = |buf: &[u8]| {
                let hi = buf[word_start];
                let lo = buf.get(word_start + 1).copied().unwrap_or(0);
                u16::from_ne_bytes([hi, lo])
            };
            let zero_like = |w: u16| w == 0 || w == 0xFFFF;
            prop_assume!(!(zero_like(word(&data)) && zero_like(word(&edited))));
            prop_assert_ne!(checksum(&data), checksum(&edited));
        }
    }
}
