//! The sponge absorb/pad/squeeze primitives.
//!
//! These are free functions over the raw state rather than methods, so
//! [`crate::context::Context`] can reuse them both for ordinary `update`
//! calls and for absorbing the cSHAKE preamble before user data, without
//! going through the public API's phase checks twice.

use shared::keccak_f1600;

/// Number of 64-bit lanes in the Keccak-f[1600] state (200 bytes / 8).
pub(crate) const LANES: usize = shared::permutation::LANES;

/// XORs `data` into the state at the current rate-window `index`,
/// permuting and resetting `index` to 0 every time a full rate-sized block
/// has been absorbed. Byte-granular: calling this twice with `a` then `b`
/// is equivalent to calling it once with `a` followed by `b` concatenated.
pub(crate) fn absorb(state: &mut [u64; LANES], rate_bytes: usize, index: &mut usize, mut data: &[u8]) {
    while !data.is_empty() {
        let remaining_in_block = rate_bytes - *index;
        if *index % 8 == 0 && data.len() >= 8 && remaining_in_block >= 8 {
            let mut word = [0u8; 8];
            word.copy_from_slice(&data[..8]);
            state[*index / 8] ^= u64::from_le_bytes(word);
            *index += 8;
            data = &data[8..];
        } else {
            let lane = *index / 8;
            let byte_in_lane = *index % 8;
            state[lane] ^= (data[0] as u64) << (byte_in_lane * 8);
            *index += 1;
            data = &data[1..];
        }

        if *index == rate_bytes {
            keccak_f1600(state);
            *index = 0;
        }
    }
}

/// Applies the suffix byte and the `0x80` pad bit, permutes, and squeezes
/// `output.len()` bytes out of the sponge. `index` is the rate-window
/// offset at which absorption stopped (i.e. the offset of the next byte
/// that would have been written).
pub(crate) fn pad_and_squeeze(
    state: &mut [u64; LANES],
    rate_bytes: usize,
    index: usize,
    suffix_byte: u8,
    output: &mut [u8],
) {
    xor_byte(state, index, suffix_byte);
    xor_byte(state, rate_bytes - 1, 0x80);
    keccak_f1600(state);

    let mut written = 0;
    while written < output.len() {
        let take = core::cmp::min(rate_bytes, output.len() - written);
        squeeze_block(state, &mut output[written..written + take]);
        written += take;
        if written < output.len() {
            keccak_f1600(state);
        }
    }
}

fn xor_byte(state: &mut [u64; LANES], offset: usize, byte: u8) {
    let lane = offset / 8;
    let byte_in_lane = offset % 8;
    state[lane] ^= (byte as u64) << (byte_in_lane * 8);
}

/// Reads up to `rate_bytes` bytes out of the state's little-endian view,
/// starting at offset 0, into `out` (`out.len() <= rate_bytes`).
fn squeeze_block(state: &[u64; LANES], out: &mut [u8]) {
    for (i, byte) in out.iter_mut().enumerate() {
        let lane = i / 8;
        let byte_in_lane = i % 8;
        *byte = (state[lane] >> (byte_in_lane * 8)) as u8;
    }
}
