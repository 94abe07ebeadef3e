//! SP 800-185 cSHAKE framing primitives: `left_encode`, `encode_string`,
//! and `bytepad`, plus the preamble absorption they build for
//! [`crate::Context::start_cshake`].
//!
//! Framing is computed and absorbed without allocating: every encoded
//! length prefix is at most 9 bytes (a 1-byte count followed by up to 8
//! big-endian value bytes), and the zero padding at the end of `bytepad`
//! never exceeds the largest supported rate (168 bytes), so both fit in
//! fixed-size stack buffers.

use crate::context::Context;
use crate::error::Error;

/// `left_encode(x)` never needs more than a 1-byte count plus 8 value
/// bytes, since `x` here is always a `u64`.
const MAX_ENCODED_LEN: usize = 9;

/// The largest rate any supported family uses; an upper bound on
/// `bytepad`'s zero padding, which is always strictly less than the rate.
const MAX_RATE: usize = 168;

/// Largest input length, in bytes, for which `8 * len` still fits in a
/// `u64`. Name/customization strings longer than this are rejected rather
/// than silently overflowing the bit-length computation.
const MAX_STRING_LEN: u64 = 1 << 61;

/// Writes `left_encode(x)` into `buf` and returns the number of bytes
/// written. Emits the minimum number of big-endian bytes encoding `x`,
/// prefixed by a single byte giving that count; `x = 0` encodes as
/// `[0x01, 0x00]`.
fn left_encode(x: u64, buf: &mut [u8; MAX_ENCODED_LEN]) -> usize {
    if x == 0 {
        buf[0] = 1;
        buf[1] = 0;
        return 2;
    }

    let be = x.to_be_bytes();
    let first_nonzero = be.iter().position(|&b| b != 0).expect("x != 0");
    let value_len = be.len() - first_nonzero;

    buf[0] = value_len as u8;
    buf[1..1 + value_len].copy_from_slice(&be[first_nonzero..]);
    1 + value_len
}

/// Returns `8 * byte_len` as a bit length, rejecting lengths that would
/// overflow that multiplication.
fn checked_bit_length(byte_len: usize) -> Result<u64, Error> {
    let len = byte_len as u64;
    if len >= MAX_STRING_LEN {
        return Err(Error::BadInputData);
    }
    Ok(len * 8)
}

/// Absorbs `encode_string(x) = left_encode(8 * |x|) ‖ x` and returns the
/// number of bytes absorbed.
fn absorb_encoded_string(ctx: &mut Context, x: &[u8]) -> Result<usize, Error> {
    let mut buf = [0u8; MAX_ENCODED_LEN];
    let n = left_encode(checked_bit_length(x.len())?, &mut buf);
    ctx.absorb_raw(&buf[..n]);
    ctx.absorb_raw(x);
    Ok(n + x.len())
}

/// Absorbs `bytepad(encode_string(name) ‖ encode_string(customization), r)`
/// into `ctx`, where `r` is `ctx`'s rate. Because `bytepad` always rounds
/// up to a whole multiple of `r`, this leaves `ctx`'s rate-window index at
/// exactly 0 (freshly permuted).
pub(crate) fn absorb_preamble(
    ctx: &mut Context,
    name: &[u8],
    customization: &[u8],
) -> Result<(), Error> {
    let rate = ctx.rate_bytes();

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let n = left_encode(rate as u64, &mut buf);
    ctx.absorb_raw(&buf[..n]);
    let mut total = n;

    total += absorb_encoded_string(ctx, name)?;
    total += absorb_encoded_string(ctx, customization)?;

    let pad_len = (rate - total % rate) % rate;
    if pad_len > 0 {
        let zeros = [0u8; MAX_RATE];
        ctx.absorb_raw(&zeros[..pad_len]);
    }
    Ok(())
}
