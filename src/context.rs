//! The hash context: the sole mutable entity in this crate, and the
//! streaming half of the public API.

use zeroize::Zeroize;

use crate::cshake;
use crate::error::Error;
use crate::family::Family;
use crate::sponge::{self, LANES};

/// Where a [`Context`] sits in its `start` -> `update*` -> `finish`
/// lifecycle. Modeled as a tagged variant (rather than inferring state
/// from a sentinel field) so that driving a context out of order is
/// caught by an explicit check instead of relying on field conventions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    /// `init`/`Default::default()`; no family has been selected yet.
    Uninit,
    /// `start`/`start_cshake` has run; `update` is accepted.
    Absorbing,
    /// `finish` has run; the context is spent.
    Finalized,
}

/// A streaming SHA-3 / SHAKE / cSHAKE hash context.
///
/// This is a plain value: 200 bytes of permutation state plus a handful of
/// `usize`/`u8` parameters, no heap allocation. `Clone` produces an
/// independent copy that shares no mutable storage with the original
/// (forking a hashing session is just `context.clone()`). Dropping a
/// `Context` zeroizes its permutation state first, so partially-absorbed
/// input does not linger in freed memory.
///
/// # Examples
///
/// ```
/// use sha3fips::{Context, Family};
///
/// let mut ctx = Context::new();
/// ctx.start(Family::Sha3_256);
/// ctx.update(b"abc").unwrap();
/// let mut digest = [0u8; 32];
/// ctx.finish(&mut digest).unwrap();
/// ```
#[derive(Clone)]
pub struct Context {
    state: [u64; LANES],
    rate_bytes: usize,
    digest_len: usize,
    suffix_byte: u8,
    index: usize,
    id: Option<Family>,
    max_block_size: usize,
    phase: Phase,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            state: [0; LANES],
            rate_bytes: 0,
            digest_len: 0,
            suffix_byte: 0,
            index: 0,
            id: None,
            max_block_size: 0,
            phase: Phase::Uninit,
        }
    }
}

impl Context {
    /// Creates a context in the uninitialized-parameters state. Equivalent
    /// to `Default::default()`; never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// The family this context was started with, if any.
    pub fn family(&self) -> Option<Family> {
        self.id
    }

    /// Resets the context and selects `family`. Zeroes the permutation
    /// state and rewinds the rate-window offset regardless of the
    /// context's previous phase, so calling `start` twice with no
    /// intervening `update` is idempotent.
    ///
    /// `Family::CShake128` / `Family::CShake256` started this way behave
    /// exactly like `Shake128` / `Shake256` (no cSHAKE preamble is
    /// absorbed) — see [`Context::start_cshake`] to get cSHAKE framing.
    pub fn start(&mut self, family: Family) {
        let params = family.params();
        self.state = [0; LANES];
        self.rate_bytes = params.rate_bytes;
        self.max_block_size = params.rate_bytes;
        self.digest_len = params.digest_len;
        self.suffix_byte = params.suffix_byte;
        self.index = 0;
        self.id = Some(family);
        self.phase = Phase::Absorbing;
    }

    /// Resets the context, selects `family`, and absorbs the SP 800-185
    /// cSHAKE preamble built from `name` and `customization` before any
    /// user data.
    ///
    /// Fails with [`Error::BadInputData`] if `family` is not
    /// [`Family::CShake128`]/[`Family::CShake256`], or if `name`/
    /// `customization` are long enough to overflow the `bytepad` length
    /// computation (see [`crate::cshake`]).
    ///
    /// When `name` and `customization` are both empty this degenerates to
    /// plain SHAKE: no preamble is absorbed and the suffix byte stays
    /// `0x1F` rather than switching to `0x04`.
    pub fn start_cshake(
        &mut self,
        family: Family,
        name: &[u8],
        customization: &[u8],
    ) -> Result<(), Error> {
        if !family.is_cshake() {
            return Err(Error::BadInputData);
        }
        self.start(family);

        if name.is_empty() && customization.is_empty() {
            return Ok(());
        }
        self.suffix_byte = 0x04;
        cshake::absorb_preamble(self, name, customization)
    }

    /// Absorbs `input`. A zero-length update is a no-op. Fails with
    /// [`Error::BadInputData`] if the context has not been started, or has
    /// already been finalized.
    pub fn update(&mut self, input: &[u8]) -> Result<(), Error> {
        if self.phase != Phase::Absorbing {
            return Err(Error::BadInputData);
        }
        self.absorb_raw(input);
        Ok(())
    }

    /// Pads, permutes, and squeezes `output.len()` bytes into `output`,
    /// consuming the context (a finalized context has nothing left to do,
    /// so there is no way to call `finish`/`update` on it again).
    ///
    /// For fixed-digest families `output.len()` must equal the family's
    /// mandated digest length; any length (including zero) is accepted
    /// for SHAKE/cSHAKE.
    pub fn finish(mut self, output: &mut [u8]) -> Result<(), Error> {
        if self.phase != Phase::Absorbing {
            return Err(Error::BadInputData);
        }
        if self.digest_len != 0 && output.len() != self.digest_len {
            return Err(Error::BadInputData);
        }

        sponge::pad_and_squeeze(
            &mut self.state,
            self.rate_bytes,
            self.index,
            self.suffix_byte,
            output,
        );
        self.phase = Phase::Finalized;
        Ok(())
    }

    /// Absorbs raw bytes without touching `phase`. Used both by the public
    /// `update` (after its own phase check) and by the cSHAKE preamble
    /// absorber, which runs while already `Absorbing`.
    pub(crate) fn absorb_raw(&mut self, input: &[u8]) {
        sponge::absorb(&mut self.state, self.rate_bytes, &mut self.index, input);
    }

    pub(crate) fn rate_bytes(&self) -> usize {
        self.rate_bytes
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(family: Family, data: &[u8], olen: usize) -> Vec<u8> {
        let mut ctx = Context::new();
        ctx.start(family);
        ctx.update(data).unwrap();
        let mut out = vec![0u8; olen];
        ctx.finish(&mut out).unwrap();
        out
    }

    #[test]
    fn sha3_256_empty_matches_fips_202_vector() {
        let out = digest(Family::Sha3_256, b"", 32);
        let expected = hex("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a");
        assert_eq!(out, expected);
    }

    #[test]
    fn update_before_start_fails() {
        let mut ctx = Context::new();
        assert_eq!(ctx.update(b"x"), Err(Error::BadInputData));
    }

    #[test]
    fn finish_without_start_fails() {
        let ctx = Context::new();
        let mut out = [0u8; 32];
        assert_eq!(ctx.finish(&mut out), Err(Error::BadInputData));
    }

    #[test]
    fn starting_twice_with_no_update_is_idempotent() {
        let mut a = Context::new();
        a.start(Family::Shake128);
        let mut b = a.clone();
        b.start(Family::Shake128);

        let mut out_a = [0u8; 32];
        let mut out_b = [0u8; 32];
        a.finish(&mut out_a).unwrap();
        b.finish(&mut out_b).unwrap();
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn clone_is_independent_of_source() {
        let mut ctx = Context::new();
        ctx.start(Family::Shake256);
        ctx.update(b"part one ").unwrap();

        let mut forked = ctx.clone();
        forked.update(b"forked tail").unwrap();
        ctx.update(b"original tail").unwrap();

        let mut forked_out = [0u8; 32];
        let mut original_out = [0u8; 32];
        forked.finish(&mut forked_out).unwrap();
        ctx.finish(&mut original_out).unwrap();

        let mut expected_original = Context::new();
        expected_original.start(Family::Shake256);
        expected_original.update(b"part one original tail").unwrap();
        let mut expected_out = [0u8; 32];
        expected_original.finish(&mut expected_out).unwrap();

        assert_eq!(original_out, expected_out);
        assert_ne!(original_out, forked_out);
    }

    #[test]
    fn fixed_digest_rejects_wrong_output_length() {
        let mut ctx = Context::new();
        ctx.start(Family::Sha3_256);
        ctx.update(b"abc").unwrap();
        let mut out = [0u8; 31];
        assert_eq!(ctx.finish(&mut out), Err(Error::BadInputData));
    }

    #[test]
    fn shake_allows_zero_length_output() {
        let mut ctx = Context::new();
        ctx.start(Family::Shake128);
        ctx.update(b"abc").unwrap();
        let mut out: [u8; 0] = [];
        assert!(ctx.finish(&mut out).is_ok());
    }

    #[test]
    fn start_cshake_rejects_non_cshake_family() {
        let mut ctx = Context::new();
        assert_eq!(
            ctx.start_cshake(Family::Shake128, b"", b""),
            Err(Error::BadInputData)
        );
    }

    #[test]
    fn start_on_cshake_family_behaves_as_shake() {
        let mut cshake_as_shake = Context::new();
        cshake_as_shake.start(Family::CShake128);
        cshake_as_shake.update(b"abc").unwrap();
        let mut a = [0u8; 32];
        cshake_as_shake.finish(&mut a).unwrap();

        let mut shake = Context::new();
        shake.start(Family::Shake128);
        shake.update(b"abc").unwrap();
        let mut b = [0u8; 32];
        shake.finish(&mut b).unwrap();

        assert_eq!(a, b);
    }

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }
}
