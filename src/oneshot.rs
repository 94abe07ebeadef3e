//! One-shot convenience entry points: allocate a transient [`Context`],
//! run start/update/finish, and return the digest. The transient context
//! is an owned local, so it zeroizes on drop on every exit path, including
//! the early returns from a propagated `?`.

use crate::context::Context;
use crate::error::Error;
use crate::family::Family;

/// Hashes `data` with `family`, writing exactly `olen` bytes of output.
///
/// For fixed-digest families `olen` must equal the family's mandated
/// length. Named identically to the streaming API it wraps: behavior is
/// the same as `Context::start` + `update` + `finish`.
pub fn sha3(family: Family, data: &[u8], olen: usize) -> Result<Vec<u8>, Error> {
    let mut ctx = Context::new();
    ctx.start(family);
    ctx.update(data)?;
    let mut out = vec![0u8; olen];
    ctx.finish(&mut out)?;
    Ok(out)
}

/// Hashes `data` with the cSHAKE128/cSHAKE256 `family`, using `name` and
/// `customization` as the function-name and customization strings, and
/// writing exactly `olen` bytes of output.
///
/// Fails with [`Error::BadInputData`] if `family` is not a cSHAKE family.
pub fn sha3_cshake(
    family: Family,
    data: &[u8],
    name: &[u8],
    customization: &[u8],
    olen: usize,
) -> Result<Vec<u8>, Error> {
    let mut ctx = Context::new();
    ctx.start_cshake(family, name, customization)?;
    ctx.update(data)?;
    let mut out = vec![0u8; olen];
    ctx.finish(&mut out)?;
    Ok(out)
}

/// Computes the SHA3-224 digest of `data`.
pub fn sha3_224(data: &[u8]) -> [u8; 28] {
    fixed_digest(Family::Sha3_224, data)
}

/// Computes the SHA3-256 digest of `data`.
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    fixed_digest(Family::Sha3_256, data)
}

/// Computes the SHA3-384 digest of `data`.
pub fn sha3_384(data: &[u8]) -> [u8; 48] {
    fixed_digest(Family::Sha3_384, data)
}

/// Computes the SHA3-512 digest of `data`.
pub fn sha3_512(data: &[u8]) -> [u8; 64] {
    fixed_digest(Family::Sha3_512, data)
}

fn fixed_digest<const N: usize>(family: Family, data: &[u8]) -> [u8; N] {
    let mut ctx = Context::new();
    ctx.start(family);
    // A zero-length update is always a no-op, so this cannot fail for a
    // freshly-started fixed-digest context.
    ctx.update(data).expect("context was just started");
    let mut out = [0u8; N];
    ctx.finish(&mut out).expect("N matches the family's mandated digest length");
    out
}

/// Computes `olen` bytes of SHAKE128 output for `data`.
pub fn shake128(data: &[u8], olen: usize) -> Vec<u8> {
    xof(Family::Shake128, data, olen)
}

/// Computes `olen` bytes of SHAKE256 output for `data`.
pub fn shake256(data: &[u8], olen: usize) -> Vec<u8> {
    xof(Family::Shake256, data, olen)
}

fn xof(family: Family, data: &[u8], olen: usize) -> Vec<u8> {
    let mut ctx = Context::new();
    ctx.start(family);
    ctx.update(data).expect("context was just started");
    let mut out = vec![0u8; olen];
    ctx.finish(&mut out).expect("XOFs accept any output length");
    out
}

/// Computes `olen` bytes of cSHAKE128 output for `data`, framed with
/// `name` and `customization`.
pub fn cshake128(data: &[u8], name: &[u8], customization: &[u8], olen: usize) -> Result<Vec<u8>, Error> {
    sha3_cshake(Family::CShake128, data, name, customization, olen)
}

/// Computes `olen` bytes of cSHAKE256 output for `data`, framed with
/// `name` and `customization`.
pub fn cshake256(data: &[u8], name: &[u8], customization: &[u8], olen: usize) -> Result<Vec<u8>, Error> {
    sha3_cshake(Family::CShake256, data, name, customization, olen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shake128_empty_matches_fips_202_vector() {
        let out = shake128(b"", 32);
        assert_eq!(
            out,
            hex("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26")
        );
    }

    #[test]
    fn sha3_512_of_abc_matches_fips_202_vector() {
        let out = sha3_512(b"abc");
        assert_eq!(
            out.to_vec(),
            hex(
                "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
            )
        );
    }

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }
}
