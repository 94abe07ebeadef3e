//! A streaming SHA-3 family hash/XOF core.
//!
//! Implements FIPS 202 (SHA3-224, SHA3-256, SHA3-384, SHA3-512, SHAKE128,
//! SHAKE256) and NIST SP 800-185 cSHAKE128/cSHAKE256, all built on one
//! Keccak-f[1600] permutation and one sponge absorb/pad/squeeze state
//! machine.
//!
//! # Streaming
//!
//! ```
//! use sha3fips::{Context, Family};
//!
//! let mut ctx = Context::new();
//! ctx.start(Family::Shake256);
//! ctx.update(b"Hello ").unwrap();
//! ctx.update(b"Ethereum!").unwrap();
//! let mut output = [0u8; 64];
//! ctx.finish(&mut output).unwrap();
//! ```
//!
//! # One-shot
//!
//! ```
//! # #[cfg(feature = "std")]
//! # fn main() {
//! let digest = sha3fips::sha3_256(b"abc");
//! assert_eq!(
//!     digest,
//!     [
//!         0x3a, 0x98, 0x5d, 0xa7, 0x4f, 0xe2, 0x25, 0xb2, 0x04, 0x5c, 0x17, 0x2d, 0x6b, 0xd3,
//!         0x90, 0xbd, 0x85, 0x5f, 0x08, 0x6e, 0x3e, 0x9d, 0x52, 0x5b, 0x46, 0xbf, 0xe2, 0x45,
//!         0x11, 0x43, 0x15, 0x32,
//!     ]
//! );
//! # }
//! # #[cfg(not(feature = "std"))]
//! # fn main() {}
//! ```
//!
//! # cSHAKE
//!
//! ```
//! # #[cfg(feature = "std")]
//! # fn main() {
//! use sha3fips::{Context, Family};
//!
//! let mut ctx = Context::new();
//! ctx.start_cshake(Family::CShake128, b"", b"Email Signature").unwrap();
//! ctx.update(&(0..=0xc7u8).collect::<Vec<_>>()).unwrap();
//! let mut output = [0u8; 32];
//! ctx.finish(&mut output).unwrap();
//! # }
//! # #[cfg(not(feature = "std"))]
//! # fn main() {}
//! ```
//!
//! # Features
//!
//! - **_default_ `std`**: `std::error::Error` on [`Error`], and the
//!   allocation-returning one-shot XOF helpers (`shake128`, `shake256`,
//!   `cshake128`, `cshake256`, and the generic `sha3`/`sha3_cshake`).
//! - **`backend-keccak`**: swap the Keccak-f[1600] permutation for the
//!   [`keccak`](https://crates.io/crates/keccak) crate's `f1600` instead
//!   of this crate's own round function. Bit-exact either way; this is the
//!   alternate-implementation hook for a hardware-accelerated back-end.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod context;
mod cshake;
mod error;
mod family;
mod sponge;

#[cfg(feature = "std")]
mod oneshot;


pub use crate::context::Context;
pub use crate::error::Error;
pub use crate::family::Family;

#[cfg(feature = "std")]
pub use crate::oneshot::{
    cshake128, cshake256, sha3, sha3_224, sha3_256, sha3_384, sha3_512, sha3_cshake, shake128,
    shake256,
};

/// Convenience re-export of the core types.
pub mod prelude {
    pub use crate::{Context, Error, Family};
}
