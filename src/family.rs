//! The family parameter table: maps each supported algorithm to its
//! absorption rate, mandated digest length (0 for XOFs), and the
//! domain-separation suffix XORed in before the padding bit.

/// A supported FIPS 202 / SP 800-185 family.
///
/// Because every member of this enum is a valid, recognized family, there
/// is no "unrecognized id" case to reject at runtime — invalid ids simply
/// cannot be constructed. The one place a family choice is still a genuine
/// runtime precondition is [`crate::Context::start_cshake`], which only
/// accepts [`Family::CShake128`] / [`Family::CShake256`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Family {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Shake128,
    Shake256,
    CShake128,
    CShake256,
}

/// Parameters looked up once per [`crate::Context::start`] /
/// [`crate::Context::start_cshake`] call.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Params {
    /// Absorption/squeeze rate, in bytes.
    pub rate_bytes: usize,
    /// Mandated digest length in bytes for fixed-output families, 0 for
    /// XOFs (length is supplied at `finish` instead).
    pub digest_len: usize,
    /// Domain-separation byte XORed in immediately after the last message
    /// byte, before the `0x80` pad bit.
    pub suffix_byte: u8,
}

impl Family {
    /// Whether this family produces an arbitrary-length output rather than
    /// a fixed-size digest.
    pub const fn is_xof(self) -> bool {
        matches!(
            self,
            Family::Shake128 | Family::Shake256 | Family::CShake128 | Family::CShake256
        )
    }

    /// Whether `start_cshake` accepts this family.
    pub const fn is_cshake(self) -> bool {
        matches!(self, Family::CShake128 | Family::CShake256)
    }

    pub(crate) const fn params(self) -> Params {
        const SHA3_SUFFIX: u8 = 0x06;
        const SHAKE_SUFFIX: u8 = 0x1F;

        match self {
            Family::Sha3_224 => Params {
                rate_bytes: 144,
                digest_len: 28,
                suffix_byte: SHA3_SUFFIX,
            },
            Family::Sha3_256 => Params {
                rate_bytes: 136,
                digest_len: 32,
                suffix_byte: SHA3_SUFFIX,
            },
            Family::Sha3_384 => Params {
                rate_bytes: 104,
                digest_len: 48,
                suffix_byte: SHA3_SUFFIX,
            },
            Family::Sha3_512 => Params {
                rate_bytes: 72,
                digest_len: 64,
                suffix_byte: SHA3_SUFFIX,
            },
            Family::Shake128 | Family::CShake128 => Params {
                rate_bytes: 168,
                digest_len: 0,
                suffix_byte: SHAKE_SUFFIX,
            },
            Family::Shake256 | Family::CShake256 => Params {
                rate_bytes: 136,
                digest_len: 0,
                suffix_byte: SHAKE_SUFFIX,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_are_positive_multiples_of_eight_and_at_most_168() {
        for family in [
            Family::Sha3_224,
            Family::Sha3_256,
            Family::Sha3_384,
            Family::Sha3_512,
            Family::Shake128,
            Family::Shake256,
            Family::CShake128,
            Family::CShake256,
        ] {
            let rate = family.params().rate_bytes;
            assert!(rate > 0 && rate <= 168);
            assert_eq!(rate % 8, 0);
        }
    }

    #[test]
    fn cshake_shares_rate_and_suffix_with_shake() {
        assert_eq!(
            Family::CShake128.params().rate_bytes,
            Family::Shake128.params().rate_bytes
        );
        assert_eq!(
            Family::CShake256.params().rate_bytes,
            Family::Shake256.params().rate_bytes
        );
        assert_eq!(Family::CShake128.params().suffix_byte, 0x1F);
    }

    #[test]
    fn only_cshake_families_accept_start_cshake() {
        assert!(Family::CShake128.is_cshake());
        assert!(Family::CShake256.is_cshake());
        assert!(!Family::Shake128.is_cshake());
        assert!(!Family::Sha3_256.is_cshake());
    }
}
