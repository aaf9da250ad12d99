use num_bigint::BigInt;
use num_traits::{One, Zero};
use thiserror::Error;

use crate::functions::{factorial, generate_safe_primes, two_modulus_crt, FunctionError};
use crate::private_key::PrivateKey;
use crate::pub_key::PublicKey;
use crate::rand_state::RandomState;

/// Smallest accepted modulus size. Anything under 2048 bits is for tests
/// and demos only.
pub const MIN_MODULUS_BITS: u32 = 64;

#[derive(Error, Debug)]
pub enum KeyGenError {
    #[error("bit size too small: {0} < 64")]
    BitSizeTooSmall(u32),
    #[error("l parameter too small: {0} < 1")]
    LTooSmall(u32),
    #[error("w parameter out of range: {0} not in [1, {1}]")]
    WOutOfRange(u32, u32),
    #[error("failed to generate safe primes: {0}")]
    SafePrimeGeneration(#[from] FunctionError),
    #[error("sharing moduli are not coprime")]
    SharingModuli,
}

/// Produces a public key and the matching dealer state for a `w`-of-`l`
/// quorum over a `bits`-bit modulus.
///
/// `n = p * q` for safe primes `p = 2p' + 1`, `q = 2q' + 1`; the decryption
/// exponent satisfies `d = 1 (mod n)` and `d = 0 (mod p'q')`. The nominal
/// bound `ceil(l / 2) <= w <= l` keeps a dishonest minority from decrypting
/// alone; it is the dealer's call and is not enforced here.
pub fn generate_key_pair(
    rand: &mut RandomState,
    bits: u32,
    w: u32,
    l: u32,
) -> Result<(PublicKey, PrivateKey), KeyGenError> {
    if bits < MIN_MODULUS_BITS {
        return Err(KeyGenError::BitSizeTooSmall(bits));
    }
    if l < 1 {
        return Err(KeyGenError::LTooSmall(l));
    }
    if w < 1 || w > l {
        return Err(KeyGenError::WOutOfRange(w, l));
    }

    // Both prime pairs have exactly ceil(bits / 2) bits, so n lands within
    // one bit of the requested size and p', q' can never collide with p, q.
    let prime_bits = (bits + 1) / 2;
    let (p, p1) = generate_safe_primes(rand, prime_bits)?;
    let (q, q1) = loop {
        let (q, q1) = generate_safe_primes(rand, prime_bits)?;
        if q != p {
            break (q, q1);
        }
    };

    let n = &p * &q;
    let n2 = &n * &n;
    let g = &n + BigInt::one();
    let m = &p1 * &q1;
    let nm = &n * &m;
    let d = two_modulus_crt(&BigInt::one(), &n, &BigInt::zero(), &m)
        .ok_or(KeyGenError::SharingModuli)?;
    let delta = factorial(u64::from(l));

    let pk = PublicKey {
        n: n.clone(),
        n2: n2.clone(),
        g,
        delta,
        l,
        w,
    };
    let sk = PrivateKey {
        n,
        n2,
        d,
        m,
        nm,
        l,
        w,
    };
    Ok((pk, sk))
}
