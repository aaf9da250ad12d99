//! Number-theoretic utilities shared by key generation and decryption.

use num_bigint::{BigInt, Sign};
use num_integer::Integer as _;
use num_traits::One;
use rug::integer::{IsPrime, Order};
use rug::Integer;
use thiserror::Error;

use crate::rand_state::RandomState;

/// Miller-Rabin rounds used for primality checks.
const PRIME_CHECK_REPS: u32 = 40;

#[derive(Error, Debug)]
pub enum FunctionError {
    #[error("invalid bit length")]
    InvalidBitLength,
}

pub(crate) fn to_rug(n: &BigInt) -> Integer {
    Integer::from_digits(&n.to_bytes_be().1, Order::Msf)
}

pub(crate) fn to_bigint(n: &Integer) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &n.to_digits::<u8>(Order::Msf))
}

/// Generates a safe prime pair `(p, p')` with `p = 2p' + 1`, both prime and
/// `p` exactly `bit_len` bits long.
pub fn generate_safe_primes(
    rand: &mut RandomState,
    bit_len: u32,
) -> Result<(BigInt, BigInt), FunctionError> {
    if bit_len < 3 {
        return Err(FunctionError::InvalidBitLength);
    }
    loop {
        let q: Integer = Integer::random_bits(bit_len - 1, rand.rug_state()).into();
        let q = q.next_prime();
        let p: Integer = Integer::from(&q * 2) + 1;
        if p.significant_bits() == bit_len && p.is_probably_prime(PRIME_CHECK_REPS) != IsPrime::No
        {
            return Ok((to_bigint(&p), to_bigint(&q)));
        }
    }
}

/// Solves `x = r1 (mod m1)` and `x = r2 (mod m2)` for coprime moduli,
/// returning the unique solution in `[0, m1 * m2)`. Returns `None` when the
/// moduli share a factor.
pub fn two_modulus_crt(r1: &BigInt, m1: &BigInt, r2: &BigInt, m2: &BigInt) -> Option<BigInt> {
    let inv = mod_inverse(m1, m2)?;
    let t = ((r2 - r1) * inv).mod_floor(m2);
    Some(r1 + m1 * t)
}

/// `L(x) = (x - 1) / n mod n`, defined on values `x = 1 (mod n)`.
pub fn dlog(n: &BigInt, x: &BigInt) -> BigInt {
    ((x - BigInt::one()) / n).mod_floor(n)
}

pub fn factorial(n: u64) -> BigInt {
    let mut result = BigInt::one();
    for i in 1..=n {
        result *= BigInt::from(i);
    }
    result
}

/// Inverse of `a` modulo `m`, or `None` when `gcd(a, m) != 1`.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Option<BigInt> {
    let ext = a.extended_gcd(m);
    if !ext.gcd.is_one() {
        return None;
    }
    Some(ext.x.mod_floor(m))
}
