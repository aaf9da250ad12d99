use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use thiserror::Error;

use crate::functions::{dlog, mod_inverse};
use crate::rand_state::RandomState;

#[derive(Error, Debug)]
pub enum CombineError {
    #[error("expected {1} partial decryptions, got {0}")]
    ShareCount(usize, u32),
    #[error("partial decryption has no inverse modulo n^2")]
    NotInvertible,
}

/// Encryption key of the quorum scheme.
///
/// Immutable after key generation and freely shareable; every ciphertext
/// operation happens in `(Z/n^2 Z)*`.
#[derive(Debug, Clone)]
pub struct PublicKey {
    pub n: BigInt,
    pub n2: BigInt,
    pub g: BigInt,
    pub delta: BigInt,
    pub l: u32,
    pub w: u32,
}

impl PublicKey {
    /// Encrypts `m` with fresh randomness drawn from `rand`.
    pub fn encrypt(&self, rand: &mut RandomState, m: &BigInt) -> BigInt {
        let r = rand.in_mult_group(&self.n);
        self.encrypt_fixed(m, &r)
    }

    /// Encrypts `m` under caller-supplied randomness `r` in `(Z/nZ)*`.
    pub fn encrypt_fixed(&self, m: &BigInt, r: &BigInt) -> BigInt {
        let g_m = self.g.modpow(m, &self.n2);
        let r_n = r.modpow(&self.n, &self.n2);
        (g_m * r_n) % &self.n2
    }

    /// Rerandomizes `c` without changing the plaintext.
    pub fn reencrypt(&self, rand: &mut RandomState, c: &BigInt) -> BigInt {
        let r = rand.in_mult_group(&self.n);
        (c * r.modpow(&self.n, &self.n2)) % &self.n2
    }

    /// Ciphertext of `m1 + m2` from ciphertexts of `m1` and `m2`.
    pub fn add(&self, c1: &BigInt, c2: &BigInt) -> BigInt {
        (c1 * c2) % &self.n2
    }

    /// Ciphertext of `m1 + m` from a ciphertext of `m1` and a plaintext `m`.
    pub fn add_plain(&self, c: &BigInt, m: &BigInt) -> BigInt {
        (c * self.g.modpow(m, &self.n2)) % &self.n2
    }

    /// Ciphertext of `m * m1` from a ciphertext of `m1` and a plaintext `m`.
    pub fn mul_plain(&self, c: &BigInt, m: &BigInt) -> BigInt {
        c.modpow(m, &self.n2)
    }

    /// Reconstructs the plaintext from partial decryptions.
    ///
    /// `shares` holds one entry per server slot; a zero entry means that
    /// server did not contribute. The caller must supply at least `w`
    /// present entries: with fewer the returned value is meaningless, but
    /// no error is raised.
    pub fn combine_shares(&self, shares: &[BigInt]) -> Result<BigInt, CombineError> {
        if shares.len() != self.l as usize {
            return Err(CombineError::ShareCount(shares.len(), self.l));
        }

        let two = BigInt::from(2);
        let mut acc = BigInt::one();
        for (i, share) in shares.iter().enumerate() {
            if share.is_zero() {
                continue;
            }

            // Unscaled Lagrange coefficient at 0 over the present slots,
            // with 1-indexed interpolation points. The delta factor makes
            // the quotient an exact integer.
            let mut num = self.delta.clone();
            let mut den = BigInt::one();
            for (j, other) in shares.iter().enumerate() {
                if j == i || other.is_zero() {
                    continue;
                }
                num *= BigInt::from(j as u64 + 1);
                den *= BigInt::from(j as i64 - i as i64);
            }
            let lambda = num / den;

            let mut t = share.modpow(&(&two * lambda.abs()), &self.n2);
            if lambda.is_negative() {
                t = mod_inverse(&t, &self.n2).ok_or(CombineError::NotInvertible)?;
            }
            acc = (acc * t) % &self.n2;
        }

        // acc = c^(4 * delta^2 * d); L maps it to 4 * delta^2 * m mod n.
        let x = dlog(&self.n, &acc);
        let k = mod_inverse(&(BigInt::from(4) * &self.delta * &self.delta), &self.n)
            .ok_or(CombineError::NotInvertible)?;
        Ok((x * k) % &self.n)
    }
}
