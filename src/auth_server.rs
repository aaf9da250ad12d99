use num_bigint::BigInt;
use num_traits::Zero;
use thiserror::Error;
use zeroize::Zeroize;

use crate::pub_key::PublicKey;

#[derive(Error, Debug)]
pub enum DecryptError {
    #[error("ciphertext out of bounds")]
    InvalidCiphertext,
}

/// One authorization server holding a single long-term share of the
/// decryption exponent.
#[derive(Debug, Clone)]
pub struct AuthServer {
    /// 1-based server identity, i.e. the point the share was evaluated at.
    pub index: u32,
    pub si: BigInt,
}

impl AuthServer {
    /// `index` is the 0-based slot the share was dealt at; the stored
    /// identity is `index + 1`.
    pub fn new(si: BigInt, index: u32) -> Self {
        AuthServer {
            index: index + 1,
            si,
        }
    }

    /// This server's contribution `c^(2 * delta * si) mod n^2` towards
    /// decrypting `c`. The result is meant to be placed at this server's
    /// slot in the array handed to `PublicKey::combine_shares`.
    pub fn partial_decrypt(&self, pk: &PublicKey, c: &BigInt) -> Result<BigInt, DecryptError> {
        if c <= &BigInt::zero() || c >= &pk.n2 {
            return Err(DecryptError::InvalidCiphertext);
        }
        let exponent = BigInt::from(2) * &pk.delta * &self.si;
        Ok(c.modpow(&exponent, &pk.n2))
    }
}

impl Zeroize for AuthServer {
    fn zeroize(&mut self) {
        self.si = BigInt::zero();
    }
}

impl Drop for AuthServer {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::factorial;
    use num_traits::One;

    fn small_public_key() -> PublicKey {
        // p = 59, q = 83.
        let n = BigInt::from(59 * 83);
        PublicKey {
            n2: &n * &n,
            g: &n + BigInt::one(),
            delta: factorial(3),
            l: 3,
            w: 2,
            n,
        }
    }

    #[test]
    fn stores_one_based_identity() {
        assert_eq!(AuthServer::new(BigInt::from(7), 0).index, 1);
        assert_eq!(AuthServer::new(BigInt::from(7), 4).index, 5);
    }

    #[test]
    fn partial_decryption_matches_exponentiation() {
        let pk = small_public_key();
        let server = AuthServer::new(BigInt::from(123), 1);
        let c = BigInt::from(17);
        let expected = c.modpow(
            &(BigInt::from(2) * &pk.delta * BigInt::from(123)),
            &pk.n2,
        );
        assert_eq!(server.partial_decrypt(&pk, &c).unwrap(), expected);
    }

    #[test]
    fn rejects_out_of_range_ciphertexts() {
        let pk = small_public_key();
        let server = AuthServer::new(BigInt::from(123), 0);
        for c in [BigInt::zero(), BigInt::from(-1), pk.n2.clone()] {
            assert!(matches!(
                server.partial_decrypt(&pk, &c),
                Err(DecryptError::InvalidCiphertext)
            ));
        }
    }

    #[test]
    fn zeroize_clears_share() {
        let mut server = AuthServer::new(BigInt::from(123), 2);
        server.zeroize();
        assert_eq!(server.si, BigInt::zero());
        assert_eq!(server.index, 3);
    }
}
