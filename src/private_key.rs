use num_bigint::BigInt;
use num_traits::Zero;
use zeroize::Zeroize;

/// Dealer-side key material.
///
/// Holds the decryption exponent `d` and the sharing modulus `n * m`. The
/// object only exists during the dealing phase: once every share has been
/// handed out it must be dropped, which zeroizes the secret fields.
#[derive(Debug)]
pub struct PrivateKey {
    pub n: BigInt,
    pub n2: BigInt,
    pub d: BigInt,
    pub m: BigInt,
    pub nm: BigInt,
    pub l: u32,
    pub w: u32,
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        // n and n2 are public values and stay intact.
        self.d = BigInt::zero();
        self.m = BigInt::zero();
        self.nm = BigInt::zero();
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}
