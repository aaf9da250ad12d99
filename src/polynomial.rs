use num_bigint::BigInt;
use num_traits::{One, Zero};
use zeroize::Zeroize;

use crate::private_key::PrivateKey;
use crate::rand_state::RandomState;

/// Secret-sharing polynomial over `Z/(nm)Z`. Exists only during dealing.
pub struct Polynomial {
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    /// Degree `w - 1` polynomial whose constant term is the decryption
    /// exponent `d`; the remaining coefficients are uniform below `nm`.
    pub fn new(sk: &PrivateKey, rand: &mut RandomState) -> Self {
        let mut coefficients = Vec::with_capacity(sk.w as usize);
        coefficients.push(sk.d.clone());
        for _ in 1..sk.w {
            coefficients.push(rand.below(&sk.nm));
        }
        Polynomial { coefficients }
    }

    /// Evaluates the polynomial at the point `index + 1` modulo `nm`.
    ///
    /// `index` is the 0-based server slot; shifting by one keeps the point
    /// `0`, which would reveal the constant term, out of reach.
    pub fn evaluate(&self, sk: &PrivateKey, index: u32) -> BigInt {
        let x = BigInt::from(index + 1);
        let mut result = BigInt::zero();
        let mut x_power = BigInt::one();
        for coeff in &self.coefficients {
            result = (result + coeff * &x_power) % &sk.nm;
            x_power *= &x;
        }
        result
    }
}

impl Zeroize for Polynomial {
    fn zeroize(&mut self) {
        for coeff in &mut self.coefficients {
            *coeff = BigInt::zero();
        }
    }
}

impl Drop for Polynomial {
    fn drop(&mut self) {
        self.zeroize();
    }
}
