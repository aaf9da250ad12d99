//! Seeded random state for all probabilistic operations.
//!
//! This is a wrapper around a GMP random state, seeded from the operating
//! system's entropy source so the caller never has to. A handle is
//! exclusively owned and not thread-safe; callers needing parallelism
//! create one state per thread.

use num_bigint::BigInt;
use num_integer::Integer as _;
use num_traits::One;
use rand::rngs::OsRng;
use rand::RngCore;
use rug::{integer::Order, rand::RandState, Integer};
use thiserror::Error;

use crate::functions::{to_bigint, to_rug};

/// Bits of seed gathered from the operating system on every (re)seed.
pub const SEED_BITS: u32 = 256;

#[derive(Error, Debug)]
pub enum RandError {
    #[error("operating system entropy unavailable")]
    Entropy,
}

pub struct RandomState {
    state: RandState<'static>,
}

impl RandomState {
    /// Allocates a generator and seeds it from the operating system.
    pub fn new() -> Result<Self, RandError> {
        let mut state = RandState::new();
        state.seed(&os_seed()?);
        Ok(RandomState { state })
    }

    /// Replaces the internal seed with fresh entropy.
    pub fn reseed(&mut self) -> Result<(), RandError> {
        self.state.seed(&os_seed()?);
        Ok(())
    }

    /// Uniform value in `[0, n)`.
    pub fn below(&mut self, n: &BigInt) -> BigInt {
        to_bigint(&to_rug(n).random_below(&mut self.state))
    }

    /// Uniform value in the multiplicative group `(Z/nZ)*`.
    pub fn in_mult_group(&mut self, n: &BigInt) -> BigInt {
        loop {
            let r = self.below(n);
            if r.gcd(n).is_one() {
                return r;
            }
        }
    }

    pub(crate) fn rug_state(&mut self) -> &mut RandState<'static> {
        &mut self.state
    }
}

/// Draws `SEED_BITS` of entropy from the operating system. Seeds are never
/// buffered across calls.
fn os_seed() -> Result<Integer, RandError> {
    let mut seed = [0u8; (SEED_BITS / 8) as usize];
    OsRng
        .try_fill_bytes(&mut seed)
        .map_err(|_| RandError::Entropy)?;
    Ok(Integer::from_digits(&seed, Order::Msf))
}
