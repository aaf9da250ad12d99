//! This crate implements a threshold variant of the Paillier cryptosystem.
//!
//! Based on:
//! [Damgård and Jurik, 2001](https://people.csail.mit.edu/rivest/voting/papers/DamgardJurikNielsen-AGeneralizationOfPailliersPublicKeySystemWithApplicationsToElectronicVoting.pdf)
//! specialized to base `s = 1`, so all ciphertext arithmetic happens modulo
//! `n^2`. A trusted dealer splits the decryption exponent over `l`
//! authorization servers with a degree `w - 1` polynomial; any `w` of them
//! can jointly decrypt a ciphertext, and fewer learn nothing about the
//! plaintext.
//!
//! # Example
//! ```
//! use num_bigint::BigInt;
//! use quorum_paillier::{generate_key_pair, AuthServer, Polynomial, RandomState};
//!
//! let mut rand = RandomState::new()?;
//! let (pk, sk) = generate_key_pair(&mut rand, 128, 2, 3)?;
//!
//! // Dealing phase: one share per server, then the dealer state and the
//! // polynomial are destroyed.
//! let poly = Polynomial::new(&sk, &mut rand);
//! let servers: Vec<_> = (0..3)
//!     .map(|i| AuthServer::new(poly.evaluate(&sk, i), i))
//!     .collect();
//! drop(poly);
//! drop(sk);
//!
//! // Any two servers can decrypt.
//! let c = pk.encrypt(&mut rand, &BigInt::from(42));
//! let mut partials = vec![BigInt::from(0); 3];
//! for i in 0..2 {
//!     partials[i] = servers[i].partial_decrypt(&pk, &c)?;
//! }
//! assert_eq!(pk.combine_shares(&partials)?, BigInt::from(42));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod auth_server;
pub mod functions;
pub mod keygen;
pub mod polynomial;
pub mod private_key;
pub mod pub_key;
pub mod rand_state;

pub use auth_server::AuthServer;
pub use keygen::generate_key_pair;
pub use polynomial::Polynomial;
pub use private_key::PrivateKey;
pub use pub_key::PublicKey;
pub use rand_state::RandomState;
