//! Deterministic RNG streams for the probabilistic steps.

use std::cell::RefCell;

use hmac::{Hmac, Mac};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sha2::Sha256;

use crate::steps::StepId;

/// Bundle of RNG streams segregated by step domain, so forcing one
/// step's outcome in a test never shifts the draws of another.
///
/// Only `search` and `unlock` carry probabilistic failure; the other
/// steps never consult a stream.
#[derive(Debug)]
pub struct StepRngs {
    search: RefCell<SmallRng>,
    unlock: RefCell<SmallRng>,
}

impl StepRngs {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        Self {
            search: RefCell::new(SmallRng::seed_from_u64(derive_stream_seed(seed, b"search"))),
            unlock: RefCell::new(SmallRng::seed_from_u64(derive_stream_seed(seed, b"unlock"))),
        }
    }

    /// Construct the bundle from OS entropy (normal play).
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            search: RefCell::new(SmallRng::from_entropy()),
            unlock: RefCell::new(SmallRng::from_entropy()),
        }
    }

    /// Roll the stream for `id` against `chance`, returning whether the
    /// step passes. Steps without a stream always pass.
    pub fn roll(&self, id: StepId, chance: f64) -> bool {
        let stream = match id {
            StepId::Search => &self.search,
            StepId::Unlock => &self.unlock,
            _ => return true,
        };
        stream.borrow_mut().gen_bool(chance.clamp(0.0, 1.0))
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac = Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes())
        .expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}
