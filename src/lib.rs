#![forbid(unsafe_code)]

use rand::{thread_rng, RngCore};

pub mod team;
pub mod toss;

pub use team::{Choice, Team};
pub use toss::{decide, default_teams, toss, Conditions, TossError, TossOutcome};

/// Random generator used for every draw of the crate.
pub type RandGen = rand_pcg::Pcg64;

/// Seeder used to build a [`RandGen`].
pub type Seeder = rand_seeder::Seeder;

/// Generates a new random seed.
pub fn gen_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    thread_rng().fill_bytes(&mut seed);
    seed
}

/// Generates a new [`Seeder`] from a random seed (see [`gen_seed`]).
#[inline]
pub fn gen_seeder() -> Seeder {
    Seeder::from(gen_seed())
}
