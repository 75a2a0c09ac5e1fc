//! Seeded 3D gradient noise
//!
//! ```
//! use scalliony_noise::{NoiseFn, Perlin};
//!
//! let noise = Perlin::new(Some(42));
//! assert_eq!(noise.evaluate(0.5, 0.5, 0.5), -0.25);
//! assert_eq!(noise.get([3., 5., 7.]), 0.);
//! ```

mod config;
mod math;
mod perlin;
mod permutationtable;
mod rng;

pub trait NoiseFn<const D: usize> {
    fn get(&self, point: P<D>) -> f64;
}
pub trait Seedable {
    fn new_seed(seed: u32) -> Self;
    /// `None` when built from a random source rather than a seed.
    fn seed(&self) -> Option<u32>;
}

pub use config::NoiseConfig;
pub use math::*;
pub use perlin::Perlin;
pub use permutationtable::{PermutationTable, TABLE_SIZE};
pub use rng::XorShiftRng;
