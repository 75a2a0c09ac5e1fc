use super::rng::XorShiftRng;
use rand::Rng;
use std::fmt;

pub const TABLE_SIZE: usize = 256;

/// Lattice hash table for [`Perlin`](crate::Perlin).
///
/// Holds a permutation of `0..=255`. It is never modified once built, so a
/// table can be read from any number of threads.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    values: [u8; TABLE_SIZE],
}

impl PermutationTable {
    /// Deterministically generates a new permutation table based on a `u32` seed value.
    ///
    /// Using `XorShiftRng` and Fisher-Yates shuffle
    pub fn new(seed: u32) -> Self {
        Self::from_rng(&mut XorShiftRng::new(seed))
    }

    /// Shuffles the identity table with any random source, from the last index down to 1.
    ///
    /// Draws are `u32` so the table does not depend on the target's pointer width.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut values = super::math::from_fn(|i| i as u8);
        for i in (1..TABLE_SIZE as u32).rev() {
            values.swap(i as usize, rng.gen_range(0..=i) as usize);
        }
        tracing::trace!("shuffled permutation table");
        Self { values }
    }

    #[inline]
    pub fn values(&self) -> &[u8; TABLE_SIZE] {
        &self.values
    }

    /// Every index is masked to the table, so `x + 1` past 255 wraps to 0.
    #[inline]
    pub fn get(&self, x: usize) -> usize {
        self.values[x & 0xff] as usize
    }

    /// Chained lookup of one lattice corner.
    #[inline]
    pub fn hash3(&self, pos: [usize; 3]) -> usize {
        self.get(self.get(self.get(pos[0]) + pos[1]) + pos[2])
    }
}

impl fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PermutationTable {{ .. }}")
    }
}
