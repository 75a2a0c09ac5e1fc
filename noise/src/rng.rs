use core::num::Wrapping as w;
use rand_core::{impls, RngCore, SeedableRng};

/// Xorshift128 generator used to shuffle permutation tables.
///
/// Plain integer arithmetic only, so a given seed yields the same stream on
/// every platform.
#[derive(Clone, Debug)]
pub struct XorShiftRng {
    x: w<u32>,
    y: w<u32>,
    z: w<u32>,
    w: w<u32>,
}
impl XorShiftRng {
    /// Expands `seed` into the four state words with PCG32, so nearby seeds
    /// start from unrelated states.
    pub fn new(seed: u32) -> Self {
        Self::seed_from_u64(seed.into())
    }

    pub fn from_state(mut state: [u32; 4]) -> Self {
        // Xorshift cannot be seeded with 0 and we cannot return an Error, but
        // also do not wish to panic (because a random seed can legitimately be
        // 0); our only option is therefore to use a preset value.
        if state.iter().all(|&x| x == 0) {
            state = [0xBAD_5EED; 4];
        }
        XorShiftRng { x: w(state[0]), y: w(state[1]), z: w(state[2]), w: w(state[3]) }
    }

    #[inline]
    fn rand(&mut self) -> u32 {
        let x = self.x;
        let t = x ^ (x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        let w_ = self.w;
        self.w = w_ ^ (w_ >> 19) ^ (t ^ (t >> 8));
        self.w.0
    }
}
impl SeedableRng for XorShiftRng {
    type Seed = [u8; 16];

    /// Little-endian state words.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0u32; 4];
        for (word, chunk) in state.iter_mut().zip(seed.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self::from_state(state)
    }
}
impl RngCore for XorShiftRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rand()
    }
    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = XorShiftRng::new(42);
        let mut b = XorShiftRng::new(42);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_is_not_stuck() {
        let mut rng = XorShiftRng::new(0);
        let first = rng.next_u32();
        assert_eq!(first, 3421425365);
        assert_ne!(first, rng.next_u32());
    }

    #[test]
    fn zero_state_uses_preset() {
        let mut zero = XorShiftRng::from_state([0; 4]);
        let mut preset = XorShiftRng::from_state([0xBAD_5EED; 4]);
        assert_eq!(zero.next_u64(), preset.next_u64());
        let mut zero = XorShiftRng::from_seed([0; 16]);
        assert_eq!(zero.next_u64(), XorShiftRng::from_state([0xBAD_5EED; 4]).next_u64());
    }

    #[test]
    fn from_seed_reads_little_endian_words() {
        let mut bytes = [0u8; 16];
        for (i, chunk) in bytes.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&(i as u32 + 1).to_le_bytes());
        }
        let mut a = XorShiftRng::from_seed(bytes);
        let mut b = XorShiftRng::from_state([1, 2, 3, 4]);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn gen_range_covers_inclusive_bound() {
        use rand::Rng;
        let mut rng = XorShiftRng::new(7);
        let mut seen = [0u32; 3];
        for _ in 0..3000 {
            seen[rng.gen_range(0..=2u32) as usize] += 1;
        }
        assert!(seen.iter().all(|&n| n > 900), "{seen:?}");
    }

    #[test]
    fn fill_bytes_is_deterministic() {
        let mut a = [0u8; 13];
        let mut b = [0u8; 13];
        XorShiftRng::new(3).fill_bytes(&mut a);
        XorShiftRng::new(3).try_fill_bytes(&mut b).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().any(|&v| v != 0));
    }
}
