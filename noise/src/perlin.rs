use super::{
    math::{cell, fade, lerp, F, P},
    NoiseFn, PermutationTable, Seedable,
};
use rand::Rng;

/// Improved Perlin noise over 3D space.
///
/// The permutation table is fixed at construction; sampling never mutates
/// the generator, so a shared reference can be sampled from many threads.
#[derive(Clone, Debug)]
pub struct Perlin {
    seed: Option<u32>,
    perm: PermutationTable,
}
impl Perlin {
    /// Reproducible with `Some(seed)`, otherwise seeded from OS entropy.
    pub fn new(seed: Option<u32>) -> Self {
        match seed {
            Some(seed) => {
                tracing::debug!(seed, "perlin noise from seed");
                Self { seed: Some(seed), perm: PermutationTable::new(seed) }
            }
            None => {
                let seed: u32 = rand::random();
                tracing::debug!(seed, "perlin noise from entropy");
                Self { seed: Some(seed), perm: PermutationTable::new(seed) }
            }
        }
    }

    /// Builds from an injected random source.
    ///
    /// Reproducible only by replaying the same source, so [`Seedable::seed`]
    /// reports `None`.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        tracing::debug!("perlin noise from rng");
        Self { seed: None, perm: PermutationTable::from_rng(rng) }
    }

    pub fn permutation(&self) -> &PermutationTable {
        &self.perm
    }

    /// Samples the field at `(x, y, z)`.
    ///
    /// Output lies roughly in `[-1, 1]` and is not clamped. Integer
    /// coordinates always give `0.0`.
    pub fn evaluate(&self, x: F, y: F, z: F) -> F {
        let (xi, x) = cell(x);
        let (yi, y) = cell(y);
        let (zi, z) = cell(z);

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let h = |dx: usize, dy: usize, dz: usize| self.perm.hash3([xi + dx, yi + dy, zi + dz]);

        lerp(
            w,
            lerp(
                v,
                lerp(u, grad(h(0, 0, 0), x, y, z), grad(h(1, 0, 0), x - 1.0, y, z)),
                lerp(u, grad(h(0, 1, 0), x, y - 1.0, z), grad(h(1, 1, 0), x - 1.0, y - 1.0, z)),
            ),
            lerp(
                v,
                lerp(u, grad(h(0, 0, 1), x, y, z - 1.0), grad(h(1, 0, 1), x - 1.0, y, z - 1.0)),
                lerp(
                    u,
                    grad(h(0, 1, 1), x, y - 1.0, z - 1.0),
                    grad(h(1, 1, 1), x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }
}

/// Dot product of the offset with one of the 12 cube-edge gradients picked by
/// the low 4 bits of `hash`. Values 12..=15 repeat four of the edges.
#[inline(always)]
fn grad(hash: usize, x: F, y: F, z: F) -> F {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

impl Seedable for Perlin {
    fn new_seed(seed: u32) -> Self {
        Self::new(Some(seed))
    }
    fn seed(&self) -> Option<u32> {
        self.seed
    }
}
impl NoiseFn<3> for Perlin {
    #[inline]
    fn get(&self, point: P<3>) -> F {
        self.evaluate(point[0], point[1], point[2])
    }
}
