#[inline(always)]
pub(crate) fn from_fn<F, T, const N: usize>(mut cb: F) -> [T; N]
where
    F: FnMut(usize) -> T,
{
    let mut idx = 0;
    [(); N].map(|_| {
        let res = cb(idx);
        idx += 1;
        res
    })
}

pub type F = f64;
pub type P<const D: usize> = [F; D];

/// Quintic smoothing curve `6t^5 - 15t^4 + 10t^3`.
///
/// First and second derivatives vanish at 0 and 1, so neighbouring cells join
/// without visible creases.
#[inline(always)]
pub fn fade(t: F) -> F {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// `a` at `t = 0`, `b` at `t = 1`.
#[inline(always)]
pub fn lerp(t: F, a: F, b: F) -> F {
    a + t * (b - a)
}

/// Splits a coordinate into its lattice index (wrapped to `0..256`) and the
/// offset inside that cell.
///
/// The index wraps like `floor(t) & 255`, so `-1.0` lands on cell 255.
/// Non-finite input saturates in the cast instead of panicking.
#[inline(always)]
pub(crate) fn cell(t: F) -> (usize, F) {
    let floor = t.floor();
    ((floor as i64 & 0xff) as usize, t - floor)
}
