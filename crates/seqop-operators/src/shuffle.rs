//! In-place Fisher–Yates shuffle over a `Sequence`.

use seqop_core::random::RandomSource;

use crate::traits::Sequence;

/// Walk `i` from the last index down to 1, draw `j` uniformly from `[0, i]`
/// and swap when the two differ. Uniform given a uniform source;
/// reproducible given a deterministic one.
pub fn fisher_yates<S, R>(data: &mut S, rng: &mut R)
where
    S: Sequence + ?Sized,
    R: RandomSource + ?Sized,
{
    let n = data.len();
    for i in (1..n).rev() {
        let j = rng.next_in_range(i + 1);
        if i != j {
            data.swap(i, j);
        }
    }
}
