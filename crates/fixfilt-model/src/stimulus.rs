// SPDX-License-Identifier: LGPL-3.0-or-later

//! Bounded-integer stimulus generation.
//!
//! Stimulus samples are uniform signed integers restricted to a quarter of
//! the `dw`-bit range, `[min_val/4, max_val/4)`. The restriction keeps the
//! filter response well inside the representable range so that premature
//! saturation does not mask the behavior under test.

use rand::Rng;

use crate::error::{ModelError, Result};

/// Generate `n` independent uniform stimulus samples for a `dw`-bit datapath.
///
/// Bounds use floor division of `-2^(dw-1)` and `2^(dw-1)-1` by four, with
/// the upper bound exclusive. The generator keeps no state between calls;
/// reproducibility is the caller's concern via the seeded `rng`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let stim = fixfilt_model::stimulus::generate(100, 16, &mut rng).unwrap();
/// assert!(stim.iter().all(|&s| (-8192..8192).contains(&s)));
/// ```
pub fn generate<R: Rng + ?Sized>(n: usize, data_width: u32, rng: &mut R) -> Result<Vec<i64>> {
    if !(2..=63).contains(&data_width) {
        return Err(ModelError::InvalidDataWidth(data_width));
    }

    let min_val = -(1i64 << (data_width - 1));
    let max_val = (1i64 << (data_width - 1)) - 1;
    let lo = min_val.div_euclid(4);
    let hi = max_val.div_euclid(4);

    Ok((0..n).map(|_| rng.random_range(lo..hi)).collect())
}
