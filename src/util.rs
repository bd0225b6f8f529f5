use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Clamp `n` into `[minimum, maximum]`.
pub fn clamp<T: PartialOrd>(n: T, minimum: T, maximum: T) -> T {
    if n < minimum {
        minimum
    } else if n > maximum {
        maximum
    } else {
        n
    }
}

/// Sample an integer from a normal distribution with mean `mu` and
/// standard deviation `round(mu / inverse_scale)`.
///
/// The sample is truncated toward zero and has no lower bound, so it can be
/// zero or even negative. Callers spawning things should clamp it.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, mu: f32, inverse_scale: f32) -> i32 {
    let std_dev = (mu / inverse_scale).round_ties_even().abs();
    if !std_dev.is_finite() {
        log::warn!(
            "gaussian spread is not finite (mu={}, inverse_scale={})",
            mu,
            inverse_scale
        );
        return mu as i32;
    }
    match Normal::new(mu, std_dev) {
        Ok(normal) => normal.sample(rng) as i32,
        Err(err) => {
            log::warn!(
                "invalid gaussian parameters mu={} inverse_scale={}: {}",
                mu,
                inverse_scale,
                err
            );
            mu as i32
        }
    }
}

/// Map `value` from `old_range` onto `new_range`, keeping its relative position.
pub fn linear_conversion(value: f32, old_range: (f32, f32), new_range: (f32, f32)) -> f32 {
    (value - old_range.0) * (new_range.1 - new_range.0) / (old_range.1 - old_range.0)
        + new_range.0
}
