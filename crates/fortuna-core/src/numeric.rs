//! Uniform numeric draws: bounded integers, doubles, floats, coin flips and
//! percentage rolls.

use crate::error::RandomError;
use crate::rng::DeterministicRng;

/// Largest `f32` strictly below `1.0`.
const LARGEST_BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Draws in `[min, max_exclusive)`. Callers guarantee `min < max_exclusive`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_between(rng: &mut dyn DeterministicRng, min: i32, max_exclusive: i32) -> i32 {
    // The span of any non-empty i32 range fits in u32.
    let last_offset = (i64::from(max_exclusive) - i64::from(min) - 1) as u32;
    let offset = rng.next_u32_range(0, last_offset);
    (i64::from(min) + i64::from(offset)) as i32
}

/// Returns an integer in `[min, max_exclusive)`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `max_exclusive <= min`.
pub fn next_int(
    rng: &mut dyn DeterministicRng,
    min: i32,
    max_exclusive: i32,
) -> Result<i32, RandomError> {
    if max_exclusive <= min {
        return Err(RandomError::InvalidArgument(format!(
            "max_exclusive ({max_exclusive}) must be greater than min ({min})"
        )));
    }
    Ok(draw_between(rng, min, max_exclusive))
}

/// Returns an integer in `[0, max_exclusive)`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `max_exclusive <= 0`.
pub fn next_int_below(
    rng: &mut dyn DeterministicRng,
    max_exclusive: i32,
) -> Result<i32, RandomError> {
    next_int(rng, 0, max_exclusive)
}

/// Returns a double in `[0.0, 1.0)`.
pub fn next_double(rng: &mut dyn DeterministicRng) -> f64 {
    rng.next_f64()
}

/// Returns `min + next_double() * (max - min)`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if either bound is not finite or
/// `max <= min`.
pub fn next_double_between(
    rng: &mut dyn DeterministicRng,
    min: f64,
    max: f64,
) -> Result<f64, RandomError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(RandomError::InvalidArgument(format!(
            "bounds must be finite (min = {min}, max = {max})"
        )));
    }
    if max <= min {
        return Err(RandomError::InvalidArgument(format!(
            "max ({max}) must be greater than min ({min})"
        )));
    }

    let unit = rng.next_f64();
    let width = max - min;
    let value = if width.is_finite() {
        min + unit * width
    } else {
        // The span exceeds f64::MAX; interpolate without forming it.
        min * (1.0 - unit) + max * unit
    };
    Ok(value.clamp(min, max))
}

/// Returns a float in `[0.0, 1.0)`, narrowed from a double draw.
#[allow(clippy::cast_possible_truncation)]
pub fn next_float(rng: &mut dyn DeterministicRng) -> f32 {
    // Narrowing can round values just below 1.0 up to 1.0.
    (rng.next_f64() as f32).min(LARGEST_BELOW_ONE)
}

/// Returns a float between `min` and `max`, narrowed from
/// [`next_double_between`]. Rounding may yield exactly `max`.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if either bound is not finite or
/// `max <= min`.
#[allow(clippy::cast_possible_truncation)]
pub fn next_float_between(
    rng: &mut dyn DeterministicRng,
    min: f32,
    max: f32,
) -> Result<f32, RandomError> {
    next_double_between(rng, f64::from(min), f64::from(max)).map(|v| v as f32)
}

/// Flips a fair coin: `true` for heads.
pub fn coin(rng: &mut dyn DeterministicRng) -> bool {
    draw_between(rng, 0, 2) == 0
}

/// Rolls a d100 and returns `true` if the roll is at most `percent`.
///
/// `percent <= 0` never succeeds and `percent >= 100` always does.
pub fn percent_chance(rng: &mut dyn DeterministicRng, percent: i32) -> bool {
    draw_between(rng, 1, 101) <= percent
}
