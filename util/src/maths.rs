//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Clamp a value into the range `[min, max]`.
pub fn clamp<T>(value: &T, min: &T, max: &T) -> T
where
    T: Float,
{
    let mut ret = *value;

    if ret > *max {
        ret = *max
    }
    if ret < *min {
        ret = *min
    }

    ret
}

/// Wrap an angle in degrees into the range `[-180, 180)`.
pub fn wrap_180<T>(value: T) -> T
where
    T: Float,
{
    let full = T::from(360.0).unwrap_or_else(T::nan);
    let half = T::from(180.0).unwrap_or_else(T::nan);

    let wrapped = rem_euclid(value + half, full) - half;

    // Floating point remainders can land exactly on the upper bound
    if wrapped >= half {
        wrapped - full
    } else {
        wrapped
    }
}

/// Calculates the least nonnegative remainder of `lhs (mod rhs)`.
///
/// This function is taken from the std library as num is missing it.
pub fn rem_euclid<T>(lhs: T, rhs: T) -> T
where
    T: Float,
{
    let r = lhs % rhs;
    if r < T::zero() {
        r + rhs.abs()
    } else {
        r
    }
}
