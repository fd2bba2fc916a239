/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Promotes a stored integer to `f64` for arithmetic.
///
/// Magnitudes above [`MAX_SAFE_U64_INT`] round to the nearest representable
/// value, the same as any floating-point promotion.
///
/// ## Example
/// ```
/// use symbex::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-42), -42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an evaluated index to a position inside an array of `length`
/// elements.
///
/// The value is truncated toward zero first, so `1.5` reads element `1` and
/// `-0.5` reads element `0`.
///
/// ## Returns
/// - `Some(usize)`: The truncated index if it lies in `[0, length)`.
/// - `None`: If the value is not finite or falls outside the array.
///
/// ## Example
/// ```
/// use symbex::util::num::f64_to_index_checked;
///
/// assert_eq!(f64_to_index_checked(1.5, 5), Some(1));
/// assert_eq!(f64_to_index_checked(-0.5, 5), Some(0));
/// assert_eq!(f64_to_index_checked(5.0, 5), None);
/// assert_eq!(f64_to_index_checked(-1.0, 5), None);
/// assert_eq!(f64_to_index_checked(f64::INFINITY, 5), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_index_checked(value: f64, length: usize) -> Option<usize> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < 0.0 || truncated > MAX_SAFE_U64_INT as f64 {
        return None;
    }

    usize::try_from(truncated as u64).ok()
                                     .filter(|&index| index < length)
}

/// Converts an integer index to a position inside an array of `length`
/// elements.
///
/// ## Returns
/// - `Some(usize)`: The index if it lies in `[0, length)`.
/// - `None`: If the index is negative or too large.
///
/// ## Example
/// ```
/// use symbex::util::num::i64_to_index_checked;
///
/// assert_eq!(i64_to_index_checked(4, 5), Some(4));
/// assert_eq!(i64_to_index_checked(5, 5), None);
/// assert_eq!(i64_to_index_checked(-1, 5), None);
/// ```
#[must_use]
pub fn i64_to_index_checked(value: i64, length: usize) -> Option<usize> {
    usize::try_from(value).ok()
                          .filter(|&index| index < length)
}
