/// Numeric conversion helpers.
///
/// This module provides the conversions between the stored integer values,
/// the floating-point values used during arithmetic, and array positions.
/// Index conversions truncate toward zero and return `None` for anything that
/// does not land inside the array.
pub mod num;
