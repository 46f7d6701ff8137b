//! A set of utilities for working with numbers in the rental core.

/// Create a decimal number.
///
/// A thin wrapper around `dec!` so prices, rates, and multipliers are written
/// the same way everywhere, and so the numeric type can be swapped in one
/// place.
#[macro_export]
macro_rules! num {
    ($($val:tt)+) => {
        rust_decimal_macros::dec!($($val)+)
    }
}
