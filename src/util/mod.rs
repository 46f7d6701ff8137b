//! A set of utility structs and functions used when operating the core.

#[macro_use]
pub mod number;
pub(crate) mod time;
