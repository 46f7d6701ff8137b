#[macro_use]
pub mod rental_model;
