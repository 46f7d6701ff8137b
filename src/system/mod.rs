//! A module for the parameters the system as a whole runs on, as opposed to
//! anything belonging to a single branch or car.

pub mod params;
