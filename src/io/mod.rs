//! Conversions between the native geometry model and external representations.

pub mod geo;
pub mod sdo;
