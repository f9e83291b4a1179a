//! Geometric algorithms used by the codec.

pub mod linearize;
pub mod winding;
