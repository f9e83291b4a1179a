//! Encode and decode Oracle Spatial `SDO_GEOMETRY` values.
//!
//! The crate converts the flattened `SDO_GEOMETRY` representation, a geometry type code, an SRID,
//! an optional inline point, an element info array and an ordinate array, into a structured
//! geometry tree and back. Circular arcs, circles and rectangles are expanded into straight
//! segments when decoding.
//!
//! Decoded geometries are available in two models: the dimension-aware [`geometry`] model, which
//! keeps z and measure values, and [`geo`] geometries through the [`io::geo`] bridge.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod algorithm;
pub mod datatypes;
pub mod error;
pub mod geometry;
pub mod io;
