//! Core numeric traits for the receive filters
//!
//! The filters are generic over the sample type so that real and complex
//! baseband data, in single or double precision, flow through unchanged.

mod sample;

pub use sample::Sample;
