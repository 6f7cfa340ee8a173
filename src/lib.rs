//! Optimal Filters - Matched and correlation receive filters
//!
//! Reduces received samples to one decision statistic per symbol interval
//! for a downstream detector. Both filters are pure: inputs are borrowed,
//! outputs freshly allocated, and nothing is shared between calls.
//!
//! Sample types are generic through [`Sample`], so `f32`, `f64`,
//! `Complex<f32>` and `Complex<f64>` all pass through at their own
//! precision.
//!
//! Cargo features:
//! - `parallel` - rayon-backed `par_apply` on both filters
//! - `nif` - Rustler bindings for `Elixir.OptimalFilters.Native`

pub mod convolve;
pub mod correlation;
pub mod error;
pub mod matched;
pub mod traits;

#[cfg(feature = "nif")]
pub mod nif;

// Re-export core types for convenience
pub use convolve::{convolve_at, convolve_full};
pub use correlation::{correlation_filter, correlation_filter_blocks, CorrelationFilter};
pub use error::{FilterError, FilterResult};
pub use matched::{matched_filter, matched_filter_flat, MatchedFilter};
pub use traits::Sample;

#[cfg(feature = "nif")]
rustler::init!("Elixir.OptimalFilters.Native");
