//! Matched filter receiver
//!
//! Correlates each received row against the energy-normalized,
//! conjugated, time-reversed channel response and samples the output
//! at index `T - 1`, the first point where the kernel fully overlaps
//! the row. For a noiseless row equal to the response the statistic
//! is exactly one.

use num_complex::Complex;
use num_traits::{Float, Zero};
use std::fmt::Debug;
use tracing::{debug, trace, warn};

use crate::convolve::{convolve_at, convolve_full};
use crate::error::{FilterError, FilterResult};
use crate::traits::Sample;

/// Matched filter built from a known channel (or pulse) response
///
/// The kernel `conj(reverse(h)) / sum(|h|^2)` is computed once at
/// construction and reused for every row.
#[derive(Debug, Clone)]
pub struct MatchedFilter<S: Sample> {
    kernel: Vec<S>,
    energy: S::Real,
}

impl<S: Sample> MatchedFilter<S> {
    /// Create a matched filter for the given channel response
    ///
    /// # Errors
    /// `FilterError::ZeroEnergy` if the response is empty or all zero,
    /// `FilterError::NonFiniteEnergy` if the energy overflows or is NaN.
    pub fn new(channel_response: &[S]) -> FilterResult<Self> {
        let energy = channel_response
            .iter()
            .fold(S::Real::zero(), |acc, &h| acc + h.norm_sqr());

        if energy.is_zero() {
            warn!(taps = channel_response.len(), "matched filter rejected zero-energy response");
            return Err(FilterError::ZeroEnergy);
        }

        if !energy.is_finite() {
            warn!(
                taps = channel_response.len(),
                energy = ?energy,
                "matched filter rejected non-finite response energy"
            );
            return Err(FilterError::NonFiniteEnergy);
        }

        let kernel: Vec<S> = channel_response
            .iter()
            .rev()
            .map(|&h| h.conj().unscale(energy))
            .collect();

        debug!(taps = kernel.len(), energy = ?energy, "matched filter kernel built");

        Ok(Self { kernel, energy })
    }

    /// Number of taps `T`
    pub fn taps(&self) -> usize {
        self.kernel.len()
    }

    /// Normalized, conjugated, time-reversed kernel
    pub fn kernel(&self) -> &[S] {
        &self.kernel
    }

    /// Energy of the channel response used for normalization
    pub fn energy(&self) -> S::Real {
        self.energy
    }

    fn check_row(&self, index: usize, row: &[S]) -> FilterResult<()> {
        if row.len() < self.taps() {
            warn!(
                row = index,
                len = row.len(),
                taps = self.taps(),
                "matched filter row too short"
            );
            return Err(FilterError::RowTooShort {
                row: index,
                len: row.len(),
                taps: self.taps(),
            });
        }
        Ok(())
    }

    /// Complete filter output for one row
    ///
    /// Length is `row.len() + T - 1`; the decision statistic sits at
    /// index `T - 1`.
    pub fn filter_full(&self, row: &[S]) -> FilterResult<Vec<S>> {
        self.check_row(0, row)?;
        Ok(convolve_full(row, &self.kernel))
    }

    /// Decision statistic for one row
    pub fn sample(&self, row: &[S]) -> FilterResult<S> {
        self.check_row(0, row)?;
        Ok(self.sample_unchecked(row))
    }

    #[inline]
    fn sample_unchecked(&self, row: &[S]) -> S {
        convolve_at(row, &self.kernel, self.taps() - 1)
    }

    /// One decision statistic per row, in row order
    ///
    /// Every row is validated before any output is computed.
    pub fn apply<R: AsRef<[S]>>(&self, rows: &[R]) -> FilterResult<Vec<S>> {
        for (index, row) in rows.iter().enumerate() {
            self.check_row(index, row.as_ref())?;
        }

        trace!(rows = rows.len(), taps = self.taps(), "matched filter apply");

        Ok(rows
            .iter()
            .map(|row| self.sample_unchecked(row.as_ref()))
            .collect())
    }

    /// Parallel version of [`apply`](Self::apply)
    ///
    /// Rows are filtered on the rayon pool; output order matches input order.
    #[cfg(feature = "parallel")]
    pub fn par_apply<R: AsRef<[S]> + Sync>(&self, rows: &[R]) -> FilterResult<Vec<S>> {
        use rayon::prelude::*;

        for (index, row) in rows.iter().enumerate() {
            self.check_row(index, row.as_ref())?;
        }

        trace!(rows = rows.len(), taps = self.taps(), "matched filter par_apply");

        Ok(rows
            .par_iter()
            .map(|row| self.sample_unchecked(row.as_ref()))
            .collect())
    }
}

impl<T> MatchedFilter<Complex<T>>
where
    T: Float + Send + Sync + Debug + 'static,
{
    /// Create a complex matched filter from a real channel response
    pub fn from_real(channel_response: &[T]) -> FilterResult<Self> {
        let response: Vec<Complex<T>> = channel_response
            .iter()
            .map(|&h| Complex::from(h))
            .collect();
        Self::new(&response)
    }
}

/// Matched filter over a collection of rows
///
/// Each row may have its own length, as long as it is at least as long
/// as `channel_response`. Returns one statistic per row.
pub fn matched_filter<S, R>(received_data: &[R], channel_response: &[S]) -> FilterResult<Vec<S>>
where
    S: Sample,
    R: AsRef<[S]>,
{
    MatchedFilter::new(channel_response)?.apply(received_data)
}

/// Matched filter over a single flat sequence, treated as one row
pub fn matched_filter_flat<S: Sample>(
    received_data: &[S],
    channel_response: &[S],
) -> FilterResult<Vec<S>> {
    MatchedFilter::new(channel_response)?.apply(&[received_data])
}
