//! Correlation filter receiver
//!
//! Splits the received stream into contiguous blocks of `T` samples and
//! reduces each block to the dot product with the channel response. No
//! time reversal, conjugation or energy normalization is applied.

use num_complex::Complex;
use num_traits::Float;
use std::fmt::Debug;
use tracing::{debug, trace, warn};

use crate::error::{FilterError, FilterResult};
use crate::traits::Sample;

/// Correlation filter built from a known channel (or pulse) response
#[derive(Debug, Clone)]
pub struct CorrelationFilter<S: Sample> {
    response: Vec<S>,
}

impl<S: Sample> CorrelationFilter<S> {
    /// Create a correlation filter for the given channel response
    ///
    /// # Errors
    /// `FilterError::EmptyResponse` if the response has no taps.
    pub fn new(channel_response: &[S]) -> FilterResult<Self> {
        if channel_response.is_empty() {
            warn!("correlation filter rejected empty response");
            return Err(FilterError::EmptyResponse);
        }

        debug!(taps = channel_response.len(), "correlation filter built");

        Ok(Self {
            response: channel_response.to_vec(),
        })
    }

    /// Number of taps `T`, which is also the block length
    pub fn taps(&self) -> usize {
        self.response.len()
    }

    /// Channel response the blocks are correlated against
    pub fn response(&self) -> &[S] {
        &self.response
    }

    /// Number of whole blocks in `len` samples (floor division)
    pub fn block_count(&self, len: usize) -> usize {
        len / self.taps()
    }

    #[inline]
    fn block_statistic(&self, block: &[S]) -> S {
        block
            .iter()
            .zip(self.response.iter())
            .fold(S::zero(), |acc, (&x, &h)| acc + x * h)
    }

    fn check_len(&self, len: usize) -> FilterResult<()> {
        if len < self.taps() {
            warn!(len, taps = self.taps(), "correlation input shorter than one block");
            return Err(FilterError::InputTooShort {
                len,
                taps: self.taps(),
            });
        }

        let remainder = len % self.taps();
        if remainder != 0 {
            debug!(len, taps = self.taps(), remainder, "discarding trailing samples");
        }
        Ok(())
    }

    /// One decision statistic per whole block of `T` samples
    ///
    /// Trailing samples beyond the last whole block are ignored.
    ///
    /// # Errors
    /// `FilterError::InputTooShort` if fewer than `T` samples are given.
    pub fn apply(&self, received_data: &[S]) -> FilterResult<Vec<S>> {
        self.check_len(received_data.len())?;

        trace!(
            blocks = self.block_count(received_data.len()),
            taps = self.taps(),
            "correlation filter apply"
        );

        Ok(received_data
            .chunks_exact(self.taps())
            .map(|block| self.block_statistic(block))
            .collect())
    }

    /// Correlate data that is already split into blocks
    ///
    /// Every block must hold exactly `T` samples.
    pub fn apply_blocks<R: AsRef<[S]>>(&self, blocks: &[R]) -> FilterResult<Vec<S>> {
        if blocks.is_empty() {
            return Err(FilterError::InputTooShort {
                len: 0,
                taps: self.taps(),
            });
        }

        for (index, block) in blocks.iter().enumerate() {
            let len = block.as_ref().len();
            if len != self.taps() {
                warn!(block = index, len, taps = self.taps(), "correlation block length mismatch");
                return Err(FilterError::BlockLength {
                    block: index,
                    len,
                    taps: self.taps(),
                });
            }
        }

        Ok(blocks
            .iter()
            .map(|block| self.block_statistic(block.as_ref()))
            .collect())
    }

    /// Parallel version of [`apply`](Self::apply)
    ///
    /// Blocks are reduced on the rayon pool; output order matches block order.
    #[cfg(feature = "parallel")]
    pub fn par_apply(&self, received_data: &[S]) -> FilterResult<Vec<S>> {
        use rayon::prelude::*;

        self.check_len(received_data.len())?;

        Ok(received_data
            .par_chunks_exact(self.taps())
            .map(|block| self.block_statistic(block))
            .collect())
    }
}

impl<T> CorrelationFilter<Complex<T>>
where
    T: Float + Send + Sync + Debug + 'static,
{
    /// Create a complex correlation filter from a real channel response
    pub fn from_real(channel_response: &[T]) -> FilterResult<Self> {
        let response: Vec<Complex<T>> = channel_response
            .iter()
            .map(|&h| Complex::from(h))
            .collect();
        Self::new(&response)
    }
}

/// Correlation filter over one flat sequence
///
/// Produces `floor(len(received_data) / len(channel_response))` statistics.
pub fn correlation_filter<S: Sample>(
    received_data: &[S],
    channel_response: &[S],
) -> FilterResult<Vec<S>> {
    CorrelationFilter::new(channel_response)?.apply(received_data)
}

/// Correlation filter over data already shaped as blocks of length `T`
pub fn correlation_filter_blocks<S, R>(blocks: &[R], channel_response: &[S]) -> FilterResult<Vec<S>>
where
    S: Sample,
    R: AsRef<[S]>,
{
    CorrelationFilter::new(channel_response)?.apply_blocks(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_two_block_example() {
        let out = correlation_filter(&[1.0_f64, 2.0, 1.0, 2.0], &[1.0, 2.0]).unwrap();
        assert_eq!(out, vec![5.0, 5.0]);
    }

    #[test]
    fn test_single_block_is_dot_product() {
        let data = [0.5_f64, -1.0, 2.0];
        let h = [4.0, 3.0, -0.25];
        let out = correlation_filter(&data, &h).unwrap();
        assert_eq!(out.len(), 1);
        assert!((out[0] - (2.0 - 3.0 - 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_trailing_samples_discarded() {
        let cf = CorrelationFilter::new(&[1.0_f64, 1.0, 1.0]).unwrap();
        let data = [1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 7.0, 7.0];
        assert_eq!(cf.block_count(data.len()), 2);
        assert_eq!(cf.apply(&data).unwrap(), vec![3.0, 6.0]);
    }

    #[test]
    fn test_no_conjugation_for_complex() {
        let j = Complex64::new(0.0, 1.0);
        let out = correlation_filter(&[j], &[j]).unwrap();
        assert_eq!(out, vec![Complex64::new(-1.0, 0.0)]);
    }

    #[test]
    fn test_from_real_on_complex_stream() {
        let cf = CorrelationFilter::<Complex64>::from_real(&[1.0, 2.0]).unwrap();
        let data = [
            Complex64::new(1.0, 1.0),
            Complex64::new(2.0, -1.0),
            Complex64::new(0.0, 3.0),
            Complex64::new(1.0, 0.0),
        ];
        let out = cf.apply(&data).unwrap();
        assert_eq!(out, vec![Complex64::new(5.0, -1.0), Complex64::new(2.0, 3.0)]);
    }

    #[test]
    fn test_from_real_empty_is_domain_error() {
        let empty: [f64; 0] = [];
        let err = CorrelationFilter::<Complex64>::from_real(&empty).unwrap_err();
        assert_eq!(err, FilterError::EmptyResponse);
    }

    #[test]
    fn test_empty_response_is_domain_error() {
        let empty: [f64; 0] = [];
        let err = correlation_filter(&[1.0, 2.0], &empty).unwrap_err();
        assert_eq!(err, FilterError::EmptyResponse);
        assert!(err.is_domain());
    }

    #[test]
    fn test_short_input_is_shape_error() {
        let err = correlation_filter(&[1.0_f64], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, FilterError::InputTooShort { len: 1, taps: 2 });
        assert!(err.is_shape());
    }

    #[test]
    fn test_zero_response_is_allowed() {
        let out = correlation_filter(&[3.0_f64, 4.0], &[0.0, 0.0]).unwrap();
        assert_eq!(out, vec![0.0]);
    }

    #[test]
    fn test_apply_blocks() {
        let blocks = vec![vec![1.0_f64, 2.0], vec![3.0, 4.0]];
        let out = correlation_filter_blocks(&blocks, &[1.0, 1.0]).unwrap();
        assert_eq!(out, vec![3.0, 7.0]);
    }

    #[test]
    fn test_apply_blocks_rejects_ragged_rows() {
        let blocks = vec![vec![1.0_f64, 2.0], vec![3.0]];
        let err = correlation_filter_blocks(&blocks, &[1.0, 1.0]).unwrap_err();
        assert_eq!(err, FilterError::BlockLength { block: 1, len: 1, taps: 2 });
    }

    #[test]
    fn test_apply_blocks_rejects_empty() {
        let blocks: Vec<Vec<f64>> = Vec::new();
        let err = correlation_filter_blocks(&blocks, &[1.0]).unwrap_err();
        assert!(err.is_shape());
    }
}
