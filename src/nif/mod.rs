//! NIF interface for Elixir
//!
//! Exposes the matched and correlation filters as Rustler NIFs. Real
//! samples travel as float lists; complex samples as `{i, q}` tuples,
//! the same I/Q convention the modem NIFs use.

use num_complex::Complex64;
use rustler::NifResult;

use crate::correlation::{
    correlation_filter as correlate, correlation_filter_blocks as correlate_blocks,
};
use crate::error::FilterError;
use crate::matched::matched_filter as match_rows;

fn to_nif_error(err: FilterError) -> rustler::Error {
    rustler::Error::Term(Box::new(err.reason()))
}

fn iq_to_complex(iq: &[(f64, f64)]) -> Vec<Complex64> {
    iq.iter().map(|&(i, q)| Complex64::new(i, q)).collect()
}

fn complex_to_iq(samples: &[Complex64]) -> Vec<(f64, f64)> {
    samples.iter().map(|z| (z.re, z.im)).collect()
}

// ============================================================================
// Real-valued NIFs
// ============================================================================

/// Matched filter over a list of rows
///
/// # Arguments
/// * `rows` - List of sample lists, each at least as long as the response
/// * `channel_response` - Channel or pulse impulse response
#[rustler::nif]
pub fn matched_filter(rows: Vec<Vec<f64>>, channel_response: Vec<f64>) -> NifResult<Vec<f64>> {
    match_rows(&rows, &channel_response).map_err(to_nif_error)
}

/// Correlation filter over a flat sample list
#[rustler::nif]
pub fn correlation_filter(samples: Vec<f64>, channel_response: Vec<f64>) -> NifResult<Vec<f64>> {
    correlate(&samples, &channel_response).map_err(to_nif_error)
}

/// Correlation filter over samples already split into response-length blocks
#[rustler::nif]
pub fn correlation_filter_blocks(
    blocks: Vec<Vec<f64>>,
    channel_response: Vec<f64>,
) -> NifResult<Vec<f64>> {
    correlate_blocks(&blocks, &channel_response).map_err(to_nif_error)
}

// ============================================================================
// I/Q NIFs
// ============================================================================

/// Matched filter over rows of `{i, q}` samples
#[rustler::nif]
pub fn matched_filter_iq(
    rows: Vec<Vec<(f64, f64)>>,
    channel_response: Vec<(f64, f64)>,
) -> NifResult<Vec<(f64, f64)>> {
    let rows: Vec<Vec<Complex64>> = rows.iter().map(|row| iq_to_complex(row)).collect();
    let response = iq_to_complex(&channel_response);

    let out = match_rows(&rows, &response).map_err(to_nif_error)?;
    Ok(complex_to_iq(&out))
}

/// Correlation filter over a flat list of `{i, q}` samples
#[rustler::nif]
pub fn correlation_filter_iq(
    samples: Vec<(f64, f64)>,
    channel_response: Vec<(f64, f64)>,
) -> NifResult<Vec<(f64, f64)>> {
    let samples = iq_to_complex(&samples);
    let response = iq_to_complex(&channel_response);

    let out = correlate(&samples, &response).map_err(to_nif_error)?;
    Ok(complex_to_iq(&out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iq_conversion() {
        let iq = vec![(1.0, -2.0), (0.5, 0.25)];
        let z = iq_to_complex(&iq);
        assert_eq!(z[0], Complex64::new(1.0, -2.0));
        assert_eq!(complex_to_iq(&z), iq);
    }
}
