//! Direct-form discrete convolution
//!
//! `convolve_full` matches the "full" mode of the usual array libraries:
//! output length is `x.len() + k.len() - 1`. `convolve_at` evaluates a
//! single output index without materializing the rest.

use crate::traits::Sample;

/// Full linear convolution of `x` with kernel `k`
///
/// Returns an empty vector if either input is empty.
pub fn convolve_full<S: Sample>(x: &[S], k: &[S]) -> Vec<S> {
    if x.is_empty() || k.is_empty() {
        return Vec::new();
    }

    let mut out = vec![S::zero(); x.len() + k.len() - 1];
    for (i, &xi) in x.iter().enumerate() {
        for (j, &kj) in k.iter().enumerate() {
            out[i + j] = out[i + j] + xi * kj;
        }
    }
    out
}

/// Single sample `n` of the full convolution of `x` with `k`
///
/// `y[n] = sum_j k[j] * x[n - j]` over the indices where both operands
/// exist. Indices past the end of the full output yield zero.
pub fn convolve_at<S: Sample>(x: &[S], k: &[S], n: usize) -> S {
    if x.is_empty() || k.is_empty() {
        return S::zero();
    }

    let lo = (n + 1).saturating_sub(x.len());
    let hi = n.min(k.len() - 1);
    if lo > hi {
        return S::zero();
    }

    (lo..=hi).fold(S::zero(), |acc, j| acc + k[j] * x[n - j])
}
