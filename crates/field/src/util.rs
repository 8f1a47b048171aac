// Copyright 2025 Irreducible Inc.

use std::iter;

use crate::Mersenne61;

/// Iterate the powers of a given value, beginning with 1 (the 0'th power).
pub fn powers(val: Mersenne61) -> impl Iterator<Item = Mersenne61> {
	iter::successors(Some(Mersenne61::ONE), move |&power| Some(power * val))
}

/// Number of double-width products the accumulator can absorb between
/// reductions: $2^{128 - 2 \cdot 61} - 1 = 63$.
const REDUCTION_BATCH: usize = (1 << (128 - 2 * 61)) - 1;

/// Inner product with deferred reduction.
///
/// Accumulates up to 63 double-width products in a `u128` before each
/// two-level reduction; the carried-over canonical value plus 63 products of
/// canonical operands stays below $2^{128}$. The result equals the
/// per-term-reduced dot product for any input length.
///
/// ## Panics
///
/// Panics if the slices have different lengths.
pub fn inner_product(a: &[Mersenne61], b: &[Mersenne61]) -> Mersenne61 {
	assert_eq!(a.len(), b.len(), "inner product operands must have equal lengths");

	let mut acc = 0u128;
	for (chunk_a, chunk_b) in iter::zip(a.chunks(REDUCTION_BATCH), b.chunks(REDUCTION_BATCH)) {
		for (&x, &y) in iter::zip(chunk_a, chunk_b) {
			acc += x.val() as u128 * y.val() as u128;
		}
		acc = Mersenne61::reduce128(acc).val() as u128;
	}
	Mersenne61::new(acc as u64)
}
