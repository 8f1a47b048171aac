// Copyright 2025 Irreducible Inc.

use fliop_field::{util::inner_product, Mersenne61};
use fliop_math::{lagrange_coeffs, ExtrapolationTable, LaneMatrix};
use fliop_utils::bail;
use itertools::zip_eq;
use rand::Rng;
use rayon::prelude::*;
use tracing::instrument;

use super::{
	common::{GateBatch, Proof, RoundShares},
	error::Error,
	shape::{fold_lanes, mask_lanes, shape_operands},
};
use crate::challenger::CanSample;

/// Proves that every instance of the batch satisfies
/// $a_t b_t + c_t d_t = z_t$ for the outputs implied by the operands.
///
/// Consumes one masking challenge η up front, then one folding challenge per
/// non-terminal round; the verifiers must consume the same stream. The
/// one-time-pad masks come from `mask_rng`, which is private to the prover
/// and must not be the challenge stream.
#[instrument(skip_all, name = "fliop::prove_and_gates", level = "debug")]
pub fn prove_and_gates(
	batch: &GateBatch,
	k: usize,
	challenger: &mut impl CanSample,
	mut mask_rng: impl Rng,
) -> Result<Proof, Error> {
	if k < 2 {
		bail!(Error::CompressionFactorTooSmall);
	}
	batch.validate()?;

	let table = ExtrapolationTable::new(k)?;
	let eta = challenger.sample();

	let mut left = shape_operands(&batch.a, &batch.c, k);
	let mut right = shape_operands(&batch.b, &batch.d, k);
	mask_lanes(&mut left, eta);

	let mut width = left.width();
	let mut rounds = Vec::new();
	loop {
		let evals = round_evaluations(&left, &right, &table);
		let ss1 = evals
			.iter()
			.map(|_| Mersenne61::random(&mut mask_rng))
			.collect::<Vec<_>>();
		let ss2 = zip_eq(&evals, &ss1)
			.map(|(&eval, &mask)| eval - mask)
			.collect();
		rounds.push(RoundShares { ss1, ss2 });

		if width == 1 {
			break;
		}
		let r = challenger.sample();
		let basis = lagrange_coeffs(k, r)?;
		let new_width = width.div_ceil(k);
		left = fold_lanes(&left, &basis, new_width);
		right = fold_lanes(&right, &basis, new_width);
		width = new_width;
	}

	Ok(Proof { rounds })
}

/// The $2k - 1$ evaluations of the implicit round polynomial.
///
/// The polynomial's value at native point i is the diagonal inner product of
/// left lane i with right lane i; the k−1 extrapolated points come from the
/// bilinear form of the precomputed basis rows over the full k×k product
/// matrix, never from materialized coefficients.
fn round_evaluations(
	left: &LaneMatrix,
	right: &LaneMatrix,
	table: &ExtrapolationTable,
) -> Vec<Mersenne61> {
	let k = table.k();
	let products = (0..k)
		.into_par_iter()
		.map(|i| {
			(0..k)
				.map(|j| inner_product(left.row(i), right.row(j)))
				.collect::<Vec<_>>()
		})
		.collect::<Vec<_>>();

	let mut evals = Vec::with_capacity(2 * k - 1);
	evals.extend((0..k).map(|i| products[i][i]));
	evals.extend((0..k - 1).map(|i| {
		let basis = table.row(i);
		zip_eq(basis, &products)
			.map(|(&coeff, row)| coeff * inner_product(basis, row))
			.sum::<Mersenne61>()
	}));
	evals
}
