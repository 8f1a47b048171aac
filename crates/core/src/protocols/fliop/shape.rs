// Copyright 2025 Irreducible Inc.

//! Lane shaping: the per-instance arrays are reorganized into k parallel
//! lanes so each reduction round can fold the batch k-to-1.

use fliop_field::Mersenne61;
use fliop_math::LaneMatrix;

/// Shapes two length-T operand arrays into k lanes of width $2s$,
/// $s = \lceil T / k \rceil$.
///
/// Lane i holds instance $i s + j$ in pair slot j: `x` in slot $2j$, `y` in
/// slot $2j + 1$. Slots past T are zero; the padding must contribute nothing
/// to any inner product downstream.
pub fn shape_operands(x: &[Mersenne61], y: &[Mersenne61], k: usize) -> LaneMatrix {
	debug_assert_eq!(x.len(), y.len());
	let t = x.len();
	let s = t.div_ceil(k);
	let mut lanes = LaneMatrix::zeros(k, 2 * s);
	for i in 0..k {
		let row = lanes.row_mut(i);
		for j in 0..s {
			let index = i * s + j;
			if index < t {
				row[2 * j] = x[index];
				row[2 * j + 1] = y[index];
			}
		}
	}
	lanes
}

/// Shapes a length-T output array into k lanes of width $\lceil T / k \rceil$,
/// one value per slot, zero-padded past T.
pub fn shape_outputs(z: &[Mersenne61], k: usize) -> LaneMatrix {
	let t = z.len();
	let s = t.div_ceil(k);
	let mut lanes = LaneMatrix::zeros(k, s);
	for i in 0..k {
		let row = lanes.row_mut(i);
		for j in 0..s {
			let index = i * s + j;
			if index < t {
				row[j] = z[index];
			}
		}
	}
	lanes
}

/// Masks operand lanes in place: both values of pair slot j in lane i are
/// multiplied by $\eta^{i s + j}$, one running power accumulator across the
/// lanes in order. Binds the T batched checks into one field identity.
pub(super) fn mask_lanes(lanes: &mut LaneMatrix, eta: Mersenne61) {
	let mut power = Mersenne61::ONE;
	for i in 0..lanes.rows() {
		for pair in lanes.row_mut(i).chunks_mut(2) {
			pair[0] *= power;
			pair[1] *= power;
			power *= eta;
		}
	}
}

/// The η-batched output identity over shaped output lanes:
/// $\sum_i \sum_j \eta^{i s + j} \, z_{\text{lane } i, \text{slot } j}$.
pub(super) fn masked_output_claim(outputs: &LaneMatrix, eta: Mersenne61) -> Mersenne61 {
	let mut power = Mersenne61::ONE;
	let mut acc = Mersenne61::ZERO;
	for i in 0..outputs.rows() {
		for &z in outputs.row(i) {
			acc += power * z;
			power *= eta;
		}
	}
	acc
}

/// Folds k lanes into k shorter lanes at a challenge point.
///
/// New slot $(i, j)$ is the basis-weighted combination of the k old lanes at
/// slot $i w' + j$, or zero when that index runs past the old width. The
/// basis must be the k Lagrange coefficients of the challenge.
pub(super) fn fold_lanes(lanes: &LaneMatrix, basis: &[Mersenne61], new_width: usize) -> LaneMatrix {
	let k = lanes.rows();
	debug_assert_eq!(basis.len(), k);
	let mut folded = LaneMatrix::zeros(k, new_width);
	for i in 0..k {
		for j in 0..new_width {
			let index = i * new_width + j;
			if index < lanes.width() {
				folded[(i, j)] = (0..k).map(|l| basis[l] * lanes[(l, index)]).sum();
			}
		}
	}
	folded
}

#[cfg(test)]
mod tests {
	use super::*;
	use fliop_field::util::powers;
	use rand::{rngs::StdRng, SeedableRng};
	use std::iter::repeat_with;

	fn elements(n: u64) -> Vec<Mersenne61> {
		(1..=n).map(Mersenne61::new).collect()
	}

	#[test]
	fn test_shape_operands_layout_and_padding() {
		// T = 5, k = 2: s = 3, lane width 6, one padded instance.
		let x = elements(5);
		let y = (0..5).map(|v| Mersenne61::new(10 + v)).collect::<Vec<_>>();
		let lanes = shape_operands(&x, &y, 2);
		assert_eq!(lanes.rows(), 2);
		assert_eq!(lanes.width(), 6);
		for i in 0..2 {
			for j in 0..3 {
				let index = i * 3 + j;
				let (expected_x, expected_y) = if index < 5 {
					(x[index], y[index])
				} else {
					(Mersenne61::ZERO, Mersenne61::ZERO)
				};
				assert_eq!(lanes[(i, 2 * j)], expected_x);
				assert_eq!(lanes[(i, 2 * j + 1)], expected_y);
			}
		}
	}

	#[test]
	fn test_shape_outputs_layout_and_padding() {
		let z = elements(10);
		let lanes = shape_outputs(&z, 4);
		assert_eq!(lanes.rows(), 4);
		assert_eq!(lanes.width(), 3);
		for i in 0..4 {
			for j in 0..3 {
				let index = i * 3 + j;
				let expected = if index < 10 { z[index] } else { Mersenne61::ZERO };
				assert_eq!(lanes[(i, j)], expected);
			}
		}
	}

	#[test]
	fn test_mask_exponent_runs_across_lanes() {
		let mut rng = StdRng::seed_from_u64(0);
		let t = 7;
		let k = 3;
		let x = repeat_with(|| Mersenne61::random(&mut rng))
			.take(t)
			.collect::<Vec<_>>();
		let y = repeat_with(|| Mersenne61::random(&mut rng))
			.take(t)
			.collect::<Vec<_>>();
		let eta = Mersenne61::random(&mut rng);

		let mut lanes = shape_operands(&x, &y, k);
		mask_lanes(&mut lanes, eta);

		let s = t.div_ceil(k);
		let eta_pows = powers(eta).take(k * s).collect::<Vec<_>>();
		for i in 0..k {
			for j in 0..s {
				let index = i * s + j;
				if index < t {
					assert_eq!(lanes[(i, 2 * j)], x[index] * eta_pows[index]);
					assert_eq!(lanes[(i, 2 * j + 1)], y[index] * eta_pows[index]);
				}
			}
		}
	}

	#[test]
	fn test_masked_output_claim_matches_flat_sum() {
		let mut rng = StdRng::seed_from_u64(1);
		let z = repeat_with(|| Mersenne61::random(&mut rng))
			.take(10)
			.collect::<Vec<_>>();
		let eta = Mersenne61::random(&mut rng);
		let lanes = shape_outputs(&z, 4);

		// Padding slots are zero, so the lane-major claim equals the plain
		// power-weighted sum over the original array.
		let expected = std::iter::zip(powers(eta), &z)
			.map(|(power, &z)| power * z)
			.sum::<Mersenne61>();
		assert_eq!(masked_output_claim(&lanes, eta), expected);
	}

	#[test]
	fn test_fold_lanes_weighted_combination() {
		let lanes = LaneMatrix::new(2, 2, elements(4)).unwrap();
		let basis = [Mersenne61::new(3), Mersenne61::new(5)];

		// New width 1: slot (i, 0) draws old column i.
		let folded = fold_lanes(&lanes, &basis, 1);
		assert_eq!(folded.rows(), 2);
		assert_eq!(folded.width(), 1);
		assert_eq!(folded[(0, 0)], basis[0] * lanes[(0, 0)] + basis[1] * lanes[(1, 0)]);
		assert_eq!(folded[(1, 0)], basis[0] * lanes[(0, 1)] + basis[1] * lanes[(1, 1)]);
	}

	#[test]
	fn test_fold_lanes_zero_fill_past_old_width() {
		// Old width 3, k = 2: new width 2, index 3 for lane 1 slot 1 runs
		// past the old lanes and must stay zero.
		let lanes = LaneMatrix::new(2, 3, elements(6)).unwrap();
		let basis = [Mersenne61::ONE, Mersenne61::ONE];
		let folded = fold_lanes(&lanes, &basis, 2);
		assert_eq!(folded[(1, 1)], Mersenne61::ZERO);
		assert_eq!(folded[(1, 0)], lanes[(0, 2)] + lanes[(1, 2)]);
	}
}
