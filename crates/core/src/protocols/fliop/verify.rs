// Copyright 2025 Irreducible Inc.

use std::iter;

use fliop_field::{util::inner_product, Mersenne61};
use fliop_math::lagrange_coeffs;
use fliop_utils::bail;
use tracing::instrument;

use super::{
	common::{round_count, OperandShare, PartyRole, ProofShare, VerMsg},
	error::{Error, VerificationError},
	shape::{fold_lanes, mask_lanes, masked_output_claim, shape_operands, shape_outputs},
};
use crate::challenger::CanSample;

/// Produces this party's verification message for a proof share.
///
/// The party mirrors the prover's transcript on its own view: the round-0
/// η-batched output claim, per round the share of the native evaluation sum
/// and of the polynomial's value at the round challenge, and the lane folds.
/// The terminal round instead records the fully folded operand scalar and
/// the share of the terminal evaluation for the closing product check.
///
/// The challenger must be backed by the same stream the prover consumed.
#[instrument(skip_all, name = "fliop::gen_vermsg", level = "debug")]
pub fn gen_vermsg(
	proof_share: &ProofShare,
	operands: &OperandShare,
	outputs_share: &[Mersenne61],
	role: PartyRole,
	k: usize,
	challenger: &mut impl CanSample,
) -> Result<VerMsg, Error> {
	if k < 2 {
		bail!(Error::CompressionFactorTooSmall);
	}
	if role == PartyRole::Prover {
		bail!(Error::ProverCannotVerify);
	}
	if operands.x.len() != operands.y.len() || operands.x.len() != outputs_share.len() {
		bail!(Error::OperandLengthMismatch);
	}
	let t = operands.x.len();
	if t == 0 {
		bail!(Error::EmptyBatch);
	}

	let expected_rounds = round_count(t, k);
	if proof_share.rounds.len() != expected_rounds {
		bail!(Error::ProofShapeRoundCount {
			expected: expected_rounds,
			actual: proof_share.rounds.len(),
		});
	}
	for (round, row) in proof_share.rounds.iter().enumerate() {
		if row.len() != 2 * k - 1 {
			bail!(Error::ProofShapeRowLength { round });
		}
	}

	let eta = challenger.sample();
	let mut lanes = shape_operands(&operands.x, &operands.y, k);
	if role.masks_with_eta() {
		mask_lanes(&mut lanes, eta);
	}
	let output_lanes = shape_outputs(outputs_share, k);

	let mut p_eval_ksum_ss = Vec::with_capacity(expected_rounds);
	let mut p_eval_r_ss = Vec::with_capacity(expected_rounds);
	p_eval_r_ss.push(masked_output_claim(&output_lanes, eta));

	let mut width = lanes.width();
	let mut final_input_ss = Mersenne61::ZERO;
	let mut final_result_ss = Mersenne61::ZERO;
	for row in &proof_share.rounds {
		p_eval_ksum_ss.push(row[..k].iter().copied().sum());

		let r = challenger.sample();
		let eval_basis = lagrange_coeffs(2 * k - 1, r)?;
		let eval = inner_product(&eval_basis, row);
		let fold_basis = lagrange_coeffs(k, r)?;

		if width == 1 {
			// Terminal round: no fold remains, the k single lane values
			// collapse to one scalar for the product check.
			let singles = (0..k).map(|l| lanes[(l, 0)]).collect::<Vec<_>>();
			final_input_ss = inner_product(&fold_basis, &singles);
			final_result_ss = eval;
		} else {
			p_eval_r_ss.push(eval);
			let new_width = width.div_ceil(k);
			lanes = fold_lanes(&lanes, &fold_basis, new_width);
			width = new_width;
		}
	}

	Ok(VerMsg {
		p_eval_ksum_ss,
		p_eval_r_ss,
		final_input_ss,
		final_result_ss,
	})
}

/// Combines this party's view with the peer's verification message and
/// accepts only if every check passes.
///
/// Per round, the share-combined sum of the k native evaluations must equal
/// the share-combined running claim (the η-batched output identity for round
/// 0, the previous round's evaluation at its challenge after that). The
/// closing check multiplies the two fully folded operand scalars and
/// compares against the combined terminal evaluation.
#[instrument(skip_all, name = "fliop::verify_and_gates", level = "debug")]
pub fn verify_and_gates(
	peer_vermsg: &VerMsg,
	proof_share: &ProofShare,
	operands: &OperandShare,
	outputs_share: &[Mersenne61],
	role: PartyRole,
	k: usize,
	challenger: &mut impl CanSample,
) -> Result<(), Error> {
	let own = gen_vermsg(proof_share, operands, outputs_share, role, k, challenger)?;
	if peer_vermsg.p_eval_ksum_ss.len() != own.p_eval_ksum_ss.len()
		|| peer_vermsg.p_eval_r_ss.len() != own.p_eval_r_ss.len()
	{
		bail!(Error::VerMsgShapeMismatch);
	}

	let ksums = iter::zip(&own.p_eval_ksum_ss, &peer_vermsg.p_eval_ksum_ss);
	let claims = iter::zip(&own.p_eval_r_ss, &peer_vermsg.p_eval_r_ss);
	for (round, ((&ksum_own, &ksum_peer), (&claim_own, &claim_peer))) in
		iter::zip(ksums, claims).enumerate()
	{
		if ksum_own + ksum_peer != claim_own + claim_peer {
			bail!(VerificationError::RoundSumMismatch { round });
		}
	}

	let final_input = own.final_input_ss * peer_vermsg.final_input_ss;
	if final_input != own.final_result_ss + peer_vermsg.final_result_ss {
		bail!(VerificationError::FinalProductMismatch);
	}
	Ok(())
}
