// Copyright 2025 Irreducible Inc.

use fliop_field::Mersenne61;
use fliop_utils::{bail, ensure};
use itertools::izip;

use super::error::Error;

/// The prover's view of a batch of T constraints $a_t b_t + c_t d_t = z_t$.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateBatch {
	pub a: Vec<Mersenne61>,
	pub b: Vec<Mersenne61>,
	pub c: Vec<Mersenne61>,
	pub d: Vec<Mersenne61>,
}

impl GateBatch {
	pub fn len(&self) -> usize {
		self.a.len()
	}

	pub fn is_empty(&self) -> bool {
		self.a.is_empty()
	}

	pub(super) fn validate(&self) -> Result<(), Error> {
		ensure!(
			self.b.len() == self.a.len()
				&& self.c.len() == self.a.len()
				&& self.d.len() == self.a.len(),
			Error::OperandLengthMismatch
		);
		ensure!(!self.a.is_empty(), Error::EmptyBatch);
		Ok(())
	}

	/// The outputs the batch satisfies, $z_t = a_t b_t + c_t d_t$.
	pub fn outputs(&self) -> Vec<Mersenne61> {
		izip!(&self.a, &self.b, &self.c, &self.d)
			.map(|(&a, &b, &c, &d)| a * b + c * d)
			.collect()
	}
}

/// One verifier's operand view: length-T arrays paired per instance.
///
/// The left verifier holds $(a, c)$ and the right verifier holds $(b, d)$.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandShare {
	pub x: Vec<Mersenne61>,
	pub y: Vec<Mersenne61>,
}

/// One round of the proof: the $2k - 1$ round polynomial evaluations, each
/// one-time-padded into a complementary share pair with
/// `ss1[i] + ss2[i] == P(i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundShares {
	pub ss1: Vec<Mersenne61>,
	pub ss2: Vec<Mersenne61>,
}

/// The prover's full output, one [`RoundShares`] per reduction round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
	pub rounds: Vec<RoundShares>,
}

impl Proof {
	pub fn n_rounds(&self) -> usize {
		self.rounds.len()
	}

	/// Splits the proof into the two per-verifier transcripts; the first goes
	/// to the left verifier, the second to the right.
	pub fn into_shares(self) -> (ProofShare, ProofShare) {
		let (ss1, ss2) = self
			.rounds
			.into_iter()
			.map(|round| (round.ss1, round.ss2))
			.unzip();
		(ProofShare { rounds: ss1 }, ProofShare { rounds: ss2 })
	}
}

/// One verifier's share of the proof, a length-(2k−1) row per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofShare {
	pub rounds: Vec<Vec<Mersenne61>>,
}

/// One verifier's contribution to the combined check, produced by
/// [`super::gen_vermsg`].
///
/// `p_eval_ksum_ss[i]` is the party's share of the round-i polynomial summed
/// over the k native points. `p_eval_r_ss` carries the matching claims: the
/// leading entry is the party's share of the η-batched output identity, then
/// one entry per non-terminal round holding the share of that round's
/// polynomial evaluated at its challenge. `final_input_ss` is the party's
/// fully folded operand scalar and `final_result_ss` its share of the
/// terminal round's claimed evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerMsg {
	pub p_eval_ksum_ss: Vec<Mersenne61>,
	pub p_eval_r_ss: Vec<Mersenne61>,
	pub final_input_ss: Mersenne61,
	pub final_result_ss: Mersenne61,
}

/// The fixed 3-party role assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRole {
	Prover,
	/// Holds the left operands $(a, c)$ and masks them with η.
	VerifierLeft,
	/// Holds the right operands $(b, d)$, unmasked.
	VerifierRight,
}

impl PartyRole {
	/// Computes the role of `party_id` when `prover_id` proves.
	///
	/// The party satisfying $(\text{party} + 1 - \text{prover}) \equiv 0
	/// \pmod 3$ takes the left verifier role; the remaining party the right.
	pub fn from_ids(prover_id: usize, party_id: usize) -> Result<Self, Error> {
		if prover_id >= 3 || party_id >= 3 {
			bail!(Error::PartyIndexOutOfRange);
		}
		let role = if party_id == prover_id {
			Self::Prover
		} else if (party_id + 4 - prover_id) % 3 == 0 {
			Self::VerifierLeft
		} else {
			Self::VerifierRight
		};
		Ok(role)
	}

	pub fn masks_with_eta(self) -> bool {
		self == Self::VerifierLeft
	}
}

/// The number of reduction rounds for a batch of `t` instances folded by `k`.
///
/// The doubled lane width starts at $2 \lceil t / k \rceil$ and shrinks by
/// $w \leftarrow \lceil w / k \rceil$ after every round until it reaches one;
/// the terminal round emits shares without folding.
pub fn round_count(t: usize, k: usize) -> usize {
	debug_assert!(t >= 1);
	debug_assert!(k >= 2);
	let mut width = 2 * t.div_ceil(k);
	let mut rounds = 1;
	while width > 1 {
		width = width.div_ceil(k);
		rounds += 1;
	}
	rounds
}
