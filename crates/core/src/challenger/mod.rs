// Copyright 2025 Irreducible Inc.

//! Challenge sampling for the interactive protocol.
//!
//! Every party consumes challenges from a logically shared ordered stream,
//! one masking scalar first and then one scalar per round. In deployment the
//! stream comes from a coin-tossing sub-protocol or a transcript hash; here
//! it is abstracted behind [`CanSample`] so tests can hand every party a
//! clone of the same seeded generator.

use std::iter::repeat_with;

use fliop_field::Mersenne61;
use rand::RngCore;

/// A source of verifier challenges.
///
/// Divergence between two parties' streams breaks soundness silently, so a
/// protocol run must give all parties implementors backed by the same stream.
pub trait CanSample {
	fn sample(&mut self) -> Mersenne61;

	fn sample_vec(&mut self, n: usize) -> Vec<Mersenne61> {
		repeat_with(|| self.sample()).take(n).collect()
	}
}

/// Draws challenges from any random number generator.
#[derive(Debug, Clone)]
pub struct RngChallenger<R> {
	rng: R,
}

impl<R: RngCore> RngChallenger<R> {
	pub fn new(rng: R) -> Self {
		Self { rng }
	}
}

impl<R: RngCore> CanSample for RngChallenger<R> {
	fn sample(&mut self) -> Mersenne61 {
		Mersenne61::random(&mut self.rng)
	}
}
