// Copyright 2025 Irreducible Inc.

//! The FLIOP reduction for batched AND-gate / multiplication-triple checks.
//!
//! The statement is that T constraints $a_t b_t + c_t d_t = z_t$ all hold.
//! The party holding every operand proves; the party holding the left
//! operands $(a, c)$ and the party holding the right operands $(b, d)$
//! verify, with the claimed outputs $z$ additively shared between them.
//!
//! The operands are shaped into k lanes and the batched claim is bound into
//! one field identity by powers of a masking challenge η. Each round the
//! prover commits the $2k - 1$ evaluations of the implicit round polynomial
//! as one-time-padded share pairs, then all parties fold their lanes k-to-1
//! at a fresh challenge point. When the lane width collapses to one, a single
//! multiplication of the two fully folded operand scalars closes the check.
//!
//! Verification is two-sided: each verifier runs [`gen_vermsg`] over its own
//! proof share and operand view, sends the result to its peer, and accepts
//! only if [`verify_and_gates`] finds every round's share-combined sum-check
//! equation and the final product equation satisfied.

mod common;
mod error;
mod prove;
mod shape;
mod verify;

pub use common::{
	round_count, GateBatch, OperandShare, PartyRole, Proof, ProofShare, RoundShares, VerMsg,
};
pub use error::{Error, VerificationError};
pub use prove::prove_and_gates;
pub use shape::{shape_operands, shape_outputs};
pub use verify::{gen_vermsg, verify_and_gates};
