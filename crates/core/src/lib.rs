// Copyright 2025 Irreducible Inc.

//! The interactive reduction protocol for batched multiplication checks.
//!
//! A prover holding the operands of T fan-in-2 multiplication constraints
//! $a_t b_t + c_t d_t = z_t$ convinces two verifiers, who hold complementary
//! views of those operands, that all T constraints hold. The claim is folded
//! by a compression factor k each round, so the interaction finishes in
//! $O(\log_k T)$ rounds instead of $O(T)$.

pub mod challenger;
pub mod protocols;
