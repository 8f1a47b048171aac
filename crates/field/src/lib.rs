// Copyright 2025 Irreducible Inc.

//! Exact arithmetic modulo the Mersenne prime $p = 2^{61} - 1$.
//!
//! The reduction routines exploit the Mersenne shape of the modulus: any
//! 61-bit slice of an integer has weight $2^{61 k} \equiv 1 \pmod p$, so wide
//! intermediate values reduce by summing their slices. [`util::inner_product`]
//! builds on this to defer reduction across batches of double-width products.

mod mersenne61;
pub mod util;

pub use mersenne61::Mersenne61;
