// Copyright 2025 Irreducible Inc.

//! Lagrange interpolation machinery over consecutive integer sample points,
//! plus the lane matrix container the reduction protocol folds each round.

mod error;
mod lagrange;
mod lane_matrix;

pub use error::Error;
pub use lagrange::{lagrange_coeffs, ExtrapolationTable};
pub use lane_matrix::LaneMatrix;
