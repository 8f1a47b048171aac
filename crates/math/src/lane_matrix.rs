// Copyright 2025 Irreducible Inc.

use std::ops::{Index, IndexMut};

use fliop_field::Mersenne61;
use fliop_utils::bail;

use super::error::Error;

/// A dense row-major matrix of field elements.
///
/// Each row is one compression lane of the reduction protocol; the width
/// shrinks round by round as lanes are folded against a challenge basis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneMatrix {
	rows: usize,
	width: usize,
	elements: Vec<Mersenne61>,
}

impl LaneMatrix {
	pub fn zeros(rows: usize, width: usize) -> Self {
		Self {
			rows,
			width,
			elements: vec![Mersenne61::ZERO; rows * width],
		}
	}

	pub fn new(rows: usize, width: usize, elements: Vec<Mersenne61>) -> Result<Self, Error> {
		if elements.len() != rows * width {
			bail!(Error::IncorrectArgumentLength {
				arg: "elements".into(),
				expected: rows * width,
			});
		}
		Ok(Self {
			rows,
			width,
			elements,
		})
	}

	pub fn rows(&self) -> usize {
		self.rows
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn row(&self, i: usize) -> &[Mersenne61] {
		&self.elements[i * self.width..(i + 1) * self.width]
	}

	pub fn row_mut(&mut self, i: usize) -> &mut [Mersenne61] {
		&mut self.elements[i * self.width..(i + 1) * self.width]
	}

	/// Iterate the rows as slices.
	pub fn iter_rows(&self) -> impl Iterator<Item = &[Mersenne61]> {
		self.elements.chunks(self.width)
	}
}

impl Index<(usize, usize)> for LaneMatrix {
	type Output = Mersenne61;

	fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
		assert!(i < self.rows, "row index out of range");
		assert!(j < self.width, "column index out of range");
		&self.elements[i * self.width + j]
	}
}

impl IndexMut<(usize, usize)> for LaneMatrix {
	fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
		assert!(i < self.rows, "row index out of range");
		assert!(j < self.width, "column index out of range");
		&mut self.elements[i * self.width + j]
	}
}
