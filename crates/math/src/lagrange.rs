// Copyright 2025 Irreducible Inc.

use fliop_field::Mersenne61;
use fliop_utils::bail;

use super::error::Error;

/// The field representation of the signed difference `a - b` of two small
/// sample indices.
fn index_diff(a: usize, b: usize) -> Mersenne61 {
	if a >= b {
		Mersenne61::new((a - b) as u64)
	} else {
		-Mersenne61::new((b - a) as u64)
	}
}

/// Lagrange coefficients extending a degree-$(k-1)$ polynomial known on the
/// points $\{0, \ldots, k-1\}$ to the points $\{k, \ldots, 2k-2\}$.
///
/// Row $i$ holds the $k$ coefficients for the target point $k + i$: dotting
/// row $i$ with the $k$ sample values yields the implicit polynomial's
/// evaluation at $k + i$. Computed once per protocol run from $k$ alone and
/// immutable thereafter.
#[derive(Debug, Clone)]
pub struct ExtrapolationTable {
	k: usize,
	rows: Vec<Vec<Mersenne61>>,
}

impl ExtrapolationTable {
	pub fn new(k: usize) -> Result<Self, Error> {
		if k < 2 {
			bail!(Error::DomainSizeTooSmall);
		}

		let rows = (0..k - 1)
			.map(|i| {
				(0..k)
					.map(|j| {
						(0..k)
							.filter(|&l| l != j)
							.map(|l| {
								let numerator = Mersenne61::new((i + k - l) as u64);
								let denominator = index_diff(j, l)
									.invert()
									.ok_or(Error::DuplicateDomainPoint)?;
								Ok(numerator * denominator)
							})
							.product::<Result<Mersenne61, Error>>()
					})
					.collect::<Result<Vec<_>, _>>()
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self { k, rows })
	}

	pub fn k(&self) -> usize {
		self.k
	}

	/// The coefficient row for target point `k + i`.
	pub fn row(&self, i: usize) -> &[Mersenne61] {
		&self.rows[i]
	}
}

/// Lagrange coefficients for evaluating at an arbitrary point.
///
/// Returns the length-`n` vector whose entry $i$ is
/// $\prod_{j \neq i} \frac{r - j}{i - j}$; dotting it with evaluations of a
/// degree-$(n-1)$ polynomial on $\{0, \ldots, n-1\}$ yields the polynomial's
/// value at `r`. For `r` equal to a sample index $m$ the vector is the
/// Kronecker delta at $m$.
pub fn lagrange_coeffs(n: usize, r: Mersenne61) -> Result<Vec<Mersenne61>, Error> {
	if n < 2 {
		bail!(Error::DomainSizeTooSmall);
	}

	(0..n)
		.map(|i| {
			(0..n)
				.filter(|&j| j != i)
				.map(|j| {
					let numerator = r - Mersenne61::new(j as u64);
					let denominator = index_diff(i, j)
						.invert()
						.ok_or(Error::DuplicateDomainPoint)?;
					Ok(numerator * denominator)
				})
				.product::<Result<Mersenne61, Error>>()
		})
		.collect()
}
