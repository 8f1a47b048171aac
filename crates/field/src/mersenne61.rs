// Copyright 2025 Irreducible Inc.

use std::{
	fmt::{self, Display, Formatter},
	iter::{Product, Sum},
	ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use rand::Rng;

const MODULUS_BITS: u32 = 61;

/// An element of the prime field with modulus $p = 2^{61} - 1$.
///
/// The canonical representation is a `u64` in the half-open range $[0, p)$,
/// and every operation returns a canonical value. A value $\geq p$ escaping
/// this module is a defect in the arithmetic here, never a runtime condition
/// for callers to handle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Mersenne61(u64);

impl Mersenne61 {
	pub const MODULUS: u64 = (1 << MODULUS_BITS) - 1;
	pub const ZERO: Self = Self(0);
	pub const ONE: Self = Self(1);

	/// Wraps a canonical value.
	///
	/// ## Preconditions
	///
	/// * `val` must be in $[0, p)$
	pub const fn new(val: u64) -> Self {
		debug_assert!(val < Self::MODULUS);
		Self(val)
	}

	pub const fn val(self) -> u64 {
		self.0
	}

	/// Reduces any `u64` into canonical form by folding the bits at position
	/// 61 and above onto the low 61 bits, with a single conditional subtract.
	pub const fn reduce64(x: u64) -> Self {
		let folded = (x & Self::MODULUS) + (x >> MODULUS_BITS);
		if folded >= Self::MODULUS {
			Self(folded - Self::MODULUS)
		} else {
			Self(folded)
		}
	}

	/// Reduces a double-width value into canonical form.
	///
	/// Splits the input into 61-bit low/middle/high slices. Each slice weight
	/// is a power of $2^{61} \equiv 1 \pmod p$, so the slice sum is congruent
	/// to the input; it is at most $2^{62}$ and one more fold finishes the
	/// job. Sufficient for any product of two canonical values (122 bits).
	pub const fn reduce128(x: u128) -> Self {
		let low = (x as u64) & Self::MODULUS;
		let middle = ((x >> MODULUS_BITS) as u64) & Self::MODULUS;
		let high = (x >> (2 * MODULUS_BITS)) as u64;
		Self::reduce64(high + middle + low)
	}

	pub fn random(mut rng: impl Rng) -> Self {
		Self(rng.gen_range(0..Self::MODULUS))
	}

	pub fn is_zero(self) -> bool {
		self.0 == 0
	}

	#[must_use]
	pub fn square(self) -> Self {
		self * self
	}

	/// Exponentiation by squaring, variable time in the exponent.
	pub fn pow(self, exp: u64) -> Self {
		let mut res = Self::ONE;
		let mut base = self;
		let mut exp = exp;
		while exp != 0 {
			if exp & 1 != 0 {
				res *= base;
			}
			base = base.square();
			exp >>= 1;
		}
		res
	}

	/// Computes the multiplicative inverse, failing if the element is zero.
	///
	/// Extended Euclidean algorithm over $(a, p)$ tracking the Bézout
	/// coefficient of $a$ in signed arithmetic; the coefficient magnitude
	/// stays below $p$, so a single addition of $p$ normalizes it.
	pub fn invert(self) -> Option<Self> {
		if self.0 == 0 {
			return None;
		}

		let (mut old_r, mut r) = (self.0 as i128, Self::MODULUS as i128);
		let (mut old_s, mut s) = (1i128, 0i128);
		while r != 0 {
			let q = old_r / r;
			(old_r, r) = (r, old_r - q * r);
			(old_s, s) = (s, old_s - q * s);
		}
		// gcd(a, p) = 1 because p is prime and a is nonzero mod p
		debug_assert_eq!(old_r, 1);

		let normalized = if old_s < 0 {
			old_s + Self::MODULUS as i128
		} else {
			old_s
		};
		Some(Self(normalized as u64))
	}
}

impl From<u64> for Mersenne61 {
	fn from(val: u64) -> Self {
		Self::reduce64(val)
	}
}

impl Display for Mersenne61 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Add for Mersenne61 {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		// Both operands are below 2^61, so the sum cannot overflow.
		let sum = self.0 + rhs.0;
		Self(if sum >= Self::MODULUS {
			sum - Self::MODULUS
		} else {
			sum
		})
	}
}

impl Sub for Mersenne61 {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self(if self.0 >= rhs.0 {
			self.0 - rhs.0
		} else {
			self.0 + Self::MODULUS - rhs.0
		})
	}
}

impl Neg for Mersenne61 {
	type Output = Self;

	fn neg(self) -> Self {
		if self.0 == 0 {
			self
		} else {
			Self(Self::MODULUS - self.0)
		}
	}
}

impl Mul for Mersenne61 {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		let wide = self.0 as u128 * rhs.0 as u128;
		// The fold sum is below 2p, so one conditional subtract suffices.
		let folded = ((wide >> MODULUS_BITS) as u64) + ((wide as u64) & Self::MODULUS);
		Self(if folded >= Self::MODULUS {
			folded - Self::MODULUS
		} else {
			folded
		})
	}
}

impl AddAssign for Mersenne61 {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl SubAssign for Mersenne61 {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl MulAssign for Mersenne61 {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl Sum for Mersenne61 {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ZERO, |acc, x| acc + x)
	}
}

impl<'a> Sum<&'a Self> for Mersenne61 {
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.copied().sum()
	}
}

impl Product for Mersenne61 {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Self::ONE, |acc, x| acc * x)
	}
}

impl<'a> Product<&'a Self> for Mersenne61 {
	fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.copied().product()
	}
}
