use log::trace;

use crate::blocks;
use crate::fixed_size::Uint;
use crate::ll;

/// Operands with more limbs than this (both of them) are multiplied with Karatsuba.
pub const KARATSUBA_THRESHOLD: usize = 20;

impl<const BITS: usize> Uint<BITS> {
	/// Returns `(self * other) % 2**BITS`.
	pub fn wrapping_mul(&self, other: &Self) -> Self {
		let (n, m) = (self.limb_count(), other.limb_count());
		if n > KARATSUBA_THRESHOLD && m > KARATSUBA_THRESHOLD {
			trace!("mul: karatsuba, {} x {} limbs", n, m);
			self.mul_karatsuba(other)
		} else {
			trace!("mul: schoolbook, {} x {} limbs", n, m);
			self.mul_schoolbook(other)
		}
	}

	/// Schoolbook multiplication. Limbs of the product above the width are not computed.
	pub fn mul_schoolbook(&self, other: &Self) -> Self {
		Self::from_raw(ll::mul_schoolbook(&self.limbs, &other.limbs, Self::LIMBS))
	}

	/// Karatsuba multiplication.
	///
	/// Both operands are split at the same limb position into a high and a low half:
	///     self = A * X + B
	///     other = C * X + D
	/// Where:
	///     X = (2**Limb::BITS)**split
	///
	/// Then:
	///     self * other = AC * X**2 + ((A + B)(C + D) - AC - BD) * X + BD
	///
	/// All of this holds modulo `2**BITS`, so the intermediate results can be truncated.
	pub fn mul_karatsuba(&self, other: &Self) -> Self {
		if self.limb_count() < KARATSUBA_THRESHOLD || other.limb_count() < KARATSUBA_THRESHOLD {
			return self.mul_schoolbook(other);
		}

		let split = self.limb_count().max(other.limb_count()) / 2;
		let (B, A) = self.limbs.split_at(split);
		let (D, C) = other.limbs.split_at(split);
		let (A, B) = (Self::from_raw(A), Self::from_raw(B));
		let (C, D) = (Self::from_raw(C), Self::from_raw(D));

		let AC = A.mul_karatsuba(&C);
		let BD = B.mul_karatsuba(&D);
		let ABCD = A.wrapping_add(&B).mul_karatsuba(&C.wrapping_add(&D));

		let middle = ABCD.wrapping_sub(&AC).wrapping_sub(&BD);
		AC.shl_limbs(2 * split).wrapping_add(&middle.shl_limbs(split)).wrapping_add(&BD)
	}

	/// Returns:
	///     (product, overflow)
	/// Where:
	///     product = (self * other) % 2**BITS
	///     overflow = (self * other) >= 2**BITS
	pub fn overflowing_mul(&self, other: &Self) -> (Self, bool) {
		let product = self.wrapping_mul(other);

		// The product has either `width` or `width - 1` bits.
		let width = self.bit_width() + other.bit_width();
		let overflow = if width <= BITS {
			false
		} else if width > BITS + 1 {
			true
		} else {
			let full = ll::mul_schoolbook(&self.limbs, &other.limbs, usize::MAX);
			blocks::bit_width(&full[..blocks::trim(&full)]) > BITS
		};

		(product, overflow)
	}
}
