use log::trace;

use crate::error::{Error, assert};
use crate::fixed_size::Uint;
use crate::limb::Limb;
use crate::limb_buf::LimbBuf;

/// Operands shorter than this (both of them) are divided with the restoring algorithm.
pub const BINARY_SEARCH_THRESHOLD: usize = 10;

impl<const BITS: usize> Uint<BITS> {
	/// Returns `floor(self / other)`.
	///
	/// Fails with `ErrorKind::DivisionByZero` if `other` is zero.
	pub fn checked_div(&self, other: &Self) -> Result<Self, Error> {
		assert(!other.is_zero(), || Error::new_division_by_zero("Uint::div: division by zero"))?;

		if self.is_zero() || *self < *other {
			return Ok(Self::zero());
		}

		let (n, m) = (self.limb_count(), other.limb_count());
		if n < BINARY_SEARCH_THRESHOLD && m < BINARY_SEARCH_THRESHOLD {
			trace!("div: restoring, {} / {} limbs", n, m);
			Ok(self.div_restoring(other))
		} else {
			trace!("div: binary search, {} / {} limbs", n, m);
			Ok(self.div_binary_search(other))
		}
	}

	/// Restoring long division.
	///
	/// For every bit position from the top, try to subtract the divisor shifted to that position
	/// from the remainder. If it can be subtracted, the quotient has the bit set.
	///
	/// Preconditions:
	/// - other != 0
	pub fn div_restoring(&self, other: &Self) -> Self {
		debug_assert!(!other.is_zero());

		let divisor_width = other.bit_width();
		let mut remainder = self.clone();
		let mut quotient = LimbBuf::zeroed(self.limb_count());

		for i in (0..self.limb_count()).rev() {
			let divisor = other.shl_limbs(i);
			for j in (0..Limb::BITS).rev() {
				// The shifted divisor is longer than the remainder. This also skips the positions
				// where it wouldn't fit into the width.
				if divisor_width + i * Limb::BITS + j > remainder.bit_width() {
					continue;
				}

				let shifted = divisor.shl_inside_limb(j);
				if remainder >= shifted {
					remainder = remainder.wrapping_sub(&shifted);
					quotient[i] |= Limb::ONE << j;
				}
			}
		}

		Self::from_raw(quotient)
	}

	/// Binary search for the largest `q` such that `q * other <= self`.
	///
	/// Every step costs one multiplication and one comparison. A product that overflows the
	/// width is bigger than `self`.
	///
	/// Preconditions:
	/// - other != 0
	/// - self >= other
	pub fn div_binary_search(&self, other: &Self) -> Self {
		debug_assert!(!other.is_zero());
		debug_assert!(*self >= *other);

		// `mid + 1` below could wrap around only for `other == 1`
		if other.is_one() {
			return self.clone();
		}

		let mut low = Self::one();
		let mut high = self.clone();
		while low <= high {
			// (low + high) / 2 without overflowing the width
			let mut mid = low.div_by_two().wrapping_add(&high.div_by_two());
			if low.is_odd() && high.is_odd() {
				mid = mid.wrapping_add(&Self::one());
			}

			let (product, overflow) = mid.overflowing_mul(other);
			if overflow || product > *self {
				high = mid.wrapping_sub(&Self::one());
			} else {
				low = mid.wrapping_add(&Self::one());
			}
		}
		high
	}
}
