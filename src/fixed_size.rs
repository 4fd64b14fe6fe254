use crate::blocks;
use crate::limb::{Limb, Value};
use crate::limb_buf::LimbBuf;
use crate::ll;

/// Unsigned integer modulo `2 ** BITS`.
///
/// All arithmetic wraps around: results that don't fit into `BITS` bits are truncated.
///
/// The limbs are always kept in canonical form:
/// - there are at most `LIMBS` limbs
/// - if there are exactly `LIMBS` limbs, the bits of the top limb above the width are zero
/// - the most significant limb is non-zero, so zero has no limbs at all
///
/// Thanks to this, two numbers are equal iff their limbs are equal, and a number with fewer
/// limbs is always smaller.
#[derive(Clone, Default)]
pub struct Uint<const BITS: usize> {
	pub(crate) limbs: LimbBuf,
}

impl<const BITS: usize> Uint<BITS> {
	const VALID: () = assert!(BITS != 0, "Uint<0> is not a valid width");

	pub const BITS: usize = BITS;

	/// Maximum number of limbs, i.e., `ceil(BITS / Limb::BITS)`.
	pub const LIMBS: usize = BITS.div_ceil(Limb::BITS);

	/// Mask for the top limb. The full mask if `BITS` is a multiple of `Limb::BITS`.
	pub(crate) const TOP_MASK: Limb = Limb::low_mask(BITS % Limb::BITS);

	#[inline]
	pub fn zero() -> Self {
		let () = Self::VALID;
		Self { limbs: LimbBuf::new() }
	}

	pub fn one() -> Self {
		Self::from_raw(LimbBuf::from_slice(&[Limb::ONE]))
	}

	/// Returns `2 ** BITS - 1`.
	///
	/// Named like `Bounded::max_value`. `a.max(b)` is `Ord::max`.
	pub fn max_value() -> Self {
		Self::from_raw(ll::complement(&[], Self::LIMBS, Self::TOP_MASK))
	}

	pub fn from_u64(value: u64) -> Self {
		let low = Limb(value as Value);
		let high = Limb((value >> Limb::BITS) as Value);
		Self::from_raw(LimbBuf::from_slice(&[low, high]))
	}

	/// Builds a number from little-endian 32-bit limbs. The value is truncated to the width.
	pub fn from_limbs(limbs: &[u32]) -> Self {
		Self::from_raw(limbs.iter().copied().map(Limb).collect())
	}

	/// Takes ownership of a raw limb sequence produced by an algorithm and canonicalizes it.
	#[inline]
	pub(crate) fn from_raw(limbs: LimbBuf) -> Self {
		let mut r = Self { limbs };
		r.fix();
		r
	}

	/// Truncates the number to `BITS` bits and removes zero limbs from the top.
	///
	/// Every operation calls this on its raw result. It is the only place where the canonical
	/// form is enforced.
	pub(crate) fn fix(&mut self) {
		let () = Self::VALID;

		// Whole limbs above the width
		self.limbs.truncate(Self::LIMBS);

		// Bits of the top limb above the width
		if self.limbs.len() == Self::LIMBS {
			if let Some(top) = self.limbs.back_mut() {
				*top &= Self::TOP_MASK;
			}
		}

		self.limbs.trim();
	}

	#[inline]
	pub fn as_limbs(&self) -> &[Limb] {
		&self.limbs
	}

	/// Returns the little-endian 32-bit limbs of the number.
	pub fn to_limbs(&self) -> Vec<u32> {
		self.limbs.iter().map(|limb| limb.0).collect()
	}

	/// Number of limbs in canonical form. Zero for the number zero.
	#[inline]
	pub fn limb_count(&self) -> usize {
		self.limbs.len()
	}

	#[inline]
	pub fn is_zero(&self) -> bool {
		self.limbs.is_empty()
	}

	#[inline]
	pub fn is_one(&self) -> bool {
		self.limbs.as_slice() == [Limb::ONE]
	}

	#[inline]
	pub fn is_odd(&self) -> bool {
		self.limbs.front().is_some_and(|low| low.bit(0))
	}

	/// Returns the number of bits needed to store the value. Zero for the number zero.
	pub fn bit_width(&self) -> usize {
		blocks::bit_width(&self.limbs)
	}

	/// Returns bit `i` of the number. Bits above the width are zero.
	pub fn bit(&self, i: usize) -> bool {
		self.limbs.get(i / Limb::BITS).is_some_and(|limb| limb.bit(i % Limb::BITS))
	}

	pub fn to_u64(&self) -> Option<u64> {
		match *self.limbs.as_slice() {
			[] => Some(0),
			[low] => Some(low.as_double()),
			[low, high] => Some(Limb::make_double(low, high)),
			_ => None,
		}
	}

	//----------------------------------------------------------------------------------------------
	// add, sub

	/// Returns `(self + other) % 2**BITS`.
	pub fn wrapping_add(&self, other: &Self) -> Self {
		Self::from_raw(ll::add(&self.limbs, &other.limbs, Self::LIMBS))
	}

	/// Returns `(self - other) % 2**BITS`.
	///
	/// If `self < other`, the result is `self + (2**BITS - other)`, i.e., we add the two's
	/// complement of `other`.
	pub fn wrapping_sub(&self, other: &Self) -> Self {
		if *self >= *other {
			Self::from_raw(ll::sub(&self.limbs, &other.limbs))
		} else {
			let complement = Self::from_raw(ll::complement(&other.limbs, Self::LIMBS, Self::TOP_MASK));
			self.wrapping_add(&complement.wrapping_add(&Self::one()))
		}
	}

	//----------------------------------------------------------------------------------------------
	// shifts

	/// Returns `(self * 2**count) % 2**BITS`.
	pub fn shl(&self, count: usize) -> Self {
		self.shl_limbs(count / Limb::BITS).shl_inside_limb(count % Limb::BITS)
	}

	/// Returns `(self * (2**Limb::BITS)**count) % 2**BITS`.
	pub fn shl_limbs(&self, count: usize) -> Self {
		if count >= Self::LIMBS {
			return Self::zero();
		}
		let mut limbs = self.limbs.clone();
		limbs.prepend_zeros(count);
		Self::from_raw(limbs)
	}

	/// Returns `(self * 2**count) % 2**BITS`.
	///
	/// Preconditions:
	/// - count < Limb::BITS
	pub fn shl_inside_limb(&self, count: usize) -> Self {
		debug_assert!(count < Limb::BITS);
		if count == 0 {
			return self.clone();
		}
		Self::from_raw(ll::shl(&self.limbs, count))
	}

	/// Returns `self / 2`.
	pub fn div_by_two(&self) -> Self {
		Self::from_raw(ll::shr_1(&self.limbs))
	}
}

impl<const BITS: usize> From<u64> for Uint<BITS> {
	fn from(value: u64) -> Self {
		Self::from_u64(value)
	}
}

impl<const BITS: usize> From<u32> for Uint<BITS> {
	fn from(value: u32) -> Self {
		Self::from_u64(value as u64)
	}
}

impl<const BITS: usize> std::fmt::Debug for Uint<BITS> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Uint<{}>({})", BITS, self)
	}
}
