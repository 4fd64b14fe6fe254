use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::fixed_size::Uint;

impl<const BITS: usize> Uint<BITS> {
	/// Returns `self == other`.
	///
	/// Both numbers are canonical, so this is just a comparison of the limbs.
	#[inline]
	pub fn equal(&self, other: &Self) -> bool {
		self.limbs.as_slice() == other.limbs.as_slice()
	}

	/// Returns `self < other`.
	///
	/// A number with fewer limbs is smaller. Numbers with the same number of limbs are compared
	/// starting from the most significant limb.
	#[inline]
	pub fn less_than(&self, other: &Self) -> bool {
		self.limbs.cmp_from_end(&other.limbs) == Ordering::Less
	}
}

impl<const BITS: usize> PartialEq for Uint<BITS> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.equal(other)
	}
}

impl<const BITS: usize> Eq for Uint<BITS> {}

impl<const BITS: usize> Ord for Uint<BITS> {
	fn cmp(&self, other: &Self) -> Ordering {
		if self.less_than(other) {
			Ordering::Less
		} else if self.equal(other) {
			Ordering::Equal
		} else {
			Ordering::Greater
		}
	}
}

impl<const BITS: usize> PartialOrd for Uint<BITS> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<const BITS: usize> Hash for Uint<BITS> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.limbs.hash(state);
	}
}

//--------------------------------------------------------------------------------------------------
// u64

impl<const BITS: usize> PartialEq<u64> for Uint<BITS> {
	fn eq(&self, other: &u64) -> bool {
		self.equal(&Self::from_u64(*other))
	}
}

impl<const BITS: usize> PartialOrd<u64> for Uint<BITS> {
	fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
		Some(self.cmp(&Self::from_u64(*other)))
	}
}

impl<const BITS: usize> PartialEq<Uint<BITS>> for u64 {
	fn eq(&self, other: &Uint<BITS>) -> bool {
		other == self
	}
}

impl<const BITS: usize> PartialOrd<Uint<BITS>> for u64 {
	fn partial_cmp(&self, other: &Uint<BITS>) -> Option<Ordering> {
		Some(Uint::<BITS>::from_u64(*self).cmp(other))
	}
}

//--------------------------------------------------------------------------------------------------
// decimal strings

// The string is parsed at the width of the number, so it's truncated the same way.

impl<const BITS: usize> PartialEq<&str> for Uint<BITS> {
	#[track_caller]
	fn eq(&self, other: &&str) -> bool {
		self.equal(&Self::parse_operand(other))
	}
}

impl<const BITS: usize> PartialOrd<&str> for Uint<BITS> {
	#[track_caller]
	fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
		Some(self.cmp(&Self::parse_operand(other)))
	}
}
