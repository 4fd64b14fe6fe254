use smallvec::SmallVec;
use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

use crate::blocks;
use crate::limb::Limb;

pub const INLINE_LIMBS: usize = 4;

/// Owned sequence of limbs, least significant first.
///
/// Numbers up to `INLINE_LIMBS` limbs are stored inline, larger ones in a single heap buffer.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct LimbBuf {
	limbs: SmallVec<[Limb; INLINE_LIMBS]>,
}

impl LimbBuf {
	#[inline]
	pub fn new() -> Self {
		Self { limbs: SmallVec::new() }
	}

	/// Returns a buffer with `n` zero limbs.
	#[inline]
	pub fn zeroed(n: usize) -> Self {
		Self { limbs: SmallVec::from_elem(Limb::ZERO, n) }
	}

	#[inline]
	pub fn from_slice(a: &[Limb]) -> Self {
		Self { limbs: SmallVec::from_slice(a) }
	}

	#[inline]
	pub fn as_slice(&self) -> &[Limb] {
		self.limbs.as_slice()
	}

	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [Limb] {
		self.limbs.as_mut_slice()
	}

	#[inline]
	pub fn front(&self) -> Option<Limb> {
		self.limbs.first().copied()
	}

	#[inline]
	pub fn back(&self) -> Option<Limb> {
		self.limbs.last().copied()
	}

	#[inline]
	pub fn back_mut(&mut self) -> Option<&mut Limb> {
		self.limbs.last_mut()
	}

	#[inline]
	pub fn push_back(&mut self, limb: Limb) {
		self.limbs.push(limb);
	}

	#[inline]
	pub fn pop_back(&mut self) -> Option<Limb> {
		self.limbs.pop()
	}

	#[inline]
	pub fn push_front(&mut self, limb: Limb) {
		self.limbs.insert(0, limb);
	}

	pub fn pop_front(&mut self) -> Option<Limb> {
		if self.limbs.is_empty() { None } else { Some(self.limbs.remove(0)) }
	}

	/// Inserts `n` zero limbs at the least significant end,
	/// i.e., multiplies the number by `(2 ** Limb::BITS) ** n`.
	pub fn prepend_zeros(&mut self, n: usize) {
		if n > 0 && !self.limbs.is_empty() {
			self.limbs.insert_many(0, std::iter::repeat_n(Limb::ZERO, n));
		}
	}

	#[inline]
	pub fn truncate(&mut self, len: usize) {
		self.limbs.truncate(len);
	}

	/// Drops zero limbs from the most significant end.
	#[inline]
	pub fn trim(&mut self) {
		let len = blocks::trim(&self.limbs);
		self.limbs.truncate(len);
	}

	/// Splits the sequence at `mid` into `(low, high)`, where `low` holds the limbs `0..<mid`.
	///
	/// If `mid` is past the end, `high` is empty.
	pub fn split_at(&self, mid: usize) -> (LimbBuf, LimbBuf) {
		let mid = mid.min(self.limbs.len());
		let (low, high) = self.limbs.split_at(mid);
		(Self::from_slice(low), Self::from_slice(high))
	}

	/// Compares the sequences by length first and then limb by limb, starting from the end.
	///
	/// This is the numeric order only if neither sequence has zero limbs at the end.
	pub fn cmp_from_end(&self, other: &Self) -> Ordering {
		self.limbs
			.len()
			.cmp(&other.limbs.len())
			.then_with(|| blocks::cmp_n(&self.limbs, &other.limbs))
	}
}

impl Deref for LimbBuf {
	type Target = [Limb];

	#[inline]
	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl DerefMut for LimbBuf {
	#[inline]
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.as_mut_slice()
	}
}

impl FromIterator<Limb> for LimbBuf {
	fn from_iter<I: IntoIterator<Item = Limb>>(iter: I) -> Self {
		Self { limbs: iter.into_iter().collect() }
	}
}

impl Extend<Limb> for LimbBuf {
	fn extend<I: IntoIterator<Item = Limb>>(&mut self, iter: I) {
		self.limbs.extend(iter);
	}
}

impl std::fmt::Debug for LimbBuf {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.limbs.iter().map(|limb| limb.0)).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testvec;

	#[test]
	fn test_push_pop() {
		let mut buf = LimbBuf::new();
		assert_eq!(buf.pop_back(), None);
		assert_eq!(buf.pop_front(), None);

		buf.push_back(Limb(2));
		buf.push_back(Limb(3));
		buf.push_front(Limb(1));
		assert_eq!(buf.as_slice(), testvec![1, 2, 3].as_slice());
		assert_eq!(buf.front(), Some(Limb(1)));
		assert_eq!(buf.back(), Some(Limb(3)));

		assert_eq!(buf.pop_front(), Some(Limb(1)));
		assert_eq!(buf.pop_back(), Some(Limb(3)));
		assert_eq!(buf.as_slice(), testvec![2].as_slice());
	}

	#[test]
	fn test_spills_to_heap() {
		let buf: LimbBuf = (0..20).map(Limb).collect();
		assert_eq!(buf.len(), 20);
		assert_eq!(buf[19], Limb(19));
	}

	#[test]
	fn test_prepend_zeros() {
		let mut buf = LimbBuf::from_slice(&testvec![7, 8]);
		buf.prepend_zeros(3);
		assert_eq!(buf.as_slice(), testvec![0, 0, 0, 7, 8].as_slice());

		// zero stays zero
		let mut buf = LimbBuf::new();
		buf.prepend_zeros(3);
		assert!(buf.is_empty());
	}

	#[test]
	fn test_split_at() {
		let buf = LimbBuf::from_slice(&testvec![1, 2, 3, 4, 5]);
		let (low, high) = buf.split_at(2);
		assert_eq!(low.as_slice(), testvec![1, 2].as_slice());
		assert_eq!(high.as_slice(), testvec![3, 4, 5].as_slice());

		let (low, high) = buf.split_at(9);
		assert_eq!(low, buf);
		assert!(high.is_empty());
	}

	#[test]
	fn test_trim() {
		let mut buf = LimbBuf::from_slice(&testvec![1, 0, 2, 0, 0]);
		buf.trim();
		assert_eq!(buf.as_slice(), testvec![1, 0, 2].as_slice());
	}

	#[test]
	fn test_cmp_from_end() {
		let a = LimbBuf::from_slice(&testvec![5, 1]);
		let b = LimbBuf::from_slice(&testvec![0, 2]);
		let c = LimbBuf::from_slice(&testvec![9]);
		assert_eq!(a.cmp_from_end(&b), Ordering::Less);
		assert_eq!(b.cmp_from_end(&a), Ordering::Greater);
		assert_eq!(c.cmp_from_end(&a), Ordering::Less);
		assert_eq!(a.cmp_from_end(&a.clone()), Ordering::Equal);
	}
}
