//! Low-level algorithms on limb slices.
//!
//! The functions here know nothing about the bit width of the number type. They return raw
//! limb sequences, which may contain zero limbs at the most significant end and may be longer
//! than the width allows. The caller canonicalizes the result.

use crate::blocks;
use crate::limb::Limb;
use crate::limb_buf::LimbBuf;

/// Returns `a + b`, computing at most `limit` limbs plus the final carry.
///
/// Limbs above `limit` would be truncated by the caller anyway, so we don't compute them.
pub fn add(a: &[Limb], b: &[Limb], limit: usize) -> LimbBuf {
	// Ensure that `a` is the longer of the two numbers
	let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };

	let n = a.len().min(limit);
	let m = b.len().min(n);
	let mut r = LimbBuf::zeroed(n);

	let mut carry = blocks::add_n(&mut r[..m], &a[..m], &b[..m]);
	carry = blocks::add_carry(&mut r[m..n], &a[m..n], carry);
	if carry {
		r.push_back(Limb::ONE);
	}
	r
}

/// Returns `a - b`.
///
/// Preconditions:
/// - a >= b
/// - neither `a` nor `b` has zero limbs at the most significant end
pub fn sub(a: &[Limb], b: &[Limb]) -> LimbBuf {
	debug_assert!(a.len() >= b.len());
	let m = b.len();
	let mut r = LimbBuf::zeroed(a.len());

	let borrow = blocks::sub_n(&mut r[..m], &a[..m], b);
	let borrow = blocks::sub_borrow(&mut r[m..], &a[m..], borrow);
	debug_assert!(!borrow);
	r
}

/// Returns the bitwise complement of `b` extended to `n` limbs, with the top limb masked by
/// `top_mask`. Missing limbs of `b` are treated as zero.
///
/// For a number `b` of width `W`, this is `2**W - 1 - b`.
pub fn complement(b: &[Limb], n: usize, top_mask: Limb) -> LimbBuf {
	let mut r: LimbBuf = (0..n).map(|i| !b.get(i).copied().unwrap_or(Limb::ZERO)).collect();
	if let Some(top) = r.back_mut() {
		*top &= top_mask;
	}
	r
}

/// Returns `a << shift`. The result has one limb more than `a`.
///
/// Preconditions:
/// - shift < Limb::BITS
pub fn shl(a: &[Limb], shift: usize) -> LimbBuf {
	let mut r = LimbBuf::zeroed(a.len());
	let high = blocks::shl(&mut r, a, shift);
	r.push_back(high);
	r
}

/// Returns `a >> 1`.
pub fn shr_1(a: &[Limb]) -> LimbBuf {
	let mut r = LimbBuf::zeroed(a.len());
	blocks::shr_1(&mut r, a);
	r
}

/// Returns `a * b` truncated to `limit` limbs.
///
/// This is the schoolbook algorithm: for every limb of `b`, multiply `a` by it and add the
/// partial product shifted by the limb's position.
///
/// With `limit >= a.len() + b.len()`, the full product is returned.
pub fn mul_schoolbook(a: &[Limb], b: &[Limb], limit: usize) -> LimbBuf {
	let n = (a.len() + b.len()).min(limit);
	let mut r = LimbBuf::zeroed(n);
	if a.is_empty() {
		return r;
	}

	for (j, &b) in b.iter().enumerate() {
		if j >= n {
			break;
		}
		let len = a.len().min(n - j);

		// The first row is stored, the later rows are added to it.
		if j == 0 {
			let high = blocks::mul_1(&mut r[..len], &a[..len], b, Limb::ZERO);
			if len < n {
				r[len] = high;
			}
			continue;
		}
		if b.is_zero() {
			continue;
		}

		let high = blocks::addmul_1(&mut r[j..j + len], &a[..len], b);

		// Anything carried above `n` is truncated.
		blocks::add_1_(&mut r[j + len..], high);
	}
	r
}
