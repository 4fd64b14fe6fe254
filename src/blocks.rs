use crate::limb::Limb;
use std::cmp::Ordering;

//--------------------------------------------------------------------------------------------------
// bit_width

/// Returns the number of bits needed to store the number.
///
/// Preconditions:
/// - if a.len() > 0, then a[a.len() - 1] is non-zero
pub fn bit_width(a: &[Limb]) -> usize {
	match a.last() {
		Some(top) => (a.len() - 1) * Limb::BITS + top.bit_width(),
		None => 0,
	}
}

//--------------------------------------------------------------------------------------------------
// trim

/// Returns the length of `a` without its zero most-significant limbs.
#[inline]
pub fn trim(a: &[Limb]) -> usize {
	let mut n = a.len();
	while n > 0 && a[n - 1].is_zero() {
		n -= 1;
	}
	n
}

//--------------------------------------------------------------------------------------------------
// add

/// r[0..<n] = a[0..<n] + b[0..<n]
///
/// Returns the carry out of the top limb.
///
/// Preconditions:
/// - r.len() == a.len() == b.len()
pub fn add_n(r: &mut [Limb], a: &[Limb], b: &[Limb]) -> bool {
	debug_assert!(r.len() == a.len() && r.len() == b.len());
	let mut carry = false;
	for ((r, &a), &b) in r.iter_mut().zip(a).zip(b) {
		(*r, carry) = Limb::addc(a, b, carry);
	}
	carry
}

/// r[0..<n] = a[0..<n] + carry
///
/// Preconditions:
/// - r.len() == a.len()
pub fn add_carry(r: &mut [Limb], a: &[Limb], carry: bool) -> bool {
	debug_assert!(r.len() == a.len());
	let mut carry = carry;
	let mut i = 0;
	while carry && i < r.len() {
		(r[i], carry) = Limb::addc(a[i], Limb::ZERO, carry);
		i += 1;
	}
	r[i..].copy_from_slice(&a[i..]);
	carry
}

/// In-place `r += b`.
pub fn add_1_(r: &mut [Limb], b: Limb) -> bool {
	let Some((first, rest)) = r.split_first_mut() else {
		return b.is_not_zero();
	};
	let mut carry;
	(*first, carry) = Limb::addc(*first, b, false);
	for r in rest {
		if !carry {
			break;
		}
		(*r, carry) = Limb::addc(*r, Limb::ZERO, carry);
	}
	carry
}

//--------------------------------------------------------------------------------------------------
// sub

/// r[0..<n] = a[0..<n] - b[0..<n]
///
/// Returns the borrow out of the top limb.
///
/// Preconditions:
/// - r.len() == a.len() == b.len()
pub fn sub_n(r: &mut [Limb], a: &[Limb], b: &[Limb]) -> bool {
	debug_assert!(r.len() == a.len() && r.len() == b.len());
	let mut borrow = false;
	for ((r, &a), &b) in r.iter_mut().zip(a).zip(b) {
		(*r, borrow) = Limb::subb(a, b, borrow);
	}
	borrow
}

/// r[0..<n] = a[0..<n] - borrow
///
/// Preconditions:
/// - r.len() == a.len()
pub fn sub_borrow(r: &mut [Limb], a: &[Limb], borrow: bool) -> bool {
	debug_assert!(r.len() == a.len());
	let mut borrow = borrow;
	let mut i = 0;
	while borrow && i < r.len() {
		(r[i], borrow) = Limb::subb(a[i], Limb::ZERO, borrow);
		i += 1;
	}
	r[i..].copy_from_slice(&a[i..]);
	borrow
}

//--------------------------------------------------------------------------------------------------
// mul

/// r[0..<n] = a[0..<n] * b + c
///
/// Returns the high limb of the product.
///
/// Preconditions:
/// - r.len() == a.len()
pub fn mul_1(r: &mut [Limb], a: &[Limb], b: Limb, c: Limb) -> Limb {
	debug_assert!(r.len() == a.len());
	let mut carry = c;
	for (r, &a) in r.iter_mut().zip(a) {
		let [lo, hi] = Limb::mul(a, b, carry, Limb::ZERO);
		*r = lo;
		carry = hi;
	}
	carry
}

/// r[0..<n] += a[0..<n] * b
///
/// Returns the high limb of the sum.
///
/// Preconditions:
/// - r.len() == a.len()
pub fn addmul_1(r: &mut [Limb], a: &[Limb], b: Limb) -> Limb {
	debug_assert!(r.len() == a.len());
	let mut carry = Limb::ZERO;
	for (r, &a) in r.iter_mut().zip(a) {
		let [lo, hi] = Limb::mul(a, b, carry, *r);
		*r = lo;
		carry = hi;
	}
	carry
}

//--------------------------------------------------------------------------------------------------
// shift

/// r[0..<n] = a[0..<n] << shift
///
/// Returns the bits shifted out of the top limb.
///
/// Preconditions:
/// - r.len() == a.len()
/// - shift < Limb::BITS
pub fn shl(r: &mut [Limb], a: &[Limb], shift: usize) -> Limb {
	debug_assert!(r.len() == a.len());
	debug_assert!(shift < Limb::BITS);
	let mut prev = Limb::ZERO;
	for (r, &a) in r.iter_mut().zip(a) {
		*r = Limb::from_high_half(Limb::make_double(prev, a) << shift);
		prev = a;
	}
	Limb::from_high_half(Limb::make_double(prev, Limb::ZERO) << shift)
}

/// r[0..<n] = a[0..<n] >> 1
///
/// Returns the bit shifted out of the bottom limb.
///
/// Preconditions:
/// - r.len() == a.len()
pub fn shr_1(r: &mut [Limb], a: &[Limb]) -> bool {
	debug_assert!(r.len() == a.len());
	let n = a.len();
	for i in 0..n {
		let high = if i + 1 < n { a[i + 1] } else { Limb::ZERO };
		r[i] = (a[i] >> 1) | (high << (Limb::BITS - 1));
	}
	a.first().is_some_and(|low| low.bit(0))
}

//--------------------------------------------------------------------------------------------------
// cmp

/// Compares two numbers of the same length, starting from the most significant limb.
///
/// Preconditions:
/// - a.len() == b.len()
pub fn cmp_n(a: &[Limb], b: &[Limb]) -> Ordering {
	debug_assert!(a.len() == b.len());
	for (a, b) in a.iter().rev().zip(b.iter().rev()) {
		if a != b {
			return a.cmp(b);
		}
	}
	Ordering::Equal
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;
	use crate::limb::Value;
	use crate::testvec;

	const THIRD: Value = Value::MAX / 3;
	const HALF: Value = Value::MAX / 2;
	const TWO_THIRDS: Value = Value::MAX - THIRD;
	const MAX: Value = Value::MAX;

	#[test]
	fn test_bit_width() {
		assert_eq!(bit_width(&testvec![]), 0);
		assert_eq!(bit_width(&testvec![0x12345678]), 29);
		assert_eq!(bit_width(&testvec![0, MAX]), 2 * Limb::BITS);
		assert_eq!(bit_width(&testvec![111, MAX, 0x12345678]), 2 * Limb::BITS + 29);
	}

	#[test]
	fn test_trim() {
		assert_eq!(trim(&testvec![]), 0);
		assert_eq!(trim(&testvec![0, 0]), 0);
		assert_eq!(trim(&testvec![1, 0, 0]), 1);
		assert_eq!(trim(&testvec![0, 2, 0]), 2);
		assert_eq!(trim(&testvec![0, 2, 3]), 3);
	}

	#[test]
	fn test_add_n() {
		let a = testvec![HALF, 1, 2, 3, TWO_THIRDS, MAX, MAX];
		let b = testvec![TWO_THIRDS, 1, 2, 3, HALF, MAX, 0];
		let mut r = testvec![0, 0, 0, 0, 0, 0, 0];
		let carry = add_n(&mut r, &a, &b);
		assert_eq!(
			r,
			testvec![
				TWO_THIRDS - (MAX - HALF + 1),
				3,
				4,
				6,
				TWO_THIRDS - (MAX - HALF + 1),
				MAX,
				0
			]
		);
		assert_eq!(carry, true);

		let a = testvec![HALF, 1, 2, 3, TWO_THIRDS, MAX, TWO_THIRDS];
		let carry = add_n(&mut r, &a, &b);
		assert_eq!(r[6], Limb(TWO_THIRDS + 1));
		assert_eq!(carry, false);
	}

	#[test]
	fn test_add_carry() {
		let a = testvec![HALF, 1, 2, 3, TWO_THIRDS, MAX, MAX];
		let mut r = testvec![0, 0, 0, 0, 0, 0, 0];
		let carry = add_carry(&mut r, &a, false);
		assert_eq!(r, testvec![HALF, 1, 2, 3, TWO_THIRDS, MAX, MAX]);
		assert_eq!(carry, false);

		let carry = add_carry(&mut r, &a, true);
		assert_eq!(r, testvec![HALF + 1, 1, 2, 3, TWO_THIRDS, MAX, MAX]);
		assert_eq!(carry, false);

		let a = testvec![MAX, MAX, 2, 3];
		let mut r = testvec![0, 0, 0, 0];
		let carry = add_carry(&mut r, &a, true);
		assert_eq!(r, testvec![0, 0, 3, 3]);
		assert_eq!(carry, false);

		let a = testvec![MAX, MAX, MAX];
		let mut r = testvec![7, 7, 7];
		let carry = add_carry(&mut r, &a, true);
		assert_eq!(r, testvec![0, 0, 0]);
		assert_eq!(carry, true);
	}

	#[test]
	fn test_add_1() {
		let mut r = testvec![HALF, 1, 2];
		assert_eq!(add_1_(&mut r, Limb(HALF)), false);
		assert_eq!(r, testvec![HALF + HALF, 1, 2]);

		let mut r = testvec![TWO_THIRDS, MAX, MAX];
		assert_eq!(add_1_(&mut r, Limb(HALF)), true);
		assert_eq!(r, testvec![TWO_THIRDS - (MAX - HALF) - 1, 0, 0]);

		let mut r = testvec![];
		assert_eq!(add_1_(&mut r, Limb(0)), false);
		assert_eq!(add_1_(&mut r, Limb(1)), true);
	}

	#[test]
	fn test_sub_n() {
		let a = testvec![0, 5, MAX];
		let b = testvec![1, 5, 0];
		let mut r = testvec![0, 0, 0];
		let borrow = sub_n(&mut r, &a, &b);
		assert_eq!(r, testvec![MAX, MAX, MAX - 1]);
		assert_eq!(borrow, false);

		let borrow = sub_n(&mut r, &b, &a);
		assert_eq!(r, testvec![1, 0, 1]);
		assert_eq!(borrow, true);
	}

	#[test]
	fn test_sub_borrow() {
		let a = testvec![0, 0, 3, 4];
		let mut r = testvec![9, 9, 9, 9];
		assert_eq!(sub_borrow(&mut r, &a, true), false);
		assert_eq!(r, testvec![MAX, MAX, 2, 4]);

		let a = testvec![0, 0];
		let mut r = testvec![9, 9];
		assert_eq!(sub_borrow(&mut r, &a, true), true);
		assert_eq!(r, testvec![MAX, MAX]);
	}

	#[test]
	fn test_mul_1() {
		let a = testvec![MAX, MAX, 7];
		let mut r = testvec![0, 0, 0];
		let high = mul_1(&mut r, &a, Limb(2), Limb(1));
		assert_eq!(r, testvec![MAX, MAX, 15]);
		assert_eq!(high, Limb(0));

		let high = mul_1(&mut r, &a, Limb(MAX), Limb(0));
		// (2**64 * 8 - 1) * (2**32 - 1) == 2**96 * 7 + 2**64 * (2**32 - 9) + 2**32 * (2**32 - 1) + 1
		assert_eq!(r, testvec![1, MAX, MAX - 8]);
		assert_eq!(high, Limb(7));
	}

	#[test]
	fn test_addmul_1() {
		let a = testvec![MAX, MAX];
		let mut r = testvec![MAX, MAX];
		let high = addmul_1(&mut r, &a, Limb(MAX));
		// (2**64 - 1) * (2**32 - 1) + 2**64 - 1 == 2**96 - 2**32
		assert_eq!(r, testvec![0, MAX]);
		assert_eq!(high, Limb(MAX));
	}

	#[test]
	fn test_shl() {
		let a = testvec![0x8000_0001, 0x0000_00ff];
		let mut r = testvec![0, 0];
		assert_eq!(shl(&mut r, &a, 0), Limb(0));
		assert_eq!(r, a);

		assert_eq!(shl(&mut r, &a, 1), Limb(0));
		assert_eq!(r, testvec![0x0000_0002, 0x0000_01ff]);

		assert_eq!(shl(&mut r, &a, 28), Limb(0xf));
		assert_eq!(r, testvec![0x1000_0000, 0xf800_0000]);
	}

	#[test]
	fn test_shr_1() {
		let a = testvec![0x0000_0003, 0x0000_0001];
		let mut r = testvec![0, 0];
		assert_eq!(shr_1(&mut r, &a), true);
		assert_eq!(r, testvec![0x8000_0001, 0]);

		let mut r = testvec![];
		assert_eq!(shr_1(&mut r, &testvec![]), false);
	}

	#[test]
	fn test_cmp_n() {
		assert_eq!(cmp_n(&testvec![], &testvec![]), Ordering::Equal);
		assert_eq!(cmp_n(&testvec![1, 2], &testvec![1, 2]), Ordering::Equal);
		assert_eq!(cmp_n(&testvec![9, 1], &testvec![0, 2]), Ordering::Less);
		assert_eq!(cmp_n(&testvec![1, 2], &testvec![0, 2]), Ordering::Greater);
	}
}
