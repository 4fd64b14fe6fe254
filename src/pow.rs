use arrayvec::ArrayVec;
use log::trace;

use crate::fixed_size::Uint;

/// Number of exponent bits consumed at once by `pow_packing` and `pow_sliding_window`.
pub const POW_WINDOW_BITS: usize = 8;

const TABLE_SIZE: usize = 1 << POW_WINDOW_BITS;

/// Returns the `len` bits of `exp` starting at bit `start`, as a number.
fn window<const E: usize>(exp: &Uint<E>, start: usize, len: usize) -> usize {
	debug_assert!(len <= POW_WINDOW_BITS);
	(0..len).rev().fold(0, |acc, i| (acc << 1) | exp.bit(start + i) as usize)
}

impl<const BITS: usize> Uint<BITS> {
	/// Returns `self**exp % 2**BITS`.
	///
	/// Binary square-and-multiply, scanning the exponent from the least significant bit.
	/// The exponent has its own width, so it is never truncated to `BITS` bits.
	pub fn pow<const E: usize>(&self, exp: &Uint<E>) -> Self {
		let width = exp.bit_width();
		trace!("pow: square-and-multiply, {} exponent bits", width);

		let mut result = Self::one();
		let mut base = self.clone();
		for i in 0..width {
			if exp.bit(i) {
				result = result.wrapping_mul(&base);
			}
			if i + 1 < width {
				base = base.wrapping_mul(&base);
			}
		}
		result
	}

	pub fn pow_u64(&self, exp: u64) -> Self {
		self.pow(&Uint::<64>::from_u64(exp))
	}

	/// Returns `self**(2**k)`.
	fn square_times(&self, k: usize) -> Self {
		let mut r = self.clone();
		for _ in 0..k {
			r = r.wrapping_mul(&r);
		}
		r
	}

	/// Exponentiation with a table of all powers `self**0 ..< self**256`.
	///
	/// The exponent is scanned byte by byte from the most significant end:
	///     result = result**256 * table[byte]
	pub fn pow_packing<const E: usize>(&self, exp: &Uint<E>) -> Self {
		let width = exp.bit_width();
		trace!("pow: packing, {} exponent bits", width);

		let mut table = ArrayVec::<Self, TABLE_SIZE>::new();
		let mut power = Self::one();
		table.push(power.clone());
		while !table.is_full() {
			power = power.wrapping_mul(self);
			table.push(power.clone());
		}

		let mut result = Self::one();
		for byte in (0..width.div_ceil(POW_WINDOW_BITS)).rev() {
			let digit = window(exp, byte * POW_WINDOW_BITS, POW_WINDOW_BITS);
			result = result.square_times(POW_WINDOW_BITS).wrapping_mul(&table[digit]);
		}
		result
	}

	/// Sliding-window exponentiation with a table of the odd powers `self**1, self**3, ...`.
	///
	/// The exponent is scanned from the most significant bit. A zero bit squares the result.
	/// Otherwise, the longest window of at most `POW_WINDOW_BITS` bits that ends with a one bit
	/// is consumed at once:
	///     result = result**(2**len) * table[window / 2]
	pub fn pow_sliding_window<const E: usize>(&self, exp: &Uint<E>) -> Self {
		let width = exp.bit_width();
		trace!("pow: sliding window, {} exponent bits", width);

		let square = self.wrapping_mul(self);
		let mut table = ArrayVec::<Self, { TABLE_SIZE / 2 }>::new();
		let mut power = self.clone();
		table.push(power.clone());
		while !table.is_full() {
			power = power.wrapping_mul(&square);
			table.push(power.clone());
		}

		let mut result = Self::one();
		let mut i = width;
		while i > 0 {
			if !exp.bit(i - 1) {
				result = result.wrapping_mul(&result);
				i -= 1;
				continue;
			}

			// bits `low ..< i` form the window, and bit `low` is set
			let mut low = i.saturating_sub(POW_WINDOW_BITS);
			while !exp.bit(low) {
				low += 1;
			}
			let len = i - low;
			let digit = window(exp, low, len);
			result = result.square_times(len).wrapping_mul(&table[digit >> 1]);
			i = low;
		}
		result
	}
}
