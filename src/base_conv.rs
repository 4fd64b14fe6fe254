use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::fixed_size::Uint;
use crate::limb::{Double, Limb, Value};
use crate::limb_buf::LimbBuf;

/// Value of every ASCII digit character, case-insensitive. `INVALID` for everything else.
static DIGIT_VALUES: [u8; 256] = digit_values();

const INVALID: u8 = u8::MAX;

const fn digit_values() -> [u8; 256] {
	let mut table = [INVALID; 256];
	let mut i = 0;
	while i < 10 {
		table[b'0' as usize + i] = i as u8;
		i += 1;
	}
	let mut i = 0;
	while i < 26 {
		table[b'a' as usize + i] = 10 + i as u8;
		table[b'A' as usize + i] = 10 + i as u8;
		i += 1;
	}
	table
}

const DIGIT_CHARS: &[u8; 16] = b"0123456789abcdef";

#[derive(Copy, Clone, Debug)]
pub struct BaseConv {
	pub base: u8,

	/// `log2(base)` for power-of-two bases, zero otherwise.
	pub bits_per_digit: usize,

	/// Error returned for a character that is not a digit in this base.
	pub invalid_digit: fn() -> Error,
}

impl BaseConv {
	pub const BINARY: BaseConv = BaseConv {
		base: 2,
		bits_per_digit: 1,
		invalid_digit: || Error::new_invalid_binary("Uint::from_bin: invalid binary digit"),
	};

	pub const DECIMAL: BaseConv = BaseConv {
		base: 10,
		bits_per_digit: 0,
		invalid_digit: || Error::new_invalid_decimal("Uint::from_dec: invalid decimal digit"),
	};

	pub const HEX: BaseConv = BaseConv {
		base: 16,
		bits_per_digit: 4,
		invalid_digit: || Error::new_invalid_hex("Uint::from_hex: invalid hex digit"),
	};

	/// Returns the conversion info for the given base. Only bases 2, 10 and 16 are supported.
	pub fn get(base: u32) -> Result<&'static BaseConv, Error> {
		match base {
			2 => Ok(&Self::BINARY),
			10 => Ok(&Self::DECIMAL),
			16 => Ok(&Self::HEX),
			_ => Err(Error::new_invalid_base("Uint::from_str_radix: unsupported radix")),
		}
	}

	/// Number of digits that make one limb. Only meaningful for power-of-two bases.
	#[inline]
	pub fn digits_per_limb(&self) -> usize {
		debug_assert!(self.bits_per_digit > 0);
		Limb::BITS / self.bits_per_digit
	}

	/// Converts the characters of `str` into digit values, most significant first.
	///
	/// Leading zeros are dropped, so the number zero is an empty vector.
	pub fn str_to_digits(&self, str: &str) -> Result<Vec<u8>, Error> {
		let mut digits = Vec::with_capacity(str.len());
		for c in str.bytes() {
			let digit = DIGIT_VALUES[c as usize];
			if digit >= self.base {
				return Err((self.invalid_digit)());
			}
			if digit != 0 || !digits.is_empty() {
				digits.push(digit);
			}
		}
		Ok(digits)
	}

	/// Packs the digits of a power-of-two base into at most `limit` limbs.
	///
	/// The digits are grouped from the least significant end; every group is one limb.
	fn digits_to_limbs_pow2(&self, digits: &[u8], limit: usize) -> LimbBuf {
		digits
			.rchunks(self.digits_per_limb())
			.take(limit)
			.map(|chunk| {
				let value = chunk.iter().fold(0, |acc: Value, &d| (acc << self.bits_per_digit) | d as Value);
				Limb(value)
			})
			.collect()
	}

	/// Converts decimal digits into at most `limit` limbs.
	///
	/// Divides the decimal number by `2**Limb::BITS` repeatedly. The remainder of every pass is
	/// the next limb, and the quotient is the input of the next pass.
	fn digits_to_limbs_dec(digits: Vec<u8>, limit: usize) -> LimbBuf {
		let mut limbs = LimbBuf::new();
		let mut digits = digits;
		while !digits.is_empty() && limbs.len() < limit {
			let mut quotient = Vec::with_capacity(digits.len());
			let mut rem: Double = 0;
			for &d in &digits {
				rem = rem * 10 + d as Double;
				let q = (rem >> Limb::BITS) as u8;
				if q != 0 || !quotient.is_empty() {
					quotient.push(q);
				}
				rem &= Limb::MAX.as_double();
			}
			limbs.push_back(Limb::from_low_half(rem));
			digits = quotient;
		}
		limbs
	}

	/// Writes the limbs in a power-of-two base, without leading zeros.
	fn limbs_to_str_pow2(&self, limbs: &[Limb]) -> String {
		let digits_per_limb = self.digits_per_limb();
		let mask = (1 << self.bits_per_digit) - 1;

		let mut s = String::with_capacity(limbs.len() * digits_per_limb);
		for limb in limbs.iter().rev() {
			for i in (0..digits_per_limb).rev() {
				let digit = (limb.0 >> (i * self.bits_per_digit)) & mask;
				if digit != 0 || !s.is_empty() {
					s.push(DIGIT_CHARS[digit as usize] as char);
				}
			}
		}
		if s.is_empty() {
			s.push('0');
		}
		s
	}

	/// Writes the number in decimal.
	///
	/// Keeps the decimal representation of `2**i` and adds it to the result for every bit `i`
	/// that is set. The decimal numbers are digit vectors, least significant first.
	fn limbs_to_str_dec(limbs: &[Limb]) -> String {
		let mut result: Vec<u8> = Vec::new();
		let mut power: Vec<u8> = vec![1];
		for (n, limb) in limbs.iter().enumerate() {
			for i in 0..Limb::BITS {
				if limb.bit(i) {
					dec_add(&mut result, &power);
				}
				if n + 1 < limbs.len() || i + 1 < limb.bit_width() {
					dec_double(&mut power);
				}
			}
		}

		if result.is_empty() {
			return "0".to_string();
		}
		result.iter().rev().map(|&d| DIGIT_CHARS[d as usize] as char).collect()
	}
}

/// `acc += x` on little-endian decimal digit vectors.
fn dec_add(acc: &mut Vec<u8>, x: &[u8]) {
	if acc.len() < x.len() {
		acc.resize(x.len(), 0);
	}
	let mut carry = 0;
	for (i, a) in acc.iter_mut().enumerate() {
		if i >= x.len() && carry == 0 {
			break;
		}
		let sum = *a + x.get(i).copied().unwrap_or(0) + carry;
		*a = sum % 10;
		carry = sum / 10;
	}
	if carry != 0 {
		acc.push(carry);
	}
}

/// `x *= 2` on a little-endian decimal digit vector.
fn dec_double(x: &mut Vec<u8>) {
	let mut carry = 0;
	for d in x.iter_mut() {
		let t = *d * 2 + carry;
		*d = t % 10;
		carry = t / 10;
	}
	if carry != 0 {
		x.push(carry);
	}
}

//--------------------------------------------------------------------------------------------------

impl<const BITS: usize> Uint<BITS> {
	/// Parses a decimal string. The empty string is zero. Values above the width are truncated.
	pub fn from_dec(s: &str) -> Result<Self, Error> {
		let digits = BaseConv::DECIMAL.str_to_digits(s)?;
		Ok(Self::from_raw(BaseConv::digits_to_limbs_dec(digits, Self::LIMBS)))
	}

	/// Parses a hexadecimal string, case-insensitive and without a prefix.
	pub fn from_hex(s: &str) -> Result<Self, Error> {
		Self::from_str_pow2(&BaseConv::HEX, s)
	}

	/// Parses a binary string without a prefix.
	pub fn from_bin(s: &str) -> Result<Self, Error> {
		Self::from_str_pow2(&BaseConv::BINARY, s)
	}

	fn from_str_pow2(conv: &BaseConv, s: &str) -> Result<Self, Error> {
		let digits = conv.str_to_digits(s)?;
		Ok(Self::from_raw(conv.digits_to_limbs_pow2(&digits, Self::LIMBS)))
	}

	/// Parses a string in base 2, 10 or 16.
	pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, Error> {
		let conv = BaseConv::get(radix)?;
		if conv.bits_per_digit > 0 { Self::from_str_pow2(conv, s) } else { Self::from_dec(s) }
	}

	/// Parses a decimal operand of an operator. Operators cannot return errors, so this panics.
	#[track_caller]
	pub(crate) fn parse_operand(s: &str) -> Self {
		match Self::from_dec(s) {
			Ok(value) => value,
			Err(err) => panic!("{}", err),
		}
	}

	pub fn dec(&self) -> String {
		BaseConv::limbs_to_str_dec(&self.limbs)
	}

	/// Lowercase hexadecimal, without a prefix.
	pub fn hex(&self) -> String {
		BaseConv::HEX.limbs_to_str_pow2(&self.limbs)
	}

	pub fn bin(&self) -> String {
		BaseConv::BINARY.limbs_to_str_pow2(&self.limbs)
	}

	/// Writes the number in base 2, 10 or 16.
	pub fn to_str_radix(&self, radix: u32) -> Result<String, Error> {
		let conv = BaseConv::get(radix)?;
		if conv.bits_per_digit > 0 { Ok(conv.limbs_to_str_pow2(&self.limbs)) } else { Ok(self.dec()) }
	}
}

impl<const BITS: usize> fmt::Display for Uint<BITS> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "", &self.dec())
	}
}

impl<const BITS: usize> fmt::LowerHex for Uint<BITS> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &self.hex())
	}
}

impl<const BITS: usize> fmt::Binary for Uint<BITS> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0b", &self.bin())
	}
}

impl<const BITS: usize> FromStr for Uint<BITS> {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_dec(s)
	}
}
