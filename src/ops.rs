use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::{Bounded, One, Pow, Zero};

use crate::fixed_size::Uint;

impl<const BITS: usize> Uint<BITS> {
	/// `checked_div` for the `/` operator, which panics on division by zero like the primitive
	/// integers do.
	#[track_caller]
	fn div_or_panic(&self, other: &Self) -> Self {
		match self.checked_div(other) {
			Ok(quotient) => quotient,
			Err(err) => panic!("{}", err),
		}
	}

	/// `self = self**exp % 2**BITS`
	///
	/// `exp` is anything a borrowed `Uint` can be raised to: `&Uint<E>`, `Uint<E>`, `u64` or a
	/// decimal string.
	#[track_caller]
	pub fn pow_assign<T>(&mut self, exp: T)
	where
		for<'a> &'a Self: Pow<T, Output = Self>,
	{
		*self = Pow::pow(&*self, exp);
	}
}

// Every binary operator is implemented for owned and borrowed numbers, `u64` and decimal strings.
// All forms end up in the same named method.
macro_rules! impl_binary_op {
	($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $method:ident) => {
		impl<const BITS: usize> $Op<&Uint<BITS>> for &Uint<BITS> {
			type Output = Uint<BITS>;

			#[track_caller]
			fn $op(self, rhs: &Uint<BITS>) -> Uint<BITS> {
				self.$method(rhs)
			}
		}

		impl<const BITS: usize> $Op<Uint<BITS>> for &Uint<BITS> {
			type Output = Uint<BITS>;

			#[track_caller]
			fn $op(self, rhs: Uint<BITS>) -> Uint<BITS> {
				self.$method(&rhs)
			}
		}

		impl<const BITS: usize> $Op<&Uint<BITS>> for Uint<BITS> {
			type Output = Uint<BITS>;

			#[track_caller]
			fn $op(self, rhs: &Uint<BITS>) -> Uint<BITS> {
				self.$method(rhs)
			}
		}

		impl<const BITS: usize> $Op<Uint<BITS>> for Uint<BITS> {
			type Output = Uint<BITS>;

			#[track_caller]
			fn $op(self, rhs: Uint<BITS>) -> Uint<BITS> {
				self.$method(&rhs)
			}
		}

		impl<const BITS: usize> $Op<u64> for &Uint<BITS> {
			type Output = Uint<BITS>;

			#[track_caller]
			fn $op(self, rhs: u64) -> Uint<BITS> {
				self.$method(&Uint::from_u64(rhs))
			}
		}

		impl<const BITS: usize> $Op<u64> for Uint<BITS> {
			type Output = Uint<BITS>;

			#[track_caller]
			fn $op(self, rhs: u64) -> Uint<BITS> {
				self.$method(&Uint::from_u64(rhs))
			}
		}

		impl<const BITS: usize> $Op<&str> for &Uint<BITS> {
			type Output = Uint<BITS>;

			#[track_caller]
			fn $op(self, rhs: &str) -> Uint<BITS> {
				self.$method(&Uint::parse_operand(rhs))
			}
		}

		impl<const BITS: usize> $Op<&str> for Uint<BITS> {
			type Output = Uint<BITS>;

			#[track_caller]
			fn $op(self, rhs: &str) -> Uint<BITS> {
				self.$method(&Uint::parse_operand(rhs))
			}
		}

		impl<const BITS: usize> $OpAssign<&Uint<BITS>> for Uint<BITS> {
			#[track_caller]
			fn $op_assign(&mut self, rhs: &Uint<BITS>) {
				*self = self.$method(rhs);
			}
		}

		impl<const BITS: usize> $OpAssign<Uint<BITS>> for Uint<BITS> {
			#[track_caller]
			fn $op_assign(&mut self, rhs: Uint<BITS>) {
				*self = self.$method(&rhs);
			}
		}

		impl<const BITS: usize> $OpAssign<u64> for Uint<BITS> {
			#[track_caller]
			fn $op_assign(&mut self, rhs: u64) {
				*self = self.$method(&Uint::from_u64(rhs));
			}
		}

		impl<const BITS: usize> $OpAssign<&str> for Uint<BITS> {
			#[track_caller]
			fn $op_assign(&mut self, rhs: &str) {
				*self = self.$method(&Uint::parse_operand(rhs));
			}
		}
	};
}

impl_binary_op!(Add, add, AddAssign, add_assign, wrapping_add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, wrapping_sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, wrapping_mul);
impl_binary_op!(Div, div, DivAssign, div_assign, div_or_panic);

//--------------------------------------------------------------------------------------------------
// pow

impl<const BITS: usize, const E: usize> Pow<&Uint<E>> for &Uint<BITS> {
	type Output = Uint<BITS>;

	fn pow(self, exp: &Uint<E>) -> Uint<BITS> {
		Uint::pow(self, exp)
	}
}

impl<const BITS: usize, const E: usize> Pow<Uint<E>> for &Uint<BITS> {
	type Output = Uint<BITS>;

	fn pow(self, exp: Uint<E>) -> Uint<BITS> {
		Uint::pow(self, &exp)
	}
}

impl<const BITS: usize, const E: usize> Pow<&Uint<E>> for Uint<BITS> {
	type Output = Uint<BITS>;

	fn pow(self, exp: &Uint<E>) -> Uint<BITS> {
		Uint::pow(&self, exp)
	}
}

impl<const BITS: usize, const E: usize> Pow<Uint<E>> for Uint<BITS> {
	type Output = Uint<BITS>;

	fn pow(self, exp: Uint<E>) -> Uint<BITS> {
		Uint::pow(&self, &exp)
	}
}

impl<const BITS: usize> Pow<u64> for &Uint<BITS> {
	type Output = Uint<BITS>;

	fn pow(self, exp: u64) -> Uint<BITS> {
		self.pow_u64(exp)
	}
}

impl<const BITS: usize> Pow<u64> for Uint<BITS> {
	type Output = Uint<BITS>;

	fn pow(self, exp: u64) -> Uint<BITS> {
		self.pow_u64(exp)
	}
}

impl<const BITS: usize> Pow<&str> for &Uint<BITS> {
	type Output = Uint<BITS>;

	/// The exponent is parsed at the width of the base.
	#[track_caller]
	fn pow(self, exp: &str) -> Uint<BITS> {
		Uint::pow(self, &Uint::<BITS>::parse_operand(exp))
	}
}

impl<const BITS: usize> Pow<&str> for Uint<BITS> {
	type Output = Uint<BITS>;

	/// The exponent is parsed at the width of the base.
	#[track_caller]
	fn pow(self, exp: &str) -> Uint<BITS> {
		Uint::pow(&self, &Self::parse_operand(exp))
	}
}

//--------------------------------------------------------------------------------------------------
// num_traits

impl<const BITS: usize> Zero for Uint<BITS> {
	fn zero() -> Self {
		Uint::zero()
	}

	fn is_zero(&self) -> bool {
		Uint::is_zero(self)
	}
}

impl<const BITS: usize> One for Uint<BITS> {
	fn one() -> Self {
		Uint::one()
	}
}

impl<const BITS: usize> Bounded for Uint<BITS> {
	fn min_value() -> Self {
		Uint::zero()
	}

	fn max_value() -> Self {
		Uint::<BITS>::max_value()
	}
}

impl<const BITS: usize> Sum for Uint<BITS> {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Uint::zero(), |acc, x| acc.wrapping_add(&x))
	}
}

impl<'a, const BITS: usize> Sum<&'a Uint<BITS>> for Uint<BITS> {
	fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Uint::zero(), |acc, x| acc.wrapping_add(x))
	}
}

impl<const BITS: usize> Product for Uint<BITS> {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Uint::one(), |acc, x| acc.wrapping_mul(&x))
	}
}

impl<'a, const BITS: usize> Product<&'a Uint<BITS>> for Uint<BITS> {
	fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
		iter.fold(Uint::one(), |acc, x| acc.wrapping_mul(x))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::U256;

	type U8 = Uint<8>;

	#[test]
	fn test_width_8() {
		assert_eq!(U8::from_u64(250) + U8::from_u64(10), 4);
		assert_eq!(U8::from_u64(5) - U8::from_u64(10), 251);
		assert_eq!(U8::from_u64(200) * U8::from_u64(2), 144);
		assert_eq!(U8::from_u64(7) / U8::from_u64(2), 3);
		assert_eq!(Uint::pow(&U8::from_u64(2), &U8::from_u64(9)), 0);
		assert_eq!(U8::from_hex("FF").unwrap(), U8::from_dec("255").unwrap());
	}

	#[test]
	#[should_panic(expected = "division by zero")]
	fn test_div_by_zero_panics() {
		let _ = U8::from_u64(5) / U8::zero();
	}

	#[test]
	fn test_operand_forms() {
		let a = U256::from_u64(1000);
		let b = U256::from_u64(24);

		assert_eq!(&a + &b, 1024);
		assert_eq!(&a + b.clone(), 1024);
		assert_eq!(a.clone() + &b, 1024);
		assert_eq!(a.clone() + b.clone(), 1024);
		assert_eq!(&a - 1000, 0);
		assert_eq!(a.clone() * 3, 3000);
		assert_eq!(&a / "7", 142);
		assert_eq!(a.clone() - "1", 999);
	}

	#[test]
	fn test_compound_assignment() {
		let mut a = U256::from_u64(10);
		a += U256::from_u64(5);
		a -= 3;
		a *= &U256::from_u64(4);
		a /= "6";
		assert_eq!(a, 8);

		a.pow_assign(&Uint::<16>::from_u64(3));
		assert_eq!(a, 512);

		let mut b = U8::from_u64(255);
		b += 1;
		assert!(b.is_zero());
		b -= 1;
		assert_eq!(b, U8::max_value());
	}

	#[test]
	fn test_str_operands_are_truncated() {
		let a = U8::from_u64(1);
		assert_eq!(a.clone() + "256", 1);
		assert_eq!(a + "1000", 233);
	}

	#[test]
	#[should_panic(expected = "invalid decimal digit")]
	fn test_invalid_str_operand_panics() {
		let _ = U256::from_u64(1) + "1e3";
	}

	#[test]
	fn test_pow_trait() {
		let a = U256::from_u64(3);
		assert_eq!(Pow::pow(a.clone(), 4u64), 81);
		assert_eq!(Pow::pow(&a, &Uint::<8>::from_u64(5)), 243);
		assert_eq!(Pow::pow(a.clone(), Uint::<512>::from_u64(2)), 9);
		assert_eq!(Pow::pow(a.clone(), &Uint::<16>::from_u64(2)), 9);
		assert_eq!(Pow::pow(a, "3"), 27);
	}

	#[test]
	fn test_pow_trait_borrowed() {
		let a = U256::from_u64(3);
		assert_eq!(Pow::pow(&a, 4u64), 81);
		assert_eq!(Pow::pow(&a, "2"), 9);
		assert_eq!(Pow::pow(&a, Uint::<64>::from_u64(3)), 27);
		assert_eq!(a, 3);

		// the string exponent is parsed at the width of the base: 257 % 256 == 1
		assert_eq!(Pow::pow(&U8::from_u64(3), "257"), 3);
	}

	#[test]
	fn test_pow_assign_forms() {
		let mut a = U256::from_u64(3);
		a.pow_assign(4u64);
		assert_eq!(a, 81);

		let mut a = U256::from_u64(3);
		a.pow_assign("3");
		assert_eq!(a, 27);

		let mut a = U256::from_u64(2);
		a.pow_assign(Uint::<512>::from_u64(10));
		assert_eq!(a, 1024);

		let mut b = U8::from_u64(2);
		b.pow_assign(8u64);
		assert!(b.is_zero());
	}

	#[test]
	#[should_panic(expected = "invalid decimal digit")]
	fn test_pow_assign_invalid_str_panics() {
		let mut a = U256::from_u64(2);
		a.pow_assign("x");
	}

	#[test]
	fn test_num_traits() {
		fn total<T: Zero + Clone>(values: &[T]) -> T {
			values.iter().cloned().fold(T::zero(), |acc, x| acc + x)
		}

		let values = [U8::from_u64(100), U8::from_u64(100), U8::from_u64(100)];
		assert_eq!(total(&values), 44);
		assert!(<U8 as Zero>::is_zero(&<U8 as Zero>::zero()));
		assert_eq!(<U8 as One>::one(), 1);
		assert_eq!(<U8 as Bounded>::min_value(), 0);
		assert_eq!(<U8 as Bounded>::max_value(), 255);
	}

	#[test]
	fn test_sum_product() {
		let values: Vec<U256> = (1..=20).map(U256::from_u64).collect();
		assert_eq!(values.iter().sum::<U256>(), 210);
		assert_eq!(values.iter().product::<U256>(), 2_432_902_008_176_640_000);
		assert_eq!(values.into_iter().sum::<U256>(), 210);

		let values = vec![U8::from_u64(16); 2];
		assert_eq!(values.into_iter().product::<U8>(), 0);
		assert_eq!(std::iter::empty::<U8>().product::<U8>(), 1);
	}
}
