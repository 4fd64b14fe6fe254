//! Fixed-width unsigned integers with wraparound arithmetic.
//!
//! `Uint<BITS>` is an unsigned integer modulo `2 ** BITS`. Every operation truncates its result
//! to the width, so the type behaves like the primitive unsigned integers with `wrapping_*`
//! arithmetic, just with an arbitrary number of bits.
//!
//! ```
//! use ringint::Uint;
//!
//! let a = Uint::<8>::from_u64(250);
//! assert_eq!(a + 10, 4);
//! assert_eq!(Uint::<8>::from_hex("ff").unwrap(), 255);
//! ```
//!
//! Multiplication switches from the schoolbook algorithm to Karatsuba for long operands, and
//! division switches from restoring long division to a binary search. See the `*_THRESHOLD`
//! constants.

#![allow(non_snake_case)]

pub mod blocks;
pub mod error;
pub mod limb;
pub mod limb_buf;
pub mod ll;

mod base_conv;
mod cmp;
mod div;
mod fixed_size;
mod mul;
mod ops;
mod pow;

#[cfg(test)]
mod test_utils;

pub use base_conv::BaseConv;
pub use div::BINARY_SEARCH_THRESHOLD;
pub use error::{Error, ErrorKind};
pub use fixed_size::Uint;
pub use limb::Limb;
pub use mul::KARATSUBA_THRESHOLD;
pub use pow::POW_WINDOW_BITS;

pub type U64 = Uint<64>;
pub type U128 = Uint<128>;
pub type U256 = Uint<256>;
pub type U512 = Uint<512>;
pub type U1024 = Uint<1024>;
pub type U2048 = Uint<2048>;

#[doc(hidden)]
#[macro_export]
macro_rules! testvec {
	($($x:expr),* $(,)?) => {{
		let v: Vec<$crate::limb::Limb> = vec![$($crate::limb::Limb($x)),*];
		v
	}};
}
