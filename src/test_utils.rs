use rand::Rng;
use std::sync::Once;

use crate::fixed_size::Uint;

/// Sends `log` records to stderr. Safe to call from every test.
pub fn init_logging() {
	static INIT: Once = Once::new();
	INIT.call_once(|| {
		let _ = stderrlog::new().verbosity(2).init();
	});
}

/// Returns a random number. Half of the time it uses the full width, otherwise a random
/// number of limbs, so that short operands are exercised too.
pub fn random<const BITS: usize>(rng: &mut impl Rng) -> Uint<BITS> {
	let len = if rng.gen_bool(0.5) { Uint::<BITS>::LIMBS } else { rng.gen_range(0..=Uint::<BITS>::LIMBS) };
	let limbs: Vec<u32> = (0..len).map(|_| rng.r#gen()).collect();
	Uint::from_limbs(&limbs)
}
