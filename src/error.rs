#[derive(PartialEq, Eq, Clone, Copy)]
pub struct Error {
	pub kind: ErrorKind,
	pub message: &'static str,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ErrorKind {
	DivisionByZero,
	InvalidDecimal,
	InvalidHex,
	InvalidBinary,
	InvalidBase,
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Error").field("kind", &self.kind).field("message", &self.message).finish()
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.message)
	}
}

impl std::error::Error for Error {}

impl Error {
	pub fn new(kind: ErrorKind, msg: &'static str) -> Self {
		Self { kind, message: msg }
	}

	#[cold]
	pub fn new_division_by_zero(msg: &'static str) -> Self {
		Self::new(ErrorKind::DivisionByZero, msg)
	}

	#[cold]
	pub fn new_invalid_decimal(msg: &'static str) -> Self {
		Self::new(ErrorKind::InvalidDecimal, msg)
	}

	#[cold]
	pub fn new_invalid_hex(msg: &'static str) -> Self {
		Self::new(ErrorKind::InvalidHex, msg)
	}

	#[cold]
	pub fn new_invalid_binary(msg: &'static str) -> Self {
		Self::new(ErrorKind::InvalidBinary, msg)
	}

	#[cold]
	pub fn new_invalid_base(msg: &'static str) -> Self {
		Self::new(ErrorKind::InvalidBase, msg)
	}
}

#[inline(always)]
pub fn assert(what: bool, err: fn() -> Error) -> Result<(), Error> {
	if what { Ok(()) } else { Err(err()) }
}
