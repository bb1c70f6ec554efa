// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Bit shifts by an `i32` amount.
///
/// Kinds narrower than 32 bits are widened to `i32`, shifted and truncated back.
/// The amount is masked to the width of the shifted value (5 bits for 32-bit
/// operands, 6 bits for 64-bit operands). Right shifts of signed values are
/// arithmetic.
pub trait Shift: Sized {
	fn shift_left(&self, amount: i32) -> Self;
	fn shift_right(&self, amount: i32) -> Self;
}

macro_rules! impl_shift_widened {
	($($t:ty),*) => {
		$(
			impl Shift for $t {
				fn shift_left(&self, amount: i32) -> Self {
					(*self as i32).wrapping_shl(amount as u32) as $t
				}

				fn shift_right(&self, amount: i32) -> Self {
					(*self as i32).wrapping_shr(amount as u32) as $t
				}
			}
		)*
	};
}

macro_rules! impl_shift_native {
	($($t:ty),*) => {
		$(
			impl Shift for $t {
				fn shift_left(&self, amount: i32) -> Self {
					self.wrapping_shl(amount as u32)
				}

				fn shift_right(&self, amount: i32) -> Self {
					self.wrapping_shr(amount as u32)
				}
			}
		)*
	};
}

impl_shift_widened!(i8, i16, u8, u16);
impl_shift_native!(i32, i64, u32, u64);

#[cfg(test)]
mod tests {
	use super::Shift;

	#[test]
	fn test_byte_left_shift() {
		assert_eq!(0b0000_0011u8.shift_left(2), 0b0000_1100);
		assert_eq!(0b1000_0001u8.shift_left(1), 0b0000_0010);
	}

	#[test]
	fn test_narrow_amount_is_masked_to_five_bits() {
		assert_eq!(1u8.shift_left(8), 0);
		assert_eq!(1u8.shift_left(32), 1);
		assert_eq!(1u16.shift_left(33), 2);
	}

	#[test]
	fn test_signed_right_shift_is_arithmetic() {
		assert_eq!((-8i8).shift_right(1), -4);
		assert_eq!((-1i16).shift_right(15), -1);
		assert_eq!(i32::MIN.shift_right(31), -1);
	}

	#[test]
	fn test_unsigned_right_shift_is_logical() {
		assert_eq!(0x80u8.shift_right(7), 1);
		assert_eq!(u32::MAX.shift_right(31), 1);
	}

	#[test]
	fn test_wide_amount_masks() {
		assert_eq!(1i32.shift_left(33), 2);
		assert_eq!(1i64.shift_left(33), 1 << 33);
		assert_eq!(1u64.shift_left(65), 2);
	}

	#[test]
	fn test_negative_amount() {
		assert_eq!(1i32.shift_left(-1), i32::MIN);
		assert_eq!(1u64.shift_left(-1), 1 << 63);
	}
}
