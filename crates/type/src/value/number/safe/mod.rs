// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod add;
mod div;
mod mul;
mod remainder;
mod shift;
mod sub;

pub use add::SafeAdd;
pub use div::SafeDiv;
pub use mul::SafeMul;
pub use remainder::SafeRemainder;
pub use shift::Shift;
pub use sub::SafeSub;

use crate::value::decimal::Decimal;

/// Divisors for which division and remainder are undefined.
pub trait ZeroDivisor {
	fn is_zero_divisor(&self) -> bool;
}

macro_rules! impl_zero_divisor_int {
	($($t:ty),*) => {
		$(
			impl ZeroDivisor for $t {
				fn is_zero_divisor(&self) -> bool {
					*self == 0
				}
			}
		)*
	};
}

impl_zero_divisor_int!(i8, i16, i32, i64, u8, u16, u32, u64);

// IEEE-754 defines division by zero.
impl ZeroDivisor for f32 {
	fn is_zero_divisor(&self) -> bool {
		false
	}
}

impl ZeroDivisor for f64 {
	fn is_zero_divisor(&self) -> bool {
		false
	}
}

impl ZeroDivisor for Decimal {
	fn is_zero_divisor(&self) -> bool {
		self.is_zero()
	}
}
