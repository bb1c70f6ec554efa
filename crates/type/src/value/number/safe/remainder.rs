// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::decimal::Decimal;

pub trait SafeRemainder: Sized {
	fn checked_rem(&self, r: &Self) -> Option<Self>;
	fn saturating_rem(&self, r: &Self) -> Self;
	fn wrapping_rem(&self, r: &Self) -> Self;
}

macro_rules! impl_safe_rem_signed {
    ($($t:ty),*) => {
        $(
            impl SafeRemainder for $t {
                fn checked_rem(&self, r: &Self) -> Option<Self> {
                    if *r == 0 || (*self == <$t>::MIN && *r == -1) {
                        None
                    } else {
                        Some(*self % *r)
                    }
                }
                fn saturating_rem(&self, r: &Self) -> Self {
                    if *r == 0 {
                        0
                    } else if *self == <$t>::MIN && *r == -1 {
                        0
                    } else {
                        *self % *r
                    }
                }
                fn wrapping_rem(&self, r: &Self) -> Self {
                    if *r == 0 {
                        0
                    } else {
                        (*self).wrapping_rem(*r)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_safe_rem_unsigned {
    ($($t:ty),*) => {
        $(
            impl SafeRemainder for $t {
                fn checked_rem(&self, r: &Self) -> Option<Self> {
                    if *r == 0 {
                        None
                    } else {
                        Some(*self % *r)
                    }
                }
                fn saturating_rem(&self, r: &Self) -> Self {
                    if *r == 0 {
                        0
                    } else {
                        *self % *r
                    }
                }
                fn wrapping_rem(&self, r: &Self) -> Self {
                    if *r == 0 {
                        0
                    } else {
                        *self % *r
                    }
                }
            }
        )*
    };
}

impl_safe_rem_signed!(i8, i16, i32, i64);
impl_safe_rem_unsigned!(u8, u16, u32, u64);

macro_rules! impl_safe_rem_float {
	($($t:ty),*) => {
		$(
			impl SafeRemainder for $t {
				fn checked_rem(&self, r: &Self) -> Option<Self> {
					let result = *self % *r;
					if result.is_finite() || !self.is_finite() || !r.is_finite() { Some(result) } else { None }
				}

				fn saturating_rem(&self, r: &Self) -> Self {
					*self % *r
				}

				fn wrapping_rem(&self, r: &Self) -> Self {
					*self % *r
				}
			}
		)*
	};
}

impl_safe_rem_float!(f32, f64);

impl SafeRemainder for Decimal {
	fn checked_rem(&self, r: &Self) -> Option<Self> {
		if r.is_zero() {
			None
		} else {
			Some(Decimal::new(self.inner() % r.inner()))
		}
	}

	fn saturating_rem(&self, r: &Self) -> Self {
		self.checked_rem(r).unwrap_or_default()
	}

	fn wrapping_rem(&self, r: &Self) -> Self {
		self.checked_rem(r).unwrap_or_default()
	}
}
