// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::decimal::Decimal;

/// Division where a zero integer or decimal divisor yields `None` from
/// `checked_div` and zero from the other variants.
pub trait SafeDiv: Sized {
	fn checked_div(&self, r: &Self) -> Option<Self>;
	fn saturating_div(&self, r: &Self) -> Self;
	fn wrapping_div(&self, r: &Self) -> Self;
}

macro_rules! impl_safe_div_signed {
    ($($t:ty),*) => {
        $(
            impl SafeDiv for $t {
                fn checked_div(&self, r: &Self) -> Option<Self> {
                    <$t>::checked_div(*self, *r)
                }
                fn saturating_div(&self, r: &Self) -> Self {
                    if *r == 0 {
                        0
                    } else {
                        <$t>::saturating_div(*self, *r)
                    }
                }
                fn wrapping_div(&self, r: &Self) -> Self {
                    if *r == 0 {
                        0
                    } else {
                        <$t>::wrapping_div(*self, *r)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_safe_div_unsigned {
    ($($t:ty),*) => {
        $(
            impl SafeDiv for $t {
                fn checked_div(&self, r: &Self) -> Option<Self> {
                    <$t>::checked_div(*self, *r)
                }
                fn saturating_div(&self, r: &Self) -> Self {
                    if *r == 0 {
                        0
                    } else {
                        *self / *r
                    }
                }
                fn wrapping_div(&self, r: &Self) -> Self {
                    if *r == 0 {
                        0
                    } else {
                        *self / *r
                    }
                }
            }
        )*
    };
}

impl_safe_div_signed!(i8, i16, i32, i64);
impl_safe_div_unsigned!(u8, u16, u32, u64);

macro_rules! impl_safe_div_float {
	($($t:ty),*) => {
		$(
			impl SafeDiv for $t {
				fn checked_div(&self, r: &Self) -> Option<Self> {
					let result = *self / *r;
					if result.is_finite() || !self.is_finite() || !r.is_finite() { Some(result) } else { None }
				}

				fn saturating_div(&self, r: &Self) -> Self {
					let result = *self / *r;
					if result.is_infinite() && self.is_finite() && r.is_finite() {
						if result.is_sign_positive() { <$t>::MAX } else { <$t>::MIN }
					} else {
						result
					}
				}

				fn wrapping_div(&self, r: &Self) -> Self {
					*self / *r
				}
			}
		)*
	};
}

impl_safe_div_float!(f32, f64);

impl SafeDiv for Decimal {
	fn checked_div(&self, r: &Self) -> Option<Self> {
		Decimal::checked_div(self, r)
	}

	fn saturating_div(&self, r: &Self) -> Self {
		self.checked_div(r).unwrap_or_default()
	}

	fn wrapping_div(&self, r: &Self) -> Self {
		self.checked_div(r).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod signed {
		use super::*;

		#[test]
		fn test_checked_div() {
			assert_eq!(SafeDiv::checked_div(&7i32, &2), Some(3));
			assert_eq!(SafeDiv::checked_div(&-7i32, &2), Some(-3));
			assert_eq!(SafeDiv::checked_div(&7i32, &0), None);
			assert_eq!(SafeDiv::checked_div(&i32::MIN, &-1), None);
		}

		#[test]
		fn test_saturating_div() {
			assert_eq!(SafeDiv::saturating_div(&i8::MIN, &-1), i8::MAX);
			assert_eq!(SafeDiv::saturating_div(&5i8, &0), 0);
		}

		#[test]
		fn test_wrapping_div() {
			assert_eq!(SafeDiv::wrapping_div(&i64::MIN, &-1), i64::MIN);
			assert_eq!(SafeDiv::wrapping_div(&5i64, &0), 0);
		}
	}

	mod unsigned {
		use super::*;

		#[test]
		fn test_checked_div() {
			assert_eq!(SafeDiv::checked_div(&9u16, &2), Some(4));
			assert_eq!(SafeDiv::checked_div(&9u16, &0), None);
		}
	}

	mod float {
		use super::*;

		#[test]
		fn test_division_by_zero_is_ieee() {
			assert_eq!(SafeDiv::wrapping_div(&1.0f64, &0.0), f64::INFINITY);
			assert!(SafeDiv::wrapping_div(&0.0f64, &0.0).is_nan());
			assert_eq!(SafeDiv::checked_div(&1.0f64, &0.0), None);
			assert_eq!(SafeDiv::saturating_div(&-1.0f32, &0.0), f32::MIN);
		}
	}

	mod decimal {
		use super::*;

		#[test]
		fn test_checked_div() {
			let l = Decimal::from(15);
			let r = Decimal::from(2);
			assert_eq!(SafeDiv::checked_div(&l, &r), Some(Decimal::from_parts(75, 1)));
			assert_eq!(SafeDiv::checked_div(&l, &Decimal::zero()), None);
		}
	}
}
