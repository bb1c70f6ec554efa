// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::decimal::Decimal;

pub trait SafeMul: Sized {
	fn checked_mul(&self, r: &Self) -> Option<Self>;
	fn saturating_mul(&self, r: &Self) -> Self;
	fn wrapping_mul(&self, r: &Self) -> Self;
}

macro_rules! impl_safe_mul {
	($($t:ty),*) => {
		$(
			impl SafeMul for $t {
				fn checked_mul(&self, r: &Self) -> Option<Self> {
					<$t>::checked_mul(*self, *r)
				}
				fn saturating_mul(&self, r: &Self) -> Self {
					<$t>::saturating_mul(*self, *r)
				}
				fn wrapping_mul(&self, r: &Self) -> Self {
					<$t>::wrapping_mul(*self, *r)
				}
			}
		)*
	};
}

impl_safe_mul!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_safe_mul_float {
	($($t:ty),*) => {
		$(
			impl SafeMul for $t {
				fn checked_mul(&self, r: &Self) -> Option<Self> {
					let result = *self * *r;
					if result.is_finite() || !self.is_finite() || !r.is_finite() { Some(result) } else { None }
				}

				fn saturating_mul(&self, r: &Self) -> Self {
					let result = *self * *r;
					if result.is_infinite() && self.is_finite() && r.is_finite() {
						if result.is_sign_positive() { <$t>::MAX } else { <$t>::MIN }
					} else {
						result
					}
				}

				fn wrapping_mul(&self, r: &Self) -> Self {
					*self * *r
				}
			}
		)*
	};
}

impl_safe_mul_float!(f32, f64);

impl SafeMul for Decimal {
	fn checked_mul(&self, r: &Self) -> Option<Self> {
		Some(Decimal::new(self.inner() * r.inner()))
	}

	fn saturating_mul(&self, r: &Self) -> Self {
		Decimal::new(self.inner() * r.inner())
	}

	fn wrapping_mul(&self, r: &Self) -> Self {
		Decimal::new(self.inner() * r.inner())
	}
}
