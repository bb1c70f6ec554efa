// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tessera_type::{
	BinaryOp, Kind, TypeError,
	value::number::safe::{SafeAdd, SafeDiv, SafeMul, SafeRemainder, SafeSub, ZeroDivisor},
};

use crate::config::{ArithmeticConfig, OverflowPolicy};

/// Applies the configured overflow policy to a single pair of operands.
///
/// `Ok(None)` marks the produced slot undefined.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
	pub(crate) config: ArithmeticConfig,
}

impl EvaluationContext {
	pub fn new(config: ArithmeticConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn overflow_policy(&self) -> OverflowPolicy {
		self.config.overflow
	}

	fn overflow(op: BinaryOp, kind: Kind) -> tessera_type::Error {
		TypeError::Overflow {
			op,
			kind,
		}
		.into()
	}

	fn division_by_zero(op: BinaryOp, kind: Kind) -> tessera_type::Error {
		TypeError::DivisionByZero {
			op,
			kind,
		}
		.into()
	}
}

impl EvaluationContext {
	pub(crate) fn add<T: SafeAdd>(&self, l: &T, r: &T, kind: Kind) -> tessera_type::Result<Option<T>> {
		match self.overflow_policy() {
			OverflowPolicy::Wrap => Ok(Some(l.wrapping_add(r))),
			OverflowPolicy::Saturate => Ok(Some(l.saturating_add(r))),
			OverflowPolicy::Error => {
				l.checked_add(r).ok_or_else(|| Self::overflow(BinaryOp::Add, kind)).map(Some)
			}
			OverflowPolicy::Undefined => Ok(l.checked_add(r)),
		}
	}
}

impl EvaluationContext {
	pub(crate) fn sub<T: SafeSub>(&self, l: &T, r: &T, kind: Kind) -> tessera_type::Result<Option<T>> {
		match self.overflow_policy() {
			OverflowPolicy::Wrap => Ok(Some(l.wrapping_sub(r))),
			OverflowPolicy::Saturate => Ok(Some(l.saturating_sub(r))),
			OverflowPolicy::Error => {
				l.checked_sub(r).ok_or_else(|| Self::overflow(BinaryOp::Subtract, kind)).map(Some)
			}
			OverflowPolicy::Undefined => Ok(l.checked_sub(r)),
		}
	}
}

impl EvaluationContext {
	pub(crate) fn mul<T: SafeMul>(&self, l: &T, r: &T, kind: Kind) -> tessera_type::Result<Option<T>> {
		match self.overflow_policy() {
			OverflowPolicy::Wrap => Ok(Some(l.wrapping_mul(r))),
			OverflowPolicy::Saturate => Ok(Some(l.saturating_mul(r))),
			OverflowPolicy::Error => {
				l.checked_mul(r).ok_or_else(|| Self::overflow(BinaryOp::Multiply, kind)).map(Some)
			}
			OverflowPolicy::Undefined => Ok(l.checked_mul(r)),
		}
	}
}

impl EvaluationContext {
	pub(crate) fn div<T>(&self, l: &T, r: &T, kind: Kind) -> tessera_type::Result<Option<T>>
	where
		T: SafeDiv + ZeroDivisor,
	{
		if r.is_zero_divisor() {
			return match self.overflow_policy() {
				OverflowPolicy::Undefined => Ok(None),
				_ => Err(Self::division_by_zero(BinaryOp::Divide, kind)),
			};
		}

		match self.overflow_policy() {
			OverflowPolicy::Wrap => Ok(Some(l.wrapping_div(r))),
			OverflowPolicy::Saturate => Ok(Some(l.saturating_div(r))),
			OverflowPolicy::Error => {
				l.checked_div(r).ok_or_else(|| Self::overflow(BinaryOp::Divide, kind)).map(Some)
			}
			OverflowPolicy::Undefined => Ok(l.checked_div(r)),
		}
	}
}

impl EvaluationContext {
	pub(crate) fn rem<T>(&self, l: &T, r: &T, kind: Kind) -> tessera_type::Result<Option<T>>
	where
		T: SafeRemainder + ZeroDivisor,
	{
		if r.is_zero_divisor() {
			return match self.overflow_policy() {
				OverflowPolicy::Undefined => Ok(None),
				_ => Err(Self::division_by_zero(BinaryOp::Modulo, kind)),
			};
		}

		match self.overflow_policy() {
			OverflowPolicy::Wrap => Ok(Some(l.wrapping_rem(r))),
			OverflowPolicy::Saturate => Ok(Some(l.saturating_rem(r))),
			OverflowPolicy::Error => {
				l.checked_rem(r).ok_or_else(|| Self::overflow(BinaryOp::Modulo, kind)).map(Some)
			}
			OverflowPolicy::Undefined => Ok(l.checked_rem(r)),
		}
	}
}

#[cfg(test)]
mod tests {
	use tessera_type::Decimal;

	use super::*;

	fn context(overflow: OverflowPolicy) -> EvaluationContext {
		EvaluationContext::new(ArithmeticConfig::default().with_overflow(overflow))
	}

	mod add {
		use super::*;

		#[test]
		fn test_wrap() {
			assert_eq!(context(OverflowPolicy::Wrap).add(&i8::MAX, &1, Kind::SByte).unwrap(), Some(i8::MIN));
		}

		#[test]
		fn test_saturate() {
			assert_eq!(context(OverflowPolicy::Saturate).add(&u8::MAX, &1, Kind::Byte).unwrap(), Some(u8::MAX));
		}

		#[test]
		fn test_error() {
			let err = context(OverflowPolicy::Error).add(&i32::MAX, &1, Kind::Int).unwrap_err();
			assert_eq!(err.code(), "NUMBER_002");
		}

		#[test]
		fn test_undefined() {
			assert_eq!(context(OverflowPolicy::Undefined).add(&i64::MAX, &1, Kind::Long).unwrap(), None);
			assert_eq!(context(OverflowPolicy::Undefined).add(&1i64, &1, Kind::Long).unwrap(), Some(2));
		}
	}

	mod sub {
		use super::*;

		#[test]
		fn test_wrap() {
			assert_eq!(context(OverflowPolicy::Wrap).sub(&0u32, &1, Kind::UInt).unwrap(), Some(u32::MAX));
		}

		#[test]
		fn test_saturate() {
			assert_eq!(context(OverflowPolicy::Saturate).sub(&0u32, &1, Kind::UInt).unwrap(), Some(0));
		}
	}

	mod mul {
		use super::*;

		#[test]
		fn test_error() {
			let err = context(OverflowPolicy::Error).mul(&i16::MAX, &2, Kind::Short).unwrap_err();
			assert_eq!(err.code(), "NUMBER_002");
		}

		#[test]
		fn test_float_follows_ieee() {
			let result = context(OverflowPolicy::Wrap).mul(&f64::MAX, &2.0, Kind::Double).unwrap();
			assert_eq!(result, Some(f64::INFINITY));
		}
	}

	mod div {
		use super::*;

		#[test]
		fn test_integer_by_zero() {
			for policy in [OverflowPolicy::Wrap, OverflowPolicy::Saturate, OverflowPolicy::Error] {
				let err = context(policy).div(&1i32, &0, Kind::Int).unwrap_err();
				assert_eq!(err.code(), "NUMBER_001");
			}
			assert_eq!(context(OverflowPolicy::Undefined).div(&1i32, &0, Kind::Int).unwrap(), None);
		}

		#[test]
		fn test_float_by_zero() {
			let result = context(OverflowPolicy::Wrap).div(&1.0f32, &0.0, Kind::Float).unwrap();
			assert_eq!(result, Some(f32::INFINITY));
		}

		#[test]
		fn test_decimal_by_zero() {
			let err = context(OverflowPolicy::Wrap).div(&Decimal::from(1), &Decimal::zero(), Kind::Decimal).unwrap_err();
			assert_eq!(err.code(), "NUMBER_001");
		}

		#[test]
		fn test_min_by_minus_one() {
			assert_eq!(context(OverflowPolicy::Wrap).div(&i32::MIN, &-1, Kind::Int).unwrap(), Some(i32::MIN));
			assert_eq!(context(OverflowPolicy::Saturate).div(&i32::MIN, &-1, Kind::Int).unwrap(), Some(i32::MAX));
			assert_eq!(context(OverflowPolicy::Undefined).div(&i32::MIN, &-1, Kind::Int).unwrap(), None);
		}
	}

	mod rem {
		use super::*;

		#[test]
		fn test_by_zero() {
			let err = context(OverflowPolicy::Saturate).rem(&7u64, &0, Kind::ULong).unwrap_err();
			assert_eq!(err.code(), "NUMBER_001");
		}

		#[test]
		fn test_sign_follows_dividend() {
			assert_eq!(context(OverflowPolicy::Wrap).rem(&-7i32, &2, Kind::Int).unwrap(), Some(-1));
		}
	}
}
