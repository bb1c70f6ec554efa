// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	num::NonZeroU64,
	str::FromStr,
};

use bigdecimal::{BigDecimal, RoundingMode, ToPrimitive, Zero};
use num_bigint::{BigInt, ToBigInt};
use serde::{Deserialize, Serialize};

use crate::Error;

mod parse;

pub use parse::parse_decimal;

/// Arbitrary precision decimal number.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Decimal(BigDecimal);

/// Significant digits kept when a `Double` becomes a decimal.
const DOUBLE_DIGITS: u64 = 15;
/// Significant digits kept when a `Float` becomes a decimal.
const FLOAT_DIGITS: u64 = 7;
/// Significant digits kept in a quotient.
const QUOTIENT_DIGITS: u64 = 28;

impl Decimal {
	/// Largest magnitude a float may have to become a decimal.
	pub const MAX_CAST: u128 = 79_228_162_514_264_337_593_543_950_335;

	pub fn new(value: BigDecimal) -> Self {
		Self(value)
	}

	/// Creates `mantissa * 10^-scale`.
	pub fn from_parts(mantissa: impl Into<BigInt>, scale: i64) -> Self {
		Self(BigDecimal::new(mantissa.into(), scale))
	}

	pub fn zero() -> Self {
		Self(BigDecimal::zero())
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.0
	}

	pub fn into_inner(self) -> BigDecimal {
		self.0
	}

	/// Converts a finite float rounded to 15 significant digits.
	///
	/// `None` for `NaN`, infinities and magnitudes above [`Decimal::MAX_CAST`].
	pub fn from_f64(value: f64) -> Option<Self> {
		if !value.is_finite() {
			return None;
		}
		BigDecimal::try_from(value).ok().and_then(|exact| Self::from_float(exact, DOUBLE_DIGITS))
	}

	/// Converts a finite float rounded to 7 significant digits.
	pub fn from_f32(value: f32) -> Option<Self> {
		if !value.is_finite() {
			return None;
		}
		BigDecimal::try_from(value).ok().and_then(|exact| Self::from_float(exact, FLOAT_DIGITS))
	}

	fn from_float(exact: BigDecimal, digits: u64) -> Option<Self> {
		let rounded = round_significant(&exact, digits)?;
		if rounded.abs() > BigDecimal::from(Self::MAX_CAST) {
			return None;
		}
		Some(Self(rounded))
	}

	/// `self / r` rounded to 28 significant digits, `None` when `r` is zero.
	pub fn checked_div(&self, r: &Self) -> Option<Self> {
		if r.is_zero() {
			return None;
		}
		round_significant(&(&self.0 / &r.0), QUOTIENT_DIGITS).map(Self)
	}

	pub fn to_f64(&self) -> Option<f64> {
		self.0.to_f64()
	}

	pub fn to_f32(&self) -> Option<f32> {
		self.0.to_f32()
	}

	/// Integer part, truncated toward zero.
	pub fn to_bigint(&self) -> Option<BigInt> {
		self.0.to_bigint()
	}
}

fn round_significant(value: &BigDecimal, digits: u64) -> Option<BigDecimal> {
	Some(value.with_precision_round(NonZeroU64::new(digits)?, RoundingMode::HalfEven).normalized())
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let normalized = self.0.normalized();
		let (_, scale) = normalized.as_bigint_and_exponent();
		if scale < 0 {
			Display::fmt(&normalized.with_scale(0), f)
		} else {
			Display::fmt(&normalized, f)
		}
	}
}

impl FromStr for Decimal {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_decimal(s)
	}
}

impl From<BigDecimal> for Decimal {
	fn from(value: BigDecimal) -> Self {
		Self(value)
	}
}

macro_rules! impl_from_integer {
	($($t:ty),*) => {
		$(
			impl From<$t> for Decimal {
				fn from(value: $t) -> Self {
					Self(BigDecimal::from(value))
				}
			}
		)*
	};
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);
