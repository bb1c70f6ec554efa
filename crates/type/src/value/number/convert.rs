// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use num_bigint::BigInt;
use num_traits::AsPrimitive;

use crate::{
	Result,
	error::TypeError,
	return_error,
	value::{Value, decimal::Decimal, is::IsNumber, kind::Kind},
};

/// Fixed width numbers convertible to every other fixed width number with `as` semantics.
pub trait Primitive:
	IsNumber
	+ Copy
	+ AsPrimitive<u8>
	+ AsPrimitive<i8>
	+ AsPrimitive<i16>
	+ AsPrimitive<u16>
	+ AsPrimitive<i32>
	+ AsPrimitive<u32>
	+ AsPrimitive<i64>
	+ AsPrimitive<u64>
	+ AsPrimitive<f32>
	+ AsPrimitive<f64>
{
	/// Exact for integers, rounded to the float's significant digits otherwise. `None` when out of range.
	fn to_decimal(self) -> Option<Decimal>;
}

macro_rules! impl_primitive_int {
	($($t:ty),*) => {
		$(
			impl Primitive for $t {
				fn to_decimal(self) -> Option<Decimal> {
					Some(Decimal::from(self))
				}
			}
		)*
	};
}

impl_primitive_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Primitive for f32 {
	fn to_decimal(self) -> Option<Decimal> {
		Decimal::from_f32(self)
	}
}

impl Primitive for f64 {
	fn to_decimal(self) -> Option<Decimal> {
		Decimal::from_f64(self)
	}
}

/// Integer part of `value` as `T`, truncated toward zero, `None` when out of range.
pub(crate) fn decimal_to_int<T>(value: &Decimal) -> Option<T>
where
	T: TryFrom<BigInt>,
{
	value.to_bigint().and_then(|int_part| T::try_from(int_part).ok())
}

pub(crate) fn out_of_range(from: Kind, to: Kind, value: impl ToString) -> crate::Error {
	TypeError::ConversionOutOfRange {
		from,
		to,
		value: value.to_string(),
	}
	.into()
}

pub(crate) fn unsupported(from: Kind, to: Kind) -> crate::Error {
	TypeError::UnsupportedConversion {
		from,
		to,
	}
	.into()
}

fn primitive_to<S: Primitive>(value: S, from: Kind, to: Kind) -> Result<Value> {
	Ok(match to {
		Kind::Byte => Value::Byte(AsPrimitive::<u8>::as_(value)),
		Kind::SByte => Value::SByte(AsPrimitive::<i8>::as_(value)),
		Kind::Short => Value::Short(AsPrimitive::<i16>::as_(value)),
		Kind::UShort => Value::UShort(AsPrimitive::<u16>::as_(value)),
		Kind::Int => Value::Int(AsPrimitive::<i32>::as_(value)),
		Kind::UInt => Value::UInt(AsPrimitive::<u32>::as_(value)),
		Kind::Long => Value::Long(AsPrimitive::<i64>::as_(value)),
		Kind::ULong => Value::ULong(AsPrimitive::<u64>::as_(value)),
		Kind::Float => Value::Float(AsPrimitive::<f32>::as_(value)),
		Kind::Double => Value::Double(AsPrimitive::<f64>::as_(value)),
		Kind::Char => Value::Char(AsPrimitive::<u16>::as_(value)),
		Kind::Decimal => match value.to_decimal() {
			Some(decimal) => Value::Decimal(decimal),
			None => return Err(out_of_range(from, to, value)),
		},
		Kind::Bool => return Err(unsupported(from, to)),
	})
}

fn decimal_to(value: &Decimal, to: Kind) -> Result<Value> {
	let converted = match to {
		Kind::Byte => decimal_to_int(value).map(Value::Byte),
		Kind::SByte => decimal_to_int(value).map(Value::SByte),
		Kind::Short => decimal_to_int(value).map(Value::Short),
		Kind::UShort => decimal_to_int(value).map(Value::UShort),
		Kind::Int => decimal_to_int(value).map(Value::Int),
		Kind::UInt => decimal_to_int(value).map(Value::UInt),
		Kind::Long => decimal_to_int(value).map(Value::Long),
		Kind::ULong => decimal_to_int(value).map(Value::ULong),
		Kind::Char => decimal_to_int(value).map(Value::Char),
		Kind::Float => value.to_f32().map(Value::Float),
		Kind::Double => value.to_f64().map(Value::Double),
		Kind::Decimal => Some(Value::Decimal(value.clone())),
		Kind::Bool => return Err(unsupported(Kind::Decimal, to)),
	};
	match converted {
		Some(v) => Ok(v),
		None => Err(out_of_range(Kind::Decimal, to, value)),
	}
}

impl Value {
	/// Converts this value to `target` with the same semantics as column conversion.
	pub fn convert_to(&self, target: Kind) -> Result<Value> {
		let from = self.kind();
		if from == target {
			return Ok(self.clone());
		}
		match self {
			Value::Bool(_) => return_error!(TypeError::UnsupportedConversion {
				from,
				to: target,
			}),
			Value::Byte(v) => primitive_to(*v, from, target),
			Value::SByte(v) => primitive_to(*v, from, target),
			Value::Short(v) => primitive_to(*v, from, target),
			Value::UShort(v) => primitive_to(*v, from, target),
			Value::Int(v) => primitive_to(*v, from, target),
			Value::UInt(v) => primitive_to(*v, from, target),
			Value::Long(v) => primitive_to(*v, from, target),
			Value::ULong(v) => primitive_to(*v, from, target),
			Value::Float(v) => primitive_to(*v, from, target),
			Value::Double(v) => primitive_to(*v, from, target),
			Value::Char(v) => primitive_to(*v, from, target),
			Value::Decimal(v) => decimal_to(v, target),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod widening {
		use super::*;

		#[test]
		fn test_byte_to_int() {
			assert_eq!(Value::byte(200).convert_to(Kind::Int).unwrap(), Value::int(200));
		}

		#[test]
		fn test_sbyte_to_ulong_sign_extends() {
			assert_eq!(Value::sbyte(-1).convert_to(Kind::ULong).unwrap(), Value::ulong(u64::MAX));
		}

		#[test]
		fn test_int_to_decimal_is_exact() {
			assert_eq!(
				Value::long(i64::MAX).convert_to(Kind::Decimal).unwrap(),
				Value::decimal(Decimal::from(i64::MAX))
			);
		}

		#[test]
		fn test_double_to_decimal() {
			assert_eq!(
				Value::double(2.5).convert_to(Kind::Decimal).unwrap(),
				Value::decimal(Decimal::from_parts(25, 1))
			);
		}

		#[test]
		fn test_double_to_decimal_rounds() {
			let value = Value::double(0.1 + 0.2).convert_to(Kind::Decimal).unwrap();
			assert_eq!(value, Value::decimal(Decimal::from_parts(3, 1)));
		}
	}

	mod narrowing {
		use super::*;

		#[test]
		fn test_int_to_byte_wraps() {
			assert_eq!(Value::int(300).convert_to(Kind::Byte).unwrap(), Value::byte(44));
		}

		#[test]
		fn test_double_to_int_truncates() {
			assert_eq!(Value::double(-7.9).convert_to(Kind::Int).unwrap(), Value::int(-7));
		}

		#[test]
		fn test_decimal_to_int_truncates() {
			let value = Value::decimal(Decimal::from_parts(79, 1));
			assert_eq!(value.convert_to(Kind::Int).unwrap(), Value::int(7));
		}

		#[test]
		fn test_decimal_out_of_range() {
			let value = Value::decimal(Decimal::from(300));
			let err = value.convert_to(Kind::Byte).unwrap_err();
			assert_eq!(err.code(), "CAST_002");
		}

		#[test]
		fn test_decimal_to_double() {
			let value = Value::decimal(Decimal::from_parts(75, 1));
			assert_eq!(value.convert_to(Kind::Double).unwrap(), Value::double(7.5));
		}
	}

	mod non_finite {
		use super::*;

		#[test]
		fn test_nan_to_decimal() {
			let err = Value::double(f64::NAN).convert_to(Kind::Decimal).unwrap_err();
			assert_eq!(err.code(), "CAST_002");
		}

		#[test]
		fn test_infinity_to_decimal() {
			let err = Value::float(f32::INFINITY).convert_to(Kind::Decimal).unwrap_err();
			assert_eq!(err.code(), "CAST_002");
		}

		#[test]
		fn test_too_large_for_decimal() {
			let err = Value::double(1e30).convert_to(Kind::Decimal).unwrap_err();
			assert_eq!(err.code(), "CAST_002");
		}
	}

	mod boolean {
		use super::*;

		#[test]
		fn test_bool_to_bool() {
			assert_eq!(Value::bool(true).convert_to(Kind::Bool).unwrap(), Value::bool(true));
		}

		#[test]
		fn test_bool_to_int() {
			let err = Value::bool(true).convert_to(Kind::Int).unwrap_err();
			assert_eq!(err.code(), "CAST_001");
		}

		#[test]
		fn test_int_to_bool() {
			let err = Value::int(1).convert_to(Kind::Bool).unwrap_err();
			assert_eq!(err.code(), "CAST_001");
		}
	}

	#[test]
	fn test_char_round_trip() {
		let value = Value::char(b'A');
		assert_eq!(value.convert_to(Kind::Int).unwrap(), Value::int(65));
		assert_eq!(Value::int(66).convert_to(Kind::Char).unwrap(), Value::char(b'B'));
	}
}
