// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

pub mod column;
pub mod container;
pub mod decimal;
pub mod is;
pub mod kind;
pub mod number;

use decimal::Decimal;
use kind::Kind;

/// A single defined value of one of the column kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// A boolean: true or false.
	Bool(bool),
	/// A 1-byte unsigned integer
	Byte(u8),
	/// A 1-byte signed integer
	SByte(i8),
	/// A 2-byte signed integer
	Short(i16),
	/// A 2-byte unsigned integer
	UShort(u16),
	/// A 4-byte signed integer
	Int(i32),
	/// A 4-byte unsigned integer
	UInt(u32),
	/// An 8-byte signed integer
	Long(i64),
	/// An 8-byte unsigned integer
	ULong(u64),
	/// A 4-byte floating point
	Float(f32),
	/// An 8-byte floating point
	Double(f64),
	/// An arbitrary-precision decimal
	Decimal(Decimal),
	/// A UTF-16 code unit
	Char(u16),
}

impl Value {
	pub fn bool(v: bool) -> Self {
		Value::Bool(v)
	}

	pub fn byte(v: u8) -> Self {
		Value::Byte(v)
	}

	pub fn sbyte(v: i8) -> Self {
		Value::SByte(v)
	}

	pub fn short(v: i16) -> Self {
		Value::Short(v)
	}

	pub fn ushort(v: u16) -> Self {
		Value::UShort(v)
	}

	pub fn int(v: i32) -> Self {
		Value::Int(v)
	}

	pub fn uint(v: u32) -> Self {
		Value::UInt(v)
	}

	pub fn long(v: i64) -> Self {
		Value::Long(v)
	}

	pub fn ulong(v: u64) -> Self {
		Value::ULong(v)
	}

	pub fn float(v: f32) -> Self {
		Value::Float(v)
	}

	pub fn double(v: f64) -> Self {
		Value::Double(v)
	}

	pub fn decimal(v: impl Into<Decimal>) -> Self {
		Value::Decimal(v.into())
	}

	pub fn char(v: impl Into<u16>) -> Self {
		Value::Char(v.into())
	}

	pub fn kind(&self) -> Kind {
		match self {
			Value::Bool(_) => Kind::Bool,
			Value::Byte(_) => Kind::Byte,
			Value::SByte(_) => Kind::SByte,
			Value::Short(_) => Kind::Short,
			Value::UShort(_) => Kind::UShort,
			Value::Int(_) => Kind::Int,
			Value::UInt(_) => Kind::UInt,
			Value::Long(_) => Kind::Long,
			Value::ULong(_) => Kind::ULong,
			Value::Float(_) => Kind::Float,
			Value::Double(_) => Kind::Double,
			Value::Decimal(_) => Kind::Decimal,
			Value::Char(_) => Kind::Char,
		}
	}
}

impl PartialOrd for Value {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Value::Bool(l), Value::Bool(r)) => l.partial_cmp(r),
			(Value::Byte(l), Value::Byte(r)) => l.partial_cmp(r),
			(Value::SByte(l), Value::SByte(r)) => l.partial_cmp(r),
			(Value::Short(l), Value::Short(r)) => l.partial_cmp(r),
			(Value::UShort(l), Value::UShort(r)) => l.partial_cmp(r),
			(Value::Int(l), Value::Int(r)) => l.partial_cmp(r),
			(Value::UInt(l), Value::UInt(r)) => l.partial_cmp(r),
			(Value::Long(l), Value::Long(r)) => l.partial_cmp(r),
			(Value::ULong(l), Value::ULong(r)) => l.partial_cmp(r),
			(Value::Float(l), Value::Float(r)) => l.partial_cmp(r),
			(Value::Double(l), Value::Double(r)) => l.partial_cmp(r),
			(Value::Decimal(l), Value::Decimal(r)) => l.partial_cmp(r),
			(Value::Char(l), Value::Char(r)) => l.partial_cmp(r),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Bool(true) => f.write_str("true"),
			Value::Bool(false) => f.write_str("false"),
			Value::Byte(value) => Display::fmt(value, f),
			Value::SByte(value) => Display::fmt(value, f),
			Value::Short(value) => Display::fmt(value, f),
			Value::UShort(value) => Display::fmt(value, f),
			Value::Int(value) => Display::fmt(value, f),
			Value::UInt(value) => Display::fmt(value, f),
			Value::Long(value) => Display::fmt(value, f),
			Value::ULong(value) => Display::fmt(value, f),
			Value::Float(value) => Display::fmt(value, f),
			Value::Double(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
			Value::Char(value) => match char::from_u32(*value as u32) {
				Some(c) => write!(f, "'{}'", c),
				None => write!(f, "'\\u{{{:04x}}}'", value),
			},
		}
	}
}

macro_rules! impl_from_primitive {
	($($t:ty => $variant:ident),*) => {
		$(
			impl From<$t> for Value {
				fn from(value: $t) -> Self {
					Value::$variant(value)
				}
			}
		)*
	};
}

impl_from_primitive!(
	bool => Bool,
	u8 => Byte,
	i8 => SByte,
	i16 => Short,
	u16 => UShort,
	i32 => Int,
	u32 => UInt,
	i64 => Long,
	u64 => ULong,
	f32 => Float,
	f64 => Double,
	Decimal => Decimal
);
