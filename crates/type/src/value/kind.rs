// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Element kinds a column can hold
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
	/// A boolean
	Bool,
	/// A 1-byte unsigned integer
	Byte,
	/// A 1-byte signed integer
	SByte,
	/// A 2-byte signed integer
	Short,
	/// A 2-byte unsigned integer
	UShort,
	/// A 4-byte signed integer
	Int,
	/// A 4-byte unsigned integer
	UInt,
	/// An 8-byte signed integer
	Long,
	/// An 8-byte unsigned integer
	ULong,
	/// A 4-byte floating point
	Float,
	/// An 8-byte floating point
	Double,
	/// An arbitrary precision decimal
	Decimal,
	/// A UTF-16 code unit
	Char,
}

impl Kind {
	pub const ALL: [Kind; 13] = [
		Kind::Bool,
		Kind::Byte,
		Kind::SByte,
		Kind::Short,
		Kind::UShort,
		Kind::Int,
		Kind::UInt,
		Kind::Long,
		Kind::ULong,
		Kind::Float,
		Kind::Double,
		Kind::Decimal,
		Kind::Char,
	];

	pub fn is_char(&self) -> bool {
		matches!(self, Kind::Char)
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Kind::SByte | Kind::Short | Kind::Int | Kind::Long)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Kind::Byte | Kind::UShort | Kind::UInt | Kind::ULong)
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Kind::Float | Kind::Double)
	}

	pub fn is_decimal(&self) -> bool {
		matches!(self, Kind::Decimal)
	}

	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point() || self.is_decimal()
	}

	/// Kinds a left or right shift may be applied to.
	pub fn is_shiftable(&self) -> bool {
		self.is_integer() || self.is_char()
	}

	/// Width in bytes of integer kinds and char.
	pub fn width(&self) -> Option<usize> {
		match self {
			Kind::Byte | Kind::SByte => Some(1),
			Kind::Short | Kind::UShort | Kind::Char => Some(2),
			Kind::Int | Kind::UInt => Some(4),
			Kind::Long | Kind::ULong => Some(8),
			_ => None,
		}
	}

	/// Precedence among numeric kinds, `None` for bool and char.
	pub fn rank(&self) -> Option<u8> {
		match self {
			Kind::Byte | Kind::SByte => Some(1),
			Kind::Short | Kind::UShort => Some(2),
			Kind::Int | Kind::UInt => Some(3),
			Kind::Long | Kind::ULong => Some(4),
			Kind::Float => Some(5),
			Kind::Double => Some(6),
			Kind::Decimal => Some(7),
			Kind::Bool | Kind::Char => None,
		}
	}
}

impl Display for Kind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Kind::Bool => f.write_str("Bool"),
			Kind::Byte => f.write_str("Byte"),
			Kind::SByte => f.write_str("SByte"),
			Kind::Short => f.write_str("Short"),
			Kind::UShort => f.write_str("UShort"),
			Kind::Int => f.write_str("Int"),
			Kind::UInt => f.write_str("UInt"),
			Kind::Long => f.write_str("Long"),
			Kind::ULong => f.write_str("ULong"),
			Kind::Float => f.write_str("Float"),
			Kind::Double => f.write_str("Double"),
			Kind::Decimal => f.write_str("Decimal"),
			Kind::Char => f.write_str("Char"),
		}
	}
}

impl FromStr for Kind {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"BOOL" => Ok(Kind::Bool),
			"BYTE" => Ok(Kind::Byte),
			"SBYTE" => Ok(Kind::SByte),
			"SHORT" => Ok(Kind::Short),
			"USHORT" => Ok(Kind::UShort),
			"INT" => Ok(Kind::Int),
			"UINT" => Ok(Kind::UInt),
			"LONG" => Ok(Kind::Long),
			"ULONG" => Ok(Kind::ULong),
			"FLOAT" => Ok(Kind::Float),
			"DOUBLE" => Ok(Kind::Double),
			"DECIMAL" => Ok(Kind::Decimal),
			"CHAR" => Ok(Kind::Char),
			_ => Err(TypeError::UnknownKind {
				name: s.to_string(),
			}),
		}
	}
}
