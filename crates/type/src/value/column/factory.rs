// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	util::bitvec::BitVec,
	value::{
		Value,
		column::ColumnData,
		container::{BoolContainer, NumberContainer},
		decimal::Decimal,
	},
};

macro_rules! number_factory {
	($($name:ident => $variant:ident($t:ty)),* $(,)?) => {
		paste::paste! {
			impl ColumnData {
				$(
					pub fn $name(data: impl IntoIterator<Item = $t>) -> Self {
						ColumnData::$variant(NumberContainer::from_vec(data.into_iter().collect()))
					}

					pub fn [<$name _with_bitvec>](data: impl IntoIterator<Item = $t>, bitvec: impl Into<BitVec>) -> Self {
						ColumnData::$variant(NumberContainer::new(data.into_iter().collect(), bitvec.into()))
					}

					pub fn [<$name _optional>](data: impl IntoIterator<Item = Option<$t>>) -> Self {
						ColumnData::$variant(NumberContainer::from_optional(data))
					}
				)*
			}
		}
	};
}

number_factory!(
	byte => Byte(u8),
	sbyte => SByte(i8),
	short => Short(i16),
	ushort => UShort(u16),
	int => Int(i32),
	uint => UInt(u32),
	long => Long(i64),
	ulong => ULong(u64),
	float => Float(f32),
	double => Double(f64),
	decimal => Decimal(Decimal),
	char => Char(u16),
);

impl ColumnData {
	pub fn bool(data: impl IntoIterator<Item = bool>) -> Self {
		ColumnData::Bool(BoolContainer::from_vec(data.into_iter().collect()))
	}

	pub fn bool_with_bitvec(data: impl IntoIterator<Item = bool>, bitvec: impl Into<BitVec>) -> Self {
		ColumnData::Bool(BoolContainer::new(data.into_iter().collect(), bitvec.into()))
	}

	pub fn bool_optional(data: impl IntoIterator<Item = Option<bool>>) -> Self {
		ColumnData::Bool(BoolContainer::from_optional(data))
	}

	/// A column of `len` copies of `value`.
	pub fn from_value(value: &Value, len: usize) -> Self {
		match value {
			Value::Bool(v) => ColumnData::bool(std::iter::repeat_n(*v, len)),
			Value::Byte(v) => ColumnData::byte(std::iter::repeat_n(*v, len)),
			Value::SByte(v) => ColumnData::sbyte(std::iter::repeat_n(*v, len)),
			Value::Short(v) => ColumnData::short(std::iter::repeat_n(*v, len)),
			Value::UShort(v) => ColumnData::ushort(std::iter::repeat_n(*v, len)),
			Value::Int(v) => ColumnData::int(std::iter::repeat_n(*v, len)),
			Value::UInt(v) => ColumnData::uint(std::iter::repeat_n(*v, len)),
			Value::Long(v) => ColumnData::long(std::iter::repeat_n(*v, len)),
			Value::ULong(v) => ColumnData::ulong(std::iter::repeat_n(*v, len)),
			Value::Float(v) => ColumnData::float(std::iter::repeat_n(*v, len)),
			Value::Double(v) => ColumnData::double(std::iter::repeat_n(*v, len)),
			Value::Decimal(v) => ColumnData::decimal(std::iter::repeat_n(v.clone(), len)),
			Value::Char(v) => ColumnData::char(std::iter::repeat_n(*v, len)),
		}
	}
}
