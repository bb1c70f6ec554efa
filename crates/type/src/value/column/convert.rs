// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use num_traits::AsPrimitive;

use crate::{
	Result,
	value::{
		column::ColumnData,
		container::NumberContainer,
		decimal::Decimal,
		is::IsNumber,
		kind::Kind,
		number::{
			Primitive,
			convert::{decimal_to_int, out_of_range, unsupported},
		},
	},
};

impl ColumnData {
	/// Copies this column into a column of `target`.
	///
	/// Undefined slots stay undefined and are never converted. Converting to the
	/// column's own kind shares the underlying buffer.
	pub fn convert_to(&self, target: Kind) -> Result<ColumnData> {
		let from = self.kind();
		if from == target {
			return Ok(self.clone());
		}
		match self {
			ColumnData::Bool(_) => Err(unsupported(from, target)),
			ColumnData::Byte(c) => from_primitive(c, from, target),
			ColumnData::SByte(c) => from_primitive(c, from, target),
			ColumnData::Short(c) => from_primitive(c, from, target),
			ColumnData::UShort(c) => from_primitive(c, from, target),
			ColumnData::Int(c) => from_primitive(c, from, target),
			ColumnData::UInt(c) => from_primitive(c, from, target),
			ColumnData::Long(c) => from_primitive(c, from, target),
			ColumnData::ULong(c) => from_primitive(c, from, target),
			ColumnData::Float(c) => from_primitive(c, from, target),
			ColumnData::Double(c) => from_primitive(c, from, target),
			ColumnData::Char(c) => from_primitive(c, from, target),
			ColumnData::Decimal(c) => from_decimal(c, target),
		}
	}
}

fn convert_vec<S, T>(
	container: &NumberContainer<S>,
	from: Kind,
	to: Kind,
	convert: impl Fn(&S) -> Option<T>,
) -> Result<NumberContainer<T>>
where
	S: IsNumber,
	T: IsNumber,
{
	let mut data = Vec::with_capacity(container.len());
	for (idx, value) in container.iter().enumerate() {
		match value {
			Some(v) => match convert(v) {
				Some(converted) => data.push(converted),
				None => return Err(out_of_range(from, to, v)),
			},
			None => {
				debug_assert!(!container.is_defined(idx));
				data.push(T::default())
			}
		}
	}
	Ok(NumberContainer::new(data, container.bitvec().clone()))
}

fn cast_vec<S, T>(container: &NumberContainer<S>) -> NumberContainer<T>
where
	S: Primitive + AsPrimitive<T>,
	T: IsNumber + Copy,
{
	let data = container.iter().map(|v| v.map_or_else(T::default, |v| AsPrimitive::<T>::as_(*v))).collect();
	NumberContainer::new(data, container.bitvec().clone())
}

fn from_primitive<S: Primitive>(container: &NumberContainer<S>, from: Kind, to: Kind) -> Result<ColumnData> {
	Ok(match to {
		Kind::Byte => ColumnData::Byte(cast_vec::<S, u8>(container)),
		Kind::SByte => ColumnData::SByte(cast_vec::<S, i8>(container)),
		Kind::Short => ColumnData::Short(cast_vec::<S, i16>(container)),
		Kind::UShort => ColumnData::UShort(cast_vec::<S, u16>(container)),
		Kind::Int => ColumnData::Int(cast_vec::<S, i32>(container)),
		Kind::UInt => ColumnData::UInt(cast_vec::<S, u32>(container)),
		Kind::Long => ColumnData::Long(cast_vec::<S, i64>(container)),
		Kind::ULong => ColumnData::ULong(cast_vec::<S, u64>(container)),
		Kind::Float => ColumnData::Float(cast_vec::<S, f32>(container)),
		Kind::Double => ColumnData::Double(cast_vec::<S, f64>(container)),
		Kind::Char => ColumnData::Char(cast_vec::<S, u16>(container)),
		Kind::Decimal => ColumnData::Decimal(convert_vec(container, from, to, |v| v.to_decimal())?),
		Kind::Bool => return Err(unsupported(from, to)),
	})
}

fn from_decimal(container: &NumberContainer<Decimal>, to: Kind) -> Result<ColumnData> {
	let from = Kind::Decimal;
	Ok(match to {
		Kind::Byte => ColumnData::Byte(convert_vec(container, from, to, decimal_to_int)?),
		Kind::SByte => ColumnData::SByte(convert_vec(container, from, to, decimal_to_int)?),
		Kind::Short => ColumnData::Short(convert_vec(container, from, to, decimal_to_int)?),
		Kind::UShort => ColumnData::UShort(convert_vec(container, from, to, decimal_to_int)?),
		Kind::Int => ColumnData::Int(convert_vec(container, from, to, decimal_to_int)?),
		Kind::UInt => ColumnData::UInt(convert_vec(container, from, to, decimal_to_int)?),
		Kind::Long => ColumnData::Long(convert_vec(container, from, to, decimal_to_int)?),
		Kind::ULong => ColumnData::ULong(convert_vec(container, from, to, decimal_to_int)?),
		Kind::Char => ColumnData::Char(convert_vec(container, from, to, decimal_to_int)?),
		Kind::Float => ColumnData::Float(convert_vec(container, from, to, |v| v.to_f32())?),
		Kind::Double => ColumnData::Double(convert_vec(container, from, to, |v| v.to_f64())?),
		Kind::Decimal => ColumnData::Decimal(container.clone()),
		Kind::Bool => return Err(unsupported(from, to)),
	})
}
