// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

mod convert;
mod factory;

use crate::{
	util::bitvec::BitVec,
	value::{
		Value,
		container::{BoolContainer, NumberContainer},
		decimal::Decimal,
		kind::Kind,
	},
};

/// Typed column storage, one variant per [`Kind`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Byte(NumberContainer<u8>),
	SByte(NumberContainer<i8>),
	Short(NumberContainer<i16>),
	UShort(NumberContainer<u16>),
	Int(NumberContainer<i32>),
	UInt(NumberContainer<u32>),
	Long(NumberContainer<i64>),
	ULong(NumberContainer<u64>),
	Float(NumberContainer<f32>),
	Double(NumberContainer<f64>),
	Decimal(NumberContainer<Decimal>),
	Char(NumberContainer<u16>),
}

/// Applies `$body` to the container of every variant.
#[macro_export]
macro_rules! with_container {
	($data:expr, |$c:ident| $body:expr) => {
		match $data {
			$crate::value::column::ColumnData::Bool($c) => $body,
			$crate::value::column::ColumnData::Byte($c) => $body,
			$crate::value::column::ColumnData::SByte($c) => $body,
			$crate::value::column::ColumnData::Short($c) => $body,
			$crate::value::column::ColumnData::UShort($c) => $body,
			$crate::value::column::ColumnData::Int($c) => $body,
			$crate::value::column::ColumnData::UInt($c) => $body,
			$crate::value::column::ColumnData::Long($c) => $body,
			$crate::value::column::ColumnData::ULong($c) => $body,
			$crate::value::column::ColumnData::Float($c) => $body,
			$crate::value::column::ColumnData::Double($c) => $body,
			$crate::value::column::ColumnData::Decimal($c) => $body,
			$crate::value::column::ColumnData::Char($c) => $body,
		}
	};
}

impl ColumnData {
	pub fn kind(&self) -> Kind {
		match self {
			ColumnData::Bool(_) => Kind::Bool,
			ColumnData::Byte(_) => Kind::Byte,
			ColumnData::SByte(_) => Kind::SByte,
			ColumnData::Short(_) => Kind::Short,
			ColumnData::UShort(_) => Kind::UShort,
			ColumnData::Int(_) => Kind::Int,
			ColumnData::UInt(_) => Kind::UInt,
			ColumnData::Long(_) => Kind::Long,
			ColumnData::ULong(_) => Kind::ULong,
			ColumnData::Float(_) => Kind::Float,
			ColumnData::Double(_) => Kind::Double,
			ColumnData::Decimal(_) => Kind::Decimal,
			ColumnData::Char(_) => Kind::Char,
		}
	}

	pub fn len(&self) -> usize {
		with_container!(self, |c| c.len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		with_container!(self, |c| c.is_defined(idx))
	}

	pub fn bitvec(&self) -> &BitVec {
		with_container!(self, |c| c.bitvec())
	}

	/// The value at `idx`, `None` when undefined or out of bounds.
	pub fn get(&self, idx: usize) -> Option<Value> {
		match self {
			ColumnData::Bool(c) => c.get(idx).map(Value::Bool),
			ColumnData::Byte(c) => c.get(idx).map(|v| Value::Byte(*v)),
			ColumnData::SByte(c) => c.get(idx).map(|v| Value::SByte(*v)),
			ColumnData::Short(c) => c.get(idx).map(|v| Value::Short(*v)),
			ColumnData::UShort(c) => c.get(idx).map(|v| Value::UShort(*v)),
			ColumnData::Int(c) => c.get(idx).map(|v| Value::Int(*v)),
			ColumnData::UInt(c) => c.get(idx).map(|v| Value::UInt(*v)),
			ColumnData::Long(c) => c.get(idx).map(|v| Value::Long(*v)),
			ColumnData::ULong(c) => c.get(idx).map(|v| Value::ULong(*v)),
			ColumnData::Float(c) => c.get(idx).map(|v| Value::Float(*v)),
			ColumnData::Double(c) => c.get(idx).map(|v| Value::Double(*v)),
			ColumnData::Decimal(c) => c.get(idx).map(|v| Value::Decimal(v.clone())),
			ColumnData::Char(c) => c.get(idx).map(|v| Value::Char(*v)),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<Value>> + '_ {
		(0..self.len()).map(|idx| self.get(idx))
	}

	pub fn to_vec(&self) -> Vec<Option<Value>> {
		self.iter().collect()
	}
}
