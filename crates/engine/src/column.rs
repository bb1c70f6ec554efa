// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Rem, Shl, Shr, Sub};

use paste::paste;
use tessera_type::{ColumnData, Kind, Value};

use crate::operations::ColumnOperations;

/// A named column. Operators run through a default configured engine and
/// keep the name of the column operand.
///
/// ```ignore
/// let total = (&price * &quantity)?;
/// let change = (&Value::int(100) - &total)?;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn kind(&self) -> Kind {
		self.data.kind()
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn with_data(&self, data: ColumnData) -> Column {
		Column::new(self.name.clone(), data)
	}
}

macro_rules! column_operators {
	($($trait:ident::$method:ident => $op:ident),* $(,)?) => {
		paste! {
			$(
				impl $trait<&Column> for &Column {
					type Output = tessera_type::Result<Column>;

					fn $method(self, right: &Column) -> Self::Output {
						ColumnOperations::$op(&self.data, &right.data).map(|data| self.with_data(data))
					}
				}

				impl $trait<&Value> for &Column {
					type Output = tessera_type::Result<Column>;

					fn $method(self, right: &Value) -> Self::Output {
						ColumnOperations::[<$op _value>](&self.data, right).map(|data| self.with_data(data))
					}
				}

				impl $trait<&Column> for &Value {
					type Output = tessera_type::Result<Column>;

					fn $method(self, right: &Column) -> Self::Output {
						ColumnOperations::[<reverse_ $op _value>](&right.data, self).map(|data| right.with_data(data))
					}
				}
			)*
		}
	};
}

column_operators! {
	Add::add => add,
	Sub::sub => subtract,
	Mul::mul => multiply,
	Div::div => divide,
	Rem::rem => modulo,
	BitAnd::bitand => and,
	BitOr::bitor => or,
	BitXor::bitxor => xor,
}

impl Shl<i32> for &Column {
	type Output = tessera_type::Result<Column>;

	fn shl(self, amount: i32) -> Self::Output {
		ColumnOperations::left_shift(&self.data, amount).map(|data| self.with_data(data))
	}
}

impl Shr<i32> for &Column {
	type Output = tessera_type::Result<Column>;

	fn shr(self, amount: i32) -> Self::Output {
		ColumnOperations::right_shift(&self.data, amount).map(|data| self.with_data(data))
	}
}

#[cfg(test)]
mod tests {
	use tessera_type::Decimal;

	use super::*;

	#[test]
	fn test_add_columns_promotes() {
		let price = Column::new("price", ColumnData::int([1, 2]));
		let rebate = Column::new("rebate", ColumnData::decimal([Decimal::from_parts(5, 1), Decimal::zero()]));

		let result = (&price + &rebate).unwrap();
		assert_eq!(result.name, "price");
		assert_eq!(result.kind(), Kind::Decimal);
		assert_eq!(result.data, ColumnData::decimal([Decimal::from_parts(15, 1), Decimal::from(2)]));
	}

	#[test]
	fn test_subtract_value() {
		let column = Column::new("a", ColumnData::int([5, 7]));
		let result = (&column - &Value::int(3)).unwrap();
		assert_eq!(result.data, ColumnData::int([2, 4]));
	}

	#[test]
	fn test_value_minus_column_is_reversed() {
		let column = Column::new("a", ColumnData::int([5, 7]));
		let result = (&Value::int(3) - &column).unwrap();
		assert_eq!(result.name, "a");
		assert_eq!(result.data, ColumnData::int([-2, -4]));
	}

	#[test]
	fn test_value_divided_by_column() {
		let column = Column::new("a", ColumnData::long([2, 4]));
		let result = (&Value::long(8) / &column).unwrap();
		assert_eq!(result.data, ColumnData::long([4, 2]));
	}

	#[test]
	fn test_remainder_and_multiply() {
		let column = Column::new("a", ColumnData::short([7, 9]));
		assert_eq!((&column % &Value::short(4)).unwrap().data, ColumnData::short([3, 1]));
		assert_eq!((&column * &Value::double(0.5)).unwrap().data, ColumnData::double([3.5, 4.5]));
	}

	#[test]
	fn test_logic_operators() {
		let l = Column::new("l", ColumnData::bool([true, true, false]));
		let r = Column::new("r", ColumnData::bool([true, false, false]));
		assert_eq!((&l & &r).unwrap().data, ColumnData::bool([true, false, false]));
		assert_eq!((&l | &r).unwrap().data, ColumnData::bool([true, true, false]));
		assert_eq!((&l ^ &r).unwrap().data, ColumnData::bool([false, true, false]));
		assert_eq!((&Value::bool(false) | &l).unwrap().data, ColumnData::bool([true, true, false]));
	}

	#[test]
	fn test_shift_operators() {
		let column = Column::new("a", ColumnData::uint([1, 8]));
		assert_eq!((&column << 2).unwrap().data, ColumnData::uint([4, 32]));
		assert_eq!((&column >> 3).unwrap().data, ColumnData::uint([0, 1]));
	}

	#[test]
	fn test_unsupported_operands() {
		let flags = Column::new("flags", ColumnData::bool([true]));
		let err = (&flags + &Value::int(1)).unwrap_err();
		assert_eq!(err.code(), "OPERATOR_001");

		let err = (&Column::new("d", ColumnData::double([1.0])) << 1).unwrap_err();
		assert_eq!(err.code(), "OPERATOR_002");
	}
}
