// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use paste::paste;
use tessera_type::{ColumnData, Value};

use crate::engine::{Engine, InPlace};

macro_rules! column_operations {
	(
		binary: [$($binary:ident),* $(,)?],
		shift: [$($shift:ident),* $(,)?],
		comparison: [$($comparison:ident),* $(,)?] $(,)?
	) => {
		paste! {
			/// Operations on a column with a default configured [`Engine`].
			///
			/// ```ignore
			/// let sum = left.add(&right)?;
			/// ```
			pub trait ColumnOperations {
				$(
					fn $binary(&self, right: &ColumnData) -> tessera_type::Result<ColumnData>;
					fn [<$binary _value>](&self, right: &Value) -> tessera_type::Result<ColumnData>;
					fn [<reverse_ $binary _value>](&self, left: &Value) -> tessera_type::Result<ColumnData>;
					fn [<$binary _in_place>](&mut self, right: &ColumnData) -> tessera_type::Result<InPlace>;
					fn [<$binary _value_in_place>](&mut self, right: &Value) -> tessera_type::Result<InPlace>;
					fn [<reverse_ $binary _value_in_place>](&mut self, left: &Value) -> tessera_type::Result<InPlace>;
				)*
				$(
					fn $shift(&self, amount: i32) -> tessera_type::Result<ColumnData>;
					fn [<$shift _in_place>](&mut self, amount: i32) -> tessera_type::Result<InPlace>;
				)*
				$(
					fn $comparison(&self, right: &ColumnData) -> tessera_type::Result<ColumnData>;
					fn [<$comparison _value>](&self, right: &Value) -> tessera_type::Result<ColumnData>;
				)*
			}

			impl ColumnOperations for ColumnData {
				$(
					fn $binary(&self, right: &ColumnData) -> tessera_type::Result<ColumnData> {
						Engine::default().$binary(self, right)
					}

					fn [<$binary _value>](&self, right: &Value) -> tessera_type::Result<ColumnData> {
						Engine::default().[<$binary _value>](self, right)
					}

					fn [<reverse_ $binary _value>](&self, left: &Value) -> tessera_type::Result<ColumnData> {
						Engine::default().[<reverse_ $binary _value>](self, left)
					}

					fn [<$binary _in_place>](&mut self, right: &ColumnData) -> tessera_type::Result<InPlace> {
						Engine::default().[<$binary _in_place>](self, right)
					}

					fn [<$binary _value_in_place>](&mut self, right: &Value) -> tessera_type::Result<InPlace> {
						Engine::default().[<$binary _value_in_place>](self, right)
					}

					fn [<reverse_ $binary _value_in_place>](&mut self, left: &Value) -> tessera_type::Result<InPlace> {
						Engine::default().[<reverse_ $binary _value_in_place>](self, left)
					}
				)*
				$(
					fn $shift(&self, amount: i32) -> tessera_type::Result<ColumnData> {
						Engine::default().$shift(self, amount)
					}

					fn [<$shift _in_place>](&mut self, amount: i32) -> tessera_type::Result<InPlace> {
						Engine::default().[<$shift _in_place>](self, amount)
					}
				)*
				$(
					fn $comparison(&self, right: &ColumnData) -> tessera_type::Result<ColumnData> {
						Engine::default().$comparison(self, right)
					}

					fn [<$comparison _value>](&self, right: &Value) -> tessera_type::Result<ColumnData> {
						Engine::default().[<$comparison _value>](self, right)
					}
				)*
			}
		}
	};
}

column_operations! {
	binary: [add, subtract, multiply, divide, modulo, and, or, xor],
	shift: [left_shift, right_shift],
	comparison: [equals, not_equals, greater_than, greater_than_or_equal, less_than, less_than_or_equal],
}

#[cfg(test)]
mod tests {
	use tessera_type::Kind;

	use super::*;

	#[test]
	fn test_add() {
		let result = ColumnData::ushort([1, 2]).add(&ColumnData::uint([3, 4])).unwrap();
		assert_eq!(result, ColumnData::uint([4, 6]));
	}

	#[test]
	fn test_reverse_modulo_value() {
		let result = ColumnData::int([3, 4]).reverse_modulo_value(&Value::int(10)).unwrap();
		assert_eq!(result, ColumnData::int([1, 2]));
	}

	#[test]
	fn test_multiply_in_place() {
		let mut data = ColumnData::float([1.5]);
		assert!(data.multiply_value_in_place(&Value::float(2.0)).unwrap().is_mutated());
		assert_eq!(data, ColumnData::float([3.0]));
	}

	#[test]
	fn test_shift() {
		let data = ColumnData::char([1]);
		let result = data.left_shift(8).unwrap();
		assert_eq!(result.kind(), Kind::Char);
		assert_eq!(result, ColumnData::char([256]));
	}

	#[test]
	fn test_greater_than_value() {
		let result = ColumnData::double([1.0, 3.0]).greater_than_value(&Value::int(2)).unwrap();
		assert_eq!(result, ColumnData::bool([false, true]));
	}
}
