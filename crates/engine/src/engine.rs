// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use paste::paste;
use tessera_type::{BinaryOp, ColumnData, Value};
use tracing::trace;

use crate::{
	config::ArithmeticConfig,
	dispatch::{self, Operand},
	evaluate::EvaluationContext,
};

/// Outcome of an in-place operation.
#[derive(Debug, Clone, PartialEq)]
pub enum InPlace {
	/// The receiver already had the result kind and now holds the result.
	Mutated,
	/// The result needed a wider kind. The receiver is unchanged and the result is returned instead.
	Promoted(ColumnData),
}

impl InPlace {
	pub fn is_mutated(&self) -> bool {
		matches!(self, InPlace::Mutated)
	}

	pub fn into_promoted(self) -> Option<ColumnData> {
		match self {
			InPlace::Mutated => None,
			InPlace::Promoted(data) => Some(data),
		}
	}
}

/// Entry point for every operation on columns.
///
/// Each operation resolves the common kind of its operands, converts them and
/// runs a homogeneous kernel. Integer overflow follows the configured
/// [`OverflowPolicy`](crate::OverflowPolicy).
#[derive(Debug, Clone, Default)]
pub struct Engine {
	context: EvaluationContext,
}

impl Engine {
	pub fn new(config: ArithmeticConfig) -> Self {
		Self {
			context: EvaluationContext::new(config),
		}
	}

	pub fn config(&self) -> &ArithmeticConfig {
		&self.context.config
	}

	/// Applies `op` to two columns of equal length.
	pub fn apply(&self, op: BinaryOp, left: &ColumnData, right: &ColumnData) -> tessera_type::Result<ColumnData> {
		dispatch::binary(&self.context, op, Operand::column(left), Operand::column(right))
	}

	/// Applies `op` to every row of `left` and the scalar `right`.
	pub fn apply_value(&self, op: BinaryOp, left: &ColumnData, right: &Value) -> tessera_type::Result<ColumnData> {
		dispatch::binary(&self.context, op, Operand::column(left), Operand::scalar(right))
	}

	/// Applies `op` with the scalar `left` as the left operand of every row of `right`.
	pub fn apply_reverse_value(
		&self,
		op: BinaryOp,
		right: &ColumnData,
		left: &Value,
	) -> tessera_type::Result<ColumnData> {
		dispatch::binary(&self.context, op, Operand::scalar(left), Operand::column(right))
	}

	fn shift(&self, op: BinaryOp, data: &ColumnData, amount: i32) -> tessera_type::Result<ColumnData> {
		dispatch::binary(&self.context, op, Operand::column(data), Operand::Scalar(Cow::Owned(Value::Int(amount))))
	}

	fn commit(receiver: &mut ColumnData, result: ColumnData) -> InPlace {
		if result.kind() == receiver.kind() {
			*receiver = result;
			return InPlace::Mutated;
		}

		trace!(receiver = %receiver.kind(), result = %result.kind(), "in-place operation promoted");
		InPlace::Promoted(result)
	}
}

macro_rules! binary_operations {
	($($name:ident => $op:ident),* $(,)?) => {
		paste! {
			impl Engine {
				$(
					pub fn $name(&self, left: &ColumnData, right: &ColumnData) -> tessera_type::Result<ColumnData> {
						self.apply(BinaryOp::$op, left, right)
					}

					pub fn [<$name _value>](&self, left: &ColumnData, right: &Value) -> tessera_type::Result<ColumnData> {
						self.apply_value(BinaryOp::$op, left, right)
					}

					pub fn [<reverse_ $name _value>](&self, right: &ColumnData, left: &Value) -> tessera_type::Result<ColumnData> {
						self.apply_reverse_value(BinaryOp::$op, right, left)
					}

					pub fn [<$name _in_place>](&self, left: &mut ColumnData, right: &ColumnData) -> tessera_type::Result<InPlace> {
						let result = self.apply(BinaryOp::$op, left, right)?;
						Ok(Self::commit(left, result))
					}

					pub fn [<$name _value_in_place>](&self, left: &mut ColumnData, right: &Value) -> tessera_type::Result<InPlace> {
						let result = self.apply_value(BinaryOp::$op, left, right)?;
						Ok(Self::commit(left, result))
					}

					pub fn [<reverse_ $name _value_in_place>](&self, right: &mut ColumnData, left: &Value) -> tessera_type::Result<InPlace> {
						let result = self.apply_reverse_value(BinaryOp::$op, right, left)?;
						Ok(Self::commit(right, result))
					}
				)*
			}
		}
	};
}

binary_operations! {
	add => Add,
	subtract => Subtract,
	multiply => Multiply,
	divide => Divide,
	modulo => Modulo,
	and => And,
	or => Or,
	xor => Xor,
}

macro_rules! shift_operations {
	($($name:ident => $op:ident),* $(,)?) => {
		paste! {
			impl Engine {
				$(
					pub fn $name(&self, data: &ColumnData, amount: i32) -> tessera_type::Result<ColumnData> {
						self.shift(BinaryOp::$op, data, amount)
					}

					pub fn [<$name _in_place>](&self, data: &mut ColumnData, amount: i32) -> tessera_type::Result<InPlace> {
						let result = self.shift(BinaryOp::$op, data, amount)?;
						Ok(Self::commit(data, result))
					}
				)*
			}
		}
	};
}

shift_operations! {
	left_shift => LeftShift,
	right_shift => RightShift,
}

macro_rules! comparison_operations {
	($($name:ident => $op:ident),* $(,)?) => {
		paste! {
			impl Engine {
				$(
					pub fn $name(&self, left: &ColumnData, right: &ColumnData) -> tessera_type::Result<ColumnData> {
						self.apply(BinaryOp::$op, left, right)
					}

					pub fn [<$name _value>](&self, left: &ColumnData, right: &Value) -> tessera_type::Result<ColumnData> {
						self.apply_value(BinaryOp::$op, left, right)
					}
				)*
			}
		}
	};
}

comparison_operations! {
	equals => Equals,
	not_equals => NotEquals,
	greater_than => GreaterThan,
	greater_than_or_equal => GreaterThanOrEqual,
	less_than => LessThan,
	less_than_or_equal => LessThanOrEqual,
}
