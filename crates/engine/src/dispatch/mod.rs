// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use tessera_type::{BinaryOp, ColumnData, Kind, OperatorFamily, TypeError, Value, promote, return_error};
use tracing::{debug, instrument};

use crate::evaluate::EvaluationContext;

/// Typed kernel side of `$operand` for the `$variant` kind, `None` when the
/// operand holds a different kind.
macro_rules! side {
	($operand:expr, $variant:ident) => {
		match $operand {
			$crate::dispatch::Operand::Column(c) => match &**c {
				tessera_type::ColumnData::$variant(c) => Some($crate::kernel::Side::Column(c)),
				_ => None,
			},
			$crate::dispatch::Operand::Scalar(v) => match &**v {
				tessera_type::Value::$variant(v) => Some($crate::kernel::Side::Scalar(v)),
				_ => None,
			},
		}
	};
}

macro_rules! bool_side {
	($operand:expr) => {
		match $operand {
			$crate::dispatch::Operand::Column(c) => match &**c {
				tessera_type::ColumnData::Bool(c) => Some($crate::kernel::BoolSide::Column(c)),
				_ => None,
			},
			$crate::dispatch::Operand::Scalar(v) => match &**v {
				tessera_type::Value::Bool(v) => Some($crate::kernel::BoolSide::Scalar(*v)),
				_ => None,
			},
		}
	};
}

mod arith;
mod compare;
mod logic;
mod shift;

/// One side of a binary operation.
#[derive(Debug, Clone)]
pub(crate) enum Operand<'a> {
	Column(Cow<'a, ColumnData>),
	Scalar(Cow<'a, Value>),
}

impl<'a> Operand<'a> {
	pub(crate) fn column(data: &'a ColumnData) -> Self {
		Operand::Column(Cow::Borrowed(data))
	}

	pub(crate) fn scalar(value: &'a Value) -> Self {
		Operand::Scalar(Cow::Borrowed(value))
	}

	pub(crate) fn kind(&self) -> Kind {
		match self {
			Operand::Column(c) => c.kind(),
			Operand::Scalar(v) => v.kind(),
		}
	}

	/// Row count, `None` for scalars.
	pub(crate) fn len(&self) -> Option<usize> {
		match self {
			Operand::Column(c) => Some(c.len()),
			Operand::Scalar(_) => None,
		}
	}

	/// Converts the operand to `target`, borrowing it unchanged when it already has that kind.
	fn convert(self, target: Kind) -> tessera_type::Result<Operand<'a>> {
		let from = self.kind();
		if from == target {
			return Ok(self);
		}

		debug!(from = %from, to = %target, "converting operand");
		Ok(match self {
			Operand::Column(c) => Operand::Column(Cow::Owned(c.convert_to(target)?)),
			Operand::Scalar(v) => Operand::Scalar(Cow::Owned(v.convert_to(target)?)),
		})
	}
}

pub(crate) fn mismatch(op: BinaryOp, left: &Operand<'_>, right: &Operand<'_>) -> tessera_type::Error {
	TypeError::UnsupportedKindCombination {
		op,
		left: left.kind(),
		right: right.kind(),
	}
	.into()
}

/// Resolves the promotion for `op`, converts both operands to the common kind
/// and runs the matching kernel.
///
/// Unsupported combinations are rejected before anything is converted.
#[instrument(name = "dispatch::binary", level = "trace", skip_all, fields(op = %op, left = %left.kind(), right = %right.kind()))]
pub(crate) fn binary(
	ctx: &EvaluationContext,
	op: BinaryOp,
	left: Operand<'_>,
	right: Operand<'_>,
) -> tessera_type::Result<ColumnData> {
	let (left_kind, right_kind) = (left.kind(), right.kind());

	let Some(promotion) = promote(op, left_kind, right_kind) else {
		if op.family() == OperatorFamily::Shift {
			return_error!(TypeError::UnsupportedShift {
				op,
				kind: left_kind,
			});
		}
		return_error!(TypeError::UnsupportedKindCombination {
			op,
			left: left_kind,
			right: right_kind,
		});
	};

	if op.family() == OperatorFamily::Shift {
		return shift::apply(op, &left, &right);
	}

	let len = length(op, &left, &right)?;
	let left = left.convert(promotion.operand)?;
	let right = right.convert(promotion.operand)?;

	match op.family() {
		OperatorFamily::Arithmetic => arith::apply(ctx, op, promotion.operand, &left, &right, len),
		OperatorFamily::Comparison => compare::apply(op, promotion.operand, &left, &right, len),
		_ => logic::apply(op, &left, &right, len),
	}
}

fn length(op: BinaryOp, left: &Operand<'_>, right: &Operand<'_>) -> tessera_type::Result<usize> {
	match (left.len(), right.len()) {
		(Some(l), Some(r)) if l != r => Err(TypeError::LengthMismatch {
			op,
			left: l,
			right: r,
		}
		.into()),
		(Some(len), _) | (None, Some(len)) => Ok(len),
		(None, None) => Ok(1),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ctx() -> EvaluationContext {
		EvaluationContext::default()
	}

	#[test]
	fn test_borrowed_when_kind_matches() {
		let data = ColumnData::int([1, 2]);
		let converted = Operand::column(&data).convert(Kind::Int).unwrap();
		assert!(matches!(converted, Operand::Column(Cow::Borrowed(_))));
	}

	#[test]
	fn test_owned_after_conversion() {
		let data = ColumnData::int([1, 2]);
		let converted = Operand::column(&data).convert(Kind::Long).unwrap();
		match converted {
			Operand::Column(Cow::Owned(c)) => assert_eq!(c, ColumnData::long([1, 2])),
			_ => panic!("expected an owned column"),
		}
	}

	#[test]
	fn test_unsupported_combination_before_conversion() {
		let l = ColumnData::bool([true]);
		let r = ColumnData::int([1]);
		let err = binary(&ctx(), BinaryOp::Add, Operand::column(&l), Operand::column(&r)).unwrap_err();
		assert_eq!(err.code(), "OPERATOR_001");
	}

	#[test]
	fn test_length_mismatch() {
		let l = ColumnData::int([1, 2]);
		let r = ColumnData::int([1, 2, 3]);
		let err = binary(&ctx(), BinaryOp::Add, Operand::column(&l), Operand::column(&r)).unwrap_err();
		assert_eq!(err.code(), "OPERATOR_003");
	}

	#[test]
	fn test_unsupported_combination_wins_over_length_mismatch() {
		let l = ColumnData::byte([1, 2]);
		let r = ColumnData::sbyte([1]);
		let err = binary(&ctx(), BinaryOp::Add, Operand::column(&l), Operand::column(&r)).unwrap_err();
		assert_eq!(err.code(), "OPERATOR_001");
	}

	#[test]
	fn test_unsupported_shift() {
		let l = ColumnData::double([1.0]);
		let amount = Value::int(1);
		let err = binary(&ctx(), BinaryOp::LeftShift, Operand::column(&l), Operand::scalar(&amount)).unwrap_err();
		assert_eq!(err.code(), "OPERATOR_002");
	}

	#[test]
	fn test_scalar_promotes() {
		let l = ColumnData::byte([1, 2]);
		let r = Value::double(0.5);
		let result = binary(&ctx(), BinaryOp::Add, Operand::column(&l), Operand::scalar(&r)).unwrap();
		assert_eq!(result, ColumnData::double([1.5, 2.5]));
	}
}
