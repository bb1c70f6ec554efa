// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{
	operator::{BinaryOp, OperatorFamily},
	value::kind::Kind,
};

/// Outcome of resolving an operation against two kinds.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
	/// Kind both operands are converted to before the kernel runs.
	pub operand: Kind,
	/// Kind of the produced column.
	pub result: Kind,
}

impl Promotion {
	fn same(kind: Kind) -> Self {
		Self {
			operand: kind,
			result: kind,
		}
	}

	fn to_bool(operand: Kind) -> Self {
		Self {
			operand,
			result: Kind::Bool,
		}
	}
}

/// Resolves `op` applied to `left` and `right`, `None` when the combination is unsupported.
///
/// For shifts `right` is the kind of the shift amount, which must be `Int`.
pub fn promote(op: BinaryOp, left: Kind, right: Kind) -> Option<Promotion> {
	match op.family() {
		OperatorFamily::Arithmetic => numeric(left, right).map(Promotion::same),
		OperatorFamily::Comparison => {
			if left == Kind::Bool && right == Kind::Bool {
				return matches!(op, BinaryOp::Equals | BinaryOp::NotEquals)
					.then(|| Promotion::to_bool(Kind::Bool));
			}
			numeric(left, right).map(Promotion::to_bool)
		}
		OperatorFamily::Logic => (left == Kind::Bool && right == Kind::Bool).then(|| Promotion::same(Kind::Bool)),
		OperatorFamily::Shift => (left.is_shiftable() && right == Kind::Int).then(|| Promotion::same(left)),
	}
}

fn numeric(left: Kind, right: Kind) -> Option<Kind> {
	if left == Kind::Bool || right == Kind::Bool {
		return None;
	}

	if left == Kind::Char || right == Kind::Char {
		return (left == right).then_some(Kind::Char);
	}

	if left == right {
		return Some(left);
	}

	if left.is_integer() && right.is_integer() {
		return integer(left, right);
	}

	// Float, Double and Decimal rank above every integer. The higher rank absorbs.
	let (lr, rr) = (left.rank()?, right.rank()?);
	Some(if lr > rr {
		left
	} else {
		right
	})
}

// The wider integer absorbs the narrower one regardless of sign. Equal widths
// with different signs have no lossless common kind.
fn integer(left: Kind, right: Kind) -> Option<Kind> {
	let (lw, rw) = (left.width()?, right.width()?);
	match lw.cmp(&rw) {
		std::cmp::Ordering::Greater => Some(left),
		std::cmp::Ordering::Less => Some(right),
		std::cmp::Ordering::Equal => None,
	}
}
