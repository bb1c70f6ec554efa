// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod promote;

pub use promote::{Promotion, promote};

/// Public binary operations on columns.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
	Add,
	Subtract,
	Multiply,
	Divide,
	Modulo,
	LeftShift,
	RightShift,
	And,
	Or,
	Xor,
	Equals,
	NotEquals,
	GreaterThan,
	GreaterThanOrEqual,
	LessThan,
	LessThanOrEqual,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatorFamily {
	Arithmetic,
	Shift,
	Logic,
	Comparison,
}

/// How the kind of the produced column is derived.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultKind {
	/// The promoted common kind of both operands.
	Promoted,
	/// The kind of the receiving column.
	SameAsInput,
	/// Always bool.
	Bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
	pub op: BinaryOp,
	pub name: &'static str,
	pub symbol: &'static str,
	pub family: OperatorFamily,
	pub commutative: bool,
	pub scalar_form: bool,
	pub reverse_form: bool,
	pub result: ResultKind,
}

macro_rules! descriptor {
	($op:ident, $name:literal, $symbol:literal, $family:ident, commutative: $commutative:literal, reverse: $reverse:literal, result: $result:ident) => {
		OperationDescriptor {
			op: BinaryOp::$op,
			name: $name,
			symbol: $symbol,
			family: OperatorFamily::$family,
			commutative: $commutative,
			scalar_form: true,
			reverse_form: $reverse,
			result: ResultKind::$result,
		}
	};
}

const DESCRIPTORS: [OperationDescriptor; 16] = [
	descriptor!(Add, "add", "+", Arithmetic, commutative: true, reverse: true, result: Promoted),
	descriptor!(Subtract, "subtract", "-", Arithmetic, commutative: false, reverse: true, result: Promoted),
	descriptor!(Multiply, "multiply", "*", Arithmetic, commutative: true, reverse: true, result: Promoted),
	descriptor!(Divide, "divide", "/", Arithmetic, commutative: false, reverse: true, result: Promoted),
	descriptor!(Modulo, "modulo", "%", Arithmetic, commutative: false, reverse: true, result: Promoted),
	descriptor!(LeftShift, "left shift", "<<", Shift, commutative: false, reverse: false, result: SameAsInput),
	descriptor!(RightShift, "right shift", ">>", Shift, commutative: false, reverse: false, result: SameAsInput),
	descriptor!(And, "and", "&", Logic, commutative: true, reverse: true, result: SameAsInput),
	descriptor!(Or, "or", "|", Logic, commutative: true, reverse: true, result: SameAsInput),
	descriptor!(Xor, "xor", "^", Logic, commutative: true, reverse: true, result: SameAsInput),
	descriptor!(Equals, "equals", "==", Comparison, commutative: true, reverse: false, result: Bool),
	descriptor!(NotEquals, "not equals", "!=", Comparison, commutative: true, reverse: false, result: Bool),
	descriptor!(GreaterThan, "greater than", ">", Comparison, commutative: false, reverse: false, result: Bool),
	descriptor!(GreaterThanOrEqual, "greater than or equal", ">=", Comparison, commutative: false, reverse: false, result: Bool),
	descriptor!(LessThan, "less than", "<", Comparison, commutative: false, reverse: false, result: Bool),
	descriptor!(LessThanOrEqual, "less than or equal", "<=", Comparison, commutative: false, reverse: false, result: Bool),
];

impl BinaryOp {
	pub const ALL: [BinaryOp; 16] = [
		BinaryOp::Add,
		BinaryOp::Subtract,
		BinaryOp::Multiply,
		BinaryOp::Divide,
		BinaryOp::Modulo,
		BinaryOp::LeftShift,
		BinaryOp::RightShift,
		BinaryOp::And,
		BinaryOp::Or,
		BinaryOp::Xor,
		BinaryOp::Equals,
		BinaryOp::NotEquals,
		BinaryOp::GreaterThan,
		BinaryOp::GreaterThanOrEqual,
		BinaryOp::LessThan,
		BinaryOp::LessThanOrEqual,
	];

	pub fn descriptor(&self) -> &'static OperationDescriptor {
		&DESCRIPTORS[*self as usize]
	}

	pub fn family(&self) -> OperatorFamily {
		self.descriptor().family
	}

	pub fn symbol(&self) -> &'static str {
		self.descriptor().symbol
	}

	pub fn is_commutative(&self) -> bool {
		self.descriptor().commutative
	}

	pub fn has_reverse_form(&self) -> bool {
		self.descriptor().reverse_form
	}
}

impl Display for BinaryOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.descriptor().name)
	}
}
