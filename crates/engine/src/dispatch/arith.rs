// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tessera_type::{BinaryOp, ColumnData, Kind};

use crate::{
	dispatch::{Operand, mismatch},
	evaluate::EvaluationContext,
	kernel,
};

/// Runs an arithmetic kernel on two operands already converted to `kind`.
pub(crate) fn apply(
	ctx: &EvaluationContext,
	op: BinaryOp,
	kind: Kind,
	left: &Operand<'_>,
	right: &Operand<'_>,
	len: usize,
) -> tessera_type::Result<ColumnData> {
	macro_rules! number {
		($variant:ident) => {{
			let (Some(l), Some(r)) = (side!(left, $variant), side!(right, $variant)) else {
				return Err(mismatch(op, left, right));
			};
			ColumnData::$variant(kernel::arith::apply(ctx, op, kind, l, r, len)?)
		}};
	}

	Ok(match kind {
		Kind::Byte => number!(Byte),
		Kind::SByte => number!(SByte),
		Kind::Short => number!(Short),
		Kind::UShort => number!(UShort),
		Kind::Int => number!(Int),
		Kind::UInt => number!(UInt),
		Kind::Long => number!(Long),
		Kind::ULong => number!(ULong),
		Kind::Float => number!(Float),
		Kind::Double => number!(Double),
		Kind::Decimal => number!(Decimal),
		Kind::Char => number!(Char),
		Kind::Bool => return Err(mismatch(op, left, right)),
	})
}
