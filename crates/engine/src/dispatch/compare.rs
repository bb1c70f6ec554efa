// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tessera_type::{BinaryOp, ColumnData, Kind};

use crate::{
	dispatch::{Operand, mismatch},
	kernel,
};

/// Runs a comparison kernel on two operands already converted to `kind`.
pub(crate) fn apply(
	op: BinaryOp,
	kind: Kind,
	left: &Operand<'_>,
	right: &Operand<'_>,
	len: usize,
) -> tessera_type::Result<ColumnData> {
	macro_rules! compare {
		($l:expr, $r:expr) => {{
			let (Some(l), Some(r)) = ($l, $r) else {
				return Err(mismatch(op, left, right));
			};
			ColumnData::Bool(kernel::compare::apply(op, kind, &l, &r, len)?)
		}};
	}

	Ok(match kind {
		Kind::Bool => compare!(bool_side!(left), bool_side!(right)),
		Kind::Byte => compare!(side!(left, Byte), side!(right, Byte)),
		Kind::SByte => compare!(side!(left, SByte), side!(right, SByte)),
		Kind::Short => compare!(side!(left, Short), side!(right, Short)),
		Kind::UShort => compare!(side!(left, UShort), side!(right, UShort)),
		Kind::Int => compare!(side!(left, Int), side!(right, Int)),
		Kind::UInt => compare!(side!(left, UInt), side!(right, UInt)),
		Kind::Long => compare!(side!(left, Long), side!(right, Long)),
		Kind::ULong => compare!(side!(left, ULong), side!(right, ULong)),
		Kind::Float => compare!(side!(left, Float), side!(right, Float)),
		Kind::Double => compare!(side!(left, Double), side!(right, Double)),
		Kind::Decimal => compare!(side!(left, Decimal), side!(right, Decimal)),
		Kind::Char => compare!(side!(left, Char), side!(right, Char)),
	})
}
