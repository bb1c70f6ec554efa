// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tessera_type::{BinaryOp, ColumnData, TypeError, Value};

use crate::{dispatch::Operand, kernel};

/// Shifts a column by a scalar `Int` amount. The result keeps the column's kind.
pub(crate) fn apply(op: BinaryOp, left: &Operand<'_>, right: &Operand<'_>) -> tessera_type::Result<ColumnData> {
	let unsupported = || -> tessera_type::Error {
		TypeError::UnsupportedShift {
			op,
			kind: left.kind(),
		}
		.into()
	};

	let (Operand::Column(data), Operand::Scalar(amount)) = (left, right) else {
		return Err(unsupported());
	};
	let Value::Int(amount) = **amount else {
		return Err(unsupported());
	};

	let kind = data.kind();
	Ok(match &**data {
		ColumnData::Byte(c) => ColumnData::Byte(kernel::shift::apply(op, kind, c, amount)?),
		ColumnData::SByte(c) => ColumnData::SByte(kernel::shift::apply(op, kind, c, amount)?),
		ColumnData::Short(c) => ColumnData::Short(kernel::shift::apply(op, kind, c, amount)?),
		ColumnData::UShort(c) => ColumnData::UShort(kernel::shift::apply(op, kind, c, amount)?),
		ColumnData::Int(c) => ColumnData::Int(kernel::shift::apply(op, kind, c, amount)?),
		ColumnData::UInt(c) => ColumnData::UInt(kernel::shift::apply(op, kind, c, amount)?),
		ColumnData::Long(c) => ColumnData::Long(kernel::shift::apply(op, kind, c, amount)?),
		ColumnData::ULong(c) => ColumnData::ULong(kernel::shift::apply(op, kind, c, amount)?),
		ColumnData::Char(c) => ColumnData::Char(kernel::shift::apply(op, kind, c, amount)?),
		ColumnData::Bool(_) | ColumnData::Float(_) | ColumnData::Double(_) | ColumnData::Decimal(_) => {
			return Err(unsupported());
		}
	})
}
