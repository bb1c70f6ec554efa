// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tessera_type::{BinaryOp, ColumnData};

use crate::{
	dispatch::{Operand, mismatch},
	kernel,
};

pub(crate) fn apply(op: BinaryOp, left: &Operand<'_>, right: &Operand<'_>, len: usize) -> tessera_type::Result<ColumnData> {
	let (Some(l), Some(r)) = (bool_side!(left), bool_side!(right)) else {
		return Err(mismatch(op, left, right));
	};
	Ok(ColumnData::Bool(kernel::logic::apply(op, &l, &r, len)?))
}
