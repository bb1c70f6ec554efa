// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tessera_type::{BinaryOp, BoolContainer, Kind, TypeError};

use crate::kernel::{BoolSide, zip};

pub(crate) fn apply(op: BinaryOp, l: &BoolSide<'_>, r: &BoolSide<'_>, len: usize) -> tessera_type::Result<BoolContainer> {
	let logic: fn(bool, bool) -> bool = match op {
		BinaryOp::And => |l, r| l & r,
		BinaryOp::Or => |l, r| l | r,
		BinaryOp::Xor => |l, r| l ^ r,
		_ => {
			return Err(TypeError::UnsupportedKindCombination {
				op,
				left: Kind::Bool,
				right: Kind::Bool,
			}
			.into());
		}
	};

	let (data, bitvec) = zip(l, r, len, |l, r| Ok(Some(logic(l, r))))?;
	Ok(BoolContainer::new(data, bitvec))
}
