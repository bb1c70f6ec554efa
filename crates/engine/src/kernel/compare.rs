// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tessera_type::{BinaryOp, BoolContainer, Kind, TypeError};

use crate::kernel::{Lane, zip};

/// Elementwise comparison. `NaN` is unequal to everything and unordered.
pub(crate) fn apply<L>(op: BinaryOp, kind: Kind, l: &L, r: &L, len: usize) -> tessera_type::Result<BoolContainer>
where
	L: Lane,
	L::Item: PartialOrd,
{
	let compare: fn(&L::Item, &L::Item) -> bool = match op {
		BinaryOp::Equals => |l, r| l == r,
		BinaryOp::NotEquals => |l, r| l != r,
		BinaryOp::GreaterThan => |l, r| l > r,
		BinaryOp::GreaterThanOrEqual => |l, r| l >= r,
		BinaryOp::LessThan => |l, r| l < r,
		BinaryOp::LessThanOrEqual => |l, r| l <= r,
		_ => {
			return Err(TypeError::UnsupportedKindCombination {
				op,
				left: kind,
				right: kind,
			}
			.into());
		}
	};

	let (data, bitvec) = zip(l, r, len, |l, r| Ok(Some(compare(&l, &r))))?;
	Ok(BoolContainer::new(data, bitvec))
}
