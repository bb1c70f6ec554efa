// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Homogeneous kernels. Both operands already share one kind when a kernel runs.
//!
//! Kernels never touch their inputs. They compute into a fresh buffer which the
//! caller commits, so a failing slot leaves every receiver unchanged.

use tessera_type::{BitVec, BoolContainer, NumberContainer, value::is::IsNumber};

pub(crate) mod arith;
pub(crate) mod compare;
pub(crate) mod logic;
pub(crate) mod shift;

/// One operand of a kernel, a column or a scalar broadcast to every row.
pub(crate) trait Lane {
	type Item;

	/// The value at `idx`, `None` when the slot is undefined.
	fn lane(&self, idx: usize) -> Option<Self::Item>;
}

pub(crate) enum Side<'a, T: IsNumber> {
	Column(&'a NumberContainer<T>),
	Scalar(&'a T),
}

impl<'a, T: IsNumber> Lane for Side<'a, T> {
	type Item = &'a T;

	fn lane(&self, idx: usize) -> Option<&'a T> {
		match *self {
			Side::Column(c) => c.get(idx),
			Side::Scalar(v) => Some(v),
		}
	}
}

pub(crate) enum BoolSide<'a> {
	Column(&'a BoolContainer),
	Scalar(bool),
}

impl Lane for BoolSide<'_> {
	type Item = bool;

	fn lane(&self, idx: usize) -> Option<bool> {
		match *self {
			BoolSide::Column(c) => c.get(idx),
			BoolSide::Scalar(v) => Some(v),
		}
	}
}

/// Runs `f` over every row where both sides are defined.
///
/// A row is defined in the output when both inputs are defined and `f` returns `Some`.
pub(crate) fn zip<L, R, O>(
	l: &L,
	r: &R,
	len: usize,
	mut f: impl FnMut(L::Item, R::Item) -> tessera_type::Result<Option<O>>,
) -> tessera_type::Result<(Vec<O>, BitVec)>
where
	L: Lane,
	R: Lane,
	O: Default,
{
	let mut data = Vec::with_capacity(len);
	let mut bitvec = BitVec::with_capacity(len);

	for idx in 0..len {
		let value = match (l.lane(idx), r.lane(idx)) {
			(Some(l), Some(r)) => f(l, r)?,
			_ => None,
		};

		match value {
			Some(value) => {
				data.push(value);
				bitvec.push(true);
			}
			None => {
				data.push(O::default());
				bitvec.push(false);
			}
		}
	}

	Ok((data, bitvec))
}
