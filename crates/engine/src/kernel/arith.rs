// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tessera_type::{
	BinaryOp, Kind, NumberContainer, TypeError,
	value::{
		is::IsNumber,
		number::safe::{SafeAdd, SafeDiv, SafeMul, SafeRemainder, SafeSub, ZeroDivisor},
	},
};

use crate::{
	evaluate::EvaluationContext,
	kernel::{Side, zip},
};

pub(crate) trait Arithmetic: IsNumber + SafeAdd + SafeSub + SafeMul + SafeDiv + SafeRemainder + ZeroDivisor {}

impl<T> Arithmetic for T where T: IsNumber + SafeAdd + SafeSub + SafeMul + SafeDiv + SafeRemainder + ZeroDivisor {}

pub(crate) fn apply<T: Arithmetic>(
	ctx: &EvaluationContext,
	op: BinaryOp,
	kind: Kind,
	l: Side<'_, T>,
	r: Side<'_, T>,
	len: usize,
) -> tessera_type::Result<NumberContainer<T>> {
	let (data, bitvec) = match op {
		BinaryOp::Add => zip(&l, &r, len, |l, r| ctx.add(l, r, kind))?,
		BinaryOp::Subtract => zip(&l, &r, len, |l, r| ctx.sub(l, r, kind))?,
		BinaryOp::Multiply => zip(&l, &r, len, |l, r| ctx.mul(l, r, kind))?,
		BinaryOp::Divide => zip(&l, &r, len, |l, r| ctx.div(l, r, kind))?,
		BinaryOp::Modulo => zip(&l, &r, len, |l, r| ctx.rem(l, r, kind))?,
		_ => {
			return Err(TypeError::UnsupportedKindCombination {
				op,
				left: kind,
				right: kind,
			}
			.into());
		}
	};
	Ok(NumberContainer::new(data, bitvec))
}
