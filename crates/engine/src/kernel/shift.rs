// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tessera_type::{
	BinaryOp, Kind, NumberContainer, TypeError,
	value::{is::IsNumber, number::safe::Shift},
};

/// Shifts every defined slot by `amount`. Undefined slots stay undefined.
pub(crate) fn apply<T>(
	op: BinaryOp,
	kind: Kind,
	container: &NumberContainer<T>,
	amount: i32,
) -> tessera_type::Result<NumberContainer<T>>
where
	T: IsNumber + Shift,
{
	let shift: fn(&T, i32) -> T = match op {
		BinaryOp::LeftShift => T::shift_left,
		BinaryOp::RightShift => T::shift_right,
		_ => {
			return Err(TypeError::UnsupportedShift {
				op,
				kind,
			}
			.into());
		}
	};

	let data = container.iter().map(|v| v.map(|v| shift(v, amount)).unwrap_or_default()).collect();
	Ok(NumberContainer::new(data, container.bitvec().clone()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_left_shift() {
		let data = NumberContainer::from_vec(vec![1i32, 3, -1]);
		let result = apply(BinaryOp::LeftShift, Kind::Int, &data, 2).unwrap();
		assert_eq!(result.data().as_slice(), &[4, 12, -4]);
	}

	#[test]
	fn test_right_shift_is_arithmetic_for_signed() {
		let data = NumberContainer::from_vec(vec![-8i64]);
		let result = apply(BinaryOp::RightShift, Kind::Long, &data, 1).unwrap();
		assert_eq!(result.data().as_slice(), &[-4]);
	}

	#[test]
	fn test_narrow_kind_truncates() {
		let data = NumberContainer::from_vec(vec![0x81u8]);
		let result = apply(BinaryOp::LeftShift, Kind::Byte, &data, 1).unwrap();
		assert_eq!(result.data().as_slice(), &[0x02]);
	}

	#[test]
	fn test_amount_is_masked() {
		let data = NumberContainer::from_vec(vec![1u32]);
		let result = apply(BinaryOp::LeftShift, Kind::UInt, &data, 33).unwrap();
		assert_eq!(result.data().as_slice(), &[2]);
	}

	#[test]
	fn test_preserves_validity() {
		let data = NumberContainer::from_optional([Some(1u16), None]);
		let result = apply(BinaryOp::LeftShift, Kind::Char, &data, 4).unwrap();
		assert_eq!(result.get(0), Some(&16));
		assert_eq!(result.get(1), None);
	}
}
