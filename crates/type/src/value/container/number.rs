// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{fmt::Debug, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::{
	util::{bitvec::BitVec, cowvec::CowVec},
	value::is::IsNumber,
};

/// Values of one numeric kind plus a validity bit per slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumberContainer<T>
where
	T: IsNumber,
{
	data: CowVec<T>,
	bitvec: BitVec,
}

impl<T> Deref for NumberContainer<T>
where
	T: IsNumber,
{
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.data.as_slice()
	}
}

impl<T> NumberContainer<T>
where
	T: IsNumber,
{
	pub fn new(data: Vec<T>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data: CowVec::new(data),
			bitvec,
		}
	}

	pub fn from_parts(data: CowVec<T>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data,
			bitvec,
		}
	}

	pub fn from_vec(data: Vec<T>) -> Self {
		let len = data.len();
		Self::new(data, BitVec::repeat(len, true))
	}

	/// Builds a container where `None` marks an undefined slot.
	pub fn from_optional(values: impl IntoIterator<Item = Option<T>>) -> Self {
		let mut data = Vec::new();
		let mut bitvec = BitVec::new();
		for value in values {
			match value {
				Some(v) => {
					data.push(v);
					bitvec.push(true);
				}
				None => {
					data.push(T::default());
					bitvec.push(false);
				}
			}
		}
		Self::new(data, bitvec)
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn is_defined(&self, idx: usize) -> bool {
		idx < self.len() && self.bitvec.get(idx)
	}

	pub fn get(&self, idx: usize) -> Option<&T> {
		if self.is_defined(idx) {
			self.data.get(idx)
		} else {
			None
		}
	}

	pub fn data(&self) -> &CowVec<T> {
		&self.data
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&T>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(v, defined)| {
			if defined {
				Some(v)
			} else {
				None
			}
		})
	}

	pub fn into_parts(self) -> (CowVec<T>, BitVec) {
		(self.data, self.bitvec)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_optional() {
		let container = NumberContainer::from_optional([Some(1i32), None, Some(3)]);
		assert_eq!(container.len(), 3);
		assert_eq!(container.get(0), Some(&1));
		assert_eq!(container.get(1), None);
		assert_eq!(&container[..], &[1, 0, 3]);
	}

	#[test]
	fn test_get_out_of_bounds() {
		let container = NumberContainer::from_vec(vec![1u8]);
		assert_eq!(container.get(1), None);
		assert!(!container.is_defined(1));
	}

	#[test]
	fn test_iter() {
		let container = NumberContainer::new(vec![1.5f64, 2.5], BitVec::from([false, true]));
		assert_eq!(container.iter().collect::<Vec<_>>(), vec![None, Some(&2.5)]);
	}

	#[test]
	fn test_clone_shares_data() {
		let container = NumberContainer::from_vec(vec![1i64, 2, 3]);
		let clone = container.clone();
		assert!(container.data().ptr_eq(clone.data()));
	}
}
