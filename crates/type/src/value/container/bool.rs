// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::util::bitvec::BitVec;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoolContainer {
	data: BitVec,
	bitvec: BitVec,
}

impl BoolContainer {
	pub fn new(data: Vec<bool>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data: BitVec::from_slice(&data),
			bitvec,
		}
	}

	pub fn from_parts(data: BitVec, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data,
			bitvec,
		}
	}

	pub fn from_vec(data: Vec<bool>) -> Self {
		let len = data.len();
		Self {
			data: BitVec::from_slice(&data),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn from_optional(values: impl IntoIterator<Item = Option<bool>>) -> Self {
		let mut data = BitVec::new();
		let mut bitvec = BitVec::new();
		for value in values {
			data.push(value.unwrap_or(false));
			bitvec.push(value.is_some());
		}
		Self {
			data,
			bitvec,
		}
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

	pub fn get(&self, idx: usize) -> Option<bool> {
		if self.is_defined(idx) {
			Some(self.data.get(idx))
		} else {
			None
		}
	}

	pub fn data(&self) -> &BitVec {
		&self.data
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(v, defined)| {
			if defined {
				Some(v)
			} else {
				None
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_optional() {
		let container = BoolContainer::from_optional([Some(true), None, Some(false)]);
		assert_eq!(container.len(), 3);
		assert_eq!(container.get(0), Some(true));
		assert_eq!(container.get(1), None);
		assert_eq!(container.get(2), Some(false));
	}

	#[test]
	fn test_iter() {
		let container = BoolContainer::new(vec![true, true], BitVec::from([true, false]));
		assert_eq!(container.iter().collect::<Vec<_>>(), vec![Some(true), None]);
	}
}
