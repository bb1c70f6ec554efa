// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Formatter};

use serde::{Deserialize, Serialize};

use crate::util::cowvec::CowVec;

/// Packed bit vector, least significant bit first.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct BitVec {
	bits: CowVec<u8>,
	len: usize,
}

impl BitVec {
	pub fn new() -> Self {
		Self::with_capacity(0)
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			bits: CowVec::with_capacity(capacity.div_ceil(8)),
			len: 0,
		}
	}

	pub fn repeat(len: usize, value: bool) -> Self {
		let fill = if value {
			0xFF
		} else {
			0x00
		};
		let mut bits = vec![fill; len.div_ceil(8)];
		if value && len % 8 != 0 {
			if let Some(last) = bits.last_mut() {
				*last = (1u8 << (len % 8)) - 1;
			}
		}
		Self {
			bits: CowVec::new(bits),
			len,
		}
	}

	pub fn from_slice(slice: &[bool]) -> Self {
		Self::from_fn(slice.len(), |i| slice[i])
	}

	pub fn from_fn(len: usize, f: impl Fn(usize) -> bool) -> Self {
		let mut bits = vec![0u8; len.div_ceil(8)];
		for i in 0..len {
			if f(i) {
				bits[i / 8] |= 1 << (i % 8);
			}
		}
		Self {
			bits: CowVec::new(bits),
			len,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn get(&self, idx: usize) -> bool {
		assert!(idx < self.len, "index {} out of bounds for bitvec of length {}", idx, self.len);
		self.bits[idx / 8] & (1 << (idx % 8)) != 0
	}

	pub fn set(&mut self, idx: usize, value: bool) {
		assert!(idx < self.len, "index {} out of bounds for bitvec of length {}", idx, self.len);
		let byte = &mut self.bits.make_mut()[idx / 8];
		if value {
			*byte |= 1 << (idx % 8);
		} else {
			*byte &= !(1 << (idx % 8));
		}
	}

	pub fn push(&mut self, value: bool) {
		if self.len % 8 == 0 {
			self.bits.push(0);
		}
		self.len += 1;
		self.set(self.len - 1, value);
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|b| b.count_ones() as usize).sum()
	}

	pub fn all_ones(&self) -> bool {
		self.count_ones() == self.len
	}

	/// Bitwise AND of two vectors of equal length.
	pub fn and(&self, other: &BitVec) -> BitVec {
		assert_eq!(self.len, other.len);
		let bits = self.bits.iter().zip(other.bits.iter()).map(|(l, r)| l & r).collect();
		BitVec {
			bits,
			len: self.len,
		}
	}

	pub fn iter(&self) -> BitVecIter<'_> {
		BitVecIter {
			bitvec: self,
			pos: 0,
		}
	}

	pub fn to_vec(&self) -> Vec<bool> {
		self.iter().collect()
	}
}

impl Default for BitVec {
	fn default() -> Self {
		Self::new()
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("BitVec[")?;
		for bit in self.iter() {
			f.write_str(if bit {
				"1"
			} else {
				"0"
			})?;
		}
		f.write_str("]")
	}
}

impl From<Vec<bool>> for BitVec {
	fn from(value: Vec<bool>) -> Self {
		Self::from_slice(&value)
	}
}

impl From<&[bool]> for BitVec {
	fn from(value: &[bool]) -> Self {
		Self::from_slice(value)
	}
}

impl<const N: usize> From<[bool; N]> for BitVec {
	fn from(value: [bool; N]) -> Self {
		Self::from_slice(&value)
	}
}

impl FromIterator<bool> for BitVec {
	fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
		let mut result = BitVec::new();
		for bit in iter {
			result.push(bit);
		}
		result
	}
}

pub struct BitVecIter<'a> {
	bitvec: &'a BitVec,
	pos: usize,
}

impl Iterator for BitVecIter<'_> {
	type Item = bool;

	fn next(&mut self) -> Option<Self::Item> {
		if self.pos >= self.bitvec.len {
			return None;
		}
		let bit = self.bitvec.get(self.pos);
		self.pos += 1;
		Some(bit)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.bitvec.len - self.pos;
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for BitVecIter<'_> {}
