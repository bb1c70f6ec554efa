// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use serde::{Deserialize, Serialize};

/// A vector that is shared between clones until one of them writes to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CowVec<T>
where
	T: Clone,
{
	inner: Arc<Vec<T>>,
}

impl<T> CowVec<T>
where
	T: Clone,
{
	pub fn new(vec: Vec<T>) -> Self {
		Self {
			inner: Arc::new(vec),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self::new(Vec::with_capacity(capacity))
	}

	/// Ensures unique ownership and returns a mutable reference to the inner Vec.
	pub fn make_mut(&mut self) -> &mut Vec<T> {
		Arc::make_mut(&mut self.inner)
	}

	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}

	pub fn get(&self, idx: usize) -> Option<&T> {
		self.inner.get(idx)
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// True when both vectors point at the same allocation.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}

	pub fn is_shared(&self) -> bool {
		Arc::strong_count(&self.inner) > 1
	}

	pub fn push(&mut self, value: T) {
		self.make_mut().push(value);
	}

	pub fn extend(&mut self, iter: impl IntoIterator<Item = T>) {
		self.make_mut().extend(iter);
	}
}

impl<T> Deref for CowVec<T>
where
	T: Clone,
{
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl<T> From<Vec<T>> for CowVec<T>
where
	T: Clone,
{
	fn from(vec: Vec<T>) -> Self {
		Self::new(vec)
	}
}

impl<T> FromIterator<T> for CowVec<T>
where
	T: Clone,
{
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
