// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod operator;
pub mod util;
pub mod value;

pub use error::{Error, TypeError};
pub use operator::{BinaryOp, OperationDescriptor, OperatorFamily, Promotion, ResultKind, promote};
pub use util::{bitvec::BitVec, cowvec::CowVec};
pub use value::{
	Value,
	column::ColumnData,
	container::{BoolContainer, NumberContainer},
	decimal::Decimal,
	kind::Kind,
};

pub type Result<T> = std::result::Result<T, Error>;
