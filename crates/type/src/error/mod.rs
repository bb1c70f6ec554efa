// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	error, fmt,
	fmt::{Display, Formatter},
};

pub mod diagnostic;

pub use diagnostic::{Diagnostic, IntoDiagnostic};

use crate::{operator::BinaryOp, value::kind::Kind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("cannot apply {op} to {left} and {right}")]
	UnsupportedKindCombination {
		op: BinaryOp,
		left: Kind,
		right: Kind,
	},

	#[error("cannot apply {op} to {kind}")]
	UnsupportedShift {
		op: BinaryOp,
		kind: Kind,
	},

	#[error("cannot convert {from} to {to}")]
	UnsupportedConversion {
		from: Kind,
		to: Kind,
	},

	#[error("value {value} of {from} is out of range for {to}")]
	ConversionOutOfRange {
		from: Kind,
		to: Kind,
		value: String,
	},

	#[error("{op} requires columns of equal length, got {left} and {right}")]
	LengthMismatch {
		op: BinaryOp,
		left: usize,
		right: usize,
	},

	#[error("{op} on {kind} divided by zero")]
	DivisionByZero {
		op: BinaryOp,
		kind: Kind,
	},

	#[error("{op} on {kind} overflowed")]
	Overflow {
		op: BinaryOp,
		kind: Kind,
	},

	#[error("'{text}' is not a valid decimal")]
	InvalidNumberFormat {
		text: String,
	},

	#[error("unknown kind '{name}'")]
	UnknownKind {
		name: String,
	},
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Error {
	pub fn diagnostic(&self) -> &Diagnostic {
		&self.0
	}

	pub fn into_diagnostic(self) -> Diagnostic {
		*self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl error::Error for Error {}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(Box::new(diagnostic))
	}
}

/// Returns early with the given [`TypeError`] converted into an [`Error`].
#[macro_export]
macro_rules! return_error {
	($err:expr) => {
		return Err($crate::error::Error::from($err))
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_carries_code() {
		let err: Error = TypeError::DivisionByZero {
			op: BinaryOp::Divide,
			kind: Kind::Int,
		}
		.into();
		assert_eq!(err.code(), "NUMBER_001");
		assert!(err.to_string().starts_with("NUMBER_001"));
	}

	#[test]
	fn test_type_error_display() {
		let err = TypeError::UnsupportedKindCombination {
			op: BinaryOp::Add,
			left: Kind::Bool,
			right: Kind::Int,
		};
		assert_eq!(err.to_string(), "cannot apply add to Bool and Int");
	}
}
