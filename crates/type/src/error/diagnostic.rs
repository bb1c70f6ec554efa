// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::{error::TypeError, value::kind::Kind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.code, self.message)
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			TypeError::UnsupportedKindCombination {
				op,
				left,
				right,
			} => {
				let sym = op.symbol();
				let mut notes = vec![
					format!("Left operand is of kind: {}", left),
					format!("Right operand is of kind: {}", right),
				];
				if left == Kind::Bool || right == Kind::Bool {
					notes.push("bool only combines with bool through logic and equality operators".to_string());
				}
				Diagnostic {
					code: "OPERATOR_001".to_string(),
					message: format!("Cannot apply '{}' operator to {} and {}", sym, left, right),
					label: Some(format!("'{}' operator on incompatible kinds", sym)),
					help: Some("Convert one operand to a compatible kind first".to_string()),
					notes,
				}
			}

			TypeError::UnsupportedShift {
				op,
				kind,
			} => Diagnostic {
				code: "OPERATOR_002".to_string(),
				message: format!("Cannot apply '{}' operator to {}", op.symbol(), kind),
				label: Some("shift on a non-integer kind".to_string()),
				help: None,
				notes: vec!["Shifts are defined for integer kinds and char only".to_string()],
			},

			TypeError::LengthMismatch {
				op,
				left,
				right,
			} => Diagnostic {
				code: "OPERATOR_003".to_string(),
				message: format!(
					"Cannot apply '{}' operator to columns of length {} and {}",
					op.symbol(),
					left,
					right
				),
				label: Some("column length mismatch".to_string()),
				help: None,
				notes: vec![],
			},

			TypeError::UnsupportedConversion {
				from,
				to,
			} => Diagnostic {
				code: "CAST_001".to_string(),
				message: format!("unsupported conversion from {} to {}", from, to),
				label: Some("unsupported conversion".to_string()),
				help: Some("ensure the source and target kinds are compatible for conversion".to_string()),
				notes: vec![],
			},

			TypeError::ConversionOutOfRange {
				from,
				to,
				value,
			} => Diagnostic {
				code: "CAST_002".to_string(),
				message: format!("value {} of {} cannot be represented as {}", value, from, to),
				label: Some(format!("out of range for {}", to)),
				help: None,
				notes: vec![],
			},

			TypeError::DivisionByZero {
				op,
				kind,
			} => Diagnostic {
				code: "NUMBER_001".to_string(),
				message: format!("'{}' on {} divided by zero", op.symbol(), kind),
				label: Some("zero divisor".to_string()),
				help: Some("Use the undefined overflow policy to turn such slots into nulls".to_string()),
				notes: vec![],
			},

			TypeError::Overflow {
				op,
				kind,
			} => Diagnostic {
				code: "NUMBER_002".to_string(),
				message: format!("'{}' on {} is out of range", op.symbol(), kind),
				label: Some(format!("result does not fit into {}", kind)),
				help: Some("Use a wider kind or a wrapping or saturating overflow policy".to_string()),
				notes: vec![],
			},

			TypeError::InvalidNumberFormat {
				text,
			} => Diagnostic {
				code: "NUMBER_003".to_string(),
				message: format!("'{}' is not a valid decimal", text),
				label: Some("invalid number format".to_string()),
				help: Some("Use digits with an optional sign, fraction and exponent, e.g. -12.5e3".to_string()),
				notes: vec![],
			},

			TypeError::UnknownKind {
				name,
			} => Diagnostic {
				code: "TYPE_001".to_string(),
				message: format!("unknown kind '{}'", name),
				label: None,
				help: Some("Valid kinds are Bool, Byte, SByte, Short, UShort, Int, UInt, Long, ULong, Float, Double, Decimal and Char".to_string()),
				notes: vec![],
			},
		}
	}
}
