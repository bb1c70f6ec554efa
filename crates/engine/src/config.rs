// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// What happens to a slot whose integer result does not fit the result kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
	/// Two's complement wrap around.
	#[default]
	Wrap,
	/// Clamp to the bounds of the result kind.
	Saturate,
	/// Fail the whole operation.
	Error,
	/// Mark the slot undefined. Division by zero is treated the same way.
	Undefined,
}

impl Display for OverflowPolicy {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			OverflowPolicy::Wrap => f.write_str("wrap"),
			OverflowPolicy::Saturate => f.write_str("saturate"),
			OverflowPolicy::Error => f.write_str("error"),
			OverflowPolicy::Undefined => f.write_str("undefined"),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArithmeticConfig {
	pub overflow: OverflowPolicy,
}

impl ArithmeticConfig {
	pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
		self.overflow = overflow;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_wraps() {
		assert_eq!(ArithmeticConfig::default().overflow, OverflowPolicy::Wrap);
	}

	#[test]
	fn test_with_overflow() {
		let config = ArithmeticConfig::default().with_overflow(OverflowPolicy::Saturate);
		assert_eq!(config.overflow, OverflowPolicy::Saturate);
	}

	#[test]
	fn test_deserialize() {
		let config: ArithmeticConfig = serde_json::from_str(r#"{"overflow": "undefined"}"#).unwrap();
		assert_eq!(config.overflow, OverflowPolicy::Undefined);

		let config: ArithmeticConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, ArithmeticConfig::default());
	}

	#[test]
	fn test_display() {
		assert_eq!(OverflowPolicy::Saturate.to_string(), "saturate");
	}
}
