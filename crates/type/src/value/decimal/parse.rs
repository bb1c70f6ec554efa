// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, str::FromStr};

use bigdecimal::BigDecimal;

use crate::{Error, error::TypeError, return_error, value::decimal::Decimal};

pub fn parse_decimal(text: &str) -> Result<Decimal, Error> {
	let needs_trimming = text.as_bytes().first().is_some_and(|b| b.is_ascii_whitespace())
		|| text.as_bytes().last().is_some_and(|b| b.is_ascii_whitespace());
	let has_underscores = text.as_bytes().contains(&b'_');

	let value = match (needs_trimming, has_underscores) {
		(false, false) => Cow::Borrowed(text),
		(true, false) => Cow::Borrowed(text.trim()),
		(false, true) => Cow::Owned(text.replace('_', "")),
		(true, true) => Cow::Owned(text.trim().replace('_', "")),
	};

	if value.is_empty() {
		return_error!(TypeError::InvalidNumberFormat {
			text: text.to_string(),
		});
	}

	let big_decimal = BigDecimal::from_str(&value).map_err(|_| {
		Error::from(TypeError::InvalidNumberFormat {
			text: text.to_string(),
		})
	})?;

	Ok(Decimal::new(big_decimal))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_decimal_integer() {
		let decimal = parse_decimal("123").unwrap();
		assert_eq!(decimal.to_string(), "123");
	}

	#[test]
	fn test_parse_decimal_with_fractional() {
		let decimal = parse_decimal("123.45").unwrap();
		assert_eq!(decimal.to_string(), "123.45");
	}

	#[test]
	fn test_parse_decimal_with_underscores() {
		let decimal = parse_decimal(" 1_234.56 ").unwrap();
		assert_eq!(decimal.to_string(), "1234.56");
	}

	#[test]
	fn test_parse_decimal_negative() {
		let decimal = parse_decimal("-123.45").unwrap();
		assert_eq!(decimal.to_string(), "-123.45");
	}

	#[test]
	fn test_parse_decimal_empty() {
		let err = parse_decimal("").unwrap_err();
		assert_eq!(err.code(), "NUMBER_003");
	}

	#[test]
	fn test_parse_decimal_invalid() {
		assert!(parse_decimal("not_a_number").is_err());
	}

	#[test]
	fn test_parse_decimal_scientific_notation() {
		let decimal = parse_decimal("1.23e2").unwrap();
		assert_eq!(decimal.to_string(), "123");
	}
}
