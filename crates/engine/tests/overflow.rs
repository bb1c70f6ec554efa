// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tessera_engine::{ArithmeticConfig, Engine, OverflowPolicy};
use tessera_type::{ColumnData, Decimal, Value};

fn engine(overflow: OverflowPolicy) -> Engine {
	Engine::new(ArithmeticConfig::default().with_overflow(overflow))
}

fn from_json(json: &str) -> Engine {
	let config: ArithmeticConfig = serde_json::from_str(json).unwrap();
	Engine::new(config)
}

#[test]
fn test_default_wraps() {
	let result = Engine::default().add_value(&ColumnData::byte([250, 1]), &Value::byte(10)).unwrap();
	assert_eq!(result, ColumnData::byte([4, 11]));
}

#[test]
fn test_saturate() {
	let result = engine(OverflowPolicy::Saturate).add_value(&ColumnData::byte([250, 1]), &Value::byte(10)).unwrap();
	assert_eq!(result, ColumnData::byte([255, 11]));

	let result =
		engine(OverflowPolicy::Saturate).subtract_value(&ColumnData::sbyte([-120]), &Value::sbyte(10)).unwrap();
	assert_eq!(result, ColumnData::sbyte([i8::MIN]));
}

#[test]
fn test_error() {
	let err = engine(OverflowPolicy::Error).multiply(&ColumnData::long([i64::MAX]), &ColumnData::long([2])).unwrap_err();
	assert_eq!(err.code(), "NUMBER_002");
}

#[test]
fn test_undefined() {
	let result = engine(OverflowPolicy::Undefined).add_value(&ColumnData::byte([250, 1]), &Value::byte(10)).unwrap();
	assert_eq!(result.to_vec(), vec![None, Some(Value::byte(11))]);
}

#[test]
fn test_overflow_after_promotion_uses_result_kind() {
	let result = engine(OverflowPolicy::Error).add(&ColumnData::byte([255]), &ColumnData::short([1])).unwrap();
	assert_eq!(result, ColumnData::short([256]));
}

#[test]
fn test_float_follows_ieee() {
	let result = Engine::default().divide_value(&ColumnData::double([1.0, -1.0, 0.0]), &Value::double(0.0)).unwrap();
	let values: Vec<f64> = result.to_vec().into_iter().map(|v| match v {
		Some(Value::Double(v)) => v,
		other => panic!("unexpected {other:?}"),
	}).collect();
	assert_eq!(values[0], f64::INFINITY);
	assert_eq!(values[1], f64::NEG_INFINITY);
	assert!(values[2].is_nan());
}

#[test]
fn test_decimal_is_exact() {
	let big = Decimal::from(u64::MAX);
	let result = engine(OverflowPolicy::Error).add_value(&ColumnData::decimal([big]), &Value::int(1)).unwrap();
	assert_eq!(result.get(0), Some(Value::decimal("18446744073709551616".parse::<Decimal>().unwrap())));
}

#[test]
fn test_division_by_zero_per_policy() {
	for json in [r#"{"overflow": "wrap"}"#, r#"{"overflow": "saturate"}"#, r#"{"overflow": "error"}"#] {
		let err = from_json(json).modulo_value(&ColumnData::uint([1]), &Value::uint(0)).unwrap_err();
		assert_eq!(err.code(), "NUMBER_001");
	}

	let result = from_json(r#"{"overflow": "undefined"}"#)
		.divide(&ColumnData::int([6, 6]), &ColumnData::int([0, 3]))
		.unwrap();
	assert_eq!(result.to_vec(), vec![None, Some(Value::int(2))]);
}

#[test]
fn test_config_round_trip() {
	let config = ArithmeticConfig::default().with_overflow(OverflowPolicy::Error);
	let json = serde_json::to_string(&config).unwrap();
	assert_eq!(json, r#"{"overflow":"error"}"#);
	assert_eq!(serde_json::from_str::<ArithmeticConfig>(&json).unwrap(), config);
}

#[test]
fn test_unknown_policy_is_rejected() {
	assert!(serde_json::from_str::<ArithmeticConfig>(r#"{"overflow": "clamp"}"#).is_err());
}

#[test]
fn test_error_policy_keeps_non_finite_operands() {
	let engine = engine(OverflowPolicy::Error);
	let result = engine.add_value(&ColumnData::double([f64::NAN, f64::INFINITY]), &Value::double(1.0)).unwrap();
	let values = result.to_vec();
	assert!(matches!(values[0], Some(Value::Double(v)) if v.is_nan()));
	assert_eq!(values[1], Some(Value::double(f64::INFINITY)));

	let err = engine.multiply(&ColumnData::float([f32::MAX]), &ColumnData::float([2.0])).unwrap_err();
	assert_eq!(err.code(), "NUMBER_002");
}
