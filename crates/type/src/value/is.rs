// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Debug, Display};

use crate::value::decimal::Decimal;

pub trait IsNumber: Display + Clone + Debug + PartialEq + PartialOrd + Default + Send + Sync + 'static {}

pub trait IsFloat: IsNumber {}

impl IsNumber for f32 {}
impl IsFloat for f32 {}

impl IsNumber for f64 {}
impl IsFloat for f64 {}

pub trait IsInt: IsNumber + Copy {}

impl IsNumber for i8 {}
impl IsInt for i8 {}

impl IsNumber for i16 {}
impl IsInt for i16 {}

impl IsNumber for i32 {}
impl IsInt for i32 {}

impl IsNumber for i64 {}
impl IsInt for i64 {}

pub trait IsUint: IsNumber + Copy {}

impl IsNumber for u8 {}
impl IsUint for u8 {}

impl IsNumber for u16 {}
impl IsUint for u16 {}

impl IsNumber for u32 {}
impl IsUint for u32 {}

impl IsNumber for u64 {}
impl IsUint for u64 {}

impl IsNumber for Decimal {}
