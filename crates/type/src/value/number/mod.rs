// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub(crate) mod convert;
pub mod safe;

pub use convert::Primitive;
