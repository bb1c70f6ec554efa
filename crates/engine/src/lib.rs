// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Arithmetic, shift, logic and comparison over typed columns.
//!
//! Operands of different kinds are promoted to a common kind by
//! [`tessera_type::promote`] before a homogeneous kernel runs.

mod column;
pub mod config;
mod dispatch;
mod engine;
pub mod evaluate;
mod kernel;
mod operations;

pub use column::Column;
pub use config::{ArithmeticConfig, OverflowPolicy};
pub use engine::{Engine, InPlace};
pub use evaluate::EvaluationContext;
pub use operations::ColumnOperations;
