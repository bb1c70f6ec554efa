// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod bool;
mod number;

pub use bool::BoolContainer;
pub use number::NumberContainer;
