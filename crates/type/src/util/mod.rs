// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod bitvec;
pub mod cowvec;
