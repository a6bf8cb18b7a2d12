// Copyright 2025 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration tests for Frieze.

mod tick;
mod util;
