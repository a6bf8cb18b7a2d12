// Copyright 2025 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text-frame layout with incremental redraw.
//!
//! A [`Frame`] lays a run of text boxes out into visible screen lines
//! within a rectangular region, tracks an insertion tick and a
//! character-range selection, and repaints only the screen area affected
//! when the text, selection, or tick changes.
//!
//! Font measurement and pixel output are injected capabilities: the frame
//! is generic over a [`FontMetrics`] provider and a raster [`Surface`],
//! and never reaches for process-wide display state.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("frieze requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use peniko;

mod boxes;
mod draw;
mod error;
mod frame;
mod layout;
mod metrics;
mod surface;

pub mod runes;

pub use error::{Error, ErrorKind};
pub use frame::{ColorScheme, Frame};
pub use metrics::FontMetrics;
pub use surface::Surface;
