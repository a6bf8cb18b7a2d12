// Copyright 2025 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Frieze Dev
//!
//! This crate provides utilities for developing Frieze: deterministic
//! fake font metrics and a raster surface that records every operation
//! performed against it, so tests can assert on exactly which pixels a
//! repaint touched.

use peniko::kurbo::{Point, Rect, Size};
use peniko::Color;

use frieze::runes::rune_count;
use frieze::{FontMetrics, Surface};

/// Fixed-width fake metrics: every rune is `per_rune` pixels wide and
/// lines are `line_height` pixels tall.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    /// Width of every rune.
    pub per_rune: f64,
    /// Height of every line.
    pub line_height: f64,
}

impl FixedMetrics {
    /// A 10-pixel-per-rune, 13-pixel-line fake, the conventional values
    /// used throughout the test suites.
    pub fn new() -> Self {
        Self {
            per_rune: 10.0,
            line_height: 13.0,
        }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl FontMetrics for FixedMetrics {
    fn width_of(&self, bytes: &[u8]) -> f64 {
        self.per_rune * rune_count(bytes) as f64
    }

    fn line_height(&self) -> f64 {
        self.line_height
    }
}

/// Non-additive fake metrics: a constant overhead is added to every
/// measurement, so the width of a concatenation differs from the sum of
/// its parts. Useful for verifying that width caches are re-derived
/// from the provider rather than recombined arithmetically.
#[derive(Debug, Clone, Copy)]
pub struct PaddedMetrics {
    /// Width of every rune.
    pub per_rune: f64,
    /// Constant added to every measurement.
    pub padding: f64,
}

impl FontMetrics for PaddedMetrics {
    fn width_of(&self, bytes: &[u8]) -> f64 {
        self.per_rune * rune_count(bytes) as f64 + self.padding
    }

    fn line_height(&self) -> f64 {
        13.0
    }
}

/// An opaque image handle allocated by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patch(pub u32);

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A solid fill.
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A glyph draw.
    Text {
        /// Top-left corner of the drawn text.
        origin: Point,
        /// Text color.
        color: Color,
        /// The drawn bytes.
        bytes: Vec<u8>,
    },
    /// An image copy onto the surface.
    Blit {
        /// Destination area.
        dest: Rect,
        /// Source image.
        src: Patch,
        /// Read offset within the source.
        origin: Point,
    },
    /// A solid fill through an alpha mask.
    FillMasked {
        /// Destination area.
        dest: Rect,
        /// Fill color.
        color: Color,
        /// The mask image.
        mask: Patch,
        /// Read offset within the mask.
        origin: Point,
    },
    /// A capture of surface pixels into a new image.
    Snapshot {
        /// Captured area.
        rect: Rect,
        /// The image the pixels went to.
        image: Patch,
    },
    /// A baked tick mask.
    BuildTick {
        /// Mask dimensions.
        size: Size,
        /// Opaque areas within the mask.
        marks: Vec<Rect>,
        /// The image the mask went to.
        image: Patch,
    },
}

/// A raster surface that performs no drawing and records every call.
#[derive(Debug)]
pub struct RecordingSurface {
    /// Every operation performed, in order.
    pub ops: Vec<DrawOp>,
    /// The scale factor reported to the frame; tests change this to
    /// exercise tick re-initialization.
    pub scale: f64,
    next_patch: u32,
}

impl RecordingSurface {
    /// A surface at 100% scale with an empty op log.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            scale: 1.0,
            next_patch: 0,
        }
    }

    /// Drops the recorded operations, keeping allocation state.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// The number of recorded operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The subset of recorded operations that are solid fills.
    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// The subset of recorded operations that are glyph draws, with the
    /// bytes decoded lossily for assertion convenience.
    pub fn texts(&self) -> Vec<(Point, Color, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    origin,
                    color,
                    bytes,
                } => Some((*origin, *color, String::from_utf8_lossy(bytes).into_owned())),
                _ => None,
            })
            .collect()
    }

    fn alloc(&mut self) -> Patch {
        let patch = Patch(self.next_patch);
        self.next_patch += 1;
        patch
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FontMetrics> Surface<F> for RecordingSurface {
    type Image = Patch;

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn draw_bytes(&mut self, origin: Point, color: Color, _font: &F, bytes: &[u8]) {
        self.ops.push(DrawOp::Text {
            origin,
            color,
            bytes: bytes.to_vec(),
        });
    }

    fn blit(&mut self, dest: Rect, src: &Patch, origin: Point) {
        self.ops.push(DrawOp::Blit {
            dest,
            src: *src,
            origin,
        });
    }

    fn fill_masked(&mut self, dest: Rect, color: Color, mask: &Patch, origin: Point) {
        self.ops.push(DrawOp::FillMasked {
            dest,
            color,
            mask: *mask,
            origin,
        });
    }

    fn snapshot(&mut self, rect: Rect) -> Patch {
        let image = self.alloc();
        self.ops.push(DrawOp::Snapshot { rect, image });
        image
    }

    fn build_tick(&mut self, size: Size, marks: &[Rect]) -> Patch {
        let image = self.alloc();
        self.ops.push(DrawOp::BuildTick {
            size,
            marks: marks.to_vec(),
            image,
        });
        image
    }

    fn scale_factor(&self) -> f64 {
        self.scale
    }
}

/// The conventional color scheme used by the test suites: white paper,
/// black ink, yellow highlight.
pub fn test_colors() -> frieze::ColorScheme {
    frieze::ColorScheme {
        background: Color::WHITE,
        text: Color::BLACK,
        highlight: Color::from_rgba8(196, 196, 0, 255),
        highlight_text: Color::BLACK,
    }
}
