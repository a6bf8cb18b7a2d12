// Copyright 2025 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::metrics::FontMetrics;

/// Raster surface a frame paints into.
///
/// Image allocation stays on this side of the seam: the frame holds
/// opaque [`Image`](Self::Image) handles for the tick glyph and the
/// pixels saved underneath it, but never inspects them.
///
/// All calls are synchronous and assumed non-blocking.
pub trait Surface<F: FontMetrics> {
    /// Opaque offscreen image handle.
    type Image;

    /// Fills `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws text glyphs with their top-left corner at `origin`.
    ///
    /// `bytes` uses the mixed encoding described in [`crate::runes`];
    /// `font` is the same metrics provider the frame measures with.
    fn draw_bytes(&mut self, origin: Point, color: Color, font: &F, bytes: &[u8]);

    /// Copies `src` into `dest`, reading the image from `origin`.
    fn blit(&mut self, dest: Rect, src: &Self::Image, origin: Point);

    /// Fills `dest` with `color` through the alpha mask `mask`, reading
    /// the mask from `origin`.
    fn fill_masked(&mut self, dest: Rect, color: Color, mask: &Self::Image, origin: Point);

    /// Captures the surface pixels under `rect` into a new image.
    fn snapshot(&mut self, rect: Rect) -> Self::Image;

    /// Bakes an alpha mask of the given size that is opaque inside
    /// `marks` and transparent elsewhere.
    fn build_tick(&mut self, size: Size, marks: &[Rect]) -> Self::Image;

    /// The display's DPI scale factor (1.0 at 100%).
    fn scale_factor(&self) -> f64;
}
