// Copyright 2025 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Font measurement capability injected into a frame.
///
/// The provider value itself doubles as the opaque font handle: a
/// [`Surface`](crate::Surface) is parameterized over the same type and
/// receives a reference to it in its text-draw call, so an
/// implementation can carry whatever rasterizer state it needs.
///
/// Widths must be consistent between calls: every content mutation in
/// the frame re-derives a box's cached width from the byte range it
/// retains, and redraw trusts those caches.
pub trait FontMetrics {
    /// The display width of a byte range of frame text.
    ///
    /// The bytes use the mixed encoding described in [`crate::runes`]:
    /// UTF-8 with raw control bytes embedded as single-rune units.
    fn width_of(&self, bytes: &[u8]) -> f64;

    /// The display width of a string.
    fn str_width(&self, text: &str) -> f64 {
        self.width_of(text.as_bytes())
    }

    /// The display width of a sequence of runes.
    fn runes_width(&self, runes: &[char]) -> f64 {
        let text: String = runes.iter().collect();
        self.width_of(text.as_bytes())
    }

    /// The default line height, in pixels.
    fn line_height(&self) -> f64;
}
