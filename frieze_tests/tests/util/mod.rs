// Copyright 2025 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use frieze::Frame;
use frieze_dev::{test_colors, FixedMetrics, RecordingSurface};
use peniko::kurbo::Rect;

/// The frame type every test drives: fixed 10-pixel runes, 13-pixel
/// lines, recording surface.
pub type TestFrame = Frame<FixedMetrics, RecordingSurface>;

/// Builds a frame over `rect`, loads `text`, and drops the operations
/// recorded so far, so assertions start from a clean log.
pub fn frame(rect: Rect, text: &str) -> TestFrame {
    let mut frame = Frame::new(
        rect,
        FixedMetrics::new(),
        RecordingSurface::new(),
        test_colors(),
    );
    frame.load(text.as_bytes());
    frame.surface_mut().clear_ops();
    frame
}

/// A five-line, ten-rune-wide rectangle.
pub fn five_lines() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 65.0)
}
