// Copyright 2025 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use peniko::kurbo::Rect;
use peniko::Color;

use crate::boxes::{BoxList, FrameBox};
use crate::metrics::FontMetrics;
use crate::surface::Surface;

/// The named colors a frame paints with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorScheme {
    /// Plain background.
    pub background: Color,
    /// Plain text.
    pub text: Color,
    /// Selected-range background.
    pub highlight: Color,
    /// Selected-range text.
    pub highlight_text: Color,
}

/// A text frame: a run of boxes laid out into screen lines within a
/// rectangle, with a character-range selection and an insertion tick.
///
/// The frame owns its boxes, the injected font-metrics provider, and
/// the raster surface it paints into. All operations are synchronous;
/// callers serialize access.
pub struct Frame<F: FontMetrics, S: Surface<F>> {
    pub(crate) font: F,
    pub(crate) surface: S,
    pub(crate) rect: Rect,
    pub(crate) colors: ColorScheme,
    pub(crate) boxes: BoxList,
    /// Logical character count: the sum of all boxes' rune counts.
    pub(crate) nchars: usize,
    /// Selection endpoints, `p0 <= p1`, in `[0, nchars]`.
    pub(crate) p0: usize,
    pub(crate) p1: usize,
    /// Whether the tick is currently drawn on the surface.
    pub(crate) ticked: bool,
    /// DPI scale the tick glyph was built for.
    pub(crate) tick_scale: f64,
    pub(crate) tick_image: Option<S::Image>,
    /// Pixels saved from under the tick while it is shown.
    pub(crate) tick_back: Option<S::Image>,
    /// Tab stop interval.
    pub(crate) max_tab: f64,
    pub(crate) max_lines: usize,
    /// Suppresses glyph drawing while set; fills still happen.
    pub(crate) no_redraw: bool,
}

impl<F: FontMetrics, S: Surface<F>> Frame<F, S> {
    /// Creates an empty frame over `rect`, painting into `surface` with
    /// `font` for measurement.
    ///
    /// The rectangle's height is quantized down to a whole number of
    /// lines, and the tick glyph is built for the surface's current
    /// scale factor.
    pub fn new(rect: Rect, font: F, surface: S, colors: ColorScheme) -> Self {
        let max_tab = 8.0 * font.str_width("0");
        let mut frame = Self {
            font,
            surface,
            rect: Rect::ZERO,
            colors,
            boxes: BoxList::default(),
            nchars: 0,
            p0: 0,
            p1: 0,
            ticked: false,
            tick_scale: 0.0,
            tick_image: None,
            tick_back: None,
            max_tab,
            max_lines: 0,
            no_redraw: false,
        };
        frame.set_rect(rect);
        frame.init_tick();
        frame
    }

    /// Changes the layout rectangle, re-quantizing its height to a
    /// whole number of lines.
    ///
    /// The box model is not reflowed; reload content afterwards.
    pub fn set_rect(&mut self, rect: Rect) {
        let height = self.font.line_height();
        let lines = if rect.height() > 0.0 {
            (rect.height() / height) as usize
        } else {
            0
        };
        self.max_lines = lines;
        self.rect = Rect::new(
            rect.x0,
            rect.y0,
            rect.x1,
            rect.y0 + lines as f64 * height,
        );
    }

    /// Drops all content and resets the selection and tick state.
    pub fn clear(&mut self) {
        self.boxes = BoxList::default();
        self.nchars = 0;
        self.p0 = 0;
        self.p1 = 0;
        self.ticked = false;
        self.tick_back = None;
    }

    /// Replaces the frame's content with boxes built from `bytes` and
    /// lays them out.
    ///
    /// Text runs are split at `\t` and `\n`, which become control
    /// boxes. Content that does not fit the rectangle vertically is
    /// discarded from the model, not merely hidden: the character count
    /// after a load reflects only what is visible.
    ///
    /// Nothing is painted; call [`redraw`](Self::redraw) afterwards.
    pub fn load(&mut self, bytes: &[u8]) {
        self.clear();
        let mut start = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            if byte == b'\t' || byte == b'\n' {
                if start < i {
                    self.boxes.push(FrameBox::text(&bytes[start..i], &self.font));
                }
                self.boxes.push(FrameBox::control(byte, &self.font));
                start = i + 1;
            }
        }
        if start < bytes.len() {
            self.boxes.push(FrameBox::text(&bytes[start..], &self.font));
        }
        self.nchars = (0..self.boxes.len())
            .map(|bn| self.boxes.get(bn).runes())
            .sum();
        let origin = self.rect.origin();
        self.lay_out(origin);
    }

    /// The selection start, in characters.
    pub fn p0(&self) -> usize {
        self.p0
    }

    /// The selection end, in characters.
    pub fn p1(&self) -> usize {
        self.p1
    }

    /// The logical character count.
    pub fn nchars(&self) -> usize {
        self.nchars
    }

    /// The layout rectangle (height quantized to whole lines).
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Whether the tick is currently drawn.
    pub fn ticked(&self) -> bool {
        self.ticked
    }

    /// The number of whole lines the rectangle holds.
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// The default line height under the active metrics provider.
    pub fn line_height(&self) -> f64 {
        self.font.line_height()
    }

    /// The frame's color scheme.
    pub fn colors(&self) -> ColorScheme {
        self.colors
    }

    /// The injected metrics provider.
    pub fn font(&self) -> &F {
        &self.font
    }

    /// The surface the frame paints into.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Suppresses or re-enables glyph drawing (background fills still
    /// happen while suppressed).
    pub fn set_no_redraw(&mut self, no_redraw: bool) {
        self.no_redraw = no_redraw;
    }
}

impl<F: FontMetrics, S: Surface<F>> fmt::Debug for Frame<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("rect", &self.rect)
            .field("nboxes", &self.boxes.len())
            .field("nchars", &self.nchars)
            .field("p0", &self.p0)
            .field("p1", &self.p1)
            .field("ticked", &self.ticked)
            .finish_non_exhaustive()
    }
}
