// Copyright 2025 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Incremental repaint of the selection and the insertion tick.

use peniko::kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::error::Error;
use crate::frame::Frame;
use crate::metrics::FontMetrics;
use crate::runes::rune_index;
use crate::surface::Surface;

/// Width of the tick glyph at scale 1, in pixels.
const TICK_WIDTH: usize = 3;

impl<F: FontMetrics, S: Surface<F>> Frame<F, S> {
    /// Repaints the frame so that the drawn selection on return is
    /// `p0..p1`, highlighted or plain.
    ///
    /// `pt` is the screen location of `p0` and must come from
    /// [`pt_of_char`](Self::pt_of_char). Any previously drawn selection
    /// is cleared to the plain scheme first, and the tick is erased and
    /// (for an empty range) re-drawn at the new position.
    ///
    /// # Panics
    ///
    /// Panics if `p0 > p1`; the endpoints being ordered is a caller
    /// contract, not a runtime condition.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidRange`](crate::ErrorKind) when `p1`
    /// lies beyond the frame's character count.
    pub fn draw_sel(
        &mut self,
        pt: Point,
        p0: usize,
        p1: usize,
        highlighted: bool,
    ) -> Result<(), Error> {
        assert!(p0 <= p1, "draw_sel: p0 and p1 must be ordered");
        if p1 > self.nchars {
            return Err(Error::invalid_range(p0, p1, self.nchars));
        }
        log::trace!(
            "draw_sel {p0}..{p1} highlighted={highlighted} (was {}..{})",
            self.p0,
            self.p1
        );

        if self.ticked {
            let old = self.pt_of_char(self.p0);
            self.tick(old, false);
        }

        if self.p0 != self.p1 {
            // Clear the old selection so the repaint below starts from
            // a plain background.
            let old = self.pt_of_char(self.p0);
            self.draw_sel_range(old, self.p0, self.p1, self.colors.background, self.colors.text);
        }

        if p0 == p1 {
            self.tick(pt, highlighted);
            self.p0 = p0;
            self.p1 = p1;
            return Ok(());
        }

        let (back, text) = if highlighted {
            (self.colors.highlight, self.colors.highlight_text)
        } else {
            (self.colors.background, self.colors.text)
        };
        self.draw_sel_range(pt, p0, p1, back, text);
        self.p0 = p0;
        self.p1 = p1;
        Ok(())
    }

    /// Repaints the characters `p0..p1` with the given background and
    /// text colors, without touching the tick or the committed
    /// selection. `pt` is the screen location of `p0`.
    ///
    /// Walks the boxes overlapping the range; a partially covered box
    /// is measured over just the overlapping byte window, and when the
    /// range spans a line wrap the remainder of the earlier line is
    /// filled with `back` before continuing. Returns the point just
    /// past the last repainted character.
    pub(crate) fn draw_sel_range(
        &mut self,
        mut pt: Point,
        p0: usize,
        p1: usize,
        back: Color,
        text: Color,
    ) -> Point {
        assert!(p0 <= p1, "draw_sel_range: p0 and p1 must be ordered");
        let height = self.font.line_height();
        let mut p = 0;
        let mut trim = false;
        let mut nb = 0;
        while nb < self.boxes.len() && p < p1 {
            let mut nr = self.boxes.get(nb).runes();
            if p + nr <= p0 {
                // Entirely before the range.
                p += nr;
                nb += 1;
                continue;
            }
            if p >= p0 {
                let qt = pt;
                self.check_line_wrap(&mut pt, nb);
                if pt.y > qt.y {
                    // Mid-range wrap: fill out the rest of the line.
                    self.surface
                        .fill_rect(Rect::new(qt.x, qt.y, self.rect.x1, pt.y), back);
                }
            }
            let mut from = 0;
            if p < p0 {
                // Start of the range: advance into the box.
                from = p0 - p;
                nr -= p0 - p;
                p = p0;
            }
            trim = false;
            if p + nr > p1 {
                // End of the range: trim the box.
                nr -= (p + nr) - p1;
                trim = true;
            }

            let frame_box = self.boxes.get(nb);
            let w = if !frame_box.is_text() || (from == 0 && nr == frame_box.runes()) {
                frame_box.width()
            } else {
                self.sub_width(nb, from, nr)
            };
            let x = (pt.x + w).min(self.rect.x1);
            self.surface
                .fill_rect(Rect::new(pt.x, pt.y, x, pt.y + height), back);
            let frame_box = self.boxes.get(nb);
            if frame_box.is_text() {
                let bytes = frame_box.bytes();
                let start = rune_index(bytes, from);
                let end = start + rune_index(&bytes[start..], nr);
                self.surface
                    .draw_bytes(pt, text, &self.font, &bytes[start..end]);
            }
            pt.x += w;
            p += nr;
            nb += 1;
        }

        // A range that ends exactly at a wrap still owes the rest of
        // that line, unless the last box was trimmed short.
        if p1 > p0 && !trim && nb > 0 && nb < self.boxes.len() {
            let prev = self.boxes.get(nb - 1);
            if prev.is_text() && prev.runes() > 0 {
                let qt = pt;
                self.check_line_wrap(&mut pt, nb);
                if pt.y > qt.y {
                    self.surface
                        .fill_rect(Rect::new(qt.x, qt.y, self.rect.x1, pt.y), back);
                }
            }
        }
        pt
    }

    /// Repaints all visible text: plain up to `p0`, highlighted through
    /// `p1`, plain to the end. When the selection is empty the tick is
    /// re-shown afterwards if it was visible.
    pub fn redraw(&mut self) {
        if self.p0 == self.p1 {
            let ticked = self.ticked;
            if ticked {
                let pt = self.pt_of_char(self.p0);
                self.tick(pt, false);
            }
            let origin = self.pt_of_char(0);
            let nchars = self.nchars;
            self.draw_sel_range(origin, 0, nchars, self.colors.background, self.colors.text);
            if ticked {
                let pt = self.pt_of_char(self.p0);
                self.tick(pt, true);
            }
            return;
        }

        let mut pt = self.pt_of_char(0);
        let (p0, p1, nchars) = (self.p0, self.p1, self.nchars);
        pt = self.draw_sel_range(pt, 0, p0, self.colors.background, self.colors.text);
        pt = self.draw_sel_range(pt, p0, p1, self.colors.highlight, self.colors.highlight_text);
        self.draw_sel_range(pt, p1, nchars, self.colors.background, self.colors.text);
    }

    /// Draws (`on`) or erases (`!on`) the insertion tick at `pt`.
    ///
    /// A no-op when the requested state matches the current one or `pt`
    /// lies outside the frame. If the surface's scale factor changed
    /// since the glyph was built, it is rebuilt first.
    pub fn tick(&mut self, pt: Point, on: bool) {
        if self.tick_scale != self.surface.scale_factor() {
            if self.ticked {
                self.tick0(pt, false);
            }
            self.init_tick();
        }
        self.tick0(pt, on);
    }

    fn tick0(&mut self, pt: Point, on: bool) {
        if self.ticked == on || self.tick_image.is_none() || !self.rect.contains(pt) {
            return;
        }
        log::trace!("tick on={on} at ({}, {})", pt.x, pt.y);
        let height = self.font.line_height();
        let mut pt = pt;
        pt.x -= self.tick_scale;
        let mut r = Rect::new(
            pt.x,
            pt.y,
            pt.x + TICK_WIDTH as f64 * self.tick_scale,
            pt.y + height,
        );
        if r.x1 > self.rect.x1 {
            r.x1 = self.rect.x1;
        }

        if on {
            self.tick_back = Some(self.surface.snapshot(r));
            if let Some(mask) = self.tick_image.as_ref() {
                self.surface.fill_masked(r, Color::BLACK, mask, Point::ZERO);
            }
        } else if let Some(back) = self.tick_back.as_ref() {
            self.surface.blit(r, back, Point::ZERO);
        }
        self.ticked = on;
    }

    /// Rebuilds the tick glyph for the surface's current scale factor:
    /// a full-height vertical bar with a square nub at each end, baked
    /// by the surface into an alpha mask.
    pub(crate) fn init_tick(&mut self) {
        let scale = self.surface.scale_factor();
        self.tick_scale = scale;
        let height = self.font.line_height();
        let width = TICK_WIDTH as f64 * scale;
        let marks = [
            Rect::new(
                scale * (TICK_WIDTH / 2) as f64,
                0.0,
                scale * (TICK_WIDTH / 2 + 1) as f64,
                height,
            ),
            Rect::new(0.0, 0.0, width, width),
            Rect::new(0.0, height - width, width, height),
        ];
        self.tick_image = Some(self.surface.build_tick(Size::new(width, height), &marks));
    }
}
