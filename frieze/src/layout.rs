// Copyright 2025 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Converting the box sequence into screen point advances.

use peniko::kurbo::Point;
use peniko::Color;

use crate::frame::Frame;
use crate::metrics::FontMetrics;
use crate::runes::{rune_index, rune_ranges};
use crate::surface::Surface;

impl<F: FontMetrics, S: Surface<F>> Frame<F, S> {
    /// Lays the boxes out from `pt`, splitting any box that only
    /// partially fits its line and recomputing tab advances.
    ///
    /// Content that would start at or below the rectangle's bottom edge
    /// is discarded from the model and the character count reduced to
    /// match. Returns the point just past the last box.
    pub(crate) fn lay_out(&mut self, mut pt: Point) -> Point {
        let mut bn = 0;
        while bn < self.boxes.len() {
            self.check_line_wrap_fit(&mut pt, bn);
            if pt.y >= self.rect.y1 {
                let lost = self.runes_from(bn);
                log::debug!("layout overflow: discarding {lost} runes below the frame");
                self.nchars -= lost;
                let last = self.boxes.len() - 1;
                self.boxes.close(bn, last);
                break;
            }
            let runes = self.boxes.get(bn).runes();
            match self.boxes.get(bn).control_byte() {
                None if runes > 0 => {
                    let fit = self.can_fit(pt, bn);
                    if fit == 0 {
                        break;
                    }
                    if fit != runes {
                        self.boxes.split(bn, fit, &self.font);
                    }
                    pt.x += self.boxes.get(bn).width();
                }
                None => {}
                Some(b'\n') => {
                    pt.x = self.rect.x0;
                    pt.y += self.font.line_height();
                }
                Some(_) => {
                    let width = self.tab_width(pt, bn);
                    self.boxes.get_mut(bn).set_width(width);
                    pt.x += width;
                }
            }
            bn += 1;
        }
        pt
    }

    /// How many runes of the box at `bn` fit between `pt.x` and the
    /// rectangle's right edge. Zero means not even its minimum advance
    /// fits.
    pub(crate) fn can_fit(&self, pt: Point, bn: usize) -> usize {
        let frame_box = self.boxes.get(bn);
        let left = self.rect.x1 - pt.x;
        if !frame_box.is_text() {
            return usize::from(frame_box.min_width() <= left);
        }
        if left >= frame_box.width() {
            return frame_box.runes();
        }
        let bytes = frame_box.bytes();
        let mut left = left;
        for (count, range) in rune_ranges(bytes).enumerate() {
            left -= self.font.width_of(&bytes[range]);
            if left < 0.0 {
                return count;
            }
        }
        frame_box.runes()
    }

    /// Wraps `pt` to the start of the next line if the box at `bn`
    /// cannot shrink to the remaining width.
    pub(crate) fn check_line_wrap(&self, pt: &mut Point, bn: usize) {
        if self.boxes.get(bn).wrap_width() > self.rect.x1 - pt.x {
            self.wrap(pt);
        }
    }

    /// Like [`check_line_wrap`](Self::check_line_wrap), but wraps only
    /// when not even one rune of the box fits on the current line.
    pub(crate) fn check_line_wrap_fit(&self, pt: &mut Point, bn: usize) {
        if self.can_fit(*pt, bn) == 0 {
            self.wrap(pt);
        }
    }

    fn wrap(&self, pt: &mut Point) {
        pt.x = self.rect.x0;
        pt.y += self.font.line_height();
    }

    /// The advance of the tab box at `bn` when placed at `pt`: out to
    /// the next tab stop, at least its minimum, clamped to the right
    /// edge.
    fn tab_width(&self, pt: Point, bn: usize) -> f64 {
        let frame_box = self.boxes.get(bn);
        if frame_box.control_byte() != Some(b'\t') {
            return frame_box.width();
        }
        let right = self.rect.x1;
        let min_width = frame_box.min_width();
        let mut x = pt.x;
        if x + min_width > right {
            x = self.rect.x0;
        }
        x += self.max_tab;
        x -= (x - self.rect.x0) % self.max_tab;
        if x - pt.x < min_width || x > right {
            x = pt.x + min_width;
        }
        x - pt.x
    }

    /// Steps `pt` past the box at `bn`: a newline resets to the start
    /// of the next line, anything else advances by its width.
    pub(crate) fn advance(&self, pt: &mut Point, bn: usize) {
        if self.boxes.get(bn).control_byte() == Some(b'\n') {
            self.wrap(pt);
        } else {
            pt.x += self.boxes.get(bn).width();
        }
    }

    /// The number of runes from box `bn` to the end of the list.
    pub(crate) fn runes_from(&self, bn: usize) -> usize {
        (bn..self.boxes.len())
            .map(|i| self.boxes.get(i).runes())
            .sum()
    }

    /// The screen position of character `p`.
    ///
    /// A position one past the last character is valid and names the
    /// point where the next character would go.
    pub fn pt_of_char(&self, p: usize) -> Point {
        let mut pt = self.rect.origin();
        let mut p = p;
        for bn in 0..self.boxes.len() {
            self.check_line_wrap(&mut pt, bn);
            let frame_box = self.boxes.get(bn);
            let runes = frame_box.runes();
            if p < runes {
                if frame_box.is_text() {
                    let bytes = frame_box.bytes();
                    for range in rune_ranges(bytes).take(p) {
                        pt.x += self.font.width_of(&bytes[range]);
                    }
                }
                return pt;
            }
            p -= runes;
            self.advance(&mut pt, bn);
        }
        pt
    }

    /// The character offset at screen position `pt`.
    ///
    /// The y coordinate is quantized to the line containing it; points
    /// past the last character map to the character count.
    pub fn char_of_pt(&self, pt: Point) -> usize {
        let height = self.font.line_height();
        let line = if pt.y <= self.rect.y0 {
            0
        } else {
            ((pt.y - self.rect.y0) / height) as usize
        };
        let y = self.rect.y0 + line as f64 * height;

        let mut qt = self.rect.origin();
        let mut p = 0;
        let mut bn = 0;
        // Walk down to the target line.
        while bn < self.boxes.len() && qt.y < y {
            self.check_line_wrap(&mut qt, bn);
            if qt.y >= y {
                break;
            }
            p += self.boxes.get(bn).runes();
            self.advance(&mut qt, bn);
            bn += 1;
        }
        // Walk along it to the target x.
        while bn < self.boxes.len() {
            self.check_line_wrap(&mut qt, bn);
            if qt.y > y {
                break;
            }
            let frame_box = self.boxes.get(bn);
            if qt.x + frame_box.width() > pt.x {
                if !frame_box.is_text() {
                    return p;
                }
                let bytes = frame_box.bytes();
                for range in rune_ranges(bytes) {
                    let width = self.font.width_of(&bytes[range]);
                    if qt.x + width > pt.x {
                        break;
                    }
                    qt.x += width;
                    p += 1;
                }
                return p;
            }
            p += frame_box.runes();
            self.advance(&mut qt, bn);
            bn += 1;
        }
        p
    }

    /// Paints every box's glyphs from `pt`, honoring line wraps.
    ///
    /// Backgrounds are not filled here; hosts repainting after an
    /// expose event fill first and then call this. Glyph drawing is
    /// suppressed while [`set_no_redraw`](Self::set_no_redraw) is in
    /// effect.
    pub fn draw_text(&mut self, mut pt: Point, color: Color) {
        for bn in 0..self.boxes.len() {
            self.check_line_wrap(&mut pt, bn);
            let frame_box = self.boxes.get(bn);
            if !self.no_redraw && frame_box.is_text() {
                self.surface
                    .draw_bytes(pt, color, &self.font, frame_box.bytes());
            }
            pt.x += self.boxes.get(bn).width();
        }
    }

    /// Measures the byte window covering `count` runes starting at rune
    /// `from` within the box at `bn`.
    pub(crate) fn sub_width(&self, bn: usize, from: usize, count: usize) -> f64 {
        let bytes = self.boxes.get(bn).bytes();
        let start = rune_index(bytes, from);
        let end = start + rune_index(&bytes[start..], count);
        self.font.width_of(&bytes[start..end])
    }
}
