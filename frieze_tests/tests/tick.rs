// Copyright 2025 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use frieze::Frame;
use frieze_dev::{test_colors, DrawOp, FixedMetrics, RecordingSurface};
use peniko::kurbo::{Point, Rect, Size};

use crate::util::{five_lines, frame};

#[test]
fn new_frame_bakes_the_tick_glyph() {
    let f = Frame::new(
        five_lines(),
        FixedMetrics::new(),
        RecordingSurface::new(),
        test_colors(),
    );
    let ops = &f.surface().ops;
    assert_eq!(ops.len(), 1);
    let DrawOp::BuildTick { size, marks, .. } = &ops[0] else {
        panic!("expected a baked tick glyph, got {ops:?}");
    };
    // Three pixels wide at scale 1, one line tall: a vertical bar with
    // a square nub at each end.
    assert_eq!(*size, Size::new(3.0, 13.0));
    assert_eq!(
        *marks,
        [
            Rect::new(1.0, 0.0, 2.0, 13.0),
            Rect::new(0.0, 0.0, 3.0, 3.0),
            Rect::new(0.0, 10.0, 3.0, 13.0),
        ]
    );
}

#[test]
fn tick_saves_and_restores_the_background() {
    let mut f = frame(five_lines(), "hello");
    let pt = f.pt_of_char(2);

    f.tick(pt, true);
    assert!(f.ticked());
    let ops = f.surface().ops.clone();
    assert_eq!(ops.len(), 2);
    let DrawOp::Snapshot { rect, image } = ops[0].clone() else {
        panic!("expected a background snapshot, got {ops:?}");
    };
    // One scaled pixel left of the character position, three wide.
    assert_eq!(rect, Rect::new(19.0, 0.0, 22.0, 13.0));
    let DrawOp::FillMasked { dest, .. } = ops[1].clone() else {
        panic!("expected a masked fill, got {ops:?}");
    };
    assert_eq!(dest, rect);

    f.surface_mut().clear_ops();
    f.tick(pt, false);
    assert!(!f.ticked());
    assert_eq!(
        f.surface().ops,
        [DrawOp::Blit {
            dest: rect,
            src: image,
            origin: Point::ZERO,
        }]
    );
}

#[test]
fn tick_is_idempotent() {
    let mut f = frame(five_lines(), "hello");
    let pt = f.pt_of_char(2);

    f.tick(pt, true);
    f.surface_mut().clear_ops();
    f.tick(pt, true);
    assert!(f.surface().is_empty(), "re-showing a shown tick is a no-op");

    f.tick(pt, false);
    f.surface_mut().clear_ops();
    f.tick(pt, false);
    assert!(f.surface().is_empty(), "re-hiding a hidden tick is a no-op");
}

#[test]
fn tick_outside_the_frame_is_ignored() {
    let mut f = frame(five_lines(), "hello");
    f.tick(Point::new(500.0, 500.0), true);
    assert!(!f.ticked());
    assert!(f.surface().is_empty());
}

#[test]
fn tick_rebuilds_its_glyph_when_the_scale_changes() {
    let mut f = frame(five_lines(), "hello");
    let pt = f.pt_of_char(2);

    f.surface_mut().scale = 2.0;
    f.tick(pt, true);
    let ops = &f.surface().ops;
    let DrawOp::BuildTick { size, .. } = &ops[0] else {
        panic!("expected the glyph to be rebuilt, got {ops:?}");
    };
    assert_eq!(*size, Size::new(6.0, 13.0));
    // The tick then went up at the doubled scale.
    assert!(matches!(
        ops[2],
        DrawOp::FillMasked { dest, .. } if dest == Rect::new(18.0, 0.0, 24.0, 13.0)
    ));
    assert!(f.ticked());
}

#[test]
fn redraw_restores_a_visible_tick() {
    let mut f = frame(five_lines(), "hello");
    f.draw_sel(f.pt_of_char(3), 3, 3, true).unwrap();
    assert!(f.ticked());
    f.surface_mut().clear_ops();

    f.redraw();
    assert!(f.ticked());
    let ops = &f.surface().ops;
    // Erased, repainted plain, shown again.
    assert!(matches!(ops[0], DrawOp::Blit { .. }), "erase first: {ops:?}");
    assert!(
        matches!(ops.last(), Some(DrawOp::FillMasked { .. })),
        "re-shown last: {ops:?}"
    );
}
