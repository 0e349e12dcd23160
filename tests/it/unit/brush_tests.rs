//! Unit tests for brush stamping and line interpolation.

use touch_painter::brush::{draw_line, stamp_brush};
use touch_painter::types::{Point, Rect};

use crate::helpers::{ascii, black_canvas, is_painted, painted_in, white, whole};

#[test]
fn test_stamp_covers_exactly_the_chebyshev_square() {
    for size in [1u32, 3, 6, 9, 12] {
        let mut canvas = black_canvas(40, 40);
        let center = Point::new(20, 20);
        stamp_brush(&mut canvas, center, white(size));

        let half = (size / 2) as i32;
        let painted = painted_in(&canvas, whole(&canvas));
        assert_eq!(painted.len() as i32, (2 * half + 1) * (2 * half + 1), "size {size}");
        for p in painted {
            let d = (p.x - center.x).abs().max((p.y - center.y).abs());
            assert!(d <= half, "size {size}: {p:?} is {d} away");
        }
    }
}

#[test]
fn test_stamp_size_three() {
    let mut canvas = black_canvas(5, 5);
    stamp_brush(&mut canvas, Point::new(2, 2), white(3));

    insta::assert_snapshot!(ascii(&canvas), @r"
    .....
    .###.
    .###.
    .###.
    .....
    ");
}

#[test]
fn test_stamp_at_corner_is_clipped() {
    let mut canvas = black_canvas(10, 10);
    stamp_brush(&mut canvas, Point::new(0, 0), white(6));

    // half = 3: only the 4x4 in-bounds quarter survives
    assert_eq!(painted_in(&canvas, whole(&canvas)).len(), 16);
}

#[test]
fn test_stamp_fully_outside_paints_nothing() {
    let mut canvas = black_canvas(10, 10);
    stamp_brush(&mut canvas, Point::new(-20, 5), white(12));
    stamp_brush(&mut canvas, Point::new(5, 40), white(12));
    assert!(painted_in(&canvas, whole(&canvas)).is_empty());
}

#[test]
fn test_degenerate_line_equals_stamp() {
    for size in [1u32, 6, 12] {
        let p = Point::new(7, 9);
        let mut line = black_canvas(20, 20);
        let mut stamp = black_canvas(20, 20);
        draw_line(&mut line, p, p, white(size));
        stamp_brush(&mut stamp, p, white(size));
        assert_eq!(line.pixels(), stamp.pixels(), "size {size}");
    }
}

#[test]
fn test_line_floors_interpolated_coordinates() {
    let mut canvas = black_canvas(5, 3);
    draw_line(&mut canvas, Point::new(0, 0), Point::new(4, 2), white(1));

    insta::assert_snapshot!(ascii(&canvas), @r"
    ##...
    ..##.
    ....#
    ");
}

#[test]
fn test_leftward_line() {
    let mut canvas = black_canvas(5, 3);
    draw_line(&mut canvas, Point::new(4, 0), Point::new(0, 2), white(1));

    insta::assert_snapshot!(ascii(&canvas), @r"
    ...##
    .##..
    #....
    ");
}

#[test]
fn test_upward_line_floors_toward_smaller_y() {
    let mut canvas = black_canvas(5, 3);
    draw_line(&mut canvas, Point::new(0, 2), Point::new(4, 0), white(1));

    // (0,2) (1,1) (2,1) (3,0) (4,0)
    insta::assert_snapshot!(ascii(&canvas), @r"
    ...##
    .##..
    #....
    ");
}

#[test]
fn test_line_paints_endpoints_and_stays_on_segment() {
    let mut canvas = black_canvas(30, 20);
    let (a, b) = (Point::new(2, 3), Point::new(17, 9));
    draw_line(&mut canvas, a, b, white(1));

    assert!(is_painted(&canvas, a.x, a.y));
    assert!(is_painted(&canvas, b.x, b.y));

    let (dx, dy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
    let len = (dx * dx + dy * dy).sqrt();
    for p in painted_in(&canvas, whole(&canvas)) {
        let cross = dy * (p.x - a.x) as f64 - dx * (p.y - a.y) as f64;
        assert!(cross.abs() / len <= 1.0, "{p:?} is off the segment");
        assert!(p.x >= a.x && p.x <= b.x && p.y >= a.y && p.y <= b.y);
    }
}

#[test]
fn test_line_has_no_gaps_along_the_major_axis() {
    let mut canvas = black_canvas(12, 12);
    draw_line(&mut canvas, Point::new(0, 0), Point::new(9, 3), white(1));

    for x in 0..=9 {
        let column = painted_in(&canvas, Rect::new(x, 0, 1, 12));
        assert_eq!(column.len(), 1, "column {x}");
    }
}

#[test]
fn test_wide_brush_line_covers_a_band() {
    let mut canvas = black_canvas(40, 20);
    draw_line(&mut canvas, Point::new(5, 10), Point::new(30, 10), white(6));

    // 7 rows (half = 3) x 32 columns (5-3 ..= 30+3)
    assert_eq!(painted_in(&canvas, whole(&canvas)).len(), 7 * 32);
    assert!(is_painted(&canvas, 2, 7));
    assert!(is_painted(&canvas, 33, 13));
    assert!(!is_painted(&canvas, 1, 10));
    assert!(!is_painted(&canvas, 34, 10));
    assert!(!is_painted(&canvas, 20, 6));
}

#[test]
fn test_line_partly_off_canvas_is_clipped() {
    let mut canvas = black_canvas(10, 10);
    draw_line(&mut canvas, Point::new(-5, 5), Point::new(4, 5), white(1));

    assert_eq!(painted_in(&canvas, whole(&canvas)).len(), 5);
}
