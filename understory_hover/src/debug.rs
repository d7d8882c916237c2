// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debug outline drawing surface.
//!
//! When [`HoverFlags::DEBUG_DRAW`](crate::HoverFlags::DEBUG_DRAW) is set, the
//! tracker outlines every hit rect it evaluates. Actual rendering belongs to
//! the host: implement [`DebugCanvas`] over your draw node or display list.
//!
//! Two implementations ship with the crate:
//! - `()` discards everything.
//! - `Vec<DebugOutline>` records outlines, which is handy for tests and for
//!   hosts that batch overlay drawing themselves.

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use peniko::Color;

/// A drawing surface for debug overlays.
pub trait DebugCanvas {
    /// Discard whatever was drawn on the previous tick.
    fn clear(&mut self);

    /// Draw a closed polygon through `points` with the given fill and border.
    fn draw_polygon(&mut self, points: &[Point; 4], fill: Color, border_width: f64, border: Color);
}

impl DebugCanvas for () {
    fn clear(&mut self) {}

    fn draw_polygon(
        &mut self,
        _points: &[Point; 4],
        _fill: Color,
        _border_width: f64,
        _border: Color,
    ) {
    }
}

impl<C: DebugCanvas + ?Sized> DebugCanvas for &mut C {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn draw_polygon(&mut self, points: &[Point; 4], fill: Color, border_width: f64, border: Color) {
        (**self).draw_polygon(points, fill, border_width, border);
    }
}

/// One recorded outline.
#[derive(Clone, Copy, Debug)]
pub struct DebugOutline {
    /// Corners in drawing order.
    pub points: [Point; 4],
    /// Fill color.
    pub fill: Color,
    /// Border width.
    pub border_width: f64,
    /// Border color.
    pub border: Color,
}

impl DebugOutline {
    /// Axis-aligned bounds of the recorded corners.
    pub fn bounds(&self) -> Rect {
        let [a, b, c, d] = self.points;
        Rect::from_points(a, c).union(Rect::from_points(b, d))
    }
}

impl DebugCanvas for Vec<DebugOutline> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn draw_polygon(&mut self, points: &[Point; 4], fill: Color, border_width: f64, border: Color) {
        self.push(DebugOutline {
            points: *points,
            fill,
            border_width,
            border,
        });
    }
}

/// Corners of `rect` in outline order: bottom-left, bottom-right, top-right, top-left.
///
/// The rect is taken as-is, so an inverted rect (from negative padding) yields
/// an inverted outline.
pub(crate) fn outline_points(rect: Rect) -> [Point; 4] {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
}
