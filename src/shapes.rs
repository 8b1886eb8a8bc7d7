// Copyright 2020-2021 bd_
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions: The above copyright
// notice and this permission notice shall be included in all copies or
// substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use anyhow::Result;
use std::f64::consts::PI;

use crate::config::{HEXAGON_HALF_WIDTH, RING_RADIUS_RATIO, RING_STROKE_RATIO, SHAPE_CORNER_RATIO};
use crate::render_prims::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Square,
    RoundedSquare,
    Diamond,
    Hexagon,
    Heart,
    Star,
    RingOutline,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::RoundedSquare,
        ShapeKind::Diamond,
        ShapeKind::Hexagon,
        ShapeKind::Heart,
        ShapeKind::Star,
        ShapeKind::RingOutline,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintStyle {
    Fill,
    Stroke { width: f64 },
}

/// Immutable paint for one draw call.
#[derive(Clone, Copy, Debug)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Paint {
            color,
            style: PaintStyle::Fill,
        }
    }

    pub fn stroked(self, width: f64) -> Self {
        Paint {
            style: PaintStyle::Stroke { width },
            ..self
        }
    }

    fn finish(&self, cr: &cairo::Context) -> Result<()> {
        self.color.apply(cr);
        match self.style {
            PaintStyle::Fill => cr.fill()?,
            PaintStyle::Stroke { width } => {
                cr.set_line_width(width);
                cr.stroke()?;
            }
        }
        Ok(())
    }
}

/// Cairo only has cubic curves; this is the exact cubic for a quadratic segment.
fn quad_to(cr: &cairo::Context, from: (f64, f64), ctrl: (f64, f64), to: (f64, f64)) {
    let c1 = (
        from.0 + 2.0 / 3.0 * (ctrl.0 - from.0),
        from.1 + 2.0 / 3.0 * (ctrl.1 - from.1),
    );
    let c2 = (
        to.0 + 2.0 / 3.0 * (ctrl.0 - to.0),
        to.1 + 2.0 / 3.0 * (ctrl.1 - to.1),
    );
    cr.curve_to(c1.0, c1.1, c2.0, c2.1, to.0, to.1);
}

fn polygon(cr: &cairo::Context, points: &[(f64, f64)]) {
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            cr.move_to(x, y);
        } else {
            cr.line_to(x, y);
        }
    }
    cr.close_path();
}

fn rounded_rect(cr: &cairo::Context, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = r.min(w / 2.0).min(h / 2.0);

    cr.new_sub_path();
    cr.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
    cr.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
    cr.arc(x + r, y + h - r, r, PI / 2.0, PI);
    cr.arc(x + r, y + r, r, PI, 3.0 * PI / 2.0);
    cr.close_path();
}

/// Draws one cell shape centered on `center`.
pub fn draw_shape(
    cr: &cairo::Context,
    kind: ShapeKind,
    center: (f64, f64),
    radius: f64,
    diameter: f64,
    paint: Paint,
) -> Result<()> {
    let (x, y) = center;
    cr.new_path();

    match kind {
        ShapeKind::Circle => {
            cr.arc(x, y, radius, 0.0, 2.0 * PI);
            paint.finish(cr)
        }
        ShapeKind::Square => {
            cr.rectangle(x - radius, y - radius, diameter, diameter);
            paint.finish(cr)
        }
        ShapeKind::RoundedSquare => {
            rounded_rect(
                cr,
                x - radius,
                y - radius,
                diameter,
                diameter,
                diameter * SHAPE_CORNER_RATIO,
            );
            paint.finish(cr)
        }
        ShapeKind::Diamond => {
            polygon(
                cr,
                &[(x, y - radius), (x + radius, y), (x, y + radius), (x - radius, y)],
            );
            paint.finish(cr)
        }
        // Pointy-top: vertices at top and bottom, flat left and right edges.
        ShapeKind::Hexagon => {
            let hw = radius * HEXAGON_HALF_WIDTH;
            let hh = radius / 2.0;
            polygon(
                cr,
                &[
                    (x, y - radius),
                    (x + hw, y - hh),
                    (x + hw, y + hh),
                    (x, y + radius),
                    (x - hw, y + hh),
                    (x - hw, y - hh),
                ],
            );
            paint.finish(cr)
        }
        ShapeKind::Heart => {
            let r = radius;
            let cusp = (x, y - r * 0.45);
            let bottom = (x, y + r * 0.9);

            cr.move_to(bottom.0, bottom.1);
            cr.curve_to(x - r * 1.3, y + r * 0.1, x - r * 0.7, y - r * 1.15, cusp.0, cusp.1);
            cr.curve_to(x + r * 0.7, y - r * 1.15, x + r * 1.3, y + r * 0.1, bottom.0, bottom.1);
            cr.close_path();
            paint.finish(cr)
        }
        ShapeKind::Star => {
            // Four-point sparkle: quadratic lobes pulled through the center.
            let r = radius;
            let top = (x, y - r);
            let right = (x + r, y);
            let bottom = (x, y + r);
            let left = (x - r, y);

            cr.move_to(top.0, top.1);
            quad_to(cr, top, center, right);
            quad_to(cr, right, center, bottom);
            quad_to(cr, bottom, center, left);
            quad_to(cr, left, center, top);
            cr.close_path();
            paint.finish(cr)
        }
        ShapeKind::RingOutline => {
            cr.arc(x, y, radius * RING_RADIUS_RATIO, 0.0, 2.0 * PI);
            paint.stroked(diameter * RING_STROKE_RATIO).finish(cr)
        }
    }
}
