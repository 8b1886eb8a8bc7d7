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

//! Single-range layout: one contiguous run of days (a year or a month) laid out
//! as a dot grid with an optional progress label underneath.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

use crate::coloring::{CellColoring, CellGlyph, SpecialColors};
use crate::config::*;
use crate::dates::{self, DayRange, Progress};
use crate::error::WallpaperError;
use crate::geometry::{self, GridGeometry, GridRequest};
use crate::render_prims::*;
use crate::shapes::{draw_shape, Paint, ShapeKind};
use crate::spec::{LayoutSpec, MonthSpec, Theme, YearSpec};

/// Grid of day cells drawn from the grid's top-left corner.
pub struct RangedDots {
    pub geometry: GridGeometry,
    pub cells: usize,
    pub coloring: CellColoring,
    pub shape: ShapeKind,
}

impl Renderable for RangedDots {
    fn render_internal(&self, cr: &cairo::Context) -> Result<()> {
        let g = &self.geometry;
        let number_font = font_px(number_font_px(g.diameter), false);

        for style in self.coloring.styles(self.cells) {
            let center = g.cell_center(style.index);
            let color: Color = style.color.into();

            match style.glyph {
                CellGlyph::Shape => {
                    draw_shape(cr, self.shape, center, g.radius, g.diameter, Paint::fill(color))?;
                }
                CellGlyph::Number => {
                    show_text_centered(cr, &style.day_number().to_string(), &number_font, color, center);
                }
                CellGlyph::ShapeWithNumber { numeral } => {
                    draw_shape(cr, self.shape, center, g.radius, g.diameter, Paint::fill(color))?;
                    show_text_centered(
                        cr,
                        &style.day_number().to_string(),
                        &number_font,
                        numeral.into(),
                        center,
                    );
                }
            }
        }

        Ok(())
    }

    fn bounds(&self) -> (f64, f64) {
        (self.geometry.grid_width, self.geometry.grid_height)
    }
}

/// The two runs of the progress label: accent "Nd left" and muted " · P%".
pub fn stats_text(progress: &Progress) -> (String, String) {
    (
        format!("{}d left", progress.days_left),
        format!(" · {}%", progress.percent),
    )
}

pub fn stats_label(cr: &cairo::Context, progress: &Progress, theme: &Theme, canvas_width: f64) -> RenderGroup {
    let size = label_font_px(canvas_width);
    let (left, pct) = stats_text(progress);

    let left = TextBox::new(cr, left, theme.today.into(), &font_px(size, true));
    let pct = TextBox::new(cr, pct, RGB_LABEL_MUTED.into(), &font_px(size, false));
    let left_width = left.width();

    let mut group = RenderGroup::new();
    group.push(left);
    group.push(pct.offset(left_width, 0.0));
    group
}

/// Everything needed to lay out one contiguous range of days.
pub struct RangeInput<'a> {
    pub range: DayRange,
    pub cells: usize,
    pub current_index: usize,
    pub progress: Progress,
    pub columns: usize,
    /// Year grids fit both axes; month grids fit width only.
    pub fit_height: bool,
    pub specials: SpecialColors,
    pub layout: &'a LayoutSpec,
}

impl<'a> RangeInput<'a> {
    pub fn year(spec: &'a YearSpec, today: NaiveDate) -> Result<Self, WallpaperError> {
        let range = dates::year_range(today.year()).ok_or(WallpaperError::InvalidYear(today.year()))?;
        let cells = range.total_days();
        let current_index = dates::year_today_index(&range, today);

        Ok(RangeInput {
            range,
            cells,
            current_index,
            progress: Progress::year(cells, current_index),
            columns: spec.layout.columns_or(DEFAULT_COLUMNS_YEAR),
            fit_height: true,
            specials: SpecialColors::build(&spec.layout.special_dates, &range),
            layout: &spec.layout,
        })
    }

    pub fn month(spec: &'a MonthSpec, today: NaiveDate) -> Result<Self, WallpaperError> {
        let range = dates::month_range(spec.year, spec.month)?;
        let cells = range.total_days();
        let current_index = dates::month_today_index(&range, today);
        let day_of_month = current_index + 1;

        Ok(RangeInput {
            range,
            cells,
            current_index,
            progress: Progress::month(cells, day_of_month),
            columns: spec.layout.columns_or(DEFAULT_COLUMNS_MONTH),
            fit_height: false,
            specials: SpecialColors::build(&spec.layout.special_dates, &range),
            layout: &spec.layout,
        })
    }

    pub fn coloring(&self) -> CellColoring {
        CellColoring {
            current_index: self.current_index,
            specials: self.specials.clone(),
            theme: self.layout.theme,
            mode: self.layout.cell_mode(),
        }
    }
}

/// Vertical band left after the top and bottom padding: `(top, height)`.
pub fn padded_band(canvas_height: f64, vertical_padding: f64) -> (f64, f64) {
    let top = canvas_height * vertical_padding.clamp(0.0, 0.5);
    (top, (canvas_height - 2.0 * top).max(0.0))
}

pub fn available_width(canvas_width: f64, side_padding: f64) -> f64 {
    let side = canvas_width * side_padding.clamp(0.0, 0.5);
    (canvas_width - 2.0 * side).max(1.0)
}

/// Where the grid and label land on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangePlacement {
    pub geometry: GridGeometry,
    /// Top-left corner of the grid.
    pub origin: (f64, f64),
    pub label_gap: f64,
    pub content_height: f64,
}

impl RangePlacement {
    pub fn cell_center(&self, index: usize) -> (f64, f64) {
        let (x, y) = self.geometry.cell_center(index);
        (self.origin.0 + x, self.origin.1 + y)
    }
}

/// Pure layout of a range. `label_height` is the measured label, when shown.
pub fn place_range(canvas: (f64, f64), input: &RangeInput<'_>, label_height: Option<f64>) -> RangePlacement {
    let (width, height) = canvas;
    let layout = input.layout;

    let (band_top, band_height) = padded_band(height, layout.vertical_padding_ratio());
    let label_gap = height * LABEL_GAP_FRACTION;
    let label_block = label_height.map(|h| label_gap + h).unwrap_or(0.0);

    let rows = geometry::rows_for(input.cells, input.columns);
    let mut request = GridRequest::new(
        available_width(width, layout.side_padding_ratio()),
        input.columns,
        rows,
        layout.gap(),
    )
    .size_multiplier(geometry::range_size_multiplier(layout.dot_size));
    if input.fit_height {
        request = request.fit_height((band_height - label_block).max(0.0));
    }
    let geometry = request.resolve();

    let content_height = geometry.grid_height + label_block;
    let top = band_top + geometry::biased_offset(band_height, content_height, layout.bias());
    let left = (width - geometry.grid_width) / 2.0;

    RangePlacement {
        geometry,
        origin: (left, top),
        label_gap,
        content_height,
    }
}

/// Draws a range into a canvas already filled with the theme background.
pub fn render_range(cr: &cairo::Context, canvas: (f64, f64), input: &RangeInput<'_>) -> Result<RangePlacement> {
    let layout = input.layout;
    let label = if layout.show_label {
        Some(stats_label(cr, &input.progress, &layout.theme, canvas.0))
    } else {
        None
    };

    let placement = place_range(canvas, input, label.as_ref().map(|l| l.height()));
    debug!(
        cells = input.cells,
        columns = input.columns,
        today_index = input.current_index,
        diameter = placement.geometry.diameter,
        "Laying out range {} ~ {}",
        input.range.start,
        input.range.end
    );
    trace!(?placement);

    let dots = RangedDots {
        geometry: placement.geometry,
        cells: input.cells,
        coloring: input.coloring(),
        shape: layout.shape,
    };

    let mut column = RenderColumn::new();
    column.push(dots.offset(placement.origin.0, 0.0));
    if let Some(label) = label {
        column.push(Pad::new(0.0, placement.label_gap));
        column.push(label.center_in(canvas.0));
    }

    column.render_to(cr, (0.0, placement.origin.1))?;

    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn year_input_scenario() {
        let spec = YearSpec::default();
        let input = RangeInput::year(&spec, d(2023, 2, 2)).unwrap();

        assert_eq!(input.cells, 365);
        assert_eq!(input.current_index, 32);
        assert_eq!(stats_text(&input.progress), ("332d left".to_string(), " · 9%".to_string()));
    }

    #[test]
    fn month_input_uses_own_bounds() {
        let spec = MonthSpec {
            year: 2024,
            month: 2,
            layout: LayoutSpec::default(),
        };
        let input = RangeInput::month(&spec, d(2024, 2, 10)).unwrap();

        assert_eq!(input.cells, 29);
        assert_eq!(input.current_index, 9);
        assert_eq!(input.progress.days_left, 19);
        assert_eq!(input.progress.percent, 34);
        assert!(!input.fit_height);
        assert_eq!(input.columns, DEFAULT_COLUMNS_MONTH as usize);
    }

    #[test]
    fn placement_is_centered_horizontally_and_fits() {
        let spec = YearSpec::default();
        let input = RangeInput::year(&spec, d(2023, 6, 1)).unwrap();
        let p = place_range((1080.0, 2400.0), &input, Some(40.0));

        assert!(((1080.0 - p.geometry.grid_width) / 2.0 - p.origin.0).abs() < 1e-9);
        assert!(p.geometry.grid_width <= available_width(1080.0, DEFAULT_SIDE_PADDING) + 1e-9);

        let (band_top, band) = padded_band(2400.0, DEFAULT_VERTICAL_PADDING);
        assert!(p.origin.1 >= band_top);
        assert!(p.origin.1 + p.content_height <= band_top + band + 1e-9);
    }

    #[test]
    fn bias_moves_content_within_band() {
        let top_spec = YearSpec {
            layout: LayoutSpec {
                vertical_bias: -1.0,
                ..LayoutSpec::default()
            },
        };
        let bottom_spec = YearSpec {
            layout: LayoutSpec {
                vertical_bias: 1.0,
                ..LayoutSpec::default()
            },
        };
        let today = d(2023, 6, 1);
        let canvas = (1080.0, 2400.0);
        let (band_top, band) = padded_band(2400.0, DEFAULT_VERTICAL_PADDING);

        let top = place_range(canvas, &RangeInput::year(&top_spec, today).unwrap(), None);
        assert!((top.origin.1 - band_top).abs() < 1e-9);

        let bottom = place_range(canvas, &RangeInput::year(&bottom_spec, today).unwrap(), None);
        let free = band - bottom.content_height;
        assert!((bottom.origin.1 - (band_top + free)).abs() < 1e-9);
    }

    #[test]
    fn dot_size_is_clamped_for_ranges() {
        let spec = YearSpec {
            layout: LayoutSpec {
                dot_size: 0.01,
                ..LayoutSpec::default()
            },
        };
        let full = YearSpec::default();
        let today = d(2023, 6, 1);

        let small = place_range((1080.0, 2400.0), &RangeInput::year(&spec, today).unwrap(), None);
        let big = place_range((1080.0, 2400.0), &RangeInput::year(&full, today).unwrap(), None);
        assert!((small.geometry.diameter - big.geometry.diameter * 0.25).abs() < 1e-9);
    }
}
