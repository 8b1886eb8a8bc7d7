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

//! Cell sizing shared by every layout mode.

use crate::config::{GOAL_SIZE_MULTIPLIER_MIN, MIN_DIAMETER, RANGE_SIZE_MULTIPLIER_MIN, SIZE_MULTIPLIER_MAX};

const MIN_DENOMINATOR: f64 = 0.0001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    pub columns: usize,
    pub rows: usize,
    pub gap_ratio: f64,
    pub diameter: f64,
    pub radius: f64,
    pub step: f64,
    pub grid_width: f64,
    pub grid_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridRequest {
    pub available_width: f64,
    /// Year mode fits both axes; month and goal grids let the height float.
    pub available_height: Option<f64>,
    pub columns: usize,
    pub rows: usize,
    pub gap_ratio: f64,
    pub size_multiplier: f64,
    pub min_diameter: f64,
    pub max_diameter: f64,
}

impl GridRequest {
    pub fn new(available_width: f64, columns: usize, rows: usize, gap_ratio: f64) -> Self {
        GridRequest {
            available_width,
            available_height: None,
            columns,
            rows,
            gap_ratio,
            size_multiplier: 1.0,
            min_diameter: MIN_DIAMETER,
            max_diameter: f64::INFINITY,
        }
    }

    pub fn fit_height(mut self, available_height: f64) -> Self {
        self.available_height = Some(available_height);
        self
    }

    pub fn size_multiplier(mut self, multiplier: f64) -> Self {
        self.size_multiplier = multiplier;
        self
    }

    pub fn resolve(&self) -> GridGeometry {
        let gap = self.gap_ratio;
        let columns = self.columns.max(1);
        let rows = self.rows.max(1);

        let fit = |count: usize, available: f64| {
            let denominator = (count as f64 * (1.0 + gap) - gap).max(MIN_DENOMINATOR);
            available.max(0.0) / denominator
        };

        let mut max_diameter = fit(columns, self.available_width);
        if let Some(h) = self.available_height {
            max_diameter = max_diameter.min(fit(rows, h));
        }

        let diameter = (max_diameter * self.size_multiplier)
            .min(self.max_diameter)
            .max(self.min_diameter);
        let step = diameter * (1.0 + gap);

        GridGeometry {
            columns,
            rows,
            gap_ratio: gap,
            diameter,
            radius: diameter / 2.0,
            step,
            grid_width: columns as f64 * step - diameter * gap,
            grid_height: rows as f64 * step - diameter * gap,
        }
    }
}

impl GridGeometry {
    /// Same cell size and columns, different row count.
    pub fn with_rows(&self, rows: usize) -> GridGeometry {
        let rows = rows.max(1);
        GridGeometry {
            rows,
            grid_height: rows as f64 * self.step - self.diameter * self.gap_ratio,
            ..*self
        }
    }

    /// Center of cell `index` relative to the grid's top-left corner.
    pub fn cell_center(&self, index: usize) -> (f64, f64) {
        let col = index % self.columns;
        let row = index / self.columns;

        (
            col as f64 * self.step + self.radius,
            row as f64 * self.step + self.radius,
        )
    }
}

pub fn rows_for(cells: usize, columns: usize) -> usize {
    let columns = columns.max(1);
    (cells + columns - 1) / columns
}

/// Top offset of content of height `content` inside a band of height `band`.
pub fn biased_offset(band: f64, content: f64, bias: f64) -> f64 {
    let free = (band - content).max(0.0);
    free * (0.5 + bias.clamp(-1.0, 1.0) * 0.5)
}

/// Shrinks goal dots as the combined day count grows.
pub fn goal_auto_scale(total_dots: usize) -> f64 {
    if total_dots > 300 {
        0.75
    } else if total_dots > 150 {
        0.88
    } else {
        1.0
    }
}

fn clamp_multiplier(m: f64, min: f64) -> f64 {
    if m.is_nan() {
        return SIZE_MULTIPLIER_MAX;
    }
    m.clamp(min, SIZE_MULTIPLIER_MAX)
}

pub fn range_size_multiplier(dot_size: f64) -> f64 {
    clamp_multiplier(dot_size, RANGE_SIZE_MULTIPLIER_MIN)
}

pub fn goal_size_multiplier(dot_size: f64, total_dots: usize) -> f64 {
    clamp_multiplier(goal_auto_scale(total_dots) * dot_size, GOAL_SIZE_MULTIPLIER_MIN)
}
