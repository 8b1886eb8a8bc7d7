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

//! Render specifications, assembled by the caller from persisted settings and
//! consumed once per render.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::*;
use crate::render_prims::Rgb;
use crate::shapes::ShapeKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: Rgb,
    pub filled: Rgb,
    pub empty: Rgb,
    pub today: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT_THEME
    }
}

/// Inclusive date range painted in a fixed color. Earlier entries win on overlap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecialDateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub color: Rgb,
    /// Owning goal title; only consulted in goals mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSpec {
    /// Falls back to the mode's default column count when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    pub shape: ShapeKind,
    /// -1 hugs the top, 0 centers, +1 hugs the bottom.
    pub vertical_bias: f64,
    pub theme: Theme,
    pub gap_ratio: f64,
    pub side_padding: f64,
    pub vertical_padding: f64,
    pub show_label: bool,
    pub dot_size: f64,
    pub show_numbers: bool,
    /// Only meaningful when `show_numbers` is set.
    pub show_numbers_with_shape: bool,
    pub special_dates: Vec<SpecialDateRange>,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        LayoutSpec {
            columns: None,
            shape: ShapeKind::Circle,
            vertical_bias: 0.0,
            theme: Theme::default(),
            gap_ratio: DEFAULT_GAP_RATIO,
            side_padding: DEFAULT_SIDE_PADDING,
            vertical_padding: DEFAULT_VERTICAL_PADDING,
            show_label: true,
            dot_size: 1.0,
            show_numbers: false,
            show_numbers_with_shape: false,
            special_dates: vec![],
        }
    }
}

impl LayoutSpec {
    pub fn columns_or(&self, mode_default: u32) -> usize {
        self.columns.unwrap_or(mode_default).max(1) as usize
    }

    pub fn bias(&self) -> f64 {
        if self.vertical_bias.is_nan() {
            0.0
        } else {
            self.vertical_bias.clamp(-1.0, 1.0)
        }
    }

    pub fn gap(&self) -> f64 {
        if self.gap_ratio.is_nan() {
            0.0
        } else {
            self.gap_ratio.clamp(0.0, MAX_GAP_RATIO)
        }
    }

    pub fn side_padding_ratio(&self) -> f64 {
        finite_or(self.side_padding, DEFAULT_SIDE_PADDING)
    }

    pub fn vertical_padding_ratio(&self) -> f64 {
        finite_or(self.vertical_padding, DEFAULT_VERTICAL_PADDING)
    }

    pub fn cell_mode(&self) -> CellMode {
        match (self.show_numbers, self.show_numbers_with_shape) {
            (false, _) => CellMode::Shape,
            (true, false) => CellMode::Number,
            (true, true) => CellMode::ShapeAndNumber,
        }
    }
}

fn finite_or(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        default
    }
}

/// What each cell draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellMode {
    Shape,
    Number,
    ShapeAndNumber,
}

/// Days of the year containing "today".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct YearSpec {
    #[serde(flatten)]
    pub layout: LayoutSpec,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthSpec {
    pub year: i32,
    pub month: u32,
    #[serde(flatten)]
    pub layout: LayoutSpec,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub title: String,
    pub start: NaiveDate,
    pub deadline: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalSpec {
    pub goals: Vec<Goal>,
    #[serde(flatten)]
    pub layout: LayoutSpec,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WallpaperSpec {
    Year(YearSpec),
    Month(MonthSpec),
    Goals(GoalSpec),
}

impl WallpaperSpec {
    pub fn layout(&self) -> &LayoutSpec {
        match self {
            WallpaperSpec::Year(s) => &s.layout,
            WallpaperSpec::Month(s) => &s.layout,
            WallpaperSpec::Goals(s) => &s.layout,
        }
    }

    pub fn mode_name(&self) -> &'static str {
        match self {
            WallpaperSpec::Year(_) => "year",
            WallpaperSpec::Month(_) => "month",
            WallpaperSpec::Goals(_) => "goals",
        }
    }
}
