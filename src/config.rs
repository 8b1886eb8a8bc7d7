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

use anyhow::{Context, Result};
use std::path::Path;

use crate::render_prims::{rgb, Rgb};
use crate::spec::{Theme, WallpaperSpec};

pub const FONT_FAMILY: &str = "Sans";

pub const DEFAULT_WIDTH: u32 = 1080;
pub const DEFAULT_HEIGHT: u32 = 2400;

pub const DEFAULT_THEME: Theme = Theme {
    background: rgb(0x101014),
    filled: rgb(0xE8E6E3),
    empty: rgb(0x34343C),
    today: rgb(0xFF6B4A),
};

pub const RGB_LABEL_MUTED: Rgb = rgb(0x8A8A8A);

pub const DEFAULT_COLUMNS_YEAR: u32 = 15;
pub const DEFAULT_COLUMNS_MONTH: u32 = 7;
pub const DEFAULT_COLUMNS_GOALS: u32 = 15;
pub const DEFAULT_GAP_RATIO: f64 = 0.5;
pub const DEFAULT_SIDE_PADDING: f64 = 0.1;
pub const DEFAULT_VERTICAL_PADDING: f64 = 0.12;
pub const MAX_GAP_RATIO: f64 = 10.0;

/// Clamp applied to the user dot size in year and month mode.
pub const RANGE_SIZE_MULTIPLIER_MIN: f64 = 0.25;
/// Clamp applied to auto-scale times dot size in goals mode.
pub const GOAL_SIZE_MULTIPLIER_MIN: f64 = 0.1;
pub const SIZE_MULTIPLIER_MAX: f64 = 1.0;

pub const MIN_DIAMETER: f64 = 1.0;

pub const LABEL_GAP_FRACTION: f64 = 0.02;
pub const LABEL_FONT_FRACTION: f64 = 0.035;
pub const LABEL_FONT_MIN: f64 = 18.0;
pub const LABEL_FONT_MAX: f64 = 56.0;

pub const TITLE_FONT_FRACTION: f64 = 0.04;
pub const TITLE_FONT_MIN: f64 = 20.0;
pub const TITLE_FONT_MAX: f64 = 64.0;
pub const TITLE_GAP_FRACTION: f64 = 0.012;
pub const GOAL_SPACING_FRACTION: f64 = 0.05;

pub const NUMBER_FONT_RATIO: f64 = 0.52;
pub const NUMBER_FONT_MIN: f64 = 6.0;
pub const NUMBER_FONT_MAX: f64 = 120.0;

pub const SHAPE_CORNER_RATIO: f64 = 0.3;
pub const HEXAGON_HALF_WIDTH: f64 = 0.866;
pub const RING_RADIUS_RATIO: f64 = 0.85;
pub const RING_STROKE_RATIO: f64 = 0.15;

pub const PREVIEW_SCALE_MIN: f64 = 0.05;

pub fn label_font_px(canvas_width: f64) -> f64 {
    (canvas_width * LABEL_FONT_FRACTION).clamp(LABEL_FONT_MIN, LABEL_FONT_MAX)
}

pub fn title_font_px(canvas_width: f64) -> f64 {
    (canvas_width * TITLE_FONT_FRACTION).clamp(TITLE_FONT_MIN, TITLE_FONT_MAX)
}

pub fn number_font_px(diameter: f64) -> f64 {
    (diameter * NUMBER_FONT_RATIO).clamp(NUMBER_FONT_MIN, NUMBER_FONT_MAX)
}

pub fn parse_spec(json: &str) -> Result<WallpaperSpec> {
    serde_json::from_str(json).context("Parsing wallpaper spec")
}

pub fn load_spec(path: impl AsRef<Path>) -> Result<WallpaperSpec> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Loading spec file {:?}", path))?;

    parse_spec(&json).with_context(|| format!("In spec file {:?}", path))
}
