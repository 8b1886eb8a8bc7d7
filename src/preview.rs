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

//! Reduced-scale previews for settings screens. Cell colors and glyphs come
//! from the same `CellColoring` the wallpaper renderer uses.

use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use crate::bitmap::{prepare, render_wallpaper, Bitmap, Prepared};
use crate::coloring::{CellColoring, CellStyle};
use crate::config::PREVIEW_SCALE_MIN;
use crate::shapes::ShapeKind;
use crate::spec::WallpaperSpec;

/// One grid's worth of resolved cells, for a UI that draws its own mock.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewBlock {
    pub title: Option<String>,
    pub columns: usize,
    pub shape: ShapeKind,
    pub cells: Vec<CellStyle>,
}

#[tracing::instrument(level = "debug", skip(spec))]
pub fn preview_cells(spec: &WallpaperSpec, today: NaiveDate) -> Result<Vec<PreviewBlock>> {
    let layout = spec.layout();

    let blocks = match prepare(spec, today)? {
        Prepared::Range(input) => vec![PreviewBlock {
            title: None,
            columns: input.columns,
            shape: layout.shape,
            cells: input.coloring().styles(input.cells).collect(),
        }],
        Prepared::Goals(plan) => plan
            .blocks
            .iter()
            .map(|block| {
                let coloring = CellColoring {
                    current_index: block.progress.current_index,
                    specials: block.specials.clone(),
                    theme: layout.theme,
                    mode: layout.cell_mode(),
                };
                PreviewBlock {
                    title: Some(block.goal.title.clone()),
                    columns: plan.columns,
                    shape: layout.shape,
                    cells: coloring.styles(block.progress.total_days).collect(),
                }
            })
            .collect(),
    };

    Ok(blocks)
}

fn scaled(dim: u32, scale: f64) -> u32 {
    ((dim as f64 * scale).round() as u32).max(1)
}

/// Renders the full wallpaper layout onto a canvas shrunk by `scale`.
pub fn render_preview(
    spec: &WallpaperSpec,
    width: u32,
    height: u32,
    today: NaiveDate,
    scale: f64,
) -> Result<Bitmap> {
    let scale = if scale.is_nan() {
        1.0
    } else {
        scale.clamp(PREVIEW_SCALE_MIN, 1.0)
    };
    let (w, h) = (scaled(width, scale), scaled(height, scale));
    debug!(scale, w, h, "Rendering preview");

    render_wallpaper(w, h, spec, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::CellGlyph;
    use crate::spec::{Goal, GoalSpec, LayoutSpec, YearSpec};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn year_preview_matches_color_rule() {
        let spec = WallpaperSpec::Year(YearSpec::default());
        let blocks = preview_cells(&spec, d(2023, 2, 2)).unwrap();
        let theme = spec.layout().theme;

        assert_eq!(blocks.len(), 1);
        let cells = &blocks[0].cells;
        assert_eq!(cells.len(), 365);
        assert!(cells[..32].iter().all(|c| c.color == theme.filled));
        assert_eq!(cells[32].color, theme.today);
        assert!(cells[33..].iter().all(|c| c.color == theme.empty));
        assert!(cells.iter().all(|c| c.glyph == CellGlyph::Shape));
    }

    #[test]
    fn goal_preview_has_a_block_per_goal() {
        let spec = WallpaperSpec::Goals(GoalSpec {
            goals: vec![
                Goal {
                    title: "Run".into(),
                    start: d(2024, 1, 1),
                    deadline: d(2024, 1, 10),
                },
                Goal {
                    title: "Read".into(),
                    start: d(2024, 1, 1),
                    deadline: d(2024, 1, 31),
                },
            ],
            layout: LayoutSpec::default(),
        });
        let blocks = preview_cells(&spec, d(2024, 1, 5)).unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].title.as_deref(), Some("Run"));
        assert_eq!(blocks[0].cells.len(), 10);
        assert_eq!(blocks[1].cells.len(), 31);
        assert_eq!(blocks[1].cells[4].color, spec.layout().theme.today);
    }

    #[test]
    fn scaled_dimensions_never_hit_zero() {
        assert_eq!(scaled(1080, 0.25), 270);
        assert_eq!(scaled(3, 0.05), 1);
    }
}
