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

//! Goals layout: one or two goal blocks stacked vertically, each with a title,
//! its own dot grid and a progress label. All blocks share one dot size.

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::coloring::{CellColoring, SpecialColors};
use crate::config::*;
use crate::dates::GoalProgress;
use crate::dot_grid::{available_width, padded_band, stats_label, RangedDots};
use crate::error::WallpaperError;
use crate::geometry::{self, GridGeometry, GridRequest};
use crate::render_prims::*;
use crate::spec::{Goal, GoalSpec, LayoutSpec};

pub const MAX_GOALS: usize = 2;

pub struct GoalBlock<'a> {
    pub goal: &'a Goal,
    pub progress: GoalProgress,
    pub specials: SpecialColors,
}

pub struct GoalPlan<'a> {
    pub blocks: Vec<GoalBlock<'a>>,
    pub total_dots: usize,
    pub size_multiplier: f64,
    pub columns: usize,
    pub layout: &'a LayoutSpec,
}

impl<'a> GoalPlan<'a> {
    /// Checks preconditions and derives per-goal progress. Nothing is drawn here.
    pub fn new(spec: &'a GoalSpec, today: NaiveDate) -> Result<Self, WallpaperError> {
        let count = spec.goals.len();
        if count == 0 || count > MAX_GOALS {
            return Err(WallpaperError::GoalCount(count));
        }

        let mut blocks = Vec::with_capacity(count);
        for goal in spec.goals.iter() {
            let progress = GoalProgress::compute(goal, today)?;
            let owned = spec
                .layout
                .special_dates
                .iter()
                .filter(|r| r.goal.as_deref() == Some(goal.title.as_str()));

            blocks.push(GoalBlock {
                goal,
                progress,
                specials: SpecialColors::build(owned, &progress.range),
            });
        }

        let total_dots = blocks.iter().map(|b| b.progress.total_days).sum();

        Ok(GoalPlan {
            blocks,
            total_dots,
            size_multiplier: geometry::goal_size_multiplier(spec.layout.dot_size, total_dots),
            columns: spec.layout.columns_or(DEFAULT_COLUMNS_GOALS),
            layout: &spec.layout,
        })
    }

    /// Cell geometry shared by every block; rows are filled in per block.
    pub fn base_geometry(&self, canvas_width: f64) -> GridGeometry {
        GridRequest::new(
            available_width(canvas_width, self.layout.side_padding_ratio()),
            self.columns,
            1,
            self.layout.gap(),
        )
        .size_multiplier(self.size_multiplier)
        .resolve()
    }

    pub fn block_geometry(&self, base: &GridGeometry, block: &GoalBlock<'_>) -> GridGeometry {
        base.with_rows(geometry::rows_for(block.progress.total_days, self.columns))
    }
}

/// Measured text heights of one goal block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalTextHeights {
    pub title: f64,
    /// `None` when the progress label is hidden.
    pub label: Option<f64>,
}

/// Where one goal block lands on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockPlacement {
    pub geometry: GridGeometry,
    /// Top of the title line.
    pub top: f64,
    /// Top-left corner of the grid.
    pub origin: (f64, f64),
    pub height: f64,
}

impl BlockPlacement {
    pub fn cell_center(&self, index: usize) -> (f64, f64) {
        let (x, y) = self.geometry.cell_center(index);
        (self.origin.0 + x, self.origin.1 + y)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GoalPlacement {
    pub blocks: Vec<BlockPlacement>,
    /// Space between the two blocks; zero for a single goal.
    pub spacing: f64,
    pub top: f64,
    pub content_height: f64,
}

/// Pure layout of the goal stack. `text` holds one entry per block.
pub fn place_goals(canvas: (f64, f64), plan: &GoalPlan<'_>, text: &[GoalTextHeights]) -> GoalPlacement {
    let (width, height) = canvas;
    let base = plan.base_geometry(width);
    let title_gap = height * TITLE_GAP_FRACTION;
    let label_gap = height * LABEL_GAP_FRACTION;
    let spacing = if plan.blocks.len() == MAX_GOALS {
        height * GOAL_SPACING_FRACTION
    } else {
        0.0
    };

    let sized: Vec<(GridGeometry, &GoalTextHeights, f64)> = plan
        .blocks
        .iter()
        .zip(text)
        .map(|(block, text)| {
            let geometry = plan.block_geometry(&base, block);
            let label = text.label.map(|h| label_gap + h).unwrap_or(0.0);
            (geometry, text, text.title + title_gap + geometry.grid_height + label)
        })
        .collect();

    let content_height = sized.iter().map(|(_, _, h)| h).sum::<f64>()
        + spacing * sized.len().saturating_sub(1) as f64;

    let (band_top, band_height) = padded_band(height, plan.layout.vertical_padding_ratio());
    let top = band_top + geometry::biased_offset(band_height, content_height, plan.layout.bias());

    let mut y = top;
    let mut blocks = Vec::with_capacity(sized.len());
    for (geometry, text, block_height) in sized {
        blocks.push(BlockPlacement {
            geometry,
            top: y,
            origin: ((width - geometry.grid_width) / 2.0, y + text.title + title_gap),
            height: block_height,
        });
        y += block_height + spacing;
    }

    GoalPlacement {
        blocks,
        spacing,
        top,
        content_height,
    }
}

fn block_text(
    cr: &cairo::Context,
    plan: &GoalPlan<'_>,
    block: &GoalBlock<'_>,
    canvas_width: f64,
) -> (TextBox, Option<RenderGroup>) {
    let layout = plan.layout;
    let title = TextBox::new(
        cr,
        block.goal.title.clone(),
        layout.theme.filled.into(),
        &font_px(title_font_px(canvas_width), true),
    );
    let label = if layout.show_label {
        Some(stats_label(cr, &block.progress.progress, &layout.theme, canvas_width))
    } else {
        None
    };

    (title, label)
}

/// Measures titles and labels the way `render_goals` will draw them.
pub fn measure_goal_text(cr: &cairo::Context, plan: &GoalPlan<'_>, canvas_width: f64) -> Vec<GoalTextHeights> {
    plan.blocks
        .iter()
        .map(|block| {
            let (title, label) = block_text(cr, plan, block, canvas_width);
            GoalTextHeights {
                title: title.height(),
                label: label.map(|l| l.height()),
            }
        })
        .collect()
}

/// Draws the goal stack into a canvas already filled with the theme background.
pub fn render_goals(cr: &cairo::Context, canvas: (f64, f64), plan: &GoalPlan<'_>) -> Result<GoalPlacement> {
    let (width, height) = canvas;
    let layout = plan.layout;

    let text: Vec<_> = plan
        .blocks
        .iter()
        .map(|block| block_text(cr, plan, block, width))
        .collect();
    let heights: Vec<_> = text
        .iter()
        .map(|(title, label)| GoalTextHeights {
            title: title.height(),
            label: label.as_ref().map(|l| l.height()),
        })
        .collect();
    let placement = place_goals(canvas, plan, &heights);

    info!(
        goals = plan.blocks.len(),
        total_dots = plan.total_dots,
        size_multiplier = plan.size_multiplier,
        diameter = placement.blocks.first().map(|b| b.geometry.diameter),
        "Laying out goals"
    );

    for ((block, (title, label)), at) in plan.blocks.iter().zip(text).zip(placement.blocks.iter()) {
        debug!(
            title = %block.goal.title,
            days = block.progress.total_days,
            today_index = block.progress.current_index,
            block_top = at.top,
            block_height = at.height,
            "Goal block"
        );

        let dots = RangedDots {
            geometry: at.geometry,
            cells: block.progress.total_days,
            coloring: CellColoring {
                current_index: block.progress.current_index,
                specials: block.specials.clone(),
                theme: layout.theme,
                mode: layout.cell_mode(),
            },
            shape: layout.shape,
        };

        let mut column = RenderColumn::new();
        column.push(title.center_in(width));
        column.push(Pad::new(0.0, height * TITLE_GAP_FRACTION));
        column.push(dots.offset(at.origin.0, 0.0));
        if let Some(label) = label {
            column.push(Pad::new(0.0, height * LABEL_GAP_FRACTION));
            column.push(label.center_in(width));
        }

        column.render_to(cr, (0.0, at.top))?;
    }

    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_prims::rgb;
    use crate::spec::SpecialDateRange;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn goal(title: &str, start: NaiveDate, deadline: NaiveDate) -> Goal {
        Goal {
            title: title.into(),
            start,
            deadline,
        }
    }

    fn spec(goals: Vec<Goal>) -> GoalSpec {
        GoalSpec {
            goals,
            layout: LayoutSpec::default(),
        }
    }

    #[test]
    fn rejects_bad_goal_counts() {
        let none = spec(vec![]);
        assert!(matches!(GoalPlan::new(&none, d(2024, 1, 1)), Err(WallpaperError::GoalCount(0))));

        let g = goal("a", d(2024, 1, 1), d(2024, 1, 2));
        let three = spec(vec![g.clone(), g.clone(), g]);
        assert!(matches!(GoalPlan::new(&three, d(2024, 1, 1)), Err(WallpaperError::GoalCount(3))));
    }

    #[test]
    fn two_long_goals_shrink_dots() {
        let s = spec(vec![
            goal("a", d(2024, 1, 1), d(2024, 7, 18)),
            goal("b", d(2024, 1, 1), d(2024, 3, 4)),
        ]);
        let plan = GoalPlan::new(&s, d(2024, 2, 1)).unwrap();

        assert_eq!(plan.blocks[0].progress.total_days, 200);
        assert_eq!(plan.blocks[1].progress.total_days, 64);
        assert_eq!(plan.total_dots, 264);
        assert!((plan.size_multiplier - 0.88).abs() < 1e-9);
    }

    #[test]
    fn four_hundred_dots_use_lowest_tier() {
        let s = spec(vec![
            goal("a", d(2024, 1, 1), d(2024, 7, 18)),
            goal("b", d(2024, 1, 1), d(2024, 7, 18)),
        ]);
        let plan = GoalPlan::new(&s, d(2024, 2, 1)).unwrap();

        assert_eq!(plan.total_dots, 400);
        assert!((plan.size_multiplier - 0.75).abs() < 1e-9);
    }

    #[test]
    fn blocks_share_diameter() {
        let s = spec(vec![
            goal("a", d(2024, 1, 1), d(2024, 1, 10)),
            goal("b", d(2024, 1, 1), d(2024, 3, 31)),
        ]);
        let plan = GoalPlan::new(&s, d(2024, 1, 5)).unwrap();
        let base = plan.base_geometry(1080.0);

        let a = plan.block_geometry(&base, &plan.blocks[0]);
        let b = plan.block_geometry(&base, &plan.blocks[1]);
        assert_eq!(a.diameter, b.diameter);
        assert_eq!(a.rows, 1);
        assert_eq!(b.rows, 7);
        assert!(b.grid_height > a.grid_height);
    }

    #[test]
    fn special_dates_follow_their_goal() {
        let mut s = spec(vec![
            goal("a", d(2024, 1, 1), d(2024, 1, 10)),
            goal("b", d(2024, 1, 5), d(2024, 1, 20)),
        ]);
        s.layout.special_dates = vec![
            SpecialDateRange {
                start: d(2024, 1, 6),
                end: d(2024, 1, 30),
                color: rgb(0xFF0000),
                goal: Some("b".into()),
            },
            SpecialDateRange {
                start: d(2024, 1, 1),
                end: d(2024, 1, 1),
                color: rgb(0x00FF00),
                goal: None,
            },
        ];
        let plan = GoalPlan::new(&s, d(2024, 1, 5)).unwrap();

        assert!(plan.blocks[0].specials.is_empty());
        // Jan 6..=Jan 20 inside goal b, which starts Jan 5.
        assert_eq!(plan.blocks[1].specials.len(), 15);
        assert_eq!(plan.blocks[1].specials.get(1), Some(rgb(0xFF0000)));
        assert_eq!(plan.blocks[1].specials.get(0), None);
    }

    fn short_goals(bias: f64, count: usize) -> GoalSpec {
        let goals = vec![
            goal("a", d(2024, 1, 1), d(2024, 1, 10)),
            goal("b", d(2024, 1, 1), d(2024, 1, 20)),
        ];
        GoalSpec {
            goals: goals.into_iter().take(count).collect(),
            layout: LayoutSpec {
                vertical_bias: bias,
                ..LayoutSpec::default()
            },
        }
    }

    const TEXT: GoalTextHeights = GoalTextHeights {
        title: 30.0,
        label: Some(24.0),
    };
    const CANVAS: (f64, f64) = (1080.0, 2400.0);

    #[test]
    fn bias_extremes_pin_stack_to_band_edges() {
        let (band_top, band) = padded_band(CANVAS.1, DEFAULT_VERTICAL_PADDING);

        let s = short_goals(-1.0, 2);
        let plan = GoalPlan::new(&s, d(2024, 1, 5)).unwrap();
        let top = place_goals(CANVAS, &plan, &[TEXT, TEXT]);
        assert!((top.top - band_top).abs() < 1e-9);
        assert!((top.blocks[0].top - band_top).abs() < 1e-9);

        let s = short_goals(1.0, 2);
        let plan = GoalPlan::new(&s, d(2024, 1, 5)).unwrap();
        let bottom = place_goals(CANVAS, &plan, &[TEXT, TEXT]);
        let last = bottom.blocks[1];
        assert!((last.top + last.height - (band_top + band)).abs() < 1e-9);
        assert!((bottom.top + bottom.content_height - (band_top + band)).abs() < 1e-9);
    }

    #[test]
    fn spacing_only_between_two_goals() {
        let s = short_goals(0.0, 2);
        let plan = GoalPlan::new(&s, d(2024, 1, 5)).unwrap();
        let two = place_goals(CANVAS, &plan, &[TEXT, TEXT]);

        let gap = two.blocks[1].top - (two.blocks[0].top + two.blocks[0].height);
        assert!((gap - CANVAS.1 * GOAL_SPACING_FRACTION).abs() < 1e-9);
        let summed = two.blocks[0].height + two.blocks[1].height + gap;
        assert!((two.content_height - summed).abs() < 1e-9);

        let s = short_goals(0.0, 1);
        let plan = GoalPlan::new(&s, d(2024, 1, 5)).unwrap();
        let one = place_goals(CANVAS, &plan, &[TEXT]);
        assert_eq!(one.spacing, 0.0);
        assert!((one.content_height - one.blocks[0].height).abs() < 1e-9);
    }

    #[test]
    fn block_height_sums_title_grid_and_label() {
        let s = short_goals(0.0, 1);
        let plan = GoalPlan::new(&s, d(2024, 1, 5)).unwrap();
        let unlabelled = GoalTextHeights { label: None, ..TEXT };

        let with = place_goals(CANVAS, &plan, &[TEXT]).blocks[0];
        let without = place_goals(CANVAS, &plan, &[unlabelled]).blocks[0];

        let grid = with.geometry.grid_height;
        let title_gap = CANVAS.1 * TITLE_GAP_FRACTION;
        assert!((without.height - (30.0 + title_gap + grid)).abs() < 1e-9);
        assert!((with.height - without.height - (CANVAS.1 * LABEL_GAP_FRACTION + 24.0)).abs() < 1e-9);
        assert!((with.origin.1 - (with.top + 30.0 + title_gap)).abs() < 1e-9);
        assert!(((CANVAS.0 - with.geometry.grid_width) / 2.0 - with.origin.0).abs() < 1e-9);
    }
}
