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

//! Draws every cell shape in each cell mode into one PNG, for eyeballing the
//! shape renderer.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use dotgrid_wallpaper::bitmap::draw_bitmap;
use dotgrid_wallpaper::coloring::{CellColoring, SpecialColors};
use dotgrid_wallpaper::dot_grid::RangedDots;
use dotgrid_wallpaper::geometry::GridRequest;
use dotgrid_wallpaper::render_prims::{Pad, RenderColumn, Renderable, RenderableEx};
use dotgrid_wallpaper::spec::CellMode;
use dotgrid_wallpaper::{ShapeKind, Theme};

#[derive(Parser, Debug)]
struct Opts {
    #[arg(short, long, default_value = "shapes.png")]
    output: PathBuf,

    /// Cell diameter in pixels.
    #[arg(short, long, default_value_t = 48.0)]
    diameter: f64,
}

const CELLS: usize = 6;
const MARGIN: f64 = 16.0;

fn main() -> Result<()> {
    let opts: Opts = Opts::parse();
    tracing_subscriber::fmt::init();

    let theme = Theme::default();
    let modes = [CellMode::Shape, CellMode::Number, CellMode::ShapeAndNumber];
    let gap = 0.5;
    let geometry = GridRequest::new(
        opts.diameter * (CELLS as f64 * (1.0 + gap) - gap),
        CELLS,
        1,
        gap,
    )
    .resolve();

    let block_width = geometry.grid_width + MARGIN;
    let width = (block_width * modes.len() as f64 + MARGIN).ceil() as u32;
    let height = ((geometry.grid_height + MARGIN) * ShapeKind::ALL.len() as f64 + MARGIN).ceil() as u32;

    let bitmap = draw_bitmap(width, height, theme.background, |cr, _canvas| {
        for (m, mode) in modes.iter().enumerate() {
            let mut column = RenderColumn::new();
            for shape in ShapeKind::ALL.iter() {
                column.push(RangedDots {
                    geometry,
                    cells: CELLS,
                    coloring: CellColoring {
                        current_index: CELLS / 2,
                        specials: SpecialColors::default(),
                        theme,
                        mode: *mode,
                    },
                    shape: *shape,
                });
                column.push(Pad::new(0.0, MARGIN));
            }
            column
                .offset(MARGIN + m as f64 * block_width, MARGIN)
                .render(cr)?;
        }
        Ok(())
    })?;

    bitmap.write_png(&opts.output)
}
