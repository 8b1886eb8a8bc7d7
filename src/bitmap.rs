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

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use std::convert::TryInto;
use std::io::Write;
use std::path::Path;

use tracing::{info, span, Level};

use crate::dot_grid::{self, RangeInput};
use crate::error::{convert_err, WallpaperError};
use crate::goals::{self, GoalPlan};
use crate::render_prims::{FillRect, Renderable, Rgb};
use crate::spec::WallpaperSpec;

/// RGBA8888 image, row-major, always opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize * self.width as usize) + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[i..i + 4]);
        Some(px)
    }

    /// Copies an Rgb24 surface out. The surface must have no live context.
    fn from_surface(surface: &mut cairo::ImageSurface) -> Result<Self> {
        surface.flush();

        let width: usize = surface.width().try_into()?;
        let height: usize = surface.height().try_into()?;
        let stride: usize = surface.stride().try_into()?;
        let data = surface.data().map_err(convert_err)?;

        let mut pixels = Vec::with_capacity(width * height * 4);
        for row in data.chunks_exact(stride).take(height) {
            // Native-endian 0x00RRGGBB words
            for px in row[..width * 4].chunks_exact(4) {
                let word = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                pixels.extend_from_slice(&[(word >> 16) as u8, (word >> 8) as u8, word as u8, 0xFF]);
            }
        }

        Ok(Bitmap {
            width: width as u32,
            height: height as u32,
            pixels,
        })
    }

    pub fn write_png_to(&self, w: impl Write) -> Result<()> {
        let mut encoder = png::Encoder::new(w, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;

        Ok(())
    }

    pub fn write_png(&self, filename: impl AsRef<Path>) -> Result<()> {
        let filename = filename.as_ref();
        let f = std::fs::File::create(filename).with_context(|| format!("Creating {:?}", filename))?;
        let f = std::io::BufWriter::new(f);

        self.write_png_to(f)
            .with_context(|| format!("Writing PNG {:?}", filename))
    }
}

/// A spec whose preconditions have been checked, ready to draw.
pub enum Prepared<'a> {
    Range(RangeInput<'a>),
    Goals(GoalPlan<'a>),
}

pub fn prepare(spec: &WallpaperSpec, today: NaiveDate) -> Result<Prepared<'_>, WallpaperError> {
    Ok(match spec {
        WallpaperSpec::Year(year) => Prepared::Range(RangeInput::year(year, today)?),
        WallpaperSpec::Month(month) => Prepared::Range(RangeInput::month(month, today)?),
        WallpaperSpec::Goals(goals) => Prepared::Goals(GoalPlan::new(goals, today)?),
    })
}

/// Paints onto a fresh `width` x `height` canvas pre-filled with `background`.
pub fn draw_bitmap<F>(width: u32, height: u32, background: Rgb, draw: F) -> Result<Bitmap>
where
    F: FnOnce(&cairo::Context, (f64, f64)) -> Result<()>,
{
    if width == 0 || height == 0 {
        return Err(WallpaperError::InvalidCanvas(width, height).into());
    }

    let mut surface = cairo::ImageSurface::create(
        cairo::Format::Rgb24,
        width.try_into()?,
        height.try_into()?,
    )
    .map_err(convert_err)?;

    {
        let cr = cairo::Context::new(&surface).map_err(convert_err)?;
        let canvas = (width as f64, height as f64);

        FillRect::rect(background.into(), canvas.0, canvas.1).render(&cr)?;
        draw(&cr, canvas)?;
    }

    Bitmap::from_surface(&mut surface)
}

/// Renders `spec` as of `today` into a fresh `width` x `height` bitmap.
pub fn render_wallpaper(width: u32, height: u32, spec: &WallpaperSpec, today: NaiveDate) -> Result<Bitmap> {
    let span = span!(Level::INFO, "render_wallpaper", mode = spec.mode_name(), width, height);
    let _enter = span.enter();

    let prepared = prepare(spec, today)?;

    info!("Rendering for {}", today);

    draw_bitmap(width, height, spec.layout().theme.background, |cr, canvas| {
        match &prepared {
            Prepared::Range(input) => {
                dot_grid::render_range(cr, canvas, input)?;
            }
            Prepared::Goals(plan) => {
                goals::render_goals(cr, canvas, plan)?;
            }
        }
        Ok(())
    })
}
