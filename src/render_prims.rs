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

use anyhow::{anyhow, Result};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use pango::{FontDescription, Layout};

use crate::config::FONT_FAMILY;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const fn rgb(col: u32) -> Rgb {
    let r = (col >> 16) as u8;
    let g = (col >> 8) as u8;
    let b = col as u8;

    Rgb { r, g, b }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return Err(anyhow!("Expected a #RRGGBB color, got {:?}", s));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|e| anyhow!("Bad color {:?}: {}", s, e))?;

        Ok(rgb(value))
    }
}

impl TryFrom<String> for Rgb {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color {
            r: (rgb.r as f64 * (1.0 / 255.0)),
            g: (rgb.g as f64 * (1.0 / 255.0)),
            b: (rgb.b as f64 * (1.0 / 255.0)),
        }
    }
}

impl Color {
    pub fn apply(&self, cr: &cairo::Context) {
        cr.set_source_rgb(self.r, self.g, self.b);
    }
}

/// Absolute pixel-sized font in the configured family.
pub fn font_px(px: f64, bold: bool) -> FontDescription {
    let mut font = FontDescription::new();
    font.set_family(FONT_FAMILY);
    if bold {
        font.set_weight(pango::Weight::Bold);
    }
    font.set_absolute_size(px * pango::SCALE as f64);
    font
}

pub fn prepare_layout(context: &cairo::Context, font: &FontDescription, text: &str) -> Layout {
    let layout = pangocairo::functions::create_layout(context);

    layout.set_font_description(Some(font));
    layout.set_text(text);
    layout
}

pub fn layout_size_px(layout: &Layout) -> (f64, f64) {
    let (w, h) = layout.pixel_size();
    (w as f64, h as f64)
}

pub trait Renderable {
    fn render_internal(&self, cr: &cairo::Context) -> Result<()>;

    fn render(&self, cr: &cairo::Context) -> Result<()> {
        cr.save()?;
        cr.move_to(0.0, 0.0);
        let result = self.render_internal(cr);
        cr.restore()?;

        result
    }

    fn render_to(&self, cr: &cairo::Context, origin: (f64, f64)) -> Result<()> {
        cr.save()?;
        cr.translate(origin.0, origin.1);

        let result = self.render(cr);

        cr.restore()?;

        result
    }

    fn bounds(&self) -> (f64, f64);

    fn height(&self) -> f64 {
        self.bounds().1
    }
    fn width(&self) -> f64 {
        self.bounds().0
    }
}

impl Renderable for Box<dyn Renderable> {
    fn render_internal(&self, cr: &cairo::Context) -> Result<()> {
        std::ops::Deref::deref(self).render(cr)
    }
    fn bounds(&self) -> (f64, f64) {
        std::ops::Deref::deref(self).bounds()
    }
}

pub struct RenderTranslate {
    pub inner: Box<dyn Renderable>,
    pub offset: (f64, f64),
}

impl Renderable for RenderTranslate {
    fn render_internal(&self, cr: &cairo::Context) -> Result<()> {
        self.inner.render_to(cr, (self.offset.0, self.offset.1))
    }
    fn bounds(&self) -> (f64, f64) {
        let (w, h) = self.inner.bounds();
        (w + self.offset.0, h + self.offset.1)
    }
}

pub trait RenderableEx: Renderable {
    fn offset(self, x: f64, y: f64) -> RenderTranslate
    where
        Self: Sized + 'static,
    {
        RenderTranslate {
            inner: Box::new(self),
            offset: (x, y),
        }
    }

    /// Shifts this item so it sits horizontally centered in a span of `span_width`.
    fn center_in(self, span_width: f64) -> RenderTranslate
    where
        Self: Sized + 'static,
    {
        let x = (span_width - self.width()) / 2.0;
        self.offset(x, 0.0)
    }
}

impl<R: Renderable> RenderableEx for R {}

pub struct RenderGroup {
    pub items: Vec<Box<dyn Renderable>>,
}

impl RenderGroup {
    pub fn new() -> Self {
        Self { items: vec![] }
    }

    pub fn push(&mut self, item: impl Renderable + 'static) {
        self.items.push(Box::new(item));
    }
}

impl Renderable for RenderGroup {
    fn render_internal(&self, cr: &cairo::Context) -> Result<()> {
        for item in self.items.iter() {
            item.render(cr)?;
        }

        Ok(())
    }
    fn bounds(&self) -> (f64, f64) {
        let mut w = 0.0;
        let mut h = 0.0;

        for item in self.items.iter() {
            let (iw, ih) = item.bounds();

            if iw > w {
                w = iw;
            }
            if ih > h {
                h = ih;
            }
        }

        (w, h)
    }
}

pub struct TextBox {
    text: String,
    color: Color,
    font: FontDescription,
    width: f64,
    height: f64,
}

impl TextBox {
    pub fn new(context: &cairo::Context, text: String, color: Color, font: &FontDescription) -> TextBox {
        let layout = prepare_layout(context, font, &text);
        let (width, height) = layout_size_px(&layout);

        TextBox {
            text,
            color,
            font: font.clone(),
            width,
            height,
        }
    }
}

impl Renderable for TextBox {
    fn render_internal(&self, cr: &cairo::Context) -> Result<()> {
        cr.new_path();
        cr.move_to(0.0, 0.0);
        self.color.apply(cr);

        let layout = prepare_layout(cr, &self.font, &self.text);
        pangocairo::functions::show_layout(cr, &layout);

        Ok(())
    }

    fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// Draws `text` so that its logical box is centered on `center`.
pub fn show_text_centered(
    cr: &cairo::Context,
    text: &str,
    font: &FontDescription,
    color: Color,
    center: (f64, f64),
) {
    let layout = prepare_layout(cr, font, text);
    let (w, h) = layout_size_px(&layout);

    cr.new_path();
    color.apply(cr);
    cr.move_to(center.0 - w / 2.0, center.1 - h / 2.0);
    pangocairo::functions::show_layout(cr, &layout);
}

#[derive(Clone, Copy, Debug)]
pub struct FillRect {
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl FillRect {
    pub fn rect(color: Color, w: f64, h: f64) -> Self {
        Self {
            width: w,
            height: h,
            color,
        }
    }
}

impl Renderable for FillRect {
    fn render_internal(&self, cr: &cairo::Context) -> Result<()> {
        self.color.apply(cr);
        cr.new_path();
        cr.rectangle(0.0, 0.0, self.width, self.height);
        cr.fill()?;
        Ok(())
    }

    fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

pub struct RenderColumn {
    items: Vec<Box<dyn Renderable>>,
    height: f64,
    width: f64,
}

impl RenderColumn {
    pub fn new() -> Self {
        Self {
            items: vec![],
            height: 0.0,
            width: 0.0,
        }
    }

    pub fn push(&mut self, item: impl Renderable + 'static) -> f64 {
        let offset = self.height;

        let item = item.offset(0.0, offset);
        let (width, height) = item.bounds();

        self.height = height;
        if width > self.width {
            self.width = width;
        }

        self.items.push(Box::new(item));

        offset
    }
}

impl Renderable for RenderColumn {
    fn render_internal(&self, cr: &cairo::Context) -> Result<()> {
        for item in self.items.iter() {
            item.render(cr)?;
        }

        Ok(())
    }
    fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

pub struct Pad {
    bounds: (f64, f64),
}

impl Pad {
    pub fn new(w: f64, h: f64) -> Self {
        Self { bounds: (w, h) }
    }
}

impl Renderable for Pad {
    fn render_internal(&self, _cr: &cairo::Context) -> Result<()> {
        Ok(())
    }

    fn bounds(&self) -> (f64, f64) {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!("#FF8000".parse::<Rgb>().unwrap(), rgb(0xFF8000));
        assert_eq!("0a0b0c".parse::<Rgb>().unwrap(), rgb(0x0A0B0C));
        assert!("#FFF".parse::<Rgb>().is_err());
        assert!("#GG0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn color_round_trips_through_display() {
        let c = rgb(0x1E90FF);
        assert_eq!(c.to_string(), "#1E90FF");
    }

    #[test]
    fn column_stacks_heights() {
        let mut col = RenderColumn::new();
        assert_eq!(col.push(Pad::new(10.0, 5.0)), 0.0);
        assert_eq!(col.push(Pad::new(30.0, 7.5)), 5.0);
        assert_eq!(col.bounds(), (30.0, 12.5));
    }
}
