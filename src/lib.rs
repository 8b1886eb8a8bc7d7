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

//! Calendar progress wallpapers: a year, a month, or one or two goals drawn as
//! a grid of dots, one per day, rendered to an RGBA bitmap.

pub mod bitmap;
pub mod coloring;
pub mod config;
pub mod dates;
pub mod dot_grid;
pub mod error;
pub mod geometry;
pub mod goals;
pub mod preview;
pub mod render_prims;
pub mod shapes;
pub mod sink;
pub mod spec;

pub use bitmap::{render_wallpaper, Bitmap};
pub use error::WallpaperError;
pub use preview::{preview_cells, render_preview};
pub use render_prims::{rgb, Rgb};
pub use shapes::ShapeKind;
pub use sink::{PngDirectorySink, WallpaperSink, WallpaperTarget};
pub use spec::{Goal, GoalSpec, LayoutSpec, MonthSpec, SpecialDateRange, Theme, WallpaperSpec, YearSpec};
