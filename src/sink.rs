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

//! Where finished bitmaps go. The real app hands them to the OS wallpaper
//! service; here a directory of PNGs stands in for it.

use anyhow::{Context, Result};
use std::path::PathBuf;

use tracing::info;

use crate::bitmap::Bitmap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallpaperTarget {
    Home,
    Lock,
    Both,
}

impl WallpaperTarget {
    pub fn file_names(self) -> &'static [&'static str] {
        match self {
            WallpaperTarget::Home => &["home.png"],
            WallpaperTarget::Lock => &["lock.png"],
            WallpaperTarget::Both => &["home.png", "lock.png"],
        }
    }
}

pub trait WallpaperSink {
    fn apply(&mut self, bitmap: &Bitmap, target: WallpaperTarget) -> Result<()>;
}

pub struct PngDirectorySink {
    dir: PathBuf,
}

impl PngDirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl WallpaperSink for PngDirectorySink {
    fn apply(&mut self, bitmap: &Bitmap, target: WallpaperTarget) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Creating output directory {:?}", self.dir))?;

        for name in target.file_names() {
            let path = self.dir.join(name);
            info!("Writing {:?}", path);
            bitmap.write_png(&path)?;
        }

        Ok(())
    }
}
