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

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WallpaperError {
    #[error("Cairo error: {0}")]
    CairoError(#[from] cairo::Error),
    #[error("Surface data unavailable: {0}")]
    SurfaceBorrow(#[from] cairo::BorrowError),
    #[error("Goal mode needs one or two goals, got {0}")]
    GoalCount(usize),
    #[error("Goal {title:?} has deadline {deadline} before its start {start}")]
    GoalOrder {
        title: String,
        start: NaiveDate,
        deadline: NaiveDate,
    },
    #[error("Year {0} is out of range")]
    InvalidYear(i32),
    #[error("No such month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("Canvas must be at least 1x1, got {0}x{1}")]
    InvalidCanvas(u32, u32),
}

pub fn convert_err<E>(err: E) -> anyhow::Error
where
    WallpaperError: From<E>,
{
    WallpaperError::from(err).into()
}
