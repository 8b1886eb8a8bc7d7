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

//! Per-cell color and glyph resolution. The wallpaper renderer and the preview
//! both go through `CellColoring::style`.

use std::collections::HashMap;

use crate::dates::DayRange;
use crate::render_prims::Rgb;
use crate::spec::{CellMode, SpecialDateRange, Theme};

/// Special-date colors keyed by cell index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpecialColors(HashMap<usize, Rgb>);

impl SpecialColors {
    /// Clips each range to `bounds` and keeps the first color seen for every index.
    pub fn build<'a>(ranges: impl IntoIterator<Item = &'a SpecialDateRange>, bounds: &DayRange) -> Self {
        let mut map = HashMap::new();

        for range in ranges {
            if let Some(indices) = bounds.clip(range.start, range.end) {
                for index in indices {
                    map.entry(index).or_insert(range.color);
                }
            }
        }

        SpecialColors(map)
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.0.get(&index).copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellGlyph {
    Shape,
    Number,
    /// Shape in the cell color with the day number on top in `numeral`.
    ShapeWithNumber { numeral: Rgb },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellStyle {
    pub index: usize,
    pub color: Rgb,
    pub glyph: CellGlyph,
}

impl CellStyle {
    /// 1-based label drawn for number glyphs.
    pub fn day_number(&self) -> usize {
        self.index + 1
    }
}

#[derive(Clone, Debug)]
pub struct CellColoring {
    pub current_index: usize,
    pub specials: SpecialColors,
    pub theme: Theme,
    pub mode: CellMode,
}

impl CellColoring {
    pub fn color_for(&self, index: usize) -> Rgb {
        if let Some(color) = self.specials.get(index) {
            color
        } else if index == self.current_index {
            self.theme.today
        } else if index < self.current_index {
            self.theme.filled
        } else {
            self.theme.empty
        }
    }

    pub fn style(&self, index: usize) -> CellStyle {
        let color = self.color_for(index);
        let glyph = match self.mode {
            CellMode::Shape => CellGlyph::Shape,
            CellMode::Number => CellGlyph::Number,
            CellMode::ShapeAndNumber => {
                let on_dark_shape = index <= self.current_index || self.specials.contains(index);
                CellGlyph::ShapeWithNumber {
                    numeral: if on_dark_shape { self.theme.background } else { color },
                }
            }
        };

        CellStyle { index, color, glyph }
    }

    pub fn styles(&self, cells: usize) -> impl Iterator<Item = CellStyle> + '_ {
        (0..cells).map(move |i| self.style(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_prims::rgb;
    use chrono::NaiveDate;

    const RED: Rgb = rgb(0xFF0000);
    const BLUE: Rgb = rgb(0x0000FF);

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, day).unwrap()
    }

    fn special(start: NaiveDate, end: NaiveDate, color: Rgb) -> SpecialDateRange {
        SpecialDateRange {
            start,
            end,
            color,
            goal: None,
        }
    }

    fn coloring(current_index: usize, specials: SpecialColors, mode: CellMode) -> CellColoring {
        CellColoring {
            current_index,
            specials,
            theme: Theme::default(),
            mode,
        }
    }

    #[test]
    fn first_declared_range_wins() {
        let year = DayRange::new(d(1, 1), d(12, 31));
        let ranges = vec![special(d(1, 1), d(1, 10), RED), special(d(1, 5), d(1, 15), BLUE)];
        let specials = SpecialColors::build(&ranges, &year);

        assert_eq!(specials.get(6), Some(RED)); // Jan 7
        assert_eq!(specials.get(9), Some(RED));
        assert_eq!(specials.get(10), Some(BLUE));
        assert_eq!(specials.get(14), Some(BLUE));
        assert_eq!(specials.get(15), None);
        assert_eq!(specials.len(), 15);
    }

    #[test]
    fn ranges_outside_bounds_contribute_nothing() {
        let feb = DayRange::new(d(2, 1), d(2, 29));
        let ranges = vec![special(d(1, 1), d(1, 31), RED), special(d(1, 30), d(2, 2), BLUE)];
        let specials = SpecialColors::build(&ranges, &feb);

        assert_eq!(specials.len(), 2);
        assert_eq!(specials.get(0), Some(BLUE));
        assert_eq!(specials.get(1), Some(BLUE));
    }

    #[test]
    fn precedence_special_today_filled_empty() {
        let year = DayRange::new(d(1, 1), d(12, 31));
        let specials = SpecialColors::build(&[special(d(1, 3), d(1, 3), RED)], &year);
        let c = coloring(5, specials, CellMode::Shape);
        let theme = Theme::default();

        assert_eq!(c.color_for(2), RED);
        assert_eq!(c.color_for(5), theme.today);
        assert_eq!(c.color_for(0), theme.filled);
        assert_eq!(c.color_for(6), theme.empty);
    }

    #[test]
    fn special_color_overrides_today() {
        let year = DayRange::new(d(1, 1), d(12, 31));
        let specials = SpecialColors::build(&[special(d(1, 6), d(1, 6), RED)], &year);
        assert_eq!(coloring(5, specials, CellMode::Shape).color_for(5), RED);
    }

    #[test]
    fn filled_and_empty_regions_are_uniform() {
        let c = coloring(40, SpecialColors::default(), CellMode::Shape);
        let before: Vec<_> = (0..40).map(|i| c.color_for(i)).collect();
        assert!(before.iter().all(|&col| col == before[0]));

        let after: Vec<_> = (41..365).map(|i| c.color_for(i)).collect();
        assert!(after.iter().all(|&col| col == after[0]));
    }

    #[test]
    fn numeral_contrast_rule() {
        let year = DayRange::new(d(1, 1), d(12, 31));
        let specials = SpecialColors::build(&[special(d(1, 20), d(1, 20), RED)], &year);
        let c = coloring(10, specials, CellMode::ShapeAndNumber);
        let theme = Theme::default();

        let numeral = |i| match c.style(i).glyph {
            CellGlyph::ShapeWithNumber { numeral } => numeral,
            other => panic!("unexpected glyph {:?}", other),
        };

        assert_eq!(numeral(3), theme.background);
        assert_eq!(numeral(10), theme.background);
        assert_eq!(numeral(19), theme.background);
        assert_eq!(numeral(11), theme.empty);
    }

    #[test]
    fn number_mode_labels_are_one_based() {
        let c = coloring(0, SpecialColors::default(), CellMode::Number);
        let styles: Vec<_> = c.styles(3).collect();
        assert_eq!(styles.len(), 3);
        assert_eq!(styles[2].glyph, CellGlyph::Number);
        assert_eq!(styles[2].day_number(), 3);
    }
}
