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

use chrono::{Datelike, NaiveDate};

use crate::error::WallpaperError;
use crate::spec::Goal;

pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Inclusive span of calendar days; cell `i` is `start + i` days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DayRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DayRange { start, end }
    }

    pub fn total_days(&self) -> usize {
        (days_between(self.start, self.end) + 1).max(1) as usize
    }

    /// Index of `date`, clamped onto the range.
    pub fn clamped_index(&self, date: NaiveDate) -> usize {
        let last = self.total_days() as i64 - 1;
        days_between(self.start, date).clamp(0, last) as usize
    }

    /// Cell indices covered by `[start, end]` after clipping to this range.
    pub fn clip(&self, start: NaiveDate, end: NaiveDate) -> Option<std::ops::RangeInclusive<usize>> {
        let start = start.max(self.start);
        let end = end.min(self.end);
        if start > end {
            return None;
        }

        Some(self.clamped_index(start)..=self.clamped_index(end))
    }
}

pub fn year_range(year: i32) -> Option<DayRange> {
    Some(DayRange::new(
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

pub fn month_range(year: i32, month: u32) -> Result<DayRange, WallpaperError> {
    let invalid = || WallpaperError::InvalidMonth { year, month };

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
    let next = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
    };
    let next = next.ok_or_else(invalid)?;

    Ok(DayRange::new(first, next.pred_opt().ok_or_else(invalid)?))
}

/// "Nd left" and "P%" figures shown under a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub days_left: usize,
    pub percent: usize,
}

impl Progress {
    pub fn year(total_days: usize, today_index: usize) -> Self {
        Progress {
            days_left: (total_days - 1) - today_index,
            percent: ((today_index + 1) * 100) / total_days,
        }
    }

    /// Month figures count from the 1-based day of month, not the cell index.
    pub fn month(total_days: usize, day_of_month: usize) -> Self {
        Progress {
            days_left: total_days.saturating_sub(day_of_month),
            percent: (day_of_month * 100) / total_days,
        }
    }

    pub fn goal(total_days: usize, current_index: usize) -> Self {
        Progress {
            days_left: total_days - 1 - current_index,
            percent: ((current_index + 1) * 100) / total_days,
        }
    }
}

/// Index of "today" within the year grid.
pub fn year_today_index(range: &DayRange, today: NaiveDate) -> usize {
    range.clamped_index(today)
}

/// Day-of-month minus one, clamped to the month's cells.
pub fn month_today_index(range: &DayRange, today: NaiveDate) -> usize {
    let dom0 = today.day0() as usize;
    dom0.min(range.total_days() - 1)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalProgress {
    pub range: DayRange,
    pub total_days: usize,
    pub current_index: usize,
    pub progress: Progress,
}

impl GoalProgress {
    pub fn compute(goal: &Goal, today: NaiveDate) -> Result<Self, WallpaperError> {
        if goal.deadline < goal.start {
            return Err(WallpaperError::GoalOrder {
                title: goal.title.clone(),
                start: goal.start,
                deadline: goal.deadline,
            });
        }

        let range = DayRange::new(goal.start, goal.deadline);
        let total_days = range.total_days();
        let current_index = range.clamped_index(today);

        Ok(GoalProgress {
            range,
            total_days,
            current_index,
            progress: Progress::goal(total_days, current_index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn goal(start: NaiveDate, deadline: NaiveDate) -> Goal {
        Goal {
            title: "Goal".into(),
            start,
            deadline,
        }
    }

    #[test]
    fn year_lengths() {
        assert_eq!(year_range(2023).unwrap().total_days(), 365);
        assert_eq!(year_range(2024).unwrap().total_days(), 366);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(month_range(2024, 2).unwrap().total_days(), 29);
        assert_eq!(month_range(2023, 2).unwrap().total_days(), 28);
        assert_eq!(month_range(2023, 12).unwrap().total_days(), 31);
        assert!(matches!(
            month_range(2023, 13),
            Err(WallpaperError::InvalidMonth { month: 13, .. })
        ));
    }

    #[test]
    fn year_scenario_feb_2() {
        let range = year_range(2023).unwrap();
        let idx = year_today_index(&range, d(2023, 2, 2));
        assert_eq!(idx, 32);
        assert_eq!(
            Progress::year(range.total_days(), idx),
            Progress {
                days_left: 332,
                percent: 9
            }
        );
    }

    #[test]
    fn month_index_clamps_to_short_month() {
        let sept = month_range(2024, 9).unwrap();
        assert_eq!(month_today_index(&sept, d(2024, 10, 31)), 29);
        assert_eq!(month_today_index(&sept, d(2024, 9, 5)), 4);
    }

    #[test]
    fn month_progress_uses_day_of_month() {
        assert_eq!(
            Progress::month(30, 5),
            Progress {
                days_left: 25,
                percent: 16
            }
        );
        assert_eq!(Progress::month(31, 31).days_left, 0);
    }

    #[test]
    fn goal_scenario() {
        let p = GoalProgress::compute(&goal(d(2024, 1, 1), d(2024, 1, 10)), d(2024, 1, 5)).unwrap();
        assert_eq!(p.total_days, 10);
        assert_eq!(p.current_index, 4);
        assert_eq!(p.progress.days_left, 5);
        assert_eq!(p.progress.percent, 50);
    }

    #[test]
    fn goal_index_clamps() {
        let g = goal(d(2024, 3, 1), d(2024, 3, 31));
        let future = GoalProgress::compute(&g, d(2024, 1, 1)).unwrap();
        assert_eq!(future.current_index, 0);

        let past = GoalProgress::compute(&g, d(2025, 1, 1)).unwrap();
        assert_eq!(past.current_index, 30);
        assert_eq!(past.progress.days_left, 0);
        assert_eq!(past.progress.percent, 100);
    }

    #[test]
    fn single_day_goal_is_valid() {
        let p = GoalProgress::compute(&goal(d(2024, 6, 1), d(2024, 6, 1)), d(2024, 6, 1)).unwrap();
        assert_eq!(p.total_days, 1);
        assert_eq!(p.progress.percent, 100);
    }

    #[test]
    fn reversed_goal_is_rejected() {
        let err = GoalProgress::compute(&goal(d(2024, 6, 2), d(2024, 6, 1)), d(2024, 6, 1)).unwrap_err();
        assert!(matches!(err, WallpaperError::GoalOrder { .. }));
    }

    #[test]
    fn clip_drops_ranges_outside_bounds() {
        let range = DayRange::new(d(2024, 1, 1), d(2024, 1, 10));
        assert_eq!(range.clip(d(2023, 12, 25), d(2024, 1, 3)), Some(0..=2));
        assert_eq!(range.clip(d(2024, 1, 9), d(2024, 2, 3)), Some(8..=9));
        assert_eq!(range.clip(d(2024, 2, 1), d(2024, 2, 3)), None);
        assert_eq!(range.clip(d(2024, 1, 5), d(2024, 1, 4)), None);
    }
}
