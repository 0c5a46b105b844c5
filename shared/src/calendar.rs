//! Month grid behind the date picker popover.

use chrono::{Datelike, Duration, NaiveDate};

/// Six weeks, so every month fits regardless of its first weekday.
pub const GRID_DAYS: usize = 42;

/// Month currently shown by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// e.g. "March 2024"
    pub fn title(&self) -> String {
        self.first_day()
            .map(|day| day.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_month: bool,
}

/// Cells for `cursor`'s month, Sunday first, padded with the neighbouring months.
pub fn month_grid(cursor: MonthCursor) -> Vec<CalendarCell> {
    let Some(first) = cursor.first_day() else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(leading);

    (0..GRID_DAYS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            CalendarCell {
                date,
                in_month: date.month() == cursor.month && date.year() == cursor.year,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps_years() {
        let january = MonthCursor { year: 2024, month: 1 };
        assert_eq!(january.previous(), MonthCursor { year: 2023, month: 12 });
        let december = MonthCursor { year: 2024, month: 12 };
        assert_eq!(december.next(), MonthCursor { year: 2025, month: 1 });
    }

    #[test]
    fn test_grid_for_march_2024() {
        // March 1st 2024 is a Friday
        let grid = month_grid(MonthCursor { year: 2024, month: 3 });
        assert_eq!(grid.len(), GRID_DAYS);
        assert_eq!(grid[0].date, NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
        assert!(!grid[0].in_month);
        assert_eq!(grid[5].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(grid[5].in_month);
        assert_eq!(grid.iter().filter(|cell| cell.in_month).count(), 31);
    }

    #[test]
    fn test_grid_month_starting_on_sunday() {
        // September 1st 2024 is a Sunday
        let grid = month_grid(MonthCursor { year: 2024, month: 9 });
        assert_eq!(grid[0].date, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        assert!(grid[0].in_month);
    }

    #[test]
    fn test_leap_february() {
        let grid = month_grid(MonthCursor { year: 2024, month: 2 });
        assert_eq!(grid.iter().filter(|cell| cell.in_month).count(), 29);
    }

    #[test]
    fn test_title_and_invalid_month() {
        assert_eq!(MonthCursor { year: 2024, month: 3 }.title(), "March 2024");
        assert!(month_grid(MonthCursor { year: 2024, month: 13 }).is_empty());
    }
}
