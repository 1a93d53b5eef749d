//! The week-grid calendar structure (§3, §4.2).

use std::rc::Rc;

use chrono::{Datelike, NaiveDate};

use crate::config::Weekday;
use crate::task::Task;

/// Sentinel date used by placeholder cells that fall outside the rendered
/// month (§4.2 "its date is the zero date").
pub fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).expect("year 1 day 1 is always a valid date")
}

/// One day of one month. Immutable once `DayIndexer` has populated its
/// `tasks`; readers never mutate it (§9 "Method-on-value receivers for Day
/// cells").
#[derive(Clone, Debug)]
pub struct DayCell {
    /// `zero_date()` for a placeholder cell outside the month.
    pub date: NaiveDate,
    pub in_month: bool,
    /// Ascending `start_date` order (§3 invariant, enforced by DayIndexer).
    pub tasks: Vec<Rc<Task>>,
}

impl DayCell {
    pub fn placeholder() -> Self {
        Self {
            date: zero_date(),
            in_month: false,
            tasks: Vec::new(),
        }
    }

    pub fn in_month(date: NaiveDate) -> Self {
        Self {
            date,
            in_month: true,
            tasks: Vec::new(),
        }
    }
}

/// A row of exactly 7 day cells bounded by the configured first weekday.
#[derive(Clone, Debug)]
pub struct WeekRow {
    pub days: [DayCell; 7],
}

/// A calendar month: an ordered sequence of week rows covering it, plus the
/// grid metadata needed to interpret column positions.
#[derive(Clone, Debug)]
pub struct Month {
    pub year: i32,
    pub month: u32,
    pub first_weekday: Weekday,
    pub weeks: Vec<WeekRow>,
}

impl Month {
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month builder validated year/month")
    }

    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("month builder validated year/month")
            .pred_opt()
            .expect("first of next month always has a predecessor")
    }

    /// Iterate over in-month cells in row-major order (week by week, left
    /// to right), skipping placeholders.
    pub fn iter_in_month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks
            .iter()
            .flat_map(|week| week.days.iter())
            .filter(|cell| cell.in_month)
    }

    pub fn iter_in_month_cells_mut(&mut self) -> impl Iterator<Item = &mut DayCell> {
        self.weeks
            .iter_mut()
            .flat_map(|week| week.days.iter_mut())
            .filter(|cell| cell.in_month)
    }

    /// Column index (0..7) of `date` within its week row.
    pub fn week_column(&self, date: NaiveDate) -> u32 {
        self.first_weekday.column_of(date.weekday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_day_of_february_non_leap_year() {
        let month = Month {
            year: 2025,
            month: 2,
            first_weekday: Weekday::Monday,
            weeks: Vec::new(),
        };
        assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn last_day_of_december_rolls_into_next_year() {
        let month = Month {
            year: 2025,
            month: 12,
            first_weekday: Weekday::Monday,
            weeks: Vec::new(),
        };
        assert_eq!(month.last_day(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn placeholder_cell_is_not_in_month() {
        let cell = DayCell::placeholder();
        assert!(!cell.in_month);
        assert_eq!(cell.date, zero_date());
    }
}
