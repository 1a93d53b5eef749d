//! MonthBuilder (§4.2): the empty week-row × 7-day grid for a month.

use chrono::{Datelike, Days, NaiveDate};

use taskcal_core::{Config, DayCell, Month, WeekRow};

/// Build the grid for `year`/`month`, anchored on `config.first_weekday`.
/// Cells outside the month are placeholders but still occupy a column.
pub fn build_month(year: i32, month: u32, config: &Config) -> Month {
    let first_of_month =
        NaiveDate::from_ymd_opt(year, month, 1).expect("caller supplies a valid year/month");
    let last_of_month = last_day_of(year, month);

    let leading_offset = config.first_weekday.column_of(first_of_month.weekday());
    let grid_start = first_of_month - Days::new(leading_offset as u64);

    let mut weeks = Vec::new();
    let mut cursor = grid_start;
    loop {
        let days: [DayCell; 7] = std::array::from_fn(|i| {
            let date = cursor + Days::new(i as u64);
            if date >= first_of_month && date <= last_of_month {
                DayCell::in_month(date)
            } else {
                DayCell::placeholder()
            }
        });
        weeks.push(WeekRow { days });
        cursor += Days::new(7);
        if cursor > last_of_month {
            break;
        }
    }

    Month {
        year,
        month,
        first_weekday: config.first_weekday,
        weeks,
    }
}

fn last_day_of(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("valid next month")
        .pred_opt()
        .expect("first of a month always has a predecessor")
}
