//! Menu-bar clock formatting

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Text shown at the right end of the menu bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockFace {
    /// `HH:MM`, 24-hour
    pub time: String,
    /// e.g. `2026年10月16日星期五`
    pub date: String,
}

impl ClockFace {
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            time: format_time(now),
            date: format_long_date(now),
        }
    }
}

pub fn format_time(now: NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

pub fn format_long_date(now: NaiveDateTime) -> String {
    format!(
        "{}年{}月{}日{}",
        now.year(),
        now.month(),
        now.day(),
        weekday_name(now.weekday())
    )
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, 0)
            .unwrap()
    }

    #[test]
    fn time_is_zero_padded() {
        assert_eq!(format_time(at(2026, 1, 2, 9, 5)), "09:05");
        assert_eq!(format_time(at(2026, 1, 2, 23, 59)), "23:59");
    }

    #[test]
    fn long_date_uses_chinese_weekday() {
        let face = ClockFace::at(at(2026, 10, 16, 14, 30));
        assert_eq!(face.date, "2026年10月16日星期五");
        assert_eq!(face.time, "14:30");

        assert_eq!(format_long_date(at(2026, 10, 18, 0, 0)), "2026年10月18日星期日");
    }
}
