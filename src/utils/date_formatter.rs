use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// 03-14
    MonthDay,
    /// 2024-03-14
    FullDate,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            Self::MonthDay => "%m-%d",
            Self::FullDate => "%Y-%m-%d",
        }
    }
}

pub fn format_date(t: &DateTime<Utc>, format: DateFormat) -> String {
    t.format(format.pattern()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_month_day_and_full_date() {
        let t = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();
        assert_eq!(format_date(&t, DateFormat::MonthDay), "03-04");
        assert_eq!(format_date(&t, DateFormat::FullDate), "2024-03-04");
    }
}
