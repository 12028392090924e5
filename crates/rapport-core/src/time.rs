use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

/// Calendar day of `ts` in `tz`. The offset is resolved per timestamp, so
/// dates on either side of a DST change land on their own local day.
pub fn local_date<Tz: TimeZone>(ts: i64, tz: &Tz) -> NaiveDate {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or_default()
        .with_timezone(tz)
        .date_naive()
}

pub fn same_calendar_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn format_timestamp_date(ts: i64) -> String {
    local_date(ts, &Local).format("%Y-%m-%d").to_string()
}

pub fn format_timestamp_datetime(ts: i64) -> String {
    let dt = DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or_default()
        .with_timezone(&Local);
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::test_zone::SpringForward;
    use super::{format_timestamp_date, format_timestamp_datetime, local_date, same_calendar_month};
    use chrono::{FixedOffset, Local, NaiveDate, TimeZone, Utc};

    #[test]
    fn local_date_follows_offset() {
        let ts = Utc
            .with_ymd_and_hms(2024, 3, 1, 23, 30, 0)
            .unwrap()
            .timestamp();
        let utc = FixedOffset::east_opt(0).unwrap();
        let ahead = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(local_date(ts, &utc), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(local_date(ts, &ahead), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn same_month_needs_same_year() {
        let jan_2024 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let jan_2025 = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let jan_first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(same_calendar_month(jan_2024, jan_first));
        assert!(!same_calendar_month(jan_2024, jan_2025));
    }

    #[test]
    fn format_helpers_match_local_time() {
        let local = Local.with_ymd_and_hms(2030, 1, 15, 13, 45, 0).unwrap();
        let ts = local.with_timezone(&Utc).timestamp();
        assert_eq!(
            format_timestamp_date(ts),
            local.format("%Y-%m-%d").to_string()
        );
        assert_eq!(
            format_timestamp_datetime(ts),
            local.format("%Y-%m-%d %H:%M").to_string()
        );
    }

    #[test]
    fn local_date_uses_offset_in_force_at_the_timestamp() {
        // 23:30 winter time, the evening before the clocks go forward.
        let before = Utc
            .with_ymd_and_hms(2026, 3, 28, 22, 30, 0)
            .unwrap()
            .timestamp();
        // 00:30 summer time, two days after.
        let after = Utc
            .with_ymd_and_hms(2026, 3, 30, 22, 30, 0)
            .unwrap()
            .timestamp();
        assert_eq!(
            local_date(before, &SpringForward),
            NaiveDate::from_ymd_opt(2026, 3, 28).unwrap()
        );
        assert_eq!(
            local_date(after, &SpringForward),
            NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()
        );
    }
}

/// A zone at +01:00 that moves to +02:00 at 2026-03-29 01:00 UTC.
#[cfg(test)]
pub(crate) mod test_zone {
    use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

    const SWITCH_UTC: i64 = 1_774_746_000;

    #[derive(Debug, Clone, Copy)]
    pub(crate) struct SpringForward;

    impl SpringForward {
        fn offset_at(utc_ts: i64) -> FixedOffset {
            let hours = if utc_ts < SWITCH_UTC { 1 } else { 2 };
            FixedOffset::east_opt(hours * 3600).unwrap()
        }
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            SpringForward
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            LocalResult::Single(Self::offset_at(local.and_utc().timestamp() - 3600))
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            Self::offset_at(utc.and_utc().timestamp())
        }
    }
}
