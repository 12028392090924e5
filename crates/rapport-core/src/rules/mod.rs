pub mod analytics;

pub use analytics::{
    count_active, count_in_current_month, daily_timeline, group_by_kind, group_by_priority,
    insights, most_common, summarize, validate_window_days, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
