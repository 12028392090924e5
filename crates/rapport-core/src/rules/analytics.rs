use crate::domain::{Contact, Interaction};
use crate::dto::{
    AnalyticsDto, DailyCount, InsightsDto, KindCounts, PriorityCounts, TotalsDto,
};
use crate::error::CoreError;
use crate::time::{local_date, same_calendar_month};
use chrono::{Duration, TimeZone};

pub const DEFAULT_WINDOW_DAYS: u32 = 30;
pub const MAX_WINDOW_DAYS: u32 = 365;

pub fn validate_window_days(days: i64) -> Result<u32, CoreError> {
    if days <= 0 || days > i64::from(MAX_WINDOW_DAYS) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    u32::try_from(days).map_err(|_| CoreError::InvalidWindowDays(days))
}

pub fn count_active(contacts: &[Contact]) -> usize {
    contacts.iter().filter(|contact| contact.is_active()).count()
}

/// Interactions dated in the same calendar month and year as `now_utc`,
/// both read in `tz`. Not a rolling 30-day window.
pub fn count_in_current_month<Tz: TimeZone>(
    interactions: &[Interaction],
    now_utc: i64,
    tz: &Tz,
) -> usize {
    let today = local_date(now_utc, tz);
    interactions
        .iter()
        .filter(|interaction| same_calendar_month(local_date(interaction.date, tz), today))
        .count()
}

pub fn group_by_priority(contacts: &[Contact]) -> PriorityCounts {
    let mut counts = PriorityCounts::default();
    for contact in contacts {
        counts.bump(contact.priority);
    }
    counts
}

pub fn group_by_kind(interactions: &[Interaction]) -> KindCounts {
    let mut counts = KindCounts::default();
    for interaction in interactions {
        counts.bump(interaction.kind);
    }
    counts
}

/// One bucket per calendar day for the `window_days` days ending today,
/// oldest first. Today is the last bucket.
pub fn daily_timeline<Tz: TimeZone>(
    interactions: &[Interaction],
    now_utc: i64,
    tz: &Tz,
    window_days: u32,
) -> Vec<DailyCount> {
    if window_days == 0 {
        return Vec::new();
    }

    let today = local_date(now_utc, tz);
    let start = today - Duration::days(i64::from(window_days) - 1);
    let mut buckets: Vec<DailyCount> = (0..i64::from(window_days))
        .map(|day| DailyCount {
            date: start + Duration::days(day),
            count: 0,
        })
        .collect();

    for interaction in interactions {
        let date = local_date(interaction.date, tz);
        if date < start || date > today {
            continue;
        }
        let index = (date - start).num_days() as usize;
        buckets[index].count += 1;
    }

    buckets
}

/// The most frequent value; ties go to the value seen first.
pub fn most_common<T, I>(values: I) -> Option<T>
where
    T: Copy + PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut seen: Vec<(T, usize)> = Vec::new();
    for value in values {
        match seen.iter_mut().find(|(existing, _)| *existing == value) {
            Some((_, count)) => *count += 1,
            None => seen.push((value, 1)),
        }
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in seen {
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

pub fn insights(contacts: &[Contact], interactions: &[Interaction]) -> InsightsDto {
    let total = contacts.len();
    let active = count_active(contacts);
    let (average, engagement) = if total == 0 {
        (0.0, 0)
    } else {
        (
            interactions.len() as f64 / total as f64,
            ((active as f64 / total as f64) * 100.0).round() as u32,
        )
    };

    InsightsDto {
        average_interactions_per_contact: average,
        most_common_priority: most_common(contacts.iter().map(|contact| contact.priority)),
        most_common_type: most_common(interactions.iter().map(|interaction| interaction.kind)),
        engagement_rate_percent: engagement,
    }
}

pub fn summarize<Tz: TimeZone>(
    contacts: &[Contact],
    interactions: &[Interaction],
    now_utc: i64,
    tz: &Tz,
    window_days: u32,
) -> AnalyticsDto {
    AnalyticsDto {
        totals: TotalsDto {
            contacts: contacts.len(),
            active_contacts: count_active(contacts),
            interactions: interactions.len(),
            interactions_this_month: count_in_current_month(interactions, now_utc, tz),
        },
        contacts_by_priority: group_by_priority(contacts),
        interactions_by_type: group_by_kind(interactions),
        timeline: daily_timeline(interactions, now_utc, tz, window_days),
        insights: insights(contacts, interactions),
    }
}
