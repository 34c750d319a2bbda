use chrono::NaiveDate;

pub const STREAK_ACHIEVEMENT_DAYS: u32 = 7;

/// Streak after completing an action on `today`. Continues only when the last
/// completion was on the previous calendar day.
pub fn next_streak(streak: u32, last_completed: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match last_completed {
        Some(last) if days_between(&last, &today) == 1 => streak.saturating_add(1),
        _ => 1,
    }
}

fn days_between(start_date: &NaiveDate, end_date: &NaiveDate) -> i64 {
    (*end_date - *start_date).num_days()
}

pub fn is_new_day(last_reset: Option<NaiveDate>, today: NaiveDate) -> bool {
    last_reset.map_or(true, |last| last != today)
}
