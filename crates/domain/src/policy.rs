//! Decides whether a reminder is due.
//!
//! `evaluate` is a pure function of the reminder snapshot, the number of
//! calendar days left until the event and the current instant. It never
//! reads the clock and never mutates the reminder: persisting `last_sent_at`
//! after a successful send is the caller's job.
//!
//! Two notions of "since the last send" coexist:
//! `Daily` compares calendar dates in the timezone of `now`, while
//! `Weekly` and `Custom` count elapsed whole days (floored).
//! A daily reminder sent at 23:59 is due again at 00:01, a weekly one
//! sent at 23:59 on a Monday is not due at 00:01 the following Monday.

use crate::reminder::ReminderFrequency;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;
const DAYS_PER_WEEK: i64 = 7;

/// The part of a `Reminder` the due date decision depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReminderSnapshot {
    pub days_before: u32,
    pub frequency: ReminderFrequency,
    pub last_sent_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    OutsideWindow { days_until: i64, days_before: u32 },
    OnceDue { days_before: u32 },
    OnceAlreadySent,
    OnceMissed { days_until: i64, days_before: u32 },
    DailyDue { days_until: i64 },
    DailyAlreadySentToday,
    WeeklyFirst,
    WeeklyDue { days_since: i64 },
    WeeklyAlreadySent { days_since: i64 },
    CustomFirst { every_days: u32 },
    CustomDue { days_since: i64 },
    CustomNotYet { days_left: i64 },
}

impl Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutsideWindow {
                days_until,
                days_before,
            } => write!(
                f,
                "Outside reminder window ({} days remaining, opens at {} days before)",
                days_until, days_before
            ),
            Self::OnceDue { days_before } => {
                write!(f, "One-time reminder {} days before", days_before)
            }
            Self::OnceAlreadySent => write!(f, "One-time reminder already sent"),
            Self::OnceMissed {
                days_until,
                days_before,
            } => write!(
                f,
                "One-time reminder was due at {} days before ({} days remaining)",
                days_before, days_until
            ),
            Self::DailyDue { days_until } => {
                write!(f, "Daily reminder ({} days remaining)", days_until)
            }
            Self::DailyAlreadySentToday => write!(f, "Already sent today"),
            Self::WeeklyFirst => write!(f, "First weekly reminder"),
            Self::WeeklyDue { days_since } => {
                write!(f, "Weekly reminder (last sent {} days ago)", days_since)
            }
            Self::WeeklyAlreadySent { days_since } => {
                write!(f, "Already sent this week ({} days ago)", days_since)
            }
            Self::CustomFirst { every_days } => {
                write!(f, "First custom reminder (every {} days)", every_days)
            }
            Self::CustomDue { days_since } => {
                write!(f, "Custom reminder (last sent {} days ago)", days_since)
            }
            Self::CustomNotYet { days_left } => write!(f, "Next send in {} day(s)", days_left),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub should_send: bool,
    pub reason: Reason,
}

impl Decision {
    fn send(reason: Reason) -> Self {
        Self {
            should_send: true,
            reason,
        }
    }

    fn skip(reason: Reason) -> Self {
        Self {
            should_send: false,
            reason,
        }
    }
}

/// Whole days elapsed between `last_sent_at` and `now`, rounded down
fn whole_days_since<Tz: TimeZone>(last_sent_at: DateTime<Utc>, now: &DateTime<Tz>) -> i64 {
    now.clone()
        .signed_duration_since(last_sent_at)
        .num_milliseconds()
        .div_euclid(MILLIS_PER_DAY)
}

fn sent_on_same_day<Tz: TimeZone>(last_sent_at: DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    last_sent_at.with_timezone(&now.timezone()).date_naive() == now.date_naive()
}

/// Decides if the reminder should be sent at `now` given that the event
/// is `days_until_event` calendar days away.
pub fn evaluate<Tz: TimeZone>(
    reminder: &ReminderSnapshot,
    days_until_event: i64,
    now: &DateTime<Tz>,
) -> Decision {
    let days_before = reminder.days_before;
    if days_until_event > days_before as i64 {
        return Decision::skip(Reason::OutsideWindow {
            days_until: days_until_event,
            days_before,
        });
    }

    match reminder.frequency {
        ReminderFrequency::Once => match reminder.last_sent_at {
            Some(_) => Decision::skip(Reason::OnceAlreadySent),
            None if days_until_event == days_before as i64 => {
                Decision::send(Reason::OnceDue { days_before })
            }
            None => Decision::skip(Reason::OnceMissed {
                days_until: days_until_event,
                days_before,
            }),
        },
        ReminderFrequency::Daily => match reminder.last_sent_at {
            Some(last) if sent_on_same_day(last, now) => {
                Decision::skip(Reason::DailyAlreadySentToday)
            }
            _ => Decision::send(Reason::DailyDue {
                days_until: days_until_event,
            }),
        },
        ReminderFrequency::Weekly => match reminder.last_sent_at {
            None => Decision::send(Reason::WeeklyFirst),
            Some(last) => {
                let days_since = whole_days_since(last, now);
                if days_since >= DAYS_PER_WEEK {
                    Decision::send(Reason::WeeklyDue { days_since })
                } else {
                    Decision::skip(Reason::WeeklyAlreadySent { days_since })
                }
            }
        },
        ReminderFrequency::Custom { every_days } => match reminder.last_sent_at {
            None => Decision::send(Reason::CustomFirst { every_days }),
            Some(last) => {
                let days_since = whole_days_since(last, now);
                if days_since >= every_days as i64 {
                    Decision::send(Reason::CustomDue { days_since })
                } else {
                    Decision::skip(Reason::CustomNotYet {
                        days_left: every_days as i64 - days_since,
                    })
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn snapshot(
        days_before: u32,
        frequency: ReminderFrequency,
        last_sent_at: Option<DateTime<Utc>>,
    ) -> ReminderSnapshot {
        ReminderSnapshot {
            days_before,
            frequency,
            last_sent_at,
        }
    }

    fn all_frequencies() -> Vec<ReminderFrequency> {
        vec![
            ReminderFrequency::Once,
            ReminderFrequency::Daily,
            ReminderFrequency::Weekly,
            ReminderFrequency::Custom { every_days: 3 },
        ]
    }

    #[test]
    fn is_deterministic() {
        let last_sent = Some(now() - Duration::hours(30));
        for frequency in all_frequencies() {
            let reminder = snapshot(10, frequency, last_sent);
            let first = evaluate(&reminder, 4, &now());
            let second = evaluate(&reminder, 4, &now());
            assert_eq!(first, second);
            assert_eq!(first.reason.to_string(), second.reason.to_string());
        }
    }

    #[test]
    fn once_fires_on_exact_day_when_never_sent() {
        let reminder = snapshot(5, ReminderFrequency::Once, None);
        let decision = evaluate(&reminder, 5, &now());
        assert!(decision.should_send);
        assert_eq!(decision.reason, Reason::OnceDue { days_before: 5 });
        assert!(decision.reason.to_string().contains('5'));
    }

    #[test]
    fn once_never_fires_after_being_sent() {
        let reminder = snapshot(5, ReminderFrequency::Once, Some(now() - Duration::days(30)));
        for days_until in 0..=10 {
            assert!(!evaluate(&reminder, days_until, &now()).should_send);
        }
    }

    #[test]
    fn once_only_fires_on_the_exact_day() {
        let reminder = snapshot(5, ReminderFrequency::Once, None);
        let early = evaluate(&reminder, 6, &now());
        assert!(!early.should_send);
        let late = evaluate(&reminder, 4, &now());
        assert!(!late.should_send);
        assert_eq!(
            late.reason,
            Reason::OnceMissed {
                days_until: 4,
                days_before: 5
            }
        );
    }

    #[test]
    fn daily_skips_when_already_sent_today() {
        let earlier_today = Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap();
        let reminder = snapshot(10, ReminderFrequency::Daily, Some(earlier_today));
        let decision = evaluate(&reminder, 3, &now());
        assert!(!decision.should_send);
        assert_eq!(decision.reason, Reason::DailyAlreadySentToday);
    }

    #[test]
    fn daily_fires_when_sent_yesterday_or_never() {
        let yesterday = now() - Duration::days(1);
        let reminder = snapshot(10, ReminderFrequency::Daily, Some(yesterday));
        let decision = evaluate(&reminder, 3, &now());
        assert!(decision.should_send);
        assert_eq!(decision.reason.to_string(), "Daily reminder (3 days remaining)");

        let reminder = snapshot(10, ReminderFrequency::Daily, None);
        assert!(evaluate(&reminder, 3, &now()).should_send);
    }

    #[test]
    fn daily_compares_calendar_dates_not_elapsed_time() {
        let sent = Utc.with_ymd_and_hms(2026, 10, 15, 23, 59, 0).unwrap();
        let check = Utc.with_ymd_and_hms(2026, 10, 16, 0, 1, 0).unwrap();
        let reminder = snapshot(10, ReminderFrequency::Daily, Some(sent));
        assert!(evaluate(&reminder, 3, &check).should_send);
    }

    #[test]
    fn daily_uses_the_timezone_of_now() {
        // 22:30 UTC on the 15th is already the 16th in Oslo
        let sent = Utc.with_ymd_and_hms(2026, 10, 15, 22, 30, 0).unwrap();
        let check = Utc
            .with_ymd_and_hms(2026, 10, 16, 10, 0, 0)
            .unwrap()
            .with_timezone(&chrono_tz::Europe::Oslo);
        let reminder = snapshot(10, ReminderFrequency::Daily, Some(sent));
        assert!(!evaluate(&reminder, 3, &check).should_send);
        assert!(evaluate(&reminder, 3, &check.with_timezone(&Utc)).should_send);
    }

    #[test]
    fn weekly_fires_after_seven_whole_days() {
        let reminder = snapshot(30, ReminderFrequency::Weekly, Some(now() - Duration::days(7)));
        let decision = evaluate(&reminder, 10, &now());
        assert!(decision.should_send);
        assert_eq!(decision.reason, Reason::WeeklyDue { days_since: 7 });

        let almost_week = now() - (Duration::days(7) - Duration::hours(3));
        let reminder = snapshot(30, ReminderFrequency::Weekly, Some(almost_week));
        let decision = evaluate(&reminder, 10, &now());
        assert!(!decision.should_send);
        assert_eq!(decision.reason, Reason::WeeklyAlreadySent { days_since: 6 });
    }

    #[test]
    fn weekly_counts_elapsed_days_not_calendar_dates() {
        let sent = Utc.with_ymd_and_hms(2026, 10, 12, 23, 59, 0).unwrap();
        let check = Utc.with_ymd_and_hms(2026, 10, 19, 0, 1, 0).unwrap();
        let reminder = snapshot(30, ReminderFrequency::Weekly, Some(sent));
        assert!(!evaluate(&reminder, 10, &check).should_send);
    }

    #[test]
    fn weekly_fires_first_time() {
        let reminder = snapshot(30, ReminderFrequency::Weekly, None);
        let decision = evaluate(&reminder, 10, &now());
        assert!(decision.should_send);
        assert_eq!(decision.reason, Reason::WeeklyFirst);
    }

    #[test]
    fn custom_respects_its_interval() {
        let freq = ReminderFrequency::Custom { every_days: 3 };

        let reminder = snapshot(10, freq, Some(now() - Duration::days(2)));
        let decision = evaluate(&reminder, 5, &now());
        assert!(!decision.should_send);
        assert_eq!(decision.reason, Reason::CustomNotYet { days_left: 1 });
        assert_eq!(decision.reason.to_string(), "Next send in 1 day(s)");

        let reminder = snapshot(10, freq, Some(now() - Duration::days(3)));
        let decision = evaluate(&reminder, 5, &now());
        assert!(decision.should_send);
        assert_eq!(decision.reason, Reason::CustomDue { days_since: 3 });

        let reminder = snapshot(10, freq, None);
        let decision = evaluate(&reminder, 5, &now());
        assert!(decision.should_send);
        assert_eq!(decision.reason, Reason::CustomFirst { every_days: 3 });
    }

    #[test]
    fn custom_without_day_count_behaves_as_every_day() {
        let freq = ReminderFrequency::parse_lenient("custom", None).unwrap();

        let reminder = snapshot(10, freq, Some(now() - Duration::hours(23)));
        assert!(!evaluate(&reminder, 5, &now()).should_send);

        let reminder = snapshot(10, freq, Some(now() - Duration::hours(24)));
        assert!(evaluate(&reminder, 5, &now()).should_send);
    }

    #[test]
    fn never_fires_outside_the_window() {
        let histories = vec![None, Some(now() - Duration::days(100))];
        for frequency in all_frequencies() {
            for last_sent in &histories {
                let reminder = snapshot(5, frequency, *last_sent);
                let decision = evaluate(&reminder, 6, &now());
                assert!(!decision.should_send, "{:?} {:?}", frequency, last_sent);
                assert_eq!(
                    decision.reason,
                    Reason::OutsideWindow {
                        days_until: 6,
                        days_before: 5
                    }
                );
            }
        }
    }

    #[test]
    fn window_includes_the_event_day() {
        let reminder = snapshot(0, ReminderFrequency::Daily, None);
        assert!(evaluate(&reminder, 0, &now()).should_send);
        let reminder = snapshot(0, ReminderFrequency::Once, None);
        assert!(evaluate(&reminder, 0, &now()).should_send);
    }

    #[test]
    fn last_sent_in_the_future_is_not_yet_elapsed() {
        let reminder = snapshot(10, ReminderFrequency::Weekly, Some(now() + Duration::hours(1)));
        let decision = evaluate(&reminder, 5, &now());
        assert!(!decision.should_send);
        assert_eq!(decision.reason, Reason::WeeklyAlreadySent { days_since: -1 });
    }
}
