//! Date filter
//!
//! Turns a [`DateRange`] selector into a concrete cutoff instant and applies
//! it to call records. Cutoffs are local midnights in the timezone carried by
//! the `now` argument.

use callmeter_core::models::{CallRecord, DateRange};
use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use std::borrow::Cow;
use tracing::debug;

/// Earliest instant included by `range`, or `None` when unbounded
///
/// `Today` is local midnight of the current day and `LastDays(n)` is local
/// midnight `n` days before `now`.
pub fn cutoff<Tz: TimeZone>(range: DateRange, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let days_back = match range {
        DateRange::All => return None,
        DateRange::Today => 0,
        DateRange::LastDays(days) => days,
    };

    let date = now
        .date_naive()
        .checked_sub_days(Days::new(u64::from(days_back)))
        .unwrap_or(NaiveDate::MIN);

    Some(local_midnight(&now.timezone(), date))
}

fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::default());

    tz.from_local_datetime(&midnight)
        .earliest()
        // midnight skipped by a DST jump: the day starts an hour later
        .or_else(|| tz.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

/// Keep the calls that started at or after the range cutoff
///
/// `All` hands back the input slice untouched; bounded ranges return the
/// matching calls in their original order.
pub fn filter_calls_by_date<'a, Tz: TimeZone>(
    calls: &'a [CallRecord],
    range: DateRange,
    now: &DateTime<Tz>,
) -> Cow<'a, [CallRecord]> {
    let Some(cutoff) = cutoff(range, now) else {
        return Cow::Borrowed(calls);
    };
    let cutoff = cutoff.with_timezone(&Utc);

    let kept: Vec<CallRecord> = calls
        .iter()
        .filter(|call| call.start_time >= cutoff)
        .cloned()
        .collect();

    debug!(
        "Date filter '{}' kept {} of {} calls (cutoff {})",
        range,
        kept.len(),
        calls.len(),
        cutoff
    );

    Cow::Owned(kept)
}

/// Day count sent to the backend as a query parameter
///
/// `0` means "no limit" there; it is not a local filter value.
pub fn range_to_day_count(range: DateRange) -> u32 {
    match range {
        DateRange::All => 0,
        DateRange::Today => 1,
        DateRange::LastDays(days) => days,
    }
}

/// Human-readable label for a range
pub fn range_label(range: DateRange) -> String {
    match range {
        DateRange::All => "All Time".to_string(),
        DateRange::Today => "Today".to_string(),
        DateRange::LastDays(days) => format!("Last {} Days", days),
    }
}
