//! Open-now evaluation for `dayshours` schedule strings
//!
//! A schedule is a `;`-separated list of `<days>/<hours>` entries, e.g.
//! `Mo-Fr/11AM-2PM;Sa/10AM-4PM`. Days are two-letter codes, either
//! concatenated (`MoWeFr`) or joined into ranges (`Mo-Fr`). Hours are a pair of
//! whole 12-hour clock times. Entries that do not fit this shape are skipped,
//! never reported as errors.

use chrono::{Datelike, Local, NaiveDateTime, NaiveTime, Weekday};
use tracing::trace;

/// Set of weekdays an entry applies to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaySet(u8);

impl DaySet {
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & day_bit(day) != 0
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= day_bit(day);
    }

    /// Insert `start..=end`, wrapping past Sunday
    pub fn insert_range(&mut self, start: Weekday, end: Weekday) {
        let mut day = start;
        loop {
            self.insert(day);
            if day == end {
                break;
            }
            day = day.succ();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Scan two-letter day codes left to right.
    ///
    /// A `-` between two codes makes an inclusive range. Returns `None` on any
    /// unrecognised code, a dangling `-`, or an empty field.
    pub fn parse(days: &str) -> Option<Self> {
        let chars: Vec<char> = days.trim().chars().collect();
        let mut set = DaySet::default();
        let mut pos = 0;
        let mut prev: Option<Weekday> = None;
        let mut range_start: Option<Weekday> = None;

        while pos < chars.len() {
            if chars[pos] == '-' {
                if range_start.is_some() {
                    return None;
                }
                range_start = Some(prev?);
                pos += 1;
                continue;
            }

            let token: String = chars.get(pos..pos + 2)?.iter().collect();
            let day = parse_day_code(&token)?;
            match range_start.take() {
                Some(start) => set.insert_range(start, day),
                None => set.insert(day),
            }
            prev = Some(day);
            pos += 2;
        }

        if range_start.is_some() || set.is_empty() {
            return None;
        }
        Some(set)
    }
}

fn day_bit(day: Weekday) -> u8 {
    1 << day.num_days_from_monday()
}

fn parse_day_code(token: &str) -> Option<Weekday> {
    match token.to_ascii_lowercase().as_str() {
        "mo" => Some(Weekday::Mon),
        "tu" => Some(Weekday::Tue),
        "we" => Some(Weekday::Wed),
        "th" => Some(Weekday::Thu),
        "fr" => Some(Weekday::Fri),
        "sa" => Some(Weekday::Sat),
        "su" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parse "9AM", "11PM", "12AM" (midnight). No minutes, no colon.
pub fn parse_meridiem_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    if !s.is_ascii() || s.len() < 3 {
        return None;
    }

    let (digits, meridiem) = s.split_at(s.len() - 2);
    if digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour: u32 = digits.parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }

    let hour = match meridiem.to_ascii_uppercase().as_str() {
        "AM" => hour % 12,
        "PM" => hour % 12 + 12,
        _ => return None,
    };
    NaiveTime::from_hms_opt(hour, 0, 0)
}

/// One `days/hours` unit of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub days: DaySet,
    pub opens: NaiveTime,
    pub closes: NaiveTime,
}

impl ScheduleEntry {
    pub fn parse(entry: &str) -> Option<Self> {
        let (days, hours) = split_exactly_once(entry, '/')?;
        let days = DaySet::parse(days)?;
        let (opens, closes) = split_exactly_once(hours, '-')?;

        Some(Self {
            days,
            opens: parse_meridiem_time(opens)?,
            closes: parse_meridiem_time(closes)?,
        })
    }

    /// Same-day inclusive window; an entry with `opens > closes` never matches
    pub fn is_open_at(&self, now: NaiveDateTime) -> bool {
        let time = now.time();
        self.days.contains(now.weekday()) && self.opens <= time && time <= self.closes
    }
}

fn split_exactly_once(s: &str, sep: char) -> Option<(&str, &str)> {
    let mut parts = s.split(sep);
    let first = parts.next()?;
    let second = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second))
}

fn entries(schedule: &str) -> impl Iterator<Item = ScheduleEntry> + '_ {
    schedule
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let parsed = ScheduleEntry::parse(entry);
            if parsed.is_none() {
                trace!(entry, "skipping malformed schedule entry");
            }
            parsed
        })
}

/// Whether any entry of `schedule` covers `now`. Absent or empty means closed.
pub fn is_open_at(schedule: Option<&str>, now: NaiveDateTime) -> bool {
    match schedule {
        Some(s) => entries(s).any(|entry| entry.is_open_at(now)),
        None => false,
    }
}

/// [`is_open_at`] against the local wall clock
pub fn is_open_now(schedule: Option<&str>) -> bool {
    is_open_at(schedule, Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // 2024-01-15 is a Monday, so day 15..=21 covers Mon..=Sun
    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    const MONDAY: u32 = 15;
    const TUESDAY: u32 = 16;
    const WEDNESDAY: u32 = 17;
    const THURSDAY: u32 = 18;
    const FRIDAY: u32 = 19;

    #[test]
    fn test_absent_or_empty_is_closed() {
        assert!(!is_open_at(None, at(FRIDAY, 12, 0)));
        assert!(!is_open_at(Some(""), at(FRIDAY, 12, 0)));
        assert!(!is_open_at(Some(" ; ;"), at(FRIDAY, 12, 0)));
        assert!(!is_open_now(None));
        assert!(!is_open_now(Some("")));
    }

    #[test]
    fn test_full_week_range_matches_every_day() {
        for day in 15..=21 {
            assert!(
                is_open_at(Some("Mo-Su/9AM-5PM"), at(day, 10, 0)),
                "expected open on 2024-01-{}",
                day
            );
        }
    }

    #[test]
    fn test_hours_without_meridiem_are_skipped() {
        assert!(!is_open_at(Some("Mo/14-17"), at(MONDAY, 15, 0)));
    }

    #[test]
    fn test_second_entry_matches() {
        let schedule = Some("We/9AM-5PM;Fr/11AM-2PM");
        assert!(is_open_at(schedule, at(FRIDAY, 12, 30)));
        assert!(is_open_at(schedule, at(WEDNESDAY, 12, 30)));
        assert!(!is_open_at(schedule, at(THURSDAY, 12, 30)));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let schedule = Some("Fr/11AM-2PM");
        assert!(is_open_at(schedule, at(FRIDAY, 11, 0)));
        assert!(is_open_at(schedule, at(FRIDAY, 14, 0)));
        assert!(!is_open_at(schedule, at(FRIDAY, 10, 59)));
        assert!(!is_open_at(schedule, at(FRIDAY, 14, 1)));
    }

    #[test]
    fn test_malformed_entries_do_not_hide_valid_ones() {
        assert!(is_open_at(Some("Mo/Tu/9AM-5PM;Fr/9AM-5PM"), at(FRIDAY, 9, 30)));
        assert!(is_open_at(Some(";;Fr/9AM-5PM;"), at(FRIDAY, 9, 30)));
        assert!(!is_open_at(Some("Fr/9AM-5PM-6PM"), at(FRIDAY, 9, 30)));
        assert!(!is_open_at(Some("Fr9AM-5PM"), at(FRIDAY, 9, 30)));
        assert!(!is_open_at(Some("Xx/9AM-5PM"), at(FRIDAY, 9, 30)));
    }

    #[test]
    fn test_day_codes_are_case_insensitive() {
        assert!(is_open_at(Some("mOTUfr/9am-5pm"), at(TUESDAY, 12, 0)));
    }

    #[test]
    fn test_day_tokens_match_exactly() {
        let schedule = Some("MoWeFr/9AM-5PM");
        assert!(is_open_at(schedule, at(MONDAY, 12, 0)));
        assert!(!is_open_at(schedule, at(TUESDAY, 12, 0)));
    }

    #[test]
    fn test_overnight_window_never_matches() {
        assert!(!is_open_at(Some("Fr/10PM-2AM"), at(FRIDAY, 23, 0)));
        assert!(!is_open_at(Some("Fr/10PM-2AM"), at(FRIDAY, 1, 0)));
    }

    #[test]
    fn test_parse_meridiem_time() {
        assert_eq!(parse_meridiem_time("9AM"), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(parse_meridiem_time("2PM"), NaiveTime::from_hms_opt(14, 0, 0));
        assert_eq!(parse_meridiem_time("12AM"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_meridiem_time("12PM"), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(parse_meridiem_time(" 11pm "), NaiveTime::from_hms_opt(23, 0, 0));
        assert_eq!(parse_meridiem_time("0AM"), None);
        assert_eq!(parse_meridiem_time("13PM"), None);
        assert_eq!(parse_meridiem_time("011AM"), None);
        assert_eq!(parse_meridiem_time("11:30AM"), None);
        assert_eq!(parse_meridiem_time("9 AM"), None);
        assert_eq!(parse_meridiem_time("14"), None);
        assert_eq!(parse_meridiem_time("AM"), None);
    }

    #[test]
    fn test_day_range_wraps_around_week() {
        let days = DaySet::parse("Sa-Mo").unwrap();
        assert!(days.contains(Weekday::Sat));
        assert!(days.contains(Weekday::Sun));
        assert!(days.contains(Weekday::Mon));
        assert!(!days.contains(Weekday::Tue));
    }

    #[test]
    fn test_day_set_rejects_bad_fields() {
        assert_eq!(DaySet::parse(""), None);
        assert_eq!(DaySet::parse("M"), None);
        assert_eq!(DaySet::parse("Mo-"), None);
        assert_eq!(DaySet::parse("-Mo"), None);
        assert_eq!(DaySet::parse("Mo--Fr"), None);
        assert_eq!(DaySet::parse("Mon"), None);
    }

    #[test]
    fn test_entries_keep_valid_ones_only() {
        let entries: Vec<_> = entries("Mo-Fr/7AM-3PM;Sa/14-17;Su/10AM-2PM").collect();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].days.contains(Weekday::Wed));
        assert_eq!(entries[1].opens, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    }
}
