//! Sleep tracker: duration and score are derived once when a night is
//! logged and stored with the entry.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, Utc};

use crate::models::{new_record_id, SleepQuality, SleepSession};
use crate::store::{CollectionStore, Slots};
use crate::validate::{ValidationErrors, Validator};

pub const SLOT_KEY: &str = "sleep_sessions";

const BASELINE_MINUTES: f64 = 480.0;
const DURATION_WEIGHT: f64 = 0.6;
const QUALITY_WEIGHT: f64 = 0.4;
const AWAKENING_PENALTY: f64 = 5.0;
const MAX_AWAKENING_PENALTY: f64 = 20.0;

#[derive(Debug, Clone)]
pub struct SleepInput {
    pub date: NaiveDate,
    pub bed_time: NaiveTime,
    pub wake_time: NaiveTime,
    pub quality: SleepQuality,
    pub awakenings: u32,
}

impl SleepInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.integer_range("awakenings", "Awakenings", i64::from(self.awakenings), 0, 20);
        v.finish()
    }
}

/// Minutes between bed time and wake time. A wake time at or before the
/// bed time means the night crossed midnight, so the result is always
/// positive.
pub fn duration_minutes(bed_time: NaiveTime, wake_time: NaiveTime) -> i64 {
    let minutes = wake_time.signed_duration_since(bed_time).num_minutes();
    if minutes <= 0 {
        minutes + 24 * 60
    } else {
        minutes
    }
}

/// Weighted sleep score: 60% duration against an 8-hour baseline, 40%
/// quality, minus 5 points per awakening capped at 20, clamped to 0..=100.
pub fn sleep_score(duration_minutes: i64, quality: SleepQuality, awakenings: u32) -> f64 {
    let ratio = (duration_minutes as f64 / BASELINE_MINUTES).min(1.0);
    let penalty = (f64::from(awakenings) * AWAKENING_PENALTY).min(MAX_AWAKENING_PENALTY);
    let score = ratio * 100.0 * DURATION_WEIGHT + quality.points() * QUALITY_WEIGHT - penalty;
    score.clamp(0.0, 100.0)
}

pub struct SleepTracker<S: Slots> {
    store: CollectionStore<S, SleepSession>,
}

impl<S: Slots> SleepTracker<S> {
    pub fn new(slots: S) -> Self {
        Self {
            store: CollectionStore::new(slots, SLOT_KEY),
        }
    }

    pub fn log_night(&self, input: &SleepInput) -> Result<SleepSession> {
        let duration = duration_minutes(input.bed_time, input.wake_time);
        let session = SleepSession {
            id: new_record_id(),
            created_at: Utc::now(),
            date: input.date,
            bed_time: input.bed_time,
            wake_time: input.wake_time,
            quality: input.quality,
            awakenings: input.awakenings,
            duration_minutes: duration,
            score: sleep_score(duration, input.quality, input.awakenings),
        };
        self.store.append(session.clone())?;
        Ok(session)
    }

    pub fn sessions(&self) -> Vec<SleepSession> {
        self.store.load()
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        self.store.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sleep::parse_hhmm;
    use crate::store::MemorySlots;

    fn input(bed: &str, wake: &str, quality: SleepQuality, awakenings: u32) -> SleepInput {
        SleepInput {
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            bed_time: parse_hhmm(bed).unwrap(),
            wake_time: parse_hhmm(wake).unwrap(),
            quality,
            awakenings,
        }
    }

    #[test]
    fn eight_good_hours_score_ninety() {
        let tracker = SleepTracker::new(MemorySlots::new());
        let session = tracker
            .log_night(&input("22:00", "06:00", SleepQuality::Good, 0))
            .unwrap();
        assert_eq!(session.duration_minutes, 480);
        assert!((session.score - 90.0).abs() < 1e-9);
    }

    #[test]
    fn wake_before_bed_crosses_midnight() {
        assert_eq!(
            duration_minutes(parse_hhmm("23:30").unwrap(), parse_hhmm("06:30").unwrap()),
            420
        );
    }

    #[test]
    fn same_timestamps_count_as_a_full_day() {
        assert_eq!(
            duration_minutes(parse_hhmm("22:00").unwrap(), parse_hhmm("22:00").unwrap()),
            24 * 60
        );
    }

    #[test]
    fn awakening_penalty_caps_at_twenty() {
        // 60 (duration) + 30 (good) - capped 20 = 70, same for 4 or 10.
        assert!((sleep_score(480, SleepQuality::Good, 4) - 70.0).abs() < 1e-9);
        assert!((sleep_score(480, SleepQuality::Good, 10) - 70.0).abs() < 1e-9);
    }

    #[test]
    fn score_never_goes_negative() {
        // 3.75 (duration) + 10 (poor) - 20 would be negative; clamps to 0.
        assert_eq!(sleep_score(30, SleepQuality::Poor, 10), 0.0);
    }

    #[test]
    fn long_sleep_duration_component_caps_at_baseline() {
        // 10 hours is not rewarded beyond the 8-hour baseline.
        assert!((sleep_score(600, SleepQuality::Excellent, 0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn derived_fields_survive_reload() {
        let slots = MemorySlots::new();
        let tracker = SleepTracker::new(slots.clone());
        let logged = tracker
            .log_night(&input("23:30", "06:30", SleepQuality::Fair, 2))
            .unwrap();

        let reloaded = SleepTracker::new(slots).sessions();
        assert_eq!(reloaded, vec![logged]);
        assert_eq!(reloaded[0].duration_minutes, 420);
    }

    #[test]
    fn too_many_awakenings_fail_validation() {
        let bad = input("22:00", "06:00", SleepQuality::Good, 25);
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.get("awakenings"), Some("Awakenings must be at most 20"));
    }
}
