//! Concrete feature forms with their per-field reset policies. Which
//! fields survive a successful submit is a deliberate contract, not an
//! accident: selections and habitual values stay, entry state clears.

use chrono::{NaiveDate, NaiveTime};

use crate::calculators::body_fat::BodyFatInput;
use crate::form::Form;
use crate::models::{Gender, SleepQuality};
use crate::trackers::mood::MoodInput;
use crate::trackers::reading::{BookInput, ReadingLogInput};
use crate::trackers::sleep::SleepInput;
use crate::validate::ValidationErrors;

/// Sleep entry form. Bed/wake times and quality are habitual and stay;
/// the awakening counter is per-night state and clears.
#[derive(Debug, Clone)]
pub struct SleepForm {
    pub date: NaiveDate,
    pub bed_time: NaiveTime,
    pub wake_time: NaiveTime,
    pub quality: SleepQuality,
    pub awakenings: u32,
}

impl SleepForm {
    pub fn input(&self) -> SleepInput {
        SleepInput {
            date: self.date,
            bed_time: self.bed_time,
            wake_time: self.wake_time,
            quality: self.quality,
            awakenings: self.awakenings,
        }
    }
}

impl Form for SleepForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.input().validate()
    }

    fn reset_after_submit(&mut self) {
        self.awakenings = 0;
    }
}

/// Reading log form. The selected book and date stay so consecutive
/// sessions against the same book need no re-selection; pages and note
/// clear.
#[derive(Debug, Clone)]
pub struct ReadingForm {
    pub book_id: String,
    pub date: NaiveDate,
    pub pages_read: u32,
    pub note: Option<String>,
}

impl ReadingForm {
    pub fn input(&self) -> ReadingLogInput {
        ReadingLogInput {
            book_id: self.book_id.clone(),
            date: self.date,
            pages_read: self.pages_read,
            note: self.note.clone(),
        }
    }
}

impl Form for ReadingForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.input().validate()
    }

    fn reset_after_submit(&mut self) {
        self.pages_read = 0;
        self.note = None;
    }
}

/// Mood check-in form. The date stays for back-filling several entries on
/// the same day; the rating and note are per-entry state and clear (a
/// cleared rating is out of range until re-entered).
#[derive(Debug, Clone)]
pub struct MoodForm {
    pub date: NaiveDate,
    pub mood: u8,
    pub note: Option<String>,
}

impl MoodForm {
    pub fn input(&self) -> MoodInput {
        MoodInput {
            date: self.date,
            mood: self.mood,
            note: self.note.clone(),
        }
    }
}

impl Form for MoodForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.input().validate()
    }

    fn reset_after_submit(&mut self) {
        self.mood = 0;
        self.note = None;
    }
}

/// Book creation form. Nothing carries over between books, so every field
/// clears.
#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub title: String,
    pub author: Option<String>,
    pub total_pages: Option<u32>,
}

impl BookForm {
    pub fn input(&self) -> BookInput {
        BookInput {
            title: self.title.clone(),
            author: self.author.clone(),
            total_pages: self.total_pages,
        }
    }
}

impl Form for BookForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.input().validate()
    }

    fn reset_after_submit(&mut self) {
        *self = Self::default();
    }
}

/// Body-fat form. Gender, age and height come from the profile and stay;
/// the per-measurement circumferences and weight clear.
#[derive(Debug, Clone)]
pub struct BodyFatForm {
    pub gender: Gender,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub neck_cm: f64,
    pub waist_cm: f64,
    pub hip_cm: Option<f64>,
}

impl BodyFatForm {
    pub fn input(&self) -> BodyFatInput {
        BodyFatInput {
            gender: self.gender,
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            neck_cm: self.neck_cm,
            waist_cm: self.waist_cm,
            hip_cm: self.hip_cm,
        }
    }
}

impl Form for BodyFatForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.input().validate()
    }

    fn reset_after_submit(&mut self) {
        self.weight_kg = 0.0;
        self.neck_cm = 0.0;
        self.waist_cm = 0.0;
        self.hip_cm = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sleep::parse_hhmm;

    #[test]
    fn reading_form_keeps_book_and_date() {
        let mut form = ReadingForm {
            book_id: "book-1".into(),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            pages_read: 25,
            note: Some("evening chapter".into()),
        };
        form.reset_after_submit();

        assert_eq!(form.book_id, "book-1");
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_eq!(form.pages_read, 0);
        assert_eq!(form.note, None);
    }

    #[test]
    fn sleep_form_keeps_habitual_times() {
        let mut form = SleepForm {
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            bed_time: parse_hhmm("22:30").unwrap(),
            wake_time: parse_hhmm("06:30").unwrap(),
            quality: SleepQuality::Good,
            awakenings: 2,
        };
        form.reset_after_submit();

        assert_eq!(form.bed_time, parse_hhmm("22:30").unwrap());
        assert_eq!(form.quality, SleepQuality::Good);
        assert_eq!(form.awakenings, 0);
    }

    #[test]
    fn mood_form_keeps_date_clears_entry_state() {
        let mut form = MoodForm {
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            mood: 4,
            note: Some("calm morning".into()),
        };
        form.reset_after_submit();

        assert_eq!(form.date, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_eq!(form.mood, 0);
        assert_eq!(form.note, None);
        // The cleared rating does not validate until re-entered.
        assert!(form.validate().is_err());
    }

    #[test]
    fn book_form_clears_everything() {
        let mut form = BookForm {
            title: "Light on Yoga".into(),
            author: Some("B. K. S. Iyengar".into()),
            total_pages: Some(544),
        };
        form.reset_after_submit();

        assert!(form.title.is_empty());
        assert_eq!(form.author, None);
        assert_eq!(form.total_pages, None);
    }

    #[test]
    fn body_fat_form_keeps_profile_fields() {
        let mut form = BodyFatForm {
            gender: Gender::Female,
            age: 28,
            height_cm: 165.0,
            weight_kg: 60.0,
            neck_cm: 32.0,
            waist_cm: 70.0,
            hip_cm: Some(95.0),
        };
        form.reset_after_submit();

        assert_eq!(form.gender, Gender::Female);
        assert_eq!(form.age, 28);
        assert_eq!(form.height_cm, 165.0);
        assert_eq!(form.waist_cm, 0.0);
        assert_eq!(form.hip_cm, None);
    }
}
