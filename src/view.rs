//! Text rendering for calculation results and persisted record lists.

use std::io::{self, Write};

use crate::calculators::{CalcOutcome, CategoryTable};
use crate::models::{Book, BodyFatMeasurement, MoodEntry, ReadingLog, SleepSession};

/// Renders a single calculation result with its category reference table.
pub fn render_result<W: Write>(
    w: &mut W,
    title: &str,
    unit: &str,
    outcome: &CalcOutcome,
    reference: CategoryTable,
) -> io::Result<()> {
    writeln!(w, "{title}: {:.1}{unit} ({})", outcome.value, outcome.category)?;
    writeln!(w, "Reference:")?;

    let mut lower: Option<f64> = None;
    for (bound, label) in reference {
        let marker = if *label == outcome.category { " <-" } else { "" };
        if bound.is_infinite() {
            let from = lower.unwrap_or(0.0);
            writeln!(w, "  over {from:.0}{unit}: {label}{marker}")?;
        } else {
            match lower {
                Some(from) => writeln!(w, "  {from:.1} to {bound:.1}{unit}: {label}{marker}")?,
                None => writeln!(w, "  up to {bound:.1}{unit}: {label}{marker}")?,
            }
        }
        lower = Some(*bound);
    }
    Ok(())
}

pub trait ListItem {
    fn list_line(&self) -> String;
}

/// Renders a newest-first record list, with a distinct empty state.
pub fn render_list<W: Write>(w: &mut W, title: &str, items: &[impl ListItem]) -> io::Result<()> {
    writeln!(w, "{title}")?;
    if items.is_empty() {
        writeln!(w, "  No entries yet.")?;
        return Ok(());
    }
    for item in items {
        writeln!(w, "  {}", item.list_line())?;
    }
    Ok(())
}

impl ListItem for SleepSession {
    fn list_line(&self) -> String {
        format!(
            "{}  {} to {}  {} min  score {:.0} ({})  id={}",
            self.date,
            self.bed_time.format("%H:%M"),
            self.wake_time.format("%H:%M"),
            self.duration_minutes,
            self.score,
            self.quality.as_str(),
            self.id,
        )
    }
}

impl ListItem for MoodEntry {
    fn list_line(&self) -> String {
        let note = self.note.as_deref().unwrap_or("-");
        format!("{}  mood {}/5  {}  id={}", self.date, self.mood, note, self.id)
    }
}

impl ListItem for BodyFatMeasurement {
    fn list_line(&self) -> String {
        format!(
            "{}  {:.1}% ({})  id={}",
            self.date, self.body_fat_pct, self.category, self.id
        )
    }
}

impl ListItem for Book {
    fn list_line(&self) -> String {
        let progress = match self.total_pages {
            Some(total) => format!("{}/{} pages", self.current_progress, total),
            None => format!("{} pages", self.current_progress),
        };
        format!("{}  {}  id={}", self.title, progress, self.id)
    }
}

impl ListItem for ReadingLog {
    fn list_line(&self) -> String {
        let note = self.note.as_deref().unwrap_or("-");
        format!(
            "{}  {} pages  {}  id={}",
            self.date, self.pages_read, note, self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::bmi::BMI_CATEGORIES;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn empty_list_renders_placeholder() {
        let mut out = Vec::new();
        let entries: Vec<MoodEntry> = Vec::new();
        render_list(&mut out, "Mood entries", &entries).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No entries yet."));
    }

    #[test]
    fn populated_list_renders_lines() {
        let entry = MoodEntry {
            id: "m1".into(),
            created_at: Utc::now(),
            date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            mood: 4,
            note: None,
        };
        let mut out = Vec::new();
        render_list(&mut out, "Mood entries", &[entry]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("mood 4/5"));
        assert!(text.contains("id=m1"));
        assert!(!text.contains("No entries yet."));
    }

    #[test]
    fn result_view_marks_the_matching_category() {
        let outcome = CalcOutcome {
            value: 23.1,
            category: "Normal",
        };
        let mut out = Vec::new();
        render_result(&mut out, "BMI", "", &outcome, BMI_CATEGORIES).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("BMI: 23.1 (Normal)"));
        assert!(text.contains("Normal <-"));
    }
}
