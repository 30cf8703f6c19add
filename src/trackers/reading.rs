//! Book reading tracker: the one feature with a parent/child relation.
//!
//! Invariant: a book's `current_progress` equals the sum of `pages_read`
//! across its live reading logs. It is maintained procedurally —
//! incremented on log-create, decremented (floored at zero) on log-delete
//! and on retention eviction — and deleting a book cascades to its logs.

use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};

use crate::models::{new_record_id, Book, ReadingLog};
use crate::store::{CollectionStore, Slots};
use crate::validate::{ValidationErrors, Validator};

pub const BOOKS_SLOT_KEY: &str = "books";
pub const LOGS_SLOT_KEY: &str = "reading_logs";

// The book shelf is a catalog rather than a rolling log, so it keeps
// more entries than the default retention.
const BOOK_RETENTION: usize = 50;

#[derive(Debug, Clone)]
pub struct BookInput {
    pub title: String,
    pub author: Option<String>,
    pub total_pages: Option<u32>,
}

impl BookInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.required_text("title", "Title", &self.title, 200);
        v.optional_text("author", "Author", self.author.as_deref(), 120);
        if let Some(pages) = self.total_pages {
            v.integer_range("totalPages", "Total pages", i64::from(pages), 1, 20_000);
        }
        v.finish()
    }
}

#[derive(Debug, Clone)]
pub struct ReadingLogInput {
    pub book_id: String,
    pub date: NaiveDate,
    pub pages_read: u32,
    pub note: Option<String>,
}

impl ReadingLogInput {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.required_text("bookId", "Book", &self.book_id, 64);
        v.integer_range("pagesRead", "Pages read", i64::from(self.pages_read), 1, 2_000);
        v.optional_text("note", "Note", self.note.as_deref(), 500);
        v.finish()
    }
}

pub struct ReadingTracker<S: Slots + Clone> {
    books: CollectionStore<S, Book>,
    logs: CollectionStore<S, ReadingLog>,
}

impl<S: Slots + Clone> ReadingTracker<S> {
    pub fn new(slots: S) -> Self {
        Self {
            books: CollectionStore::bounded(slots.clone(), BOOKS_SLOT_KEY, BOOK_RETENTION),
            logs: CollectionStore::new(slots, LOGS_SLOT_KEY),
        }
    }

    pub fn add_book(&self, input: &BookInput) -> Result<Book> {
        let book = Book {
            id: new_record_id(),
            created_at: Utc::now(),
            title: input.title.trim().to_string(),
            author: input.author.clone(),
            total_pages: input.total_pages,
            current_progress: 0,
        };
        self.books.append(book.clone())?;
        Ok(book)
    }

    pub fn books(&self) -> Vec<Book> {
        self.books.load()
    }

    pub fn book(&self, id: &str) -> Option<Book> {
        self.books.load().into_iter().find(|book| book.id == id)
    }

    pub fn logs(&self) -> Vec<ReadingLog> {
        self.logs.load()
    }

    pub fn logs_for(&self, book_id: &str) -> Vec<ReadingLog> {
        self.logs
            .load()
            .into_iter()
            .filter(|log| log.book_id == book_id)
            .collect()
    }

    /// Appends a reading log and bumps the book's aggregate counter.
    pub fn log_reading(&self, input: &ReadingLogInput) -> Result<ReadingLog> {
        if self.book(&input.book_id).is_none() {
            bail!("book not found");
        }

        let log = ReadingLog {
            id: new_record_id(),
            created_at: Utc::now(),
            book_id: input.book_id.clone(),
            date: input.date,
            pages_read: input.pages_read,
            note: input.note.clone(),
        };
        let evicted = self.logs.append_evicting(log.clone())?;

        let pages = input.pages_read;
        self.books.update(&input.book_id, |book| {
            book.current_progress += pages;
        })?;

        // Logs the retention bound pushed out are no longer live, so their
        // pages come back off the owning book's counter.
        for old in evicted {
            self.books.update(&old.book_id, |book| {
                book.current_progress = book.current_progress.saturating_sub(old.pages_read);
            })?;
        }

        Ok(log)
    }

    /// Removes a log and applies the compensating decrement to the book.
    pub fn delete_log(&self, id: &str) -> Result<bool> {
        let log = match self.logs.load().into_iter().find(|log| log.id == id) {
            Some(log) => log,
            None => return Ok(false),
        };

        self.logs.remove(id)?;
        self.books.update(&log.book_id, |book| {
            book.current_progress = book.current_progress.saturating_sub(log.pages_read);
        })?;

        Ok(true)
    }

    /// Deletes a book and cascades to all of its reading logs.
    pub fn delete_book(&self, id: &str) -> Result<bool> {
        let logs = self.logs.load();
        let remaining: Vec<ReadingLog> = logs
            .into_iter()
            .filter(|log| log.book_id != id)
            .collect();
        self.logs.replace(remaining)?;

        self.books.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySlots;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
    }

    fn tracker() -> ReadingTracker<MemorySlots> {
        ReadingTracker::new(MemorySlots::new())
    }

    fn sample_book(tracker: &ReadingTracker<MemorySlots>) -> Book {
        tracker
            .add_book(&BookInput {
                title: "Autobiography of a Yogi".into(),
                author: Some("Paramahansa Yogananda".into()),
                total_pages: Some(500),
            })
            .unwrap()
    }

    fn log_input(book_id: &str, pages: u32) -> ReadingLogInput {
        ReadingLogInput {
            book_id: book_id.to_string(),
            date: date(),
            pages_read: pages,
            note: None,
        }
    }

    fn progress_matches_logs(tracker: &ReadingTracker<MemorySlots>, book_id: &str) -> bool {
        let sum: u32 = tracker
            .logs_for(book_id)
            .iter()
            .map(|log| log.pages_read)
            .sum();
        tracker.book(book_id).map(|b| b.current_progress) == Some(sum)
    }

    #[test]
    fn progress_tracks_log_creates_and_deletes() {
        let tracker = tracker();
        let book = sample_book(&tracker);

        let first = tracker.log_reading(&log_input(&book.id, 20)).unwrap();
        assert!(progress_matches_logs(&tracker, &book.id));

        tracker.log_reading(&log_input(&book.id, 15)).unwrap();
        assert!(progress_matches_logs(&tracker, &book.id));
        assert_eq!(tracker.book(&book.id).unwrap().current_progress, 35);

        assert!(tracker.delete_log(&first.id).unwrap());
        assert!(progress_matches_logs(&tracker, &book.id));
        assert_eq!(tracker.book(&book.id).unwrap().current_progress, 15);

        // A second delete of the same log is a no-op either way.
        assert!(!tracker.delete_log(&first.id).unwrap());
        assert_eq!(tracker.book(&book.id).unwrap().current_progress, 15);
    }

    #[test]
    fn progress_excludes_logs_evicted_by_retention() {
        let tracker = tracker();
        let book = sample_book(&tracker);

        // One past the default retention bound, so the oldest log falls off.
        for _ in 0..=crate::store::DEFAULT_RETENTION {
            tracker.log_reading(&log_input(&book.id, 10)).unwrap();
        }

        assert_eq!(tracker.logs_for(&book.id).len(), crate::store::DEFAULT_RETENTION);
        assert!(progress_matches_logs(&tracker, &book.id));
        assert_eq!(
            tracker.book(&book.id).unwrap().current_progress,
            10 * crate::store::DEFAULT_RETENTION as u32
        );
    }

    #[test]
    fn deleting_a_book_cascades_to_its_logs() {
        let tracker = tracker();
        let keep = sample_book(&tracker);
        let drop = sample_book(&tracker);

        tracker.log_reading(&log_input(&keep.id, 10)).unwrap();
        tracker.log_reading(&log_input(&drop.id, 5)).unwrap();
        tracker.log_reading(&log_input(&drop.id, 7)).unwrap();

        assert!(tracker.delete_book(&drop.id).unwrap());
        assert!(tracker.book(&drop.id).is_none());
        assert!(tracker.logs_for(&drop.id).is_empty());

        // The other book and its logs are untouched.
        assert_eq!(tracker.logs_for(&keep.id).len(), 1);
        assert!(progress_matches_logs(&tracker, &keep.id));
    }

    #[test]
    fn logging_against_a_missing_book_fails() {
        let tracker = tracker();
        assert!(tracker.log_reading(&log_input("missing", 10)).is_err());
        assert!(tracker.logs().is_empty());
    }

    #[test]
    fn title_is_required() {
        let input = BookInput {
            title: "   ".into(),
            author: None,
            total_pages: None,
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
    }

    #[test]
    fn books_and_logs_use_separate_slots() {
        let slots = MemorySlots::new();
        let tracker = ReadingTracker::new(slots.clone());
        let book = sample_book(&tracker);
        tracker.log_reading(&log_input(&book.id, 10)).unwrap();

        use crate::store::Slots;
        assert!(slots.read_slot(BOOKS_SLOT_KEY).unwrap().is_some());
        assert!(slots.read_slot(LOGS_SLOT_KEY).unwrap().is_some());
    }
}
