//! Ordered library store pairing books with their display cards.
//!
//! # Responsibility
//! - Provide add/remove/lookup over the ordered book list.
//! - Enforce that card lifetime tracks entry lifetime on removal.
//!
//! # Invariants
//! - Insertion order equals display order.
//! - No book identity appears twice.
//! - Removal by an absent identity fails and leaves the store unchanged.

use crate::display::surface::{CardHandle, CardHost};
use crate::model::book::{Book, BookId};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Library store errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No entry carries the given identity.
    BookNotFound(BookId),
    /// The identity is already present; one book, one entry.
    DuplicateBook(BookId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookNotFound(id) => write!(f, "book not found in the library: {id}"),
            Self::DuplicateBook(id) => write!(f, "book already in the library: {id}"),
        }
    }
}

impl Error for StoreError {}

/// One store row: a book and the card that displays it.
#[derive(Debug, Clone)]
pub struct LibraryEntry {
    pub book: Book,
    pub card: CardHandle,
}

/// Ordered collection of library entries.
///
/// Explicitly constructed and owned by the widget that needs it: empty on
/// construction, discarded with its owner. Not a process-wide singleton.
#[derive(Debug, Default)]
pub struct LibraryStore {
    entries: Vec<LibraryEntry>,
}

impl LibraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a book/card pair and returns the new entry count.
    ///
    /// # Errors
    /// - `StoreError::DuplicateBook` when the identity is already present;
    ///   the store is left unchanged.
    pub fn add(&mut self, book: Book, card: CardHandle) -> StoreResult<usize> {
        if self.contains(book.id) {
            return Err(StoreError::DuplicateBook(book.id));
        }

        debug!(
            "event=book_added module=store status=ok book_id={} card={} size={}",
            book.id,
            card,
            self.entries.len() + 1
        );
        self.entries.push(LibraryEntry { book, card });
        Ok(self.entries.len())
    }

    /// Removes the entry with the given identity and returns it.
    ///
    /// The entry's card is released through the surface collaborator before
    /// the entry is dropped, so a card can never stay visually alive after
    /// its entry is gone. A card that already went stale (for example after
    /// a failed attach) is logged and tolerated.
    ///
    /// # Errors
    /// - `StoreError::BookNotFound` when the identity is absent; the store
    ///   is left unchanged.
    pub fn remove<H: CardHost>(&mut self, id: BookId, surface: &mut H) -> StoreResult<LibraryEntry> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.book.id == id)
            .ok_or(StoreError::BookNotFound(id))?;

        let card = self.entries[position].card;
        if let Err(err) = surface.release_card(&card) {
            warn!(
                "event=card_release_failed module=store status=error book_id={id} reason={err}"
            );
        }

        let entry = self.entries.remove(position);
        debug!(
            "event=book_removed module=store status=ok book_id={id} size={}",
            self.entries.len()
        );
        Ok(entry)
    }

    /// Read-only ordered view over all entries.
    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    pub fn get(&self, id: BookId) -> Option<&LibraryEntry> {
        self.entries.iter().find(|entry| entry.book.id == id)
    }

    pub fn get_mut(&mut self, id: BookId) -> Option<&mut LibraryEntry> {
        self.entries.iter_mut().find(|entry| entry.book.id == id)
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
