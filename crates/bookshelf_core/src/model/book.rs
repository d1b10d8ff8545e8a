//! Book domain model.
//!
//! # Responsibility
//! - Define the record rendered by book cards.
//! - Provide the read/unread lifecycle toggle.
//!
//! # Invariants
//! - `id` is stable and never reused for another book.
//! - `is_read` has exactly two states and every transition is reversible.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one book.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Identity equality is id equality: two books carrying the same title,
/// author and page count remain distinct entities.
pub type BookId = Uuid;

/// Canonical record for one book shown in the library display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable identity used for store lookup and card pairing.
    pub id: BookId,
    pub title: String,
    pub author: String,
    /// Page count; positive by form-capture contract.
    pub pages: u32,
    /// Read-state flag, toggled only by explicit user action.
    pub is_read: bool,
}

/// Book construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookIdentityError {
    /// The nil uuid is reserved and never a valid book identity.
    NilId,
}

impl Display for BookIdentityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "book id must not be the nil uuid"),
        }
    }
}

impl Error for BookIdentityError {}

impl Book {
    /// Creates a new unread book with a generated stable identity.
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: author.into(),
            pages,
            is_read: false,
        }
    }

    /// Creates a book with a caller-provided identity.
    ///
    /// Used by embedding hosts where identity already exists externally.
    ///
    /// # Errors
    /// - Rejects the nil uuid; it can never name a live book.
    pub fn with_id(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
    ) -> Result<Self, BookIdentityError> {
        if id.is_nil() {
            return Err(BookIdentityError::NilId);
        }
        Ok(Self {
            id,
            title: title.into(),
            author: author.into(),
            pages,
            is_read: false,
        })
    }

    /// Flips the read state and returns the new value.
    ///
    /// The read flag is a two-state machine: unread -> read -> unread,
    /// indefinitely. No other transition exists.
    pub fn toggle_read(&mut self) -> bool {
        self.is_read = !self.is_read;
        self.is_read
    }

    /// One-line human-readable summary of this book.
    pub fn info(&self) -> String {
        let read_status = if self.is_read {
            "has been read"
        } else {
            "not read yet"
        };
        format!(
            "{} by {}, {} pages, {}",
            self.title, self.author, self.pages, read_status
        )
    }
}
