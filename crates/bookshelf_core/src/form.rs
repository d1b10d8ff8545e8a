//! Form input collaborator contract and book capture.
//!
//! # Responsibility
//! - Define how submitted field values reach the core (`FormInput`).
//! - Construct a `Book` from the three required fields.
//!
//! # Invariants
//! - Title and author strings are taken as supplied, without validation.
//! - `pages` must parse as a positive integer; the typed model cannot carry
//!   arbitrary page strings.

use crate::model::book::Book;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Required field name for the book title.
pub const FIELD_TITLE: &str = "title";
/// Required field name for the book author.
pub const FIELD_AUTHOR: &str = "author";
/// Required field name for the page count.
pub const FIELD_PAGES: &str = "pages";

/// Form capture errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field was not supplied.
    MissingField(&'static str),
    /// The pages value is not a positive integer.
    InvalidPages(String),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required form field is missing: `{field}`"),
            Self::InvalidPages(value) => {
                write!(f, "pages must be a positive integer, got `{value}`")
            }
        }
    }
}

impl Error for FormError {}

/// Collaborator exposing submitted form values by field name.
pub trait FormInput {
    fn get(&self, field: &str) -> Option<&str>;
}

/// In-process form input backed by a string map.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    fields: HashMap<String, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Convenience constructor for the three required book fields.
    pub fn book_fields(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: impl Into<String>,
    ) -> Self {
        let mut map = Self::new();
        map.set(FIELD_TITLE, title)
            .set(FIELD_AUTHOR, author)
            .set(FIELD_PAGES, pages);
        map
    }
}

impl FormInput for FieldMap {
    fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// Constructs an unread `Book` from submitted form fields.
///
/// Title and author are used exactly as supplied. Pages is parsed as a
/// positive integer; anything else is an `InvalidPages` error.
pub fn capture_book(form: &impl FormInput) -> Result<Book, FormError> {
    let title = form
        .get(FIELD_TITLE)
        .ok_or(FormError::MissingField(FIELD_TITLE))?;
    let author = form
        .get(FIELD_AUTHOR)
        .ok_or(FormError::MissingField(FIELD_AUTHOR))?;
    let pages_raw = form
        .get(FIELD_PAGES)
        .ok_or(FormError::MissingField(FIELD_PAGES))?;

    let pages = pages_raw
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|pages| *pages > 0)
        .ok_or_else(|| FormError::InvalidPages(pages_raw.to_string()))?;

    Ok(Book::new(title, author, pages))
}
