//! Library store layer.
//!
//! # Responsibility
//! - Own the ordered book/card pairing backing the display.
//! - Return semantic errors (`BookNotFound`, `DuplicateBook`) instead of
//!   silently tolerating identity misuse.

pub mod library_store;
