//! Domain model for the bookshelf widget.
//!
//! # Responsibility
//! - Define the canonical book record backing every displayed card.
//! - Keep identity semantics explicit and stable across the widget lifetime.
//!
//! # Invariants
//! - Every book is identified by a stable `BookId`.
//! - Two books with identical fields are still distinct entities.

pub mod book;
