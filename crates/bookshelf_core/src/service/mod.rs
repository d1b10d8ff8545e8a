//! Widget interaction services.
//!
//! # Responsibility
//! - Orchestrate store, surface and template collaborators into the
//!   user-facing interactions: add, toggle, delete, redisplay.
//! - Keep embedding hosts decoupled from store and display details.

pub mod modal;
pub mod widget;
