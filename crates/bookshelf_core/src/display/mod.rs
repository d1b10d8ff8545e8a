//! Display surface contracts and store-to-display synchronization.
//!
//! # Responsibility
//! - Define the ordered-container capability consumed by synchronization.
//! - Keep visual card ownership isolated from logical store state.
//!
//! # Invariants
//! - A surface exclusively owns the visual lifetime of its cards.
//! - Synchronization never mutates the store; failed cards stay in it.

pub mod surface;
pub mod synchronizer;
