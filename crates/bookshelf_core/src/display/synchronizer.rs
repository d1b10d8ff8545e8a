//! Store-to-display synchronization.
//!
//! # Responsibility
//! - Reconcile a display surface to show exactly the store's cards, in
//!   store order.
//! - Contain per-card attach failures so one bad card never aborts the
//!   whole redisplay.
//!
//! # Invariants
//! - On return, visible order equals store order restricted to the entries
//!   that attached.
//! - Failed entries stay in the store; a later pass can retry them.

use crate::display::surface::{DisplaySurface, SurfaceError};
use crate::store::library_store::LibraryStore;
use log::{debug, warn};

/// Outcome of one synchronization pass.
///
/// Partial failure is surfaced as data instead of being swallowed, so the
/// interaction layer can offer a retry affordance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncReport {
    /// Number of cards attached in this pass.
    pub attached: usize,
    /// Store positions whose attach failed, with the failure cause.
    pub skipped: Vec<(usize, SurfaceError)>,
}

impl SyncReport {
    /// True when every store entry is visible.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Makes the surface's children exactly match the store's cards, in order.
///
/// The surface is cleared first by repeatedly detaching its first child,
/// then every entry's card is attached in store order. An attach failure is
/// logged with the entry's position and recorded in the report; the pass
/// continues with the next entry.
pub fn synchronize<S: DisplaySurface>(store: &LibraryStore, surface: &mut S) -> SyncReport {
    clear_surface(surface);

    let mut report = SyncReport::default();
    for (position, entry) in store.entries().iter().enumerate() {
        match surface.append_child(entry.card) {
            Ok(()) => report.attached += 1,
            Err(err) => {
                warn!(
                    "event=card_attach_failed module=display status=error position={position} book_id={} reason={err}",
                    entry.book.id
                );
                report.skipped.push((position, err));
            }
        }
    }

    debug!(
        "event=display_synchronized module=display status={} attached={} skipped={}",
        if report.is_complete() { "ok" } else { "partial" },
        report.attached,
        report.skipped.len()
    );
    report
}

/// Detaches children one by one until the surface reports none left.
fn clear_surface<S: DisplaySurface>(surface: &mut S) {
    while let Some(child) = surface.first_child() {
        if let Err(err) = surface.remove_child(&child) {
            // A surface that reports a first child it cannot detach would
            // loop forever; stop and let the attach pass proceed.
            warn!("event=surface_clear_stalled module=display status=error reason={err}");
            break;
        }
    }
}
