//! Display surface collaborator contracts and in-process implementation.
//!
//! # Responsibility
//! - Define the minimal ordered-container contract (`DisplaySurface`).
//! - Define card ownership and lifetime (`CardHost`).
//! - Provide `PanelSurface`, the in-process reference surface.
//!
//! # Invariants
//! - A `CardHandle` refers to at most one live card.
//! - Releasing a card detaches it first; a released handle is stale for all
//!   subsequent operations.
//! - Attached children are always a subset of live cards.

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque handle to one visual card owned by a display surface.
///
/// Handles are cheap to copy and carry no content; the owning surface maps
/// them to rendered markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardHandle(Uuid);

impl CardHandle {
    fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for CardHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Surface operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The handle no longer refers to a live card.
    StaleCard(CardHandle),
    /// The card is live but not currently attached.
    CardNotAttached(CardHandle),
}

impl Display for SurfaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StaleCard(handle) => write!(f, "card handle is stale: {handle}"),
            Self::CardNotAttached(handle) => write!(f, "card is not attached: {handle}"),
        }
    }
}

impl Error for SurfaceError {}

/// Minimal ordered-container contract consumed by display synchronization.
///
/// Mirrors the capability set of a child-bearing container: append, remove,
/// and first-child inspection. Nothing else is required to reconcile a
/// display against store order.
pub trait DisplaySurface {
    /// Attaches a card as the last child.
    ///
    /// Re-attaching an already attached card moves it to the end instead of
    /// duplicating it, so a card can never appear twice.
    ///
    /// # Errors
    /// - `SurfaceError::StaleCard` when the handle has no live card.
    fn append_child(&mut self, card: CardHandle) -> Result<(), SurfaceError>;

    /// Detaches a card, returning its handle.
    ///
    /// # Errors
    /// - `SurfaceError::CardNotAttached` when the card is not a child.
    fn remove_child(&mut self, card: &CardHandle) -> Result<CardHandle, SurfaceError>;

    /// Returns the first attached child, if any.
    fn first_child(&self) -> Option<CardHandle>;
}

/// Card ownership contract of a display surface.
///
/// Cards exist independently of attachment: creation yields a detached live
/// card, release invalidates the handle permanently.
pub trait CardHost {
    /// Creates a detached card holding the given rendered markup.
    fn create_card(&mut self, markup: String) -> CardHandle;

    /// Replaces the rendered markup of a live card in place.
    ///
    /// # Errors
    /// - `SurfaceError::StaleCard` when the handle has no live card.
    fn update_card(&mut self, card: &CardHandle, markup: String) -> Result<(), SurfaceError>;

    /// Releases a card: detaches it when attached, then frees it.
    ///
    /// # Errors
    /// - `SurfaceError::StaleCard` when the handle was already released.
    fn release_card(&mut self, card: &CardHandle) -> Result<(), SurfaceError>;

    /// Returns the current markup of a live card.
    ///
    /// # Errors
    /// - `SurfaceError::StaleCard` when the handle has no live card.
    fn card_markup(&self, card: &CardHandle) -> Result<&str, SurfaceError>;
}

/// In-process display surface backed by an ordered child list.
///
/// Used by the demo CLI and tests; embedding hosts provide their own
/// `DisplaySurface + CardHost` implementation over a real container.
#[derive(Debug, Default)]
pub struct PanelSurface {
    cards: HashMap<CardHandle, String>,
    children: Vec<CardHandle>,
}

impl PanelSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached children in display order.
    pub fn children(&self) -> &[CardHandle] {
        &self.children
    }

    /// Number of attached children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of live cards, attached or not.
    pub fn live_cards(&self) -> usize {
        self.cards.len()
    }
}

impl DisplaySurface for PanelSurface {
    fn append_child(&mut self, card: CardHandle) -> Result<(), SurfaceError> {
        if !self.cards.contains_key(&card) {
            return Err(SurfaceError::StaleCard(card));
        }
        self.children.retain(|child| *child != card);
        self.children.push(card);
        Ok(())
    }

    fn remove_child(&mut self, card: &CardHandle) -> Result<CardHandle, SurfaceError> {
        let position = self
            .children
            .iter()
            .position(|child| child == card)
            .ok_or(SurfaceError::CardNotAttached(*card))?;
        Ok(self.children.remove(position))
    }

    fn first_child(&self) -> Option<CardHandle> {
        self.children.first().copied()
    }
}

impl CardHost for PanelSurface {
    fn create_card(&mut self, markup: String) -> CardHandle {
        let handle = CardHandle::mint();
        self.cards.insert(handle, markup);
        handle
    }

    fn update_card(&mut self, card: &CardHandle, markup: String) -> Result<(), SurfaceError> {
        match self.cards.get_mut(card) {
            Some(slot) => {
                *slot = markup;
                Ok(())
            }
            None => Err(SurfaceError::StaleCard(*card)),
        }
    }

    fn release_card(&mut self, card: &CardHandle) -> Result<(), SurfaceError> {
        if self.cards.remove(card).is_none() {
            return Err(SurfaceError::StaleCard(*card));
        }
        self.children.retain(|child| child != card);
        Ok(())
    }

    fn card_markup(&self, card: &CardHandle) -> Result<&str, SurfaceError> {
        self.cards
            .get(card)
            .map(String::as_str)
            .ok_or(SurfaceError::StaleCard(*card))
    }
}

#[cfg(test)]
mod tests {
    use super::{CardHost, DisplaySurface, PanelSurface, SurfaceError};

    #[test]
    fn append_moves_existing_child_to_end() {
        let mut surface = PanelSurface::new();
        let first = surface.create_card("<div>first</div>".to_string());
        let second = surface.create_card("<div>second</div>".to_string());

        surface.append_child(first).expect("first attach");
        surface.append_child(second).expect("second attach");
        surface.append_child(first).expect("re-attach");

        assert_eq!(surface.children(), &[second, first]);
    }

    #[test]
    fn append_rejects_released_card() {
        let mut surface = PanelSurface::new();
        let card = surface.create_card("<div/>".to_string());
        surface.release_card(&card).expect("release");

        let err = surface.append_child(card).expect_err("stale attach must fail");
        assert_eq!(err, SurfaceError::StaleCard(card));
    }

    #[test]
    fn release_detaches_attached_card() {
        let mut surface = PanelSurface::new();
        let card = surface.create_card("<div/>".to_string());
        surface.append_child(card).expect("attach");

        surface.release_card(&card).expect("release");

        assert!(surface.is_empty());
        assert_eq!(surface.live_cards(), 0);
        assert_eq!(surface.first_child(), None);
    }

    #[test]
    fn remove_child_requires_attachment() {
        let mut surface = PanelSurface::new();
        let card = surface.create_card("<div/>".to_string());

        let err = surface
            .remove_child(&card)
            .expect_err("detached card removal must fail");
        assert_eq!(err, SurfaceError::CardNotAttached(card));
    }
}
