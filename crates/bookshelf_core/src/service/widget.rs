//! Bookshelf widget controller.
//!
//! # Responsibility
//! - Run each user interaction to completion: mutate the store, then
//!   resynchronize the display.
//! - Surface collaborator failures instead of leaving interactions
//!   invisibly stuck.
//!
//! # Invariants
//! - Every interaction is a synchronous reaction to one discrete event.
//! - An error is local to its interaction; the widget stays usable.
//! - A failed interaction never leaves the store corrupted.

use crate::display::surface::{CardHost, DisplaySurface, SurfaceError};
use crate::display::synchronizer::{synchronize, SyncReport};
use crate::form::{capture_book, FormError, FormInput};
use crate::model::book::{Book, BookId};
use crate::store::library_store::{LibraryStore, StoreError};
use crate::template::{render_book_card, TemplateError, TemplateSource};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type WidgetResult<T> = Result<T, WidgetError>;

/// Interaction-layer error envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    Store(StoreError),
    Template(TemplateError),
    Form(FormError),
    Surface(SurfaceError),
}

impl Display for WidgetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Template(err) => write!(f, "{err}"),
            Self::Form(err) => write!(f, "{err}"),
            Self::Surface(err) => write!(f, "{err}"),
        }
    }
}

impl Error for WidgetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Template(err) => Some(err),
            Self::Form(err) => Some(err),
            Self::Surface(err) => Some(err),
        }
    }
}

impl From<StoreError> for WidgetError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<TemplateError> for WidgetError {
    fn from(value: TemplateError) -> Self {
        Self::Template(value)
    }
}

impl From<FormError> for WidgetError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

impl From<SurfaceError> for WidgetError {
    fn from(value: SurfaceError) -> Self {
        Self::Surface(value)
    }
}

/// Book library widget: an owned store plus display and template
/// collaborators.
///
/// Constructed empty, torn down with its owner. All interactions run to
/// completion before the next one is processed; the widget assumes a
/// single-threaded, event-driven host.
pub struct BookshelfWidget<S, T>
where
    S: DisplaySurface + CardHost,
    T: TemplateSource,
{
    store: LibraryStore,
    surface: S,
    templates: T,
}

impl<S, T> BookshelfWidget<S, T>
where
    S: DisplaySurface + CardHost,
    T: TemplateSource,
{
    /// Creates an empty widget over the given collaborators.
    pub fn new(surface: S, templates: T) -> Self {
        Self {
            store: LibraryStore::new(),
            surface,
            templates,
        }
    }

    /// Captures a submitted form into a new book and displays it.
    ///
    /// # Errors
    /// - `WidgetError::Form` when a required field is missing or pages is
    ///   not a positive integer; nothing is added.
    /// - `WidgetError::Template` when card markup cannot be loaded; nothing
    ///   is added, so the caller can offer a retry.
    pub fn submit_new_book(&mut self, form: &impl FormInput) -> WidgetResult<BookId> {
        let book = capture_book(form)?;
        self.add_book(book)
    }

    /// Adds an already constructed book: renders its card, stores the pair
    /// and resynchronizes the display.
    pub fn add_book(&mut self, book: Book) -> WidgetResult<BookId> {
        let markup = render_book_card(&self.templates, &book)?;
        let card = self.surface.create_card(markup);
        let id = book.id;

        if let Err(err) = self.store.add(book, card) {
            // The freshly created card must not outlive the rejected entry.
            if let Err(release_err) = self.surface.release_card(&card) {
                warn!(
                    "event=orphan_card_release_failed module=widget status=error reason={release_err}"
                );
            }
            return Err(err.into());
        }

        let report = self.refresh_display();
        info!(
            "event=book_submitted module=widget status=ok book_id={id} size={} displayed={}",
            self.store.len(),
            report.attached
        );
        Ok(id)
    }

    /// Toggles the read state of one book and re-renders its card.
    ///
    /// Returns the new read state. The post-toggle markup is rendered
    /// before the state is committed, so an `Err` always means the book is
    /// untouched. A card that went stale is logged and skipped; the logical
    /// state still changes and the card will be rebuilt if the book is ever
    /// re-rendered.
    ///
    /// # Errors
    /// - `WidgetError::Store(BookNotFound)` when the identity is absent.
    /// - `WidgetError::Template` when the card markup cannot be
    ///   re-rendered. The read state is unchanged in both cases.
    pub fn toggle_read(&mut self, id: BookId) -> WidgetResult<bool> {
        let entry = self
            .store
            .get_mut(id)
            .ok_or(StoreError::BookNotFound(id))?;

        let mut toggled = entry.book.clone();
        let is_read = toggled.toggle_read();
        let card = entry.card;
        let markup = render_book_card(&self.templates, &toggled)?;
        entry.book = toggled;

        if let Err(err) = self.surface.update_card(&card, markup) {
            warn!(
                "event=card_update_skipped module=widget status=error book_id={id} reason={err}"
            );
        }

        info!("event=read_toggled module=widget status=ok book_id={id} is_read={is_read}");
        Ok(is_read)
    }

    /// Deletes one book: removes its entry (releasing the card) and
    /// resynchronizes the display.
    ///
    /// # Errors
    /// - `WidgetError::Store(BookNotFound)` when the identity is absent;
    ///   store and display are left unchanged.
    pub fn delete_book(&mut self, id: BookId) -> WidgetResult<Book> {
        let entry = self.store.remove(id, &mut self.surface)?;
        let report = self.refresh_display();
        info!(
            "event=book_deleted module=widget status=ok book_id={id} size={} displayed={}",
            self.store.len(),
            report.attached
        );
        Ok(entry.book)
    }

    /// Reconciles the display with the current store contents.
    ///
    /// Safe to call at any time; entries whose card fails to attach are
    /// reported and retried on the next call.
    pub fn refresh_display(&mut self) -> SyncReport {
        synchronize(&self.store, &mut self.surface)
    }

    /// Books in display order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.store.entries().iter().map(|entry| &entry.book)
    }

    pub fn get_book(&self, id: BookId) -> Option<&Book> {
        self.store.get(id).map(|entry| &entry.book)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn store(&self) -> &LibraryStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable collaborator access for hosts that manage cards directly.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn templates(&self) -> &T {
        &self.templates
    }
}
