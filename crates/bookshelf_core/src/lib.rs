//! Core widget logic for the bookshelf library display.
//! This crate is the single source of truth for store and display invariants.

pub mod display;
pub mod form;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod template;

pub use display::surface::{CardHandle, CardHost, DisplaySurface, PanelSurface, SurfaceError};
pub use display::synchronizer::{synchronize, SyncReport};
pub use form::{capture_book, FieldMap, FormError, FormInput};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, BookId, BookIdentityError};
pub use service::modal::{open_add_book_modal, AddBookModal};
pub use service::widget::{BookshelfWidget, WidgetError, WidgetResult};
pub use store::library_store::{LibraryEntry, LibraryStore, StoreError, StoreResult};
pub use template::{
    render_book_card, StaticTemplates, TemplateError, TemplateSource, TEMPLATE_ADD_BOOK_MODAL,
    TEMPLATE_BOOK_CARD,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
