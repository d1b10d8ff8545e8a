//! Add-book modal controller.
//!
//! # Responsibility
//! - Materialize the creation modal's markup through the template
//!   collaborator.
//! - Drive the submit/cancel lifecycle of one modal instance.
//!
//! # Invariants
//! - A modal that failed to load never exists; load errors are surfaced.
//! - Submit closes the modal only when the book was actually added, so the
//!   host can keep the form up for a retry.

use crate::display::surface::{CardHost, DisplaySurface};
use crate::form::FormInput;
use crate::model::book::BookId;
use crate::service::widget::{BookshelfWidget, WidgetResult};
use crate::template::{TemplateSource, TEMPLATE_ADD_BOOK_MODAL};
use log::info;

/// One open add-book modal.
///
/// Created through [`open_add_book_modal`]; holds the loaded markup and the
/// open/closed flag the host renders from.
#[derive(Debug, Clone)]
pub struct AddBookModal {
    markup: String,
    open: bool,
}

impl AddBookModal {
    /// Markup the host should display while the modal is open.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Submits the form: adds the book and closes the modal on success.
    ///
    /// On error the modal stays open, so the same instance can be submitted
    /// again once the input or collaborator problem is fixed.
    pub fn submit<S, T>(
        &mut self,
        widget: &mut BookshelfWidget<S, T>,
        form: &impl FormInput,
    ) -> WidgetResult<BookId>
    where
        S: DisplaySurface + CardHost,
        T: TemplateSource,
    {
        let id = widget.submit_new_book(form)?;
        self.open = false;
        info!("event=modal_submitted module=widget status=ok book_id={id}");
        Ok(id)
    }

    /// Closes the modal without touching the library.
    pub fn cancel(&mut self) {
        self.open = false;
        info!("event=modal_cancelled module=widget status=ok");
    }
}

/// Loads the add-book modal markup and opens a modal instance.
///
/// # Errors
/// - `TemplateError` from the source is passed through: a host can show a
///   retry affordance instead of an interaction that silently never
///   completes.
pub fn open_add_book_modal<T: TemplateSource>(
    templates: &T,
) -> Result<AddBookModal, crate::template::TemplateError> {
    let markup = templates.load(TEMPLATE_ADD_BOOK_MODAL)?;
    info!("event=modal_opened module=widget status=ok");
    Ok(AddBookModal { markup, open: true })
}
