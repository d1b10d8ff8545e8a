use bookshelf_core::{
    open_add_book_modal, BookshelfWidget, CardHost, FieldMap, FormError, PanelSurface,
    StaticTemplates, StoreError, TemplateError, TemplateSource, WidgetError,
    TEMPLATE_ADD_BOOK_MODAL, TEMPLATE_BOOK_CARD,
};
use std::cell::Cell;
use uuid::Uuid;

/// Template source with a load budget; loads beyond it fail.
struct BudgetedTemplates {
    inner: StaticTemplates,
    remaining_loads: Cell<usize>,
}

impl BudgetedTemplates {
    fn new(remaining_loads: usize) -> Self {
        Self {
            inner: StaticTemplates::new(),
            remaining_loads: Cell::new(remaining_loads),
        }
    }
}

impl TemplateSource for BudgetedTemplates {
    fn load(&self, template_id: &str) -> Result<String, TemplateError> {
        if self.remaining_loads.get() == 0 {
            return Err(TemplateError::TemplateNotFound(template_id.to_string()));
        }
        self.remaining_loads.set(self.remaining_loads.get() - 1);
        self.inner.load(template_id)
    }
}

fn new_widget() -> BookshelfWidget<PanelSurface, StaticTemplates> {
    BookshelfWidget::new(PanelSurface::new(), StaticTemplates::new())
}

#[test]
fn add_toggle_delete_end_to_end() {
    let mut widget = new_widget();

    let form = FieldMap::book_fields("Dune", "Herbert", "412");
    let id = widget.submit_new_book(&form).unwrap();
    assert_eq!(widget.len(), 1);
    assert_eq!(widget.surface().len(), 1);

    let is_read = widget.toggle_read(id).unwrap();
    assert!(is_read);
    assert!(widget.get_book(id).unwrap().is_read);
    // The displayed card reflects the new state.
    let card = widget.store().entries()[0].card;
    let markup = widget.surface().card_markup(&card).unwrap();
    assert!(markup.contains(">Read<"));

    let book = widget.delete_book(id).unwrap();
    assert_eq!(book.title, "Dune");
    assert_eq!(widget.len(), 0);
    assert_eq!(widget.surface().len(), 0);
    assert_eq!(widget.surface().live_cards(), 0);
}

#[test]
fn submitted_books_display_in_submission_order() {
    let mut widget = new_widget();

    for (title, pages) in [("Dune", "412"), ("Hyperion", "482"), ("Solaris", "204")] {
        let form = FieldMap::book_fields(title, "Author", pages);
        widget.submit_new_book(&form).unwrap();
    }

    let titles: Vec<&str> = widget.books().map(|book| book.title.as_str()).collect();
    assert_eq!(titles, ["Dune", "Hyperion", "Solaris"]);
    assert_eq!(widget.surface().len(), 3);
}

#[test]
fn invalid_form_leaves_widget_untouched() {
    let mut widget = new_widget();

    let form = FieldMap::book_fields("Dune", "Herbert", "many");
    let err = widget.submit_new_book(&form).unwrap_err();
    assert_eq!(
        err,
        WidgetError::Form(FormError::InvalidPages("many".to_string()))
    );

    assert!(widget.is_empty());
    assert_eq!(widget.surface().live_cards(), 0);
}

#[test]
fn missing_card_template_surfaces_and_adds_nothing() {
    let mut templates = StaticTemplates::new();
    templates.unregister(TEMPLATE_BOOK_CARD);
    let mut widget = BookshelfWidget::new(PanelSurface::new(), templates);

    let form = FieldMap::book_fields("Dune", "Herbert", "412");
    let err = widget.submit_new_book(&form).unwrap_err();
    assert_eq!(
        err,
        WidgetError::Template(TemplateError::TemplateNotFound(
            TEMPLATE_BOOK_CARD.to_string()
        ))
    );
    assert!(widget.is_empty());
}

#[test]
fn interactions_on_absent_identity_fail_cleanly() {
    let mut widget = new_widget();
    let form = FieldMap::book_fields("Dune", "Herbert", "412");
    widget.submit_new_book(&form).unwrap();

    let absent = Uuid::new_v4();
    let toggle_err = widget.toggle_read(absent).unwrap_err();
    assert_eq!(toggle_err, WidgetError::Store(StoreError::BookNotFound(absent)));

    let delete_err = widget.delete_book(absent).unwrap_err();
    assert_eq!(delete_err, WidgetError::Store(StoreError::BookNotFound(absent)));

    // The one real book is still there and displayed.
    assert_eq!(widget.len(), 1);
    assert_eq!(widget.surface().len(), 1);
}

#[test]
fn failed_toggle_render_leaves_read_state_unchanged() {
    // One load covers the card created at submission; the toggle's
    // re-render then fails at the template source.
    let mut widget = BookshelfWidget::new(PanelSurface::new(), BudgetedTemplates::new(1));
    let form = FieldMap::book_fields("Dune", "Herbert", "412");
    let id = widget.submit_new_book(&form).unwrap();

    let err = widget.toggle_read(id).unwrap_err();
    assert_eq!(
        err,
        WidgetError::Template(TemplateError::TemplateNotFound(
            TEMPLATE_BOOK_CARD.to_string()
        ))
    );

    // Err means the interaction had no effect.
    assert!(!widget.get_book(id).unwrap().is_read);
    let card = widget.store().entries()[0].card;
    let markup = widget.surface().card_markup(&card).unwrap();
    assert!(markup.contains("eye-disabled.svg"));
    assert!(!markup.contains(">Read<"));
}

#[test]
fn toggle_still_flips_state_when_card_went_stale() {
    let mut widget = new_widget();
    let form = FieldMap::book_fields("Dune", "Herbert", "412");
    let id = widget.submit_new_book(&form).unwrap();

    let card = widget.store().entries()[0].card;
    widget.surface_mut().release_card(&card).unwrap();

    let is_read = widget.toggle_read(id).unwrap();
    assert!(is_read);
    assert!(widget.get_book(id).unwrap().is_read);

    // The stale entry is skipped on redisplay but remains stored.
    let report = widget.refresh_display();
    assert_eq!(report.attached, 0);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(widget.len(), 1);
}

#[test]
fn modal_submit_adds_book_and_closes() {
    let mut widget = new_widget();
    let mut modal = open_add_book_modal(widget.templates()).unwrap();
    assert!(modal.is_open());
    assert!(modal.markup().contains("add-book-form"));

    let form = FieldMap::book_fields("Dune", "Herbert", "412");
    let id = modal.submit(&mut widget, &form).unwrap();

    assert!(!modal.is_open());
    assert_eq!(widget.get_book(id).unwrap().title, "Dune");
    assert_eq!(widget.surface().len(), 1);
}

#[test]
fn modal_stays_open_on_failed_submit() {
    let mut widget = new_widget();
    let mut modal = open_add_book_modal(widget.templates()).unwrap();

    let mut form = FieldMap::new();
    form.set("title", "Dune");
    let err = modal.submit(&mut widget, &form).unwrap_err();
    assert!(matches!(err, WidgetError::Form(FormError::MissingField(_))));
    assert!(modal.is_open());
    assert!(widget.is_empty());

    // Retry with the corrected form goes through the same modal.
    let fixed = FieldMap::book_fields("Dune", "Herbert", "412");
    modal.submit(&mut widget, &fixed).unwrap();
    assert!(!modal.is_open());
    assert_eq!(widget.len(), 1);
}

#[test]
fn modal_cancel_leaves_library_untouched() {
    let widget = new_widget();
    let mut modal = open_add_book_modal(widget.templates()).unwrap();

    modal.cancel();

    assert!(!modal.is_open());
    assert!(widget.is_empty());
}

#[test]
fn missing_modal_template_is_surfaced() {
    let mut templates = StaticTemplates::new();
    templates.unregister(TEMPLATE_ADD_BOOK_MODAL);

    let err = open_add_book_modal(&templates).unwrap_err();
    assert_eq!(
        err,
        TemplateError::TemplateNotFound(TEMPLATE_ADD_BOOK_MODAL.to_string())
    );
}
