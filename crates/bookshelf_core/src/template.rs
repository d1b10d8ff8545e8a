//! Templating collaborator contract and built-in markup source.
//!
//! # Responsibility
//! - Define how card and modal markup is obtained (`TemplateSource`).
//! - Render book fields into card markup via placeholder substitution.
//!
//! # Invariants
//! - Template failures are surfaced as `Result`, never swallowed: a caller
//!   can always tell that a card or modal was not materialized.
//! - Rendering never fails once markup is loaded; unknown placeholders are
//!   preserved verbatim.

use crate::model::book::Book;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([a-z_]+)\}\}").expect("valid placeholder regex"));

/// Template id for one book card.
pub const TEMPLATE_BOOK_CARD: &str = "book-card";
/// Template id for the add-book modal.
pub const TEMPLATE_ADD_BOOK_MODAL: &str = "add-book-modal";

const BOOK_CARD_MARKUP: &str = r#"<div class="book-card">
  <h3 id="book-title">{{title}}</h3>
  <p id="book-author">{{author}}</p>
  <p id="book-pagecount">Pages: {{pages}}</p>
  <button id="toggle-read"><img src="./assets/svg/{{read_icon}}" alt="toggle read" /><span id="book-read-text">{{read_status}}</span></button>
  <button id="delete-book">Delete</button>
</div>"#;

const ADD_BOOK_MODAL_MARKUP: &str = r#"<dialog id="add-book-prompt">
  <form id="add-book-form" method="dialog">
    <label>Title <input name="title" required /></label>
    <label>Author <input name="author" required /></label>
    <label>Pages <input name="pages" type="number" min="1" required /></label>
    <button id="modal-submit">Add book</button>
    <button id="modal-cancel" formnovalidate>Cancel</button>
  </form>
</dialog>"#;

/// Templating errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// No markup is registered under the requested id.
    TemplateNotFound(String),
    /// Markup is registered but blank, which can never render a card.
    EmptyTemplate(String),
}

impl Display for TemplateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemplateNotFound(id) => write!(f, "template not found: `{id}`"),
            Self::EmptyTemplate(id) => write!(f, "template is empty: `{id}`"),
        }
    }
}

impl Error for TemplateError {}

/// Collaborator that produces markup for a template id, or fails.
///
/// The core does not care about markup format; it only needs a renderable
/// unit or an error it can surface to the interaction layer.
pub trait TemplateSource {
    fn load(&self, template_id: &str) -> Result<String, TemplateError>;
}

/// Built-in template source carrying the card and modal markup.
///
/// Hosts that fetch markup from elsewhere implement `TemplateSource`
/// themselves; `StaticTemplates` is the zero-setup default and lets tests
/// register replacements.
#[derive(Debug, Clone)]
pub struct StaticTemplates {
    templates: HashMap<String, String>,
}

impl Default for StaticTemplates {
    fn default() -> Self {
        let mut templates = HashMap::new();
        templates.insert(TEMPLATE_BOOK_CARD.to_string(), BOOK_CARD_MARKUP.to_string());
        templates.insert(
            TEMPLATE_ADD_BOOK_MODAL.to_string(),
            ADD_BOOK_MODAL_MARKUP.to_string(),
        );
        Self { templates }
    }
}

impl StaticTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or replaces the markup for a template id.
    pub fn register(&mut self, template_id: impl Into<String>, markup: impl Into<String>) {
        self.templates.insert(template_id.into(), markup.into());
    }

    /// Drops a template id, making subsequent loads fail.
    pub fn unregister(&mut self, template_id: &str) {
        self.templates.remove(template_id);
    }
}

impl TemplateSource for StaticTemplates {
    fn load(&self, template_id: &str) -> Result<String, TemplateError> {
        let markup = self
            .templates
            .get(template_id)
            .ok_or_else(|| TemplateError::TemplateNotFound(template_id.to_string()))?;
        if markup.trim().is_empty() {
            return Err(TemplateError::EmptyTemplate(template_id.to_string()));
        }
        Ok(markup.clone())
    }
}

/// Renders one book into card markup loaded from `TEMPLATE_BOOK_CARD`.
///
/// Substituted placeholders: `{{title}}`, `{{author}}`, `{{pages}}`,
/// `{{read_status}}` and `{{read_icon}}`. The read status text is `Read`
/// for a read book and empty otherwise, matching the card's toggle label.
pub fn render_book_card<T: TemplateSource>(
    templates: &T,
    book: &Book,
) -> Result<String, TemplateError> {
    let markup = templates.load(TEMPLATE_BOOK_CARD)?;
    Ok(fill_placeholders(&markup, book))
}

fn fill_placeholders(markup: &str, book: &Book) -> String {
    PLACEHOLDER_RE
        .replace_all(markup, |caps: &Captures<'_>| match &caps[1] {
            "title" => book.title.clone(),
            "author" => book.author.clone(),
            "pages" => book.pages.to_string(),
            "read_status" => if book.is_read { "Read" } else { "" }.to_string(),
            "read_icon" => if book.is_read {
                "eye.svg"
            } else {
                "eye-disabled.svg"
            }
            .to_string(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::{
        render_book_card, StaticTemplates, TemplateError, TemplateSource, TEMPLATE_ADD_BOOK_MODAL,
        TEMPLATE_BOOK_CARD,
    };
    use crate::model::book::Book;

    #[test]
    fn built_in_templates_load() {
        let templates = StaticTemplates::new();
        assert!(templates.load(TEMPLATE_BOOK_CARD).is_ok());
        assert!(templates.load(TEMPLATE_ADD_BOOK_MODAL).is_ok());
    }

    #[test]
    fn missing_template_is_surfaced() {
        let templates = StaticTemplates::new();
        let err = templates
            .load("book-shelf-footer")
            .expect_err("unknown id must fail");
        assert_eq!(
            err,
            TemplateError::TemplateNotFound("book-shelf-footer".to_string())
        );
    }

    #[test]
    fn blank_template_is_rejected() {
        let mut templates = StaticTemplates::new();
        templates.register(TEMPLATE_BOOK_CARD, "   \n");
        let err = templates
            .load(TEMPLATE_BOOK_CARD)
            .expect_err("blank markup must fail");
        assert_eq!(
            err,
            TemplateError::EmptyTemplate(TEMPLATE_BOOK_CARD.to_string())
        );
    }

    #[test]
    fn card_render_substitutes_book_fields() {
        let templates = StaticTemplates::new();
        let mut book = Book::new("Dune", "Herbert", 412);

        let unread = render_book_card(&templates, &book).expect("unread render");
        assert!(unread.contains("Dune"));
        assert!(unread.contains("Herbert"));
        assert!(unread.contains("Pages: 412"));
        assert!(unread.contains("eye-disabled.svg"));

        book.toggle_read();
        let read = render_book_card(&templates, &book).expect("read render");
        assert!(read.contains(">Read<"));
        assert!(read.contains("eye.svg"));
    }

    #[test]
    fn unknown_placeholders_are_preserved() {
        let mut templates = StaticTemplates::new();
        templates.register(TEMPLATE_BOOK_CARD, "{{title}} {{shelf_row}}");
        let book = Book::new("Dune", "Herbert", 412);

        let markup = render_book_card(&templates, &book).expect("render");
        assert_eq!(markup, "Dune {{shelf_row}}");
    }
}
