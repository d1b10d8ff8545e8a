//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive one full add/toggle/delete interaction cycle through the public
//!   widget API against the in-process surface.
//! - Keep output deterministic for quick local sanity checks.

use bookshelf_core::{
    open_add_book_modal, BookshelfWidget, FieldMap, PanelSurface, StaticTemplates,
};

fn main() {
    println!("bookshelf_core version={}", bookshelf_core::core_version());

    let mut widget = BookshelfWidget::new(PanelSurface::new(), StaticTemplates::new());

    let mut modal = match open_add_book_modal(widget.templates()) {
        Ok(modal) => modal,
        Err(err) => {
            eprintln!("modal failed to load: {err}");
            std::process::exit(1);
        }
    };

    let form = FieldMap::book_fields("Dune", "Herbert", "412");
    let id = match modal.submit(&mut widget, &form) {
        Ok(id) => id,
        Err(err) => {
            eprintln!("book submission failed: {err}");
            std::process::exit(1);
        }
    };
    println!(
        "added: store={} displayed={}",
        widget.len(),
        widget.surface().len()
    );

    match widget.toggle_read(id) {
        Ok(is_read) => println!("toggled: is_read={is_read}"),
        Err(err) => eprintln!("toggle failed: {err}"),
    }
    if let Some(book) = widget.get_book(id) {
        println!("info: {}", book.info());
    }

    match widget.delete_book(id) {
        Ok(book) => println!(
            "deleted `{}`: store={} displayed={}",
            book.title,
            widget.len(),
            widget.surface().len()
        ),
        Err(err) => eprintln!("delete failed: {err}"),
    }
}
