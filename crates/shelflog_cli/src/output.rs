//! Fixed-width rendering for the reading-log list.
//!
//! # Responsibility
//! - Render stored books as an aligned table.
//! - Keep long titles, authors, and notes within their display budgets.
//!
//! # Invariants
//! - Truncated values end with `...` and never exceed their column budget.
//! - Absent author/date/rating render as `N/A`; absent notes render blank.

use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use shelflog_core::Book;

const TITLE_MAX_CHARS: usize = 30;
const AUTHOR_MAX_CHARS: usize = 20;
const NOTES_MAX_CHARS: usize = 50;
const MISSING_FIELD: &str = "N/A";

const COLUMNS: [&str; 6] = ["ID", "Title", "Author", "Read date", "Rating", "Notes"];

pub fn print_book_list(books: &[Book]) {
    if books.is_empty() {
        println!("No books recorded yet.");
        return;
    }

    println!("{}", render_book_table(books));
}

fn render_book_table(books: &[Book]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = COLUMNS
        .iter()
        .map(|column| Cell::new(column).add_attribute(Attribute::Dim))
        .collect();
    table.set_header(header_cells);

    for index in 0..COLUMNS.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_padding((0, 2));
        }
    }

    for book in books {
        table.add_row(vec![
            book.id.to_string(),
            truncate(&book.title, TITLE_MAX_CHARS),
            format_author(book.author.as_deref()),
            format_read_date(book.read_date),
            format_rating(book.rating),
            format_notes(book.notes.as_deref()),
        ]);
    }

    table.to_string()
}

fn format_author(author: Option<&str>) -> String {
    match author {
        Some(value) => truncate(value, AUTHOR_MAX_CHARS),
        None => MISSING_FIELD.to_string(),
    }
}

fn format_read_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(value) => value.to_string(),
        None => MISSING_FIELD.to_string(),
    }
}

fn format_rating(rating: Option<u8>) -> String {
    match rating {
        Some(value) => value.to_string(),
        None => MISSING_FIELD.to_string(),
    }
}

fn format_notes(notes: Option<&str>) -> String {
    match notes {
        Some(value) => truncate(value, NOTES_MAX_CHARS),
        None => String::new(),
    }
}

/// Caps `value` at `max_chars` characters, marking cuts with `...`.
fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }

    let mut shortened: String = value.chars().take(max_chars - 3).collect();
    shortened.push_str("...");
    shortened
}
