//! Interactive prompts for the menu loop and book entry.
//!
//! # Responsibility
//! - Drive the main menu selection.
//! - Collect and validate book fields from the operator.
//!
//! # Invariants
//! - A blank title aborts the add flow and returns to the menu.
//! - Date and rating prompts re-ask until input parses or is left blank.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use shelflog_core::{
    parse_optional_text, parse_rating, parse_read_date, parse_title, NewBook, RATING_MAX,
    RATING_MIN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Quit,
}

pub fn main_menu() -> anyhow::Result<MenuChoice> {
    let theme = ColorfulTheme::default();
    let selection = Select::with_theme(&theme)
        .with_prompt("What would you like to do?")
        .items(&["Add a book", "List books", "Quit"])
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => MenuChoice::Add,
        1 => MenuChoice::List,
        _ => MenuChoice::Quit,
    })
}

/// Collects one book draft from interactive prompts.
///
/// Returns `Ok(None)` when the operator aborts by leaving the title blank.
pub fn collect_new_book() -> anyhow::Result<Option<NewBook>> {
    let theme = ColorfulTheme::default();

    let title_input = Input::<String>::with_theme(&theme)
        .with_prompt("Title")
        .allow_empty(true)
        .interact_text()?;
    let title = match parse_title(&title_input) {
        Ok(title) => title,
        Err(err) => {
            eprintln!("{err}; returning to the menu");
            return Ok(None);
        }
    };

    let author_input = Input::<String>::with_theme(&theme)
        .with_prompt("Author (blank to skip)")
        .allow_empty(true)
        .interact_text()?;

    let read_date = loop {
        let raw = Input::<String>::with_theme(&theme)
            .with_prompt("Read date YYYY-MM-DD (blank to skip)")
            .allow_empty(true)
            .interact_text()?;
        match parse_read_date(&raw) {
            Ok(value) => break value,
            Err(err) => eprintln!("{err}"),
        }
    };

    let rating = loop {
        let raw = Input::<String>::with_theme(&theme)
            .with_prompt(format!("Rating {RATING_MIN}-{RATING_MAX} (blank to skip)"))
            .allow_empty(true)
            .interact_text()?;
        match parse_rating(&raw) {
            Ok(value) => break value,
            Err(err) => eprintln!("{err}"),
        }
    };

    let notes_input = Input::<String>::with_theme(&theme)
        .with_prompt("Notes (blank to skip)")
        .allow_empty(true)
        .interact_text()?;

    let mut draft = NewBook::new(title);
    draft.author = parse_optional_text(&author_input);
    draft.read_date = read_date;
    draft.rating = rating;
    draft.notes = parse_optional_text(&notes_input);
    Ok(Some(draft))
}
