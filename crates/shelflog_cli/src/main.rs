//! Interactive reading-log CLI entry point.
//!
//! # Responsibility
//! - Wire configuration, logging, and storage into the menu loop.
//! - Keep per-operation failures on screen without exiting the loop.

mod config;
mod output;
mod prompt;

use anyhow::Context;
use config::Config;
use shelflog_core::db::open_db;
use shelflog_core::{default_log_level, init_logging, BookService, SqliteBookRepository};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    // A broken log setup downgrades to console-only operation.
    let log_level = config
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    if let Err(message) = init_logging(&log_level, &config.log_dir()) {
        eprintln!("warning: file logging disabled: {message}");
    }

    let database_path = config.database_path();
    let conn = open_db(&database_path).with_context(|| {
        format!(
            "failed to open reading log database at `{}`",
            database_path.display()
        )
    })?;
    let repo = SqliteBookRepository::try_new(&conn).context("reading log database is not ready")?;
    let service = BookService::new(repo);

    println!("shelflog v{}", shelflog_core::VERSION);
    println!("Reading log: {}", database_path.display());

    loop {
        println!();
        match prompt::main_menu()? {
            prompt::MenuChoice::Add => {
                if let Some(draft) = prompt::collect_new_book()? {
                    match service.add_book(&draft) {
                        Ok(id) => println!("Recorded `{}` as entry {id}.", draft.title),
                        Err(err) => eprintln!("error: could not save the book: {err}"),
                    }
                }
            }
            prompt::MenuChoice::List => match service.list_books() {
                Ok(books) => output::print_book_list(&books),
                Err(err) => eprintln!("error: could not load the reading log: {err}"),
            },
            prompt::MenuChoice::Quit => break,
        }
    }

    println!("Goodbye.");
    Ok(())
}
