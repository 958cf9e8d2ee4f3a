//! Book repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable insert/list APIs over the `books` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `NewBook::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `list_all` returns rows ordered by ascending id (insertion order).

use crate::db::{migrations, DbError};
use crate::model::book::{Book, BookId, BookValidationError, NewBook, RATING_MAX, RATING_MIN};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BOOK_SELECT_SQL: &str = "SELECT
    id,
    title,
    author,
    read_date,
    rating,
    notes
FROM books";

const DB_DATE_FORMAT: &str = "%Y-%m-%d";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for book persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(BookValidationError),
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: expected schema version {expected_version}, found {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_)
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for book persistence.
pub trait BookRepository {
    /// Inserts one validated draft and returns its storage-assigned id.
    fn insert(&self, draft: &NewBook) -> RepoResult<BookId>;
    /// Lists every stored book in insertion order.
    fn list_all(&self) -> RepoResult<Vec<Book>>;
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn insert(&self, draft: &NewBook) -> RepoResult<BookId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO books (
                title,
                author,
                read_date,
                rating,
                notes
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                draft.title.trim(),
                draft.author.as_deref(),
                draft.read_date.map(date_to_db),
                draft.rating.map(i64::from),
                draft.notes.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_all(&self) -> RepoResult<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut books = Vec::new();
        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    let id: BookId = row.get("id")?;
    let title = parse_db_title(row.get("title")?)?;

    let read_date = match row.get::<_, Option<String>>("read_date")? {
        Some(value) => Some(parse_db_date(&value)?),
        None => None,
    };

    let rating = match row.get::<_, Option<i64>>("rating")? {
        Some(value) => Some(parse_db_rating(value)?),
        None => None,
    };

    Ok(Book {
        id,
        title,
        author: row.get("author")?,
        read_date,
        rating,
        notes: row.get("notes")?,
    })
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(DB_DATE_FORMAT).to_string()
}

fn parse_db_title(value: String) -> RepoResult<String> {
    if value.trim().is_empty() {
        return Err(RepoError::InvalidData(
            "empty title value in books.title".to_string(),
        ));
    }
    Ok(value)
}

fn parse_db_date(value: &str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DB_DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!("invalid date value `{value}` in books.read_date"))
    })
}

fn parse_db_rating(value: i64) -> RepoResult<u8> {
    if value < i64::from(RATING_MIN) || value > i64::from(RATING_MAX) {
        return Err(RepoError::InvalidData(format!(
            "invalid rating value `{value}` in books.rating"
        )));
    }
    Ok(value as u8)
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = migrations::latest_version();
    let actual_version: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "books")? {
        return Err(RepoError::MissingRequiredTable("books"));
    }

    for column in ["id", "title", "author", "read_date", "rating", "notes"] {
        if !table_has_column(conn, "books", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "books",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
