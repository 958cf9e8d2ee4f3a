//! Connection opening and preparation for the reading-log store.
//!
//! # Responsibility
//! - Open the reading-log database file, or an in-memory stand-in.
//! - Set connection pragmas and run pending schema migrations.
//!
//! # Invariants
//! - Callers only ever receive fully migrated connections.
//! - A connection that fails preparation is dropped, not returned.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens the reading-log database file and applies all pending migrations.
///
/// Emits `db_open` log events carrying duration and outcome.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    prepared(|| Connection::open(path), "file")
}

/// Opens an in-memory database with the same schema as [`open_db`].
///
/// Used by tests and anywhere a throwaway store is enough.
pub fn open_db_in_memory() -> DbResult<Connection> {
    prepared(Connection::open_in_memory, "memory")
}

fn prepared(
    open: impl FnOnce() -> rusqlite::Result<Connection>,
    target: &str,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start target={target}");

    let mut conn = match open() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error target={target} duration_ms={} reason=open_failed error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }
    };

    match prepare_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok target={target} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error target={target} duration_ms={} reason=prepare_failed error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}

fn prepare_connection(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}
