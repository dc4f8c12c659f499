//! Catalog probing against a live database.
//!
//! [`PgProber`] is the async implementation on top of a SQLx pool.
//! [`BlockingProber`] wraps it behind the synchronous [`Prober`] trait for
//! callers that do not run an async runtime of their own.

mod blocking;
mod postgres;
mod queries;

pub use blocking::BlockingProber;
pub use postgres::PgProber;

use crate::assemble::assemble;
use crate::error::ProbeError;
use crate::types::{Field, Relation, Table};
use std::time::Duration;

/// Database type inferred from connection URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    Postgres,
    Mysql,
    Sqlite,
}

impl DatabaseType {
    /// Infer database type from a connection URL.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else if url.starts_with("mysql://") || url.starts_with("mariadb://") {
            Some(Self::Mysql)
        } else if url.starts_with("sqlite://") || url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else {
            None
        }
    }
}

/// Synchronous access to a database catalog.
///
/// Each call is an independent sequence of read-only queries and returns
/// freshly built values; nothing is cached between calls.
pub trait Prober {
    /// Lists the relations visible in the current search path, ordered by
    /// schema then name.
    fn list_relations(&self) -> Result<Vec<Relation>, ProbeError>;

    /// Fetches the live columns of `table_name` in ordinal order.
    ///
    /// `table_name` must be an exact relation name. Returns
    /// [`ProbeError::TableNotFound`] when no visible relation matches.
    fn fetch_fields(&self, table_name: &str) -> Result<Vec<Field>, ProbeError>;

    /// Fetches the columns of `table_name` and assembles them into a [`Table`].
    fn fetch_table(&self, table_name: &str) -> Result<Table, ProbeError> {
        let fields = self.fetch_fields(table_name)?;
        Ok(assemble(table_name, fields))
    }
}

/// Connection-layer settings for a prober.
#[derive(Debug, Clone)]
pub struct ProberOptions {
    /// Pool size. One connection is enough for sequential probes.
    pub max_connections: u32,
    /// How long to wait for a connection before failing.
    pub acquire_timeout: Duration,
    /// Run name resolution and field fetch inside one repeatable-read,
    /// read-only transaction instead of two independent statements.
    pub snapshot_reads: bool,
}

impl Default for ProberOptions {
    fn default() -> Self {
        Self {
            max_connections: 1,
            acquire_timeout: Duration::from_secs(10),
            snapshot_reads: false,
        }
    }
}

/// Collapses consecutive rows sharing an ordinal into a single field.
///
/// The field query yields one row per (column, index) pair, so a column in
/// several indexes shows up several times.
pub(crate) fn collapse_index_rows(rows: Vec<Field>) -> Vec<Field> {
    let mut fields: Vec<Field> = Vec::with_capacity(rows.len());
    for row in rows {
        match fields.last_mut() {
            Some(last) if last.ordinal == row.ordinal => last.merge_index_row(row),
            _ => fields.push(row),
        }
    }
    fields
}
