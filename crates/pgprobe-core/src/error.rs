//! Error types for catalog probing and connection management.
//!
//! Every failure falls into one of three [`ErrorKind`]s. None of them is retried
//! internally; they propagate to the caller with the operation and, where one
//! applies, the table name attached.

use thiserror::Error;

/// Coarse category of a [`ProbeError`] for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The database could not be opened or a statement could not be prepared.
    Connection,
    /// Name resolution matched no visible relation.
    TableNotFound,
    /// Statement execution or row decoding failed.
    Query,
}

/// Error raised while probing the catalog.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The connection URL names a database without a prober implementation.
    #[error("unsupported database URL scheme: {0}")]
    UnsupportedDatabase(String),

    /// Opening the connection failed.
    #[error("failed to connect to database")]
    Connection(#[source] sqlx::Error),

    /// One of the catalog statements could not be prepared.
    #[error("failed to prepare {statement} statement")]
    Prepare {
        statement: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// The async runtime backing a blocking prober could not be started.
    #[error("failed to start probe runtime")]
    Runtime(#[source] std::io::Error),

    /// No visible relation matches the requested table name.
    #[error("table {0} not found")]
    TableNotFound(String),

    /// A prepared statement failed to execute or a row failed to decode.
    #[error("{operation} failed{}", table_suffix(.table))]
    Query {
        operation: &'static str,
        table: Option<String>,
        #[source]
        source: sqlx::Error,
    },
}

impl ProbeError {
    pub(crate) fn query(operation: &'static str, table: Option<&str>, source: sqlx::Error) -> Self {
        Self::Query {
            operation,
            table: table.map(str::to_owned),
            source,
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedDatabase(_)
            | Self::Connection(_)
            | Self::Prepare { .. }
            | Self::Runtime(_) => ErrorKind::Connection,
            Self::TableNotFound(_) => ErrorKind::TableNotFound,
            Self::Query { .. } => ErrorKind::Query,
        }
    }
}

fn table_suffix(table: &Option<String>) -> String {
    table
        .as_deref()
        .map(|t| format!(" for table {t}"))
        .unwrap_or_default()
}

/// Error raised by [`crate::ConnectionRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Another connection is already stored under this label.
    #[error("label {0} already exists")]
    LabelExists(String),

    /// The connection URL could not be turned into a pool.
    #[error("failed to open connection for label {label}")]
    Open {
        label: String,
        #[source]
        source: sqlx::Error,
    },
}
