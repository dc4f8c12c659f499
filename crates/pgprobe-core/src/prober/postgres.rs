//! SQLx-backed catalog prober for PostgreSQL.

use sqlx::postgres::types::Oid;
use sqlx::postgres::{PgConnection, PgPool, PgPoolOptions, PgRow, PgStatement};
use sqlx::{Executor, Row, Statement};

use super::queries::{
    anchored_name_pattern, SELECT_FIELD_PROPS, SELECT_RELATIONS, SELECT_TABLE_RELATION,
};
use super::{collapse_index_rows, DatabaseType, ProberOptions};
use crate::assemble::assemble;
use crate::error::ProbeError;
use crate::types::{Field, Relation, RelationKind, Table};

/// Catalog prober holding a pool and the three prepared catalog statements.
///
/// Statements are prepared once in [`PgProber::from_pool`] and reused by every
/// probe.
#[derive(Debug)]
pub struct PgProber {
    pool: PgPool,
    options: ProberOptions,
    select_relations: PgStatement<'static>,
    select_table_relation: PgStatement<'static>,
    select_field_props: PgStatement<'static>,
}

impl PgProber {
    /// Opens a pool for `url` and prepares the catalog statements.
    ///
    /// # Errors
    /// Returns a connection-kind error if the URL is not a PostgreSQL URL, the
    /// connection fails, or a statement cannot be prepared.
    pub async fn connect(url: &str, options: ProberOptions) -> Result<Self, ProbeError> {
        if DatabaseType::from_url(url) != Some(DatabaseType::Postgres) {
            let scheme = url.split(':').next().unwrap_or_default();
            return Err(ProbeError::UnsupportedDatabase(scheme.to_string()));
        }

        let pool = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(options.acquire_timeout)
            .connect(url)
            .await
            .map_err(ProbeError::Connection)?;

        Self::from_pool(pool, options).await
    }

    /// Wraps an existing pool, e.g. one taken from a
    /// [`crate::ConnectionRegistry`].
    pub async fn from_pool(pool: PgPool, options: ProberOptions) -> Result<Self, ProbeError> {
        let select_relations = prepare(&pool, "relation listing", SELECT_RELATIONS).await?;
        let select_table_relation =
            prepare(&pool, "table resolution", SELECT_TABLE_RELATION).await?;
        let select_field_props = prepare(&pool, "field props", SELECT_FIELD_PROPS).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            snapshot_reads = options.snapshot_reads,
            "prepared catalog statements"
        );

        Ok(Self {
            pool,
            options,
            select_relations,
            select_table_relation,
            select_field_props,
        })
    }

    /// The underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Lists visible relations outside the system schemas.
    pub async fn list_relations(&self) -> Result<Vec<Relation>, ProbeError> {
        let rows = self
            .select_relations
            .query()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ProbeError::query("relation probe", None, e))?;

        rows.iter()
            .map(decode_relation)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ProbeError::query("relation decode", None, e))
    }

    /// Resolves `table_name` and fetches its columns in ordinal order.
    pub async fn fetch_fields(&self, table_name: &str) -> Result<Vec<Field>, ProbeError> {
        if !self.options.snapshot_reads {
            let mut conn = self
                .pool
                .acquire()
                .await
                .map_err(|e| ProbeError::query("connection acquire", Some(table_name), e))?;
            return self.fetch_fields_on(&mut conn, table_name).await;
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ProbeError::query("snapshot begin", Some(table_name), e))?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| ProbeError::query("snapshot begin", Some(table_name), e))?;

        let fields = self.fetch_fields_on(&mut tx, table_name).await?;

        tx.commit()
            .await
            .map_err(|e| ProbeError::query("snapshot commit", Some(table_name), e))?;
        Ok(fields)
    }

    /// Fetches the columns of `table_name` and assembles them into a [`Table`].
    pub async fn fetch_table(&self, table_name: &str) -> Result<Table, ProbeError> {
        let fields = self.fetch_fields(table_name).await?;
        Ok(assemble(table_name, fields))
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn fetch_fields_on(
        &self,
        conn: &mut PgConnection,
        table_name: &str,
    ) -> Result<Vec<Field>, ProbeError> {
        let relation = self
            .select_table_relation
            .query()
            .bind(anchored_name_pattern(table_name))
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| ProbeError::query("table probe", Some(table_name), e))?
            .ok_or_else(|| ProbeError::TableNotFound(table_name.to_string()))?;

        let oid: Oid = relation
            .try_get("oid")
            .map_err(|e| ProbeError::query("table probe", Some(table_name), e))?;

        let rows = self
            .select_field_props
            .query()
            .bind(oid)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| ProbeError::query("fields probe", Some(table_name), e))?;

        let fields = rows
            .iter()
            .map(decode_field)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ProbeError::query("field decode", Some(table_name), e))?;

        let fields = collapse_index_rows(fields);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            table = %table_name,
            oid = oid.0,
            fields = fields.len(),
            "probed table fields"
        );

        Ok(fields)
    }
}

async fn prepare(
    pool: &PgPool,
    statement: &'static str,
    sql: &'static str,
) -> Result<PgStatement<'static>, ProbeError> {
    pool.prepare(sql)
        .await
        .map_err(|source| ProbeError::Prepare { statement, source })
}

fn decode_relation(row: &PgRow) -> Result<Relation, sqlx::Error> {
    let label: Option<String> = row.try_get("Type")?;
    let kind = relation_kind(label.as_deref())?;

    Ok(Relation {
        schema: row.try_get("Schema")?,
        name: row.try_get("Name")?,
        kind,
        owner: row.try_get("Owner")?,
    })
}

/// The `Type` column is NULL for relkinds the listing query has no label for.
fn relation_kind(label: Option<&str>) -> Result<RelationKind, sqlx::Error> {
    label
        .and_then(RelationKind::from_catalog_label)
        .ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "Type".to_string(),
            source: format!("unknown relation kind {label:?}").into(),
        })
}

fn decode_field(row: &PgRow) -> Result<Field, sqlx::Error> {
    let ordinal: i16 = row.try_get("attnum")?;
    let type_id: Oid = row.try_get("atttypid")?;
    let raw_name: String = row.try_get("attname")?;
    let type_display: String = row.try_get("format_type")?;
    let not_null: bool = row.try_get("attnotnull")?;
    let is_primary: bool = row.try_get("indisprimary")?;
    let is_unique: bool = row.try_get("indisunique")?;
    let is_valid: bool = row.try_get("indisvalid")?;
    let index_definition: String = row.try_get("pg_get_indexdef")?;

    Ok(Field::new(i64::from(ordinal), type_id.0, raw_name)
        .with_type_display(type_display)
        .with_nullable(!not_null)
        .with_index(index_definition, is_primary, is_unique, is_valid))
}
