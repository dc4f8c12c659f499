//! Catalog statements prepared by [`super::PgProber`].
//!
//! Column order, filters and joins are relied upon by existing templates and
//! must not change.

/// Lists every visible relation outside the system schemas.
pub(crate) const SELECT_RELATIONS: &str = r#"
		SELECT n.nspname as "Schema",
		  c.relname as "Name",
		  CASE c.relkind WHEN 'r' THEN 'table' WHEN 'v' THEN 'view' WHEN 'm' 
		  	THEN 'materialized view' WHEN 'i' THEN 'index' WHEN 'S' THEN 'sequence' WHEN 's' 
			THEN 'special' WHEN 'f' THEN 'foreign table' END as "Type",
		  pg_catalog.pg_get_userbyid(c.relowner) as "Owner"
		FROM pg_catalog.pg_class c
		     LEFT JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace
		WHERE c.relkind IN ('r','v','m','S','f','')
		      AND n.nspname <> 'pg_catalog'
		      AND n.nspname <> 'information_schema'
		      AND n.nspname !~ '^pg_toast'
		  AND pg_catalog.pg_table_is_visible(c.oid)
		ORDER BY 1,2;
	"#;

/// Resolves an anchored name pattern (`$1`) to a relation OID.
pub(crate) const SELECT_TABLE_RELATION: &str = r#"
		SELECT 
		  c.oid,
		  n.nspname,
		  c.relname
		FROM pg_catalog.pg_class c
		     LEFT JOIN pg_catalog.pg_namespace n ON n.oid = c.relnamespace
		WHERE c.relname ~ $1
		  AND pg_catalog.pg_table_is_visible(c.oid)
		ORDER BY 2, 3;
	"#;

/// Fetches live columns of relation `$1` left-joined with their indexes.
pub(crate) const SELECT_FIELD_PROPS: &str = r#"
		SELECT
		  a.attnum,
		  a.atttypid,
		  a.attname,
		  pg_catalog.format_type(a.atttypid, a.atttypmod),
		  a.attnotnull,
		  COALESCE(i.indisprimary, false) indisprimary,
		  COALESCE(i.indisunique, false) indisunique,
		  COALESCE(i.indisvalid, false) indisvalid,
		  COALESCE(pg_catalog.pg_get_indexdef(i.indexrelid, 0, true), '') pg_get_indexdef
		FROM pg_catalog.pg_attribute a
		  LEFT JOIN pg_catalog.pg_index i ON (i.indrelid = a.attrelid AND a.attnum = ANY (i.indkey))
		WHERE a.attrelid = $1 AND a.attnum > 0 AND NOT a.attisdropped
		ORDER BY a.attnum;
	"#;

/// Wraps a name so the regex match in [`SELECT_TABLE_RELATION`] covers the
/// whole relation name.
pub(crate) fn anchored_name_pattern(table_name: &str) -> String {
    format!("^({table_name})$")
}
