//! Output formatting for the CLI tools.

use anyhow::{Context, Result};
use pgprobe_core::{Field, Relation, TargetLanguage};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Formats one field the way a Go struct member with a `db` tag reads.
///
/// Primary keys, unique indexes and plain indexes are annotated with the index
/// definition.
pub fn format_field_line(field: &Field, language: TargetLanguage) -> String {
    let annotation = if field.is_primary {
        format!(" [PrimaryKey] {}", field.index_definition)
    } else if field.is_unique {
        format!(" [Unique] {}", field.index_definition)
    } else if field.has_index() {
        format!(" [Index] {}", field.index_definition)
    } else {
        String::new()
    };

    format!(
        "{} {} `db:\"{}\"`{}",
        field.name,
        field.target_type.name_for(language),
        field.raw_name,
        annotation
    )
}

#[derive(Tabled)]
struct RelationRow {
    #[tabled(rename = "Schema")]
    schema: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Owner")]
    owner: String,
}

/// Renders relations as a psql-style table.
pub fn format_relations_table(relations: &[Relation]) -> String {
    let rows = relations.iter().map(|r| RelationRow {
        schema: r.schema.clone(),
        name: r.name.clone(),
        kind: r.kind.as_catalog_label(),
        owner: r.owner.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Pretty JSON for any serializable probe result.
pub fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Writes `content` to `path`, or to stdout with a trailing newline.
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, content)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
        if !content.ends_with('\n') {
            writeln!(stdout).context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgprobe_core::RelationKind;

    #[test]
    fn test_field_line_primary_key() {
        let field = Field::new(1, 20, "id").with_index(
            "CREATE UNIQUE INDEX musics_pkey ON public.musics USING btree (id)",
            true,
            true,
            true,
        );
        assert_eq!(
            format_field_line(&field, TargetLanguage::Go),
            "ID int64 `db:\"id\"` [PrimaryKey] CREATE UNIQUE INDEX musics_pkey ON public.musics USING btree (id)"
        );
    }

    #[test]
    fn test_field_line_plain_column() {
        let field = Field::new(4, 701, "rating");
        assert_eq!(
            format_field_line(&field, TargetLanguage::Rust),
            "Rating f64 `db:\"rating\"`"
        );
    }

    #[test]
    fn test_field_line_unique_and_index() {
        let unique = Field::new(2, 25, "slug").with_index(
            "CREATE UNIQUE INDEX musics_slug ON public.musics USING btree (slug)",
            false,
            true,
            true,
        );
        assert!(format_field_line(&unique, TargetLanguage::Go).contains(" [Unique] CREATE UNIQUE"));

        let indexed = Field::new(3, 25, "artist").with_index(
            "CREATE INDEX musics_artist ON public.musics USING btree (artist)",
            false,
            false,
            true,
        );
        assert!(format_field_line(&indexed, TargetLanguage::Go).ends_with(
            "`db:\"artist\"` [Index] CREATE INDEX musics_artist ON public.musics USING btree (artist)"
        ));
    }

    #[test]
    fn test_relations_table() {
        let relations = vec![Relation {
            schema: "public".to_string(),
            name: "musics".to_string(),
            kind: RelationKind::Table,
            owner: "postgres".to_string(),
        }];

        let out = format_relations_table(&relations);
        assert!(out.contains("Schema"));
        assert!(out.contains("Owner"));
        assert!(out.contains("musics"));
        assert!(out.contains("table"));
    }

    #[test]
    fn test_format_json_fields() {
        let fields = vec![Field::new(1, 20, "id")];
        let json = format_json(&fields).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "ID");
        assert_eq!(value[0]["targetType"], "int64");
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.rs");
        write_output(&Some(path.clone()), "struct Musics;").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "struct Musics;");
    }
}
