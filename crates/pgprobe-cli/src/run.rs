//! Command bodies for the two binaries.
//!
//! The probing steps are generic over [`Prober`] so they can run against a
//! live database or an in-memory fake.

use anyhow::{Context, Result};
use pgprobe_core::{
    render_table, BlockingProber, Prober, ProberOptions, RenderContext, TargetLanguage,
};
use std::fs;

use crate::cli::{CodegenArgs, FieldsArgs, FormatArg};
use crate::output::{format_field_line, format_json, format_relations_table, write_output};

/// True when the authority part of a connection URL carries a user or password.
pub fn has_embedded_credentials(url: &str) -> bool {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest.split(['/', '?']).next().unwrap_or_default();
    authority.contains('@')
}

/// Logs a warning when `url` embeds credentials.
pub fn warn_on_credentials(url: &str) {
    if has_embedded_credentials(url) {
        tracing::warn!(
            "database credentials in the connection URL may be logged in shell history; \
             consider PGPASSWORD or a .pgpass file instead"
        );
    }
}

fn prober_options(snapshot: bool) -> ProberOptions {
    ProberOptions {
        snapshot_reads: snapshot,
        ..ProberOptions::default()
    }
}

/// Probes `table` and renders it through `template`.
pub fn generate(
    prober: &impl Prober,
    table: &str,
    template: &str,
    package_name: &str,
) -> Result<String> {
    let table = prober
        .fetch_table(table)
        .with_context(|| format!("Failed to probe table {table}"))?;
    tracing::debug!(
        table = %table.name,
        fields = table.fields.len(),
        primary_keys = table.primary_keys.len(),
        "table probed"
    );

    let context = RenderContext::new(package_name, table);
    render_table(template, &context).context("Failed to render template")
}

/// Probes `table` and formats one line per field.
pub fn describe_fields(
    prober: &impl Prober,
    table: &str,
    language: TargetLanguage,
) -> Result<Vec<String>> {
    let fields = prober
        .fetch_fields(table)
        .with_context(|| format!("Failed to probe table {table}"))?;
    Ok(fields
        .iter()
        .map(|field| format_field_line(field, language))
        .collect())
}

/// Runs `pgprobe-codegen`.
pub fn run_codegen(args: &CodegenArgs) -> Result<()> {
    let template = fs::read_to_string(&args.template)
        .with_context(|| format!("Failed to read template {}", args.template.display()))?;

    warn_on_credentials(&args.connection);
    let prober = BlockingProber::connect(&args.connection, prober_options(args.snapshot))
        .context("Failed to connect to database")?;

    let code = generate(&prober, &args.table, &template, args.package_name())?;
    write_output(&args.output, &code)?;

    if let Some(path) = &args.output {
        tracing::info!(table = %args.table, path = %path.display(), "code written");
    }
    Ok(())
}

/// Runs `pgprobe-fields`.
pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    warn_on_credentials(&args.connection);
    let prober = BlockingProber::connect(&args.connection, prober_options(args.snapshot))
        .context("Failed to connect to database")?;

    match (&args.table, args.format) {
        (Some(table), FormatArg::Text) => {
            for line in describe_fields(&prober, table, args.language.into())? {
                tracing::info!("{line}");
            }
        }
        (Some(table), FormatArg::Json) => {
            let fields = prober
                .fetch_fields(table)
                .with_context(|| format!("Failed to probe table {table}"))?;
            write_output(&None, &format_json(&fields)?)?;
        }
        (None, format) => {
            let relations = prober
                .list_relations()
                .context("Failed to list relations")?;
            let out = match format {
                FormatArg::Text => format_relations_table(&relations),
                FormatArg::Json => format_json(&relations)?,
            };
            write_output(&None, &out)?;
        }
    }
    Ok(())
}
