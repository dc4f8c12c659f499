//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use pgprobe_core::TargetLanguage;
use std::path::PathBuf;

/// Render a code template against a live PostgreSQL table
#[derive(Parser, Debug)]
#[command(name = "pgprobe-codegen")]
#[command(about = "Generate code for a PostgreSQL table from a template", long_about = None)]
#[command(version)]
pub struct CodegenArgs {
    /// Database connection URL (e.g., postgres://user@host/db)
    #[arg(value_name = "CONNECTION")]
    pub connection: String,

    /// Table to introspect
    #[arg(value_name = "TABLE")]
    pub table: String,

    /// MiniJinja template file
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Package name exposed to the template (defaults to the table name)
    #[arg(long, value_name = "NAME")]
    pub package_name: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Resolve and read the table inside one read-only snapshot
    #[arg(long)]
    pub snapshot: bool,
}

impl CodegenArgs {
    pub fn package_name(&self) -> &str {
        self.package_name.as_deref().unwrap_or(&self.table)
    }
}

/// Print the columns of a PostgreSQL table, or list visible relations
#[derive(Parser, Debug)]
#[command(name = "pgprobe-fields")]
#[command(about = "Describe PostgreSQL table columns", long_about = None)]
#[command(version)]
pub struct FieldsArgs {
    /// Database connection URL (e.g., postgres://user@host/db)
    #[arg(value_name = "CONNECTION")]
    pub connection: String,

    /// Table to describe (lists relations if omitted)
    #[arg(value_name = "TABLE")]
    pub table: Option<String>,

    /// Language used for type names
    #[arg(short, long, default_value = "go", value_enum)]
    pub language: LanguageArg,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: FormatArg,

    /// Resolve and read the table inside one read-only snapshot
    #[arg(long)]
    pub snapshot: bool,
}

/// Target language options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LanguageArg {
    Rust,
    Go,
}

impl From<LanguageArg> for TargetLanguage {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Rust => TargetLanguage::Rust,
            LanguageArg::Go => TargetLanguage::Go,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Log lines for fields, a table for relations
    Text,
    /// JSON on stdout
    Json,
}
