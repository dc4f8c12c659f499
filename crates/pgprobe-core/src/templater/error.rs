//! Failures while rendering a table template.

use thiserror::Error;

/// Why a table template could not be turned into code.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template does not parse.
    #[error("template syntax error: {0}")]
    SyntaxError(String),

    /// The template names something absent from `{ packageName, table }`,
    /// such as a misspelled field attribute.
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    /// A helper or filter rejected its input, e.g. an unknown target type or
    /// integer overflow in `add`.
    #[error("render error: {0}")]
    RenderError(String),
}

impl From<minijinja::Error> for TemplateError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::SyntaxError => Self::SyntaxError(err.to_string()),
            ErrorKind::UndefinedError => Self::UndefinedVariable(err.to_string()),
            _ => Self::RenderError(err.to_string()),
        }
    }
}
