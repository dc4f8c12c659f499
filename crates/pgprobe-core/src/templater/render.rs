//! MiniJinja wrapper for code rendering.

use minijinja::{Environment, Error, ErrorKind, UndefinedBehavior};

use super::error::TemplateError;
use super::RenderContext;
use crate::naming::normalize_identifier;
use crate::types::{TargetLanguage, TargetType};

/// Recursion limit for template rendering, below MiniJinja's default of 500.
const RECURSION_LIMIT: usize = 100;

const TEMPLATE_NAME: &str = "code";

/// Renders `template` against `context`.
///
/// Undefined variables are errors, so a typo in a field name fails loudly
/// instead of producing code with holes in it.
pub fn render_table(template: &str, context: &RenderContext) -> Result<String, TemplateError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_recursion_limit(RECURSION_LIMIT);
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    register_helpers(&mut env);

    env.add_template(TEMPLATE_NAME, template)?;
    let tmpl = env.get_template(TEMPLATE_NAME)?;
    let rendered = tmpl.render(context)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        table = %context.table.name,
        bytes = rendered.len(),
        "rendered table template"
    );

    Ok(rendered)
}

fn register_helpers(env: &mut Environment<'_>) {
    env.add_function("add", |a: i64, b: i64| {
        a.checked_add(b).ok_or_else(|| overflow("add", a, b))
    });
    env.add_function("sub", |a: i64, b: i64| {
        a.checked_sub(b).ok_or_else(|| overflow("sub", a, b))
    });
    // `i < len - 1`, without underflowing at `len == i64::MIN`.
    env.add_function("notAtEnd", |i: i64, len: i64| {
        i.checked_add(1).is_some_and(|next| next < len)
    });

    env.add_filter("rust_type", |target: String| {
        language_type(&target, TargetLanguage::Rust)
    });
    env.add_filter("go_type", |target: String| {
        language_type(&target, TargetLanguage::Go)
    });
    env.add_filter("ident", |raw: String| normalize_identifier(&raw));
}

fn overflow(name: &str, a: i64, b: i64) -> Error {
    Error::new(
        ErrorKind::InvalidOperation,
        format!("{name}({a}, {b}) overflows a 64-bit integer"),
    )
}

fn language_type(target: &str, language: TargetLanguage) -> Result<String, Error> {
    TargetType::parse(target)
        .map(|t| t.name_for(language).to_string())
        .ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidOperation,
                format!("unknown target type '{target}'"),
            )
        })
}
