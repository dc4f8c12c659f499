//! Rendering of an assembled [`Table`] through a user-supplied template.
//!
//! Templates are MiniJinja (Jinja2) and see a context of the form
//! `{ packageName, table }`, where `table` has the camelCase shape of
//! [`Table`]. On top of the builtins the environment provides:
//!
//! - `add(a, b)` and `sub(a, b)` for index arithmetic,
//! - `notAtEnd(i, len)`, true while `i < len - 1`,
//! - filters `rust_type` and `go_type` turning a field's `targetType` into a
//!   language type, and `ident` normalizing any identifier.
//!
//! ```
//! use pgprobe_core::templater::{render_table, RenderContext};
//! use pgprobe_core::{assemble, Field};
//!
//! let table = assemble("musics", vec![Field::new(1, 20, "id"), Field::new(2, 25, "title")]);
//! let context = RenderContext::new("musics", table);
//! let template = "struct {{ table.name | ident }} { {% for f in table.fields %}{{ f.rawName }}: \
//!                 {{ f.targetType | rust_type }}\
//!                 {% if notAtEnd(loop.index0, table.fields | length) %}, {% endif %}\
//!                 {% endfor %} }";
//!
//! let code = render_table(template, &context).unwrap();
//! assert_eq!(code, "struct Musics { id: i64, title: String }");
//! ```

mod error;
mod render;

pub use error::TemplateError;
pub use render::render_table;

use serde::Serialize;

use crate::types::Table;

/// Values exposed to a code template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    pub package_name: String,
    pub table: Table,
}

impl RenderContext {
    pub fn new(package_name: impl Into<String>, table: Table) -> Self {
        Self {
            package_name: package_name.into(),
            table,
        }
    }
}
