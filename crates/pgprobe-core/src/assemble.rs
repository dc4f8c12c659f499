//! Grouping of probed fields into a [`Table`].

use crate::types::{Field, Table};

/// Builds a [`Table`] from fields in catalog order.
///
/// Fields with `is_primary` go to `primary_keys`, the rest to
/// `non_primary_keys`; both keep the input order, and so does `fields`.
pub fn assemble(name: impl Into<String>, fields: Vec<Field>) -> Table {
    let (primary_keys, non_primary_keys): (Vec<_>, Vec<_>) =
        fields.iter().cloned().partition(|f| f.is_primary);

    Table {
        name: name.into(),
        fields,
        primary_keys,
        non_primary_keys,
    }
}
