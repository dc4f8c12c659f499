use serde::{Deserialize, Serialize};

use super::Field;
use crate::naming::normalize_identifier;

/// A table's fields, partitioned by primary key membership.
///
/// `fields` keeps catalog order; `primary_keys` and `non_primary_keys` are a
/// partition of it in the same relative order. Build one with
/// [`crate::assemble`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub name: String,
    pub fields: Vec<Field>,
    pub primary_keys: Vec<Field>,
    pub non_primary_keys: Vec<Field>,
}

impl Table {
    /// Normalized table name, suitable as a type name.
    pub fn type_name(&self) -> String {
        normalize_identifier(&self.name)
    }
}
