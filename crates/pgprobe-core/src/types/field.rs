use serde::{Deserialize, Serialize};

use super::TargetType;
use crate::naming::normalize_identifier;
use crate::type_map::map_type;

/// One table column together with its index participation.
///
/// Index attributes are `false`/empty when the column belongs to no index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// 1-based column position (`pg_attribute.attnum`).
    pub ordinal: i64,
    /// Catalog type OID (`pg_attribute.atttypid`).
    pub type_id: u32,
    /// Column name exactly as stored in the catalog.
    pub raw_name: String,
    /// Human-readable type, e.g. `character varying(64)`.
    pub type_display: String,
    pub nullable: bool,
    pub is_primary: bool,
    pub is_unique: bool,
    pub is_index_valid: bool,
    /// `pg_get_indexdef` output, empty when the column has no index.
    pub index_definition: String,
    /// Normalized identifier derived from [`Self::raw_name`].
    pub name: String,
    /// Type derived from [`Self::type_id`].
    pub target_type: TargetType,
}

impl Field {
    /// Creates an enriched field with no index participation.
    pub fn new(ordinal: i64, type_id: u32, raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        Self {
            ordinal,
            type_id,
            name: normalize_identifier(&raw_name),
            target_type: map_type(type_id),
            raw_name,
            type_display: String::new(),
            nullable: true,
            is_primary: false,
            is_unique: false,
            is_index_valid: false,
            index_definition: String::new(),
        }
    }

    /// Sets the display type.
    pub fn with_type_display(mut self, type_display: impl Into<String>) -> Self {
        self.type_display = type_display.into();
        self
    }

    /// Sets nullability.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Marks the field as part of an index described by `definition`.
    pub fn with_index(
        mut self,
        definition: impl Into<String>,
        is_primary: bool,
        is_unique: bool,
        is_valid: bool,
    ) -> Self {
        self.index_definition = definition.into();
        self.is_primary = is_primary;
        self.is_unique = is_unique;
        self.is_index_valid = is_valid;
        self
    }

    /// True when the column participates in at least one index.
    pub fn has_index(&self) -> bool {
        !self.index_definition.is_empty()
    }

    /// Folds another catalog row for the same column into this one.
    ///
    /// A column listed in several indexes comes back once per index; flags are
    /// OR-ed and the primary key definition takes precedence.
    pub(crate) fn merge_index_row(&mut self, other: Field) {
        debug_assert_eq!(self.ordinal, other.ordinal);
        if other.is_primary && !self.is_primary {
            self.index_definition = other.index_definition;
        } else if self.index_definition.is_empty() {
            self.index_definition = other.index_definition;
        }
        self.is_primary |= other.is_primary;
        self.is_unique |= other.is_unique;
        self.is_index_valid |= other.is_index_valid;
    }
}
