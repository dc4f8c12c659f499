use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of catalog relation as reported by `pg_class.relkind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    Table,
    View,
    MaterializedView,
    Index,
    Sequence,
    Special,
    ForeignTable,
}

impl RelationKind {
    /// Parses the label produced by the relation listing query.
    pub fn from_catalog_label(label: &str) -> Option<Self> {
        match label {
            "table" => Some(Self::Table),
            "view" => Some(Self::View),
            "materialized view" => Some(Self::MaterializedView),
            "index" => Some(Self::Index),
            "sequence" => Some(Self::Sequence),
            "special" => Some(Self::Special),
            "foreign table" => Some(Self::ForeignTable),
            _ => None,
        }
    }

    /// The label used by the catalog query (and by `psql \d`).
    pub fn as_catalog_label(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::View => "view",
            Self::MaterializedView => "materialized view",
            Self::Index => "index",
            Self::Sequence => "sequence",
            Self::Special => "special",
            Self::ForeignTable => "foreign table",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_catalog_label())
    }
}

/// One visible catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub schema: String,
    pub name: String,
    pub kind: RelationKind,
    pub owner: String,
}
