//! Catalog metadata model.
//!
//! [`Relation`], [`Field`] and [`Table`] are read-only snapshots built fresh for
//! every probe. They serialize with camelCase keys so the same shape is seen by
//! JSON consumers and by templates.

mod field;
mod relation;
mod table;
mod target;

pub use field::Field;
pub use relation::{Relation, RelationKind};
pub use table::Table;
pub use target::{TargetLanguage, TargetType};
