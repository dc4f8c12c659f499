//! PostgreSQL catalog introspection for code generation.
//!
//! The pipeline is: a [`Prober`] reads raw catalog rows for one table, every row
//! is enriched with a [mapped type](map_type) and a [normalized
//! name](normalize_identifier), and [`assemble`] groups the resulting fields into
//! a [`Table`] that templates can consume.

pub mod assemble;
#[cfg(feature = "postgres")]
pub mod error;
pub mod naming;
#[cfg(feature = "postgres")]
pub mod prober;
#[cfg(feature = "postgres")]
pub mod registry;
#[cfg(feature = "templating")]
pub mod templater;
pub mod type_map;
pub mod types;

pub use assemble::assemble;
pub use naming::normalize_identifier;
pub use type_map::map_type;
pub use types::{Field, Relation, RelationKind, Table, TargetLanguage, TargetType};

#[cfg(feature = "postgres")]
pub use error::{ErrorKind, ProbeError, RegistryError};
#[cfg(feature = "postgres")]
pub use prober::{BlockingProber, DatabaseType, PgProber, Prober, ProberOptions};
#[cfg(feature = "postgres")]
pub use registry::{CollisionPolicy, ConnectionRegistry};
#[cfg(feature = "templating")]
pub use templater::{render_table, RenderContext, TemplateError};
