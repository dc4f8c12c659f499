use serde::{Deserialize, Serialize};
use std::fmt;

/// Language-agnostic type a catalog column maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    String,
    /// Byte sequence; also the fallback for every unmapped catalog type.
    Bytes,
    /// Point in time (timestamps, dates and times of day alike).
    Timestamp,
    Bool,
    Int64,
    Float64,
}

/// Language whose spelling is used when a [`TargetType`] is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    Rust,
    Go,
}

impl TargetType {
    /// Canonical lowercase identifier, as used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Timestamp => "timestamp",
            Self::Bool => "bool",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
        }
    }

    /// Parses the canonical identifier produced by [`Self::as_str`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "string" => Some(Self::String),
            "bytes" => Some(Self::Bytes),
            "timestamp" => Some(Self::Timestamp),
            "bool" => Some(Self::Bool),
            "int64" => Some(Self::Int64),
            "float64" => Some(Self::Float64),
            _ => None,
        }
    }

    /// Spelling of this type in the given language.
    pub fn name_for(self, language: TargetLanguage) -> &'static str {
        match language {
            TargetLanguage::Rust => match self {
                Self::String => "String",
                Self::Bytes => "Vec<u8>",
                Self::Timestamp => "chrono::DateTime<chrono::Utc>",
                Self::Bool => "bool",
                Self::Int64 => "i64",
                Self::Float64 => "f64",
            },
            TargetLanguage::Go => match self {
                Self::String => "string",
                Self::Bytes => "[]byte",
                Self::Timestamp => "time.Time",
                Self::Bool => "bool",
                Self::Int64 => "int64",
                Self::Float64 => "float64",
            },
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
