//! Mapping from PostgreSQL type OIDs to [`TargetType`].

use crate::types::TargetType;

/// Built-in PostgreSQL type OIDs understood by [`map_type`].
pub mod oid {
    pub const BOOL: u32 = 16;
    pub const BYTEA: u32 = 17;
    pub const CHAR: u32 = 18;
    pub const INT8: u32 = 20;
    pub const INT2: u32 = 21;
    pub const INT4: u32 = 23;
    pub const TEXT: u32 = 25;
    pub const FLOAT4: u32 = 700;
    pub const FLOAT8: u32 = 701;
    pub const BPCHAR: u32 = 1042;
    pub const VARCHAR: u32 = 1043;
    pub const DATE: u32 = 1082;
    pub const TIME: u32 = 1083;
    pub const TIMESTAMP: u32 = 1114;
    pub const TIMESTAMPTZ: u32 = 1184;
    pub const TIMETZ: u32 = 1266;
}

/// Maps a catalog type OID to its target type.
///
/// Total: arrays, json, uuid, enums and anything else not listed fall back to
/// [`TargetType::Bytes`].
pub fn map_type(type_id: u32) -> TargetType {
    match type_id {
        oid::CHAR | oid::BPCHAR | oid::VARCHAR | oid::TEXT => TargetType::String,
        oid::BYTEA => TargetType::Bytes,
        oid::TIMESTAMP | oid::TIMESTAMPTZ | oid::DATE | oid::TIME | oid::TIMETZ => {
            TargetType::Timestamp
        }
        oid::BOOL => TargetType::Bool,
        oid::INT2 | oid::INT4 | oid::INT8 => TargetType::Int64,
        oid::FLOAT4 | oid::FLOAT8 => TargetType::Float64,
        _ => TargetType::Bytes,
    }
}
