//! Record shapes and the fixed ignore set

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mapper rule id assigned to every projected entry (direct field mapping).
pub const MAPPER_RULE_DIRECT: u8 = 5;

/// Housekeeping columns excluded from every generated mapping.
///
/// Membership is exact and case-sensitive: a column named `ID` is kept.
pub const IGNORED_FIELDS: [&str; 8] = [
    "id",
    "rec_status",
    "create_time",
    "create_by",
    "modify_time",
    "modify_by",
    "eid",
    "task_record_id",
];

/// Whether a physical column name belongs to the ignore set.
pub fn is_ignored(physical_name: &str) -> bool {
    IGNORED_FIELDS.contains(&physical_name)
}

/// Raw field definition as exported by the schema tool.
///
/// Unknown keys are ignored; absent keys take the defaults below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldDef {
    /// Opaque field identifier (integer or string).
    pub id: Option<Value>,
    /// Underscore-style column name.
    pub physical_name: String,
    /// Human-readable label.
    pub cn_name: String,
    /// Declared column data type.
    pub data_type: String,
    /// Required flag (0/1).
    pub required: i64,
}

/// Mapping entry consumed by the downstream mapping engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingEntry {
    /// Copied from [`FieldDef::id`]; serializes as `null` when absent.
    pub field_id: Option<Value>,
    /// Physical column name, copied verbatim.
    pub field_name: String,
    /// Human-readable label, copied verbatim.
    pub field_cn_name: String,
    /// Declared column data type, copied verbatim.
    pub field_data_type: String,
    /// Always [`MAPPER_RULE_DIRECT`].
    pub mapper_rule: u8,
    /// Reserved by the mapping engine; always `null`.
    pub mapper_rule_name: Option<String>,
    /// camelCase form of the identifier it was derived from.
    pub expression: String,
    /// Required flag, copied verbatim.
    pub required: i64,
}
