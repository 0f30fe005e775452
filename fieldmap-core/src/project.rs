//! Projection of raw field definitions into mapping entries

use crate::convert::snake_to_camel;
use crate::model::{is_ignored, FieldDef, MappingEntry, MAPPER_RULE_DIRECT};

/// Project a single field definition, or `None` when its column is ignored.
pub fn map_field(field: &FieldDef) -> Option<MappingEntry> {
    if is_ignored(&field.physical_name) {
        return None;
    }

    Some(MappingEntry {
        field_id: field.id.clone(),
        field_name: field.physical_name.clone(),
        field_cn_name: field.cn_name.clone(),
        field_data_type: field.data_type.clone(),
        mapper_rule: MAPPER_RULE_DIRECT,
        mapper_rule_name: None,
        expression: snake_to_camel(&field.physical_name),
        required: field.required,
    })
}

/// Project a definition list, preserving input order (stable filter).
///
/// The kept-record count is the length of the returned vector.
pub fn project_fields(fields: &[FieldDef]) -> Vec<MappingEntry> {
    fields.iter().filter_map(map_field).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn def(physical_name: &str) -> FieldDef {
        FieldDef {
            physical_name: physical_name.to_string(),
            ..FieldDef::default()
        }
    }

    #[test]
    fn ignored_column_is_dropped_entirely() {
        assert!(map_field(&def("id")).is_none());
        assert!(map_field(&def("create_time")).is_none());
    }

    #[test]
    fn uppercase_variant_of_ignored_name_is_kept() {
        let entry = map_field(&def("ID")).expect("kept");
        assert_eq!(entry.field_name, "ID");
    }

    #[test]
    fn projected_entry_matches_fixed_shape() {
        let field = FieldDef {
            id: Some(json!(7)),
            physical_name: "user_name".into(),
            cn_name: "姓名".into(),
            data_type: "varchar".into(),
            required: 1,
        };
        let entry = map_field(&field).expect("kept");
        assert_eq!(entry.field_id, Some(json!(7)));
        assert_eq!(entry.field_name, "user_name");
        assert_eq!(entry.field_cn_name, "姓名");
        assert_eq!(entry.field_data_type, "varchar");
        assert_eq!(entry.mapper_rule, MAPPER_RULE_DIRECT);
        assert_eq!(entry.mapper_rule_name, None);
        assert_eq!(entry.expression, "userName");
        assert_eq!(entry.required, 1);
    }

    #[test]
    fn empty_physical_name_is_kept_with_empty_expression() {
        let entry = map_field(&FieldDef::default()).expect("kept");
        assert_eq!(entry.field_name, "");
        assert_eq!(entry.expression, "");
    }

    #[test]
    fn output_order_matches_input_order_minus_dropped() {
        let fields = vec![
            def("roll_number"),
            def("id"),
            def("inner_head1"),
            def("modify_by"),
            def("status"),
        ];
        let entries = project_fields(&fields);
        let names: Vec<&str> = entries.iter().map(|e| e.field_name.as_str()).collect();
        assert_eq!(names, vec!["roll_number", "inner_head1", "status"]);
        assert_eq!(entries[0].expression, "rollNumber");
        assert_eq!(entries[1].expression, "innerHead1");
        assert_eq!(entries[2].expression, "status");
    }

    #[test]
    fn duplicate_names_are_all_kept() {
        let fields = vec![def("user_name"), def("user_name")];
        assert_eq!(project_fields(&fields).len(), 2);
    }
}
