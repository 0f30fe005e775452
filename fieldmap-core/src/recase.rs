//! In-place recasing of previously generated mapping artifacts

use crate::convert::snake_to_camel;
use serde_json::{Map, Value};

/// Key rewritten by the recase pass.
pub const EXPRESSION_KEY: &str = "expression";

/// Recompute every non-empty string `expression` in place.
///
/// Returns how many records actually changed. Records without the key,
/// with an empty string, or with a non-string value are left untouched
/// and do not count. The pass operates on generic JSON objects so any
/// extra keys in a hand-edited artifact survive verbatim.
pub fn recase_expressions(records: &mut [Map<String, Value>]) -> usize {
    let mut changed = 0;
    for record in records.iter_mut() {
        let Some(Value::String(expression)) = record.get(EXPRESSION_KEY) else {
            continue;
        };
        if expression.is_empty() {
            continue;
        }
        let candidate = snake_to_camel(expression);
        if candidate != *expression {
            record.insert(EXPRESSION_KEY.to_string(), Value::String(candidate));
            changed += 1;
        }
    }
    changed
}
