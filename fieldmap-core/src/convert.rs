//! Underscore-to-camel identifier conversion

/// Convert an underscore-style identifier to camelCase.
///
/// The first component is emitted verbatim (even when empty); every later
/// component has its first character upper-cased and the rest left
/// untouched. Empty components contribute nothing, so leading, trailing,
/// and doubled underscores collapse away. Inputs without a separator are
/// returned unchanged.
///
/// ```
/// use fieldmap_core::snake_to_camel;
///
/// assert_eq!(snake_to_camel("roll_number"), "rollNumber");
/// assert_eq!(snake_to_camel("alreadyCamel"), "alreadyCamel");
/// ```
pub fn snake_to_camel(identifier: &str) -> String {
    if identifier.is_empty() || !identifier.contains('_') {
        return identifier.to_string();
    }

    let mut components = identifier.split('_');
    let mut out = String::with_capacity(identifier.len());
    if let Some(first) = components.next() {
        out.push_str(first);
    }
    for component in components {
        let mut chars = component.chars();
        if let Some(head) = chars.next() {
            // to_uppercase handles non-ASCII first characters too
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
