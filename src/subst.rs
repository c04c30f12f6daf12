//! Placeholder substitution against the binding map.
//!
//! Two policies coexist on purpose. Command lines get first-match
//! substitution: the first bound name whose `$name` occurs in the text is
//! replaced and the scan stops. Manifest files get exhaustive substitution:
//! every occurrence of every bound name. The asymmetry reproduces the
//! observed contract of the tool being replaced (see DESIGN.md).

use crate::bindings::BindingMap;

/// Replace the first bound name found in `text` (all occurrences of that one
/// name) and return immediately; remaining names are not consulted. Returns
/// the text unchanged when no bound name occurs.
pub(crate) fn substitute_first(text: &str, bindings: &BindingMap) -> String {
    for (name, address) in bindings {
        let placeholder = format!("${name}");
        if text.contains(&placeholder) {
            return text.replace(&placeholder, address);
        }
    }
    text.to_string()
}

/// Replace every occurrence of every bound name's `$name` in `text`.
/// Unmatched placeholders are left verbatim.
pub(crate) fn substitute_all(text: &str, bindings: &BindingMap) -> String {
    let mut out = text.to_string();
    for (name, address) in bindings {
        let placeholder = format!("${name}");
        out = out.replace(&placeholder, address);
    }
    out
}
