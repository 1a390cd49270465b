//! Deep merge for JSON attachment properties.

use serde_json::Value;

/// Merges `overlay` into `base` recursively.
///
/// Merge rules:
/// - Object values merge key by key, recursing into shared keys.
/// - Array values concatenate (`base` entries first), so a `fields`
///   array from both sides keeps the entries of both.
/// - Any other combination overwrites `base` with `overlay`.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (Value::Array(base_items), Value::Array(overlay_items)) => {
            base_items.extend(overlay_items.iter().cloned());
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value.clone();
        }
    }
}
