//! Deep merge of layered YAML configuration values.
//!
//! Local overrides are merged over the project config.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (not merged)
//! - Null values in overlay delete the corresponding key from base
//! - Scalars in overlay replace scalars in base

use serde_yaml::Value;

/// Deep merge two YAML values.
///
/// Later values override earlier values at the point of conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        // Overlay is not a mapping, or base is not a mapping: overlay wins
        (_, overlay) => overlay.clone(),
    }
}

/// Merge multiple configs in order (later overrides earlier).
///
/// Documents that are entirely null (empty files) are skipped.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .filter(|config| !config.is_null())
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}
