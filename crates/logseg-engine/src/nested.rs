use serde_json::Value;

/// Whether following `segments` through `value` meets an array before the
/// segments are exhausted, i.e. the dotted suffix cannot be resolved as
/// plain nested objects.
///
/// A field name containing a literal dot is indistinguishable from a nested
/// path without a schema, so a missing key retries with the next two
/// segments rejoined as one key. Each retry consumes a segment, so the walk
/// always terminates.
pub fn resolves_through_array(segments: &[&str], value: &Value) -> bool {
    if segments.len() < 2 {
        return false;
    }

    match value.get(segments[0]) {
        None => {
            let rejoined = format!("{}.{}", segments[0], segments[1]);
            let mut retry: Vec<&str> = Vec::with_capacity(segments.len() - 1);
            retry.push(rejoined.as_str());
            retry.extend_from_slice(&segments[2..]);
            resolves_through_array(&retry, value)
        }
        Some(Value::Array(_)) => true,
        Some(next @ Value::Object(_)) => resolves_through_array(&segments[1..], next),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_nested_objects_are_not_array_access() {
        let row = json!({"a": {"b": 1}});
        assert!(!resolves_through_array(&["a", "b"], &row));
    }

    #[test]
    fn array_at_the_first_level_is_detected() {
        let row = json!({"a": [1, 2]});
        assert!(resolves_through_array(&["a", "b"], &row));
    }

    #[test]
    fn array_below_an_object_is_detected() {
        let row = json!({"a": {"b": {"c": [{"d": 1}]}}});
        assert!(resolves_through_array(&["a", "b", "c", "d"], &row));
    }

    #[test]
    fn literal_dotted_key_resolves_via_rejoin_retry() {
        let row = json!({"a.b": 1});
        assert!(!resolves_through_array(&["a", "b"], &row));
    }

    #[test]
    fn rejoined_key_holding_an_array_is_detected() {
        let row = json!({"a.b": [1], "c": 2});
        assert!(resolves_through_array(&["a", "b", "c"], &row));
    }

    #[test]
    fn short_paths_never_resolve_through_arrays() {
        let row = json!({"a": [1]});
        assert!(!resolves_through_array(&["a"], &row));
        assert!(!resolves_through_array(&[], &row));
    }

    #[test]
    fn missing_everything_is_false() {
        let row = json!({"x": 1});
        assert!(!resolves_through_array(&["a", "b", "c"], &row));
    }
}
