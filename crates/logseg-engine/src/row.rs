use serde_json::Value;

/// Look up `row[field_name]`, resolving dotted paths through nested objects.
///
/// Mirrors how the result table addresses cells: `a.b` first tries nested
/// objects (`row.a.b`), then the literal dotted key (`row["a.b"]`). An array
/// met mid-path maps the remaining path over its elements and collects the
/// hits. Returns `None` when nothing resolves.
pub fn resolve_row_value(row: &Value, field_name: &str) -> Option<Value> {
    if field_name.is_empty() {
        return None;
    }

    if let Some(direct) = row.get(field_name) {
        return Some(direct.clone());
    }

    let segments: Vec<&str> = field_name.split('.').collect();
    if segments.len() < 2 {
        return None;
    }
    walk(row, &segments)
}

fn walk(value: &Value, segments: &[&str]) -> Option<Value> {
    if segments.is_empty() {
        return Some(value.clone());
    }

    if let Value::Array(items) = value {
        let collected: Vec<Value> = items
            .iter()
            .filter_map(|item| walk(item, segments))
            .collect();
        if collected.is_empty() {
            return None;
        }
        return Some(Value::Array(collected));
    }

    if let Some(next) = value.get(segments[0]) {
        return walk(next, &segments[1..]);
    }

    // x.y missing: fall back to the literal dotted key x["y.z..."]
    for join_len in 2..=segments.len() {
        let rejoined = segments[..join_len].join(".");
        if let Some(next) = value.get(rejoined.as_str()) {
            return walk(next, &segments[join_len..]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn direct_key_wins_over_path_walking() {
        let row = json!({"a.b": "literal", "a": {"b": "nested"}});
        assert_eq!(resolve_row_value(&row, "a.b"), Some(json!("literal")));
    }

    #[test]
    fn walks_nested_objects() {
        let row = json!({"a": {"b": {"c": 7}}});
        assert_eq!(resolve_row_value(&row, "a.b.c"), Some(json!(7)));
    }

    #[test]
    fn partially_dotted_keys_resolve() {
        let row = json!({"a": {"b.c": "x"}});
        assert_eq!(resolve_row_value(&row, "a.b.c"), Some(json!("x")));
    }

    #[test]
    fn arrays_map_the_remaining_path() {
        let row = json!({"a": [{"b": 1}, {"c": 2}, {"b": 3}]});
        assert_eq!(resolve_row_value(&row, "a.b"), Some(json!([1, 3])));
    }

    #[test]
    fn missing_paths_return_none() {
        let row = json!({"a": {"b": 1}});
        assert_eq!(resolve_row_value(&row, "a.x"), None);
        assert_eq!(resolve_row_value(&row, "z"), None);
        assert_eq!(resolve_row_value(&row, ""), None);
    }
}
