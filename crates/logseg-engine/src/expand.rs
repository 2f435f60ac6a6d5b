use logseg_types::{FieldDescriptor, FieldType};
use std::collections::HashSet;

/// Expand dotted field paths into a descriptor list that also contains a
/// synthetic "virtual object" descriptor for every intermediate path prefix.
///
/// For a descriptor named `a.b.c`, the prefixes `a` and `a.b` become
/// addressable pseudo-fields so nested values can be rendered on their own.
/// A prefix that already exists as a descriptor anywhere in the input keeps
/// its own type and alias and is not re-synthesized. First-seen order is
/// preserved and the function is idempotent.
pub fn expand_field_paths(fields: &[FieldDescriptor]) -> Vec<FieldDescriptor> {
    let known: HashSet<&str> = fields.iter().map(|f| f.field_name.as_str()).collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut expanded = Vec::with_capacity(fields.len());

    for field in fields {
        for prefix in proper_prefixes(&field.field_name) {
            if known.contains(prefix.as_str()) || !seen.insert(prefix.clone()) {
                continue;
            }
            expanded.push(virtual_node(field, &prefix));
        }

        if seen.insert(field.field_name.clone()) {
            expanded.push(field.clone());
        }
    }

    expanded
}

/// Proper non-empty dot-prefixes of `path`, shortest first.
/// `a.b.c` yields `a` and `a.b`; a single segment yields nothing.
fn proper_prefixes(path: &str) -> Vec<String> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
        return Vec::new();
    }
    (1..segments.len())
        .map(|end| segments[..end].join("."))
        .collect()
}

fn virtual_node(source: &FieldDescriptor, prefix: &str) -> FieldDescriptor {
    let mut node = source.clone();
    node.field_name = prefix.to_string();
    node.field_alias = prefix.to_string();
    node.query_alias = Some(prefix.to_string());
    node.field_type = FieldType::Object;
    node.is_virtual_obj_node = true;
    node
}
