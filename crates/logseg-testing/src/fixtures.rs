use logseg_types::{FieldDescriptor, FieldType};
use serde_json::{json, Value};

/// Fluent builder over [`FieldDescriptor`] for test setup.
pub struct FieldBuilder {
    field: FieldDescriptor,
}

impl FieldBuilder {
    pub fn analyzed(mut self) -> Self {
        self.field.is_analyzed = true;
        self
    }

    pub fn tokenize_on(mut self, chars: &str) -> Self {
        self.field.tokenize_on_chars = chars.to_string();
        self
    }

    pub fn virtual_node(mut self) -> Self {
        self.field.is_virtual_obj_node = true;
        self
    }

    pub fn alias(mut self, alias: &str) -> Self {
        self.field.field_alias = alias.to_string();
        self
    }

    pub fn build(self) -> FieldDescriptor {
        self.field
    }
}

/// Start a descriptor builder for a field named `name`.
pub fn field(name: &str, field_type: FieldType) -> FieldBuilder {
    FieldBuilder {
        field: FieldDescriptor::new(name, field_type),
    }
}

/// A small result-set schema covering the interesting field shapes: analyzed
/// text, atomic keyword, both date precisions, and a nested object path.
pub fn sample_schema() -> Vec<FieldDescriptor> {
    vec![
        field("message", FieldType::Text).analyzed().build(),
        field("host", FieldType::Keyword).build(),
        field("timestamp", FieldType::Date).build(),
        field("event_time", FieldType::DateNanos).build(),
        field("kubernetes.pod.name", FieldType::Keyword).build(),
        field("tags", FieldType::Keyword).tokenize_on(",").build(),
    ]
}

/// A log record matching [`sample_schema`], with one highlighted substring.
pub fn sample_row() -> Value {
    json!({
        "message": "GET /api/v1/items <mark>timeout</mark> after 30s",
        "host": "node-7.cluster.local",
        "timestamp": "1712667731",
        "event_time": "2024-04-09T13:02:11.502064896Z",
        "kubernetes": {"pod": {"name": "ingest-0"}},
        "tags": "prod,edge,eu-west"
    })
}
