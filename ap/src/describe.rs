//! Human-readable schema summaries for `ap list` and `ap show`

use agentflow::{FieldKind, Schema};

/// One-line field summary, e.g. `Topic: string, Context?: string`
pub fn field_summary(schema: &Schema) -> String {
    if schema.fields().is_empty() {
        return "(no parameters)".to_string();
    }
    schema
        .fields()
        .iter()
        .map(|f| format!("{}{}: {}", f.name, if f.optional { "?" } else { "" }, f.kind))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Indented field tree, nested records expanded
pub fn schema_tree(schema: &Schema) -> String {
    let mut out = String::new();
    write_tree(schema, 1, &mut out);
    out
}

fn write_tree(schema: &Schema, depth: usize, out: &mut String) {
    for field in schema.fields() {
        let marker = if field.optional { " (optional)" } else { "" };
        out.push_str(&format!("{}{}: {}{}\n", "  ".repeat(depth), field.name, field.kind, marker));
        if let FieldKind::Record(nested) = &field.kind {
            write_tree(nested, depth + 1, out);
        }
    }
}
