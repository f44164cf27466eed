//! Definition-time checks of a template against a parameter schema

use tracing::debug;

use super::{Node, Template};
use crate::error::{RenderError, TypeMismatchError};
use crate::params::{FieldKind, Schema};

impl Template {
    /// Check that every path resolves in `schema` and every directive suits its field type
    ///
    /// Run this once when pairing a template with a parameter type; a template
    /// that passes cannot fail to render against values of that type.
    pub fn validate(&self, schema: &Schema) -> Result<(), RenderError> {
        debug!(template = %self.name(), schema = %schema.name(), "Template::validate: called");
        validate_nodes(self.nodes(), schema)
    }
}

fn validate_nodes(nodes: &[Node], schema: &Schema) -> Result<(), RenderError> {
    for node in nodes {
        match node {
            Node::Literal(_) => {}
            Node::Variable(path) => {
                let field = schema.resolve(path)?;
                if let FieldKind::Record(_) = field.kind {
                    return Err(TypeMismatchError {
                        path: path.to_string(),
                        usage: "interpolation".to_string(),
                        found: field.kind.to_string(),
                    }
                    .into());
                }
            }
            Node::Conditional(c) => {
                let field = schema.resolve(&c.path)?;
                if !c.operator.accepts(&field.kind) {
                    return Err(TypeMismatchError {
                        path: c.path.to_string(),
                        usage: c.operator.to_string(),
                        found: field.kind.to_string(),
                    }
                    .into());
                }
                validate_nodes(&c.then_nodes, schema)?;
                if let Some(else_nodes) = &c.else_nodes {
                    validate_nodes(else_nodes, schema)?;
                }
            }
        }
    }
    Ok(())
}
