//! Template Renderer
//!
//! Walks a template in document order, appending literals verbatim and
//! resolving each directive against the parameter record. Rendering is a pure
//! function: the output depends only on the template and the value, and a
//! failure never yields partial text.

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::error::{RenderError, TypeMismatchError};
use crate::params::{Params, Record, Value};
use crate::path::FieldPath;
use crate::template::{Node, Template, evaluate};

/// Render `template` against `record`
pub fn render(template: &Template, record: &Record) -> Result<String, RenderError> {
    debug!(
        template = %template.name(),
        record = %record.name(),
        directives = template.directive_count(),
        "render: called"
    );
    let mut out = String::with_capacity(template.literal_len());
    render_nodes(template.nodes(), record, &mut out)?;
    debug!(template = %template.name(), len = out.len(), "render: done");
    Ok(out)
}

/// Render `template` against a typed parameter value
pub fn render_params<P: Params>(template: &Template, params: &P) -> Result<String, RenderError> {
    render(template, &params.to_record())
}

fn render_nodes(nodes: &[Node], record: &Record, out: &mut String) -> Result<(), RenderError> {
    for node in nodes {
        match node {
            Node::Literal(text) => out.push_str(text),
            Node::Variable(path) => write_value(path, record.resolve(path)?, out)?,
            Node::Conditional(c) => {
                if evaluate(record, &c.path, c.operator)? {
                    render_nodes(&c.then_nodes, record, out)?;
                } else if let Some(else_nodes) = &c.else_nodes {
                    render_nodes(else_nodes, record, out)?;
                }
            }
        }
    }
    Ok(())
}

fn write_value(path: &FieldPath, value: &Value, out: &mut String) -> Result<(), RenderError> {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Record(record) => {
            return Err(TypeMismatchError {
                path: path.to_string(),
                usage: "interpolation".to_string(),
                found: record.name().to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// A template bound to the parameter type it was validated against
///
/// Construction checks every path and operator against `P::schema()`, so
/// rendering a `Prompt<P>` with any `P` cannot hit a path or type error.
pub struct Prompt<P> {
    template: Template,
    _params: PhantomData<fn(&P)>,
}

impl<P> Clone for Prompt<P> {
    fn clone(&self) -> Self {
        Self {
            template: self.template.clone(),
            _params: PhantomData,
        }
    }
}

impl<P> fmt::Debug for Prompt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prompt").field("template", &self.template).finish()
    }
}

impl<P: Params> Prompt<P> {
    /// Validate `template` against `P` and bind it
    pub fn new(template: Template) -> Result<Self, RenderError> {
        template.validate(&P::schema())?;
        Ok(Self {
            template,
            _params: PhantomData,
        })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Render this prompt for `params`
    pub fn render(&self, params: &P) -> Result<String, RenderError> {
        render_params(&self.template, params)
    }
}
