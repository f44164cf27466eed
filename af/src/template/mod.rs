//! Template definitions
//!
//! A [`Template`] is an ordered sequence of [`Node`]s: literal text, variable
//! references, and conditional blocks. Templates are built once through
//! [`TemplateBuilder`] and are immutable afterwards, so one template can be
//! shared by any number of concurrent renders.
//!
//! ```
//! use agentflow::Template;
//!
//! let template = Template::builder("AnswerQuestion")
//!     .text("Topic: ")
//!     .var("Topic")
//!     .optional("Context", |b| b.text("\nContext: ").var("Context"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(template.to_string(), "Topic: {{Topic}}{{#if Context present}}\nContext: {{Context}}{{/if}}");
//! ```

mod condition;
mod validate;

pub use condition::{Operator, evaluate};

use std::fmt;

use crate::error::RenderError;
use crate::path::FieldPath;

/// One element of a template body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text emitted verbatim, whitespace included
    Literal(String),
    /// The value at a field path
    Variable(FieldPath),
    /// A branch chosen by testing a field
    Conditional(Conditional),
}

/// A conditional block: `{{#if path op}} then {{else}} otherwise {{/if}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conditional {
    pub path: FieldPath,
    pub operator: Operator,
    pub then_nodes: Vec<Node>,
    pub else_nodes: Option<Vec<Node>>,
}

/// A named, immutable template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    nodes: Vec<Node>,
}

impl Template {
    /// Start building a template
    pub fn builder(name: impl Into<String>) -> TemplateBuilder {
        TemplateBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of variable and conditional nodes, at any depth
    pub fn directive_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|node| match node {
                    Node::Literal(_) => 0,
                    Node::Variable(_) => 1,
                    Node::Conditional(c) => 1 + count(&c.then_nodes) + c.else_nodes.as_deref().map_or(0, count),
                })
                .sum()
        }
        count(&self.nodes)
    }

    /// Total length of top-level literal text, used as a capacity hint
    pub(crate) fn literal_len(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| match node {
                Node::Literal(text) => text.len(),
                _ => 0,
            })
            .sum()
    }
}

impl fmt::Display for Template {
    /// Outline form: `{{path}}` for variables, `{{#if path op}}...{{else}}...{{/if}}` for conditionals
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_nodes(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
            for node in nodes {
                match node {
                    Node::Literal(text) => f.write_str(text)?,
                    Node::Variable(path) => write!(f, "{{{{{}}}}}", path)?,
                    Node::Conditional(c) => {
                        write!(f, "{{{{#if {} {}}}}}", c.path, c.operator)?;
                        write_nodes(f, &c.then_nodes)?;
                        if let Some(else_nodes) = &c.else_nodes {
                            f.write_str("{{else}}")?;
                            write_nodes(f, else_nodes)?;
                        }
                        f.write_str("{{/if}}")?;
                    }
                }
            }
            Ok(())
        }
        write_nodes(f, &self.nodes)
    }
}

/// Builds a [`Template`], or a nested block of one
///
/// Path errors are deferred: the first malformed path is remembered and
/// reported by [`build`](Self::build).
#[derive(Debug)]
pub struct TemplateBuilder {
    name: String,
    nodes: Vec<Node>,
    error: Option<RenderError>,
}

impl TemplateBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            error: None,
        }
    }

    /// Append literal text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.nodes.push(Node::Literal(text));
        }
        self
    }

    /// Append a variable reference
    pub fn var(mut self, path: &str) -> Self {
        match FieldPath::parse(path) {
            Ok(path) => self.nodes.push(Node::Variable(path)),
            Err(e) => self.fail(e),
        }
        self
    }

    /// Append a block rendered only when `operator` holds for `path`
    pub fn when(self, path: &str, operator: Operator, then: impl FnOnce(Self) -> Self) -> Self {
        self.conditional(path, operator, then, None::<fn(Self) -> Self>)
    }

    /// Append a two-branch conditional block
    pub fn when_else(
        self,
        path: &str,
        operator: Operator,
        then: impl FnOnce(Self) -> Self,
        otherwise: impl FnOnce(Self) -> Self,
    ) -> Self {
        self.conditional(path, operator, then, Some(otherwise))
    }

    /// Append a section that is elided entirely when `path` holds its zero value
    pub fn optional(self, path: &str, section: impl FnOnce(Self) -> Self) -> Self {
        self.when(path, Operator::Present, section)
    }

    fn conditional(
        mut self,
        path: &str,
        operator: Operator,
        then: impl FnOnce(Self) -> Self,
        otherwise: Option<impl FnOnce(Self) -> Self>,
    ) -> Self {
        let path = match FieldPath::parse(path) {
            Ok(path) => path,
            Err(e) => {
                self.fail(e);
                return self;
            }
        };

        let then_nodes = match self.nested(then) {
            Some(nodes) => nodes,
            None => return self,
        };
        let else_nodes = match otherwise {
            Some(otherwise) => match self.nested(otherwise) {
                Some(nodes) => Some(nodes),
                None => return self,
            },
            None => None,
        };

        self.nodes.push(Node::Conditional(Conditional {
            path,
            operator,
            then_nodes,
            else_nodes,
        }));
        self
    }

    fn nested(&mut self, block: impl FnOnce(Self) -> Self) -> Option<Vec<Node>> {
        let inner = block(Self::new(self.name.clone()));
        match inner.error {
            Some(e) => {
                self.fail(e);
                None
            }
            None => Some(inner.nodes),
        }
    }

    fn fail(&mut self, error: RenderError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Finish the template, reporting the first malformed path if any
    pub fn build(self) -> Result<Template, RenderError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(Template {
                name: self.name,
                nodes: self.nodes,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let template = Template::builder("GenerateCommitMessage")
            .text("Diff:\n")
            .var("Diff")
            .text("\n")
            .build()
            .unwrap();

        assert_eq!(template.name(), "GenerateCommitMessage");
        assert_eq!(template.nodes().len(), 3);
        assert!(matches!(&template.nodes()[1], Node::Variable(p) if p.as_str() == "Diff"));
    }

    #[test]
    fn test_builder_skips_empty_text() {
        let template = Template::builder("Empty").text("").build().unwrap();
        assert!(template.nodes().is_empty());
    }

    #[test]
    fn test_builder_nested_conditionals() {
        let template = Template::builder("ReviewCode")
            .when_else(
                "Pr.IsDraft",
                Operator::Truthy,
                |b| b.text("draft"),
                |b| b.when("Pr.LinesChanged", Operator::Gte(500), |b| b.text("large")),
            )
            .build()
            .unwrap();

        assert_eq!(template.directive_count(), 2);
        match &template.nodes()[0] {
            Node::Conditional(c) => {
                assert_eq!(c.operator, Operator::Truthy);
                assert_eq!(c.then_nodes, vec![Node::Literal("draft".to_string())]);
                assert_eq!(c.else_nodes.as_ref().map(Vec::len), Some(1));
            }
            other => panic!("unexpected node: {other:?}"),
        }
    }

    #[test]
    fn test_builder_reports_bad_path() {
        let err = Template::builder("Broken").text("x").var("Code..Language").build().unwrap_err();
        assert_eq!(err, RenderError::InvalidPath("Code..Language".to_string()));
    }

    #[test]
    fn test_builder_reports_bad_path_in_branch() {
        let err = Template::builder("Broken")
            .optional("Context", |b| b.var(""))
            .build()
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidPath(_)));
    }

    #[test]
    fn test_display_outline() {
        let template = Template::builder("GenerateTests")
            .text("Target: ")
            .var("CoverageTarget")
            .when_else(
                "CoverageTarget",
                Operator::Gte(90),
                |b| b.text(" (thorough)"),
                |b| b.text(" (basic)"),
            )
            .build()
            .unwrap();

        assert_eq!(
            template.to_string(),
            "Target: {{CoverageTarget}}{{#if CoverageTarget gte 90}} (thorough){{else}} (basic){{/if}}"
        );
    }
}
