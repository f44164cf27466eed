//! AgentFlow - typed prompt templates
//!
//! Renders structured prompt templates against typed parameter values. A
//! template is a sequence of literal text, variable references, and
//! conditional blocks; a parameter value is a typed, possibly-nested record.
//! Rendering walks the template in order and produces one string.
//!
//! # Core Concepts
//!
//! - **Definition-time checking**: [`Prompt::new`] validates a template against
//!   the parameter type's [`Schema`] once, before any render
//! - **Zero value means absent**: optional sections vanish, surrounding text
//!   included, when their field holds `""`, `0`, `false`, or an all-zero record
//! - **Pure rendering**: identical inputs give identical output; errors never
//!   leave partial text behind
//!
//! # Example
//!
//! ```
//! use agentflow::{FieldKind, Operator, Params, Prompt, Record, Schema, Template};
//!
//! struct CommitMessage {
//!     diff: String,
//!     ticket_id: String,
//! }
//!
//! impl Params for CommitMessage {
//!     fn schema() -> Schema {
//!         Schema::new("CommitMessage")
//!             .required("Diff", FieldKind::String)
//!             .optional("TicketId", FieldKind::String)
//!     }
//!
//!     fn to_record(&self) -> Record {
//!         Record::new("CommitMessage")
//!             .with("Diff", &self.diff)
//!             .with_optional("TicketId", &self.ticket_id)
//!     }
//! }
//!
//! let template = Template::builder("CommitMessage")
//!     .text("Diff:\n")
//!     .var("Diff")
//!     .optional("TicketId", |b| b.text("\nTicket: ").var("TicketId"))
//!     .build()
//!     .unwrap();
//! let prompt = Prompt::<CommitMessage>::new(template).unwrap();
//!
//! let output = prompt
//!     .render(&CommitMessage { diff: "+ fix".into(), ticket_id: String::new() })
//!     .unwrap();
//! assert_eq!(output, "Diff:\n+ fix");
//! ```
//!
//! # Modules
//!
//! - [`params`] - parameter values, schemas, and presence
//! - [`template`] - template nodes, builder, and condition operators
//! - [`render`] - the renderer and schema-bound [`Prompt`]

mod error;
pub mod params;
mod path;
pub mod render;
pub mod template;

pub use error::{PathError, RenderError, TypeMismatchError};
pub use params::{FieldDef, FieldKind, Params, Record, Schema, Value, is_present, resolve};
pub use path::FieldPath;
pub use render::{Prompt, render, render_params};
pub use template::{Conditional, Node, Operator, Template, TemplateBuilder, evaluate};
