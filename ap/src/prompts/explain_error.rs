//! Error explanation prompts (explain-error.af)

use agentflow::{FieldKind, Params, Record, RenderError, Schema, Template};
use serde::{Deserialize, Serialize};

/// System prompt for error explanation; takes no parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorExplanationSystem {}

impl Params for ErrorExplanationSystem {
    fn schema() -> Schema {
        Schema::new("ErrorExplanationSystem")
    }

    fn to_record(&self) -> Record {
        Record::new("ErrorExplanationSystem")
    }
}

pub fn error_explanation_system() -> Result<Template, RenderError> {
    Template::builder("ErrorExplanationSystem")
        .text(
            "You are a debugging assistant.\n\
             Explain errors in plain language and name the most likely cause.\n\
             Always finish with a concrete fix.\n",
        )
        .build()
}

/// Where the error was raised
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceLocation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub line: i64,
}

impl SourceLocation {
    fn schema() -> Schema {
        Schema::new("SourceLocation")
            .required("Name", FieldKind::String)
            .optional("Line", FieldKind::Int)
    }

    fn to_record(&self) -> Record {
        Record::new("SourceLocation")
            .with("Name", &self.name)
            .with_optional("Line", self.line)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExplainError {
    pub language: String,
    pub error_message: String,
    #[serde(default)]
    pub stack_trace: String,
    #[serde(default)]
    pub file: SourceLocation,
}

impl Params for ExplainError {
    fn schema() -> Schema {
        Schema::new("ExplainError")
            .required("Language", FieldKind::String)
            .required("ErrorMessage", FieldKind::String)
            .optional("StackTrace", FieldKind::String)
            .optional("File", FieldKind::Record(SourceLocation::schema()))
    }

    fn to_record(&self) -> Record {
        Record::new("ExplainError")
            .with("Language", &self.language)
            .with("ErrorMessage", &self.error_message)
            .with_optional("StackTrace", &self.stack_trace)
            .with_optional("File", self.file.to_record())
    }
}

pub fn explain_error() -> Result<Template, RenderError> {
    Template::builder("ExplainError")
        .text("Explain this ")
        .var("Language")
        .text(" error:\n\n")
        .var("ErrorMessage")
        .text("\n")
        .optional("StackTrace", |b| b.text("\nStack trace:\n").var("StackTrace").text("\n"))
        .optional("File", |b| {
            b.text("\nRaised in ")
                .var("File.Name")
                .optional("File.Line", |b| b.text(" at line ").var("File.Line"))
                .text(".\n")
        })
        .text("\nDescribe the cause, then show the corrected code.\n")
        .build()
}
