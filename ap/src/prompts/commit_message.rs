//! Commit message prompt (commit-message.af)

use agentflow::{FieldKind, Params, Record, RenderError, Schema, Template};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateCommitMessage {
    pub diff: String,
    #[serde(default)]
    pub ticket_id: String,
}

impl Params for GenerateCommitMessage {
    fn schema() -> Schema {
        Schema::new("GenerateCommitMessage")
            .required("Diff", FieldKind::String)
            .optional("TicketId", FieldKind::String)
    }

    fn to_record(&self) -> Record {
        Record::new("GenerateCommitMessage")
            .with("Diff", &self.diff)
            .with_optional("TicketId", &self.ticket_id)
    }
}

pub fn generate_commit_message() -> Result<Template, RenderError> {
    Template::builder("GenerateCommitMessage")
        .text(
            "Write a conventional commit message for the diff below.\n\
             Use the imperative mood and keep the subject under 72 characters.\n",
        )
        .optional("TicketId", |b| b.text("Reference ticket ").var("TicketId").text(" in the footer.\n"))
        .text("\nDiff:\n")
        .var("Diff")
        .text("\n")
        .build()
}
