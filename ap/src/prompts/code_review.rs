//! Code review prompt (code-review.af)

use agentflow::{FieldKind, Operator, Params, Record, RenderError, Schema, Template};
use serde::{Deserialize, Serialize};

/// Pull requests at or above this many changed lines get a split suggestion
pub const LARGE_CHANGE_LINES: i64 = 500;

/// The code under review
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeSubmission {
    pub language: String,
    pub filename: String,
    pub content: String,
    #[serde(default)]
    pub description: String,
}

impl CodeSubmission {
    fn schema() -> Schema {
        Schema::new("CodeSubmission")
            .required("Language", FieldKind::String)
            .required("Filename", FieldKind::String)
            .required("Content", FieldKind::String)
            .optional("Description", FieldKind::String)
    }

    fn to_record(&self) -> Record {
        Record::new("CodeSubmission")
            .with("Language", &self.language)
            .with("Filename", &self.filename)
            .with("Content", &self.content)
            .with_optional("Description", &self.description)
    }
}

/// Pull request metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PullRequest {
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default)]
    pub lines_changed: i64,
}

impl PullRequest {
    fn schema() -> Schema {
        Schema::new("PullRequest")
            .required("IsDraft", FieldKind::Bool)
            .required("LinesChanged", FieldKind::Int)
    }

    fn to_record(&self) -> Record {
        Record::new("PullRequest")
            .with("IsDraft", self.is_draft)
            .with("LinesChanged", self.lines_changed)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewCode {
    pub author: String,
    pub code: CodeSubmission,
    #[serde(default)]
    pub pr: PullRequest,
}

impl Params for ReviewCode {
    fn schema() -> Schema {
        Schema::new("ReviewCode")
            .required("Author", FieldKind::String)
            .required("Code", FieldKind::Record(CodeSubmission::schema()))
            .required("Pr", FieldKind::Record(PullRequest::schema()))
    }

    fn to_record(&self) -> Record {
        Record::new("ReviewCode")
            .with("Author", &self.author)
            .with("Code", self.code.to_record())
            .with("Pr", self.pr.to_record())
    }
}

pub fn review_code() -> Result<Template, RenderError> {
    Template::builder("ReviewCode")
        .text("You are reviewing a ")
        .var("Code.Language")
        .text(" change submitted by ")
        .var("Author")
        .text(".\n\nFile: ")
        .var("Code.Filename")
        .text("\n")
        .optional("Code.Description", |b| b.text("Description: ").var("Code.Description").text("\n"))
        .text("\n```")
        .var("Code.Language")
        .text("\n")
        .var("Code.Content")
        .text("\n```\n")
        .when("Pr.LinesChanged", Operator::Gte(LARGE_CHANGE_LINES), |b| {
            b.text("\nThis change touches ")
                .var("Pr.LinesChanged")
                .text(" lines. Point out where it could be split into smaller pull requests.\n")
        })
        .when_else(
            "Pr.IsDraft",
            Operator::Truthy,
            |b| b.text("\nThis pull request is a draft. Focus on overall direction rather than style.\n"),
            |b| b.text("\nThis pull request is ready for review. Check correctness and test coverage.\n"),
        )
        .build()
}
