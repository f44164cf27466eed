//! General assistant prompts (assistant.af)

use agentflow::{FieldKind, Params, Record, RenderError, Schema, Template};
use serde::{Deserialize, Serialize};

/// System prompt for the general assistant; takes no parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemPrompt {}

impl Params for SystemPrompt {
    fn schema() -> Schema {
        Schema::new("SystemPrompt")
    }

    fn to_record(&self) -> Record {
        Record::new("SystemPrompt")
    }
}

pub fn system_prompt() -> Result<Template, RenderError> {
    Template::builder("SystemPrompt")
        .text(
            "You are a helpful programming assistant.\n\
             Answer questions accurately and concisely.\n\
             When you are unsure, say so instead of guessing.\n",
        )
        .build()
}

/// A question on a topic, with optional background context
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerQuestion {
    pub topic: String,
    pub question: String,
    #[serde(default)]
    pub context: String,
}

impl Params for AnswerQuestion {
    fn schema() -> Schema {
        Schema::new("AnswerQuestion")
            .required("Topic", FieldKind::String)
            .required("Question", FieldKind::String)
            .optional("Context", FieldKind::String)
    }

    fn to_record(&self) -> Record {
        Record::new("AnswerQuestion")
            .with("Topic", &self.topic)
            .with("Question", &self.question)
            .with_optional("Context", &self.context)
    }
}

pub fn answer_question() -> Result<Template, RenderError> {
    Template::builder("AnswerQuestion")
        .text("You are an expert on ")
        .var("Topic")
        .text(".\n\nQuestion: ")
        .var("Question")
        .text("\n")
        .optional("Context", |b| b.text("\nContext: ").var("Context").text("\n"))
        .text("\nAnswer the question directly, then give one short example.\n")
        .build()
}

/// A transcript to summarize
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummarizeConversation {
    pub messages: String,
}

impl Params for SummarizeConversation {
    fn schema() -> Schema {
        Schema::new("SummarizeConversation").required("Messages", FieldKind::String)
    }

    fn to_record(&self) -> Record {
        Record::new("SummarizeConversation").with("Messages", &self.messages)
    }
}

pub fn summarize_conversation() -> Result<Template, RenderError> {
    Template::builder("SummarizeConversation")
        .text(
            "Summarize the following conversation in at most three bullet points.\n\
             Keep technical terms exactly as written.\n\nConversation:\n",
        )
        .var("Messages")
        .text("\n")
        .build()
}
