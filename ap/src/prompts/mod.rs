//! Prompt Library
//!
//! The prompt kinds shipped with agentprompts, grouped by the template file
//! they were authored in. Each kind pairs a typed parameter struct with a
//! template validated against it.
//!
//! All templates are validated once when the [`PromptLibrary`] is built and
//! reused for every render afterwards.

mod assistant;
mod code_review;
mod commit_message;
mod explain_error;
mod test_generator;

pub use assistant::{AnswerQuestion, SummarizeConversation, SystemPrompt};
pub use code_review::{CodeSubmission, LARGE_CHANGE_LINES, PullRequest, ReviewCode};
pub use commit_message::GenerateCommitMessage;
pub use explain_error::{ErrorExplanationSystem, ExplainError, SourceLocation};
pub use test_generator::{GenerateTests, HIGH_COVERAGE, LOW_COVERAGE, TestGenerationSystem};

use agentflow::{Params, Prompt, RenderError, Schema, Template};
use eyre::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Every prompt the library can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SystemPrompt,
    AnswerQuestion,
    SummarizeConversation,
    ReviewCode,
    GenerateCommitMessage,
    ErrorExplanationSystem,
    ExplainError,
    TestGenerationSystem,
    GenerateTests,
}

impl PromptKind {
    /// All kinds, in library order
    pub const ALL: [PromptKind; 9] = [
        Self::SystemPrompt,
        Self::AnswerQuestion,
        Self::SummarizeConversation,
        Self::ReviewCode,
        Self::GenerateCommitMessage,
        Self::ErrorExplanationSystem,
        Self::ExplainError,
        Self::TestGenerationSystem,
        Self::GenerateTests,
    ];

    /// Get the command-line name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::SystemPrompt => "system-prompt",
            Self::AnswerQuestion => "answer-question",
            Self::SummarizeConversation => "summarize-conversation",
            Self::ReviewCode => "review-code",
            Self::GenerateCommitMessage => "generate-commit-message",
            Self::ErrorExplanationSystem => "error-explanation-system",
            Self::ExplainError => "explain-error",
            Self::TestGenerationSystem => "test-generation-system",
            Self::GenerateTests => "generate-tests",
        }
    }

    /// Get the template file this kind was authored in
    pub fn source_file(&self) -> &'static str {
        match self {
            Self::SystemPrompt | Self::AnswerQuestion | Self::SummarizeConversation => "assistant.af",
            Self::ReviewCode => "code-review.af",
            Self::GenerateCommitMessage => "commit-message.af",
            Self::ErrorExplanationSystem | Self::ExplainError => "explain-error.af",
            Self::TestGenerationSystem | Self::GenerateTests => "test-generator.af",
        }
    }

    /// Get the parameter schema for this kind
    pub fn schema(&self) -> Schema {
        match self {
            Self::SystemPrompt => SystemPrompt::schema(),
            Self::AnswerQuestion => AnswerQuestion::schema(),
            Self::SummarizeConversation => SummarizeConversation::schema(),
            Self::ReviewCode => ReviewCode::schema(),
            Self::GenerateCommitMessage => GenerateCommitMessage::schema(),
            Self::ErrorExplanationSystem => ErrorExplanationSystem::schema(),
            Self::ExplainError => ExplainError::schema(),
            Self::TestGenerationSystem => TestGenerationSystem::schema(),
            Self::GenerateTests => GenerateTests::schema(),
        }
    }
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PromptKind {
    type Err = String;

    /// Accepts the command-line name (`review-code`) or the type name (`ReviewCode`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase().replace(['-', '_'], "");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().replace('-', "") == wanted)
            .ok_or_else(|| format!("Unknown prompt: {}", s))
    }
}

/// Validated prompts for every [`PromptKind`]
#[derive(Debug, Clone)]
pub struct PromptLibrary {
    pub system_prompt: Prompt<SystemPrompt>,
    pub answer_question: Prompt<AnswerQuestion>,
    pub summarize_conversation: Prompt<SummarizeConversation>,
    pub review_code: Prompt<ReviewCode>,
    pub generate_commit_message: Prompt<GenerateCommitMessage>,
    pub error_explanation_system: Prompt<ErrorExplanationSystem>,
    pub explain_error: Prompt<ExplainError>,
    pub test_generation_system: Prompt<TestGenerationSystem>,
    pub generate_tests: Prompt<GenerateTests>,
}

impl PromptLibrary {
    /// Build and validate every template
    pub fn new() -> Result<Self, RenderError> {
        debug!("PromptLibrary::new: called");
        let library = Self {
            system_prompt: Prompt::new(assistant::system_prompt()?)?,
            answer_question: Prompt::new(assistant::answer_question()?)?,
            summarize_conversation: Prompt::new(assistant::summarize_conversation()?)?,
            review_code: Prompt::new(code_review::review_code()?)?,
            generate_commit_message: Prompt::new(commit_message::generate_commit_message()?)?,
            error_explanation_system: Prompt::new(explain_error::error_explanation_system()?)?,
            explain_error: Prompt::new(explain_error::explain_error()?)?,
            test_generation_system: Prompt::new(test_generator::test_generation_system()?)?,
            generate_tests: Prompt::new(test_generator::generate_tests()?)?,
        };
        info!("Prompt library ready ({} prompts)", PromptKind::ALL.len());
        Ok(library)
    }

    /// Get the template behind a kind
    pub fn template(&self, kind: PromptKind) -> &Template {
        match kind {
            PromptKind::SystemPrompt => self.system_prompt.template(),
            PromptKind::AnswerQuestion => self.answer_question.template(),
            PromptKind::SummarizeConversation => self.summarize_conversation.template(),
            PromptKind::ReviewCode => self.review_code.template(),
            PromptKind::GenerateCommitMessage => self.generate_commit_message.template(),
            PromptKind::ErrorExplanationSystem => self.error_explanation_system.template(),
            PromptKind::ExplainError => self.explain_error.template(),
            PromptKind::TestGenerationSystem => self.test_generation_system.template(),
            PromptKind::GenerateTests => self.generate_tests.template(),
        }
    }

    /// Render a kind from YAML parameters
    ///
    /// Field names are snake_case (`ticket_id`, `code.language`). Optional
    /// fields may be left out; an empty document is accepted for prompts
    /// without parameters.
    pub fn render_yaml(&self, kind: PromptKind, yaml: &str) -> Result<String> {
        debug!(%kind, yaml_len = yaml.len(), "PromptLibrary::render_yaml: called");
        let rendered = match kind {
            PromptKind::SystemPrompt => render_from_yaml(&self.system_prompt, yaml),
            PromptKind::AnswerQuestion => render_from_yaml(&self.answer_question, yaml),
            PromptKind::SummarizeConversation => render_from_yaml(&self.summarize_conversation, yaml),
            PromptKind::ReviewCode => render_from_yaml(&self.review_code, yaml),
            PromptKind::GenerateCommitMessage => render_from_yaml(&self.generate_commit_message, yaml),
            PromptKind::ErrorExplanationSystem => render_from_yaml(&self.error_explanation_system, yaml),
            PromptKind::ExplainError => render_from_yaml(&self.explain_error, yaml),
            PromptKind::TestGenerationSystem => render_from_yaml(&self.test_generation_system, yaml),
            PromptKind::GenerateTests => render_from_yaml(&self.generate_tests, yaml),
        };
        rendered.context(format!("Failed to render prompt {}", kind))
    }
}

fn render_from_yaml<P: Params + DeserializeOwned>(prompt: &Prompt<P>, yaml: &str) -> Result<String> {
    let yaml = if yaml.trim().is_empty() { "{}" } else { yaml };
    let params: P = serde_yaml::from_str(yaml).context("Failed to parse prompt parameters")?;
    Ok(prompt.render(&params)?)
}
