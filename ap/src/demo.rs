//! Demonstration scenarios
//!
//! One rendered example per interesting template feature: prompts without
//! parameters, optional fields left empty and filled in, nested records, and
//! the numeric and boolean conditionals.

use agentflow::RenderError;
use tracing::debug;

use crate::prompts::{
    AnswerQuestion, CodeSubmission, ErrorExplanationSystem, ExplainError, GenerateCommitMessage, GenerateTests,
    PromptLibrary, PullRequest, ReviewCode, SourceLocation, SummarizeConversation, SystemPrompt, TestGenerationSystem,
};

/// A rendered scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSection {
    /// Template file the prompt comes from
    pub file: &'static str,
    pub title: &'static str,
    pub output: String,
}

impl DemoSection {
    /// Banner heading line, e.g. `>>> [assistant.af] Summarize Conversation`
    pub fn heading(&self) -> String {
        format!(">>> [{}] {}", self.file, self.title)
    }
}

fn section(file: &'static str, title: &'static str, output: Result<String, RenderError>) -> Result<DemoSection, RenderError> {
    Ok(DemoSection {
        file,
        title,
        output: output?,
    })
}

/// Render every scenario in order
pub fn scenarios(library: &PromptLibrary) -> Result<Vec<DemoSection>, RenderError> {
    debug!("scenarios: called");
    let generics = "How do I write a generic function that works with both slices and maps?";

    Ok(vec![
        section(
            "assistant.af",
            "System Prompt (no variables)",
            library.system_prompt.render(&SystemPrompt {}),
        )?,
        section(
            "assistant.af",
            "Answer Question (string variables)",
            library.answer_question.render(&AnswerQuestion {
                topic: "Go generics".to_string(),
                question: generics.to_string(),
                context: String::new(),
            }),
        )?,
        section(
            "assistant.af",
            "Answer Question (with optional context)",
            library.answer_question.render(&AnswerQuestion {
                topic: "Go generics".to_string(),
                question: generics.to_string(),
                context: "I'm using Go 1.21 and have read the tutorial on type parameters.".to_string(),
            }),
        )?,
        section(
            "assistant.af",
            "Summarize Conversation",
            library.summarize_conversation.render(&SummarizeConversation {
                messages: [
                    "User: What is a goroutine?",
                    "Assistant: A goroutine is a lightweight thread managed by the Go runtime.",
                    "User: How do I communicate between goroutines?",
                    "Assistant: Use channels to send and receive values between goroutines.",
                ]
                .join("\n"),
            }),
        )?,
        section(
            "code-review.af",
            "Code Review (nested structs)",
            library.review_code.render(&ReviewCode {
                author: "alice".to_string(),
                code: CodeSubmission {
                    language: "go".to_string(),
                    filename: "handler.go".to_string(),
                    content: "func Handle(w http.ResponseWriter, r *http.Request) {\n    fmt.Fprintln(w, \"ok\")\n}"
                        .to_string(),
                    description: "New HTTP handler".to_string(),
                },
                pr: PullRequest {
                    is_draft: false,
                    lines_changed: 42,
                },
            }),
        )?,
        section(
            "code-review.af",
            "Code Review (draft PR, large change triggers gte 500)",
            library.review_code.render(&ReviewCode {
                author: "bob".to_string(),
                code: CodeSubmission {
                    language: "python".to_string(),
                    filename: "refactor.py".to_string(),
                    content: "# ... 600 lines of refactored code ...".to_string(),
                    description: String::new(),
                },
                pr: PullRequest {
                    is_draft: true,
                    lines_changed: 600,
                },
            }),
        )?,
        section(
            "commit-message.af",
            "Generate Commit Message (simple)",
            library.generate_commit_message.render(&GenerateCommitMessage {
                diff: "- func oldName() {}\n+ func newName() {}".to_string(),
                ticket_id: String::new(),
            }),
        )?,
        section(
            "commit-message.af",
            "Generate Commit Message (with ticket)",
            library.generate_commit_message.render(&GenerateCommitMessage {
                diff: "- return nil\n+ return fmt.Errorf(\"invalid input: %w\", err)".to_string(),
                ticket_id: "PROJ-1234".to_string(),
            }),
        )?,
        section(
            "explain-error.af",
            "Error Explanation System Prompt",
            library.error_explanation_system.render(&ErrorExplanationSystem {}),
        )?,
        section(
            "explain-error.af",
            "Explain Error (minimal)",
            library.explain_error.render(&ExplainError {
                language: "Go".to_string(),
                error_message: "panic: runtime error: index out of range [5] with length 3".to_string(),
                ..Default::default()
            }),
        )?,
        section(
            "explain-error.af",
            "Explain Error (with stack trace, file, and line)",
            library.explain_error.render(&ExplainError {
                language: "Python".to_string(),
                error_message: "TypeError: 'NoneType' object is not subscriptable".to_string(),
                stack_trace: "  File \"app.py\", line 42, in process\n    result = data[\"key\"]".to_string(),
                file: SourceLocation {
                    name: "app.py".to_string(),
                    line: 42,
                },
            }),
        )?,
        section(
            "test-generator.af",
            "Test Generation System Prompt",
            library.test_generation_system.render(&TestGenerationSystem {}),
        )?,
        section(
            "test-generator.af",
            "Generate Tests (high coverage target, gte 90)",
            library.generate_tests.render(&GenerateTests {
                test_framework: "pytest".to_string(),
                language: "python".to_string(),
                source_code: "def fibonacci(n):\n    if n <= 1:\n        return n\n    return fibonacci(n-1) + fibonacci(n-2)"
                    .to_string(),
                function_name: "fibonacci".to_string(),
                existing_tests: String::new(),
                coverage_target: 95,
            }),
        )?,
        section(
            "test-generator.af",
            "Generate Tests (low coverage target, lte 50)",
            library.generate_tests.render(&GenerateTests {
                test_framework: "go test".to_string(),
                language: "go".to_string(),
                source_code: "func ProcessBatch(items []Item) error { ... }".to_string(),
                coverage_target: 40,
                ..Default::default()
            }),
        )?,
        section(
            "test-generator.af",
            "Generate Tests (with existing tests)",
            library.generate_tests.render(&GenerateTests {
                test_framework: "jest".to_string(),
                language: "typescript".to_string(),
                source_code: "export function parseConfig(raw: string): Config { ... }".to_string(),
                function_name: "parseConfig".to_string(),
                existing_tests: "test('parses valid config', () => {\n  expect(parseConfig('{}')).toEqual({})\n})"
                    .to_string(),
                coverage_target: 0,
            }),
        )?,
    ])
}
