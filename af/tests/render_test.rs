//! Integration tests for the agentflow renderer
//!
//! Exercise nested records, conditional branches, and determinism through the
//! public API only.

use std::sync::Arc;

use agentflow::{FieldKind, Operator, Params, Prompt, Record, RenderError, Schema, Template, render};
use proptest::prelude::*;

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Debug, Clone, Default)]
struct CodeSubmission {
    language: String,
    filename: String,
}

#[derive(Debug, Clone, Default)]
struct PullRequest {
    is_draft: bool,
    lines_changed: i64,
}

#[derive(Debug, Clone, Default)]
struct ReviewCode {
    author: String,
    code: CodeSubmission,
    pr: PullRequest,
}

impl Params for ReviewCode {
    fn schema() -> Schema {
        Schema::new("ReviewCode")
            .required("Author", FieldKind::String)
            .required(
                "Code",
                FieldKind::Record(
                    Schema::new("CodeSubmission")
                        .required("Language", FieldKind::String)
                        .required("Filename", FieldKind::String),
                ),
            )
            .required(
                "Pr",
                FieldKind::Record(
                    Schema::new("PullRequest")
                        .required("IsDraft", FieldKind::Bool)
                        .required("LinesChanged", FieldKind::Int),
                ),
            )
    }

    fn to_record(&self) -> Record {
        Record::new("ReviewCode")
            .with("Author", &self.author)
            .with(
                "Code",
                Record::new("CodeSubmission")
                    .with("Language", &self.code.language)
                    .with("Filename", &self.code.filename),
            )
            .with(
                "Pr",
                Record::new("PullRequest")
                    .with("IsDraft", self.pr.is_draft)
                    .with("LinesChanged", self.pr.lines_changed),
            )
    }
}

fn review_prompt() -> Prompt<ReviewCode> {
    let template = Template::builder("ReviewCode")
        .text("Review ")
        .var("Code.Filename")
        .text(" (")
        .var("Code.Language")
        .text(") by ")
        .var("Author")
        .text(".\n")
        .when("Pr.LinesChanged", Operator::Gte(500), |b| {
            b.text("WARNING: large change (").var("Pr.LinesChanged").text(" lines).\n")
        })
        .when_else(
            "Pr.IsDraft",
            Operator::Truthy,
            |b| b.text("Draft: focus on direction.\n"),
            |b| b.text("Ready: review thoroughly.\n"),
        )
        .build()
        .expect("template should build");
    Prompt::new(template).expect("template should match ReviewCode")
}

fn review(lines: i64, draft: bool) -> ReviewCode {
    ReviewCode {
        author: "alice".to_string(),
        code: CodeSubmission {
            language: "go".to_string(),
            filename: "handler.go".to_string(),
        },
        pr: PullRequest {
            is_draft: draft,
            lines_changed: lines,
        },
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_nested_access_renders_language() {
    let output = review_prompt().render(&review(42, false)).unwrap();
    assert_eq!(output, "Review handler.go (go) by alice.\nReady: review thoroughly.\n");
}

#[test]
fn test_large_change_warning() {
    let prompt = review_prompt();

    let large = prompt.render(&review(600, false)).unwrap();
    assert!(large.contains("WARNING: large change (600 lines).\n"));

    let small = prompt.render(&review(42, false)).unwrap();
    assert!(!small.contains("WARNING"));
}

#[test]
fn test_large_change_boundary() {
    let prompt = review_prompt();
    assert!(prompt.render(&review(500, false)).unwrap().contains("WARNING"));
    assert!(!prompt.render(&review(499, false)).unwrap().contains("WARNING"));
}

#[test]
fn test_draft_branches() {
    let prompt = review_prompt();
    assert!(prompt.render(&review(1, true)).unwrap().ends_with("Draft: focus on direction.\n"));
    assert!(prompt.render(&review(1, false)).unwrap().ends_with("Ready: review thoroughly.\n"));
}

#[test]
fn test_unknown_field_rejected_at_definition() {
    let template = Template::builder("ReviewCode")
        .var("Pr.Title")
        .build()
        .expect("path syntax is valid");

    let err = Prompt::<ReviewCode>::new(template).unwrap_err();
    assert!(matches!(err, RenderError::Path(ref e) if e.segment == "Title" && e.owner == "PullRequest"));
}

#[test]
fn test_dynamic_render_surfaces_path_error() {
    let template = Template::builder("Adhoc").text("before ").var("Missing").build().unwrap();
    let err = render(&template, &Record::new("Adhoc")).unwrap_err();
    assert!(err.is_path_error());
}

#[test]
fn test_concurrent_renders_share_template() {
    let prompt = Arc::new(review_prompt());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let prompt = Arc::clone(&prompt);
                scope.spawn(move || prompt.render(&review(i * 100, i % 2 == 0)).unwrap())
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let output = handle.join().expect("render thread panicked");
            assert_eq!(output, prompt.render(&review(i as i64 * 100, i % 2 == 0)).unwrap());
        }
    });
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    /// Rendering is referentially transparent.
    #[test]
    fn render_is_deterministic(
        author in "[a-z]{0,12}",
        language in "[a-z]{1,8}",
        lines in any::<i64>(),
        draft in any::<bool>(),
    ) {
        let prompt = review_prompt();
        let value = ReviewCode {
            author,
            code: CodeSubmission { language, filename: "f".to_string() },
            pr: PullRequest { is_draft: draft, lines_changed: lines },
        };

        let first = prompt.render(&value).unwrap();
        let second = prompt.render(&value).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The warning appears exactly when the line count reaches the threshold.
    #[test]
    fn warning_tracks_threshold(lines in -10_000i64..10_000) {
        let output = review_prompt().render(&review(lines, false)).unwrap();
        prop_assert_eq!(output.contains("WARNING"), lines >= 500);
    }

    /// An optional section is either fully present or fully absent.
    #[test]
    fn optional_section_is_all_or_nothing(context in "[a-zA-Z ]{0,20}") {
        let template = Template::builder("Qa")
            .text("Q")
            .optional("Context", |b| b.text("\nContext: ").var("Context"))
            .build()
            .unwrap();
        let record = Record::new("Qa").with("Context", context.as_str());

        let output = render(&template, &record).unwrap();
        if context.is_empty() {
            prop_assert_eq!(output, "Q");
        } else {
            prop_assert_eq!(output, format!("Q\nContext: {}", context));
        }
    }
}
