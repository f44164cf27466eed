//! Test generation prompts (test-generator.af)

use agentflow::{FieldKind, Operator, Params, Record, RenderError, Schema, Template};
use serde::{Deserialize, Serialize};

/// Coverage targets at or above this ask for exhaustive tests
pub const HIGH_COVERAGE: i64 = 90;

/// Coverage targets at or below this ask for happy-path tests only
pub const LOW_COVERAGE: i64 = 50;

/// System prompt for test generation; takes no parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestGenerationSystem {}

impl Params for TestGenerationSystem {
    fn schema() -> Schema {
        Schema::new("TestGenerationSystem")
    }

    fn to_record(&self) -> Record {
        Record::new("TestGenerationSystem")
    }
}

pub fn test_generation_system() -> Result<Template, RenderError> {
    Template::builder("TestGenerationSystem")
        .text(
            "You write readable unit tests that follow the conventions of the target framework.\n\
             Output only test code, with a short comment above each test.\n",
        )
        .build()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateTests {
    pub test_framework: String,
    pub language: String,
    pub source_code: String,
    #[serde(default)]
    pub function_name: String,
    #[serde(default)]
    pub existing_tests: String,
    #[serde(default)]
    pub coverage_target: i64,
}

impl Params for GenerateTests {
    fn schema() -> Schema {
        Schema::new("GenerateTests")
            .required("TestFramework", FieldKind::String)
            .required("Language", FieldKind::String)
            .required("SourceCode", FieldKind::String)
            .optional("FunctionName", FieldKind::String)
            .optional("ExistingTests", FieldKind::String)
            .optional("CoverageTarget", FieldKind::Int)
    }

    fn to_record(&self) -> Record {
        Record::new("GenerateTests")
            .with("TestFramework", &self.test_framework)
            .with("Language", &self.language)
            .with("SourceCode", &self.source_code)
            .with_optional("FunctionName", &self.function_name)
            .with_optional("ExistingTests", &self.existing_tests)
            .with_optional("CoverageTarget", self.coverage_target)
    }
}

pub fn generate_tests() -> Result<Template, RenderError> {
    Template::builder("GenerateTests")
        .text("Write ")
        .var("TestFramework")
        .text(" tests for the following ")
        .var("Language")
        .text(" code.\n")
        .optional("FunctionName", |b| b.text("Focus on `").var("FunctionName").text("`.\n"))
        .text("\n```")
        .var("Language")
        .text("\n")
        .var("SourceCode")
        .text("\n```\n")
        .optional("ExistingTests", |b| {
            b.text("\nThese tests already exist; do not duplicate them:\n```")
                .var("Language")
                .text("\n")
                .var("ExistingTests")
                .text("\n```\n")
        })
        .optional("CoverageTarget", |b| {
            b.when_else(
                "CoverageTarget",
                Operator::Gte(HIGH_COVERAGE),
                |b| {
                    b.text("\nAim for at least ")
                        .var("CoverageTarget")
                        .text("% line coverage, including error paths and boundary values.\n")
                },
                |b| {
                    b.when_else(
                        "CoverageTarget",
                        Operator::Lte(LOW_COVERAGE),
                        |b| {
                            b.text("\nA coverage target of ")
                                .var("CoverageTarget")
                                .text("% is enough; test the main happy paths only.\n")
                        },
                        |b| b.text("\nAim for about ").var("CoverageTarget").text("% line coverage.\n"),
                    )
                },
            )
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentflow::Prompt;

    fn prompt() -> Prompt<GenerateTests> {
        Prompt::new(generate_tests().unwrap()).unwrap()
    }

    fn request(coverage_target: i64) -> GenerateTests {
        GenerateTests {
            test_framework: "pytest".to_string(),
            language: "python".to_string(),
            source_code: "def f(): pass".to_string(),
            coverage_target,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_coverage_target() {
        let output = prompt().render(&request(0)).unwrap();
        assert_eq!(
            output,
            "Write pytest tests for the following python code.\n\n```python\ndef f(): pass\n```\n"
        );
    }

    #[test]
    fn test_high_coverage_boundary() {
        assert!(prompt().render(&request(90)).unwrap().contains("at least 90% line coverage"));
        assert!(prompt().render(&request(89)).unwrap().contains("about 89% line coverage"));
    }

    #[test]
    fn test_low_coverage_boundary() {
        assert!(prompt().render(&request(50)).unwrap().contains("target of 50% is enough"));
        assert!(prompt().render(&request(51)).unwrap().contains("about 51%"));
    }

    #[test]
    fn test_function_and_existing_tests() {
        let mut value = request(0);
        value.function_name = "fibonacci".to_string();
        value.existing_tests = "def test_zero(): assert f() is None".to_string();

        let output = prompt().render(&value).unwrap();
        assert!(output.contains("code.\nFocus on `fibonacci`.\n\n```python"));
        assert!(output.ends_with("do not duplicate them:\n```python\ndef test_zero(): assert f() is None\n```\n"));
    }
}
