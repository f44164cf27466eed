//! agentprompts - prompt library and CLI for agentflow templates
//!
//! Ships the prompt kinds of the assistant, code-review, commit-message,
//! explain-error, and test-generator template files as typed parameter structs
//! paired with validated [`agentflow`] templates.
//!
//! # Modules
//!
//! - [`prompts`] - the prompt library and [`PromptKind`] lookup
//! - [`demo`] - demonstration scenarios rendered by `ap demo`
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod demo;
pub mod describe;
pub mod prompts;

pub use config::{BannerConfig, Config};
pub use demo::{DemoSection, scenarios};
pub use prompts::{PromptKind, PromptLibrary};
