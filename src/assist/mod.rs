//! Text generation: the one external collaborator. The workspace only needs
//! "given a prompt, return text"; everything about prompts and parsing lives
//! here, and providers plug in through [`TextGenerator`].

pub mod command;
pub mod prompts;

pub use command::CommandGenerator;
pub use prompts::{TaskSuggestion, draft_sop, executive_summary, suggest_tasks};

/// Shape the caller expects back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Text,
    /// A JSON array of `{title, description, priority}` objects
    TaskList,
}

impl ResponseFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseFormat::Text => "text",
            ResponseFormat::TaskList => "task-list",
        }
    }
}

/// Sampling hints passed through to the provider
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerationOptions {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub format: ResponseFormat,
}

/// Error type for text generation providers
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no text generator configured")]
    Unavailable,
    #[error("could not run generator: {0}")]
    Io(#[from] std::io::Error),
    #[error("generator exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },
    #[error("generator output is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// User-facing failures of assistant actions. Messages are shown as-is.
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("Enter a title first")]
    MissingTitle,
    #[error("AI failed to generate draft.")]
    DraftFailed,
}

/// A text-completion provider
pub trait TextGenerator {
    fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, GenerationError>;
}

/// Provider used when none is configured; every call fails
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

impl TextGenerator for Unconfigured {
    fn generate(&self, _prompt: &str, _options: &GenerationOptions) -> Result<String, GenerationError> {
        Err(GenerationError::Unavailable)
    }
}
