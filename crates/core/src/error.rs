//! Errors raised while turning arguments into a request.

/// Result type for request construction.
pub type InputResult<T> = Result<T, InputError>;

/// Invalid or missing user input, detected before any network activity.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// `--params` is not valid JSON.
    #[error("invalid --params JSON: {0}")]
    InvalidParamsJson(#[source] serde_json::Error),

    /// `--params` parsed, but not to a JSON object.
    #[error("invalid --params JSON: expected an object, got {0}")]
    ParamsNotObject(&'static str),

    /// `tools/call` was requested without a tool name.
    #[error("--name required for tools/call")]
    MissingToolName,
}

impl InputError {
    /// Process exit code for input errors.
    pub const EXIT_CODE: u8 = 2;
}
