use thiserror::Error;

/// Errors from reading linter output.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse {tool} JSON output: {source}")]
    Json {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} output is not an array")]
    NotAnArray(&'static str),

    #[error("{0} is not a JSON object")]
    NotAnObject(&'static str),
}

impl ParseError {
    pub(crate) fn json(tool: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| ParseError::Json { tool, source }
    }
}
