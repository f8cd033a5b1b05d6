use thiserror::Error;

/// Errors that can occur while reading a text config payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Payload bytes are not valid UTF-8
    #[error("Payload is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidUtf8 { offset: usize },

    /// A `}` appeared with no open node to close
    #[error("Unexpected closing brace on line {line}. No node is open at this point")]
    UnexpectedClosingBrace { line: usize },

    /// The payload ended while a node was still open
    #[error("Node '{name}' was never closed. The payload is truncated or malformed")]
    UnclosedNode { name: String },

    /// A bare node name was not followed by `{`
    #[error("Node '{name}' on line {line} is not followed by an opening brace")]
    MissingOpeningBrace { line: usize, name: String },

    /// A `\` escape sequence that the writer never produces
    #[error("Invalid escape sequence on line {line}")]
    InvalidEscape { line: usize },
}
