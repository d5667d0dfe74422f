use thiserror::Error;

/// Errors raised while compiling a pattern. Matching itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(String),

    /// A construct the engine recognizes but does not implement yet
    /// (negated sets, anchors, non-greedy quantifiers, ...).
    #[error("unsupported construct: {0}")]
    Unsupported(&'static str),

    #[error("unknown unicode property: {0}")]
    UnknownProperty(String),
}
