use thiserror::Error;

/// Errors raised by the analyzer itself.
///
/// `UnexpectedNodeKind` is a contract breach between the matcher and the
/// checker: the matcher only admits package-qualified type references, so the
/// checker extracting the type-name token from anything else means the two
/// disagreed on the shape of an already-matched node. Callers treat it as
/// fatal, never as a skippable condition.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("unexpected node kind: expected {expected}, found {found}")]
    UnexpectedNodeKind { expected: String, found: String },
}

impl AnalyzerError {
    pub fn unexpected_node_kind(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedNodeKind {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
