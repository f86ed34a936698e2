use thiserror::Error;

/// Errors raised by reducers and context lookups.
///
/// Both variants describe programming mistakes (a reducer fed an action it
/// does not know, a consumer composed outside its provider). Nothing in the
/// crate tries to recover from them; they are surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("Unsupported type: {kind}")]
    UnsupportedActionKind { kind: String },

    #[error("{consumer} must be used within a <{provider} />")]
    OutsideProvider {
        consumer: &'static str,
        provider: &'static str,
    },
}

impl ToggleError {
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedActionKind { kind: kind.into() }
    }
}
