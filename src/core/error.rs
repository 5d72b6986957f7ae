use thiserror::Error;

/// Everything that can go wrong between naming a snippet and running it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnippetError {
    /// The snippet could not be built during discovery.
    #[error("snippet '{key}' failed to load: {reason}")]
    Construction { key: String, reason: String },

    /// The snippet exists but needs a different platform.
    #[error("snippet '{key}' only runs on {required} (current platform: {current})")]
    PlatformMismatch {
        key: String,
        required: String,
        current: String,
    },

    /// Several snippets share the requested short name.
    #[error("ambiguous name '{name}', matches: {}", candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },

    /// Nothing matched by key or short name.
    #[error("unknown snippet '{0}'")]
    Unknown(String),

    /// The snippet failed while running.
    #[error("snippet '{key}' failed: {message}")]
    Execution { key: String, message: String },
}

/// Best-effort text for a panic payload caught with `catch_unwind`.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panicked with a non-string payload".to_string()
    }
}
