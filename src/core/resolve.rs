use tracing::{debug, warn};

use super::{error::SnippetError, registry::Registry, snippet::Snippet};

/// A token that named exactly one runnable snippet.
pub struct Resolved<'a> {
    pub key: &'a str,
    pub snippet: &'a dyn Snippet,
}

impl Registry {
    /// Look up a snippet by full key or short name.
    ///
    /// The token is trimmed and compared case-insensitively. Exact keys take
    /// precedence over short names, and broken or platform-restricted keys
    /// are reported before anything runnable is considered.
    ///
    /// # Errors
    /// `Construction` or `PlatformMismatch` for keys that exist but cannot
    /// run, `Ambiguous` when a short name matches several keys, `Unknown`
    /// otherwise.
    pub fn resolve(&self, token: &str) -> Result<Resolved<'_>, SnippetError> {
        let token = token.trim().to_lowercase();
        debug!(token = %token, "resolving snippet");

        if let Some(reason) = self.broken.get(&token) {
            return Err(SnippetError::Construction {
                key: token,
                reason: reason.clone(),
            });
        }
        if let Some(required) = self.restricted.get(&token) {
            return Err(SnippetError::PlatformMismatch {
                key: token,
                required: required.clone(),
                current: self.platform.clone(),
            });
        }
        if let Some(found) = self.lookup(&token) {
            return Ok(found);
        }

        match self.short_names.get(&token) {
            Some(keys) if keys.len() > 1 => Err(SnippetError::Ambiguous {
                name: token,
                candidates: keys.iter().cloned().collect(),
            }),
            Some(keys) => {
                let found = keys
                    .first()
                    .filter(|key| !self.broken.contains_key(*key) && !self.restricted.contains_key(*key))
                    .and_then(|key| self.lookup(key));
                if found.is_none() {
                    warn!(token = %token, "short-name index points at a key that is not runnable");
                }
                found.ok_or(SnippetError::Unknown(token))
            }
            None => Err(SnippetError::Unknown(token)),
        }
    }

    fn lookup(&self, key: &str) -> Option<Resolved<'_>> {
        self.runnable.get_key_value(key).map(|(key, snippet)| Resolved {
            key: key.as_str(),
            snippet: snippet.as_ref(),
        })
    }
}
