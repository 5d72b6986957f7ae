use anyhow::{Context, Result};

/// Environment variable that overrides the detected platform.
pub const PLATFORM_ENV: &str = "SNIPPET_RUNNER_PLATFORM";

/// Runner configuration resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Platform label that platform-gated snippets are checked against.
    pub platform: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            platform: host_platform().to_string(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration with precedence: `--platform` flag → environment → host OS.
    ///
    /// # Errors
    /// Returns an error if the environment override is set but not valid UTF-8.
    pub fn load(platform_flag: Option<&str>) -> Result<Self> {
        let from_env = match std::env::var(PLATFORM_ENV) {
            Ok(v) => Some(v),
            Err(std::env::VarError::NotPresent) => None,
            Err(e) => return Err(e).with_context(|| format!("invalid {PLATFORM_ENV}")),
        };
        Ok(Self::resolve(platform_flag, from_env.as_deref()))
    }

    /// Apply the precedence rules to already-read values. Blank values are ignored.
    #[must_use]
    pub fn resolve(platform_flag: Option<&str>, from_env: Option<&str>) -> Self {
        let mut out = Self::default();
        if let Some(p) = platform_flag
            .or(from_env)
            .map(str::trim)
            .filter(|p| !p.is_empty())
        {
            out.platform = p.to_string();
        }
        out
    }
}

/// Platform label for the OS this binary was built for.
#[must_use]
pub const fn host_platform() -> &'static str {
    match std::env::consts::OS.as_bytes() {
        b"windows" => "Windows",
        b"macos" => "Mac",
        b"linux" => "Linux",
        _ => std::env::consts::OS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_environment() {
        let cfg = RunnerConfig::resolve(Some("Windows"), Some("Mac"));
        assert_eq!(cfg.platform, "Windows");
    }

    #[test]
    fn environment_beats_host() {
        let cfg = RunnerConfig::resolve(None, Some(" Mac "));
        assert_eq!(cfg.platform, "Mac");
    }

    #[test]
    fn blank_values_fall_back_to_host() {
        let cfg = RunnerConfig::resolve(Some(""), None);
        assert_eq!(cfg, RunnerConfig::default());
        assert_eq!(cfg.platform, host_platform());
    }
}
