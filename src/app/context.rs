use crate::{config::RunnerConfig, core::Registry};

pub struct AppContext {
    pub cfg: RunnerConfig,
    pub registry: Registry,
    pub verbosity: u8,
}

impl AppContext {
    pub const fn new(cfg: RunnerConfig, registry: Registry, verbosity: u8) -> Self {
        Self {
            cfg,
            registry,
            verbosity,
        }
    }

    /// Convenience constructor discovering every registered snippet for the
    /// configured platform.
    #[must_use]
    pub fn discover(cfg: RunnerConfig, verbosity: u8) -> Self {
        let registry = Registry::discover(&cfg.platform);
        Self::new(cfg, registry, verbosity)
    }
}
