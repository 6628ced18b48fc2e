//! Kernel execution configuration.
//!
//! Options are layered with figment, later sources overriding earlier ones:
//!
//! 1. [`KernelConfig::default`]
//! 2. a TOML file or string
//! 3. environment variables prefixed `KNNKIT_` (e.g. `KNNKIT_MAX_WORKERS=8`)
//!
//! ```toml
//! use_simd = true
//! multithread = true
//! max_workers = 0   # 0 = all available hardware threads
//! ```

use std::num::NonZeroUsize;
use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "KNNKIT_";

/// Execution flags read by the kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Use the vector-register Manhattan path.
    pub use_simd: bool,
    /// Fan row reductions out across a worker pool.
    pub multithread: bool,
    /// Worker pool capacity; `0` means all available hardware threads.
    pub max_workers: usize,
}

impl KernelConfig {
    /// Creates a config with every option off and `max_workers = 0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: select the SIMD Manhattan path.
    #[must_use]
    pub fn with_simd(mut self, use_simd: bool) -> Self {
        self.use_simd = use_simd;
        self
    }

    /// Builder: enable the worker-pool fan-out.
    #[must_use]
    pub fn with_multithread(mut self, multithread: bool) -> Self {
        self.multithread = multithread;
        self
    }

    /// Builder: set the worker pool capacity (`0` = all hardware threads).
    #[must_use]
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    /// Returns the worker count to use, resolving `0` to the host's
    /// available parallelism (1 if it cannot be queried).
    #[must_use]
    pub fn effective_workers(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.max_workers).unwrap_or_else(|| {
            std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
        })
    }

    /// Loads defaults, then `path` (if it exists), then `KNNKIT_*` variables.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Self = Self::figment()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        tracing::info!(path = %path.display(), ?config, "kernel configuration loaded");
        Ok(config)
    }

    /// Loads defaults, then `KNNKIT_*` variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::figment().merge(Env::prefixed(ENV_PREFIX)).extract()?)
    }

    /// Parses a TOML document on top of the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Self::figment().merge(Toml::string(toml)).extract()?)
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }
}
