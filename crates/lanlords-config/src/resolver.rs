//! Option resolution against the environment and the persisted config.

use std::env;

use crate::error::{ConfigError, ConfigResult};
use crate::registry;
use crate::store::ConfigStore;

/// Resolves dotted option names to concrete string values.
///
/// Resolution order, first hit wins: the descriptor's environment variable
/// (a variable set to the empty string still wins), then the persisted
/// config file. Nothing is cached; each lookup re-reads the file.
#[derive(Debug, Clone)]
pub struct OptionResolver {
    store: ConfigStore,
}

impl OptionResolver {
    /// Create a resolver backed by `store`.
    #[must_use]
    pub const fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    /// Resolve `option`, given as `<section>.<option>`.
    ///
    /// Segments past the second are ignored, so `a.b.c` resolves `(a, b)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOptionFormat`] for undotted keys,
    /// [`ConfigError::UnknownOption`] for unregistered ones, and
    /// [`ConfigError::ConfigMissing`]/[`ConfigError::OptionNotSet`] when no
    /// value can be resolved from the environment or the config file.
    pub fn resolve(&self, option: &str) -> ConfigResult<String> {
        let (section, name) = split_option(option)?;
        let descriptor =
            registry::lookup(section, name).ok_or_else(|| ConfigError::UnknownOption {
                option: option.to_string(),
            })?;

        if let Some(variable) = descriptor.env {
            if let Ok(value) = env::var(variable) {
                tracing::debug!(option, variable, "resolved from environment");
                return Ok(value);
            }
        }

        let document = self.store.load()?;
        document
            .get(descriptor.section, descriptor.name)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::OptionNotSet {
                option: format!("{}.{}", descriptor.section, descriptor.name),
            })
    }
}

/// Split a dotted option key into its first two segments.
fn split_option(option: &str) -> ConfigResult<(&str, &str)> {
    let mut segments = option.split('.');
    let section = segments.next().unwrap_or_default();
    let name = segments.next().ok_or_else(|| ConfigError::InvalidOptionFormat {
        option: option.to_string(),
    })?;
    Ok((section, name))
}
