// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./formhub.toml` > `~/.config/formhub/formhub.toml`
//! > `/etc/formhub/formhub.toml` with environment variable overrides via the
//! `FORMHUB_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::FormhubConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/formhub/formhub.toml` (system-wide)
/// 3. `~/.config/formhub/formhub.toml` (user XDG config)
/// 4. `./formhub.toml` (local directory)
/// 5. `FORMHUB_*` environment variables
pub fn load_config() -> Result<FormhubConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FormhubConfig::default()))
        .merge(Toml::file("/etc/formhub/formhub.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("formhub/formhub.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("formhub.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<FormhubConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FormhubConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<FormhubConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FormhubConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` so section prefixes map cleanly:
/// `FORMHUB_OUTPUT_FORMAT` must become `output.format`, never `output.for.mat`.
fn env_provider() -> Env {
    Env::prefixed("FORMHUB_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: FORMHUB_LOG_LEVEL -> "log_level" -> "log.level"
        let key_str = key.as_str().to_ascii_lowercase();
        let mapped = key_str
            .replacen("log_", "log.", 1)
            .replacen("output_", "output.", 1);
        mapped.into()
    })
}
