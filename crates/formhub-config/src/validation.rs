// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as the closed sets of log levels and output formats.

use crate::diagnostic::ConfigError;
use crate::model::FormhubConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &FormhubConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.log.level.trim();
    if !LOG_LEVELS.contains(&level) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{level}` is not one of: {}",
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let format = config.output.format.trim();
    if !OUTPUT_FORMATS.contains(&format) {
        errors.push(ConfigError::Validation {
            message: format!(
                "output.format `{format}` is not one of: {}",
                OUTPUT_FORMATS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
