// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Formhub add-ons workspace.

use thiserror::Error;

/// The primary error type used across the add-ons catalog and its consumers.
#[derive(Debug, Error)]
pub enum FormhubError {
    /// Configuration errors (invalid catalog table, bad config values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Requested add-on project was not found in the registry.
    #[error("add-on project not found: {name}")]
    ProjectNotFound { name: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
