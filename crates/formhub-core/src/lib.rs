// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Formhub add-ons workspace.
//!
//! This crate provides the shared error type and the closed category set
//! used by the add-ons catalog and its consumers.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::FormhubError;
pub use types::AddonCategory;
