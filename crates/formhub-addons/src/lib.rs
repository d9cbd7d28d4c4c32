// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Add-on project catalog and registry for the Formhub webform module.
//!
//! The catalog is a hand-curated, compiled-in table of third-party projects
//! that extend the webform module. `builtin_catalog` returns the raw table;
//! `AddonRegistry` serves read-only lookups over it: by name, by category,
//! by third-party-settings support, and by free-text search. Consumers
//! construct one registry at startup and pass it by reference; there is no
//! global instance.

pub mod catalog;
pub mod project;
pub mod registry;

pub use catalog::{builtin_catalog, search_catalog};
pub use project::AddonProject;
pub use registry::AddonRegistry;
