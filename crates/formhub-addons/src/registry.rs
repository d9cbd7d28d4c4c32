// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only registry over the add-ons catalog.
//!
//! The `AddonRegistry` stores `AddonProject` records keyed by machine name.
//! It is built once from a fixed table and never mutated afterward, so any
//! number of readers may share a reference without synchronization.

use std::collections::HashMap;

use formhub_core::{AddonCategory, FormhubError};
use tracing::debug;

use crate::catalog::builtin_catalog;
use crate::project::AddonProject;

/// Registry of add-on projects keyed by machine name.
///
/// Projects are held in catalog declaration order; a name index provides
/// O(1) single-entry lookup. All fields are private and no mutating
/// methods exist, so the registry is immutable after construction.
#[derive(Debug, Clone)]
pub struct AddonRegistry {
    projects: Vec<AddonProject>,
    by_name: HashMap<String, usize>,
}

impl AddonRegistry {
    /// Build a registry from an explicit project table.
    ///
    /// Every name must be non-empty, free of surrounding whitespace, and
    /// unique. Violations are table authoring errors and are rejected with
    /// `FormhubError::Config`.
    pub fn from_projects(projects: Vec<AddonProject>) -> Result<Self, FormhubError> {
        let mut by_name = HashMap::with_capacity(projects.len());
        for (idx, project) in projects.iter().enumerate() {
            if project.name.is_empty() {
                return Err(FormhubError::Config(
                    "catalog entry with empty name".to_string(),
                ));
            }
            if project.name.trim() != project.name {
                return Err(FormhubError::Config(format!(
                    "catalog entry name `{}` has surrounding whitespace",
                    project.name.escape_debug()
                )));
            }
            if by_name.insert(project.name.clone(), idx).is_some() {
                return Err(FormhubError::Config(format!(
                    "duplicate catalog entry name `{}`",
                    project.name
                )));
            }
        }
        debug!(count = projects.len(), "addon registry built");
        Ok(Self { projects, by_name })
    }

    /// Registry over the compiled-in catalog table.
    pub fn builtin() -> Self {
        match Self::from_projects(builtin_catalog()) {
            Ok(registry) => registry,
            // The built-in table is pinned by this crate's tests; reaching
            // this arm means the literal data itself is broken.
            Err(err) => unreachable!("built-in catalog is invalid: {err}"),
        }
    }

    /// Resolve a project by machine name, or `None` when absent.
    pub fn find(&self, name: &str) -> Option<&AddonProject> {
        self.by_name.get(name).map(|&idx| &self.projects[idx])
    }

    /// Resolve a project by machine name.
    ///
    /// Fails with `FormhubError::ProjectNotFound` for unknown names rather
    /// than returning a default, so caller typos surface immediately.
    pub fn get(&self, name: &str) -> Result<&AddonProject, FormhubError> {
        self.find(name).ok_or_else(|| {
            debug!(name, "lookup missed the catalog");
            FormhubError::ProjectNotFound {
                name: name.to_string(),
            }
        })
    }

    /// List projects in declaration order, optionally restricted to one
    /// category. Relative order is preserved when filtering; an empty vec
    /// is returned when nothing matches.
    pub fn projects(&self, category: Option<AddonCategory>) -> Vec<&AddonProject> {
        match category {
            None => self.projects.iter().collect(),
            Some(category) => self
                .projects
                .iter()
                .filter(|p| p.category == category)
                .collect(),
        }
    }

    /// List projects that integrate via third-party settings, in
    /// declaration order.
    pub fn third_party_settings(&self) -> Vec<&AddonProject> {
        self.projects
            .iter()
            .filter(|p| p.third_party_settings)
            .collect()
    }

    /// The fixed category set with display titles, in declared order.
    pub fn categories(&self) -> impl Iterator<Item = (AddonCategory, &'static str)> {
        AddonCategory::ALL.iter().map(|&c| (c, c.title()))
    }

    /// Search projects by case-insensitive substring over name, title, and
    /// description. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&AddonProject> {
        if query.is_empty() {
            return self.projects.iter().collect();
        }
        let query_lower = query.to_lowercase();
        self.projects
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query_lower)
                    || p.title.to_lowercase().contains(&query_lower)
                    || p.description.to_lowercase().contains(&query_lower)
            })
            .collect()
    }

    /// Number of projects in the registry.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns true if the registry holds no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
