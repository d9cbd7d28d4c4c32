// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The add-on project record.

use formhub_core::AddonCategory;
use serde::{Deserialize, Serialize};

/// One entry in the add-ons catalog.
///
/// Titles may embed simple inline markup (e.g. `<em>...</em>`) as a display
/// hint. The catalog stores it opaquely; rendering belongs to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonProject {
    /// Unique machine name of the project (e.g. "antibot").
    pub name: String,
    /// Display title.
    pub title: String,
    /// Free-text summary.
    pub description: String,
    /// Absolute external reference URL. Stored as-is, never validated.
    pub url: String,
    /// Category the project is listed under.
    pub category: AddonCategory,
    /// Curated, endorsed entry.
    #[serde(default)]
    pub recommended: bool,
    /// Integrates through the webform third-party-settings mechanism.
    #[serde(default)]
    pub third_party_settings: bool,
    /// Commonly co-installed alongside the webform module.
    #[serde(default)]
    pub install: bool,
}

impl AddonProject {
    /// Create a project entry with all flags cleared.
    pub fn new(
        name: &str,
        title: &str,
        description: &str,
        url: &str,
        category: AddonCategory,
    ) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            category,
            recommended: false,
            third_party_settings: false,
            install: false,
        }
    }

    /// Mark the project as recommended.
    #[must_use]
    pub fn recommended(mut self) -> Self {
        self.recommended = true;
        self
    }

    /// Mark the project as integrating via third-party settings.
    #[must_use]
    pub fn third_party_settings(mut self) -> Self {
        self.third_party_settings = true;
        self
    }

    /// Mark the project as an install-together dependency.
    #[must_use]
    pub fn install(mut self) -> Self {
        self.install = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clears_all_flags() {
        let project = AddonProject::new(
            "example",
            "Example",
            "An example project.",
            "https://www.formhub.org/project/example",
            AddonCategory::Utility,
        );
        assert!(!project.recommended);
        assert!(!project.third_party_settings);
        assert!(!project.install);
    }

    #[test]
    fn flag_builders_set_flags() {
        let project = AddonProject::new(
            "example",
            "Example",
            "An example project.",
            "https://www.formhub.org/project/example",
            AddonCategory::Utility,
        )
        .recommended()
        .third_party_settings()
        .install();
        assert!(project.recommended);
        assert!(project.third_party_settings);
        assert!(project.install);
    }

    #[test]
    fn serde_round_trip_preserves_entry() {
        let project = AddonProject::new(
            "antibot",
            "Antibot",
            "Prevent forms from being submitted without JavaScript enabled.",
            "https://www.formhub.org/project/antibot",
            AddonCategory::Spam,
        )
        .recommended()
        .third_party_settings();

        let json = serde_json::to_string(&project).expect("should serialize");
        let parsed: AddonProject = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(project, parsed);
    }

    #[test]
    fn missing_flags_deserialize_as_false() {
        let json = r#"{
            "name": "address",
            "title": "Address",
            "description": "Postal addresses.",
            "url": "https://www.formhub.org/project/address",
            "category": "element"
        }"#;
        let parsed: AddonProject = serde_json::from_str(json).expect("should deserialize");
        assert!(!parsed.recommended);
        assert!(!parsed.third_party_settings);
        assert!(!parsed.install);
    }
}
