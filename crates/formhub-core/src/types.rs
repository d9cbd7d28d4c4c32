// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the Formhub add-ons workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Category an add-on project is listed under.
///
/// The set is closed and defined once; it does not grow at runtime. Wire
/// and display identifiers are the lowercase variant names (`config`,
/// `element`, ..., `development`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AddonCategory {
    Config,
    Element,
    Enhancement,
    Integration,
    Mail,
    Migrate,
    Multilingual,
    Rest,
    Spam,
    Submission,
    Validation,
    Utility,
    Workflow,
    Development,
}

impl AddonCategory {
    /// All categories in their declared order.
    pub const ALL: [Self; 14] = [
        Self::Config,
        Self::Element,
        Self::Enhancement,
        Self::Integration,
        Self::Mail,
        Self::Migrate,
        Self::Multilingual,
        Self::Rest,
        Self::Spam,
        Self::Submission,
        Self::Validation,
        Self::Utility,
        Self::Workflow,
        Self::Development,
    ];

    /// Human-readable title shown by presentation layers.
    pub fn title(self) -> &'static str {
        match self {
            Self::Config => "Configuration management",
            Self::Element => "Elements",
            Self::Enhancement => "Enhancements",
            Self::Integration => "Integration",
            Self::Mail => "Mail",
            Self::Migrate => "Migrate",
            Self::Multilingual => "Multilingual",
            Self::Rest => "REST",
            Self::Spam => "SPAM Protection",
            Self::Submission => "Submissions",
            Self::Validation => "Validation",
            Self::Utility => "Utility",
            Self::Workflow => "Workflow",
            Self::Development => "Development",
        }
    }
}
