// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests over the built-in add-ons registry.
//!
//! These pin the curated table's externally observable behavior: entry
//! count, ordering, category partitioning, and the flag subsets.

use std::collections::HashSet;

use formhub_addons::AddonRegistry;
use formhub_core::{AddonCategory, FormhubError};

#[test]
fn every_declared_name_resolves_to_itself() {
    let registry = AddonRegistry::builtin();
    for project in registry.projects(None) {
        let found = registry.get(&project.name).unwrap();
        assert_eq!(found.name, project.name);
    }
}

#[test]
fn unknown_name_fails_with_not_found() {
    let registry = AddonRegistry::builtin();
    let err = registry.get("does-not-exist").unwrap_err();
    assert!(matches!(err, FormhubError::ProjectNotFound { ref name } if name == "does-not-exist"));
}

#[test]
fn full_listing_has_seventy_six_unique_entries() {
    let registry = AddonRegistry::builtin();
    let all = registry.projects(None);
    assert_eq!(all.len(), 76);
    assert_eq!(registry.len(), 76);

    let names: HashSet<&str> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names.len(), all.len());
}

#[test]
fn category_listings_partition_the_catalog() {
    let registry = AddonRegistry::builtin();
    let mut union_count = 0;
    for (category, _title) in registry.categories() {
        let entries = registry.projects(Some(category));
        assert!(entries.iter().all(|p| p.category == category));
        union_count += entries.len();
    }
    // Every entry has an enum-typed category, so the per-category listings
    // partition the full listing exactly.
    assert_eq!(union_count, registry.len());
}

#[test]
fn category_filter_preserves_declaration_order() {
    let registry = AddonRegistry::builtin();
    let all = registry.projects(None);
    let spam = registry.projects(Some(AddonCategory::Spam));

    let spam_from_all: Vec<&str> = all
        .iter()
        .filter(|p| p.category == AddonCategory::Spam)
        .map(|p| p.name.as_str())
        .collect();
    let spam_names: Vec<&str> = spam.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(spam_names, spam_from_all);
    assert_eq!(
        spam_names,
        vec!["antibot", "captcha", "honeypot", "cleantalk", "hp"]
    );
}

#[test]
fn third_party_settings_listing_is_the_flagged_subset() {
    let registry = AddonRegistry::builtin();
    let flagged = registry.third_party_settings();

    assert!(flagged.iter().all(|p| p.third_party_settings));
    let names: Vec<&str> = flagged.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["antibot", "honeypot"]);

    // An entry without the flag never appears.
    let address = registry.get("address").unwrap();
    assert!(!address.third_party_settings);
    assert!(!names.contains(&"address"));
}

#[test]
fn listing_operations_are_idempotent() {
    let registry = AddonRegistry::builtin();

    let first: Vec<String> = registry
        .projects(None)
        .iter()
        .map(|p| p.name.clone())
        .collect();
    let second: Vec<String> = registry
        .projects(None)
        .iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(first, second);

    let tps_first: Vec<String> = registry
        .third_party_settings()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    let tps_second: Vec<String> = registry
        .third_party_settings()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(tps_first, tps_second);

    let categories_first: Vec<_> = registry.categories().collect();
    let categories_second: Vec<_> = registry.categories().collect();
    assert_eq!(categories_first, categories_second);
}

#[test]
fn captcha_entry_matches_curation() {
    let registry = AddonRegistry::builtin();
    let captcha = registry.get("captcha").unwrap();
    assert_eq!(captcha.title, "CAPTCHA");
    assert_eq!(captcha.category, AddonCategory::Spam);
    assert!(captcha.recommended);
    assert!(!captcha.third_party_settings);
}

#[test]
fn categories_listing_is_fixed_and_ordered() {
    let registry = AddonRegistry::builtin();
    let categories: Vec<(AddonCategory, &str)> = registry.categories().collect();
    assert_eq!(categories.len(), 14);
    assert_eq!(
        categories[0],
        (AddonCategory::Config, "Configuration management")
    );
    assert_eq!(categories[8], (AddonCategory::Spam, "SPAM Protection"));
    assert_eq!(categories[13], (AddonCategory::Development, "Development"));
}

#[test]
fn full_listing_keeps_declaration_order() {
    let registry = AddonRegistry::builtin();
    let all = registry.projects(None);
    assert_eq!(all[0].name, "drush_cmi_tools");
    assert_eq!(all[all.len() - 1].name, "maillog");
}

#[test]
fn search_finds_entries_across_fields() {
    let registry = AddonRegistry::builtin();

    let by_name = registry.search("captcha");
    assert!(by_name.iter().any(|p| p.name == "captcha"));

    let by_title = registry.search("maestro workflow");
    assert!(by_title.iter().any(|p| p.name == "maestro"));

    assert_eq!(registry.search("").len(), 76);
}

#[test]
fn markup_in_titles_is_stored_opaquely() {
    let registry = AddonRegistry::builtin();
    let swiftmailer = registry.get("swiftmailer").unwrap();
    assert_eq!(
        swiftmailer.title,
        "Swift Mailer <em>(requires Mail System)</em>"
    );
}
