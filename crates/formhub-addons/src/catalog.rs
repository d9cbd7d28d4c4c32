// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in add-on project catalog.
//!
//! Returns hardcoded `AddonProject` entries for the third-party projects
//! that extend the webform module. The table is hand-curated, compiled in,
//! and served read-only; no network calls are made.

use formhub_core::AddonCategory;

use crate::project::AddonProject;

/// Returns the full hand-curated add-ons table in declaration order.
///
/// The table currently holds 76 projects across the 14 categories. Entries
/// are grouped by category section below; the declaration order is the
/// canonical listing order surfaced by the registry.
pub fn builtin_catalog() -> Vec<AddonProject> {
    vec![
        // Config.
        AddonProject::new(
            "drush_cmi_tools",
            "Drush CMI tools",
            "Provides advanced CMI import and export functionality for CMI workflows. Drush CMI tools should be used to protect Forms from being overwritten during a configuration import.",
            "https://github.com/previousnext/drush_cmi_tools",
            AddonCategory::Config,
        ),
        AddonProject::new(
            "config_entity_revisions",
            "Config Entity Revisions",
            "Provides an API for augmenting configuration entities with revision and moderation support.",
            "https://www.formhub.org/project/config_entity_revisions",
            AddonCategory::Config,
        ),
        AddonProject::new(
            "config_ignore",
            "Config Ignore",
            "Ignore certain configuration during import.",
            "https://www.formhub.org/project/config_ignore",
            AddonCategory::Config,
        ),
        AddonProject::new(
            "config_split",
            "Configuration Split",
            "Provides configuration filter for importing and exporting split config.",
            "https://www.formhub.org/project/config_split",
            AddonCategory::Config,
        ),
        AddonProject::new(
            "webform_config_ignore",
            "Webform Config Ignore",
            "Adds a filter to configuration import and export to skip webforms and webform options.",
            "https://www.formhub.org/project/webform_config_ignore",
            AddonCategory::Config,
        ),
        AddonProject::new(
            "webform_config_key_value",
            "Webform Config Key Value",
            "Use the KeyValueStorage to save webform config instead of yaml config storage, allowing webforms to be treated more like content than configuration and are excluded from the configuration imports/exports.",
            "https://www.formhub.org/sandbox/thtas/2994250",
            AddonCategory::Config,
        ),
        // Element.
        AddonProject::new(
            "address",
            "Address",
            "Provides functionality for storing, validating and displaying international postal addresses.",
            "https://www.formhub.org/project/address",
            AddonCategory::Element,
        )
        .recommended(),
        AddonProject::new(
            "loqate",
            "Loqate",
            "Provides the webform element called Address Loqate which integration with Loqate (previously PCA/Addressy) address lookup.",
            "https://www.formhub.org/project/loqate",
            AddonCategory::Element,
        ),
        AddonProject::new(
            "webform_composite",
            "Webform Composite Tools",
            "Provides a reusable composite element for use on webforms.",
            "https://www.formhub.org/project/webform_composite",
            AddonCategory::Element,
        ),
        AddonProject::new(
            "webform_checkboxes_table",
            "Webform Checkboxes Table",
            "Displays checkboxes element in a table grid.",
            "https://github.com/minnur/webform_checkboxes_table",
            AddonCategory::Element,
        ),
        AddonProject::new(
            "webform_craftyclicks",
            "Webform Crafty Clicks",
            "Adds Crafty Clicks UK postcode lookup to the Webform Address composite element.",
            "https://www.formhub.org/project/webform_craftyclicks",
            AddonCategory::Element,
        ),
        AddonProject::new(
            "webform_dropzonejs",
            "Webform DropzoneJS",
            "Creates a new DropzoneJS element that you can add to webforms.",
            "https://www.formhub.org/project/webform_dropzonejs",
            AddonCategory::Element,
        ),
        AddonProject::new(
            "handsontable_yml_webform",
            "Webform Handsontable",
            "Allows both the Formhub Form API and the webform module to use the Excel-like Handsontable library.",
            "https://www.formhub.org/project/handsontable_yml_webform",
            AddonCategory::Element,
        ),
        AddonProject::new(
            "webform_layout_container",
            "Webform Layout Container",
            "Provides a layout container element to add to a webform, which uses old fashion floats to support legacy browsers that don't support CSS Flexbox (IE9 and IE10).",
            "https://www.formhub.org/project/webform_layout_container",
            AddonCategory::Element,
        ),
        AddonProject::new(
            "webform_node_element",
            "Webform Node Element",
            "Provides a 'Node' element to display node content as an element on a webform. Can be modified dynamically using an event handler.",
            "https://www.formhub.org/project/webform_node_element",
            AddonCategory::Element,
        ),
        AddonProject::new(
            "webform_score",
            "Webform Score",
            "Lets you score an individual user's answers, then store and display the scores.",
            "https://www.formhub.org/project/webform_score",
            AddonCategory::Element,
        ),
        AddonProject::new(
            "webform_select_collection",
            "Webform Select Collection",
            "Provides a webform element that groups multiple select elements into single collection.",
            "https://www.formhub.org/project/webform_select_collection",
            AddonCategory::Element,
        ),
        AddonProject::new(
            "webform_shs",
            "Webform Simple Hierarchical Select",
            "Integrates Simple Hierarchical Select module with Webform.",
            "https://www.formhub.org/project/webform_shs",
            AddonCategory::Element,
        ),
        // Enhancement.
        AddonProject::new(
            "webform_embed",
            "Webform Embed",
            "Allows you to embed webforms within an iframe on another site.",
            "https://www.formhub.org/project/webform_embed",
            AddonCategory::Enhancement,
        ),
        AddonProject::new(
            "webform_extra_field",
            "Webform Extra Field",
            "Provides an extra field for placing a webform in any entity display mode.",
            "https://www.formhub.org/project/webform_extra_field",
            AddonCategory::Enhancement,
        ),
        AddonProject::new(
            "webform_protected_downloads",
            "Webform Protected Downloads",
            "Provides protected file downloads using webforms.",
            "https://github.com/timlovrecic/Webform-Protected-Downloads",
            AddonCategory::Enhancement,
        ),
        AddonProject::new(
            "webform_wizard_full_title",
            "Webform Wizard Full Title",
            "Extends functionality of Webform so on wizard forms, the title of the wizard page can override the form title",
            "https://www.formhub.org/project/webform_wizard_full_title",
            AddonCategory::Enhancement,
        ),
        // Integration.
        AddonProject::new(
            "webform_civicrm",
            "Webform CiviCRM Integration",
            "A powerful, flexible, user-friendly form builder for CiviCRM.",
            "https://www.formhub.org/project/webform_civicrm",
            AddonCategory::Integration,
        )
        .recommended(),
        AddonProject::new(
            "ansible",
            "Ansible",
            "Run Ansible playbooks using a Webform handler.",
            "https://www.formhub.org/project/ansible",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "commerce_webform_order",
            "Commerce Webform Order",
            "Integrates Webform with Formhub Commerce and it allows creating orders with the submission data of a Webform via a Webform handler.",
            "https://www.formhub.org/project/commerce_webform_order",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "druminate",
            "Druminate Webforms",
            "Allows editors to send webform submissions to Luminate Online Surveys",
            "https://www.formhub.org/project/druminate",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "graphql_webform",
            "GraphQL Webform",
            "Provides GraphQL integration with the Webform module.",
            "https://github.com/duartegarin/graphql_webform",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "hn-react-webform",
            "Headless Ninja React Webform",
            "With this awesome React component, you can render complete Webforms in React. With validation, easy custom styling and a modern, clean interface.",
            "https://github.com/headless-ninja/hn-react-webform",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "hubspot",
            "Webform HubSpot",
            "Provides HubSpot leads API integration with Formhub.",
            "https://www.formhub.org/project/hubspot",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "micro_webform",
            "Micro Webform",
            "Integrate webform module with a micro site.",
            "https://www.formhub.org/project/micro_webform",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "openinbound",
            "OpenInbound for Formhub",
            "OpenInbound tracks contacts and their interactions on websites.",
            "https://www.formhub.org/project/openinbound",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "webform_icontact",
            "Webform iContact",
            "Send Webform submissions to iContact list.",
            "https://www.formhub.org/sandbox/ibakayoko/2853326",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "webform_mailchimp",
            "Webform MailChimp",
            "Posts form submissions to MailChimp list.",
            "https://www.formhub.org/project/webform_mailchimp",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "webform_myemma",
            "Webform MyEmma",
            "Provides MyEmma subscription field to webforms",
            "https://www.formhub.org/project/webform_myemma",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "webform_product",
            "Webform Product",
            "Links commerce products to webform elements.",
            "https://github.com/chx/webform_product",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "webform_simplenews_handler",
            "Webform Simplenews Handler",
            "Provides a Webform Handler called \"Submission Newsletter\" that allows to link webform submission to one or more Simplenews newsletter subscriptions.",
            "https://www.formhub.org/project/webform_simplenews_handler",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "webform_slack",
            "Webform Slack",
            "Provides a Webform handler for posting a message to a slack channel when a submission is saved.",
            "https://www.formhub.org/sandbox/smaz/2833275",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "stripe_webform",
            "Webform Stripe",
            "Provides a stripe webform element and default handlers.",
            "https://www.formhub.org/project/stripe_webform",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "webform_sugarcrm",
            "Webform SugarCRM Integration",
            "Provides integration for webform submission with SugarCRM.",
            "https://www.formhub.org/project/webform_sugarcrm",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "sfweb2lead_webform",
            "Salesforce Web-to-Lead Webform Data Integration",
            "Integrates Salesforce Web-to-Lead Form feature with various webforms.",
            "https://www.formhub.org/project/sfweb2lead_webform",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "marketing_cloud",
            "Salesforce Marketing Cloud API Integration",
            "Gives Formhub the ability to communicate with Marketing Cloud.",
            "https://www.formhub.org/project/marketing_cloud",
            AddonCategory::Integration,
        ),
        AddonProject::new(
            "webform_to_leads",
            "Salesforce: Webform to Salesforce Leads",
            "Extends the Webform module to allow the creation of a webform that feeds to your Salesforce.com Account",
            "https://www.formhub.org/project/webform_to_leads",
            AddonCategory::Integration,
        ),
        // Mail.
        AddonProject::new(
            "mailsystem",
            "Mail System",
            "Provides a user interface for per-module and site-wide mail system selection.",
            "https://www.formhub.org/project/mailsystem",
            AddonCategory::Mail,
        ),
        AddonProject::new(
            "sendgrid_integration",
            "SendGrid Integration <em>(requires Mail System)</em>",
            "Provides SendGrid Integration for the Formhub Mail System.",
            "https://www.formhub.org/project/sendgrid_integration",
            AddonCategory::Mail,
        ),
        AddonProject::new(
            "swiftmailer",
            "Swift Mailer <em>(requires Mail System)</em>",
            "Installs Swift Mailer as a mail system.",
            "https://www.formhub.org/project/swiftmailer",
            AddonCategory::Mail,
        ),
        AddonProject::new(
            "webform_mass_email",
            "Webform Mass Email",
            "Provides a functionality to send mass email for the subscribers of a webform.",
            "https://www.formhub.org/project/webform_mass_email",
            AddonCategory::Mail,
        ),
        AddonProject::new(
            "webform_send_multiple_emails",
            "Webform Send Multiple Emails",
            "Extends the Webform module Email Handler to send individual emails when multiple recipients are added to the email \"to\" field.",
            "https://www.formhub.org/project/webform_send_multiple_emails",
            AddonCategory::Mail,
        ),
        AddonProject::new(
            "smtp",
            "SMTP Authentication Support",
            "Allows for site emails to be sent through an SMTP server of your choice.",
            "https://www.formhub.org/project/smtp",
            AddonCategory::Mail,
        ),
        // Multilingual.
        AddonProject::new(
            "lingotek",
            "Lingotek Translation.",
            "Translates content, configuration, and interface using the Lingotek Translation Management System.",
            "https://www.formhub.org/project/lingotek",
            AddonCategory::Multilingual,
        ),
        // Migrate.
        AddonProject::new(
            "webform_migrate",
            "Webform Migrate",
            "Provides migration routines from older webform releases to the current webform.",
            "https://www.formhub.org/project/webform_migrate",
            AddonCategory::Migrate,
        )
        .recommended(),
        // Spam.
        AddonProject::new(
            "antibot",
            "Antibot",
            "Prevent forms from being submitted without JavaScript enabled.",
            "https://www.formhub.org/project/antibot",
            AddonCategory::Spam,
        )
        .third_party_settings()
        .recommended(),
        AddonProject::new(
            "captcha",
            "CAPTCHA",
            "Provides CAPTCHA for adding challenges to arbitrary forms.",
            "https://www.formhub.org/project/captcha",
            AddonCategory::Spam,
        )
        .recommended(),
        AddonProject::new(
            "honeypot",
            "Honeypot",
            "Mitigates spam form submissions using the honeypot method.",
            "https://www.formhub.org/project/honeypot",
            AddonCategory::Spam,
        )
        .third_party_settings()
        .recommended(),
        AddonProject::new(
            "cleantalk",
            "CleanTalk",
            "Antispam service from CleanTalk to protect your site.",
            "https://www.formhub.org/project/cleantalk",
            AddonCategory::Spam,
        ),
        AddonProject::new(
            "hp",
            "Human Presence Form Protection",
            "Human Presence is a fraud prevention and form protection service that uses multiple overlapping strategies to fight form spam.",
            "https://www.formhub.org/project/hp",
            AddonCategory::Spam,
        ),
        // Submissions.
        AddonProject::new(
            "webform_analysis",
            "Webform Analysis",
            "Used to obtain statistics on the results of form submissions.",
            "https://www.formhub.org/project/webform_analysis",
            AddonCategory::Submission,
        )
        .recommended(),
        AddonProject::new(
            "webform_query",
            "Webform Query",
            "Query webform submission data.",
            "https://www.formhub.org/project/webform_query",
            AddonCategory::Submission,
        )
        .recommended(),
        AddonProject::new(
            "webform_views",
            "Webform Views",
            "Integrates the Webform and Views modules.",
            "https://www.formhub.org/project/webform_views",
            AddonCategory::Submission,
        )
        .recommended(),
        AddonProject::new(
            "webform_invitation",
            "Webform Invitation",
            "Allows you to restrict submissions to a webform by generating codes (which may then be distributed e.g. by email to participants).",
            "https://www.formhub.org/project/webform_invitation",
            AddonCategory::Submission,
        ),
        AddonProject::new(
            "webform_permissions_by_term",
            "Webform Permissions By Term",
            "Extends the functionality of Permissions By Term to be able to limit the webform submissions access by users or roles.",
            "https://www.formhub.org/project/webform_permissions_by_term",
            AddonCategory::Submission,
        ),
        AddonProject::new(
            "webform_queue",
            "Webform Queue",
            "Posts form submissions into a Formhub queue.",
            "https://www.formhub.org/project/webform_queue",
            AddonCategory::Submission,
        ),
        AddonProject::new(
            "webform_sanitize",
            "Webform Sanitize",
            "Sanitizes submissions to remove potentially sensitive data.",
            "https://www.formhub.org/project/webform_sanitize",
            AddonCategory::Submission,
        ),
        AddonProject::new(
            "webform_scheduled_tasks",
            "Webform Scheduled Tasks",
            "Allows the regular cleansing/sanitization of sensitive fields in Webform.",
            "https://www.formhub.org/project/webform_scheduled_tasks",
            AddonCategory::Submission,
        ),
        AddonProject::new(
            "webform_submission_change_history",
            "Webform Submission Change History",
            "Allows administrators to track notes on webform submissions.",
            "https://www.formhub.org/project/webform_submission_change_history",
            AddonCategory::Submission,
        ),
        // REST.
        AddonProject::new(
            "webform_rest",
            "Webform REST",
            "Retrieve and submit webforms via REST.",
            "https://www.formhub.org/project/webform_rest",
            AddonCategory::Rest,
        ),
        // Utility.
        AddonProject::new(
            "imce",
            "IMCE",
            "IMCE is an image/file uploader and browser that supports personal directories and quota.",
            "https://www.formhub.org/project/imce",
            AddonCategory::Utility,
        )
        .install()
        .recommended(),
        AddonProject::new(
            "token",
            "Token",
            "Provides a user interface for the Token API and some missing core tokens.",
            "https://www.formhub.org/project/token",
            AddonCategory::Utility,
        )
        .install()
        .recommended(),
        AddonProject::new(
            "ga_webform",
            "Googalytics Webform",
            "Provides integration for Webform into Googalytics module.",
            "https://www.formhub.org/project/ga_webform",
            AddonCategory::Utility,
        ),
        AddonProject::new(
            "eu_cookie_compliance",
            "EU Cookie Compliance",
            "This module aims at making the website compliant with the new EU cookie regulation.",
            "https://www.formhub.org/project/eu_cookie_compliance",
            AddonCategory::Utility,
        ),
        AddonProject::new(
            "gdpr_compliance",
            "General Data Protection Regulation Compliance",
            "Provides Basic GDPR Compliance use cases via form checkboxes, pop-up alert, and a policy page.",
            "https://www.formhub.org/project/gdpr_compliance",
            AddonCategory::Utility,
        ),
        AddonProject::new(
            "wf_encrypt",
            "Webform Encrypt",
            "Provides encryption for webform elements.",
            "https://www.formhub.org/project/webform_encrypt",
            AddonCategory::Utility,
        ),
        AddonProject::new(
            "webform_ip_track",
            "Webform Ip Track",
            "Ip Location details as custom tokens to use in webform submission values.",
            "https://www.formhub.org/project/webform_ip_track",
            AddonCategory::Utility,
        ),
        // Validation.
        AddonProject::new(
            "clientside_validation",
            "Clientside Validation",
            "Adds clientside validation to forms.",
            "https://www.formhub.org/project/clientside_validation",
            AddonCategory::Validation,
        )
        .recommended(),
        AddonProject::new(
            "validators",
            "Validators",
            "Provides Symfony (form) Validators for Formhub.",
            "https://www.formhub.org/project/validators",
            AddonCategory::Validation,
        ),
        // Workflow.
        AddonProject::new(
            "maestro",
            "Maestro Workflow Engine",
            "A business process workflow solution that allows you to create and automate a sequence of tasks representing any business, document approval or collaboration process.",
            "https://www.formhub.org/project/maestro",
            AddonCategory::Workflow,
        )
        .recommended(),
        // Development.
        AddonProject::new(
            "maillog",
            "Maillog / Mail Developer",
            "Utility to log all Mails for debugging purposes. It is possible to suppress mail delivery for e.g. dev or staging systems.",
            "https://www.formhub.org/project/maillog",
            AddonCategory::Development,
        )
        .recommended(),
    ]
}

/// Search the built-in catalog by query string.
///
/// Filters entries whose name, title, or description contains the query
/// (case-insensitive). If query is empty, returns all entries.
pub fn search_catalog(query: &str) -> Vec<AddonProject> {
    if query.is_empty() {
        return builtin_catalog();
    }
    let query_lower = query.to_lowercase();
    builtin_catalog()
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&query_lower)
                || p.title.to_lowercase().contains(&query_lower)
                || p.description.to_lowercase().contains(&query_lower)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_returns_seventy_six_entries() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 76);
    }

    #[test]
    fn builtin_catalog_names_are_unique() {
        let catalog = builtin_catalog();
        let names: HashSet<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn builtin_catalog_names_carry_no_whitespace() {
        for project in builtin_catalog() {
            assert_eq!(
                project.name.trim(),
                project.name,
                "name `{}` has surrounding whitespace",
                project.name
            );
            assert!(!project.name.is_empty());
        }
    }

    #[test]
    fn builtin_catalog_covers_all_categories() {
        let catalog = builtin_catalog();
        let categories: HashSet<AddonCategory> = catalog.iter().map(|p| p.category).collect();
        assert_eq!(categories.len(), AddonCategory::ALL.len());
    }

    #[test]
    fn declaration_order_is_stable() {
        let catalog = builtin_catalog();
        assert_eq!(catalog[0].name, "drush_cmi_tools");
        assert_eq!(catalog[catalog.len() - 1].name, "maillog");
    }

    #[test]
    fn third_party_settings_flags_match_curation() {
        let flagged: Vec<String> = builtin_catalog()
            .into_iter()
            .filter(|p| p.third_party_settings)
            .map(|p| p.name)
            .collect();
        assert_eq!(flagged, vec!["antibot", "honeypot"]);
    }

    #[test]
    fn install_flags_match_curation() {
        let flagged: Vec<String> = builtin_catalog()
            .into_iter()
            .filter(|p| p.install)
            .map(|p| p.name)
            .collect();
        assert_eq!(flagged, vec!["imce", "token"]);
    }

    #[test]
    fn search_catalog_finds_captcha() {
        let results = search_catalog("captcha");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "captcha");
    }

    #[test]
    fn search_catalog_case_insensitive() {
        let results = search_catalog("HONEYPOT");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "honeypot");
    }

    #[test]
    fn search_catalog_by_description() {
        let results = search_catalog("Excel-like");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "handsontable_yml_webform");
    }

    #[test]
    fn search_catalog_empty_returns_all() {
        let results = search_catalog("");
        assert_eq!(results.len(), 76);
    }

    #[test]
    fn search_catalog_no_match() {
        let results = search_catalog("xyz_nonexistent");
        assert!(results.is_empty());
    }
}
