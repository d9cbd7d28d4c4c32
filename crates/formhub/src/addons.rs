// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `formhub addons` subcommand handlers.

use std::str::FromStr;

use clap::{Args, Subcommand};
use colored::Colorize;
use formhub_addons::{AddonProject, AddonRegistry};
use formhub_config::FormhubConfig;
use formhub_core::{AddonCategory, FormhubError};
use tracing::debug;

/// Subcommands for inspecting the add-ons catalog.
#[derive(Subcommand, Debug)]
pub enum AddonsCommand {
    /// List add-on projects.
    List(ListArgs),
    /// Show one add-on project in full.
    Show {
        /// Machine name of the project (e.g. "captcha").
        name: String,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List the fixed category set.
    Categories {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Filters for `formhub addons list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Restrict to one category (e.g. "spam").
    #[arg(long)]
    pub category: Option<String>,

    /// Only projects that integrate via third-party settings.
    #[arg(long)]
    pub third_party_settings: bool,

    /// Only recommended projects.
    #[arg(long)]
    pub recommended: bool,

    /// Only install-together projects.
    #[arg(long)]
    pub install: bool,

    /// Case-insensitive search over name, title, and description.
    #[arg(long)]
    pub search: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Dispatch an `addons` subcommand against the registry.
pub fn run(
    command: AddonsCommand,
    registry: &AddonRegistry,
    config: &FormhubConfig,
) -> Result<(), FormhubError> {
    match command {
        AddonsCommand::List(args) => list(&args, registry, config),
        AddonsCommand::Show { name, json } => show(&name, json, registry, config),
        AddonsCommand::Categories { json } => categories(json, registry, config),
    }
}

fn list(
    args: &ListArgs,
    registry: &AddonRegistry,
    config: &FormhubConfig,
) -> Result<(), FormhubError> {
    let mut projects = match &args.search {
        Some(query) => registry.search(query),
        None => registry.projects(None),
    };

    if let Some(raw) = &args.category {
        let category = parse_category(raw)?;
        projects.retain(|p| p.category == category);
    }
    if args.third_party_settings {
        projects.retain(|p| p.third_party_settings);
    }
    if args.recommended {
        projects.retain(|p| p.recommended);
    }
    if args.install {
        projects.retain(|p| p.install);
    }

    debug!(count = projects.len(), "listing add-on projects");

    if use_json(args.json, config) {
        print_json(&projects)?;
        return Ok(());
    }

    for project in &projects {
        println!(
            "{:<36} {:<13} {}{}",
            project.name,
            project.category.to_string(),
            project.title,
            flag_markers(project)
        );
    }
    println!("\n{} project(s)", projects.len());
    Ok(())
}

fn show(
    name: &str,
    json: bool,
    registry: &AddonRegistry,
    config: &FormhubConfig,
) -> Result<(), FormhubError> {
    let project = registry.get(name)?;

    if use_json(json, config) {
        print_json(project)?;
        return Ok(());
    }

    println!("{}{}", project.title.bold(), flag_markers(project));
    println!("  Name:        {}", project.name);
    println!(
        "  Category:    {} ({})",
        project.category.title(),
        project.category
    );
    println!("  URL:         {}", project.url);
    println!("  Description: {}", project.description);
    Ok(())
}

fn categories(
    json: bool,
    registry: &AddonRegistry,
    config: &FormhubConfig,
) -> Result<(), FormhubError> {
    if use_json(json, config) {
        let entries: Vec<serde_json::Value> = registry
            .categories()
            .map(|(id, title)| serde_json::json!({ "id": id.to_string(), "title": title }))
            .collect();
        print_json(&entries)?;
        return Ok(());
    }

    for (id, title) in registry.categories() {
        println!("{:<14} {}", id.to_string(), title);
    }
    Ok(())
}

/// Parse a category id, failing with the list of valid ids.
fn parse_category(raw: &str) -> Result<AddonCategory, FormhubError> {
    AddonCategory::from_str(raw).map_err(|_| {
        let valid: Vec<String> = AddonCategory::ALL.iter().map(ToString::to_string).collect();
        FormhubError::Config(format!(
            "unknown category `{raw}`; expected one of: {}",
            valid.join(", ")
        ))
    })
}

/// JSON output when requested by flag or configured as the default format.
fn use_json(flag: bool, config: &FormhubConfig) -> bool {
    flag || config.output.format == "json"
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), FormhubError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| FormhubError::Internal(format!("JSON rendering failed: {e}")))?;
    println!("{rendered}");
    Ok(())
}

/// Trailing markers for curation flags in text output.
fn flag_markers(project: &AddonProject) -> String {
    let mut markers = String::new();
    if project.recommended {
        markers.push_str(&format!(" {}", "✓ recommended".green()));
    }
    if project.third_party_settings {
        markers.push_str(&format!(" {}", "[third-party settings]".cyan()));
    }
    if project.install {
        markers.push_str(&format!(" {}", "[install]".yellow()));
    }
    markers
}
