// SPDX-FileCopyrightText: 2026 Formhub Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formhub add-ons CLI.
//!
//! A thin inspection tool over the built-in add-ons catalog. The registry
//! is built once at startup and passed by reference into the subcommand
//! handlers; presentation lives here, the data lives in `formhub-addons`.

mod addons;

use clap::{Parser, Subcommand};
use formhub_addons::AddonRegistry;
use tracing_subscriber::EnvFilter;

/// Formhub add-ons catalog inspection tool.
#[derive(Parser, Debug)]
#[command(name = "formhub", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect the add-ons catalog.
    Addons {
        #[command(subcommand)]
        command: addons::AddonsCommand,
    },
}

fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match formhub_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            formhub_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured level when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if !config.output.color {
        colored::control::set_override(false);
    }

    let registry = AddonRegistry::builtin();

    let result = match cli.command {
        Commands::Addons { command } => addons::run(command, &registry, &config),
    };

    if let Err(err) = result {
        eprintln!("formhub: {err}");
        std::process::exit(1);
    }
}
