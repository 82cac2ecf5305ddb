// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! taskroute - classify requests and route them to operator-preferred models.
//!
//! This is the binary entry point for the taskroute CLI.

mod commands;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use taskroute_config::{ConfigError, TaskrouteConfig};
use taskroute_router::{LiveConfig, Router};

/// taskroute - classify requests and route them to operator-preferred models.
#[derive(Parser, Debug)]
#[command(name = "taskroute", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify text into a task type.
    Classify {
        /// Text to classify.
        text: String,
    },
    /// Route text to a model using the configured preferences.
    Route {
        /// Text to route. A leading `/task <id>` selects the task type.
        text: String,
        /// Explicit task type, bypassing classification.
        #[arg(long)]
        task: Option<String>,
    },
    /// List predefined and operator-defined task types.
    TaskTypes,
    /// Load and validate configuration.
    Check,
}

fn load(path: Option<&Path>) -> Result<TaskrouteConfig, Vec<ConfigError>> {
    match path {
        Some(path) => taskroute_config::load_and_validate_path(path),
        None => taskroute_config::load_and_validate(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            taskroute_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);
    tracing::debug!(
        default_model = config.model.default_model.as_str(),
        routing = config.routing.is_some(),
        "config loaded"
    );
    // Validation ran before the subscriber existed.
    for (index, pref) in config.routing.iter().flat_map(|r| r.shadowed_preferences()) {
        tracing::warn!(
            task_type = pref.task_type.as_str(),
            index,
            "duplicate routing preference is shadowed by an earlier entry"
        );
    }

    let summary = commands::check(&config);
    let live = Arc::new(LiveConfig::new(config));
    let router = Router::new(live.clone(), live);

    let output = match cli.command {
        Commands::Classify { text } => commands::classify(&router, &text),
        Commands::Route { text, task } => commands::route(&router, &text, task.as_deref()).await,
        Commands::TaskTypes => commands::task_types(&router).await,
        Commands::Check => Ok(summary),
    };

    match output {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("taskroute: {e}");
            std::process::exit(1);
        }
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("taskroute={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_route_with_task() {
        let cli = Cli::parse_from(["taskroute", "route", "hello", "--task", "bug_fixing"]);
        match cli.command {
            Commands::Route { text, task } => {
                assert_eq!(text, "hello");
                assert_eq!(task.as_deref(), Some("bug_fixing"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::parse_from(["taskroute", "task-types", "--config", "/tmp/t.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.toml")));
    }
}
