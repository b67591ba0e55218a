//
//  dockerhub
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod config;
mod group;
mod repo;
mod repo_group;
mod token;

pub use config::ConfigCommand;
pub use group::GroupCommand;
pub use repo::RepoCommand;
pub use repo_group::RepoGroupCommand;
pub use token::TokenCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::api::DockerHubClient;
use crate::auth::{read_secret_from_stdin, Credentials};
use crate::config::Config;
use crate::output::OutputWriter;

/// Docker Hub CLI - Manage Docker Hub from the command line
#[derive(Parser, Debug)]
#[command(
    name = "dh",
    version,
    about = "Manage Docker Hub from the command line",
    long_about = "dh is a CLI for the Docker Hub v2 API.\n\n\
                  It manages repositories, organization groups, repository permissions \
                  and personal access tokens.",
    propagate_version = true,
    after_help = "Use 'dh <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Docker ID used to log in
    #[arg(long, short = 'u', global = true, env = "DOCKER_USERNAME")]
    pub username: Option<String>,

    /// Password or personal access token used to log in
    #[arg(long, global = true, env = "DOCKER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Read the password from stdin (takes precedence over --password)
    #[arg(long, global = true)]
    pub password_stdin: bool,

    /// Override the API root (default: https://hub.docker.com/v2)
    #[arg(long, global = true, env = "DH_BASE_URL")]
    pub base_url: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Builds an API client from flags, environment and the config file.
    pub fn client(&self) -> Result<DockerHubClient> {
        let mut config = Config::load()?;
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }

        let credentials = self.credentials(&config)?;
        DockerHubClient::from_config(&config, credentials).context("Failed to create API client")
    }

    fn credentials(&self, config: &Config) -> Result<Credentials> {
        let username = self
            .username
            .clone()
            .or_else(|| config.username.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("No Docker ID given. Set DOCKER_USERNAME or pass --username.")
            })?;

        let password = if self.password_stdin {
            read_secret_from_stdin().context("Failed to read password from stdin")?
        } else {
            self.password.clone().ok_or_else(|| {
                anyhow::anyhow!(
                    "No password given. Set DOCKER_PASSWORD or pass --password / --password-stdin."
                )
            })?
        };

        let credentials = Credentials::new(username, password);
        if credentials.is_incomplete() {
            anyhow::bail!("Docker ID and password must not be empty");
        }
        Ok(credentials)
    }

    pub fn output(&self) -> OutputWriter {
        OutputWriter::from_flag(self.json)
    }
}

/// Returns a token that is cancelled when the user presses Ctrl-C.
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let child = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Ctrl-C received, cancelling request");
            child.cancel();
        }
    });
    token
}

/// Asks for confirmation before a destructive action unless `yes` is set.
pub fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    use dialoguer::Confirm;
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if !confirmed {
        println!("Cancelled.");
    }
    Ok(confirmed)
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage repositories
    #[command(visible_alias = "r")]
    Repo(RepoCommand),

    /// Manage organization groups
    #[command(visible_alias = "team")]
    Group(GroupCommand),

    /// Manage repository permissions granted to groups
    #[command(name = "repo-group", visible_alias = "access")]
    RepoGroup(RepoGroupCommand),

    /// Manage personal access tokens
    Token(TokenCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_credentials_fall_back_to_config_username() {
        let global = GlobalOptions {
            password: Some("pw".to_string()),
            ..Default::default()
        };
        let config = Config {
            username: Some("alice".to_string()),
            ..Default::default()
        };
        let credentials = global.credentials(&config).unwrap();
        assert_eq!(credentials.username(), "alice");
    }

    #[test]
    fn test_password_stdin_parses_alongside_password() {
        let cli = Cli::try_parse_from([
            "dh",
            "--password",
            "from-env",
            "--password-stdin",
            "repo",
            "view",
            "acme/api",
        ])
        .unwrap();
        assert!(cli.global.password_stdin);
        assert_eq!(cli.global.password.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_credentials_require_password() {
        let global = GlobalOptions {
            username: Some("alice".to_string()),
            ..Default::default()
        };
        assert!(global.credentials(&Config::default()).is_err());
    }
}
