//
//  dockerhub
//  cli/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository commands.
//!
//! - Viewing repository details
//! - Creating repositories
//! - Editing description and visibility
//! - Deleting repositories

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use super::{cancel_on_ctrl_c, confirm, GlobalOptions};
use crate::api::repositories::{Repository, UpdateRepository};
use crate::output::{format_bool, print_field, TableOutput};

/// Manage repositories
#[derive(Args, Debug)]
pub struct RepoCommand {
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RepoSubcommand {
    /// View repository details
    #[command(visible_alias = "get")]
    View(ViewArgs),

    /// Create a new repository
    Create(CreateArgs),

    /// Edit repository description or visibility
    Edit(EditArgs),

    /// Delete a repository
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Repository in NAMESPACE/NAME format
    pub repo: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Repository in NAMESPACE/NAME format
    pub repo: String,

    /// Make the repository private
    #[arg(long, conflicts_with = "public")]
    pub private: bool,

    /// Make the repository public (default)
    #[arg(long, conflicts_with = "private")]
    pub public: bool,

    /// Short description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Markdown overview
    #[arg(long)]
    pub full_description: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Repository in NAMESPACE/NAME format
    pub repo: String,

    /// Make the repository private
    #[arg(long, conflicts_with = "public")]
    pub private: bool,

    /// Make the repository public
    #[arg(long, conflicts_with = "private")]
    pub public: bool,

    /// New short description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// New Markdown overview
    #[arg(long)]
    pub full_description: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Repository in NAMESPACE/NAME format
    pub repo: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl TableOutput for Repository {
    fn print_table(&self, color: bool) {
        let visibility = if self.is_private { "private" } else { "public" };
        if color {
            let visibility = if self.is_private {
                style(visibility).yellow().to_string()
            } else {
                style(visibility).green().to_string()
            };
            println!("{} ({})", style(self.full_name()).bold(), visibility);
        } else {
            println!("{} ({})", self.full_name(), visibility);
        }
        println!();

        if !self.description.is_empty() {
            print_field("Description", &self.description, color);
        }
        print_field("Private", &format_bool(self.is_private, color), color);
        if let Some(stars) = self.star_count {
            print_field("Stars", &stars.to_string(), color);
        }
        if let Some(pulls) = self.pull_count {
            print_field("Pulls", &pulls.to_string(), color);
        }
        if let Some(updated) = &self.last_updated {
            print_field("Last updated", &updated.to_rfc3339(), color);
        }
        if !self.full_description.is_empty() {
            println!();
            println!("{}", self.full_description);
        }
    }
}

/// Splits `NAMESPACE/NAME` into its two parts.
pub(crate) fn parse_repo_arg(repo: &str) -> Result<(&str, &str)> {
    match repo.split_once('/') {
        Some((namespace, name))
            if !namespace.is_empty() && !name.is_empty() && !name.contains('/') =>
        {
            Ok((namespace, name))
        }
        _ => anyhow::bail!("Invalid repository '{}'. Expected NAMESPACE/NAME.", repo),
    }
}

/// Maps a `--private`/`--public` pair to an optional flag.
pub(crate) fn visibility_flag(private: bool, public: bool) -> Option<bool> {
    match (private, public) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl RepoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            RepoSubcommand::View(args) => self.view(args, global).await,
            RepoSubcommand::Create(args) => self.create(args, global).await,
            RepoSubcommand::Edit(args) => self.edit(args, global).await,
            RepoSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        parse_repo_arg(&args.repo)?;
        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        let repo = client.get_repository(&cancel, &args.repo).await?;
        global.output().write(&repo)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let (namespace, name) = parse_repo_arg(&args.repo)?;
        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        let mut repo = Repository::new(namespace, name).private(args.private);
        if let Some(description) = &args.description {
            repo = repo.description(description);
        }
        if let Some(full_description) = &args.full_description {
            repo = repo.full_description(full_description);
        }

        let created = client.create_repository(&cancel, &repo).await?;
        let output = global.output();
        output.write_success(&format!("Created repository {}", created.full_name()));
        output.write(&created)
    }

    async fn edit(&self, args: &EditArgs, global: &GlobalOptions) -> Result<()> {
        parse_repo_arg(&args.repo)?;
        let update = UpdateRepository {
            description: args.description.clone(),
            full_description: args.full_description.clone(),
            is_private: visibility_flag(args.private, args.public),
        };
        if update.is_empty() {
            anyhow::bail!(
                "Nothing to change. Pass --description, --full-description, --private or --public."
            );
        }

        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        let updated = client.update_repository(&cancel, &args.repo, &update).await?;
        let output = global.output();
        output.write_success(&format!("Updated repository {}", args.repo));
        output.write(&updated)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        parse_repo_arg(&args.repo)?;
        let prompt = format!(
            "Are you sure you want to delete {}? This cannot be undone!",
            args.repo
        );
        if !confirm(&prompt, args.yes)? {
            return Ok(());
        }

        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        client.delete_repository(&cancel, &args.repo).await?;
        global
            .output()
            .write_success(&format!("Deleted repository {}", args.repo));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo_arg() {
        assert_eq!(parse_repo_arg("acme/api").unwrap(), ("acme", "api"));
        assert!(parse_repo_arg("api").is_err());
        assert!(parse_repo_arg("acme/").is_err());
        assert!(parse_repo_arg("a/b/c").is_err());
    }

    #[test]
    fn test_visibility_flag() {
        assert_eq!(visibility_flag(true, false), Some(true));
        assert_eq!(visibility_flag(false, true), Some(false));
        assert_eq!(visibility_flag(false, false), None);
    }
}
