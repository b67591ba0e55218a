//
//  dockerhub
//  cli/repo_group.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Commands managing the permission a group holds on a repository.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::repo::parse_repo_arg;
use super::{cancel_on_ctrl_c, confirm, GlobalOptions};
use crate::api::repository_groups::{Permission, RepositoryGroup};
use crate::output::{print_field, TableOutput};

/// Manage repository permissions granted to groups
#[derive(Args, Debug)]
pub struct RepoGroupCommand {
    #[command(subcommand)]
    pub command: RepoGroupSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RepoGroupSubcommand {
    /// View the permission a group holds on a repository
    #[command(visible_alias = "get")]
    View(AssociationRef),

    /// Grant a group access to a repository
    #[command(visible_alias = "grant")]
    Create(CreateArgs),

    /// Change a group's permission on a repository
    Edit(EditArgs),

    /// Revoke a group's access to a repository
    #[command(visible_alias = "revoke")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct AssociationRef {
    /// Repository in NAMESPACE/NAME format
    pub repo: String,

    /// Numeric group id
    pub group_id: i64,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[command(flatten)]
    pub association: AssociationRef,

    /// Group name
    pub group_name: String,

    /// Permission to grant (read, write, admin)
    #[arg(long, short = 'p', default_value = "read")]
    pub permission: Permission,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    #[command(flatten)]
    pub association: AssociationRef,

    /// New permission (read, write, admin)
    #[arg(long, short = 'p')]
    pub permission: Permission,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub association: AssociationRef,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl TableOutput for RepositoryGroup {
    fn print_table(&self, color: bool) {
        print_field("Group", &self.group_name, color);
        print_field("Group ID", &self.group_id.to_string(), color);
        print_field("Permission", &self.permission.to_string(), color);
    }
}

impl RepoGroupCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            RepoGroupSubcommand::View(args) => self.view(args, global).await,
            RepoGroupSubcommand::Create(args) => self.create(args, global).await,
            RepoGroupSubcommand::Edit(args) => self.edit(args, global).await,
            RepoGroupSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn view(&self, args: &AssociationRef, global: &GlobalOptions) -> Result<()> {
        parse_repo_arg(&args.repo)?;
        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        let association = client
            .get_repository_group(&cancel, &args.repo, args.group_id)
            .await?;
        global.output().write(&association)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let AssociationRef { repo, group_id } = &args.association;
        parse_repo_arg(repo)?;
        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        let association = RepositoryGroup::new(*group_id, &args.group_name, args.permission);
        let created = client
            .create_repository_group(&cancel, repo, &association)
            .await?;

        let output = global.output();
        output.write_success(&format!(
            "Granted {} {} access to {}",
            created.group_name, created.permission, repo
        ));
        output.write(&created)
    }

    async fn edit(&self, args: &EditArgs, global: &GlobalOptions) -> Result<()> {
        let AssociationRef { repo, group_id } = &args.association;
        parse_repo_arg(repo)?;
        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        let mut association = client
            .get_repository_group(&cancel, repo, *group_id)
            .await?;
        association.permission = args.permission;

        let updated = client
            .update_repository_group(&cancel, repo, *group_id, &association)
            .await?;

        let output = global.output();
        output.write_success(&format!(
            "{} now has {} access to {}",
            updated.group_name, updated.permission, repo
        ));
        output.write(&updated)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let AssociationRef { repo, group_id } = &args.association;
        parse_repo_arg(repo)?;
        let prompt = format!("Revoke access of group {} to {}?", group_id, repo);
        if !confirm(&prompt, args.yes)? {
            return Ok(());
        }

        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        client
            .delete_repository_group(&cancel, repo, *group_id)
            .await?;
        global
            .output()
            .write_success(&format!("Revoked group {} access to {}", group_id, repo));
        Ok(())
    }
}
