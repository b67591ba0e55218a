//
//  dockerhub
//  cli/group.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization group commands, including group membership.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use super::{cancel_on_ctrl_c, confirm, GlobalOptions};
use crate::api::common::Page;
use crate::api::groups::{Group, GroupMember, GroupRequest};
use crate::output::{print_field, TableBuilder, TableOutput};

/// Manage organization groups
#[derive(Args, Debug)]
pub struct GroupCommand {
    #[command(subcommand)]
    pub command: GroupSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GroupSubcommand {
    /// View group details
    #[command(visible_alias = "get")]
    View(GroupRef),

    /// Create a new group
    Create(CreateArgs),

    /// Rename a group or change its description
    Edit(EditArgs),

    /// Delete a group
    Delete(DeleteArgs),

    /// List group members
    Members(GroupRef),

    /// Add a user to a group
    AddMember(MemberArgs),

    /// Remove a user from a group
    RemoveMember(MemberArgs),
}

#[derive(Args, Debug)]
pub struct GroupRef {
    /// Organization namespace
    pub org: String,

    /// Group name or numeric id
    pub group: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Organization namespace
    pub org: String,

    /// Group name
    pub name: String,

    /// Group description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    #[command(flatten)]
    pub group: GroupRef,

    /// New group name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub group: GroupRef,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct MemberArgs {
    #[command(flatten)]
    pub group: GroupRef,

    /// Docker ID of the member
    pub username: String,
}

impl TableOutput for Group {
    fn print_table(&self, color: bool) {
        if color {
            println!("{}", style(&self.name).bold());
        } else {
            println!("{}", self.name);
        }
        println!();
        print_field("ID", &self.id.to_string(), color);
        if let Some(uuid) = &self.uuid {
            print_field("UUID", uuid, color);
        }
        if !self.description.is_empty() {
            print_field("Description", &self.description, color);
        }
    }
}

impl TableOutput for Page<GroupMember> {
    fn print_table(&self, color: bool) {
        if self.results.is_empty() {
            println!("No members found");
            return;
        }

        let mut table = TableBuilder::new().color(color).headers(["USERNAME", "NAME"]);
        for member in &self.results {
            table = table.row([member.username.as_str(), member.display_name.as_str()]);
        }
        table.print();

        if self.has_next() {
            println!(
                "Showing {} of {} members",
                self.results.len(),
                self.count
            );
        }
    }
}

impl GroupCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            GroupSubcommand::View(args) => self.view(args, global).await,
            GroupSubcommand::Create(args) => self.create(args, global).await,
            GroupSubcommand::Edit(args) => self.edit(args, global).await,
            GroupSubcommand::Delete(args) => self.delete(args, global).await,
            GroupSubcommand::Members(args) => self.members(args, global).await,
            GroupSubcommand::AddMember(args) => self.add_member(args, global).await,
            GroupSubcommand::RemoveMember(args) => self.remove_member(args, global).await,
        }
    }

    async fn view(&self, args: &GroupRef, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        let group = client.get_group(&cancel, &args.org, &args.group).await?;
        global.output().write(&group)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        let request = GroupRequest::new(&args.name, &args.description);
        let group = client.create_group(&cancel, &args.org, &request).await?;

        let output = global.output();
        output.write_success(&format!("Created group {} in {}", group.name, args.org));
        output.write(&group)
    }

    async fn edit(&self, args: &EditArgs, global: &GlobalOptions) -> Result<()> {
        if args.name.is_none() && args.description.is_none() {
            anyhow::bail!("Nothing to change. Pass --name or --description.");
        }

        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();
        let GroupRef { org, group } = &args.group;

        // Docker Hub expects both fields, so unchanged ones are read back first.
        let current = client.get_group(&cancel, org, group).await?;
        let request = GroupRequest::new(
            args.name.clone().unwrap_or(current.name),
            args.description.clone().unwrap_or(current.description),
        );

        let updated = client.update_group(&cancel, org, group, &request).await?;
        let output = global.output();
        output.write_success(&format!("Updated group {}", updated.name));
        output.write(&updated)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let GroupRef { org, group } = &args.group;
        let prompt = format!("Are you sure you want to delete group {} from {}?", group, org);
        if !confirm(&prompt, args.yes)? {
            return Ok(());
        }

        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        client.delete_group(&cancel, org, group).await?;
        global
            .output()
            .write_success(&format!("Deleted group {} from {}", group, org));
        Ok(())
    }

    async fn members(&self, args: &GroupRef, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        let members = client
            .list_group_members(&cancel, &args.org, &args.group)
            .await?;
        global.output().write(&members)
    }

    async fn add_member(&self, args: &MemberArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();
        let GroupRef { org, group } = &args.group;

        client
            .add_group_member(&cancel, org, group, &args.username)
            .await?;
        global
            .output()
            .write_success(&format!("Added {} to {}/{}", args.username, org, group));
        Ok(())
    }

    async fn remove_member(&self, args: &MemberArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();
        let GroupRef { org, group } = &args.group;

        client
            .remove_group_member(&cancel, org, group, &args.username)
            .await?;
        global
            .output()
            .write_success(&format!("Removed {} from {}/{}", args.username, org, group));
        Ok(())
    }
}
