//
//  dockerhub
//  cli/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Personal access token commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use super::{cancel_on_ctrl_c, confirm, GlobalOptions};
use crate::api::access_tokens::{AccessToken, CreateAccessToken, UpdateAccessToken, SCOPE_READ};
use crate::output::{format_bool, print_field, TableOutput};

/// Manage personal access tokens
#[derive(Args, Debug)]
pub struct TokenCommand {
    #[command(subcommand)]
    pub command: TokenSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TokenSubcommand {
    /// Create a token and print its secret
    Create(CreateArgs),

    /// View a token (the secret is never shown again)
    #[command(visible_alias = "get")]
    View(ViewArgs),

    /// Change a token's label or enable/disable it
    Edit(EditArgs),

    /// Delete a token
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Token label
    pub label: String,

    /// Scope to grant (repeatable): repo:admin, repo:write, repo:read, repo:public_read
    #[arg(long = "scope", short = 's', action = clap::ArgAction::Append)]
    pub scopes: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Token UUID
    pub uuid: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Token UUID
    pub uuid: String,

    /// New label
    #[arg(long)]
    pub label: Option<String>,

    /// Enable the token
    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    /// Disable the token
    #[arg(long, conflicts_with = "enable")]
    pub disable: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Token UUID
    pub uuid: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl TableOutput for AccessToken {
    fn print_table(&self, color: bool) {
        print_field("UUID", &self.uuid, color);
        print_field("Label", &self.token_label, color);
        print_field("Scopes", &self.scopes.join(", "), color);
        if let Some(active) = self.is_active {
            print_field("Active", &format_bool(active, color), color);
        }
        if let Some(created) = &self.created_at {
            print_field("Created", &created.to_rfc3339(), color);
        }
        if let Some(last_used) = &self.last_used {
            print_field("Last used", &last_used.to_rfc3339(), color);
        }
        if self.has_secret() {
            println!();
            if color {
                print_field("Token", &style(&self.token).bold().to_string(), color);
            } else {
                print_field("Token", &self.token, color);
            }
        }
    }
}

impl TokenCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TokenSubcommand::Create(args) => self.create(args, global).await,
            TokenSubcommand::View(args) => self.view(args, global).await,
            TokenSubcommand::Edit(args) => self.edit(args, global).await,
            TokenSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let scopes = if args.scopes.is_empty() {
            vec![SCOPE_READ.to_string()]
        } else {
            args.scopes.clone()
        };

        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        let request = CreateAccessToken::new(&args.label, scopes);
        let token = client.create_access_token(&cancel, &request).await?;

        let output = global.output();
        output.write_success(&format!("Created access token {}", token.token_label));
        output.write(&token)?;
        if !output.is_json() {
            output.write_warning("Copy the token now. Docker Hub will not show it again.");
        }
        Ok(())
    }

    async fn view(&self, args: &ViewArgs, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        let token = client.get_access_token(&cancel, &args.uuid).await?;
        global.output().write(&token)
    }

    async fn edit(&self, args: &EditArgs, global: &GlobalOptions) -> Result<()> {
        let is_active = match (args.enable, args.disable) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        let update = UpdateAccessToken {
            token_label: args.label.clone(),
            is_active,
        };
        if update.token_label.is_none() && update.is_active.is_none() {
            anyhow::bail!("Nothing to change. Pass --label, --enable or --disable.");
        }

        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        let token = client
            .update_access_token(&cancel, &args.uuid, &update)
            .await?;
        let output = global.output();
        output.write_success(&format!("Updated access token {}", token.uuid));
        output.write(&token)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let prompt = format!("Are you sure you want to delete access token {}?", args.uuid);
        if !confirm(&prompt, args.yes)? {
            return Ok(());
        }

        let client = global.client()?;
        let cancel = cancel_on_ctrl_c();

        client.delete_access_token(&cancel, &args.uuid).await?;
        global
            .output()
            .write_success(&format!("Deleted access token {}", args.uuid));
        Ok(())
    }
}
