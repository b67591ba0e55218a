//
//  dockerhub
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Docker Hub API Client
//!
//! Typed async bindings for the Docker Hub v2 API, plus the `dh` CLI built
//! on top of them.
//!
//! ## Features
//!
//! - **Repositories**: create, read, partially update and delete
//! - **Groups**: organization groups and their members
//! - **Repository permissions**: grant groups read, write or admin access
//! - **Access tokens**: create, inspect, enable/disable and delete
//! - **Cancellation**: every call takes a `CancellationToken`
//!
//! ## Module Structure
//!
//! - [`api`]: [`DockerHubClient`] and the resource operations
//! - [`auth`]: credentials and the per-call session token
//! - [`config`]: configuration file management
//! - [`cli`]: command-line interface definitions using clap
//! - [`output`]: table and JSON output
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dockerhub::DockerHubClient;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> dockerhub::api::Result<()> {
//! let client = DockerHubClient::new("octocat", "hunter2")?;
//! let cancel = CancellationToken::new();
//!
//! let group = client.get_group(&cancel, "acme", "owners").await?;
//! println!("{} has id {}", group.name, group.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! Every operation logs in afresh with the client's credentials and sends
//! the resulting JWT with the target request. Tokens are never cached.

/// Docker Hub API client and resource types.
pub mod api;

/// Credentials and session token handling.
pub mod auth;

/// Command-line interface definitions.
pub mod cli;

/// Configuration file management.
///
/// - Linux: `~/.config/dh/config.toml`
/// - macOS: `~/Library/Application Support/dh/config.toml`
/// - Windows: `%APPDATA%\dh\config.toml`
pub mod config;

/// Output formatting for the CLI (table and JSON).
pub mod output;

/// Re-export of the API client.
pub use api::DockerHubClient;

/// Re-export of the main CLI struct for convenient access.
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used in the user agent and config paths.
pub const APP_NAME: &str = "dh";

/// Application version constant, taken from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1`: General error
/// - `4`: Docker Hub rejected the credentials
/// - `8`: Resource not found
/// - `16`: Operation cancelled
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Authentication failed (HTTP 401).
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found (HTTP 404).
    pub const NOT_FOUND: i32 = 8;

    /// Operation cancelled by the user.
    pub const CANCELLED: i32 = 16;
}
