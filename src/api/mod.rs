//
//  dockerhub
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed bindings for the Docker Hub v2 REST API at
//! `https://hub.docker.com/v2`.
//!
//! ## Architecture
//!
//! - [`client`]: [`DockerHubClient`] and the login-then-request pipeline
//! - [`repositories`]: repository CRUD
//! - [`groups`]: organization groups and their members
//! - [`repository_groups`]: repository permissions granted to groups
//! - [`access_tokens`]: personal access tokens
//! - [`common`]: error type, result alias and list envelope
//!
//! Each resource module defines its request/response types and adds its
//! operations to [`DockerHubClient`] in an `impl` block.
//!
//! ## Error Handling
//!
//! Operations return [`Result`], whose error is [`ApiError`]:
//!
//! - `Api`: Docker Hub answered outside 2xx; displays as the raw body
//! - `Network` / `Json`: transport failures, never retried
//! - `Cancelled`: the caller's cancellation token fired

/// Core HTTP client wrapper.
///
/// Provides the [`DockerHubClient`] struct which handles:
/// - The per-call login exchange
/// - `Authorization: JWT` header injection
/// - Request/response serialization
/// - Cancellation and status code handling
pub mod client;

/// Shared types: [`ApiError`], [`Result`], [`Page`](common::Page).
pub mod common;

pub mod access_tokens;
pub mod groups;
pub mod repositories;
pub mod repository_groups;

/// Re-export of the main Docker Hub API client.
pub use client::DockerHubClient;

/// Re-export of the error type and result alias.
pub use common::{ApiError, Result};
