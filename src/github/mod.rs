//! GitHub API integration.
//!
//! - [`client`] - authenticated REST client and error type
//! - [`models`] - wire types for repositories, webhooks, and rate limits

mod client;
mod models;

pub use client::{GitHubClient, GitHubError};
pub use models::{Hook, RateLimit, RateLimits, Repository};
