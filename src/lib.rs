//! Audit the webhook URLs configured across a GitHub organization.
//!
//! Enumerates every repository in an organization, fetches each repository's
//! webhooks concurrently, and writes a consolidated JSON report.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hook_audit::{collect_webhooks, list_all_repositories, write_report, GitHubClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GitHubClient::new("ghp_...")?;
//!     let repos = list_all_repositories(&client, "acme").await?;
//!     let records = collect_webhooks(&client, "acme", &repos, 16).await;
//!     write_report(&records, std::path::Path::new("webhooks.json"))?;
//!     Ok(())
//! }
//! ```

pub mod collect;
pub mod config;
pub mod enumerate;
pub mod github;
pub mod report;

pub use collect::{collect_webhooks, WebhookRecord};
pub use config::{Config, ConfigError};
pub use enumerate::list_all_repositories;
pub use github::{GitHubClient, GitHubError};
pub use report::write_report;
