//! Concurrent webhook collection across repositories.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, warn};

use crate::github::{GitHubClient, Repository};

/// Webhook URLs found on a single repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRecord {
    pub repository_name: String,
    pub repository_url: String,
    /// Delivery URLs in API response order. Empty if the repository has no
    /// webhooks (or none with a usable URL).
    pub webhooks: Vec<String>,
}

/// Fetch webhooks for every repository, with at most `concurrency` requests
/// in flight at once.
///
/// A repository whose fetch fails is logged and dropped from the result; one
/// bad repository never aborts the run. A hook entry without a string `url`
/// is logged and skipped while the repository record is still emitted.
/// Records arrive in completion order.
pub async fn collect_webhooks(
    client: &GitHubClient,
    org: &str,
    repos: &[Repository],
    concurrency: usize,
) -> Vec<WebhookRecord> {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut set = JoinSet::new();

    for repo in repos {
        let client = client.clone();
        let org = org.to_string();
        let name = repo.name.clone();
        let semaphore = Arc::clone(&semaphore);

        set.spawn(async move {
            let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
            fetch_record(&client, &org, &name).await
        });
    }

    // Draining the set is the barrier: writing starts only after every task
    // has produced a record or logged its failure.
    let mut records = Vec::with_capacity(repos.len());
    while let Some(result) = set.join_next().await {
        match result {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(e) => error!(error = %e, "Webhook fetch task panicked"),
        }
    }

    records
}

/// Fetch one repository's webhooks and build its record.
///
/// Returns `None` when the fetch itself failed; the error has already been
/// logged with the repository name.
async fn fetch_record(client: &GitHubClient, org: &str, repo: &str) -> Option<WebhookRecord> {
    let hooks = match client.list_webhooks(org, repo).await {
        Ok(hooks) => hooks,
        Err(e) => {
            error!(repo = %repo, error = %e, "Error listing webhooks");
            return None;
        }
    };

    let mut webhooks = Vec::with_capacity(hooks.len());
    for hook in &hooks {
        match hook.url() {
            Some(url) => webhooks.push(url.to_string()),
            None => {
                warn!(repo = %repo, hook_id = hook.id, "Webhook entry has no string url, skipping");
            }
        }
    }

    Some(WebhookRecord {
        repository_name: repo.to_string(),
        repository_url: format!("https://github.com/{org}/{repo}"),
        webhooks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_expected_field_names() {
        let record = WebhookRecord {
            repository_name: "a".to_string(),
            repository_url: "https://github.com/acme/a".to_string(),
            webhooks: vec!["https://x".to_string()],
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["repository_name"], "a");
        assert_eq!(json["repository_url"], "https://github.com/acme/a");
        assert_eq!(json["webhooks"][0], "https://x");
    }
}
