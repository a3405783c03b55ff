//! Organization repository enumeration.

use tracing::debug;

use crate::github::{GitHubClient, GitHubError, Repository};

const PAGE_SIZE: u32 = 100;

/// List every repository in the organization, following pagination until a
/// page reports no successor.
///
/// All-or-nothing: a failed page propagates its error, since downstream work
/// against an incomplete repository set would silently under-report.
///
/// # Errors
///
/// Returns the first page request error.
pub async fn list_all_repositories(
    client: &GitHubClient,
    org: &str,
) -> Result<Vec<Repository>, GitHubError> {
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let (repos, has_next) = client.list_org_repos_page(org, page, PAGE_SIZE).await?;
        debug!(org = %org, page, count = repos.len(), "Fetched repository page");
        all.extend(repos);
        if !has_next {
            break;
        }
        page += 1;
    }

    Ok(all)
}
