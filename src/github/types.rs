//! Wire records for the two GraphQL queries. Every field the pipeline
//! relies on is required, so a malformed response fails to decode instead
//! of flowing through as defaults.

use crate::classify::types::PullRequest;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub nodes: Vec<T>,
    pub page_info: PageInfo,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ForksData {
    pub user: Option<UserNode>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserNode {
    pub email: String,
    pub repositories: Connection<ForkNode>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkNode {
    pub id: String,
    pub name: String,
    pub name_with_owner: String,
    pub parent: Option<ParentNode>,
    pub refs: Connection<RefNode>,
}

impl ForkNode {
    pub fn owner(&self) -> &str {
        self.name_with_owner
            .split_once('/')
            .map(|(owner, _)| owner)
            .unwrap_or(&self.name_with_owner)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentNode {
    pub name_with_owner: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RefsData {
    pub repository: Option<RepositoryNode>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RepositoryNode {
    pub refs: Connection<RefNode>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefNode {
    pub name: String,
    pub target: CommitNode,
    pub associated_pull_requests: PullRequestNodes,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitNode {
    pub author: Option<GitActor>,
    pub committer: Option<GitActor>,
    pub committed_via_web: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GitActor {
    pub email: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PullRequestNodes {
    pub nodes: Vec<PullRequest>,
}
