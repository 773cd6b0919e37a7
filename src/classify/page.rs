use crate::error::{ForkpruneError, Result};
use crate::github::client::GraphQuery;
use crate::github::queries;
use crate::github::types::{Connection, ForksData, RefNode, RefsData, UserNode};
use serde_json::json;

pub const FORKS_PER_PAGE: u32 = 100;

/// One page of `login`'s forks, each carrying its first page of refs.
pub async fn fetch_forks_page(
    api: &dyn GraphQuery,
    login: &str,
    after: Option<&str>,
) -> Result<UserNode> {
    let data = api
        .query(
            &queries::forks_page(),
            json!({ "login": login, "first": FORKS_PER_PAGE, "after": after }),
        )
        .await?;
    let forks: ForksData = serde_json::from_value(data)?;
    forks
        .user
        .ok_or_else(|| ForkpruneError::Decode(format!("no user {login} in response")))
}

/// A continuation page of branch refs for `owner/name`.
pub async fn fetch_refs_page(
    api: &dyn GraphQuery,
    owner: &str,
    name: &str,
    after: Option<&str>,
) -> Result<Connection<RefNode>> {
    let data = api
        .query(
            &queries::refs_page(),
            json!({ "owner": owner, "name": name, "after": after }),
        )
        .await?;
    let refs: RefsData = serde_json::from_value(data)?;
    refs.repository
        .map(|r| r.refs)
        .ok_or_else(|| ForkpruneError::Decode(format!("no repository {owner}/{name} in response")))
}
