use crate::error::{ForkpruneError, Result};
use octocrab::Octocrab;
use serde_json::{json, Value};

/// A single GraphQL round trip. Returns the `data` member of the response.
#[async_trait::async_trait]
pub trait GraphQuery: Send + Sync {
    async fn query(&self, document: &str, variables: Value) -> Result<Value>;
}

#[async_trait::async_trait]
pub trait RepoDeleter: Send + Sync {
    async fn delete_repo(&self, name_with_owner: &str) -> Result<()>;
}

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        let octo = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(transport_error)?;

        Ok(Self { octo })
    }

    pub async fn rate_limit(&self) -> Option<u32> {
        self.octo
            .ratelimit()
            .get()
            .await
            .ok()
            .map(|r| r.rate.remaining as u32)
    }
}

#[async_trait::async_trait]
impl GraphQuery for GitHubClient {
    async fn query(&self, document: &str, variables: Value) -> Result<Value> {
        let payload = json!({ "query": document, "variables": variables });
        let response: Value = self.octo.graphql(&payload).await.map_err(transport_error)?;
        unwrap_graphql(document, response)
    }
}

#[async_trait::async_trait]
impl RepoDeleter for GitHubClient {
    async fn delete_repo(&self, name_with_owner: &str) -> Result<()> {
        let (owner, name) = name_with_owner.split_once('/').ok_or_else(|| {
            ForkpruneError::Decode(format!("not an owner/name pair: {name_with_owner}"))
        })?;
        self.octo
            .repos(owner, name)
            .delete()
            .await
            .map_err(transport_error)
    }
}

fn transport_error(e: octocrab::Error) -> ForkpruneError {
    match e {
        octocrab::Error::GitHub { source, .. } => ForkpruneError::Transport(source.message),
        other => ForkpruneError::Transport(other.to_string()),
    }
}

/// Splits a 2xx GraphQL body into its data, or the first reported error.
pub(crate) fn unwrap_graphql(document: &str, mut response: Value) -> Result<Value> {
    match response.get("errors") {
        None | Some(Value::Null) => {}
        Some(errors) => {
            let message = errors
                .get(0)
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Failed on query {}", json!(document)));
            return Err(ForkpruneError::Query(message));
        }
    }

    match response.get_mut("data").map(Value::take) {
        Some(Value::Null) | None => Err(ForkpruneError::Decode(
            "response carried no data".to_string(),
        )),
        Some(data) => Ok(data),
    }
}
