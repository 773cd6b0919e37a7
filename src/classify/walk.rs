use crate::classify::page::fetch_forks_page;
use crate::classify::reduce::{reduce_fork, ForkMeta};
use crate::classify::refs::collect_refs;
use crate::classify::types::{Branch, Fork};
use crate::error::Result;
use crate::github::client::GraphQuery;

/// Forks pages fetched before giving up on a never-ending listing.
pub const MAX_FORK_PAGES: usize = 100;

/// Classifies every fork `login` owns, in the order GitHub lists them.
///
/// Requests are strictly sequential. Hitting [`MAX_FORK_PAGES`] ends the
/// walk with what was gathered so far; any failed request ends it with that
/// error and nothing else.
#[tracing::instrument(skip(api))]
pub async fn classify_forks(api: &dyn GraphQuery, login: &str) -> Result<Vec<Fork>> {
    let mut classified = Vec::new();
    let mut cursor: Option<String> = None;

    for page_no in 1..=MAX_FORK_PAGES {
        let user = fetch_forks_page(api, login, cursor.as_deref()).await?;
        let page_info = user.repositories.page_info;
        tracing::debug!(page = page_no, forks = user.repositories.nodes.len(), "fetched forks page");

        for node in user.repositories.nodes {
            let owner = node.owner().to_string();
            let meta = ForkMeta {
                id: node.id,
                name: node.name,
                name_with_owner: node.name_with_owner,
                parent: node.parent.map(|p| p.name_with_owner),
            };
            let refs = collect_refs(api, &owner, &meta.name, node.refs).await?;
            let branches: Vec<Branch> = refs.into_iter().map(Branch::from).collect();
            let fork = reduce_fork(meta, branches, &user.email);
            tracing::debug!(fork = %fork.name_with_owner, level = %fork.risk_level, "classified");
            classified.push(fork);
        }

        if !page_info.has_next_page {
            tracing::info!(forks = classified.len(), pages = page_no, "classification done");
            return Ok(classified);
        }
        cursor = page_info.end_cursor;
    }

    tracing::warn!(forks = classified.len(), "forks page cap reached");
    Ok(classified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::fake::ScriptedApi;
    use crate::classify::types::RiskLevel;
    use crate::error::ForkpruneError;
    use crate::test_utils::*;
    use serde_json::json;

    fn single_fork_page(name: &str, has_next: bool) -> serde_json::Value {
        forks_page_json(
            "a@x.com",
            vec![fork_json(name, vec![], page_info_json(None, false))],
            page_info_json(Some(&format!("after-{name}")), has_next),
        )
    }

    #[tokio::test]
    async fn test_walks_all_pages_in_order() {
        let api = ScriptedApi::default();
        api.push_forks(Ok(single_fork_page("one", true)));
        api.push_forks(Ok(single_fork_page("two", true)));
        api.push_forks(Ok(single_fork_page("three", false)));

        let forks = classify_forks(&api, "octo").await.unwrap();
        let names: Vec<&str> = forks.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
        assert_eq!(api.forks_calls(), 3);
    }

    #[tokio::test]
    async fn test_classifies_each_fork_against_user_email() {
        let api = ScriptedApi::default();
        api.push_forks(Ok(forks_page_json(
            "a@x.com",
            vec![
                fork_json("clean", vec![ref_json("main", "up@x.com", &[])], page_info_json(None, false)),
                fork_json(
                    "open",
                    vec![ref_json("fix", "a@x.com", &[("OPEN", "2024-03-01T00:00:00Z")])],
                    page_info_json(None, false),
                ),
                fork_json(
                    "merged",
                    vec![ref_json("feat", "a@x.com", &[("MERGED", "2024-03-01T00:00:00Z")])],
                    page_info_json(None, false),
                ),
            ],
            page_info_json(None, false),
        )));

        let forks = classify_forks(&api, "octo").await.unwrap();
        assert_eq!(forks[0].risk_level, RiskLevel::NoBranches);
        assert_eq!(forks[1].risk_level, RiskLevel::OpenPullRequest);
        assert_eq!(forks[2].risk_level, RiskLevel::ClosedPullRequests);
        assert_eq!(forks[1].parent.as_deref(), Some("up/open"));
        assert_eq!(forks[1].name_with_owner, "octo/open");
    }

    #[tokio::test]
    async fn test_collects_continuation_refs_before_reducing() {
        let api = ScriptedApi::default();
        api.push_forks(Ok(forks_page_json(
            "a@x.com",
            vec![fork_json(
                "big",
                vec![ref_json("theirs", "up@x.com", &[])],
                page_info_json(Some("r0"), true),
            )],
            page_info_json(None, false),
        )));
        api.push_refs(Ok(refs_page_json(
            vec![ref_json("mine", "a@x.com", &[])],
            page_info_json(None, false),
        )));

        let forks = classify_forks(&api, "octo").await.unwrap();
        assert_eq!(forks[0].risk_level, RiskLevel::BranchWithoutPullRequest);
        assert_eq!(forks[0].branches[0].name, "mine");
        assert_eq!(api.refs_cursors(), vec![Some("r0".to_string())]);
    }

    #[tokio::test]
    async fn test_stops_at_page_cap_without_error() {
        let api = ScriptedApi::endless_forks();
        let forks = classify_forks(&api, "octo").await.unwrap();
        assert_eq!(api.forks_calls(), MAX_FORK_PAGES);
        assert_eq!(forks.len(), MAX_FORK_PAGES);
    }

    #[tokio::test]
    async fn test_failure_discards_earlier_pages() {
        let api = ScriptedApi::default();
        for i in 0..4 {
            api.push_forks(Ok(single_fork_page(&format!("ok-{i}"), true)));
        }
        api.push_forks(Err(ForkpruneError::Transport("502 Bad Gateway".to_string())));
        for i in 5..10 {
            api.push_forks(Ok(single_fork_page(&format!("late-{i}"), i < 9)));
        }

        let result = classify_forks(&api, "octo").await;
        assert!(matches!(result, Err(ForkpruneError::Transport(ref m)) if m == "502 Bad Gateway"));
        assert_eq!(api.forks_calls(), 5);
    }

    #[tokio::test]
    async fn test_refs_failure_aborts_walk() {
        let api = ScriptedApi::default();
        api.push_forks(Ok(forks_page_json(
            "a@x.com",
            vec![
                fork_json("small", vec![ref_json("main", "up@x.com", &[])], page_info_json(None, false)),
                fork_json(
                    "big",
                    vec![ref_json("theirs", "up@x.com", &[])],
                    page_info_json(Some("r0"), true),
                ),
            ],
            page_info_json(None, false),
        )));
        api.push_refs(Err(ForkpruneError::Transport("connection reset".to_string())));

        let result = classify_forks(&api, "octo").await;
        assert!(matches!(result, Err(ForkpruneError::Transport(ref m)) if m == "connection reset"));
        assert_eq!(api.refs_calls(), 1);
        assert_eq!(api.forks_calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_required_field_fails_walk() {
        let api = ScriptedApi::default();
        api.push_forks(Ok(json!({
            "user": {
                "email": "a@x.com",
                "repositories": {
                    "nodes": [{ "id": "R_1", "name": "x" }],
                    "pageInfo": { "endCursor": null, "hasNextPage": false }
                }
            }
        })));
        let result = classify_forks(&api, "octo").await;
        assert!(matches!(result, Err(ForkpruneError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unknown_user_fails_walk() {
        let api = ScriptedApi::default();
        api.push_forks(Ok(json!({ "user": null })));
        assert!(matches!(
            classify_forks(&api, "ghost").await,
            Err(ForkpruneError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_rerun_on_same_data_is_identical() {
        let page = forks_page_json(
            "a@x.com",
            vec![fork_json(
                "repo",
                vec![
                    ref_json("b", "a@x.com", &[("CLOSED", "2024-02-01T00:00:00Z")]),
                    ref_json("a", "a@x.com", &[]),
                    ref_json("c", "a@x.com", &[("MERGED", "2024-01-01T00:00:00Z")]),
                ],
                page_info_json(None, false),
            )],
            page_info_json(None, false),
        );
        let api = ScriptedApi::default();
        api.push_forks(Ok(page.clone()));
        api.push_forks(Ok(page));

        let first = classify_forks(&api, "octo").await.unwrap();
        let second = classify_forks(&api, "octo").await.unwrap();
        assert_eq!(first, second);
        let names: Vec<&str> = first[0].branches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }
}
