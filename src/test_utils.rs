#![cfg(test)]

use crate::classify::types::*;
use chrono::TimeZone;
use serde_json::{json, Value};

pub fn make_target(author: Option<&str>, committer: Option<&str>, via_web: bool) -> TargetCommit {
    TargetCommit {
        author_email: author.map(str::to_string),
        committer_email: committer.map(str::to_string),
        committed_via_web: via_web,
    }
}

/// A PR created `day` days into 2024.
pub fn make_pr(state: PullRequestState, day: u32) -> PullRequest {
    PullRequest {
        state,
        url: format!("https://github.com/up/repo/pull/{day}"),
        created_at: chrono::Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap()
            + chrono::Duration::days(day as i64),
    }
}

pub fn make_branch(name: &str, target: TargetCommit, prs: Vec<PullRequest>) -> Branch {
    Branch {
        name: name.to_string(),
        target,
        pull_requests: prs,
    }
}

pub fn make_fork(name_with_owner: &str, parent: Option<&str>, level: RiskLevel) -> Fork {
    let name = name_with_owner
        .split_once('/')
        .map(|(_, n)| n)
        .unwrap_or(name_with_owner);
    Fork {
        id: format!("R_{name}"),
        name: name.to_string(),
        name_with_owner: name_with_owner.to_string(),
        parent: parent.map(str::to_string),
        risk_level: level,
        branches: Vec::new(),
    }
}

/// JSON for one ref node, committed locally by `committer`.
pub fn ref_json(name: &str, committer: &str, prs: &[(&str, &str)]) -> Value {
    let nodes: Vec<Value> = prs
        .iter()
        .map(|(state, created_at)| {
            json!({
                "state": state,
                "url": format!("https://github.com/up/repo/pull/{name}"),
                "createdAt": created_at,
            })
        })
        .collect();
    json!({
        "name": name,
        "target": {
            "author": { "email": committer },
            "committer": { "email": committer },
            "committedViaWeb": false,
            "oid": "0000000000000000000000000000000000000000",
        },
        "associatedPullRequests": { "nodes": nodes },
    })
}

pub fn page_info_json(cursor: Option<&str>, has_next: bool) -> Value {
    json!({ "endCursor": cursor, "hasNextPage": has_next })
}

pub fn fork_json(name: &str, refs: Vec<Value>, refs_page_info: Value) -> Value {
    json!({
        "id": format!("R_{name}"),
        "name": name,
        "nameWithOwner": format!("octo/{name}"),
        "parent": { "nameWithOwner": format!("up/{name}") },
        "refs": { "nodes": refs, "pageInfo": refs_page_info },
    })
}

pub fn forks_page_json(email: &str, forks: Vec<Value>, page_info: Value) -> Value {
    json!({
        "user": {
            "email": email,
            "repositories": { "nodes": forks, "pageInfo": page_info },
        }
    })
}

pub fn refs_page_json(refs: Vec<Value>, page_info: Value) -> Value {
    json!({ "repository": { "refs": { "nodes": refs, "pageInfo": page_info } } })
}
