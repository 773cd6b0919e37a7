use crate::classify::branch::{branch_level, is_authored_by};
use crate::classify::types::{Branch, Fork, RiskLevel};
use std::cmp::Ordering;

/// Identity of a fork, as listed on a forks page.
#[derive(Clone, Debug)]
pub struct ForkMeta {
    pub id: String,
    pub name: String,
    pub name_with_owner: String,
    pub parent: Option<String>,
}

/// Classifies one fork from its complete branch list.
///
/// Keeps only the branches `email` authored, puts branches with PRs first
/// (ordered by the first listed PR's creation time) and takes the highest
/// branch level. No authored branch means [`RiskLevel::NoBranches`].
///
/// The first listed PR is not necessarily the oldest one: GitHub does not
/// return associated PRs by creation date, and this does not reorder them.
pub fn reduce_fork(meta: ForkMeta, branches: Vec<Branch>, email: &str) -> Fork {
    let mut mine: Vec<Branch> = branches
        .into_iter()
        .filter(|b| is_authored_by(b, email))
        .collect();
    mine.sort_by(compare_branches);

    let risk_level = mine
        .iter()
        .map(|b| branch_level(&b.pull_requests))
        .max()
        .unwrap_or(RiskLevel::NoBranches);

    Fork {
        id: meta.id,
        name: meta.name,
        name_with_owner: meta.name_with_owner,
        parent: meta.parent,
        risk_level,
        branches: mine,
    }
}

fn compare_branches(a: &Branch, b: &Branch) -> Ordering {
    match (a.pull_requests.first(), b.pull_requests.first()) {
        (Some(pa), Some(pb)) => pa.created_at.cmp(&pb.created_at),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
