use crate::classify::types::{Branch, PullRequest, PullRequestState, RiskLevel, TargetCommit};
use crate::github::types::RefNode;

impl From<RefNode> for Branch {
    fn from(node: RefNode) -> Self {
        let target = TargetCommit {
            author_email: node.target.author.and_then(|a| a.email),
            committer_email: node.target.committer.and_then(|c| c.email),
            committed_via_web: node.target.committed_via_web,
        };
        Branch {
            name: node.name,
            target,
            pull_requests: node.associated_pull_requests.nodes,
        }
    }
}

pub fn branch_level(pull_requests: &[PullRequest]) -> RiskLevel {
    if pull_requests.is_empty() {
        RiskLevel::BranchWithoutPullRequest
    } else if pull_requests
        .iter()
        .any(|pr| pr.state == PullRequestState::Open)
    {
        RiskLevel::OpenPullRequest
    } else {
        RiskLevel::ClosedPullRequests
    }
}

pub fn is_authored_by(branch: &Branch, email: &str) -> bool {
    branch.target.effective_author_email() == Some(email)
}
