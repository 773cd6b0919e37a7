use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PullRequestState {
    Open,
    Closed,
    Merged,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub state: PullRequestState,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

/// The commit a branch points at, reduced to what authorship needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetCommit {
    pub author_email: Option<String>,
    pub committer_email: Option<String>,
    pub committed_via_web: bool,
}

impl TargetCommit {
    /// Web commits are attributed to their author, everything else to the
    /// committer.
    pub fn effective_author_email(&self) -> Option<&str> {
        if self.committed_via_web {
            self.author_email.as_deref()
        } else {
            self.committer_email.as_deref()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub name: String,
    #[serde(skip)]
    pub target: TargetCommit,
    /// In the order GitHub returned them, which is not guaranteed to be
    /// chronological.
    pub pull_requests: Vec<PullRequest>,
}

/// How much unmerged work deleting a fork could lose. Ordered, so a fork's
/// level is the max over its branches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    NoBranches = 0,
    ClosedPullRequests = 1,
    BranchWithoutPullRequest = 2,
    OpenPullRequest = 3,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::NoBranches,
        RiskLevel::ClosedPullRequests,
        RiskLevel::BranchWithoutPullRequest,
        RiskLevel::OpenPullRequest,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskLevel::NoBranches => "no branch from you -> safely removable",
            RiskLevel::ClosedPullRequests => {
                "at most a branch with a CLOSED/MERGED PR -> quite safe, but you may want to check the closed ones"
            }
            RiskLevel::BranchWithoutPullRequest => {
                "a branch with no PR -> could be removed, but check those branches first"
            }
            RiskLevel::OpenPullRequest => {
                "an OPEN PR -> don't remove, or check it if you want to close it (if old)"
            }
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for RiskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

/// One of the user's forks after classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fork {
    pub id: String,
    pub name: String,
    pub name_with_owner: String,
    pub parent: Option<String>,
    pub risk_level: RiskLevel,
    /// Only branches authored by the querying user.
    pub branches: Vec<Branch>,
}

impl Fork {
    pub fn url(&self) -> String {
        format!("https://github.com/{}", self.name_with_owner)
    }

    pub fn branch_url(&self, branch: &str) -> String {
        format!("https://github.com/{}/tree/{branch}", self.name_with_owner)
    }

    /// Where to look before deciding, depending on the level.
    pub fn review_url(&self, login: &str) -> String {
        let parent = match (&self.parent, self.risk_level) {
            (Some(parent), RiskLevel::ClosedPullRequests | RiskLevel::OpenPullRequest) => parent,
            _ => return self.url(),
        };
        let base = format!("https://github.com/{parent}/pulls/{login}");
        if self.risk_level == RiskLevel::ClosedPullRequests {
            format!("{base}?q=is:closed")
        } else {
            base
        }
    }

    /// Creation date of the first listed PR of the first sorted branch.
    pub fn most_recent_pr_date(&self) -> Option<String> {
        self.branches
            .first()
            .and_then(|b| b.pull_requests.first())
            .map(|pr| pr.created_at.format("%Y-%m-%d").to_string())
    }
}
