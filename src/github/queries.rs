/// Refs fetched per page, both embedded and on continuation pages.
const REFS_PER_PAGE: u32 = 50;

const REFS_FRAGMENT: &str = r#"nodes {
  name
  target {
    ... on Commit {
      author { email }
      committer { email }
      committedViaWeb
    }
    oid
  }
  associatedPullRequests(first: 20) {
    nodes {
      state
      url
      createdAt
    }
  }
}
pageInfo {
  endCursor
  hasNextPage
}"#;

pub fn forks_page() -> String {
    format!(
        r#"query getForks($login: String!, $first: Int, $after: String) {{
  user(login: $login) {{
    email
    repositories(first: $first, after: $after, isFork: true) {{
      nodes {{
        id
        name
        nameWithOwner
        parent {{ nameWithOwner }}
        refs(refPrefix: "refs/heads/", first: {REFS_PER_PAGE}) {{
{REFS_FRAGMENT}
        }}
      }}
      pageInfo {{
        endCursor
        hasNextPage
      }}
    }}
  }}
}}"#
    )
}

pub fn refs_page() -> String {
    format!(
        r#"query getOtherRefs($owner: String!, $name: String!, $after: String) {{
  repository(owner: $owner, name: $name) {{
    refs(refPrefix: "refs/heads/", first: {REFS_PER_PAGE}, after: $after) {{
{REFS_FRAGMENT}
    }}
  }}
}}"#
    )
}
