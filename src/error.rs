use thiserror::Error;

pub const TOKEN_HINT: &str = "Create a GitHub token: https://developer.github.com/v4/guides/forming-calls/#authenticating-with-graphql";

#[derive(Error, Debug)]
pub enum ForkpruneError {
    #[error("github error: {0}")]
    Transport(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("no GitHub token configured")]
    MissingToken,

    #[error("config error: {0}")]
    Config(String),
}

impl ForkpruneError {
    /// Text shown to the user; falls back to the token hint when the
    /// upstream gave us nothing to say.
    pub fn user_message(&self) -> String {
        let detail = match self {
            ForkpruneError::Transport(m)
            | ForkpruneError::Query(m)
            | ForkpruneError::Decode(m)
            | ForkpruneError::Config(m) => m.trim().to_string(),
            ForkpruneError::MissingToken => String::new(),
        };
        if detail.is_empty() {
            TOKEN_HINT.to_string()
        } else {
            detail
        }
    }
}

impl From<serde_json::Error> for ForkpruneError {
    fn from(e: serde_json::Error) -> Self {
        ForkpruneError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ForkpruneError>;
