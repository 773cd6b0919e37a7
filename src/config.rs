use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub github_token: Option<String>,
    pub login: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("login", &self.login)
            .field("log_file", &self.log_file)
            .finish()
    }
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub login: Option<String>,
    pub token: Option<String>,
}

impl Config {
    pub fn load(cli: CliOverrides) -> Self {
        let config_file = cli
            .config_file
            .clone()
            .unwrap_or_else(|| config_dir().join("forkprune").join("config.toml"));

        let file = config_file.exists().then_some(config_file.as_path());
        match layers(file, &cli).extract() {
            Ok(config) => config,
            Err(e) => {
                // Logging is not set up yet, so this goes straight to stderr.
                eprintln!(
                    "warning: ignoring {} ({e}), using env and command line only",
                    config_file.display()
                );
                layers(None, &cli).extract().unwrap_or_else(|e| {
                    eprintln!("warning: config parse error, using defaults: {e}");
                    Config {
                        github_token: cli.token.clone(),
                        login: cli.login.clone(),
                        ..Config::default()
                    }
                })
            }
        }
    }

    /// The token, if one is set and non-blank.
    pub fn token(&self) -> Option<&str> {
        self.github_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn resolved_log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| config_dir().join("forkprune").join("forkprune.log"))
    }
}

fn layers(file: Option<&Path>, cli: &CliOverrides) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(path) = file {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("FORKPRUNE_")).merge(
        Env::raw()
            .only(&["GITHUB_TOKEN"])
            .map(|_| "github_token".into()),
    );

    if let Some(ref login) = cli.login {
        figment = figment.merge(Serialized::default("login", login));
    }
    if let Some(ref token) = cli.token {
        figment = figment.merge(Serialized::default("github_token", token));
    }
    figment
}

pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
