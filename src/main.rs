mod app;
mod classify;
mod config;
mod error;
mod event;
mod github;
mod logging;
#[cfg(test)]
mod test_utils;
mod ui;
mod working_set;

use app::App;
use clap::Parser;
use config::{CliOverrides, Config};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::ForkpruneError;
use event::{AppEvent, ClassifyOutcome, Command};
use futures::StreamExt;
use github::client::{GitHubClient, RepoDeleter};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "forkprune", about = "Find which of your GitHub forks are safe to delete")]
struct Cli {
    #[arg(help = "GitHub login whose forks to inspect")]
    login: Option<String>,

    #[arg(long, help = "GitHub token (defaults to GITHUB_TOKEN or the config file)")]
    token: Option<String>,

    #[arg(long, help = "Print the classified forks as JSON and exit")]
    json: bool,

    #[arg(long, help = "Path to config file")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let json = cli.json;
    let config = Config::load(CliOverrides {
        config_file: cli.config,
        login: cli.login,
        token: cli.token,
    });

    if json {
        logging::init_stderr();
    } else if let Err(e) = logging::init_file(&config.resolved_log_file()) {
        eprintln!("warning: file logging disabled: {e}");
    }
    tracing::debug!(?config, "loaded config");

    let (client, login) = match connect(&config) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };

    if json {
        return match classify::classify_forks(&client, &login).await {
            Ok(forks) => {
                println!("{}", serde_json::to_string_pretty(&forks)?);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "classification failed");
                eprintln!("Error: {}", e.user_message());
                std::process::exit(1);
            }
        };
    }

    run_tui(client, login).await
}

fn connect(config: &Config) -> error::Result<(GitHubClient, String)> {
    let token = config.token().ok_or(ForkpruneError::MissingToken)?;
    let login = config
        .login
        .clone()
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| ForkpruneError::Config("no GitHub login given".to_string()))?;
    let client = GitHubClient::new(token)?;
    Ok((client, login))
}

async fn run_tui(
    client: GitHubClient,
    login: String,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(login.clone());

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    let tick_tx = tx.clone();
    let ticker = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    if let Some(cmd) = app.start_classify() {
        dispatch(cmd, &client, &login, &tx);
    }

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        let mut pending = vec![first];
        while let Ok(e) = rx.try_recv() {
            pending.push(e);
        }
        for e in pending {
            if let Some(cmd) = app.handle_event(e) {
                dispatch(cmd, &client, &login, &tx);
            }
        }

        if app.should_quit {
            break;
        }
    }

    ticker.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Runs remote work off the render loop and reports back as an event.
fn dispatch(cmd: Command, client: &GitHubClient, login: &str, tx: &mpsc::UnboundedSender<AppEvent>) {
    let client = client.clone();
    let tx = tx.clone();
    match cmd {
        Command::Classify => {
            let login = login.to_string();
            tokio::spawn(async move {
                let result = match classify::classify_forks(&client, &login).await {
                    Ok(forks) => Ok(ClassifyOutcome {
                        forks,
                        rate_limit: client.rate_limit().await,
                    }),
                    Err(e) => {
                        tracing::error!(error = %e, "classification failed");
                        Err(e.user_message())
                    }
                };
                let _ = tx.send(AppEvent::Classified(result));
            });
        }
        Command::Delete(name_with_owner) => {
            tokio::spawn(async move {
                tracing::info!(fork = %name_with_owner, "deleting fork");
                let result = client
                    .delete_repo(&name_with_owner)
                    .await
                    .map_err(|e| {
                        tracing::error!(fork = %name_with_owner, error = %e, "delete failed");
                        e.user_message()
                    });
                let _ = tx.send(AppEvent::Deleted {
                    name_with_owner,
                    result,
                });
            });
        }
    }
}
