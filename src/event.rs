use crate::classify::types::Fork;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub struct ClassifyOutcome {
    pub forks: Vec<Fork>,
    pub rate_limit: Option<u32>,
}

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    Classified(Result<ClassifyOutcome, String>),
    Deleted {
        name_with_owner: String,
        result: Result<(), String>,
    },
}

/// Remote work the app asks the event loop to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Classify,
    Delete(String),
}
